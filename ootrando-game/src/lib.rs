// The changes suggested by this lint usually make the code more cluttered and less clear:
#![allow(clippy::needless_range_loop)]

pub mod location_table;

use anyhow::{Context, Result, bail, ensure};
use hashbrown::{HashMap, HashSet};
use log::info;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::borrow::ToOwned;
use std::hash::Hash;
use strum_macros::{Display, EnumString, VariantNames};

pub use location_table::{BUSINESS_SCRUBS, LOCATION_TABLE};

pub type SceneId = u8; // 8-bit scene id; 0xFF = non-scene pseudo-location, 0xE0.. = virtual grotto scenes
pub type SceneFlag = u8; // per-scene flag (chest flag, collectible-flag index, GS bit, cutscene flag)
pub type ActorIdx = u16; // index into a scene setup's actor table
pub type RomAddr = u32; // direct ROM byte offset
pub type LocationId = usize; // registration-order index into LocationRegistry::iter()

/// Base of the shop-item byte region in ROM. Each shop occupies 0x40 bytes,
/// each shelf slot 8 bytes.
pub const SHOP_ITEM_BASE: RomAddr = 0xC71ED0;

/// Number of 0x40-byte shop blocks in the recognized shop-item region.
/// Shop ids used by the registry: 0 (KF Shop), 1 (Kak Potion), 2 (Market
/// Bombchu), 3 (Market Potion), 4 (Market Bazaar), 5 (Kak Bazaar),
/// 7 (ZD Shop), 8 (Goron Shop), 10 (Market Mask Shop).
pub const NUM_SHOP_IDS: u8 = 11;

pub const NUM_SHOP_SHELVES: u8 = 8;

/// ROM offset of a shop shelf slot.
pub const fn shop_address(shop_id: u8, shelf_id: u8) -> RomAddr {
    SHOP_ITEM_BASE + 0x40 * shop_id as RomAddr + 0x08 * shelf_id as RomAddr
}

/// The 12 dungeon names recognized by the `dungeon` group index.
pub const DUNGEON_NAMES: [&str; 12] = [
    "Deku Tree",
    "Dodongos Cavern",
    "Jabu Jabus Belly",
    "Forest Temple",
    "Fire Temple",
    "Water Temple",
    "Spirit Temple",
    "Shadow Temple",
    "Bottom of the Well",
    "Ice Cavern",
    "Gerudo Training Grounds",
    "Ganons Castle",
];

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
    Serialize,
    Deserialize,
    PartialOrd,
    Ord,
)]
pub enum LocationKind {
    Chest,
    Collectable,
    Freestanding,
    ActorOverride,
    RupeeTower,
    Pot,
    FlyingPot,
    Crate,
    SmallCrate,
    Beehive,
    Wonderitem,
    Scrub,
    GrottoScrub,
    #[strum(serialize = "NPC")]
    #[serde(rename = "NPC")]
    Npc,
    Song,
    Cutscene,
    Boss,
    BossHeart,
    #[strum(serialize = "GS Token")]
    #[serde(rename = "GS Token")]
    GSToken,
    Shop,
    MaskShop,
    SilverRupee,
    Event,
    Drop,
    Hint,
    HintStone,
}

impl LocationKind {
    /// Pseudo-kinds participate in the reachability graph but are never
    /// patched into ROM and carry no scene, default, or addresses.
    pub fn is_pseudo(self) -> bool {
        matches!(
            self,
            LocationKind::Event | LocationKind::Drop | LocationKind::Hint | LocationKind::HintStone
        )
    }
}

/// The "chest-size-matches-contents" appearance setting, as parsed from the
/// settings layer by collaborators.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumString, VariantNames, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChestAppearance {
    Off,
    Textures,
    Both,
    Classic,
}

/// One of the four actor-table variants of a scene.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[repr(u8)]
pub enum SceneSetup {
    ChildDay = 0,
    ChildNight = 1,
    AdultDay = 2,
    AdultNight = 3,
}

/// Variant-shaped `default` payload of a location definition.
///
/// `Collectible` is the tuple4 shape used by rupee-tower drops (and other
/// multi-drop spawners), where the 4th element is a 1-based sub id
/// distinguishing drops that share a spawner. `Multi` lists coordinate
/// entries for locations that manifest in multiple scene setups or rooms;
/// all members denote the same in-memory flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DefaultDef {
    None,
    Flag(SceneFlag),
    Coord(u8, u8, ActorIdx),
    Collectible(u8, u8, ActorIdx, u8),
    Multi(&'static [DefaultDef]),
}

/// ROM-address payload of a location definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RomAddrs {
    None,
    Single(RomAddr),
    Pair(RomAddr, RomAddr),
    List(&'static [RomAddr]),
}

impl RomAddrs {
    /// The primary (first) ROM offset, if any.
    pub fn first(&self) -> Option<RomAddr> {
        match *self {
            RomAddrs::None => None,
            RomAddrs::Single(a) => Some(a),
            RomAddrs::Pair(a, _) => Some(a),
            RomAddrs::List(addrs) => addrs.first().copied(),
        }
    }
}

/// A single row of the literal location table.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct LocationDef {
    pub name: &'static str,
    pub kind: LocationKind,
    pub scene: Option<SceneId>,
    pub default: DefaultDef,
    pub addresses: RomAddrs,
    pub vanilla_item: Option<&'static str>,
    pub tags: &'static [&'static str],
}

/// Uniform coordinate shape produced by the `default` normalizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneCoord {
    pub room: u8,
    pub setup: SceneSetup,
    pub actor_idx: ActorIdx,
    pub sub_id: Option<u8>,
}

fn scene_coord(room: u8, setup: u8, actor_idx: ActorIdx, sub_id: Option<u8>) -> Result<SceneCoord> {
    let setup = SceneSetup::try_from(setup)
        .map_err(|_| anyhow::anyhow!("setup index {} out of range 0..4", setup))?;
    if let Some(sub_id) = sub_id {
        ensure!(
            (1..=8).contains(&sub_id),
            "collectible sub id {} out of range 1..9",
            sub_id
        );
    }
    Ok(SceneCoord {
        room,
        setup,
        actor_idx,
        sub_id,
    })
}

/// Normalizes the heterogeneous `default` payload into a uniform coordinate
/// sequence. Flag-shaped (and absent) defaults normalize to the empty
/// sequence; their flag is exposed through [`default_flag`].
pub fn normalize_default(def: &DefaultDef) -> Result<Vec<SceneCoord>> {
    match *def {
        DefaultDef::None | DefaultDef::Flag(_) => Ok(vec![]),
        DefaultDef::Coord(room, setup, idx) => Ok(vec![scene_coord(room, setup, idx, None)?]),
        DefaultDef::Collectible(room, setup, idx, sub) => {
            Ok(vec![scene_coord(room, setup, idx, Some(sub))?])
        }
        DefaultDef::Multi(entries) => {
            ensure!(!entries.is_empty(), "empty coordinate list");
            let mut coords = Vec::with_capacity(entries.len());
            for entry in entries {
                match *entry {
                    DefaultDef::Coord(room, setup, idx) => {
                        coords.push(scene_coord(room, setup, idx, None)?);
                    }
                    DefaultDef::Collectible(room, setup, idx, sub) => {
                        coords.push(scene_coord(room, setup, idx, Some(sub))?);
                    }
                    _ => bail!("coordinate list entries must be tuple3 or tuple4 shapes"),
                }
            }
            Ok(coords)
        }
    }
}

/// The single-flag view of a `default` payload.
pub fn default_flag(def: &DefaultDef) -> Option<SceneFlag> {
    match *def {
        DefaultDef::Flag(flag) => Some(flag),
        _ => None,
    }
}

/// Bitset over interned tag ids. The tag vocabulary is small (~120 strings),
/// so two words suffice; exceeding the capacity is a construction error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet([u64; 2]);

impl TagSet {
    pub const CAPACITY: usize = 128;

    pub fn insert(&mut self, tag_id: usize) {
        assert!(tag_id < Self::CAPACITY);
        self.0[tag_id / 64] |= 1 << (tag_id % 64);
    }

    pub fn contains(&self, tag_id: usize) -> bool {
        tag_id < Self::CAPACITY && self.0[tag_id / 64] & (1 << (tag_id % 64)) != 0
    }

    pub fn intersects(&self, other: &TagSet) -> bool {
        self.0[0] & other.0[0] != 0 || self.0[1] & other.0[1] != 0
    }
}

#[derive(Default, Clone)]
pub struct IndexedVec<T: Hash + Eq> {
    pub keys: Vec<T>,
    pub index_by_key: HashMap<T, usize>,
}

impl<T: Hash + Eq> IndexedVec<T> {
    pub fn add<U: ToOwned<Owned = T> + ?Sized>(&mut self, key: &U) -> usize {
        if let Some(&idx) = self.index_by_key.get(&key.to_owned()) {
            return idx;
        }
        let idx = self.keys.len();
        self.index_by_key.insert(key.to_owned(), idx);
        self.keys.push(key.to_owned());
        idx
    }

    pub fn index_of<U: ToOwned<Owned = T> + ?Sized>(&self, key: &U) -> Option<usize> {
        self.index_by_key.get(&key.to_owned()).copied()
    }
}

/// A validated, frozen location record.
#[derive(Clone, Debug, Serialize)]
pub struct Location {
    pub name: &'static str,
    pub index: LocationId,
    pub kind: LocationKind,
    pub scene: Option<SceneId>,
    pub addresses: RomAddrs,
    pub vanilla_item: Option<&'static str>,
    default: DefaultDef,
    #[serde(skip)]
    coords: Vec<SceneCoord>,
    tags: &'static [&'static str],
    #[serde(skip)]
    tag_set: TagSet,
}

impl Location {
    /// The original variant-shaped `default` payload.
    pub fn default_def(&self) -> &DefaultDef {
        &self.default
    }

    /// The flag view of `default`; `None` for coordinate-shaped payloads.
    pub fn flag(&self) -> Option<SceneFlag> {
        default_flag(&self.default)
    }

    /// The normalized coordinate view of `default`; empty for flag-shaped
    /// payloads.
    pub fn scene_coords(&self) -> &[SceneCoord] {
        &self.coords
    }

    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

/// Collaborator handle for the one world-coupled special case in
/// [`LocationRegistry::is_viewable`].
pub trait BigOctoHint {
    fn bigocto_location(&self) -> Option<&str>;
}

/// Transaction descriptor for one business scrub: merchant flag, price,
/// dialog text id, and the two dialog fragments substituted when scrub
/// shuffle replaces the concrete item name.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct BusinessScrub {
    pub flag: u8,
    pub price: u16,
    pub text_id: u16,
    pub text_replacement: [&'static str; 2],
}

/// The four `(scene, kind)` specials folded into the `can_see` group:
/// treasure-chest-shop chests, bombchu bowling prizes, and the two
/// ocarina-triggered field items.
const CAN_SEE_SCENE_KINDS: [(SceneId, LocationKind); 4] = [
    (0x10, LocationKind::Chest),
    (0x4B, LocationKind::Npc),
    (0x51, LocationKind::Npc),
    (0x5B, LocationKind::Npc),
];

const BOSS_LIKE_EXTRA: &str = "ToT Reward from Rauru";

fn kind_can_see(kind: LocationKind) -> bool {
    matches!(
        kind,
        LocationKind::Collectable
            | LocationKind::BossHeart
            | LocationKind::GSToken
            | LocationKind::Shop
            | LocationKind::MaskShop
            | LocationKind::Freestanding
            | LocationKind::ActorOverride
            | LocationKind::RupeeTower
            | LocationKind::Pot
            | LocationKind::Crate
            | LocationKind::FlyingPot
            | LocationKind::SmallCrate
            | LocationKind::Beehive
            | LocationKind::SilverRupee
    )
}

/// The frozen location registry: every in-world item placement the
/// randomizer can manipulate, in registration order, plus the derived group
/// indexes. Constructed once from [`LOCATION_TABLE`] and immutable
/// thereafter; freely sharable across worker threads.
pub struct LocationRegistry {
    locations: Vec<Location>,
    index_by_name: HashMap<&'static str, LocationId>,
    pub tag_isv: IndexedVec<String>,
    by_kind: HashMap<LocationKind, Vec<LocationId>>,
    boss_like: Vec<LocationId>,
    collectable_like: Vec<LocationId>,
    can_see: Vec<LocationId>,
    can_see_set: HashSet<LocationId>,
    dungeon: Vec<LocationId>,
    dungeon_tags: TagSet,
}

impl LocationRegistry {
    pub fn new() -> Result<Self> {
        let mut registry = LocationRegistry {
            locations: Vec::with_capacity(LOCATION_TABLE.len()),
            index_by_name: HashMap::with_capacity(LOCATION_TABLE.len()),
            tag_isv: IndexedVec::default(),
            by_kind: HashMap::new(),
            boss_like: vec![],
            collectable_like: vec![],
            can_see: vec![],
            can_see_set: HashSet::new(),
            dungeon: vec![],
            dungeon_tags: TagSet::default(),
        };
        // Reserve the dungeon tag ids up front so the dungeon bitset is
        // independent of which dungeon happens to be tagged first.
        for name in DUNGEON_NAMES {
            let tag_id = registry.tag_isv.add(name);
            registry.dungeon_tags.insert(tag_id);
        }
        for def in LOCATION_TABLE {
            registry
                .add_location(def)
                .with_context(|| format!("location '{}'", def.name))?;
        }
        registry.index_groups();
        info!(
            "Built location registry: {} locations, {} tags",
            registry.locations.len(),
            registry.tag_isv.keys.len()
        );
        Ok(registry)
    }

    fn add_location(&mut self, def: &'static LocationDef) -> Result<()> {
        ensure!(
            !self.index_by_name.contains_key(def.name),
            "duplicate location name"
        );
        validate_kind_rules(def)?;
        let coords = normalize_default(&def.default).context("malformed default payload")?;
        let mut tag_set = TagSet::default();
        for tag in def.tags {
            let tag_id = self.tag_isv.add(*tag);
            ensure!(tag_id < TagSet::CAPACITY, "tag vocabulary overflow");
            tag_set.insert(tag_id);
        }
        let index = self.locations.len();
        self.index_by_name.insert(def.name, index);
        self.locations.push(Location {
            name: def.name,
            index,
            kind: def.kind,
            scene: def.scene,
            addresses: def.addresses,
            vanilla_item: def.vanilla_item,
            default: def.default,
            coords,
            tags: def.tags,
            tag_set,
        });
        Ok(())
    }

    fn index_groups(&mut self) {
        for loc in &self.locations {
            self.by_kind.entry(loc.kind).or_default().push(loc.index);
            if loc.kind == LocationKind::Boss || loc.name == BOSS_LIKE_EXTRA {
                self.boss_like.push(loc.index);
            }
            if matches!(
                loc.kind,
                LocationKind::Collectable
                    | LocationKind::BossHeart
                    | LocationKind::GSToken
                    | LocationKind::SilverRupee
            ) {
                self.collectable_like.push(loc.index);
            }
            let special = loc
                .scene
                .is_some_and(|scene| CAN_SEE_SCENE_KINDS.contains(&(scene, loc.kind)));
            if kind_can_see(loc.kind) || special {
                self.can_see.push(loc.index);
                self.can_see_set.insert(loc.index);
            }
            if loc.tag_set.intersects(&self.dungeon_tags) {
                self.dungeon.push(loc.index);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.index_by_name.get(name).map(|&idx| &self.locations[idx])
    }

    /// All records in registration order, the canonical sort for spoiler
    /// listings.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    fn resolve<'a>(&'a self, ids: &'a [LocationId]) -> impl Iterator<Item = &'a Location> {
        ids.iter().map(move |&idx| &self.locations[idx])
    }

    pub fn by_kind(&self, kind: LocationKind) -> impl Iterator<Item = &Location> {
        static EMPTY: Vec<LocationId> = Vec::new();
        self.resolve(self.by_kind.get(&kind).unwrap_or(&EMPTY))
    }

    /// Kind `Boss` plus "ToT Reward from Rauru".
    pub fn boss_like(&self) -> impl Iterator<Item = &Location> {
        self.resolve(&self.boss_like)
    }

    /// Kinds `Collectable`, `BossHeart`, `GS Token`, `SilverRupee`.
    pub fn collectable_like(&self) -> impl Iterator<Item = &Location> {
        self.resolve(&self.collectable_like)
    }

    /// Locations whose in-world appearance is visible to the player.
    pub fn can_see(&self) -> impl Iterator<Item = &Location> {
        self.resolve(&self.can_see)
    }

    /// Records whose tag set intersects the 12 dungeon names.
    pub fn dungeon_locations(&self) -> impl Iterator<Item = &Location> {
        self.resolve(&self.dungeon)
    }

    /// Whether a location's in-world appearance must be patched for the
    /// chest-size-matches-contents feature. Total; never fails.
    pub fn is_viewable(
        &self,
        loc: &Location,
        chest_appearance: ChestAppearance,
        fast_chests: bool,
        world: Option<&dyn BigOctoHint>,
    ) -> bool {
        if loc.kind == LocationKind::Chest
            && (matches!(
                chest_appearance,
                ChestAppearance::Textures | ChestAppearance::Both | ChestAppearance::Classic
            ) || !fast_chests)
        {
            return true;
        }
        if self.can_see_set.contains(&loc.index) {
            return true;
        }
        if let Some(world) = world {
            if world.bigocto_location() == Some(loc.name) {
                return true;
            }
        }
        false
    }

    pub fn business_scrubs(&self) -> &'static [BusinessScrub] {
        BUSINESS_SCRUBS
    }
}

fn validate_kind_rules(def: &LocationDef) -> Result<()> {
    use LocationKind::*;
    let has_default = !matches!(def.default, DefaultDef::None);
    match def.kind {
        Event | Drop | Hint | HintStone => {
            ensure!(
                def.scene.is_none() && !has_default && matches!(def.addresses, RomAddrs::None),
                "pseudo-location must not carry scene, default, or addresses"
            );
        }
        Song => {
            ensure!(has_default, "song requires a default");
            match def.addresses {
                RomAddrs::Pair(_, _) => {}
                _ => bail!("song requires a pair of ROM offsets"),
            }
        }
        Shop | MaskShop => {
            ensure!(def.scene.is_some(), "shop requires a scene");
            ensure!(has_default, "shop requires a default");
            let addr = def
                .addresses
                .first()
                .context("shop requires a resolvable first address")?;
            ensure!(
                addr >= SHOP_ITEM_BASE && addr < SHOP_ITEM_BASE + 0x40 * NUM_SHOP_IDS as RomAddr,
                "shop address {:#X} outside the recognized shop-byte region",
                addr
            );
            // 8 shelves of 8 bytes fill each 0x40 block, so slot alignment is
            // the only remaining degree of freedom.
            ensure!(
                (addr - SHOP_ITEM_BASE) % 0x08 == 0,
                "shop address {:#X} not aligned to a shelf slot",
                addr
            );
        }
        Cutscene => {
            ensure!(has_default, "cutscene requires a default");
        }
        GrottoScrub => {
            let scene = def.scene.context("grotto scrub requires a scene")?;
            ensure!(
                scene >= 0xE0,
                "grotto scrub requires a grotto pseudo-scene id (>= 0xE0), got {:#X}",
                scene
            );
            ensure!(has_default, "grotto scrub requires a default");
        }
        RupeeTower => {
            ensure!(def.scene.is_some(), "rupee tower requires a scene");
            ensure!(has_default, "rupee tower requires a default");
            for coord in normalize_default(&def.default)? {
                ensure!(
                    coord.sub_id.is_some(),
                    "rupee tower coordinates require a collectible sub id"
                );
            }
        }
        _ => {
            ensure!(def.scene.is_some(), "{} requires a scene", def.kind);
            ensure!(has_default, "{} requires a default", def.kind);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_address() {
        assert_eq!(shop_address(0, 0), 0xC71ED0);
        assert_eq!(shop_address(0, 7), 0xC71ED0 + 0x38);
        assert_eq!(shop_address(1, 0), 0xC71F10);
        assert_eq!(shop_address(10, 7), 0xC71ED0 + 0x40 * 10 + 0x38);
    }

    #[test]
    fn test_normalize_flag_is_empty() {
        let coords = normalize_default(&DefaultDef::Flag(0x26)).unwrap();
        assert!(coords.is_empty());
        assert_eq!(default_flag(&DefaultDef::Flag(0x26)), Some(0x26));
    }

    #[test]
    fn test_normalize_rejects_bad_setup() {
        assert!(normalize_default(&DefaultDef::Coord(0, 4, 12)).is_err());
    }

    #[test]
    fn test_normalize_rejects_bad_sub_id() {
        assert!(normalize_default(&DefaultDef::Collectible(0, 2, 12, 0)).is_err());
        assert!(normalize_default(&DefaultDef::Collectible(0, 2, 12, 9)).is_err());
        assert!(normalize_default(&DefaultDef::Collectible(0, 2, 12, 1)).is_ok());
    }

    #[test]
    fn test_normalize_rejects_nested_list() {
        const INNER: &[DefaultDef] = &[DefaultDef::Coord(0, 0, 1)];
        const OUTER: &[DefaultDef] = &[DefaultDef::Multi(INNER)];
        assert!(normalize_default(&DefaultDef::Multi(OUTER)).is_err());
    }

    #[test]
    fn test_kind_rules_reject_pseudo_with_scene() {
        let def = LocationDef {
            name: "Bogus Event",
            kind: LocationKind::Event,
            scene: Some(0x51),
            default: DefaultDef::None,
            addresses: RomAddrs::None,
            vanilla_item: None,
            tags: &[],
        };
        assert!(validate_kind_rules(&def).is_err());
    }

    #[test]
    fn test_kind_rules_reject_song_without_pair() {
        let def = LocationDef {
            name: "Bogus Song",
            kind: LocationKind::Song,
            scene: Some(0xFF),
            default: DefaultDef::Flag(0x20),
            addresses: RomAddrs::Single(0x2E8E925),
            vanilla_item: None,
            tags: &[],
        };
        assert!(validate_kind_rules(&def).is_err());
    }

    #[test]
    fn test_kind_rules_reject_shop_outside_region() {
        let def = LocationDef {
            name: "Bogus Shop Item",
            kind: LocationKind::Shop,
            scene: Some(0x2D),
            default: DefaultDef::Flag(0x30),
            addresses: RomAddrs::Single(0xC71ED4),
            vanilla_item: None,
            tags: &[],
        };
        assert!(validate_kind_rules(&def).is_err());
    }

    #[test]
    fn test_kind_rules_bound_shop_region() {
        let mut def = LocationDef {
            name: "Bogus Shop Item",
            kind: LocationKind::Shop,
            scene: Some(0x2D),
            default: DefaultDef::Flag(0x30),
            // Aligned to a shelf slot, but one full block past the last shop.
            addresses: RomAddrs::Single(shop_address(NUM_SHOP_IDS, 0)),
            vanilla_item: None,
            tags: &[],
        };
        assert!(validate_kind_rules(&def).is_err());
        def.addresses = RomAddrs::Single(shop_address(NUM_SHOP_IDS - 1, NUM_SHOP_SHELVES - 1));
        assert!(validate_kind_rules(&def).is_ok());
    }

    #[test]
    fn test_kind_rules_reject_grotto_scrub_with_real_scene() {
        let def = LocationDef {
            name: "Bogus Grotto Scrub",
            kind: LocationKind::GrottoScrub,
            scene: Some(0x3E),
            default: DefaultDef::Flag(0x30),
            addresses: RomAddrs::None,
            vanilla_item: None,
            tags: &[],
        };
        assert!(validate_kind_rules(&def).is_err());
    }

    #[test]
    fn test_kind_names_round_trip() {
        use std::str::FromStr;
        assert_eq!(LocationKind::GSToken.to_string(), "GS Token");
        assert_eq!(LocationKind::from_str("GS Token").unwrap(), LocationKind::GSToken);
        assert_eq!(LocationKind::from_str("NPC").unwrap(), LocationKind::Npc);
        assert_eq!(
            ChestAppearance::from_str("textures").unwrap(),
            ChestAppearance::Textures
        );
    }

    #[test]
    fn test_tag_set() {
        let mut tags = TagSet::default();
        tags.insert(3);
        tags.insert(100);
        assert!(tags.contains(3));
        assert!(tags.contains(100));
        assert!(!tags.contains(4));
        let mut other = TagSet::default();
        other.insert(100);
        assert!(tags.intersects(&other));
    }
}
