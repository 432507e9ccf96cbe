//! The embedded literal declaration of every location the randomizer can
//! manipulate, in registration order, plus the business-scrub table.
//!
//! Rows are built through kind-specific `const fn` constructors so the table
//! stays one line per record and shape mistakes surface at compile time;
//! the remaining schema rules are enforced by `LocationRegistry::new`.

use crate::{
    shop_address, BusinessScrub, DefaultDef, LocationDef, LocationKind, RomAddr, RomAddrs, SceneId,
};

const fn chest(
    name: &'static str,
    scene: SceneId,
    flag: u8,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Chest,
        scene: Some(scene),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags,
    }
}

const fn collectable(
    name: &'static str,
    scene: SceneId,
    flag: u8,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Collectable,
        scene: Some(scene),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags,
    }
}

const fn gs(
    name: &'static str,
    scene: SceneId,
    bit: u8,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::GSToken,
        scene: Some(scene),
        default: DefaultDef::Flag(bit),
        addresses: RomAddrs::None,
        vanilla_item: Some("Gold Skulltula Token"),
        tags,
    }
}

const fn scrub(
    name: &'static str,
    scene: SceneId,
    flag: u8,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Scrub,
        scene: Some(scene),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags,
    }
}

const fn grotto_scrub(
    name: &'static str,
    grotto: SceneId,
    flag: u8,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::GrottoScrub,
        scene: Some(grotto),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags,
    }
}

const fn npc(
    name: &'static str,
    scene: SceneId,
    flag: u8,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Npc,
        scene: Some(scene),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags,
    }
}

const fn song(
    name: &'static str,
    flag: u8,
    addr_a: RomAddr,
    addr_b: RomAddr,
    item: &'static str,
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Song,
        scene: Some(0xFF),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::Pair(addr_a, addr_b),
        vanilla_item: Some(item),
        tags: &["Songs"],
    }
}

const fn cutscene(
    name: &'static str,
    flag: u8,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Cutscene,
        scene: Some(0xFF),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags,
    }
}

const fn boss(
    name: &'static str,
    scene: SceneId,
    flag: u8,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Boss,
        scene: Some(scene),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags,
    }
}

const fn boss_heart(
    name: &'static str,
    scene: SceneId,
    flag: u8,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::BossHeart,
        scene: Some(scene),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::None,
        vanilla_item: Some("Heart Container"),
        tags,
    }
}

const fn shop(
    name: &'static str,
    scene: SceneId,
    flag: u8,
    shop_id: u8,
    shelf_id: u8,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Shop,
        scene: Some(scene),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::Single(shop_address(shop_id, shelf_id)),
        vanilla_item: Some(item),
        tags,
    }
}

const fn mask_shop(
    name: &'static str,
    flag: u8,
    shelf_id: u8,
    item: &'static str,
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::MaskShop,
        scene: Some(0x33),
        default: DefaultDef::Flag(flag),
        addresses: RomAddrs::Single(shop_address(10, shelf_id)),
        vanilla_item: Some(item),
        tags: &["Market", "Shops", "Masks"],
    }
}

// Coordinate-shaped kinds (Freestanding, Pot, FlyingPot, Crate, SmallCrate,
// Beehive, Wonderitem, RupeeTower, SilverRupee, ActorOverride) share one row
// shape.
const fn scene_actor(
    name: &'static str,
    kind: LocationKind,
    scene: SceneId,
    default: DefaultDef,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind,
        scene: Some(scene),
        default,
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags,
    }
}

const fn actor_override(
    name: &'static str,
    scene: SceneId,
    default: DefaultDef,
    addresses: RomAddrs,
    item: &'static str,
    tags: &'static [&'static str],
) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::ActorOverride,
        scene: Some(scene),
        default,
        addresses,
        vanilla_item: Some(item),
        tags,
    }
}

const fn event(name: &'static str, item: &'static str) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Event,
        scene: None,
        default: DefaultDef::None,
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags: &[],
    }
}

const fn drop_item(name: &'static str, item: &'static str) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Drop,
        scene: None,
        default: DefaultDef::None,
        addresses: RomAddrs::None,
        vanilla_item: Some(item),
        tags: &[],
    }
}

const fn hint(name: &'static str) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::Hint,
        scene: None,
        default: DefaultDef::None,
        addresses: RomAddrs::None,
        vanilla_item: None,
        tags: &[],
    }
}

const fn hint_stone(name: &'static str) -> LocationDef {
    LocationDef {
        name,
        kind: LocationKind::HintStone,
        scene: None,
        default: DefaultDef::None,
        addresses: RomAddrs::None,
        vanilla_item: None,
        tags: &["Gossip Stones"],
    }
}

use DefaultDef::{Collectible, Coord, Multi};
use LocationKind::{
    Beehive, Collectable, Crate, FlyingPot, Freestanding, Pot, RupeeTower, SilverRupee, SmallCrate,
    Wonderitem,
};

pub static LOCATION_TABLE: &[LocationDef] = &[
    // Dungeon rewards
    cutscene("Links Pocket", 0x4E, "Light Medallion", &["Dungeon Rewards"]),
    boss("Queen Gohma", 0x11, 0x65, "Kokiri Emerald", &["Dungeon Rewards", "Deku Tree"]),
    boss("King Dodongo", 0x12, 0x65, "Goron Ruby", &["Dungeon Rewards", "Dodongos Cavern"]),
    boss("Barinade", 0x13, 0x65, "Zora Sapphire", &["Dungeon Rewards", "Jabu Jabus Belly"]),
    boss("Phantom Ganon", 0x14, 0x65, "Forest Medallion", &["Dungeon Rewards", "Forest Temple"]),
    boss("Volvagia", 0x15, 0x65, "Fire Medallion", &["Dungeon Rewards", "Fire Temple"]),
    boss("Morpha", 0x16, 0x65, "Water Medallion", &["Dungeon Rewards", "Water Temple"]),
    boss("Bongo Bongo", 0x18, 0x65, "Shadow Medallion", &["Dungeon Rewards", "Shadow Temple"]),
    boss("Twinrova", 0x17, 0x65, "Spirit Medallion", &["Dungeon Rewards", "Spirit Temple"]),
    cutscene("ToT Reward from Rauru", 0x4D, "Light Medallion", &["Dungeon Rewards", "Temple of Time"]),
    event("Ganon", "Triforce"),
    // Songs
    song("Song from Impa", 0x26, 0x2E8E925, 0x2E8E925, "Zeldas Lullaby"),
    song("Song from Malon", 0x27, 0x0D7EB53, 0x0D7EBCF, "Eponas Song"),
    song("Song from Saria", 0x28, 0x20B1DB1, 0x20B1DB1, "Sarias Song"),
    song("Song from Royal Familys Tomb", 0x29, 0x332A871, 0x332A871, "Suns Song"),
    song("Song from Ocarina of Time", 0x2A, 0x252FC89, 0x252FC89, "Song of Time"),
    song("Song from Windmill", 0x2B, 0x0E42C07, 0x0E42B8B, "Song of Storms"),
    song("Sheik in Forest", 0x20, 0x20B0809, 0x20B0809, "Minuet of Forest"),
    song("Sheik in Crater", 0x21, 0x224D7F1, 0x224D7F1, "Bolero of Fire"),
    song("Sheik in Ice Cavern", 0x22, 0x2BEC889, 0x2BEC895, "Serenade of Water"),
    song("Sheik at Colossus", 0x23, 0x218C57D, 0x218C57D, "Requiem of Spirit"),
    song("Sheik in Kakariko", 0x24, 0x2000FE1, 0x2000FED, "Nocturne of Shadow"),
    song("Sheik at Temple", 0x25, 0x2531329, 0x2531335, "Prelude of Light"),
    // Kokiri Forest
    chest("KF Midos Top Left Chest", 0x28, 0x00, "Rupees (5)", &["Kokiri Forest", "Forest"]),
    chest("KF Midos Top Right Chest", 0x28, 0x01, "Rupees (5)", &["Kokiri Forest", "Forest"]),
    chest("KF Midos Bottom Left Chest", 0x28, 0x02, "Rupee (1)", &["Kokiri Forest", "Forest"]),
    chest("KF Midos Bottom Right Chest", 0x28, 0x03, "Recovery Heart", &["Kokiri Forest", "Forest"]),
    chest("KF Kokiri Sword Chest", 0x55, 0x00, "Kokiri Sword", &["Kokiri Forest", "Forest"]),
    chest("KF Storms Grotto Chest", 0x3E, 0x0C, "Rupees (20)", &["Kokiri Forest", "Forest", "Grottos"]),
    npc("KF Links House Cow", 0x34, 0x15, "Milk", &["Kokiri Forest", "Forest", "Cows", "Minigames"]),
    collectable("KF Grass Near Ramp Green Rupee 1", 0x55, 0x31, "Rupee (1)", &["Kokiri Forest", "Forest", "Freestandings"]),
    collectable("KF Grass Near Midos Green Rupee 1", 0x55, 0x32, "Rupee (1)", &["Kokiri Forest", "Forest", "Freestandings"]),
    scene_actor("KF Bean Platform Green Rupee 1", RupeeTower, 0x55, Multi(&[Collectible(0, 2, 12, 1), Collectible(0, 3, 10, 1)]), "Rupee (1)", &["Kokiri Forest", "Forest", "Rupee Towers"]),
    scene_actor("KF Bean Platform Green Rupee 2", RupeeTower, 0x55, Multi(&[Collectible(0, 2, 12, 2), Collectible(0, 3, 10, 2)]), "Rupee (1)", &["Kokiri Forest", "Forest", "Rupee Towers"]),
    scene_actor("KF Bean Platform Green Rupee 3", RupeeTower, 0x55, Multi(&[Collectible(0, 2, 12, 3), Collectible(0, 3, 10, 3)]), "Rupee (1)", &["Kokiri Forest", "Forest", "Rupee Towers"]),
    scene_actor("KF Bean Platform Green Rupee 4", RupeeTower, 0x55, Multi(&[Collectible(0, 2, 12, 4), Collectible(0, 3, 10, 4)]), "Rupee (1)", &["Kokiri Forest", "Forest", "Rupee Towers"]),
    scene_actor("KF Bean Platform Green Rupee 5", RupeeTower, 0x55, Multi(&[Collectible(0, 2, 12, 5), Collectible(0, 3, 10, 5)]), "Rupee (1)", &["Kokiri Forest", "Forest", "Rupee Towers"]),
    scene_actor("KF Bean Platform Green Rupee 6", RupeeTower, 0x55, Multi(&[Collectible(0, 2, 12, 6), Collectible(0, 3, 10, 6)]), "Rupee (1)", &["Kokiri Forest", "Forest", "Rupee Towers"]),
    scene_actor("KF Behind Midos Blue Rupee", Freestanding, 0x55, Coord(0, 1, 24), "Rupees (5)", &["Kokiri Forest", "Forest", "Freestandings"]),
    scene_actor("KF Boulder Maze First Pot", Pot, 0x55, Coord(0, 0, 41), "Recovery Heart", &["Kokiri Forest", "Forest", "Pots"]),
    scene_actor("KF Boulder Maze Second Pot", Pot, 0x55, Coord(0, 0, 42), "Rupee (1)", &["Kokiri Forest", "Forest", "Pots"]),
    scene_actor("KF Storms Grotto Beehive Left", Beehive, 0x3E, Coord(0, 0, 4), "Rupees (5)", &["Kokiri Forest", "Forest", "Grottos", "Beehives"]),
    scene_actor("KF Storms Grotto Beehive Right", Beehive, 0x3E, Coord(0, 0, 5), "Rupees (20)", &["Kokiri Forest", "Forest", "Grottos", "Beehives"]),
    scene_actor("KF Sarias House Crate", Crate, 0x29, Coord(0, 0, 3), "Rupee (1)", &["Kokiri Forest", "Forest", "Crates"]),
    scene_actor("KF Know It All House Wonderitem", Wonderitem, 0x26, Coord(0, 0, 8), "Rupees (5)", &["Kokiri Forest", "Forest", "Wonderitem"]),
    collectable("KF Grass Near Ramp Green Rupee 2", 0x55, 0x33, "Rupee (1)", &["Kokiri Forest", "Forest", "Freestandings"]),
    collectable("KF Grass Near Ramp Green Rupee 3", 0x55, 0x34, "Rupee (1)", &["Kokiri Forest", "Forest", "Freestandings"]),
    collectable("KF Grass Near Midos Green Rupee 2", 0x55, 0x35, "Rupee (1)", &["Kokiri Forest", "Forest", "Freestandings"]),
    collectable("KF Grass Near Midos Green Rupee 3", 0x55, 0x36, "Rupee (1)", &["Kokiri Forest", "Forest", "Freestandings"]),
    scene_actor("KF Boulder Maze Third Pot", Pot, 0x55, Coord(0, 0, 43), "Rupee (1)", &["Kokiri Forest", "Forest", "Pots"]),
    scene_actor("KF House of Twins Pot 1", Pot, 0x27, Coord(0, 0, 2), "Rupee (1)", &["Kokiri Forest", "Forest", "Pots"]),
    scene_actor("KF House of Twins Pot 2", Pot, 0x27, Coord(0, 0, 3), "Rupee (1)", &["Kokiri Forest", "Forest", "Pots"]),
    scene_actor("KF Links House Pot", Pot, 0x34, Coord(0, 0, 4), "Rupee (1)", &["Kokiri Forest", "Forest", "Pots"]),
    scene_actor("KF Know It All House Pot 1", Pot, 0x26, Coord(0, 0, 4), "Rupee (1)", &["Kokiri Forest", "Forest", "Pots"]),
    scene_actor("KF Know It All House Pot 2", Pot, 0x26, Coord(0, 0, 5), "Recovery Heart", &["Kokiri Forest", "Forest", "Pots"]),
    scene_actor("KF Midos House Wonderitem 1", Wonderitem, 0x28, Coord(0, 0, 6), "Rupees (5)", &["Kokiri Forest", "Forest", "Wonderitem"]),
    scene_actor("KF Midos House Wonderitem 2", Wonderitem, 0x28, Coord(0, 0, 7), "Rupees (5)", &["Kokiri Forest", "Forest", "Wonderitem"]),
    scene_actor("KF Shop Wonderitem", Wonderitem, 0x2D, Coord(0, 0, 6), "Rupees (5)", &["Kokiri Forest", "Forest", "Wonderitem"]),
    gs("KF GS Know It All House", 0x55, 0x02, &["Kokiri Forest", "Forest", "Skulltulas"]),
    gs("KF GS Bean Patch", 0x55, 0x01, &["Kokiri Forest", "Forest", "Skulltulas"]),
    gs("KF GS House of Twins", 0x55, 0x04, &["Kokiri Forest", "Forest", "Skulltulas"]),
    shop("KF Shop Item 1", 0x2D, 0x30, 0, 0, "Buy Deku Shield", &["Kokiri Forest", "Forest", "Shops"]),
    shop("KF Shop Item 2", 0x2D, 0x31, 0, 1, "Buy Deku Nut (5)", &["Kokiri Forest", "Forest", "Shops"]),
    shop("KF Shop Item 3", 0x2D, 0x32, 0, 2, "Buy Deku Nut (10)", &["Kokiri Forest", "Forest", "Shops"]),
    shop("KF Shop Item 4", 0x2D, 0x33, 0, 3, "Buy Deku Stick (1)", &["Kokiri Forest", "Forest", "Shops"]),
    shop("KF Shop Item 5", 0x2D, 0x34, 0, 4, "Buy Deku Seeds (30)", &["Kokiri Forest", "Forest", "Shops"]),
    shop("KF Shop Item 6", 0x2D, 0x35, 0, 5, "Buy Arrows (10)", &["Kokiri Forest", "Forest", "Shops"]),
    shop("KF Shop Item 7", 0x2D, 0x36, 0, 6, "Buy Arrows (30)", &["Kokiri Forest", "Forest", "Shops"]),
    shop("KF Shop Item 8", 0x2D, 0x37, 0, 7, "Buy Heart", &["Kokiri Forest", "Forest", "Shops"]),
    collectable("KF Grass 5", 0x55, 0x37, "Rupee (1)", &["Kokiri Forest", "Grass"]),
    collectable("KF Grass 6", 0x55, 0x38, "Rupee (1)", &["Kokiri Forest", "Grass"]),
    collectable("KF Grass 7", 0x55, 0x39, "Rupee (1)", &["Kokiri Forest", "Grass"]),
    collectable("KF Grass 8", 0x55, 0x3A, "Rupee (1)", &["Kokiri Forest", "Grass"]),
    collectable("KF Grass 9", 0x55, 0x3B, "Rupee (1)", &["Kokiri Forest", "Grass"]),
    collectable("KF Grass 10", 0x55, 0x3C, "Rupee (1)", &["Kokiri Forest", "Grass"]),
    collectable("KF Grass 11", 0x55, 0x3D, "Rupee (1)", &["Kokiri Forest", "Grass"]),
    collectable("KF Grass 12", 0x55, 0x3E, "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF Storms Grotto Beehive 1", Beehive, 0x3E, Coord(11, 0, 4), "Rupees (5)", &["Kokiri Forest", "Grottos", "Beehives"]),
    scene_actor("KF Storms Grotto Beehive 2", Beehive, 0x3E, Coord(11, 0, 5), "Rupees (5)", &["Kokiri Forest", "Grottos", "Beehives"]),
    scene_actor("KF Storms Grotto Grass 1", Collectable, 0x3E, Coord(11, 0, 6), "Rupee (1)", &["Kokiri Forest", "Grottos", "Grass"]),
    scene_actor("KF Storms Grotto Grass 2", Collectable, 0x3E, Coord(11, 0, 7), "Rupee (1)", &["Kokiri Forest", "Grottos", "Grass"]),
    scene_actor("KF Storms Grotto Grass 3", Collectable, 0x3E, Coord(11, 0, 8), "Rupee (1)", &["Kokiri Forest", "Grottos", "Grass"]),
    scene_actor("KF Storms Grotto Grass 4", Collectable, 0x3E, Coord(11, 0, 9), "Rupee (1)", &["Kokiri Forest", "Grottos", "Grass"]),
    scene_actor("KF North Grass 1", Collectable, 0x55, Coord(0, 0, 30), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF North Grass 2", Collectable, 0x55, Coord(0, 0, 31), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF North Grass 3", Collectable, 0x55, Coord(0, 0, 32), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF North Grass 4", Collectable, 0x55, Coord(0, 0, 33), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF North Grass 5", Collectable, 0x55, Coord(0, 0, 34), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF North Grass 6", Collectable, 0x55, Coord(0, 0, 35), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF South Grass 1", Collectable, 0x55, Coord(0, 0, 36), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF South Grass 2", Collectable, 0x55, Coord(0, 0, 37), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF South Grass 3", Collectable, 0x55, Coord(0, 0, 38), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF South Grass 4", Collectable, 0x55, Coord(0, 0, 39), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF South Grass 5", Collectable, 0x55, Coord(0, 0, 40), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF South Grass 6", Collectable, 0x55, Coord(0, 0, 41), "Rupee (1)", &["Kokiri Forest", "Grass"]),
    scene_actor("KF Behind Midos House Wonderitem", Wonderitem, 0x55, Coord(0, 0, 42), "Rupees (5)", &["Kokiri Forest", "Wonderitem"]),
    scene_actor("KF Top of Shop Wonderitem", Wonderitem, 0x55, Coord(0, 2, 20), "Rupees (5)", &["Kokiri Forest", "Wonderitem"]),
    // Lost Woods
    npc("LW Skull Kid", 0x5B, 0x3E, "Piece of Heart", &["Lost Woods", "Forest"]),
    npc("LW Ocarina Memory Game", 0x5B, 0x76, "Piece of Heart", &["Lost Woods", "Forest", "Minigames"]),
    npc("LW Target in Woods", 0x5B, 0x60, "Slingshot", &["Lost Woods", "Forest"]),
    npc("LW Deku Theater Skull Mask", 0x3F, 0x77, "Deku Stick Capacity", &["Lost Woods", "Forest"]),
    npc("LW Deku Theater Mask of Truth", 0x3F, 0x7A, "Deku Nut Capacity", &["Lost Woods", "Forest"]),
    scrub("LW Deku Scrub Near Deku Theater Left", 0x5B, 0x31, "Buy Deku Stick (1)", &["Lost Woods", "Forest", "Deku Scrubs"]),
    scrub("LW Deku Scrub Near Deku Theater Right", 0x5B, 0x30, "Buy Deku Nut (5)", &["Lost Woods", "Forest", "Deku Scrubs"]),
    scrub("LW Deku Scrub Near Bridge", 0x5B, 0x77, "Buy Deku Stick Upgrade", &["Lost Woods", "Forest", "Deku Scrubs"]),
    grotto_scrub("LW Deku Scrub Grotto Front", 0xF5, 0x79, "Buy Deku Nut Upgrade", &["Lost Woods", "Forest", "Deku Scrubs", "Grottos"]),
    grotto_scrub("LW Deku Scrub Grotto Rear", 0xF5, 0x33, "Buy Deku Seeds (30)", &["Lost Woods", "Forest", "Deku Scrubs", "Grottos"]),
    gs("LW GS Bean Patch Near Bridge", 0x5B, 0x01, &["Lost Woods", "Forest", "Skulltulas"]),
    gs("LW GS Bean Patch Near Theater", 0x5B, 0x02, &["Lost Woods", "Forest", "Skulltulas"]),
    gs("LW GS Above Theater", 0x5B, 0x04, &["Lost Woods", "Forest", "Skulltulas"]),
    scene_actor("LW Under Boulder Blue Rupee", Freestanding, 0x5B, Coord(8, 0, 17), "Rupees (5)", &["Lost Woods", "Forest", "Freestandings"]),
    scene_actor("LW Near Shortcuts Grotto Beehive Left", Beehive, 0x3E, Coord(1, 0, 4), "Rupees (5)", &["Lost Woods", "Forest", "Grottos", "Beehives"]),
    scene_actor("LW Near Shortcuts Grotto Beehive Right", Beehive, 0x3E, Coord(1, 0, 5), "Rupees (20)", &["Lost Woods", "Forest", "Grottos", "Beehives"]),
    chest("LW Near Shortcuts Grotto Chest", 0x3E, 0x14, "Rupees (5)", &["Lost Woods", "Forest", "Grottos"]),
    scene_actor("LW Bridge Wonderitem", Wonderitem, 0x5B, Coord(0, 2, 2), "Rupees (20)", &["Lost Woods", "Forest", "Wonderitem"]),
    scene_actor("LW Theater Entrance Wonderitem", Wonderitem, 0x5B, Coord(6, 0, 9), "Rupees (5)", &["Lost Woods", "Forest Area", "Wonderitem"]),
    scene_actor("LW Skull Kid Wonderitem", Wonderitem, 0x5B, Coord(1, 0, 7), "Rupees (5)", &["Lost Woods", "Forest", "Wonderitem"]),
    scene_actor("LW Target Wonderitem 1", Wonderitem, 0x5B, Coord(0, 0, 3), "Rupees (5)", &["Lost Woods", "Forest", "Wonderitem"]),
    scene_actor("LW Target Wonderitem 2", Wonderitem, 0x5B, Coord(0, 0, 4), "Rupees (5)", &["Lost Woods", "Forest", "Wonderitem"]),
    scene_actor("LW Underwater Shortcut Green Rupee 1", Freestanding, 0x5B, Coord(3, 0, 12), "Rupee (1)", &["Lost Woods", "Forest", "Freestandings"]),
    scene_actor("LW Underwater Shortcut Green Rupee 2", Freestanding, 0x5B, Coord(3, 0, 13), "Rupee (1)", &["Lost Woods", "Forest", "Freestandings"]),
    scene_actor("LW Underwater Shortcut Green Rupee 3", Freestanding, 0x5B, Coord(3, 0, 14), "Rupee (1)", &["Lost Woods", "Forest", "Freestandings"]),
    collectable("LW Grass 1", 0x5B, 0x30, "Rupee (1)", &["Lost Woods", "Grass"]),
    collectable("LW Grass 2", 0x5B, 0x31, "Rupee (1)", &["Lost Woods", "Grass"]),
    collectable("LW Grass 3", 0x5B, 0x32, "Rupee (1)", &["Lost Woods", "Grass"]),
    collectable("LW Grass 4", 0x5B, 0x33, "Rupee (1)", &["Lost Woods", "Grass"]),
    collectable("LW Grass 5", 0x5B, 0x34, "Rupee (1)", &["Lost Woods", "Grass"]),
    collectable("LW Grass 6", 0x5B, 0x35, "Rupee (1)", &["Lost Woods", "Grass"]),
    collectable("LW Grass 7", 0x5B, 0x36, "Rupee (1)", &["Lost Woods", "Grass"]),
    collectable("LW Grass 8", 0x5B, 0x37, "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Near Shortcuts Grotto Beehive 1", Beehive, 0x3E, Coord(12, 0, 4), "Rupees (5)", &["Lost Woods", "Grottos", "Beehives"]),
    scene_actor("LW Near Shortcuts Grotto Beehive 2", Beehive, 0x3E, Coord(12, 0, 5), "Rupees (5)", &["Lost Woods", "Grottos", "Beehives"]),
    scene_actor("LW Scrubs Grotto Beehive", Beehive, 0x3E, Coord(13, 0, 4), "Rupees (5)", &["Lost Woods", "Grottos", "Beehives"]),
    scene_actor("LW Near Shortcuts Grotto Grass 1", Collectable, 0x3E, Coord(12, 0, 6), "Rupee (1)", &["Lost Woods", "Grottos", "Grass"]),
    scene_actor("LW Near Shortcuts Grotto Grass 2", Collectable, 0x3E, Coord(12, 0, 7), "Rupee (1)", &["Lost Woods", "Grottos", "Grass"]),
    scene_actor("LW Near Shortcuts Grotto Grass 3", Collectable, 0x3E, Coord(12, 0, 8), "Rupee (1)", &["Lost Woods", "Grottos", "Grass"]),
    scene_actor("LW Near Shortcuts Grotto Grass 4", Collectable, 0x3E, Coord(12, 0, 9), "Rupee (1)", &["Lost Woods", "Grottos", "Grass"]),
    scene_actor("LW Near Bridge Grass 1", Collectable, 0x5B, Coord(0, 0, 20), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Near Bridge Grass 2", Collectable, 0x5B, Coord(0, 0, 21), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Near Bridge Grass 3", Collectable, 0x5B, Coord(0, 0, 22), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Near Bridge Grass 4", Collectable, 0x5B, Coord(0, 0, 23), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Near Bridge Grass 5", Collectable, 0x5B, Coord(0, 0, 24), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Near Bridge Grass 6", Collectable, 0x5B, Coord(0, 0, 25), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Beyond Mido Grass 1", Collectable, 0x5B, Coord(8, 0, 10), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Beyond Mido Grass 2", Collectable, 0x5B, Coord(8, 0, 11), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Beyond Mido Grass 3", Collectable, 0x5B, Coord(8, 0, 12), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Beyond Mido Grass 4", Collectable, 0x5B, Coord(8, 0, 13), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Beyond Mido Grass 5", Collectable, 0x5B, Coord(8, 0, 14), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Beyond Mido Grass 6", Collectable, 0x5B, Coord(8, 0, 15), "Rupee (1)", &["Lost Woods", "Grass"]),
    scene_actor("LW Frog Rock Wonderitem", Wonderitem, 0x5B, Coord(0, 0, 26), "Rupees (5)", &["Lost Woods", "Wonderitem"]),
    // Sacred Forest Meadow
    chest("SFM Wolfos Grotto Chest", 0x3E, 0x11, "Rupees (50)", &["Sacred Forest Meadow", "Forest", "Grottos"]),
    grotto_scrub("SFM Deku Scrub Grotto Front", 0xEE, 0x3A, "Buy Green Potion", &["Sacred Forest Meadow", "Forest", "Deku Scrubs", "Grottos"]),
    grotto_scrub("SFM Deku Scrub Grotto Rear", 0xEE, 0x39, "Buy Red Potion for 30 Rupees", &["Sacred Forest Meadow", "Forest", "Deku Scrubs", "Grottos"]),
    gs("SFM GS", 0x56, 0x08, &["Sacred Forest Meadow", "Forest", "Skulltulas"]),
    scene_actor("SFM Maze Lower Wonderitem", Wonderitem, 0x56, Coord(0, 0, 11), "Rupees (5)", &["Sacred Forest Meadow", "Forest", "Wonderitem"]),
    scene_actor("SFM Maze Upper Wonderitem", Wonderitem, 0x56, Coord(0, 0, 12), "Rupees (5)", &["Sacred Forest Meadow", "Forest Area", "Wonderitem"]),
    collectable("SFM Grass 1", 0x56, 0x20, "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    collectable("SFM Grass 2", 0x56, 0x21, "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    collectable("SFM Grass 3", 0x56, 0x22, "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    collectable("SFM Grass 4", 0x56, 0x23, "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    collectable("SFM Grass 5", 0x56, 0x24, "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    collectable("SFM Grass 6", 0x56, 0x25, "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Storms Grotto Beehive 1", Beehive, 0x3E, Coord(6, 0, 4), "Rupees (5)", &["Sacred Forest Meadow", "Grottos", "Beehives"]),
    scene_actor("SFM Storms Grotto Beehive 2", Beehive, 0x3E, Coord(6, 0, 5), "Rupees (5)", &["Sacred Forest Meadow", "Grottos", "Beehives"]),
    scene_actor("SFM Storms Grotto Grass 1", Collectable, 0x3E, Coord(6, 0, 6), "Rupee (1)", &["Sacred Forest Meadow", "Grottos", "Grass"]),
    scene_actor("SFM Storms Grotto Grass 2", Collectable, 0x3E, Coord(6, 0, 7), "Rupee (1)", &["Sacred Forest Meadow", "Grottos", "Grass"]),
    scene_actor("SFM Storms Grotto Grass 3", Collectable, 0x3E, Coord(6, 0, 8), "Rupee (1)", &["Sacred Forest Meadow", "Grottos", "Grass"]),
    scene_actor("SFM Storms Grotto Grass 4", Collectable, 0x3E, Coord(6, 0, 9), "Rupee (1)", &["Sacred Forest Meadow", "Grottos", "Grass"]),
    scene_actor("SFM Maze Grass 1", Collectable, 0x56, Coord(0, 0, 12), "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Maze Grass 2", Collectable, 0x56, Coord(0, 0, 13), "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Maze Grass 3", Collectable, 0x56, Coord(0, 0, 14), "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Maze Grass 4", Collectable, 0x56, Coord(0, 0, 15), "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Maze Grass 5", Collectable, 0x56, Coord(0, 0, 16), "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Maze Grass 6", Collectable, 0x56, Coord(0, 0, 17), "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Maze Grass 7", Collectable, 0x56, Coord(0, 0, 18), "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Maze Grass 8", Collectable, 0x56, Coord(0, 0, 19), "Rupee (1)", &["Sacred Forest Meadow", "Grass"]),
    scene_actor("SFM Wolfos Pit Wonderitem 1", Wonderitem, 0x56, Coord(0, 0, 20), "Rupees (5)", &["Sacred Forest Meadow", "Wonderitem"]),
    scene_actor("SFM Wolfos Pit Wonderitem 2", Wonderitem, 0x56, Coord(0, 0, 21), "Rupees (5)", &["Sacred Forest Meadow", "Wonderitem"]),
    // Hyrule Field
    npc("HF Ocarina of Time Item", 0x51, 0x0C, "Ocarina", &["Hyrule Field", "Need Spiritual Stones"]),
    chest("HF Near Market Grotto Chest", 0x3E, 0x00, "Rupees (5)", &["Hyrule Field", "Grottos"]),
    chest("HF Southeast Grotto Chest", 0x3E, 0x02, "Rupees (20)", &["Hyrule Field", "Grottos"]),
    chest("HF Open Grotto Chest", 0x3E, 0x03, "Rupees (5)", &["Hyrule Field", "Grottos"]),
    collectable("HF Tektite Grotto Freestanding PoH", 0x3E, 0x01, "Piece of Heart", &["Hyrule Field", "Grottos", "Freestandings"]),
    npc("HF Deku Scrub Grotto", 0x51, 0x3E, "Piece of Heart", &["Hyrule Field", "Deku Scrubs", "Grottos"]),
    npc("HF Cow Grotto Cow", 0x3E, 0x16, "Milk", &["Hyrule Field", "Grottos", "Cows"]),
    gs("HF GS Cow Grotto", 0x51, 0x01, &["Hyrule Field", "Skulltulas", "Grottos"]),
    gs("HF GS Near Kak Grotto", 0x51, 0x02, &["Hyrule Field", "Skulltulas", "Grottos"]),
    scene_actor("HF Cow Grotto Pot 1", Pot, 0x3E, Coord(4, 0, 14), "Rupees (5)", &["Hyrule Field", "Grottos", "Pots"]),
    scene_actor("HF Cow Grotto Pot 2", Pot, 0x3E, Coord(4, 0, 15), "Recovery Heart", &["Hyrule Field", "Grottos", "Pots"]),
    scene_actor("HF Open Grotto Beehive Left", Beehive, 0x3E, Coord(2, 0, 4), "Rupees (5)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Open Grotto Beehive Right", Beehive, 0x3E, Coord(2, 0, 5), "Rupees (20)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Near Market Wonderitem", Wonderitem, 0x51, Coord(0, 2, 30), "Rupees (20)", &["Hyrule Field", "Wonderitem"]),
    scene_actor("HF Southeast Grotto Beehive Left", Beehive, 0x3E, Coord(7, 0, 4), "Rupees (5)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Southeast Grotto Beehive Right", Beehive, 0x3E, Coord(7, 0, 5), "Rupees (20)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Near Market Grotto Beehive Left", Beehive, 0x3E, Coord(8, 0, 4), "Rupees (5)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Near Market Grotto Beehive Right", Beehive, 0x3E, Coord(8, 0, 5), "Rupees (20)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Inside Fence Grotto Beehive", Beehive, 0x3E, Coord(9, 0, 4), "Rupees (20)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Cow Grotto Red Rupee 1", Freestanding, 0x3E, Coord(4, 0, 16), "Rupees (20)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Cow Grotto Red Rupee 2", Freestanding, 0x3E, Coord(4, 0, 17), "Rupees (20)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Cow Grotto Red Rupee 3", Freestanding, 0x3E, Coord(4, 0, 18), "Rupees (20)", &["Hyrule Field", "Grottos", "Freestandings"]),
    collectable("HF Grass 1", 0x51, 0x28, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 2", 0x51, 0x29, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 3", 0x51, 0x2A, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 4", 0x51, 0x2B, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 5", 0x51, 0x2C, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 6", 0x51, 0x2D, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 7", 0x51, 0x2E, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 8", 0x51, 0x2F, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 9", 0x51, 0x30, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 10", 0x51, 0x31, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 11", 0x51, 0x32, "Rupee (1)", &["Hyrule Field", "Grass"]),
    collectable("HF Grass 12", 0x51, 0x33, "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Southeast Grotto Beehive", Beehive, 0x3E, Coord(5, 0, 4), "Rupees (5)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Open Grotto Beehive 1", Beehive, 0x3E, Coord(4, 0, 4), "Rupees (5)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Open Grotto Beehive 2", Beehive, 0x3E, Coord(4, 0, 5), "Rupees (5)", &["Hyrule Field", "Grottos", "Beehives"]),
    scene_actor("HF Open Grotto Grass 1", Collectable, 0x3E, Coord(4, 0, 6), "Rupee (1)", &["Hyrule Field", "Grottos", "Grass"]),
    scene_actor("HF Open Grotto Grass 2", Collectable, 0x3E, Coord(4, 0, 7), "Rupee (1)", &["Hyrule Field", "Grottos", "Grass"]),
    scene_actor("HF Open Grotto Grass 3", Collectable, 0x3E, Coord(4, 0, 8), "Rupee (1)", &["Hyrule Field", "Grottos", "Grass"]),
    scene_actor("HF Open Grotto Grass 4", Collectable, 0x3E, Coord(4, 0, 9), "Rupee (1)", &["Hyrule Field", "Grottos", "Grass"]),
    scene_actor("HF Southeast Grotto Grass 1", Collectable, 0x3E, Coord(5, 0, 5), "Rupee (1)", &["Hyrule Field", "Grottos", "Grass"]),
    scene_actor("HF Southeast Grotto Grass 2", Collectable, 0x3E, Coord(5, 0, 6), "Rupee (1)", &["Hyrule Field", "Grottos", "Grass"]),
    scene_actor("HF Southeast Grotto Grass 3", Collectable, 0x3E, Coord(5, 0, 7), "Rupee (1)", &["Hyrule Field", "Grottos", "Grass"]),
    scene_actor("HF Southeast Grotto Grass 4", Collectable, 0x3E, Coord(5, 0, 8), "Rupee (1)", &["Hyrule Field", "Grottos", "Grass"]),
    scene_actor("HF Fairy Grotto Green Rupee 1", Freestanding, 0x3E, Coord(6, 0, 10), "Rupee (1)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Fairy Grotto Green Rupee 2", Freestanding, 0x3E, Coord(6, 0, 11), "Rupee (1)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Fairy Grotto Green Rupee 3", Freestanding, 0x3E, Coord(6, 0, 12), "Rupee (1)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Fairy Grotto Green Rupee 4", Freestanding, 0x3E, Coord(6, 0, 13), "Rupee (1)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Fairy Grotto Green Rupee 5", Freestanding, 0x3E, Coord(6, 0, 14), "Rupee (1)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Fairy Grotto Green Rupee 6", Freestanding, 0x3E, Coord(6, 0, 15), "Rupee (1)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Fairy Grotto Green Rupee 7", Freestanding, 0x3E, Coord(6, 0, 16), "Rupee (1)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF Fairy Grotto Green Rupee 8", Freestanding, 0x3E, Coord(6, 0, 17), "Rupee (1)", &["Hyrule Field", "Grottos", "Freestandings"]),
    scene_actor("HF North Grass 1", Collectable, 0x51, Coord(0, 0, 30), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF North Grass 2", Collectable, 0x51, Coord(0, 0, 31), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF North Grass 3", Collectable, 0x51, Coord(0, 0, 32), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF North Grass 4", Collectable, 0x51, Coord(0, 0, 33), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF North Grass 5", Collectable, 0x51, Coord(0, 0, 34), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF North Grass 6", Collectable, 0x51, Coord(0, 0, 35), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF North Grass 7", Collectable, 0x51, Coord(0, 0, 36), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF North Grass 8", Collectable, 0x51, Coord(0, 0, 37), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Central Grass 1", Collectable, 0x51, Coord(0, 0, 38), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Central Grass 2", Collectable, 0x51, Coord(0, 0, 39), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Central Grass 3", Collectable, 0x51, Coord(0, 0, 40), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Central Grass 4", Collectable, 0x51, Coord(0, 0, 41), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Central Grass 5", Collectable, 0x51, Coord(0, 0, 42), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Central Grass 6", Collectable, 0x51, Coord(0, 0, 43), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Central Grass 7", Collectable, 0x51, Coord(0, 0, 44), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Central Grass 8", Collectable, 0x51, Coord(0, 0, 45), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF South Grass 1", Collectable, 0x51, Coord(0, 0, 46), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF South Grass 2", Collectable, 0x51, Coord(0, 0, 47), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF South Grass 3", Collectable, 0x51, Coord(0, 0, 48), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF South Grass 4", Collectable, 0x51, Coord(0, 0, 49), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF South Grass 5", Collectable, 0x51, Coord(0, 0, 50), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF South Grass 6", Collectable, 0x51, Coord(0, 0, 51), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF South Grass 7", Collectable, 0x51, Coord(0, 0, 52), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF South Grass 8", Collectable, 0x51, Coord(0, 0, 53), "Rupee (1)", &["Hyrule Field", "Grass"]),
    scene_actor("HF Tektite Wonderitem 1", Wonderitem, 0x51, Coord(0, 0, 54), "Rupees (5)", &["Hyrule Field", "Wonderitem"]),
    scene_actor("HF Tektite Wonderitem 2", Wonderitem, 0x51, Coord(0, 0, 55), "Rupees (5)", &["Hyrule Field", "Wonderitem"]),
    // Lake Hylia
    npc("LH Underwater Item", 0x57, 0x15, "Rutos Letter", &["Lake Hylia"]),
    npc("LH Child Fishing", 0x49, 0x3E, "Piece of Heart", &["Lake Hylia", "Minigames"]),
    npc("LH Adult Fishing", 0x49, 0x38, "Golden Scale", &["Lake Hylia", "Minigames"]),
    npc("LH Lab Dive", 0x38, 0x3E, "Piece of Heart", &["Lake Hylia"]),
    npc("LH Sun", 0x57, 0x58, "Fire Arrows", &["Lake Hylia"]),
    collectable("LH Freestanding PoH", 0x57, 0x1E, "Piece of Heart", &["Lake Hylia", "Freestandings"]),
    grotto_scrub("LH Deku Scrub Grotto Left", 0xEF, 0x30, "Buy Deku Nut (5)", &["Lake Hylia", "Deku Scrubs", "Grottos"]),
    grotto_scrub("LH Deku Scrub Grotto Center", 0xEF, 0x33, "Buy Deku Seeds (30)", &["Lake Hylia", "Deku Scrubs", "Grottos"]),
    grotto_scrub("LH Deku Scrub Grotto Right", 0xEF, 0x37, "Buy Bombs (5) for 35 Rupees", &["Lake Hylia", "Deku Scrubs", "Grottos"]),
    gs("LH GS Bean Patch", 0x57, 0x01, &["Lake Hylia", "Skulltulas"]),
    gs("LH GS Lab Wall", 0x57, 0x04, &["Lake Hylia", "Skulltulas"]),
    gs("LH GS Small Island", 0x57, 0x02, &["Lake Hylia", "Skulltulas"]),
    gs("LH GS Lab Crate", 0x38, 0x08, &["Lake Hylia", "Skulltulas"]),
    gs("LH GS Tree", 0x57, 0x10, &["Lake Hylia", "Skulltulas"]),
    scene_actor("LH Bean Platform Green Rupee 1", RupeeTower, 0x57, Multi(&[Collectible(0, 2, 20, 1), Collectible(0, 3, 18, 1)]), "Rupee (1)", &["Lake Hylia", "Rupee Towers"]),
    scene_actor("LH Bean Platform Green Rupee 2", RupeeTower, 0x57, Multi(&[Collectible(0, 2, 20, 2), Collectible(0, 3, 18, 2)]), "Rupee (1)", &["Lake Hylia", "Rupee Towers"]),
    scene_actor("LH Bean Platform Green Rupee 3", RupeeTower, 0x57, Multi(&[Collectible(0, 2, 20, 3), Collectible(0, 3, 18, 3)]), "Rupee (1)", &["Lake Hylia", "Rupee Towers"]),
    scene_actor("LH Bean Platform Green Rupee 4", RupeeTower, 0x57, Multi(&[Collectible(0, 2, 20, 4), Collectible(0, 3, 18, 4)]), "Rupee (1)", &["Lake Hylia", "Rupee Towers"]),
    scene_actor("LH Bean Platform Green Rupee 5", RupeeTower, 0x57, Multi(&[Collectible(0, 2, 20, 5), Collectible(0, 3, 18, 5)]), "Rupee (1)", &["Lake Hylia", "Rupee Towers"]),
    scene_actor("LH Bean Platform Green Rupee 6", RupeeTower, 0x57, Multi(&[Collectible(0, 2, 20, 6), Collectible(0, 3, 18, 6)]), "Rupee (1)", &["Lake Hylia", "Rupee Towers"]),
    scene_actor("LH Lab Dive Red Rupee 1", Freestanding, 0x38, Coord(0, 0, 10), "Rupees (20)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Lab Dive Red Rupee 2", Freestanding, 0x38, Coord(0, 0, 11), "Rupees (20)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Lab Dive Red Rupee 3", Freestanding, 0x38, Coord(0, 0, 12), "Rupees (20)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Near Shore Green Rupee", Freestanding, 0x57, Coord(0, 0, 24), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Green Rupee 1", Freestanding, 0x57, Coord(0, 0, 25), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Green Rupee 2", Freestanding, 0x57, Coord(0, 0, 26), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Lab Trapdoor Green Rupee 1", Freestanding, 0x38, Coord(0, 0, 14), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Lab Trapdoor Green Rupee 2", Freestanding, 0x38, Coord(0, 0, 15), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Lab Trapdoor Green Rupee 3", Freestanding, 0x38, Coord(0, 0, 16), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Fishing Hole Wonderitem 1", Wonderitem, 0x49, Coord(0, 0, 6), "Rupees (5)", &["Lake Hylia", "Wonderitem"]),
    scene_actor("LH Fishing Hole Wonderitem 2", Wonderitem, 0x49, Coord(0, 0, 7), "Rupees (5)", &["Lake Hylia", "Wonderitem"]),
    collectable("LH Grass 1", 0x57, 0x28, "Rupee (1)", &["Lake Hylia", "Grass"]),
    collectable("LH Grass 2", 0x57, 0x29, "Rupee (1)", &["Lake Hylia", "Grass"]),
    collectable("LH Grass 3", 0x57, 0x2A, "Rupee (1)", &["Lake Hylia", "Grass"]),
    collectable("LH Grass 4", 0x57, 0x2B, "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Underwater Near Shore Green Rupee 1", Freestanding, 0x57, Coord(0, 0, 20), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Near Shore Green Rupee 2", Freestanding, 0x57, Coord(0, 0, 21), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Near Shore Green Rupee 3", Freestanding, 0x57, Coord(0, 0, 22), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Near Shore Green Rupee 4", Freestanding, 0x57, Coord(0, 0, 23), "Rupee (1)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Blue Rupee 1", Freestanding, 0x57, Coord(0, 0, 24), "Rupees (5)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Blue Rupee 2", Freestanding, 0x57, Coord(0, 0, 25), "Rupees (5)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Blue Rupee 3", Freestanding, 0x57, Coord(0, 0, 26), "Rupees (5)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Underwater Red Rupee", Freestanding, 0x57, Coord(0, 0, 27), "Rupees (20)", &["Lake Hylia", "Freestandings"]),
    scene_actor("LH Lab Shore Grass 1", Collectable, 0x57, Coord(0, 0, 28), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Lab Shore Grass 2", Collectable, 0x57, Coord(0, 0, 29), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Lab Shore Grass 3", Collectable, 0x57, Coord(0, 0, 30), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Lab Shore Grass 4", Collectable, 0x57, Coord(0, 0, 31), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Lab Shore Grass 5", Collectable, 0x57, Coord(0, 0, 32), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Lab Shore Grass 6", Collectable, 0x57, Coord(0, 0, 33), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Island Grass 1", Collectable, 0x57, Coord(0, 0, 34), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Island Grass 2", Collectable, 0x57, Coord(0, 0, 35), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Island Grass 3", Collectable, 0x57, Coord(0, 0, 36), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Island Grass 4", Collectable, 0x57, Coord(0, 0, 37), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Island Grass 5", Collectable, 0x57, Coord(0, 0, 38), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Island Grass 6", Collectable, 0x57, Coord(0, 0, 39), "Rupee (1)", &["Lake Hylia", "Grass"]),
    scene_actor("LH Owl Ledge Wonderitem", Wonderitem, 0x57, Coord(0, 0, 40), "Rupees (5)", &["Lake Hylia", "Wonderitem"]),
    // Gerudo Valley
    chest("GV Chest", 0x5A, 0x00, "Rupees (50)", &["Gerudo Valley"]),
    collectable("GV Crate Freestanding PoH", 0x5A, 0x02, "Piece of Heart", &["Gerudo Valley", "Freestandings"]),
    collectable("GV Waterfall Freestanding PoH", 0x5A, 0x01, "Piece of Heart", &["Gerudo Valley", "Freestandings"]),
    npc("GV Cow", 0x5A, 0x18, "Milk", &["Gerudo Valley", "Cows"]),
    grotto_scrub("GV Deku Scrub Grotto Front", 0xF0, 0x39, "Buy Red Potion for 30 Rupees", &["Gerudo Valley", "Deku Scrubs", "Grottos"]),
    grotto_scrub("GV Deku Scrub Grotto Rear", 0xF0, 0x3A, "Buy Green Potion", &["Gerudo Valley", "Deku Scrubs", "Grottos"]),
    gs("GV GS Bean Patch", 0x5A, 0x01, &["Gerudo Valley", "Skulltulas"]),
    gs("GV GS Small Bridge", 0x5A, 0x02, &["Gerudo Valley", "Skulltulas"]),
    gs("GV GS Pillar", 0x5A, 0x04, &["Gerudo Valley", "Skulltulas"]),
    gs("GV GS Behind Tent", 0x5A, 0x08, &["Gerudo Valley", "Skulltulas"]),
    scene_actor("GV Crate Near Cow", Crate, 0x5A, Coord(0, 0, 22), "Rupee (1)", &["Gerudo Valley", "Crates"]),
    scene_actor("GV Near Cow Small Wooden Crate 1", SmallCrate, 0x5A, Coord(0, 0, 23), "Rupee (1)", &["Gerudo Valley", "Small Crates"]),
    scene_actor("GV Near Cow Small Wooden Crate 2", SmallCrate, 0x5A, Coord(0, 0, 24), "Recovery Heart", &["Gerudo Valley", "Small Crates"]),
    scene_actor("GV Waterfall Wonderitem", Wonderitem, 0x5A, Coord(0, 2, 16), "Rupees (20)", &["Gerudo Valley", "Wonderitem"]),
    scene_actor("GV Crate Near Carpenter Tent 1", Crate, 0x5A, Coord(0, 2, 26), "Rupee (1)", &["Gerudo Valley", "Crates"]),
    scene_actor("GV Crate Near Carpenter Tent 2", Crate, 0x5A, Coord(0, 2, 27), "Rupee (1)", &["Gerudo Valley", "Crates"]),
    scene_actor("GV Crate Behind Carpenter Tent", Crate, 0x5A, Coord(0, 2, 28), "Rupee (1)", &["Gerudo Valley", "Crates"]),
    scene_actor("GV Carpenter Tent Pot 1", Pot, 0x5A, Coord(0, 2, 30), "Rupee (1)", &["Gerudo Valley", "Pots"]),
    scene_actor("GV Carpenter Tent Pot 2", Pot, 0x5A, Coord(0, 2, 31), "Recovery Heart", &["Gerudo Valley", "Pots"]),
    scene_actor("GV Octorok Grotto Green Rupee 1", Freestanding, 0x3E, Coord(10, 0, 8), "Rupee (1)", &["Gerudo Valley", "Grottos", "Freestandings"]),
    scene_actor("GV Octorok Grotto Green Rupee 2", Freestanding, 0x3E, Coord(10, 0, 9), "Rupee (1)", &["Gerudo Valley", "Grottos", "Freestandings"]),
    scene_actor("GV Octorok Grotto Red Rupee", Freestanding, 0x3E, Coord(10, 0, 10), "Rupees (20)", &["Gerudo Valley", "Grottos", "Freestandings"]),
    collectable("GV Grass 1", 0x5A, 0x24, "Rupee (1)", &["Gerudo Valley", "Grass"]),
    collectable("GV Grass 2", 0x5A, 0x25, "Rupee (1)", &["Gerudo Valley", "Grass"]),
    collectable("GV Grass 3", 0x5A, 0x26, "Rupee (1)", &["Gerudo Valley", "Grass"]),
    collectable("GV Grass 4", 0x5A, 0x27, "Rupee (1)", &["Gerudo Valley", "Grass"]),
    collectable("GV Grass 5", 0x5A, 0x28, "Rupee (1)", &["Gerudo Valley", "Grass"]),
    collectable("GV Grass 6", 0x5A, 0x29, "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Storms Grotto Beehive 1", Beehive, 0x3E, Coord(3, 0, 4), "Rupees (5)", &["Gerudo Valley", "Grottos", "Beehives"]),
    scene_actor("GV Storms Grotto Beehive 2", Beehive, 0x3E, Coord(3, 0, 5), "Rupees (5)", &["Gerudo Valley", "Grottos", "Beehives"]),
    scene_actor("GV Storms Grotto Grass 1", Collectable, 0x3E, Coord(3, 0, 6), "Rupee (1)", &["Gerudo Valley", "Grottos", "Grass"]),
    scene_actor("GV Storms Grotto Grass 2", Collectable, 0x3E, Coord(3, 0, 7), "Rupee (1)", &["Gerudo Valley", "Grottos", "Grass"]),
    scene_actor("GV Storms Grotto Grass 3", Collectable, 0x3E, Coord(3, 0, 8), "Rupee (1)", &["Gerudo Valley", "Grottos", "Grass"]),
    scene_actor("GV Storms Grotto Grass 4", Collectable, 0x3E, Coord(3, 0, 9), "Rupee (1)", &["Gerudo Valley", "Grottos", "Grass"]),
    scene_actor("GV Crate Ledge Grass 1", Collectable, 0x5A, Coord(0, 0, 20), "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Crate Ledge Grass 2", Collectable, 0x5A, Coord(0, 0, 21), "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Crate Ledge Grass 3", Collectable, 0x5A, Coord(0, 0, 22), "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Crate Ledge Grass 4", Collectable, 0x5A, Coord(0, 0, 23), "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Near Cow Grass 1", Collectable, 0x5A, Coord(0, 0, 24), "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Near Cow Grass 2", Collectable, 0x5A, Coord(0, 0, 25), "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Near Cow Grass 3", Collectable, 0x5A, Coord(0, 0, 26), "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Near Cow Grass 4", Collectable, 0x5A, Coord(0, 0, 27), "Rupee (1)", &["Gerudo Valley", "Grass"]),
    scene_actor("GV Hammer Rocks Wonderitem", Wonderitem, 0x5A, Coord(0, 2, 15), "Rupees (5)", &["Gerudo Valley", "Wonderitem"]),
    // Gerudo Fortress
    chest("GF Chest", 0x5D, 0x00, "Piece of Heart", &["Gerudo Fortress"]),
    npc("GF HBA 1000 Points", 0x5D, 0x3E, "Piece of Heart", &["Gerudo Fortress", "Minigames"]),
    npc("GF HBA 1500 Points", 0x5D, 0x30, "Bow", &["Gerudo Fortress", "Minigames"]),
    npc("GF North F1 Carpenter", 0x0C, 0x0C, "Small Key (Thieves Hideout)", &["Gerudo Fortress"]),
    npc("GF North F2 Carpenter", 0x0C, 0x0A, "Small Key (Thieves Hideout)", &["Gerudo Fortress"]),
    npc("GF South F1 Carpenter", 0x0C, 0x0E, "Small Key (Thieves Hideout)", &["Gerudo Fortress"]),
    npc("GF South F2 Carpenter", 0x0C, 0x0F, "Small Key (Thieves Hideout)", &["Gerudo Fortress"]),
    npc("GF Gerudo Membership Card", 0x0C, 0x3A, "Gerudo Membership Card", &["Gerudo Fortress"]),
    gs("GF GS Archery Range", 0x5D, 0x01, &["Gerudo Fortress", "Skulltulas"]),
    gs("GF GS Top Floor", 0x5D, 0x02, &["Gerudo Fortress", "Skulltulas"]),
    scene_actor("GF Above Jail Crate", Crate, 0x5D, Coord(0, 2, 36), "Rupee (1)", &["Gerudo Fortress", "Crates"]),
    scene_actor("GF Archery Range Wonderitem", Wonderitem, 0x5D, Coord(0, 2, 40), "Rupees (20)", &["Gerudo Fortress", "Wonderitem"]),
    scene_actor("GF Kitchen Crate 1", Crate, 0x0C, Coord(2, 0, 10), "Rupee (1)", &["Gerudo Fortress", "Crates"]),
    scene_actor("GF Kitchen Crate 2", Crate, 0x0C, Coord(2, 0, 11), "Rupee (1)", &["Gerudo Fortress", "Crates"]),
    scene_actor("GF Break Room Crate 1", Crate, 0x0C, Coord(6, 0, 8), "Rupee (1)", &["Gerudo Fortress", "Crates"]),
    scene_actor("GF Break Room Crate 2", Crate, 0x0C, Coord(6, 0, 9), "Rupee (1)", &["Gerudo Fortress", "Crates"]),
    scene_actor("GF Near Jail Crate 1", Crate, 0x5D, Coord(0, 2, 37), "Rupee (1)", &["Gerudo Fortress", "Crates"]),
    scene_actor("GF Near Jail Crate 2", Crate, 0x5D, Coord(0, 2, 38), "Rupee (1)", &["Gerudo Fortress", "Crates"]),
    scene_actor("GF Kitchen Pot 1", Pot, 0x0C, Coord(2, 0, 14), "Rupee (1)", &["Gerudo Fortress", "Pots"]),
    scene_actor("GF Kitchen Pot 2", Pot, 0x0C, Coord(2, 0, 15), "Recovery Heart", &["Gerudo Fortress", "Pots"]),
    scene_actor("GF Break Room Pot 1", Pot, 0x0C, Coord(6, 0, 12), "Rupee (1)", &["Gerudo Fortress", "Pots"]),
    scene_actor("GF Break Room Pot 2", Pot, 0x0C, Coord(6, 0, 13), "Rupee (1)", &["Gerudo Fortress", "Pots"]),
    scene_actor("GF HBA Wonderitem 1", Wonderitem, 0x5D, Coord(0, 2, 41), "Rupees (20)", &["Gerudo Fortress", "Wonderitem"]),
    scene_actor("GF HBA Wonderitem 2", Wonderitem, 0x5D, Coord(0, 2, 42), "Rupees (20)", &["Gerudo Fortress", "Wonderitem"]),
    scene_actor("GF Kitchen Small Crate 1", SmallCrate, 0x0C, Coord(3, 2, 8), "Rupee (1)", &["Gerudo Fortress", "Small Crates"]),
    scene_actor("GF Kitchen Small Crate 2", SmallCrate, 0x0C, Coord(3, 2, 9), "Rupee (1)", &["Gerudo Fortress", "Small Crates"]),
    scene_actor("GF Break Room Small Crate 1", SmallCrate, 0x0C, Coord(7, 2, 6), "Rupee (1)", &["Gerudo Fortress", "Small Crates"]),
    scene_actor("GF Break Room Small Crate 2", SmallCrate, 0x0C, Coord(7, 2, 7), "Rupee (1)", &["Gerudo Fortress", "Small Crates"]),
    scene_actor("GF Above Jail Small Crate 1", SmallCrate, 0x0C, Coord(9, 2, 5), "Rupee (1)", &["Gerudo Fortress", "Small Crates"]),
    scene_actor("GF Above Jail Small Crate 2", SmallCrate, 0x0C, Coord(9, 2, 6), "Rupee (1)", &["Gerudo Fortress", "Small Crates"]),
    scene_actor("GF Jail Pot 1", Pot, 0x0C, Coord(12, 2, 4), "Rupee (1)", &["Gerudo Fortress", "Pots"]),
    scene_actor("GF Jail Pot 2", Pot, 0x0C, Coord(12, 2, 5), "Recovery Heart", &["Gerudo Fortress", "Pots"]),
    scene_actor("GF Wall Wonderitem 1", Wonderitem, 0x5D, Coord(0, 2, 16), "Rupees (5)", &["Gerudo Fortress", "Wonderitem"]),
    scene_actor("GF Wall Wonderitem 2", Wonderitem, 0x5D, Coord(0, 2, 17), "Rupees (5)", &["Gerudo Fortress", "Wonderitem"]),
    scene_actor("GF Target Wonderitem 1", Wonderitem, 0x5D, Coord(0, 2, 18), "Rupees (5)", &["Gerudo Fortress", "Wonderitem"]),
    scene_actor("GF Target Wonderitem 2", Wonderitem, 0x5D, Coord(0, 2, 19), "Rupees (5)", &["Gerudo Fortress", "Wonderitem"]),
    // Haunted Wasteland
    actor_override("Wasteland Bombchu Salesman", 0x5E, Coord(0, 2, 6), RomAddrs::List(&[0x34A6268, 0x34A6270]), "Bombchus (10)", &["Haunted Wasteland"]),
    chest("Wasteland Chest", 0x5E, 0x00, "Rupees (50)", &["Haunted Wasteland"]),
    gs("Wasteland GS", 0x5E, 0x02, &["Haunted Wasteland", "Skulltulas"]),
    scene_actor("Wasteland Carpet Salesman Crate 1", Crate, 0x5E, Coord(0, 2, 8), "Rupee (1)", &["Haunted Wasteland", "Crates"]),
    scene_actor("Wasteland Carpet Salesman Crate 2", Crate, 0x5E, Coord(0, 2, 9), "Rupee (1)", &["Haunted Wasteland", "Crates"]),
    scene_actor("Wasteland Near GS Pot 1", Pot, 0x5E, Coord(1, 0, 4), "Rupee (1)", &["Haunted Wasteland", "Pots"]),
    scene_actor("Wasteland Near GS Pot 2", Pot, 0x5E, Coord(1, 0, 5), "Recovery Heart", &["Haunted Wasteland", "Pots"]),
    scene_actor("Wasteland Near GS Pot 3", Pot, 0x5E, Coord(1, 0, 6), "Deku Nuts (5)", &["Haunted Wasteland", "Pots"]),
    scene_actor("Wasteland Structure Small Crate 1", SmallCrate, 0x5E, Coord(0, 0, 10), "Rupee (1)", &["Haunted Wasteland", "Small Crates"]),
    scene_actor("Wasteland Structure Small Crate 2", SmallCrate, 0x5E, Coord(0, 0, 11), "Rupee (1)", &["Haunted Wasteland", "Small Crates"]),
    scene_actor("Wasteland Structure Small Crate 3", SmallCrate, 0x5E, Coord(0, 0, 12), "Rupee (1)", &["Haunted Wasteland", "Small Crates"]),
    scene_actor("Wasteland Structure Small Crate 4", SmallCrate, 0x5E, Coord(0, 0, 13), "Rupee (1)", &["Haunted Wasteland", "Small Crates"]),
    // Desert Colossus
    collectable("Colossus Freestanding PoH", 0x5C, 0x0D, "Piece of Heart", &["Desert Colossus", "Freestandings"]),
    grotto_scrub("Colossus Deku Scrub Grotto Front", 0xFD, 0x39, "Buy Red Potion for 30 Rupees", &["Desert Colossus", "Deku Scrubs", "Grottos"]),
    grotto_scrub("Colossus Deku Scrub Grotto Rear", 0xFD, 0x3A, "Buy Green Potion", &["Desert Colossus", "Deku Scrubs", "Grottos"]),
    gs("Colossus GS Bean Patch", 0x5C, 0x01, &["Desert Colossus", "Skulltulas"]),
    gs("Colossus GS Tree", 0x5C, 0x08, &["Desert Colossus", "Skulltulas"]),
    gs("Colossus GS Hill", 0x5C, 0x04, &["Desert Colossus", "Skulltulas"]),
    cutscene("Colossus Great Fairy Reward", 0x12, "Nayrus Love", &["Desert Colossus", "Great Fairies"]),
    scene_actor("Colossus Bean Platform Green Rupee 1", RupeeTower, 0x5C, Multi(&[Collectible(0, 2, 8, 1), Collectible(0, 3, 8, 1)]), "Rupee (1)", &["Desert Colossus", "Rupee Towers"]),
    scene_actor("Colossus Bean Platform Green Rupee 2", RupeeTower, 0x5C, Multi(&[Collectible(0, 2, 8, 2), Collectible(0, 3, 8, 2)]), "Rupee (1)", &["Desert Colossus", "Rupee Towers"]),
    scene_actor("Colossus Bean Platform Green Rupee 3", RupeeTower, 0x5C, Multi(&[Collectible(0, 2, 8, 3), Collectible(0, 3, 8, 3)]), "Rupee (1)", &["Desert Colossus", "Rupee Towers"]),
    scene_actor("Colossus Bean Platform Green Rupee 4", RupeeTower, 0x5C, Multi(&[Collectible(0, 2, 8, 4), Collectible(0, 3, 8, 4)]), "Rupee (1)", &["Desert Colossus", "Rupee Towers"]),
    scene_actor("Colossus Great Fairy Pot 1", Pot, 0x5C, Coord(1, 0, 3), "Rupee (1)", &["Desert Colossus", "Pots"]),
    scene_actor("Colossus Great Fairy Pot 2", Pot, 0x5C, Coord(1, 0, 4), "Recovery Heart", &["Desert Colossus", "Pots"]),
    scene_actor("Colossus Oasis Wonderitem", Wonderitem, 0x5C, Coord(0, 2, 20), "Rupees (20)", &["Desert Colossus", "Wonderitem"]),
    collectable("Colossus Grass 1", 0x5C, 0x20, "Rupee (1)", &["Desert Colossus", "Grass"]),
    collectable("Colossus Grass 2", 0x5C, 0x21, "Rupee (1)", &["Desert Colossus", "Grass"]),
    collectable("Colossus Grass 3", 0x5C, 0x22, "Rupee (1)", &["Desert Colossus", "Grass"]),
    collectable("Colossus Grass 4", 0x5C, 0x23, "Rupee (1)", &["Desert Colossus", "Grass"]),
    collectable("Colossus Grass 5", 0x5C, 0x24, "Rupee (1)", &["Desert Colossus", "Grass"]),
    collectable("Colossus Grass 6", 0x5C, 0x25, "Rupee (1)", &["Desert Colossus", "Grass"]),
    scene_actor("Colossus Oasis Grass 1", Collectable, 0x5C, Coord(0, 0, 14), "Rupee (1)", &["Desert Colossus", "Grass"]),
    scene_actor("Colossus Oasis Grass 2", Collectable, 0x5C, Coord(0, 0, 15), "Rupee (1)", &["Desert Colossus", "Grass"]),
    scene_actor("Colossus Oasis Grass 3", Collectable, 0x5C, Coord(0, 0, 16), "Rupee (1)", &["Desert Colossus", "Grass"]),
    scene_actor("Colossus Oasis Grass 4", Collectable, 0x5C, Coord(0, 0, 17), "Rupee (1)", &["Desert Colossus", "Grass"]),
    scene_actor("Colossus Oasis Grass 5", Collectable, 0x5C, Coord(0, 0, 18), "Rupee (1)", &["Desert Colossus", "Grass"]),
    scene_actor("Colossus Oasis Grass 6", Collectable, 0x5C, Coord(0, 0, 19), "Rupee (1)", &["Desert Colossus", "Grass"]),
    scene_actor("Colossus Oasis Grass 7", Collectable, 0x5C, Coord(0, 0, 20), "Rupee (1)", &["Desert Colossus", "Grass"]),
    scene_actor("Colossus Oasis Grass 8", Collectable, 0x5C, Coord(0, 0, 21), "Rupee (1)", &["Desert Colossus", "Grass"]),
    // Market
    npc("Market 10 Big Poes", 0x4D, 0x0F, "Empty Bottle", &["Market", "Minigames"]),
    chest("Market Treasure Chest Game Item 1", 0x10, 0x01, "Rupee (1)", &["Market", "Minigames"]),
    chest("Market Treasure Chest Game Item 2", 0x10, 0x03, "Rupee (1)", &["Market", "Minigames"]),
    chest("Market Treasure Chest Game Item 3", 0x10, 0x05, "Rupee (1)", &["Market", "Minigames"]),
    chest("Market Treasure Chest Game Item 4", 0x10, 0x07, "Rupee (1)", &["Market", "Minigames"]),
    chest("Market Treasure Chest Game Item 5", 0x10, 0x09, "Rupee (1)", &["Market", "Minigames"]),
    chest("Market Treasure Chest Game Reward", 0x10, 0x0A, "Piece of Heart", &["Market", "Minigames"]),
    npc("Market Bombchu Bowling First Prize", 0x4B, 0x33, "Bomb Bag", &["Market", "Minigames"]),
    npc("Market Bombchu Bowling Second Prize", 0x4B, 0x3E, "Piece of Heart", &["Market", "Minigames"]),
    npc("Market Bombchu Bowling Bombchus", 0x4B, 0x34, "Bombchus (10)", &["Market", "Minigames"]),
    npc("Market Lost Dog", 0x35, 0x3E, "Piece of Heart", &["Market"]),
    npc("Market Shooting Gallery Reward", 0x42, 0x60, "Slingshot", &["Market", "Minigames"]),
    gs("Market GS Guard House", 0x4D, 0x08, &["Market", "Skulltulas"]),
    scene_actor("Market Guard House Child Pot 1", Pot, 0x4D, Coord(0, 0, 6), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 2", Pot, 0x4D, Coord(0, 0, 7), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 3", Pot, 0x4D, Coord(0, 0, 8), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Adult Pot", Pot, 0x4D, Coord(0, 2, 4), "Rupees (5)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Crate 1", Crate, 0x4D, Coord(0, 0, 12), "Rupee (1)", &["Market", "Crates"]),
    scene_actor("Market Guard House Child Crate 2", Crate, 0x4D, Coord(0, 0, 13), "Rupee (1)", &["Market", "Crates"]),
    scene_actor("Market Night Small Crate", SmallCrate, 0x21, Coord(0, 1, 20), "Rupee (1)", &["Market", "Small Crates"]),
    scene_actor("Market Dog Lady House Crate", Crate, 0x35, Coord(0, 0, 3), "Rupee (1)", &["Market", "Crates"]),
    scene_actor("Market Guard House Child Pot 4", Pot, 0x4D, Coord(0, 0, 9), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 5", Pot, 0x4D, Coord(0, 0, 10), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 6", Pot, 0x4D, Coord(0, 0, 11), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 7", Pot, 0x4D, Coord(0, 0, 14), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 8", Pot, 0x4D, Coord(0, 0, 15), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 9", Pot, 0x4D, Coord(0, 0, 16), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 10", Pot, 0x4D, Coord(0, 0, 17), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 11", Pot, 0x4D, Coord(0, 0, 18), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 12", Pot, 0x4D, Coord(0, 0, 19), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Adult Pot 2", Pot, 0x4D, Coord(0, 2, 5), "Rupees (5)", &["Market", "Pots"]),
    scene_actor("Market Guard House Adult Pot 3", Pot, 0x4D, Coord(0, 2, 6), "Rupees (5)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Crate 3", Crate, 0x4D, Coord(0, 0, 20), "Rupee (1)", &["Market", "Crates"]),
    scene_actor("Market Guard House Child Crate 4", Crate, 0x4D, Coord(0, 0, 21), "Rupee (1)", &["Market", "Crates"]),
    scene_actor("Market Guard House Child Crate 5", Crate, 0x4D, Coord(0, 0, 22), "Rupee (1)", &["Market", "Crates"]),
    scene_actor("Market Back Alley Wonderitem 1", Wonderitem, 0x21, Coord(0, 0, 8), "Rupees (5)", &["Market", "Wonderitem"]),
    scene_actor("Market Back Alley Wonderitem 2", Wonderitem, 0x21, Coord(0, 0, 9), "Rupees (5)", &["Market", "Wonderitem"]),
    scene_actor("Market Bombchu Bowling Wonderitem 1", Wonderitem, 0x4B, Coord(0, 0, 5), "Rupees (5)", &["Market", "Minigames", "Wonderitem"]),
    scene_actor("Market Bombchu Bowling Wonderitem 2", Wonderitem, 0x4B, Coord(0, 0, 6), "Rupees (5)", &["Market", "Minigames", "Wonderitem"]),
    shop("Market Bazaar Item 1", 0x2C, 0x30, 4, 0, "Buy Hylian Shield", &["Market", "Shops"]),
    shop("Market Bazaar Item 2", 0x2C, 0x31, 4, 1, "Buy Bombs (5) for 35 Rupees", &["Market", "Shops"]),
    shop("Market Bazaar Item 3", 0x2C, 0x32, 4, 2, "Buy Deku Nut (5)", &["Market", "Shops"]),
    shop("Market Bazaar Item 4", 0x2C, 0x33, 4, 3, "Buy Heart", &["Market", "Shops"]),
    shop("Market Bazaar Item 5", 0x2C, 0x34, 4, 4, "Buy Arrows (10)", &["Market", "Shops"]),
    shop("Market Bazaar Item 6", 0x2C, 0x35, 4, 5, "Buy Arrows (50)", &["Market", "Shops"]),
    shop("Market Bazaar Item 7", 0x2C, 0x36, 4, 6, "Buy Deku Stick (1)", &["Market", "Shops"]),
    shop("Market Bazaar Item 8", 0x2C, 0x37, 4, 7, "Buy Arrows (30)", &["Market", "Shops"]),
    shop("Market Potion Shop Item 1", 0x31, 0x30, 3, 0, "Buy Green Potion", &["Market", "Shops"]),
    shop("Market Potion Shop Item 2", 0x31, 0x31, 3, 1, "Buy Blue Fire", &["Market", "Shops"]),
    shop("Market Potion Shop Item 3", 0x31, 0x32, 3, 2, "Buy Red Potion for 30 Rupees", &["Market", "Shops"]),
    shop("Market Potion Shop Item 4", 0x31, 0x33, 3, 3, "Buy Fairys Spirit", &["Market", "Shops"]),
    shop("Market Potion Shop Item 5", 0x31, 0x34, 3, 4, "Buy Deku Nut (5)", &["Market", "Shops"]),
    shop("Market Potion Shop Item 6", 0x31, 0x35, 3, 5, "Buy Bottle Bug", &["Market", "Shops"]),
    shop("Market Potion Shop Item 7", 0x31, 0x36, 3, 6, "Buy Poe", &["Market", "Shops"]),
    shop("Market Potion Shop Item 8", 0x31, 0x37, 3, 7, "Buy Fish", &["Market", "Shops"]),
    shop("Market Bombchu Shop Item 1", 0x32, 0x30, 2, 0, "Buy Bombchu (5)", &["Market", "Shops"]),
    shop("Market Bombchu Shop Item 2", 0x32, 0x31, 2, 1, "Buy Bombchu (10)", &["Market", "Shops"]),
    shop("Market Bombchu Shop Item 3", 0x32, 0x32, 2, 2, "Buy Bombchu (10)", &["Market", "Shops"]),
    shop("Market Bombchu Shop Item 4", 0x32, 0x33, 2, 3, "Buy Bombchu (10)", &["Market", "Shops"]),
    shop("Market Bombchu Shop Item 5", 0x32, 0x34, 2, 4, "Buy Bombchu (20)", &["Market", "Shops"]),
    shop("Market Bombchu Shop Item 6", 0x32, 0x35, 2, 5, "Buy Bombchu (20)", &["Market", "Shops"]),
    shop("Market Bombchu Shop Item 7", 0x32, 0x36, 2, 6, "Buy Bombchu (20)", &["Market", "Shops"]),
    shop("Market Bombchu Shop Item 8", 0x32, 0x37, 2, 7, "Buy Bombchu (20)", &["Market", "Shops"]),
    mask_shop("Market Mask Shop Item 1", 0x30, 0, "Keaton Mask"),
    mask_shop("Market Mask Shop Item 2", 0x31, 1, "Skull Mask"),
    mask_shop("Market Mask Shop Item 3", 0x32, 2, "Spooky Mask"),
    mask_shop("Market Mask Shop Item 4", 0x33, 3, "Bunny Hood"),
    mask_shop("Market Mask Shop Item 5", 0x34, 4, "Mask of Truth"),
    mask_shop("Market Mask Shop Item 6", 0x35, 5, "Zora Mask"),
    mask_shop("Market Mask Shop Item 7", 0x36, 6, "Goron Mask"),
    mask_shop("Market Mask Shop Item 8", 0x37, 7, "Gerudo Mask"),
    scene_actor("Market Guard House Child Pot 13", Pot, 0x4D, Coord(0, 0, 17), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 14", Pot, 0x4D, Coord(0, 0, 18), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 15", Pot, 0x4D, Coord(0, 0, 19), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 16", Pot, 0x4D, Coord(0, 0, 20), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 17", Pot, 0x4D, Coord(0, 0, 21), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 18", Pot, 0x4D, Coord(0, 0, 22), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 19", Pot, 0x4D, Coord(0, 0, 23), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 20", Pot, 0x4D, Coord(0, 0, 24), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 21", Pot, 0x4D, Coord(0, 0, 25), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 22", Pot, 0x4D, Coord(0, 0, 26), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 23", Pot, 0x4D, Coord(0, 0, 27), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 24", Pot, 0x4D, Coord(0, 0, 28), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 25", Pot, 0x4D, Coord(0, 0, 29), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 26", Pot, 0x4D, Coord(0, 0, 30), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 27", Pot, 0x4D, Coord(0, 0, 31), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 28", Pot, 0x4D, Coord(0, 0, 32), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 29", Pot, 0x4D, Coord(0, 0, 33), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 30", Pot, 0x4D, Coord(0, 0, 34), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 31", Pot, 0x4D, Coord(0, 0, 35), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 32", Pot, 0x4D, Coord(0, 0, 36), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 33", Pot, 0x4D, Coord(0, 0, 37), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 34", Pot, 0x4D, Coord(0, 0, 38), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 35", Pot, 0x4D, Coord(0, 0, 39), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Guard House Child Pot 36", Pot, 0x4D, Coord(0, 0, 40), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Back Alley House Pot 1", Pot, 0x21, Coord(0, 0, 8), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Back Alley House Pot 2", Pot, 0x21, Coord(0, 0, 9), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Back Alley House Pot 3", Pot, 0x21, Coord(1, 0, 10), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Back Alley House Pot 4", Pot, 0x21, Coord(1, 0, 11), "Rupee (1)", &["Market", "Pots"]),
    scene_actor("Market Bazaar Wonderitem", Wonderitem, 0x2C, Coord(0, 0, 6), "Rupees (5)", &["Market", "Wonderitem"]),
    scene_actor("Market Potion Shop Wonderitem", Wonderitem, 0x30, Coord(0, 0, 5), "Rupees (5)", &["Market", "Wonderitem"]),
    scene_actor("Market Treasure Chest Game Wonderitem 1", Wonderitem, 0x10, Coord(0, 0, 12), "Rupees (5)", &["Market", "Wonderitem"]),
    scene_actor("Market Treasure Chest Game Wonderitem 2", Wonderitem, 0x10, Coord(0, 0, 13), "Rupees (5)", &["Market", "Wonderitem"]),
    // Temple of Time
    npc("ToT Light Arrows Cutscene", 0x43, 0x01, "Light Arrows", &["Temple of Time"]),
    scene_actor("ToT Left Gossip Stone Wonderitem", Wonderitem, 0x22, Coord(0, 2, 4), "Rupees (20)", &["Temple of Time", "Wonderitem"]),
    scene_actor("ToT Right Gossip Stone Wonderitem", Wonderitem, 0x22, Coord(0, 2, 5), "Rupees (20)", &["Temple of Time", "Wonderitem"]),
    // Hyrule Castle
    npc("HC Malon Egg", 0x5F, 0x47, "Weird Egg", &["Hyrule Castle"]),
    npc("HC Zeldas Letter", 0x4A, 0x01, "Zeldas Letter", &["Hyrule Castle"]),
    cutscene("HC Great Fairy Reward", 0x11, "Dins Fire", &["Hyrule Castle", "Great Fairies"]),
    gs("HC GS Tree", 0x5F, 0x04, &["Hyrule Castle", "Skulltulas"]),
    gs("HC GS Storms Grotto", 0x5F, 0x02, &["Hyrule Castle", "Skulltulas", "Grottos"]),
    scene_actor("HC Near Great Fairy Wonderitem", Wonderitem, 0x5F, Coord(0, 0, 10), "Rupees (5)", &["Hyrule Castle", "Wonderitem"]),
    scene_actor("HC Courtyard Pot 1", Pot, 0x4A, Coord(0, 0, 4), "Rupee (1)", &["Hyrule Castle", "Pots"]),
    scene_actor("HC Courtyard Pot 2", Pot, 0x4A, Coord(0, 0, 5), "Recovery Heart", &["Hyrule Castle", "Pots"]),
    scene_actor("HC Courtyard Pot 3", Pot, 0x4A, Coord(0, 0, 6), "Rupee (1)", &["Hyrule Castle", "Pots"]),
    scene_actor("HC Courtyard Pot 4", Pot, 0x4A, Coord(0, 0, 7), "Rupee (1)", &["Hyrule Castle", "Pots"]),
    scene_actor("HC Courtyard Pot 5", Pot, 0x4A, Coord(0, 0, 8), "Rupee (1)", &["Hyrule Castle", "Pots"]),
    scene_actor("HC Courtyard Pot 6", Pot, 0x4A, Coord(0, 0, 9), "Recovery Heart", &["Hyrule Castle", "Pots"]),
    collectable("HC Grass 1", 0x5F, 0x20, "Rupee (1)", &["Hyrule Castle", "Grass"]),
    collectable("HC Grass 2", 0x5F, 0x21, "Rupee (1)", &["Hyrule Castle", "Grass"]),
    collectable("HC Grass 3", 0x5F, 0x22, "Rupee (1)", &["Hyrule Castle", "Grass"]),
    collectable("HC Grass 4", 0x5F, 0x23, "Rupee (1)", &["Hyrule Castle", "Grass"]),
    // Outside Ganons Castle
    cutscene("OGC Great Fairy Reward", 0x15, "Double Defense", &["Outside Ganons Castle", "Great Fairies"]),
    gs("OGC GS", 0x5F, 0x01, &["Outside Ganons Castle", "Skulltulas"]),
    // Kakariko
    chest("Kak Impas House Chest", 0x37, 0x01, "Rupees (20)", &["Kakariko"]),
    collectable("Kak Impas House Freestanding PoH", 0x37, 0x01, "Piece of Heart", &["Kakariko", "Freestandings"]),
    npc("Kak Impas House Cow", 0x37, 0x15, "Milk", &["Kakariko", "Cows"]),
    npc("Kak Anju as Child", 0x52, 0x0F, "Empty Bottle", &["Kakariko", "Minigames"]),
    npc("Kak Anju as Adult", 0x52, 0x1D, "Pocket Egg", &["Kakariko"]),
    npc("Kak Trade Pocket Cucco", 0x52, 0x0E, "Cojiro", &["Kakariko"]),
    npc("Kak Granny Buys Odd Mushroom", 0x4E, 0x20, "Odd Potion", &["Kakariko"]),
    chest("Kak Open Grotto Chest", 0x3E, 0x08, "Rupees (20)", &["Kakariko", "Grottos"]),
    chest("Kak Redead Grotto Chest", 0x3E, 0x0A, "Rupees (200)", &["Kakariko", "Grottos"]),
    collectable("Kak Windmill Freestanding PoH", 0x48, 0x01, "Piece of Heart", &["Kakariko", "Freestandings"]),
    npc("Kak Man on Roof", 0x52, 0x3E, "Piece of Heart", &["Kakariko"]),
    npc("Kak Shooting Gallery Reward", 0x42, 0x30, "Bow", &["Kakariko", "Minigames"]),
    npc("Kak 10 Gold Skulltula Reward", 0x50, 0x45, "Progressive Wallet", &["Kakariko", "Skulltula House"]),
    npc("Kak 20 Gold Skulltula Reward", 0x50, 0x39, "Stone of Agony", &["Kakariko", "Skulltula House"]),
    npc("Kak 30 Gold Skulltula Reward", 0x50, 0x46, "Progressive Wallet", &["Kakariko", "Skulltula House"]),
    npc("Kak 40 Gold Skulltula Reward", 0x50, 0x03, "Bombchus (10)", &["Kakariko", "Skulltula House"]),
    npc("Kak 50 Gold Skulltula Reward", 0x50, 0x3E, "Piece of Heart", &["Kakariko", "Skulltula House"]),
    gs("Kak GS Tree", 0x52, 0x20, &["Kakariko", "Skulltulas"]),
    gs("Kak GS Guards House", 0x52, 0x02, &["Kakariko", "Skulltulas"]),
    gs("Kak GS Watchtower", 0x52, 0x04, &["Kakariko", "Skulltulas"]),
    gs("Kak GS Skulltula House", 0x52, 0x10, &["Kakariko", "Skulltulas"]),
    gs("Kak GS House Under Construction", 0x52, 0x08, &["Kakariko", "Skulltulas"]),
    gs("Kak GS Above Impas House", 0x52, 0x40, &["Kakariko", "Skulltulas"]),
    scene_actor("Kak Near Potion Shop Pot 1", Pot, 0x52, Coord(0, 2, 30), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Near Potion Shop Pot 2", Pot, 0x52, Coord(0, 2, 31), "Recovery Heart", &["Kakariko", "Pots"]),
    scene_actor("Kak Near Impas House Crate", Crate, 0x52, Coord(0, 0, 40), "Rupee (1)", &["Kakariko", "Crates"]),
    scene_actor("Kak Open Grotto Beehive Left", Beehive, 0x3E, Coord(3, 0, 4), "Rupees (5)", &["Kakariko", "Grottos", "Beehives"]),
    scene_actor("Kak Open Grotto Beehive Right", Beehive, 0x3E, Coord(3, 0, 5), "Rupees (20)", &["Kakariko", "Grottos", "Beehives"]),
    scene_actor("Kak Windmill Wonderitem", Wonderitem, 0x48, Coord(0, 2, 7), "Rupees (5)", &["Kakariko", "Wonderitem"]),
    scene_actor("Kak Near Guards House Pot 1", Pot, 0x52, Coord(0, 0, 32), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Near Guards House Pot 2", Pot, 0x52, Coord(0, 0, 33), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Near Guards House Pot 3", Pot, 0x52, Coord(0, 0, 34), "Recovery Heart", &["Kakariko", "Pots"]),
    scene_actor("Kak Near Medicine Shop Pot 1", Pot, 0x52, Coord(0, 2, 32), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Near Medicine Shop Pot 2", Pot, 0x52, Coord(0, 2, 33), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Windmill Pot 1", Pot, 0x48, Coord(0, 0, 4), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Windmill Pot 2", Pot, 0x48, Coord(0, 0, 5), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Windmill Pot 3", Pot, 0x48, Coord(0, 0, 6), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Windmill Pot 4", Pot, 0x48, Coord(0, 0, 7), "Recovery Heart", &["Kakariko", "Pots"]),
    scene_actor("Kak House Under Construction Crate 1", Crate, 0x52, Coord(0, 0, 41), "Rupee (1)", &["Kakariko", "Crates"]),
    scene_actor("Kak House Under Construction Crate 2", Crate, 0x52, Coord(0, 0, 42), "Rupee (1)", &["Kakariko", "Crates"]),
    scene_actor("Kak Bazaar Wonderitem", Wonderitem, 0x2C, Coord(0, 0, 6), "Rupees (5)", &["Kakariko", "Wonderitem"]),
    scene_actor("Kak Shooting Gallery Wonderitem", Wonderitem, 0x42, Coord(0, 0, 4), "Rupees (5)", &["Kakariko", "Minigames", "Wonderitem"]),
    shop("Kak Bazaar Item 1", 0x2C, 0x30, 5, 0, "Buy Hylian Shield", &["Kakariko", "Shops"]),
    shop("Kak Bazaar Item 2", 0x2C, 0x31, 5, 1, "Buy Bombs (5) for 35 Rupees", &["Kakariko", "Shops"]),
    shop("Kak Bazaar Item 3", 0x2C, 0x32, 5, 2, "Buy Deku Nut (5)", &["Kakariko", "Shops"]),
    shop("Kak Bazaar Item 4", 0x2C, 0x33, 5, 3, "Buy Heart", &["Kakariko", "Shops"]),
    shop("Kak Bazaar Item 5", 0x2C, 0x34, 5, 4, "Buy Arrows (10)", &["Kakariko", "Shops"]),
    shop("Kak Bazaar Item 6", 0x2C, 0x35, 5, 5, "Buy Arrows (50)", &["Kakariko", "Shops"]),
    shop("Kak Bazaar Item 7", 0x2C, 0x36, 5, 6, "Buy Deku Stick (1)", &["Kakariko", "Shops"]),
    shop("Kak Bazaar Item 8", 0x2C, 0x37, 5, 7, "Buy Arrows (30)", &["Kakariko", "Shops"]),
    shop("Kak Potion Shop Item 1", 0x30, 0x30, 1, 0, "Buy Deku Nut (5)", &["Kakariko", "Shops"]),
    shop("Kak Potion Shop Item 2", 0x30, 0x31, 1, 1, "Buy Fish", &["Kakariko", "Shops"]),
    shop("Kak Potion Shop Item 3", 0x30, 0x32, 1, 2, "Buy Red Potion for 30 Rupees", &["Kakariko", "Shops"]),
    shop("Kak Potion Shop Item 4", 0x30, 0x33, 1, 3, "Buy Green Potion", &["Kakariko", "Shops"]),
    shop("Kak Potion Shop Item 5", 0x30, 0x34, 1, 4, "Buy Blue Fire", &["Kakariko", "Shops"]),
    shop("Kak Potion Shop Item 6", 0x30, 0x35, 1, 5, "Buy Bottle Bug", &["Kakariko", "Shops"]),
    shop("Kak Potion Shop Item 7", 0x30, 0x36, 1, 6, "Buy Poe", &["Kakariko", "Shops"]),
    shop("Kak Potion Shop Item 8", 0x30, 0x37, 1, 7, "Buy Fairys Spirit", &["Kakariko", "Shops"]),
    collectable("Kak Grass 1", 0x52, 0x28, "Rupee (1)", &["Kakariko", "Grass"]),
    collectable("Kak Grass 2", 0x52, 0x29, "Rupee (1)", &["Kakariko", "Grass"]),
    collectable("Kak Grass 3", 0x52, 0x2A, "Rupee (1)", &["Kakariko", "Grass"]),
    collectable("Kak Grass 4", 0x52, 0x2B, "Rupee (1)", &["Kakariko", "Grass"]),
    collectable("Kak Grass 5", 0x52, 0x2C, "Rupee (1)", &["Kakariko", "Grass"]),
    collectable("Kak Grass 6", 0x52, 0x2D, "Rupee (1)", &["Kakariko", "Grass"]),
    collectable("Kak Grass 7", 0x52, 0x2E, "Rupee (1)", &["Kakariko", "Grass"]),
    collectable("Kak Grass 8", 0x52, 0x2F, "Rupee (1)", &["Kakariko", "Grass"]),
    scene_actor("Kak Open Grotto Beehive 1", Beehive, 0x3E, Coord(2, 0, 4), "Rupees (5)", &["Kakariko", "Grottos", "Beehives"]),
    scene_actor("Kak Open Grotto Beehive 2", Beehive, 0x3E, Coord(2, 0, 5), "Rupees (5)", &["Kakariko", "Grottos", "Beehives"]),
    scene_actor("Kak Redead Grotto Beehive", Beehive, 0x3E, Coord(1, 0, 4), "Rupees (5)", &["Kakariko", "Grottos", "Beehives"]),
    scene_actor("Kak Open Grotto Grass 1", Collectable, 0x3E, Coord(2, 0, 6), "Rupee (1)", &["Kakariko", "Grottos", "Grass"]),
    scene_actor("Kak Open Grotto Grass 2", Collectable, 0x3E, Coord(2, 0, 7), "Rupee (1)", &["Kakariko", "Grottos", "Grass"]),
    scene_actor("Kak Open Grotto Grass 3", Collectable, 0x3E, Coord(2, 0, 8), "Rupee (1)", &["Kakariko", "Grottos", "Grass"]),
    scene_actor("Kak Open Grotto Grass 4", Collectable, 0x3E, Coord(2, 0, 9), "Rupee (1)", &["Kakariko", "Grottos", "Grass"]),
    scene_actor("Kak Redead Grotto Grass 1", Collectable, 0x3E, Coord(1, 0, 5), "Rupee (1)", &["Kakariko", "Grottos", "Grass"]),
    scene_actor("Kak Redead Grotto Grass 2", Collectable, 0x3E, Coord(1, 0, 6), "Rupee (1)", &["Kakariko", "Grottos", "Grass"]),
    scene_actor("Kak Near Well Grass 1", Collectable, 0x52, Coord(0, 0, 20), "Rupee (1)", &["Kakariko", "Grass"]),
    scene_actor("Kak Near Well Grass 2", Collectable, 0x52, Coord(0, 0, 21), "Rupee (1)", &["Kakariko", "Grass"]),
    scene_actor("Kak Near Well Grass 3", Collectable, 0x52, Coord(0, 0, 22), "Rupee (1)", &["Kakariko", "Grass"]),
    scene_actor("Kak Near Well Grass 4", Collectable, 0x52, Coord(0, 0, 23), "Rupee (1)", &["Kakariko", "Grass"]),
    scene_actor("Kak Near Well Grass 5", Collectable, 0x52, Coord(0, 0, 24), "Rupee (1)", &["Kakariko", "Grass"]),
    scene_actor("Kak Near Well Grass 6", Collectable, 0x52, Coord(0, 0, 25), "Rupee (1)", &["Kakariko", "Grass"]),
    scene_actor("Kak Impas House Pot 1", Pot, 0x37, Coord(0, 0, 4), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Impas House Pot 2", Pot, 0x37, Coord(0, 0, 5), "Rupee (1)", &["Kakariko", "Pots"]),
    scene_actor("Kak Watchtower Wonderitem", Wonderitem, 0x52, Coord(0, 0, 26), "Rupees (5)", &["Kakariko", "Wonderitem"]),
    // Graveyard
    chest("Graveyard Shield Grave Chest", 0x40, 0x00, "Hylian Shield", &["Graveyard"]),
    chest("Graveyard Heart Piece Grave Chest", 0x3F, 0x00, "Piece of Heart", &["Graveyard"]),
    chest("Graveyard Royal Familys Tomb Chest", 0x41, 0x00, "Bombs (5)", &["Graveyard"]),
    chest("Graveyard Hookshot Chest", 0x48, 0x00, "Progressive Hookshot", &["Graveyard"]),
    collectable("Graveyard Freestanding PoH", 0x53, 0x04, "Piece of Heart", &["Graveyard", "Freestandings"]),
    collectable("Graveyard Dampe Race Freestanding PoH", 0x48, 0x07, "Piece of Heart", &["Graveyard", "Freestandings", "Minigames"]),
    npc("Graveyard Dampe Gravedigging Tour", 0x53, 0x19, "Piece of Heart", &["Graveyard"]),
    gs("Graveyard GS Wall", 0x53, 0x80, &["Graveyard", "Skulltulas"]),
    gs("Graveyard GS Bean Patch", 0x53, 0x01, &["Graveyard", "Skulltulas"]),
    scene_actor("Graveyard Dampe Race Flying Pot 1", FlyingPot, 0x48, Coord(1, 2, 12), "Rupees (5)", &["Graveyard", "Flying Pots"]),
    scene_actor("Graveyard Dampe Race Flying Pot 2", FlyingPot, 0x48, Coord(1, 2, 13), "Rupees (5)", &["Graveyard", "Flying Pots"]),
    scene_actor("Graveyard Royal Familys Tomb Pot 1", Pot, 0x41, Coord(0, 0, 2), "Deku Nuts (5)", &["Graveyard", "Pots"]),
    scene_actor("Graveyard Royal Familys Tomb Pot 2", Pot, 0x41, Coord(0, 0, 3), "Deku Nuts (5)", &["Graveyard", "Pots"]),
    scene_actor("Graveyard Dampe Race Flying Pot 3", FlyingPot, 0x48, Coord(1, 2, 14), "Rupees (5)", &["Graveyard", "Flying Pots"]),
    scene_actor("Graveyard Dampe Race Flying Pot 4", FlyingPot, 0x48, Coord(1, 2, 15), "Rupees (5)", &["Graveyard", "Flying Pots"]),
    scene_actor("Graveyard Dampe Race Rupee 1", Freestanding, 0x48, Coord(1, 2, 20), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 2", Freestanding, 0x48, Coord(1, 2, 21), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 3", Freestanding, 0x48, Coord(1, 2, 22), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 4", Freestanding, 0x48, Coord(1, 2, 23), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 5", Freestanding, 0x48, Coord(1, 2, 24), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 6", Freestanding, 0x48, Coord(1, 2, 25), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 7", Freestanding, 0x48, Coord(1, 2, 26), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 8", Freestanding, 0x48, Coord(1, 2, 27), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 9", Freestanding, 0x48, Coord(1, 2, 28), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 10", Freestanding, 0x48, Coord(1, 2, 29), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 11", Freestanding, 0x48, Coord(1, 2, 30), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 12", Freestanding, 0x48, Coord(1, 2, 31), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 13", Freestanding, 0x48, Coord(1, 2, 32), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 14", Freestanding, 0x48, Coord(1, 2, 33), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 15", Freestanding, 0x48, Coord(1, 2, 34), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 16", Freestanding, 0x48, Coord(1, 2, 35), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 17", Freestanding, 0x48, Coord(1, 2, 36), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 18", Freestanding, 0x48, Coord(1, 2, 37), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 19", Freestanding, 0x48, Coord(1, 2, 38), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 20", Freestanding, 0x48, Coord(1, 2, 39), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 21", Freestanding, 0x48, Coord(1, 2, 40), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 22", Freestanding, 0x48, Coord(1, 2, 41), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 23", Freestanding, 0x48, Coord(1, 2, 42), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Dampe Race Rupee 24", Freestanding, 0x48, Coord(1, 2, 43), "Rupee (1)", &["Graveyard", "Freestandings", "Minigames"]),
    scene_actor("Graveyard Shield Grave Pot 1", Pot, 0x40, Coord(0, 0, 2), "Rupee (1)", &["Graveyard", "Pots"]),
    scene_actor("Graveyard Shield Grave Pot 2", Pot, 0x40, Coord(0, 0, 3), "Rupee (1)", &["Graveyard", "Pots"]),
    scene_actor("Graveyard Grass 1", Collectable, 0x53, Coord(0, 0, 12), "Rupee (1)", &["Graveyard", "Grass"]),
    scene_actor("Graveyard Grass 2", Collectable, 0x53, Coord(0, 0, 13), "Rupee (1)", &["Graveyard", "Grass"]),
    scene_actor("Graveyard Grass 3", Collectable, 0x53, Coord(0, 0, 14), "Rupee (1)", &["Graveyard", "Grass"]),
    scene_actor("Graveyard Grass 4", Collectable, 0x53, Coord(0, 0, 15), "Rupee (1)", &["Graveyard", "Grass"]),
    scene_actor("Graveyard Grass 5", Collectable, 0x53, Coord(0, 0, 16), "Rupee (1)", &["Graveyard", "Grass"]),
    scene_actor("Graveyard Grass 6", Collectable, 0x53, Coord(0, 0, 17), "Rupee (1)", &["Graveyard", "Grass"]),
    // Death Mountain Trail
    chest("DMT Chest", 0x60, 0x01, "Rupees (50)", &["Death Mountain Trail"]),
    chest("DMT Storms Grotto Chest", 0x3E, 0x17, "Rupees (200)", &["Death Mountain Trail", "Grottos"]),
    collectable("DMT Freestanding PoH", 0x60, 0x1E, "Piece of Heart", &["Death Mountain Trail", "Freestandings"]),
    npc("DMT Biggoron", 0x60, 0x57, "Biggoron Sword", &["Death Mountain Trail"]),
    npc("DMT Cow Grotto Cow", 0x3E, 0x15, "Milk", &["Death Mountain Trail", "Grottos", "Cows"]),
    npc("DMT Trade Broken Sword", 0x60, 0x23, "Prescription", &["Death Mountain Trail"]),
    npc("DMT Trade Eyedrops", 0x60, 0x26, "Claim Check", &["Death Mountain Trail"]),
    cutscene("DMT Great Fairy Reward", 0x13, "Magic Meter", &["Death Mountain Trail", "Great Fairies"]),
    gs("DMT GS Near Kak", 0x60, 0x04, &["Death Mountain Trail", "Skulltulas"]),
    gs("DMT GS Bean Patch", 0x60, 0x02, &["Death Mountain Trail", "Skulltulas"]),
    gs("DMT GS Above Dodongos Cavern", 0x60, 0x08, &["Death Mountain Trail", "Skulltulas"]),
    gs("DMT GS Falling Rocks Path", 0x60, 0x10, &["Death Mountain Trail", "Skulltulas"]),
    scene_actor("DMT Cow Grotto Beehive", Beehive, 0x3E, Coord(4, 0, 6), "Rupees (20)", &["Death Mountain Trail", "Grottos", "Beehives"]),
    scene_actor("DMT Summit Wonderitem", Wonderitem, 0x60, Coord(0, 2, 18), "Rupees (20)", &["Death Mountain Trail", "Wonderitem"]),
    scene_actor("DMT Blue Rupee", Freestanding, 0x60, Coord(0, 0, 22), "Rupees (5)", &["Death Mountain Trail", "Freestandings"]),
    scene_actor("DMT Red Rupee", Freestanding, 0x60, Coord(0, 0, 23), "Rupees (20)", &["Death Mountain Trail", "Freestandings"]),
    scene_actor("DMT Near Kak Wonderitem", Wonderitem, 0x60, Coord(0, 0, 24), "Rupees (5)", &["Death Mountain Trail", "Wonderitem"]),
    collectable("DMT Grass 1", 0x60, 0x20, "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    collectable("DMT Grass 2", 0x60, 0x21, "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    collectable("DMT Grass 3", 0x60, 0x22, "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    collectable("DMT Grass 4", 0x60, 0x23, "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    collectable("DMT Grass 5", 0x60, 0x24, "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    collectable("DMT Grass 6", 0x60, 0x25, "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    scene_actor("DMT Cow Grotto Beehive 1", Beehive, 0x3E, Coord(9, 0, 10), "Rupees (5)", &["Death Mountain Trail", "Grottos", "Beehives"]),
    scene_actor("DMT Cow Grotto Beehive 2", Beehive, 0x3E, Coord(9, 0, 11), "Rupees (5)", &["Death Mountain Trail", "Grottos", "Beehives"]),
    scene_actor("DMT Storms Grotto Beehive 1", Beehive, 0x3E, Coord(0, 0, 4), "Rupees (5)", &["Death Mountain Trail", "Grottos", "Beehives"]),
    scene_actor("DMT Storms Grotto Beehive 2", Beehive, 0x3E, Coord(0, 0, 5), "Rupees (5)", &["Death Mountain Trail", "Grottos", "Beehives"]),
    scene_actor("DMT Storms Grotto Grass 1", Collectable, 0x3E, Coord(0, 0, 6), "Rupee (1)", &["Death Mountain Trail", "Grottos", "Grass"]),
    scene_actor("DMT Storms Grotto Grass 2", Collectable, 0x3E, Coord(0, 0, 7), "Rupee (1)", &["Death Mountain Trail", "Grottos", "Grass"]),
    scene_actor("DMT Storms Grotto Grass 3", Collectable, 0x3E, Coord(0, 0, 8), "Rupee (1)", &["Death Mountain Trail", "Grottos", "Grass"]),
    scene_actor("DMT Storms Grotto Grass 4", Collectable, 0x3E, Coord(0, 0, 9), "Rupee (1)", &["Death Mountain Trail", "Grottos", "Grass"]),
    scene_actor("DMT Climb Grass 1", Collectable, 0x60, Coord(0, 0, 16), "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    scene_actor("DMT Climb Grass 2", Collectable, 0x60, Coord(0, 0, 17), "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    scene_actor("DMT Climb Grass 3", Collectable, 0x60, Coord(0, 0, 18), "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    scene_actor("DMT Climb Grass 4", Collectable, 0x60, Coord(0, 0, 19), "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    scene_actor("DMT Climb Grass 5", Collectable, 0x60, Coord(0, 0, 20), "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    scene_actor("DMT Climb Grass 6", Collectable, 0x60, Coord(0, 0, 21), "Rupee (1)", &["Death Mountain Trail", "Grass"]),
    scene_actor("DMT Falling Rocks Wonderitem 1", Wonderitem, 0x60, Coord(0, 0, 22), "Rupees (5)", &["Death Mountain Trail", "Wonderitem"]),
    scene_actor("DMT Falling Rocks Wonderitem 2", Wonderitem, 0x60, Coord(0, 0, 23), "Rupees (5)", &["Death Mountain Trail", "Wonderitem"]),
    // Goron City
    chest("GC Maze Left Chest", 0x62, 0x00, "Rupees (200)", &["Goron City"]),
    chest("GC Maze Right Chest", 0x62, 0x01, "Rupees (50)", &["Goron City"]),
    chest("GC Maze Center Chest", 0x62, 0x02, "Rupees (50)", &["Goron City"]),
    collectable("GC Pot Freestanding PoH", 0x62, 0x1F, "Piece of Heart", &["Goron City", "Freestandings"]),
    npc("GC Rolling Goron as Child", 0x62, 0x34, "Bomb Bag", &["Goron City"]),
    npc("GC Rolling Goron as Adult", 0x62, 0x2C, "Goron Tunic", &["Goron City"]),
    npc("GC Darunias Joy", 0x62, 0x54, "Goron Bracelet", &["Goron City"]),
    actor_override("GC Medigoron", 0x62, Coord(1, 2, 4), RomAddrs::List(&[0x2EF7A58, 0x2EF7A60]), "Giants Knife", &["Goron City"]),
    grotto_scrub("GC Deku Scrub Grotto Left", 0xFB, 0x30, "Buy Deku Nut (5)", &["Goron City", "Deku Scrubs", "Grottos"]),
    grotto_scrub("GC Deku Scrub Grotto Center", 0xFB, 0x33, "Buy Arrows (30)", &["Goron City", "Deku Scrubs", "Grottos"]),
    grotto_scrub("GC Deku Scrub Grotto Right", 0xFB, 0x37, "Buy Bombs (5) for 35 Rupees", &["Goron City", "Deku Scrubs", "Grottos"]),
    gs("GC GS Boulder Maze", 0x62, 0x02, &["Goron City", "Skulltulas"]),
    gs("GC GS Center Platform", 0x62, 0x01, &["Goron City", "Skulltulas"]),
    scene_actor("GC Darunias Room Pot 1", Pot, 0x62, Coord(1, 0, 3), "Deku Stick (1)", &["Goron City", "Pots"]),
    scene_actor("GC Darunias Room Pot 2", Pot, 0x62, Coord(1, 0, 4), "Deku Stick (1)", &["Goron City", "Pots"]),
    scene_actor("GC Medigoron Wonderitem", Wonderitem, 0x62, Coord(1, 2, 6), "Rupees (20)", &["Goron City", "Wonderitem"]),
    scene_actor("GC Darunias Room Pot 3", Pot, 0x62, Coord(1, 0, 5), "Deku Stick (1)", &["Goron City", "Pots"]),
    scene_actor("GC Lower Staircase Pot 1", Pot, 0x62, Coord(0, 0, 10), "Rupee (1)", &["Goron City", "Pots"]),
    scene_actor("GC Lower Staircase Pot 2", Pot, 0x62, Coord(0, 0, 11), "Recovery Heart", &["Goron City", "Pots"]),
    scene_actor("GC Upper Staircase Pot 1", Pot, 0x62, Coord(0, 0, 12), "Rupee (1)", &["Goron City", "Pots"]),
    scene_actor("GC Upper Staircase Pot 2", Pot, 0x62, Coord(0, 0, 13), "Rupee (1)", &["Goron City", "Pots"]),
    scene_actor("GC Upper Staircase Pot 3", Pot, 0x62, Coord(0, 0, 14), "Rupees (5)", &["Goron City", "Pots"]),
    scene_actor("GC Boulder Maze Crate", Crate, 0x62, Coord(0, 0, 20), "Rupee (1)", &["Goron City", "Crates"]),
    scene_actor("GC Darunias Room Wonderitem", Wonderitem, 0x62, Coord(1, 0, 7), "Rupees (5)", &["Goron City", "Wonderitem"]),
    shop("GC Shop Item 1", 0x2E, 0x30, 8, 0, "Buy Bombs (5) for 25 Rupees", &["Goron City", "Shops"]),
    shop("GC Shop Item 2", 0x2E, 0x31, 8, 1, "Buy Bombs (10)", &["Goron City", "Shops"]),
    shop("GC Shop Item 3", 0x2E, 0x32, 8, 2, "Buy Bombs (20)", &["Goron City", "Shops"]),
    shop("GC Shop Item 4", 0x2E, 0x33, 8, 3, "Buy Bombs (30)", &["Goron City", "Shops"]),
    shop("GC Shop Item 5", 0x2E, 0x34, 8, 4, "Buy Goron Tunic", &["Goron City", "Shops"]),
    shop("GC Shop Item 6", 0x2E, 0x35, 8, 5, "Buy Heart", &["Goron City", "Shops"]),
    shop("GC Shop Item 7", 0x2E, 0x36, 8, 6, "Buy Red Potion for 40 Rupees", &["Goron City", "Shops"]),
    shop("GC Shop Item 8", 0x2E, 0x37, 8, 7, "Buy Heart", &["Goron City", "Shops"]),
    scene_actor("GC Grass 1", Collectable, 0x62, Coord(0, 0, 14), "Rupee (1)", &["Goron City", "Grass"]),
    scene_actor("GC Grass 2", Collectable, 0x62, Coord(0, 0, 15), "Rupee (1)", &["Goron City", "Grass"]),
    scene_actor("GC Grass 3", Collectable, 0x62, Coord(0, 0, 16), "Rupee (1)", &["Goron City", "Grass"]),
    scene_actor("GC Grass 4", Collectable, 0x62, Coord(0, 0, 17), "Rupee (1)", &["Goron City", "Grass"]),
    scene_actor("GC Grass 5", Collectable, 0x62, Coord(0, 0, 18), "Rupee (1)", &["Goron City", "Grass"]),
    scene_actor("GC Grass 6", Collectable, 0x62, Coord(0, 0, 19), "Rupee (1)", &["Goron City", "Grass"]),
    scene_actor("GC Shop Entrance Pot 1", Pot, 0x62, Coord(1, 0, 8), "Rupee (1)", &["Goron City", "Pots"]),
    scene_actor("GC Shop Entrance Pot 2", Pot, 0x62, Coord(1, 0, 9), "Recovery Heart", &["Goron City", "Pots"]),
    // Death Mountain Crater
    chest("DMC Upper Grotto Chest", 0x3E, 0x1A, "Bombs (20)", &["Death Mountain Crater", "Grottos"]),
    collectable("DMC Wall Freestanding PoH", 0x61, 0x02, "Piece of Heart", &["Death Mountain Crater", "Freestandings"]),
    collectable("DMC Volcano Freestanding PoH", 0x61, 0x08, "Piece of Heart", &["Death Mountain Crater", "Freestandings"]),
    scrub("DMC Deku Scrub", 0x61, 0x37, "Buy Bombs (5) for 35 Rupees", &["Death Mountain Crater", "Deku Scrubs"]),
    grotto_scrub("DMC Deku Scrub Grotto Left", 0xF9, 0x30, "Buy Deku Nut (5)", &["Death Mountain Crater", "Deku Scrubs", "Grottos"]),
    grotto_scrub("DMC Deku Scrub Grotto Center", 0xF9, 0x33, "Buy Arrows (30)", &["Death Mountain Crater", "Deku Scrubs", "Grottos"]),
    grotto_scrub("DMC Deku Scrub Grotto Right", 0xF9, 0x37, "Buy Bombs (5) for 35 Rupees", &["Death Mountain Crater", "Deku Scrubs", "Grottos"]),
    cutscene("DMC Great Fairy Reward", 0x14, "Magic Meter", &["Death Mountain Crater", "Great Fairies"]),
    gs("DMC GS Crate", 0x61, 0x80, &["Death Mountain Crater", "Skulltulas"]),
    gs("DMC GS Bean Patch", 0x61, 0x01, &["Death Mountain Crater", "Skulltulas"]),
    scene_actor("DMC Upper Grotto Beehive Left", Beehive, 0x3E, Coord(5, 0, 4), "Rupees (5)", &["Death Mountain Crater", "Grottos", "Beehives"]),
    scene_actor("DMC Upper Grotto Beehive Right", Beehive, 0x3E, Coord(5, 0, 5), "Rupees (20)", &["Death Mountain Crater", "Grottos", "Beehives"]),
    scene_actor("DMC Bean Platform Green Rupee 1", RupeeTower, 0x61, Multi(&[Collectible(1, 2, 14, 1), Collectible(1, 3, 14, 1)]), "Rupee (1)", &["Death Mountain Crater", "Rupee Towers"]),
    scene_actor("DMC Bean Platform Green Rupee 2", RupeeTower, 0x61, Multi(&[Collectible(1, 2, 14, 2), Collectible(1, 3, 14, 2)]), "Rupee (1)", &["Death Mountain Crater", "Rupee Towers"]),
    scene_actor("DMC Bean Platform Green Rupee 3", RupeeTower, 0x61, Multi(&[Collectible(1, 2, 14, 3), Collectible(1, 3, 14, 3)]), "Rupee (1)", &["Death Mountain Crater", "Rupee Towers"]),
    scene_actor("DMC Bean Platform Green Rupee 4", RupeeTower, 0x61, Multi(&[Collectible(1, 2, 14, 4), Collectible(1, 3, 14, 4)]), "Rupee (1)", &["Death Mountain Crater", "Rupee Towers"]),
    scene_actor("DMC Near Fairy Pot 1", Pot, 0x61, Coord(1, 2, 8), "Rupee (1)", &["Death Mountain Crater", "Pots"]),
    scene_actor("DMC Near Fairy Pot 2", Pot, 0x61, Coord(1, 2, 9), "Recovery Heart", &["Death Mountain Crater", "Pots"]),
    scene_actor("DMC Ladder Area Near Fairy Wonderitem", Wonderitem, 0x61, Coord(1, 0, 10), "Rupees (20)", &["Death Mountain Crater", "Wonderitem"]),
    collectable("DMC Grass 1", 0x61, 0x20, "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    collectable("DMC Grass 2", 0x61, 0x21, "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    collectable("DMC Grass 3", 0x61, 0x22, "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    collectable("DMC Grass 4", 0x61, 0x23, "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    collectable("DMC Grass 5", 0x61, 0x24, "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    collectable("DMC Grass 6", 0x61, 0x25, "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    scene_actor("DMC Upper Grotto Beehive 1", Beehive, 0x3E, Coord(2, 0, 6), "Rupees (5)", &["Death Mountain Crater", "Grottos", "Beehives"]),
    scene_actor("DMC Upper Grotto Beehive 2", Beehive, 0x3E, Coord(2, 0, 7), "Rupees (5)", &["Death Mountain Crater", "Grottos", "Beehives"]),
    scene_actor("DMC Upper Grotto Grass 1", Collectable, 0x3E, Coord(2, 0, 10), "Rupee (1)", &["Death Mountain Crater", "Grottos", "Grass"]),
    scene_actor("DMC Upper Grotto Grass 2", Collectable, 0x3E, Coord(2, 0, 11), "Rupee (1)", &["Death Mountain Crater", "Grottos", "Grass"]),
    scene_actor("DMC Upper Grotto Grass 3", Collectable, 0x3E, Coord(2, 0, 12), "Rupee (1)", &["Death Mountain Crater", "Grottos", "Grass"]),
    scene_actor("DMC Upper Grotto Grass 4", Collectable, 0x3E, Coord(2, 0, 13), "Rupee (1)", &["Death Mountain Crater", "Grottos", "Grass"]),
    scene_actor("DMC Ladder Grass 1", Collectable, 0x61, Coord(1, 0, 12), "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    scene_actor("DMC Ladder Grass 2", Collectable, 0x61, Coord(1, 0, 13), "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    scene_actor("DMC Ladder Grass 3", Collectable, 0x61, Coord(1, 0, 14), "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    scene_actor("DMC Ladder Grass 4", Collectable, 0x61, Coord(1, 0, 15), "Rupee (1)", &["Death Mountain Crater", "Grass"]),
    scene_actor("DMC Near Volcano Wonderitem 1", Wonderitem, 0x61, Coord(1, 2, 16), "Rupees (5)", &["Death Mountain Crater", "Wonderitem"]),
    scene_actor("DMC Near Volcano Wonderitem 2", Wonderitem, 0x61, Coord(1, 2, 17), "Rupees (5)", &["Death Mountain Crater", "Wonderitem"]),
    // Zora River
    actor_override("ZR Magic Bean Salesman", 0x54, Coord(0, 0, 2), RomAddrs::List(&[0x2D29C72]), "Magic Bean", &["Zora River"]),
    chest("ZR Open Grotto Chest", 0x3E, 0x09, "Rupees (20)", &["Zora River", "Grottos"]),
    collectable("ZR Near Open Grotto Freestanding PoH", 0x54, 0x04, "Piece of Heart", &["Zora River", "Freestandings"]),
    collectable("ZR Near Domain Freestanding PoH", 0x54, 0x0B, "Piece of Heart", &["Zora River", "Freestandings"]),
    npc("ZR Frogs in the Rain", 0x54, 0x3E, "Piece of Heart", &["Zora River", "Minigames"]),
    npc("ZR Frogs Ocarina Game", 0x54, 0x76, "Piece of Heart", &["Zora River", "Minigames"]),
    grotto_scrub("ZR Deku Scrub Grotto Front", 0xEB, 0x39, "Buy Red Potion for 30 Rupees", &["Zora River", "Deku Scrubs", "Grottos"]),
    grotto_scrub("ZR Deku Scrub Grotto Rear", 0xEB, 0x3A, "Buy Green Potion", &["Zora River", "Deku Scrubs", "Grottos"]),
    gs("ZR GS Tree", 0x54, 0x01, &["Zora River", "Skulltulas"]),
    gs("ZR GS Ladder", 0x54, 0x02, &["Zora River", "Skulltulas"]),
    gs("ZR GS Near Raised Grottos", 0x54, 0x04, &["Zora River", "Skulltulas"]),
    gs("ZR GS Above Bridge", 0x54, 0x08, &["Zora River", "Skulltulas"]),
    scene_actor("ZR Open Grotto Beehive Left", Beehive, 0x3E, Coord(6, 0, 4), "Rupees (5)", &["Zora River", "Grottos", "Beehives"]),
    scene_actor("ZR Open Grotto Beehive Right", Beehive, 0x3E, Coord(6, 0, 5), "Rupees (20)", &["Zora River", "Grottos", "Beehives"]),
    scene_actor("ZR Waterfall Red Rupee 1", Freestanding, 0x54, Coord(0, 0, 30), "Rupees (20)", &["Zora River", "Freestandings"]),
    scene_actor("ZR Waterfall Red Rupee 2", Freestanding, 0x54, Coord(0, 0, 31), "Rupees (20)", &["Zora River", "Freestandings"]),
    scene_actor("ZR Waterfall Red Rupee 3", Freestanding, 0x54, Coord(0, 0, 32), "Rupees (20)", &["Zora River", "Freestandings"]),
    scene_actor("ZR Waterfall Red Rupee 4", Freestanding, 0x54, Coord(0, 0, 33), "Rupees (20)", &["Zora River", "Freestandings"]),
    scene_actor("ZR Near Domain Wonderitem", Wonderitem, 0x54, Coord(0, 0, 36), "Rupees (5)", &["Zora River", "Wonderitem"]),
    scene_actor("ZR Near Grottos Wonderitem", Wonderitem, 0x54, Coord(0, 0, 37), "Rupees (5)", &["Zora River", "Wonderitem"]),
    collectable("ZR Grass 1", 0x54, 0x28, "Rupee (1)", &["Zora River", "Grass"]),
    collectable("ZR Grass 2", 0x54, 0x29, "Rupee (1)", &["Zora River", "Grass"]),
    collectable("ZR Grass 3", 0x54, 0x2A, "Rupee (1)", &["Zora River", "Grass"]),
    collectable("ZR Grass 4", 0x54, 0x2B, "Rupee (1)", &["Zora River", "Grass"]),
    collectable("ZR Grass 5", 0x54, 0x2C, "Rupee (1)", &["Zora River", "Grass"]),
    collectable("ZR Grass 6", 0x54, 0x2D, "Rupee (1)", &["Zora River", "Grass"]),
    collectable("ZR Grass 7", 0x54, 0x2E, "Rupee (1)", &["Zora River", "Grass"]),
    collectable("ZR Grass 8", 0x54, 0x2F, "Rupee (1)", &["Zora River", "Grass"]),
    scene_actor("ZR Open Grotto Beehive 1", Beehive, 0x3E, Coord(8, 0, 12), "Rupees (5)", &["Zora River", "Grottos", "Beehives"]),
    scene_actor("ZR Open Grotto Beehive 2", Beehive, 0x3E, Coord(8, 0, 13), "Rupees (5)", &["Zora River", "Grottos", "Beehives"]),
    scene_actor("ZR Storms Grotto Beehive", Beehive, 0x3E, Coord(5, 0, 5), "Rupees (5)", &["Zora River", "Grottos", "Beehives"]),
    scene_actor("ZR Open Grotto Grass 1", Collectable, 0x3E, Coord(8, 0, 14), "Rupee (1)", &["Zora River", "Grottos", "Grass"]),
    scene_actor("ZR Open Grotto Grass 2", Collectable, 0x3E, Coord(8, 0, 15), "Rupee (1)", &["Zora River", "Grottos", "Grass"]),
    scene_actor("ZR Open Grotto Grass 3", Collectable, 0x3E, Coord(8, 0, 16), "Rupee (1)", &["Zora River", "Grottos", "Grass"]),
    scene_actor("ZR Open Grotto Grass 4", Collectable, 0x3E, Coord(8, 0, 17), "Rupee (1)", &["Zora River", "Grottos", "Grass"]),
    scene_actor("ZR Storms Grotto Grass 1", Collectable, 0x3E, Coord(5, 0, 6), "Rupee (1)", &["Zora River", "Grottos", "Grass"]),
    scene_actor("ZR Storms Grotto Grass 2", Collectable, 0x3E, Coord(5, 0, 7), "Rupee (1)", &["Zora River", "Grottos", "Grass"]),
    scene_actor("ZR Near Domain Grass 1", Collectable, 0x54, Coord(0, 0, 16), "Rupee (1)", &["Zora River", "Grass"]),
    scene_actor("ZR Near Domain Grass 2", Collectable, 0x54, Coord(0, 0, 17), "Rupee (1)", &["Zora River", "Grass"]),
    scene_actor("ZR Near Domain Grass 3", Collectable, 0x54, Coord(0, 0, 18), "Rupee (1)", &["Zora River", "Grass"]),
    scene_actor("ZR Near Domain Grass 4", Collectable, 0x54, Coord(0, 0, 19), "Rupee (1)", &["Zora River", "Grass"]),
    scene_actor("ZR Near Domain Grass 5", Collectable, 0x54, Coord(0, 0, 20), "Rupee (1)", &["Zora River", "Grass"]),
    scene_actor("ZR Near Domain Grass 6", Collectable, 0x54, Coord(0, 0, 21), "Rupee (1)", &["Zora River", "Grass"]),
    scene_actor("ZR Cliff Wonderitem 1", Wonderitem, 0x54, Coord(0, 2, 22), "Rupees (5)", &["Zora River", "Wonderitem"]),
    scene_actor("ZR Cliff Wonderitem 2", Wonderitem, 0x54, Coord(0, 2, 23), "Rupees (5)", &["Zora River", "Wonderitem"]),
    // Zoras Domain
    chest("ZD Chest", 0x58, 0x00, "Piece of Heart", &["Zoras Domain"]),
    npc("ZD Diving Minigame", 0x58, 0x37, "Silver Scale", &["Zoras Domain", "Minigames"]),
    npc("ZD King Zora Thawed", 0x58, 0x2D, "Zora Tunic", &["Zoras Domain"]),
    npc("ZD Trade Prescription", 0x58, 0x24, "Eyeball Frog", &["Zoras Domain"]),
    gs("ZD GS Frozen Waterfall", 0x58, 0x40, &["Zoras Domain", "Skulltulas"]),
    scene_actor("ZD Pot 1", Pot, 0x58, Coord(0, 0, 10), "Rupee (1)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Pot 2", Pot, 0x58, Coord(0, 0, 11), "Recovery Heart", &["Zoras Domain", "Pots"]),
    scene_actor("ZD In Front of King Zora Beehive Left", Beehive, 0x58, Coord(0, 0, 16), "Rupees (5)", &["Zoras Domain", "Beehives"]),
    scene_actor("ZD In Front of King Zora Beehive Right", Beehive, 0x58, Coord(0, 0, 17), "Rupees (5)", &["Zoras Domain", "Beehives"]),
    scene_actor("ZD King Zora Thawed Wonderitem", Wonderitem, 0x58, Coord(0, 2, 8), "Rupees (20)", &["Zoras Domain", "Wonderitem"]),
    scene_actor("ZD Pot 3", Pot, 0x58, Coord(0, 0, 12), "Rupee (1)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Pot 4", Pot, 0x58, Coord(0, 0, 13), "Rupee (1)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Pot 5", Pot, 0x58, Coord(0, 0, 14), "Deku Nuts (5)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Pot 6", Pot, 0x58, Coord(0, 0, 15), "Rupee (1)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Pot 7", Pot, 0x58, Coord(0, 0, 16), "Rupee (1)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Pot 8", Pot, 0x58, Coord(0, 0, 17), "Recovery Heart", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Pot 9", Pot, 0x58, Coord(1, 0, 18), "Rupee (1)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Pot 10", Pot, 0x58, Coord(1, 0, 19), "Rupees (5)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Behind King Zora Pot 1", Pot, 0x58, Coord(0, 2, 10), "Rupee (1)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Behind King Zora Pot 2", Pot, 0x58, Coord(0, 2, 11), "Rupee (1)", &["Zoras Domain", "Pots"]),
    scene_actor("ZD Shop Wonderitem", Wonderitem, 0x2F, Coord(0, 0, 5), "Rupees (5)", &["Zoras Domain", "Wonderitem"]),
    shop("ZD Shop Item 1", 0x2F, 0x30, 7, 0, "Buy Zora Tunic", &["Zoras Domain", "Shops"]),
    shop("ZD Shop Item 2", 0x2F, 0x31, 7, 1, "Buy Arrows (10)", &["Zoras Domain", "Shops"]),
    shop("ZD Shop Item 3", 0x2F, 0x32, 7, 2, "Buy Heart", &["Zoras Domain", "Shops"]),
    shop("ZD Shop Item 4", 0x2F, 0x33, 7, 3, "Buy Arrows (30)", &["Zoras Domain", "Shops"]),
    shop("ZD Shop Item 5", 0x2F, 0x34, 7, 4, "Buy Deku Nut (5)", &["Zoras Domain", "Shops"]),
    shop("ZD Shop Item 6", 0x2F, 0x35, 7, 5, "Buy Arrows (50)", &["Zoras Domain", "Shops"]),
    shop("ZD Shop Item 7", 0x2F, 0x36, 7, 6, "Buy Fish", &["Zoras Domain", "Shops"]),
    shop("ZD Shop Item 8", 0x2F, 0x37, 7, 7, "Buy Red Potion for 50 Rupees", &["Zoras Domain", "Shops"]),
    scene_actor("ZD Grass 1", Collectable, 0x58, Coord(0, 0, 10), "Rupee (1)", &["Zoras Domain", "Grass"]),
    scene_actor("ZD Grass 2", Collectable, 0x58, Coord(0, 0, 11), "Rupee (1)", &["Zoras Domain", "Grass"]),
    scene_actor("ZD Grass 3", Collectable, 0x58, Coord(0, 0, 12), "Rupee (1)", &["Zoras Domain", "Grass"]),
    scene_actor("ZD Grass 4", Collectable, 0x58, Coord(0, 0, 13), "Rupee (1)", &["Zoras Domain", "Grass"]),
    // Zoras Fountain
    collectable("ZF Iceberg Freestanding PoH", 0x59, 0x01, "Piece of Heart", &["Zoras Fountain", "Freestandings"]),
    collectable("ZF Bottom Freestanding PoH", 0x59, 0x14, "Piece of Heart", &["Zoras Fountain", "Freestandings"]),
    cutscene("ZF Great Fairy Reward", 0x10, "Farores Wind", &["Zoras Fountain", "Great Fairies"]),
    gs("ZF GS Above the Log", 0x59, 0x01, &["Zoras Fountain", "Skulltulas"]),
    gs("ZF GS Tree", 0x59, 0x02, &["Zoras Fountain", "Skulltulas"]),
    gs("ZF GS Hidden Cave", 0x59, 0x04, &["Zoras Fountain", "Skulltulas"]),
    scene_actor("ZF Bottom Green Rupee 1", Freestanding, 0x59, Coord(0, 2, 40), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 2", Freestanding, 0x59, Coord(0, 2, 41), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 3", Freestanding, 0x59, Coord(0, 2, 42), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 4", Freestanding, 0x59, Coord(0, 2, 43), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 5", Freestanding, 0x59, Coord(0, 2, 44), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 6", Freestanding, 0x59, Coord(0, 2, 45), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 7", Freestanding, 0x59, Coord(0, 2, 46), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 8", Freestanding, 0x59, Coord(0, 2, 47), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 9", Freestanding, 0x59, Coord(0, 2, 48), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 10", Freestanding, 0x59, Coord(0, 2, 49), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 11", Freestanding, 0x59, Coord(0, 2, 50), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 12", Freestanding, 0x59, Coord(0, 2, 51), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 13", Freestanding, 0x59, Coord(0, 2, 52), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 14", Freestanding, 0x59, Coord(0, 2, 53), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 15", Freestanding, 0x59, Coord(0, 2, 54), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 16", Freestanding, 0x59, Coord(0, 2, 55), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 17", Freestanding, 0x59, Coord(0, 2, 56), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Bottom Green Rupee 18", Freestanding, 0x59, Coord(0, 2, 57), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Near Jabu Pot 1", Pot, 0x59, Coord(0, 0, 10), "Rupee (1)", &["Zoras Fountain", "Pots"]),
    scene_actor("ZF Near Jabu Pot 2", Pot, 0x59, Coord(0, 0, 11), "Recovery Heart", &["Zoras Fountain", "Pots"]),
    scene_actor("ZF Near Jabu Pot 3", Pot, 0x59, Coord(0, 0, 12), "Deku Nuts (5)", &["Zoras Fountain", "Pots"]),
    scene_actor("ZF Hidden Cave Pot 1", Pot, 0x59, Coord(0, 2, 20), "Rupee (1)", &["Zoras Fountain", "Pots"]),
    scene_actor("ZF Hidden Cave Pot 2", Pot, 0x59, Coord(0, 2, 21), "Rupee (1)", &["Zoras Fountain", "Pots"]),
    scene_actor("ZF Iceberg Green Rupee 1", Freestanding, 0x59, Coord(0, 2, 14), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Iceberg Green Rupee 2", Freestanding, 0x59, Coord(0, 2, 15), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Iceberg Green Rupee 3", Freestanding, 0x59, Coord(0, 2, 16), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    scene_actor("ZF Iceberg Green Rupee 4", Freestanding, 0x59, Coord(0, 2, 17), "Rupee (1)", &["Zoras Fountain", "Freestandings"]),
    // Lon Lon Ranch
    npc("LLR Talons Chickens", 0x4C, 0x14, "Bottle with Milk", &["Lon Lon Ranch", "Minigames"]),
    npc("Links Cow", 0x63, 0x15, "Milk", &["Lon Lon Ranch", "Cows", "Minigames"]),
    npc("LLR Stables Left Cow", 0x3C, 0x16, "Milk", &["Lon Lon Ranch", "Cows"]),
    npc("LLR Stables Right Cow", 0x3C, 0x15, "Milk", &["Lon Lon Ranch", "Cows"]),
    npc("LLR Tower Left Cow", 0x4C, 0x16, "Milk", &["Lon Lon Ranch", "Cows"]),
    npc("LLR Tower Right Cow", 0x4C, 0x15, "Milk", &["Lon Lon Ranch", "Cows"]),
    collectable("LLR Freestanding PoH", 0x4C, 0x01, "Piece of Heart", &["Lon Lon Ranch", "Freestandings"]),
    grotto_scrub("LLR Deku Scrub Grotto Left", 0xFC, 0x30, "Buy Deku Nut (5)", &["Lon Lon Ranch", "Deku Scrubs", "Grottos"]),
    grotto_scrub("LLR Deku Scrub Grotto Center", 0xFC, 0x33, "Buy Deku Seeds (30)", &["Lon Lon Ranch", "Deku Scrubs", "Grottos"]),
    grotto_scrub("LLR Deku Scrub Grotto Right", 0xFC, 0x37, "Buy Bombs (5) for 35 Rupees", &["Lon Lon Ranch", "Deku Scrubs", "Grottos"]),
    gs("LLR GS House Window", 0x63, 0x04, &["Lon Lon Ranch", "Skulltulas"]),
    gs("LLR GS Tree", 0x63, 0x08, &["Lon Lon Ranch", "Skulltulas"]),
    gs("LLR GS Rain Shed", 0x63, 0x02, &["Lon Lon Ranch", "Skulltulas"]),
    gs("LLR GS Back Wall", 0x63, 0x01, &["Lon Lon Ranch", "Skulltulas"]),
    scene_actor("LLR Front Pot 1", Pot, 0x63, Coord(0, 0, 4), "Rupee (1)", &["Lon Lon Ranch", "Pots"]),
    scene_actor("LLR Front Pot 2", Pot, 0x63, Coord(0, 0, 5), "Recovery Heart", &["Lon Lon Ranch", "Pots"]),
    scene_actor("LLR Rain Shed Pot 1", Pot, 0x63, Coord(0, 0, 8), "Rupee (1)", &["Lon Lon Ranch", "Pots"]),
    scene_actor("LLR Rain Shed Pot 2", Pot, 0x63, Coord(0, 0, 9), "Rupee (1)", &["Lon Lon Ranch", "Pots"]),
    scene_actor("LLR Front Crate 1", Crate, 0x63, Coord(0, 0, 12), "Rupee (1)", &["Lon Lon Ranch", "Crates"]),
    scene_actor("LLR Front Crate 2", Crate, 0x63, Coord(0, 0, 13), "Rupee (1)", &["Lon Lon Ranch", "Crates"]),
    scene_actor("LLR Behind Stables Crate", Crate, 0x63, Coord(0, 0, 14), "Rupee (1)", &["Lon Lon Ranch", "Crates"]),
    scene_actor("LLR Talons House Pot 1", Pot, 0x4C, Coord(0, 0, 4), "Rupee (1)", &["Lon Lon Ranch", "Pots"]),
    scene_actor("LLR Talons House Pot 2", Pot, 0x4C, Coord(0, 0, 5), "Rupee (1)", &["Lon Lon Ranch", "Pots"]),
    scene_actor("LLR Talons House Pot 3", Pot, 0x4C, Coord(0, 0, 6), "Recovery Heart", &["Lon Lon Ranch", "Pots"]),
    scene_actor("LLR Stables Wonderitem", Wonderitem, 0x3C, Coord(0, 0, 4), "Rupees (5)", &["Lon Lon Ranch", "Wonderitem"]),
    collectable("LLR Grass 1", 0x63, 0x20, "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    collectable("LLR Grass 2", 0x63, 0x21, "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    collectable("LLR Grass 3", 0x63, 0x22, "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    collectable("LLR Grass 4", 0x63, 0x23, "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    collectable("LLR Grass 5", 0x63, 0x24, "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    collectable("LLR Grass 6", 0x63, 0x25, "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    collectable("LLR Grass 7", 0x63, 0x26, "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    collectable("LLR Grass 8", 0x63, 0x27, "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Corral Grass 1", Collectable, 0x63, Coord(0, 0, 14), "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Corral Grass 2", Collectable, 0x63, Coord(0, 0, 15), "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Corral Grass 3", Collectable, 0x63, Coord(0, 0, 16), "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Corral Grass 4", Collectable, 0x63, Coord(0, 0, 17), "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Corral Grass 5", Collectable, 0x63, Coord(0, 0, 18), "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Corral Grass 6", Collectable, 0x63, Coord(0, 0, 19), "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Corral Grass 7", Collectable, 0x63, Coord(0, 0, 20), "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Corral Grass 8", Collectable, 0x63, Coord(0, 0, 21), "Rupee (1)", &["Lon Lon Ranch", "Grass"]),
    scene_actor("LLR Stable Pot 1", Pot, 0x3C, Coord(0, 0, 6), "Rupee (1)", &["Lon Lon Ranch", "Pots"]),
    scene_actor("LLR Stable Pot 2", Pot, 0x3C, Coord(0, 0, 7), "Rupee (1)", &["Lon Lon Ranch", "Pots"]),
    // Deku Tree
    chest("Deku Tree Map Chest", 0x00, 0x03, "Map (Deku Tree)", &["Deku Tree", "Vanilla Dungeons"]),
    chest("Deku Tree Slingshot Room Side Chest", 0x00, 0x05, "Recovery Heart", &["Deku Tree", "Vanilla Dungeons"]),
    chest("Deku Tree Slingshot Chest", 0x00, 0x01, "Slingshot", &["Deku Tree", "Vanilla Dungeons"]),
    chest("Deku Tree Compass Chest", 0x00, 0x02, "Compass (Deku Tree)", &["Deku Tree", "Vanilla Dungeons"]),
    chest("Deku Tree Compass Room Side Chest", 0x00, 0x06, "Recovery Heart", &["Deku Tree", "Vanilla Dungeons"]),
    chest("Deku Tree Basement Chest", 0x00, 0x04, "Rupees (5)", &["Deku Tree", "Vanilla Dungeons"]),
    gs("Deku Tree GS Compass Room", 0x00, 0x08, &["Deku Tree", "Vanilla Dungeons", "Skulltulas"]),
    gs("Deku Tree GS Basement Vines", 0x00, 0x04, &["Deku Tree", "Vanilla Dungeons", "Skulltulas"]),
    gs("Deku Tree GS Basement Gate", 0x00, 0x02, &["Deku Tree", "Vanilla Dungeons", "Skulltulas"]),
    gs("Deku Tree GS Basement Back Room", 0x00, 0x01, &["Deku Tree", "Vanilla Dungeons", "Skulltulas"]),
    chest("Deku Tree MQ Map Chest", 0x00, 0x03, "Map (Deku Tree)", &["Deku Tree", "Master Quest"]),
    chest("Deku Tree MQ Slingshot Chest", 0x00, 0x06, "Slingshot", &["Deku Tree", "Master Quest"]),
    chest("Deku Tree MQ Slingshot Room Back Chest", 0x00, 0x02, "Deku Shield", &["Deku Tree", "Master Quest"]),
    chest("Deku Tree MQ Compass Chest", 0x00, 0x01, "Compass (Deku Tree)", &["Deku Tree", "Master Quest"]),
    chest("Deku Tree MQ Basement Chest", 0x00, 0x04, "Deku Shield", &["Deku Tree", "Master Quest"]),
    chest("Deku Tree MQ Before Spinning Log Chest", 0x00, 0x05, "Rupees (20)", &["Deku Tree", "Master Quest"]),
    chest("Deku Tree MQ After Spinning Log Chest", 0x00, 0x00, "Rupees (50)", &["Deku Tree", "Master Quest"]),
    scrub("Deku Tree MQ Deku Scrub", 0x00, 0x34, "Buy Deku Shield", &["Deku Tree", "Master Quest", "Deku Scrubs"]),
    gs("Deku Tree MQ GS Lobby", 0x00, 0x02, &["Deku Tree", "Master Quest", "Skulltulas"]),
    gs("Deku Tree MQ GS Compass Room", 0x00, 0x08, &["Deku Tree", "Master Quest", "Skulltulas"]),
    gs("Deku Tree MQ GS Basement Graves Room", 0x00, 0x04, &["Deku Tree", "Master Quest", "Skulltulas"]),
    gs("Deku Tree MQ GS Basement Back Room", 0x00, 0x01, &["Deku Tree", "Master Quest", "Skulltulas"]),
    scene_actor("Deku Tree Lobby Lower Heart", Freestanding, 0x00, Coord(0, 0, 14), "Recovery Heart", &["Deku Tree", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Deku Tree Lobby Upper Heart", Freestanding, 0x00, Coord(0, 0, 15), "Recovery Heart", &["Deku Tree", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Deku Tree Basement Green Rupee 1", Freestanding, 0x00, Coord(7, 0, 10), "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Deku Tree Basement Green Rupee 2", Freestanding, 0x00, Coord(7, 0, 11), "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Deku Tree Compass Room Pot 1", Pot, 0x00, Coord(3, 0, 6), "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Pots"]),
    scene_actor("Deku Tree Compass Room Pot 2", Pot, 0x00, Coord(3, 0, 7), "Recovery Heart", &["Deku Tree", "Vanilla Dungeons", "Pots"]),
    scene_actor("Deku Tree MQ Lobby Crate", Crate, 0x00, Coord(0, 0, 20), "Rupee (1)", &["Deku Tree", "Master Quest", "Crates"]),
    scene_actor("Deku Tree MQ Slingshot Room Back Pot 1", Pot, 0x00, Coord(2, 0, 8), "Rupee (1)", &["Deku Tree", "Master Quest", "Pots"]),
    scene_actor("Deku Tree MQ Slingshot Room Back Pot 2", Pot, 0x00, Coord(2, 0, 9), "Recovery Heart", &["Deku Tree", "Master Quest", "Pots"]),
    boss_heart("Deku Tree Queen Gohma Heart", 0x11, 0x4F, &["Deku Tree"]),
    scene_actor("Deku Tree Boss Room Heart 1", Freestanding, 0x11, Coord(0, 0, 8), "Recovery Heart", &["Deku Tree", "Freestandings"]),
    scene_actor("Deku Tree Boss Room Heart 2", Freestanding, 0x11, Coord(0, 0, 9), "Recovery Heart", &["Deku Tree", "Freestandings"]),
    collectable("Deku Tree Lobby Grass 1", 0x00, 0x20, "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Grass"]),
    collectable("Deku Tree Lobby Grass 2", 0x00, 0x21, "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Grass"]),
    collectable("Deku Tree Lobby Grass 3", 0x00, 0x22, "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Grass"]),
    collectable("Deku Tree Lobby Grass 4", 0x00, 0x23, "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Grass"]),
    collectable("Deku Tree Basement Grass 1", 0x00, 0x24, "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Grass"]),
    collectable("Deku Tree Basement Grass 2", 0x00, 0x25, "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Grass"]),
    collectable("Deku Tree Basement Grass 3", 0x00, 0x26, "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Grass"]),
    collectable("Deku Tree Basement Grass 4", 0x00, 0x27, "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Grass"]),
    collectable("Deku Tree MQ Lobby Grass 1", 0x00, 0x28, "Rupee (1)", &["Deku Tree", "Master Quest", "Grass"]),
    collectable("Deku Tree MQ Lobby Grass 2", 0x00, 0x29, "Rupee (1)", &["Deku Tree", "Master Quest", "Grass"]),
    collectable("Deku Tree MQ Basement Grass 1", 0x00, 0x2A, "Rupee (1)", &["Deku Tree", "Master Quest", "Grass"]),
    collectable("Deku Tree MQ Basement Grass 2", 0x00, 0x2B, "Rupee (1)", &["Deku Tree", "Master Quest", "Grass"]),
    scene_actor("Deku Tree Slingshot Room Wonderitem 1", Wonderitem, 0x00, Coord(6, 0, 8), "Rupees (5)", &["Deku Tree", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Deku Tree Slingshot Room Wonderitem 2", Wonderitem, 0x00, Coord(6, 0, 9), "Rupees (5)", &["Deku Tree", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Deku Tree Basement Pot 1", Pot, 0x00, Coord(8, 0, 5), "Rupee (1)", &["Deku Tree", "Vanilla Dungeons", "Pots"]),
    scene_actor("Deku Tree Basement Pot 2", Pot, 0x00, Coord(8, 0, 6), "Recovery Heart", &["Deku Tree", "Vanilla Dungeons", "Pots"]),
    scene_actor("Deku Tree MQ Water Room Pot 1", Pot, 0x00, Coord(9, 0, 4), "Rupee (1)", &["Deku Tree", "Master Quest", "Pots"]),
    scene_actor("Deku Tree MQ Water Room Pot 2", Pot, 0x00, Coord(9, 0, 5), "Deku Nuts (5)", &["Deku Tree", "Master Quest", "Pots"]),
    scene_actor("Deku Tree Compass Room Wonderitem 1", Wonderitem, 0x00, Coord(2, 0, 6), "Rupees (5)", &["Deku Tree", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Deku Tree Compass Room Wonderitem 2", Wonderitem, 0x00, Coord(2, 0, 7), "Rupees (5)", &["Deku Tree", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Deku Tree MQ Compass Room Wonderitem 1", Wonderitem, 0x00, Coord(2, 0, 8), "Rupees (5)", &["Deku Tree", "Master Quest", "Wonderitem"]),
    scene_actor("Deku Tree MQ Compass Room Wonderitem 2", Wonderitem, 0x00, Coord(2, 0, 9), "Rupees (5)", &["Deku Tree", "Master Quest", "Wonderitem"]),
    // Dodongos Cavern
    chest("Dodongos Cavern Map Chest", 0x01, 0x08, "Map (Dodongos Cavern)", &["Dodongos Cavern", "Vanilla Dungeons"]),
    chest("Dodongos Cavern Compass Chest", 0x01, 0x05, "Compass (Dodongos Cavern)", &["Dodongos Cavern", "Vanilla Dungeons"]),
    chest("Dodongos Cavern Bomb Flower Platform Chest", 0x01, 0x06, "Rupees (20)", &["Dodongos Cavern", "Vanilla Dungeons"]),
    chest("Dodongos Cavern Bomb Bag Chest", 0x01, 0x04, "Bomb Bag", &["Dodongos Cavern", "Vanilla Dungeons"]),
    chest("Dodongos Cavern End of Bridge Chest", 0x01, 0x0A, "Deku Shield", &["Dodongos Cavern", "Vanilla Dungeons"]),
    chest("Dodongos Cavern Boss Room Chest", 0x12, 0x00, "Bombs (5)", &["Dodongos Cavern", "Vanilla Dungeons"]),
    scrub("Dodongos Cavern Deku Scrub Side Room Near Dodongos", 0x01, 0x31, "Buy Deku Stick (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Deku Scrubs"]),
    scrub("Dodongos Cavern Deku Scrub Lobby", 0x01, 0x34, "Buy Deku Shield", &["Dodongos Cavern", "Vanilla Dungeons", "Deku Scrubs"]),
    scrub("Dodongos Cavern Deku Scrub Near Bomb Bag Left", 0x01, 0x30, "Buy Deku Nut (5)", &["Dodongos Cavern", "Vanilla Dungeons", "Deku Scrubs"]),
    scrub("Dodongos Cavern Deku Scrub Near Bomb Bag Right", 0x01, 0x33, "Buy Deku Seeds (30)", &["Dodongos Cavern", "Vanilla Dungeons", "Deku Scrubs"]),
    gs("Dodongos Cavern GS Side Room Near Lower Lizalfos", 0x01, 0x10, &["Dodongos Cavern", "Vanilla Dungeons", "Skulltulas"]),
    gs("Dodongos Cavern GS Vines Above Stairs", 0x01, 0x01, &["Dodongos Cavern", "Vanilla Dungeons", "Skulltulas"]),
    gs("Dodongos Cavern GS Back Room", 0x01, 0x08, &["Dodongos Cavern", "Vanilla Dungeons", "Skulltulas"]),
    gs("Dodongos Cavern GS Alcove Above Stairs", 0x01, 0x02, &["Dodongos Cavern", "Vanilla Dungeons", "Skulltulas"]),
    gs("Dodongos Cavern GS Scarecrow", 0x01, 0x04, &["Dodongos Cavern", "Vanilla Dungeons", "Skulltulas"]),
    scene_actor("Dodongos Cavern Lobby Pot 1", Pot, 0x01, Coord(0, 0, 5), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Lobby Pot 2", Pot, 0x01, Coord(0, 0, 6), "Recovery Heart", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Staircase Silver Rupee 1", SilverRupee, 0x01, Coord(2, 0, 20), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Dodongos Cavern Staircase Silver Rupee 2", SilverRupee, 0x01, Coord(2, 0, 21), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Dodongos Cavern Staircase Silver Rupee 3", SilverRupee, 0x01, Coord(2, 0, 22), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Dodongos Cavern Staircase Silver Rupee 4", SilverRupee, 0x01, Coord(2, 0, 23), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Dodongos Cavern Staircase Silver Rupee 5", SilverRupee, 0x01, Coord(2, 0, 24), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    chest("Dodongos Cavern MQ Map Chest", 0x01, 0x00, "Map (Dodongos Cavern)", &["Dodongos Cavern", "Master Quest"]),
    chest("Dodongos Cavern MQ Bomb Bag Chest", 0x01, 0x04, "Bomb Bag", &["Dodongos Cavern", "Master Quest"]),
    chest("Dodongos Cavern MQ Compass Chest", 0x01, 0x05, "Compass (Dodongos Cavern)", &["Dodongos Cavern", "Master Quest"]),
    chest("Dodongos Cavern MQ Larvae Room Chest", 0x01, 0x02, "Deku Shield", &["Dodongos Cavern", "Master Quest"]),
    chest("Dodongos Cavern MQ Torch Puzzle Room Chest", 0x01, 0x03, "Rupees (20)", &["Dodongos Cavern", "Master Quest"]),
    chest("Dodongos Cavern MQ Under Grave Chest", 0x01, 0x01, "Hylian Shield", &["Dodongos Cavern", "Master Quest"]),
    scrub("Dodongos Cavern MQ Deku Scrub Lobby Front", 0x01, 0x33, "Buy Deku Seeds (30)", &["Dodongos Cavern", "Master Quest", "Deku Scrubs"]),
    scrub("Dodongos Cavern MQ Deku Scrub Lobby Rear", 0x01, 0x31, "Buy Deku Stick (1)", &["Dodongos Cavern", "Master Quest", "Deku Scrubs"]),
    scrub("Dodongos Cavern MQ Deku Scrub Staircase", 0x01, 0x34, "Buy Deku Shield", &["Dodongos Cavern", "Master Quest", "Deku Scrubs"]),
    scrub("Dodongos Cavern MQ Deku Scrub Side Room Near Lower Lizalfos", 0x01, 0x39, "Buy Red Potion for 30 Rupees", &["Dodongos Cavern", "Master Quest", "Deku Scrubs"]),
    gs("Dodongos Cavern MQ GS Scrub Room", 0x01, 0x02, &["Dodongos Cavern", "Master Quest", "Skulltulas"]),
    gs("Dodongos Cavern MQ GS Song of Time Block Room", 0x01, 0x08, &["Dodongos Cavern", "Master Quest", "Skulltulas"]),
    gs("Dodongos Cavern MQ GS Lizalfos Room", 0x01, 0x04, &["Dodongos Cavern", "Master Quest", "Skulltulas"]),
    gs("Dodongos Cavern MQ GS Larvae Room", 0x01, 0x10, &["Dodongos Cavern", "Master Quest", "Skulltulas"]),
    gs("Dodongos Cavern MQ GS Back Area", 0x01, 0x01, &["Dodongos Cavern", "Master Quest", "Skulltulas"]),
    scene_actor("Dodongos Cavern Lobby Pot 3", Pot, 0x01, Coord(0, 0, 7), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Lobby Pot 4", Pot, 0x01, Coord(0, 0, 8), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Blade Room Pot 1", Pot, 0x01, Coord(3, 0, 4), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Blade Room Pot 2", Pot, 0x01, Coord(3, 0, 5), "Recovery Heart", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Torch Room Pot 1", Pot, 0x01, Coord(5, 0, 6), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Torch Room Pot 2", Pot, 0x01, Coord(5, 0, 7), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Last Block Pot 1", Pot, 0x01, Coord(9, 0, 8), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Last Block Pot 2", Pot, 0x01, Coord(9, 0, 9), "Recovery Heart", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Staircase Crate 1", Crate, 0x01, Coord(2, 0, 26), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Crates"]),
    scene_actor("Dodongos Cavern Staircase Crate 2", Crate, 0x01, Coord(2, 0, 27), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Crates"]),
    scene_actor("Dodongos Cavern MQ Lobby Pot 1", Pot, 0x01, Coord(0, 0, 10), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Pots"]),
    scene_actor("Dodongos Cavern MQ Lobby Pot 2", Pot, 0x01, Coord(0, 0, 11), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Pots"]),
    scene_actor("Dodongos Cavern MQ Torch Puzzle Room Pot 1", Pot, 0x01, Coord(5, 0, 8), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Pots"]),
    scene_actor("Dodongos Cavern MQ Torch Puzzle Room Pot 2", Pot, 0x01, Coord(5, 0, 9), "Recovery Heart", &["Dodongos Cavern", "Master Quest", "Pots"]),
    scene_actor("Dodongos Cavern MQ Poes Room Crate 1", Crate, 0x01, Coord(6, 0, 20), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Crates"]),
    scene_actor("Dodongos Cavern MQ Poes Room Crate 2", Crate, 0x01, Coord(6, 0, 21), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Crates"]),
    boss_heart("Dodongos Cavern King Dodongo Heart", 0x12, 0x4F, &["Dodongos Cavern"]),
    scene_actor("Dodongos Cavern Boss Room Heart 1", Freestanding, 0x12, Coord(0, 0, 6), "Recovery Heart", &["Dodongos Cavern", "Freestandings"]),
    scene_actor("Dodongos Cavern Boss Room Heart 2", Freestanding, 0x12, Coord(0, 0, 7), "Recovery Heart", &["Dodongos Cavern", "Freestandings"]),
    collectable("Dodongos Cavern Lobby Grass 1", 0x01, 0x20, "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Grass"]),
    collectable("Dodongos Cavern Lobby Grass 2", 0x01, 0x21, "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Grass"]),
    collectable("Dodongos Cavern Lobby Grass 3", 0x01, 0x22, "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Grass"]),
    collectable("Dodongos Cavern Lobby Grass 4", 0x01, 0x23, "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Grass"]),
    collectable("Dodongos Cavern Second Lizalfos Grass 1", 0x01, 0x24, "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Grass"]),
    collectable("Dodongos Cavern Second Lizalfos Grass 2", 0x01, 0x25, "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Grass"]),
    collectable("Dodongos Cavern MQ Lobby Grass 1", 0x01, 0x26, "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Grass"]),
    collectable("Dodongos Cavern MQ Lobby Grass 2", 0x01, 0x27, "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Grass"]),
    scene_actor("Dodongos Cavern Lower Lizalfos Wonderitem 1", Wonderitem, 0x01, Coord(3, 0, 8), "Rupees (5)", &["Dodongos Cavern", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Dodongos Cavern Lower Lizalfos Wonderitem 2", Wonderitem, 0x01, Coord(3, 0, 9), "Rupees (5)", &["Dodongos Cavern", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Dodongos Cavern Before Boss Flying Pot 1", FlyingPot, 0x01, Coord(15, 0, 3), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Dodongos Cavern Before Boss Flying Pot 2", FlyingPot, 0x01, Coord(15, 0, 4), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Dodongos Cavern Bomb Flower Platform Pot 1", Pot, 0x01, Coord(7, 0, 5), "Rupee (1)", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern Bomb Flower Platform Pot 2", Pot, 0x01, Coord(7, 0, 6), "Recovery Heart", &["Dodongos Cavern", "Vanilla Dungeons", "Pots"]),
    scene_actor("Dodongos Cavern MQ Armos Army Room Pot 1", Pot, 0x01, Coord(11, 0, 4), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Pots"]),
    scene_actor("Dodongos Cavern MQ Armos Army Room Pot 2", Pot, 0x01, Coord(11, 0, 5), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Pots"]),
    scene_actor("Dodongos Cavern MQ Before Boss Wonderitem", Wonderitem, 0x01, Coord(15, 0, 5), "Rupees (5)", &["Dodongos Cavern", "Master Quest", "Wonderitem"]),
    scene_actor("Dodongos Cavern MQ Staircase Silver Rupee 1", SilverRupee, 0x01, Coord(2, 0, 30), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Silver Rupees"]),
    scene_actor("Dodongos Cavern MQ Staircase Silver Rupee 2", SilverRupee, 0x01, Coord(2, 0, 31), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Silver Rupees"]),
    scene_actor("Dodongos Cavern MQ Staircase Silver Rupee 3", SilverRupee, 0x01, Coord(2, 0, 32), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Silver Rupees"]),
    scene_actor("Dodongos Cavern MQ Staircase Silver Rupee 4", SilverRupee, 0x01, Coord(2, 0, 33), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Silver Rupees"]),
    scene_actor("Dodongos Cavern MQ Staircase Silver Rupee 5", SilverRupee, 0x01, Coord(2, 0, 34), "Rupee (1)", &["Dodongos Cavern", "Master Quest", "Silver Rupees"]),
    // Jabu Jabus Belly
    chest("Jabu Jabus Belly Boomerang Chest", 0x02, 0x01, "Boomerang", &["Jabu Jabus Belly", "Vanilla Dungeons"]),
    chest("Jabu Jabus Belly Map Chest", 0x02, 0x02, "Map (Jabu Jabus Belly)", &["Jabu Jabus Belly", "Vanilla Dungeons"]),
    chest("Jabu Jabus Belly Compass Chest", 0x02, 0x04, "Compass (Jabu Jabus Belly)", &["Jabu Jabus Belly", "Vanilla Dungeons"]),
    scrub("Jabu Jabus Belly Deku Scrub", 0x02, 0x30, "Buy Deku Nut (5)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Deku Scrubs"]),
    gs("Jabu Jabus Belly GS Water Switch Room", 0x02, 0x08, &["Jabu Jabus Belly", "Vanilla Dungeons", "Skulltulas"]),
    gs("Jabu Jabus Belly GS Lobby Basement Lower", 0x02, 0x01, &["Jabu Jabus Belly", "Vanilla Dungeons", "Skulltulas"]),
    gs("Jabu Jabus Belly GS Lobby Basement Upper", 0x02, 0x02, &["Jabu Jabus Belly", "Vanilla Dungeons", "Skulltulas"]),
    gs("Jabu Jabus Belly GS Near Boss", 0x02, 0x04, &["Jabu Jabus Belly", "Vanilla Dungeons", "Skulltulas"]),
    scene_actor("Jabu Jabus Belly Two Octorok Pot 1", Pot, 0x02, Coord(3, 0, 10), "Deku Nuts (5)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    scene_actor("Jabu Jabus Belly Two Octorok Pot 2", Pot, 0x02, Coord(3, 0, 11), "Deku Nuts (5)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    chest("Jabu Jabus Belly MQ First Room Side Chest", 0x02, 0x05, "Deku Nuts (5)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Map Chest", 0x02, 0x03, "Map (Jabu Jabus Belly)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Second Room Lower Chest", 0x02, 0x02, "Deku Nuts (5)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Compass Chest", 0x02, 0x00, "Compass (Jabu Jabus Belly)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Second Room Upper Chest", 0x02, 0x07, "Recovery Heart", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Basement Near Switches Chest", 0x02, 0x08, "Deku Nuts (5)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Basement Near Vines Chest", 0x02, 0x04, "Bombchus (10)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Near Boss Chest", 0x02, 0x0A, "Rupees (5)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Falling Like Like Room Chest", 0x02, 0x09, "Deku Sticks (5)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Boomerang Room Small Chest", 0x02, 0x01, "Deku Nuts (5)", &["Jabu Jabus Belly", "Master Quest"]),
    chest("Jabu Jabus Belly MQ Boomerang Chest", 0x02, 0x06, "Boomerang", &["Jabu Jabus Belly", "Master Quest"]),
    npc("Jabu Jabus Belly MQ Cow", 0x02, 0x15, "Milk", &["Jabu Jabus Belly", "Master Quest", "Cows"]),
    gs("Jabu Jabus Belly MQ GS Tailpasaran Room", 0x02, 0x04, &["Jabu Jabus Belly", "Master Quest", "Skulltulas"]),
    gs("Jabu Jabus Belly MQ GS Invisible Enemies Room", 0x02, 0x08, &["Jabu Jabus Belly", "Master Quest", "Skulltulas"]),
    gs("Jabu Jabus Belly MQ GS Boomerang Chest Room", 0x02, 0x01, &["Jabu Jabus Belly", "Master Quest", "Skulltulas"]),
    gs("Jabu Jabus Belly MQ GS Near Boss", 0x02, 0x02, &["Jabu Jabus Belly", "Master Quest", "Skulltulas"]),
    scene_actor("Jabu Jabus Belly Basement Pot 1", Pot, 0x02, Coord(8, 0, 5), "Rupee (1)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    scene_actor("Jabu Jabus Belly Basement Pot 2", Pot, 0x02, Coord(8, 0, 6), "Deku Nuts (5)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    scene_actor("Jabu Jabus Belly Basement Pot 3", Pot, 0x02, Coord(8, 0, 7), "Recovery Heart", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    scene_actor("Jabu Jabus Belly Two Octoroks Pot 1", Pot, 0x02, Coord(10, 0, 4), "Rupee (1)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    scene_actor("Jabu Jabus Belly Two Octoroks Pot 2", Pot, 0x02, Coord(10, 0, 5), "Rupee (1)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    scene_actor("Jabu Jabus Belly MQ Entry Red Rupee 1", Freestanding, 0x02, Coord(0, 0, 9), "Rupees (20)", &["Jabu Jabus Belly", "Master Quest", "Freestandings"]),
    scene_actor("Jabu Jabus Belly MQ Entry Red Rupee 2", Freestanding, 0x02, Coord(0, 0, 10), "Rupees (20)", &["Jabu Jabus Belly", "Master Quest", "Freestandings"]),
    scene_actor("Jabu Jabus Belly MQ Lift Room Pot 1", Pot, 0x02, Coord(4, 0, 6), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Pots"]),
    scene_actor("Jabu Jabus Belly MQ Lift Room Pot 2", Pot, 0x02, Coord(4, 0, 7), "Recovery Heart", &["Jabu Jabus Belly", "Master Quest", "Pots"]),
    scene_actor("Jabu Jabus Belly MQ Boss Hallway Pot 1", Pot, 0x02, Coord(14, 0, 3), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Pots"]),
    scene_actor("Jabu Jabus Belly MQ Boss Hallway Pot 2", Pot, 0x02, Coord(14, 0, 4), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Pots"]),
    boss_heart("Jabu Jabus Belly Barinade Heart", 0x13, 0x4F, &["Jabu Jabus Belly"]),
    scene_actor("Jabu Jabus Belly Boss Room Heart 1", Freestanding, 0x13, Coord(0, 0, 5), "Recovery Heart", &["Jabu Jabus Belly", "Freestandings"]),
    scene_actor("Jabu Jabus Belly Boss Room Heart 2", Freestanding, 0x13, Coord(0, 0, 6), "Recovery Heart", &["Jabu Jabus Belly", "Freestandings"]),
    scene_actor("Jabu Jabus Belly MQ Entry Small Crate 1", SmallCrate, 0x02, Coord(0, 0, 11), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Entry Small Crate 2", SmallCrate, 0x02, Coord(0, 0, 12), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Entry Small Crate 3", SmallCrate, 0x02, Coord(0, 0, 13), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Entry Small Crate 4", SmallCrate, 0x02, Coord(0, 0, 14), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Elevator Room Small Crate 1", SmallCrate, 0x02, Coord(2, 0, 6), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Elevator Room Small Crate 2", SmallCrate, 0x02, Coord(2, 0, 7), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Elevator Room Small Crate 3", SmallCrate, 0x02, Coord(2, 0, 8), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Elevator Room Small Crate 4", SmallCrate, 0x02, Coord(2, 0, 9), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Big Octo Room Small Crate 1", SmallCrate, 0x02, Coord(12, 0, 5), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Big Octo Room Small Crate 2", SmallCrate, 0x02, Coord(12, 0, 6), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Big Octo Room Small Crate 3", SmallCrate, 0x02, Coord(12, 0, 7), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly MQ Big Octo Room Small Crate 4", SmallCrate, 0x02, Coord(12, 0, 8), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Small Crates"]),
    scene_actor("Jabu Jabus Belly Main Room Wonderitem 1", Wonderitem, 0x02, Coord(1, 0, 6), "Rupees (5)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Jabu Jabus Belly Main Room Wonderitem 2", Wonderitem, 0x02, Coord(1, 0, 7), "Rupees (5)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Jabu Jabus Belly Near Boss Pot 1", Pot, 0x02, Coord(13, 0, 4), "Rupee (1)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    scene_actor("Jabu Jabus Belly Near Boss Pot 2", Pot, 0x02, Coord(13, 0, 5), "Deku Nuts (5)", &["Jabu Jabus Belly", "Vanilla Dungeons", "Pots"]),
    scene_actor("Jabu Jabus Belly MQ Near Boss Pot 1", Pot, 0x02, Coord(13, 0, 6), "Rupee (1)", &["Jabu Jabus Belly", "Master Quest", "Pots"]),
    scene_actor("Jabu Jabus Belly MQ Near Boss Pot 2", Pot, 0x02, Coord(13, 0, 7), "Recovery Heart", &["Jabu Jabus Belly", "Master Quest", "Pots"]),
    // Forest Temple
    chest("Forest Temple First Room Chest", 0x03, 0x03, "Small Key (Forest Temple)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple First Stalfos Chest", 0x03, 0x00, "Small Key (Forest Temple)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Raised Island Courtyard Chest", 0x03, 0x05, "Recovery Heart", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Map Chest", 0x03, 0x01, "Map (Forest Temple)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Well Chest", 0x03, 0x09, "Small Key (Forest Temple)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Eye Switch Chest", 0x03, 0x04, "Rupees (5)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Boss Key Chest", 0x03, 0x0E, "Boss Key (Forest Temple)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Floormaster Chest", 0x03, 0x02, "Small Key (Forest Temple)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Red Poe Chest", 0x03, 0x0D, "Small Key (Forest Temple)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Bow Chest", 0x03, 0x0C, "Bow", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Blue Poe Chest", 0x03, 0x0F, "Compass (Forest Temple)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Falling Ceiling Room Chest", 0x03, 0x07, "Arrows (10)", &["Forest Temple", "Vanilla Dungeons"]),
    chest("Forest Temple Basement Chest", 0x03, 0x0B, "Arrows (5)", &["Forest Temple", "Vanilla Dungeons"]),
    gs("Forest Temple GS First Room", 0x03, 0x02, &["Forest Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Forest Temple GS Lobby", 0x03, 0x08, &["Forest Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Forest Temple GS Raised Island Courtyard", 0x03, 0x01, &["Forest Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Forest Temple GS Level Island Courtyard", 0x03, 0x04, &["Forest Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Forest Temple GS Basement", 0x03, 0x10, &["Forest Temple", "Vanilla Dungeons", "Skulltulas"]),
    chest("Forest Temple MQ First Room Chest", 0x03, 0x03, "Small Key (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Wolfos Chest", 0x03, 0x00, "Small Key (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Well Chest", 0x03, 0x09, "Small Key (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Raised Island Courtyard Lower Chest", 0x03, 0x01, "Small Key (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Raised Island Courtyard Upper Chest", 0x03, 0x05, "Small Key (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Boss Key Chest", 0x03, 0x0E, "Boss Key (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Redead Chest", 0x03, 0x02, "Small Key (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Map Chest", 0x03, 0x0D, "Map (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Bow Chest", 0x03, 0x0C, "Bow", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Compass Chest", 0x03, 0x0F, "Compass (Forest Temple)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Falling Ceiling Room Chest", 0x03, 0x06, "Arrows (5)", &["Forest Temple", "Master Quest"]),
    chest("Forest Temple MQ Basement Chest", 0x03, 0x0B, "Arrows (5)", &["Forest Temple", "Master Quest"]),
    gs("Forest Temple MQ GS First Hallway", 0x03, 0x02, &["Forest Temple", "Master Quest", "Skulltulas"]),
    gs("Forest Temple MQ GS Block Push Room", 0x03, 0x10, &["Forest Temple", "Master Quest", "Skulltulas"]),
    gs("Forest Temple MQ GS Raised Island Courtyard", 0x03, 0x01, &["Forest Temple", "Master Quest", "Skulltulas"]),
    gs("Forest Temple MQ GS Level Island Courtyard", 0x03, 0x04, &["Forest Temple", "Master Quest", "Skulltulas"]),
    gs("Forest Temple MQ GS Well", 0x03, 0x08, &["Forest Temple", "Master Quest", "Skulltulas"]),
    scene_actor("Forest Temple Center Room Pot 1", Pot, 0x03, Coord(2, 2, 6), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Center Room Pot 2", Pot, 0x03, Coord(2, 2, 7), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Lower Stalfos Pot 1", Pot, 0x03, Coord(6, 2, 4), "Recovery Heart", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Lower Stalfos Pot 2", Pot, 0x03, Coord(6, 2, 5), "Arrows (10)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Upper Stalfos Pot 1", Pot, 0x03, Coord(7, 2, 8), "Recovery Heart", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Upper Stalfos Pot 2", Pot, 0x03, Coord(7, 2, 9), "Recovery Heart", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Blue Poe Room Pot 1", Pot, 0x03, Coord(13, 2, 5), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Blue Poe Room Pot 2", Pot, 0x03, Coord(13, 2, 6), "Arrows (10)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Frozen Eye Switch Room Pot 1", Pot, 0x03, Coord(14, 2, 3), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Frozen Eye Switch Room Pot 2", Pot, 0x03, Coord(14, 2, 4), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Courtyard Well Wonderitem", Wonderitem, 0x03, Coord(8, 2, 12), "Rupees (20)", &["Forest Temple", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Forest Temple MQ Courtyard Pot 1", Pot, 0x03, Coord(8, 2, 13), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Courtyard Pot 2", Pot, 0x03, Coord(8, 2, 14), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Well Pot 1", Pot, 0x03, Coord(9, 2, 6), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Well Pot 2", Pot, 0x03, Coord(9, 2, 7), "Recovery Heart", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Basement Pot 1", Pot, 0x03, Coord(17, 2, 10), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Basement Pot 2", Pot, 0x03, Coord(17, 2, 11), "Arrows (10)", &["Forest Temple", "Master Quest", "Pots"]),
    boss_heart("Forest Temple Phantom Ganon Heart", 0x14, 0x4F, &["Forest Temple"]),
    scene_actor("Forest Temple Well Flying Pot 1", FlyingPot, 0x03, Coord(9, 2, 8), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Forest Temple Well Flying Pot 2", FlyingPot, 0x03, Coord(9, 2, 9), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Forest Temple Checkerboard Pot 1", Pot, 0x03, Coord(12, 2, 4), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Checkerboard Pot 2", Pot, 0x03, Coord(12, 2, 5), "Recovery Heart", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Green Poe Room Pot 1", Pot, 0x03, Coord(16, 2, 6), "Rupee (1)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple Green Poe Room Pot 2", Pot, 0x03, Coord(16, 2, 7), "Arrows (10)", &["Forest Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Forest Temple MQ Upper Stalfos Pot 1", Pot, 0x03, Coord(7, 2, 10), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Upper Stalfos Pot 2", Pot, 0x03, Coord(7, 2, 11), "Recovery Heart", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Blue Poe Room Pot 1", Pot, 0x03, Coord(13, 2, 7), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Blue Poe Room Pot 2", Pot, 0x03, Coord(13, 2, 8), "Arrows (10)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Green Poe Room Pot 1", Pot, 0x03, Coord(16, 2, 8), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Green Poe Room Pot 2", Pot, 0x03, Coord(16, 2, 9), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Checkerboard Pot 1", Pot, 0x03, Coord(12, 2, 6), "Rupee (1)", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Checkerboard Pot 2", Pot, 0x03, Coord(12, 2, 7), "Recovery Heart", &["Forest Temple", "Master Quest", "Pots"]),
    scene_actor("Forest Temple MQ Well Flying Pot 1", FlyingPot, 0x03, Coord(9, 2, 10), "Rupee (1)", &["Forest Temple", "Master Quest", "Flying Pots"]),
    scene_actor("Forest Temple MQ Well Flying Pot 2", FlyingPot, 0x03, Coord(9, 2, 11), "Rupee (1)", &["Forest Temple", "Master Quest", "Flying Pots"]),
    // Fire Temple
    chest("Fire Temple Near Boss Chest", 0x04, 0x01, "Small Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Flare Dancer Chest", 0x04, 0x00, "Bombs (10)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Boss Key Chest", 0x04, 0x0C, "Boss Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Big Lava Room Lower Open Door Chest", 0x04, 0x04, "Small Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Big Lava Room Blocked Door Chest", 0x04, 0x02, "Small Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Boulder Maze Lower Chest", 0x04, 0x03, "Small Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Boulder Maze Side Room Chest", 0x04, 0x08, "Small Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Map Chest", 0x04, 0x0A, "Map (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Boulder Maze Shortcut Chest", 0x04, 0x0B, "Small Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Boulder Maze Upper Chest", 0x04, 0x06, "Small Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Scarecrow Chest", 0x04, 0x0D, "Rupees (200)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Compass Chest", 0x04, 0x07, "Compass (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Megaton Hammer Chest", 0x04, 0x05, "Megaton Hammer", &["Fire Temple", "Vanilla Dungeons"]),
    chest("Fire Temple Highest Goron Chest", 0x04, 0x09, "Small Key (Fire Temple)", &["Fire Temple", "Vanilla Dungeons"]),
    gs("Fire Temple GS Song of Time Room", 0x04, 0x01, &["Fire Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Fire Temple GS Boss Key Loop", 0x04, 0x02, &["Fire Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Fire Temple GS Boulder Maze", 0x04, 0x04, &["Fire Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Fire Temple GS Scarecrow Top", 0x04, 0x08, &["Fire Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Fire Temple GS Scarecrow Climb", 0x04, 0x10, &["Fire Temple", "Vanilla Dungeons", "Skulltulas"]),
    chest("Fire Temple MQ Map Room Side Chest", 0x04, 0x02, "Hylian Shield", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Megaton Hammer Chest", 0x04, 0x00, "Megaton Hammer", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Map Chest", 0x04, 0x0C, "Map (Fire Temple)", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Near Boss Chest", 0x04, 0x07, "Small Key (Fire Temple)", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Big Lava Room Blocked Door Chest", 0x04, 0x01, "Small Key (Fire Temple)", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Boss Key Chest", 0x04, 0x04, "Boss Key (Fire Temple)", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Lizalfos Maze Side Room Chest", 0x04, 0x08, "Bombs (5)", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Compass Chest", 0x04, 0x0B, "Compass (Fire Temple)", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Lizalfos Maze Upper Chest", 0x04, 0x06, "Bombs (10)", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Lizalfos Maze Lower Chest", 0x04, 0x03, "Bombs (10)", &["Fire Temple", "Master Quest"]),
    collectable("Fire Temple MQ Freestanding Key", 0x04, 0x1C, "Small Key (Fire Temple)", &["Fire Temple", "Master Quest"]),
    chest("Fire Temple MQ Chest on Fire", 0x04, 0x05, "Small Key (Fire Temple)", &["Fire Temple", "Master Quest"]),
    gs("Fire Temple MQ GS Big Lava Room Open Door", 0x04, 0x01, &["Fire Temple", "Master Quest", "Skulltulas"]),
    gs("Fire Temple MQ GS Skull on Fire", 0x04, 0x04, &["Fire Temple", "Master Quest", "Skulltulas"]),
    gs("Fire Temple MQ GS Fire Wall Maze Center", 0x04, 0x08, &["Fire Temple", "Master Quest", "Skulltulas"]),
    gs("Fire Temple MQ GS Fire Wall Maze Side Room", 0x04, 0x10, &["Fire Temple", "Master Quest", "Skulltulas"]),
    gs("Fire Temple MQ GS Above Fire Wall Maze", 0x04, 0x02, &["Fire Temple", "Master Quest", "Skulltulas"]),
    scene_actor("Fire Temple Big Lava Room Pot 1", Pot, 0x04, Coord(1, 2, 5), "Rupee (1)", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Big Lava Room Pot 2", Pot, 0x04, Coord(1, 2, 6), "Recovery Heart", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Near Boss Pot 1", Pot, 0x04, Coord(0, 2, 8), "Rupee (1)", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Near Boss Pot 2", Pot, 0x04, Coord(0, 2, 9), "Recovery Heart", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Flame Maze Pot 1", Pot, 0x04, Coord(14, 2, 4), "Rupee (1)", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Flame Maze Pot 2", Pot, 0x04, Coord(14, 2, 5), "Rupee (1)", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple MQ Lower Maze Crate 1", Crate, 0x04, Coord(3, 2, 16), "Rupee (1)", &["Fire Temple", "Master Quest", "Crates"]),
    scene_actor("Fire Temple MQ Lower Maze Crate 2", Crate, 0x04, Coord(3, 2, 17), "Rupee (1)", &["Fire Temple", "Master Quest", "Crates"]),
    scene_actor("Fire Temple MQ Lower Maze Crate 3", Crate, 0x04, Coord(3, 2, 18), "Rupee (1)", &["Fire Temple", "Master Quest", "Crates"]),
    scene_actor("Fire Temple MQ Upper Maze Small Crate 1", SmallCrate, 0x04, Coord(5, 2, 12), "Rupee (1)", &["Fire Temple", "Master Quest", "Small Crates"]),
    scene_actor("Fire Temple MQ Upper Maze Small Crate 2", SmallCrate, 0x04, Coord(5, 2, 13), "Rupee (1)", &["Fire Temple", "Master Quest", "Small Crates"]),
    scene_actor("Fire Temple MQ Near Boss Pot 1", Pot, 0x04, Coord(0, 2, 10), "Rupee (1)", &["Fire Temple", "Master Quest", "Pots"]),
    scene_actor("Fire Temple MQ Near Boss Pot 2", Pot, 0x04, Coord(0, 2, 11), "Recovery Heart", &["Fire Temple", "Master Quest", "Pots"]),
    boss_heart("Fire Temple Volvagia Heart", 0x15, 0x4F, &["Fire Temple"]),
    scene_actor("Fire Temple Fire Pillar Room Pot 1", Pot, 0x04, Coord(9, 2, 3), "Rupee (1)", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Fire Pillar Room Pot 2", Pot, 0x04, Coord(9, 2, 4), "Recovery Heart", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Shortcut Room Pot 1", Pot, 0x04, Coord(2, 2, 5), "Rupee (1)", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Shortcut Room Pot 2", Pot, 0x04, Coord(2, 2, 6), "Rupee (1)", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Boulder Maze Wonderitem 1", Wonderitem, 0x04, Coord(3, 2, 19), "Rupees (5)", &["Fire Temple", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Fire Temple Boulder Maze Wonderitem 2", Wonderitem, 0x04, Coord(3, 2, 20), "Rupees (5)", &["Fire Temple", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Fire Temple MQ Big Lava Room Pot 1", Pot, 0x04, Coord(1, 2, 7), "Rupee (1)", &["Fire Temple", "Master Quest", "Pots"]),
    scene_actor("Fire Temple MQ Big Lava Room Pot 2", Pot, 0x04, Coord(1, 2, 8), "Recovery Heart", &["Fire Temple", "Master Quest", "Pots"]),
    scene_actor("Fire Temple MQ Flame Maze Pot 1", Pot, 0x04, Coord(14, 2, 6), "Rupee (1)", &["Fire Temple", "Master Quest", "Pots"]),
    scene_actor("Fire Temple MQ Flame Maze Pot 2", Pot, 0x04, Coord(14, 2, 7), "Rupee (1)", &["Fire Temple", "Master Quest", "Pots"]),
    scene_actor("Fire Temple Before Megaton Hammer Pot 1", Pot, 0x04, Coord(21, 2, 3), "Rupee (1)", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple Before Megaton Hammer Pot 2", Pot, 0x04, Coord(21, 2, 4), "Recovery Heart", &["Fire Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Fire Temple MQ Iron Knuckle Room Pot 1", Pot, 0x04, Coord(19, 2, 5), "Rupee (1)", &["Fire Temple", "Master Quest", "Pots"]),
    scene_actor("Fire Temple MQ Iron Knuckle Room Pot 2", Pot, 0x04, Coord(19, 2, 6), "Rupee (1)", &["Fire Temple", "Master Quest", "Pots"]),
    scene_actor("Fire Temple MQ Boulder Maze Wonderitem 1", Wonderitem, 0x04, Coord(3, 2, 21), "Rupees (5)", &["Fire Temple", "Master Quest", "Wonderitem"]),
    scene_actor("Fire Temple MQ Boulder Maze Wonderitem 2", Wonderitem, 0x04, Coord(3, 2, 22), "Rupees (5)", &["Fire Temple", "Master Quest", "Wonderitem"]),
    // Water Temple
    chest("Water Temple Compass Chest", 0x05, 0x09, "Compass (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple Map Chest", 0x05, 0x02, "Map (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple Cracked Wall Chest", 0x05, 0x00, "Small Key (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple Torches Chest", 0x05, 0x01, "Small Key (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple Boss Key Chest", 0x05, 0x05, "Boss Key (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple Central Pillar Chest", 0x05, 0x06, "Small Key (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple Central Bow Target Chest", 0x05, 0x08, "Small Key (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple Longshot Chest", 0x05, 0x07, "Progressive Hookshot", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple River Chest", 0x05, 0x03, "Small Key (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    chest("Water Temple Dragon Chest", 0x05, 0x0A, "Small Key (Water Temple)", &["Water Temple", "Vanilla Dungeons"]),
    gs("Water Temple GS Behind Gate", 0x05, 0x01, &["Water Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Water Temple GS Falling Platform Room", 0x05, 0x02, &["Water Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Water Temple GS Central Pillar", 0x05, 0x04, &["Water Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Water Temple GS Near Boss Key Chest", 0x05, 0x08, &["Water Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Water Temple GS River", 0x05, 0x10, &["Water Temple", "Vanilla Dungeons", "Skulltulas"]),
    scene_actor("Water Temple River Silver Rupee 1", SilverRupee, 0x05, Coord(2, 0, 8), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Water Temple River Silver Rupee 2", SilverRupee, 0x05, Coord(2, 0, 9), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Water Temple River Silver Rupee 3", SilverRupee, 0x05, Coord(2, 0, 10), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Water Temple River Silver Rupee 4", SilverRupee, 0x05, Coord(2, 0, 11), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Water Temple River Silver Rupee 5", SilverRupee, 0x05, Coord(2, 0, 12), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Silver Rupees"]),
    chest("Water Temple MQ Longshot Chest", 0x05, 0x00, "Progressive Hookshot", &["Water Temple", "Master Quest"]),
    chest("Water Temple MQ Map Chest", 0x05, 0x02, "Map (Water Temple)", &["Water Temple", "Master Quest"]),
    chest("Water Temple MQ Compass Chest", 0x05, 0x01, "Compass (Water Temple)", &["Water Temple", "Master Quest"]),
    chest("Water Temple MQ Central Pillar Chest", 0x05, 0x06, "Small Key (Water Temple)", &["Water Temple", "Master Quest"]),
    chest("Water Temple MQ Boss Key Chest", 0x05, 0x05, "Boss Key (Water Temple)", &["Water Temple", "Master Quest"]),
    collectable("Water Temple MQ Freestanding Key", 0x05, 0x01, "Small Key (Water Temple)", &["Water Temple", "Master Quest"]),
    gs("Water Temple MQ GS Lizalfos Hallway", 0x05, 0x01, &["Water Temple", "Master Quest", "Skulltulas"]),
    gs("Water Temple MQ GS Before Upper Water Switch", 0x05, 0x04, &["Water Temple", "Master Quest", "Skulltulas"]),
    gs("Water Temple MQ GS River", 0x05, 0x02, &["Water Temple", "Master Quest", "Skulltulas"]),
    gs("Water Temple MQ GS Freestanding Key Area", 0x05, 0x08, &["Water Temple", "Master Quest", "Skulltulas"]),
    gs("Water Temple MQ GS Triple Wall Torch", 0x05, 0x10, &["Water Temple", "Master Quest", "Skulltulas"]),
    scene_actor("Water Temple Main Room Pot 1", Pot, 0x05, Coord(0, 2, 6), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Main Room Pot 2", Pot, 0x05, Coord(0, 2, 7), "Recovery Heart", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Behind Gate Pot 1", Pot, 0x05, Coord(3, 2, 4), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Behind Gate Pot 2", Pot, 0x05, Coord(3, 2, 5), "Arrows (10)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Like Like Pot 1", Pot, 0x05, Coord(11, 2, 3), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Like Like Pot 2", Pot, 0x05, Coord(11, 2, 4), "Recovery Heart", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple MQ Lizalfos Hallway Pot 1", Pot, 0x05, Coord(7, 2, 5), "Rupee (1)", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple MQ Lizalfos Hallway Pot 2", Pot, 0x05, Coord(7, 2, 6), "Rupee (1)", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple MQ Storage Room Pot 1", Pot, 0x05, Coord(16, 2, 8), "Rupee (1)", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple MQ Storage Room Pot 2", Pot, 0x05, Coord(16, 2, 9), "Recovery Heart", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple MQ Triple Wall Torch Crate 1", Crate, 0x05, Coord(18, 2, 14), "Rupee (1)", &["Water Temple", "Master Quest", "Crates"]),
    scene_actor("Water Temple MQ Triple Wall Torch Crate 2", Crate, 0x05, Coord(18, 2, 15), "Rupee (1)", &["Water Temple", "Master Quest", "Crates"]),
    boss_heart("Water Temple Morpha Heart", 0x16, 0x4F, &["Water Temple"]),
    scene_actor("Water Temple Central Pillar Pot 1", Pot, 0x05, Coord(2, 2, 13), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Central Pillar Pot 2", Pot, 0x05, Coord(2, 2, 14), "Recovery Heart", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Near Boss Pot 1", Pot, 0x05, Coord(10, 2, 3), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Near Boss Pot 2", Pot, 0x05, Coord(10, 2, 4), "Arrows (10)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple River Wonderitem 1", Wonderitem, 0x05, Coord(2, 2, 15), "Rupees (5)", &["Water Temple", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Water Temple River Wonderitem 2", Wonderitem, 0x05, Coord(2, 2, 16), "Rupees (5)", &["Water Temple", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Water Temple MQ Main Room Pot 1", Pot, 0x05, Coord(0, 2, 8), "Rupee (1)", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple MQ Main Room Pot 2", Pot, 0x05, Coord(0, 2, 9), "Rupee (1)", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple MQ Before Dark Link Pot 1", Pot, 0x05, Coord(6, 2, 5), "Rupee (1)", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple MQ Before Dark Link Pot 2", Pot, 0x05, Coord(6, 2, 6), "Recovery Heart", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple Dragon Room Pot 1", Pot, 0x05, Coord(13, 2, 3), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Dragon Room Pot 2", Pot, 0x05, Coord(13, 2, 4), "Recovery Heart", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Dark Link Room Pot 1", Pot, 0x05, Coord(6, 2, 7), "Rupee (1)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple Dark Link Room Pot 2", Pot, 0x05, Coord(6, 2, 8), "Arrows (10)", &["Water Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Water Temple MQ Dragon Room Pot 1", Pot, 0x05, Coord(13, 2, 5), "Rupee (1)", &["Water Temple", "Master Quest", "Pots"]),
    scene_actor("Water Temple MQ Dragon Room Pot 2", Pot, 0x05, Coord(13, 2, 6), "Rupee (1)", &["Water Temple", "Master Quest", "Pots"]),
    // Shadow Temple
    chest("Shadow Temple Map Chest", 0x07, 0x01, "Map (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Hover Boots Chest", 0x07, 0x07, "Hover Boots", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Compass Chest", 0x07, 0x03, "Compass (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Early Silver Rupee Chest", 0x07, 0x02, "Small Key (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Invisible Blades Visible Chest", 0x07, 0x0C, "Rupees (5)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Invisible Blades Invisible Chest", 0x07, 0x16, "Arrows (30)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Falling Spikes Lower Chest", 0x07, 0x05, "Arrows (10)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Falling Spikes Upper Chest", 0x07, 0x06, "Rupees (5)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Falling Spikes Switch Chest", 0x07, 0x04, "Small Key (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Invisible Spikes Chest", 0x07, 0x09, "Small Key (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    collectable("Shadow Temple Freestanding Key", 0x07, 0x01, "Small Key (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Wind Hint Chest", 0x07, 0x15, "Arrows (10)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple After Wind Enemy Chest", 0x07, 0x08, "Rupees (5)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple After Wind Hidden Chest", 0x07, 0x14, "Small Key (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Spike Walls Left Chest", 0x07, 0x0A, "Rupees (10)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Boss Key Chest", 0x07, 0x0B, "Boss Key (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    chest("Shadow Temple Invisible Floormaster Chest", 0x07, 0x0D, "Small Key (Shadow Temple)", &["Shadow Temple", "Vanilla Dungeons"]),
    gs("Shadow Temple GS Like Like Room", 0x07, 0x08, &["Shadow Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Shadow Temple GS Falling Spikes Room", 0x07, 0x02, &["Shadow Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Shadow Temple GS Single Giant Pot", 0x07, 0x01, &["Shadow Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Shadow Temple GS Near Ship", 0x07, 0x10, &["Shadow Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Shadow Temple GS Triple Giant Pot", 0x07, 0x04, &["Shadow Temple", "Vanilla Dungeons", "Skulltulas"]),
    scene_actor("Shadow Temple Scythe Shortcut Silver Rupee 1", SilverRupee, 0x07, Coord(1, 0, 14), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Scythe Shortcut Silver Rupee 2", SilverRupee, 0x07, Coord(1, 0, 15), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Scythe Shortcut Silver Rupee 3", SilverRupee, 0x07, Coord(1, 0, 16), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Scythe Shortcut Silver Rupee 4", SilverRupee, 0x07, Coord(1, 0, 17), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Scythe Shortcut Silver Rupee 5", SilverRupee, 0x07, Coord(1, 0, 18), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    chest("Shadow Temple MQ Early Gibdos Chest", 0x07, 0x03, "Small Key (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Map Chest", 0x07, 0x02, "Map (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Near Ship Invisible Chest", 0x07, 0x0E, "Small Key (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Compass Chest", 0x07, 0x01, "Compass (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Hover Boots Chest", 0x07, 0x07, "Hover Boots", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Invisible Blades Visible Chest", 0x07, 0x0C, "Small Key (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Invisible Blades Invisible Chest", 0x07, 0x16, "Arrows (30)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Beamos Silver Rupees Chest", 0x07, 0x0F, "Arrows (5)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Falling Spikes Lower Chest", 0x07, 0x05, "Arrows (10)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Falling Spikes Upper Chest", 0x07, 0x06, "Rupees (5)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Falling Spikes Switch Chest", 0x07, 0x04, "Small Key (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Invisible Spikes Chest", 0x07, 0x09, "Rupees (10)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Stalfos Room Chest", 0x07, 0x10, "Rupees (20)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Wind Hint Chest", 0x07, 0x15, "Small Key (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ After Wind Enemy Chest", 0x07, 0x08, "Rupees (5)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ After Wind Hidden Chest", 0x07, 0x14, "Arrows (5)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Spike Walls Left Chest", 0x07, 0x0A, "Rupees (10)", &["Shadow Temple", "Master Quest"]),
    chest("Shadow Temple MQ Boss Key Chest", 0x07, 0x0B, "Boss Key (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    collectable("Shadow Temple MQ Freestanding Key", 0x07, 0x06, "Small Key (Shadow Temple)", &["Shadow Temple", "Master Quest"]),
    gs("Shadow Temple MQ GS Falling Spikes Room", 0x07, 0x02, &["Shadow Temple", "Master Quest", "Skulltulas"]),
    gs("Shadow Temple MQ GS Wind Hint Room", 0x07, 0x01, &["Shadow Temple", "Master Quest", "Skulltulas"]),
    gs("Shadow Temple MQ GS After Wind", 0x07, 0x08, &["Shadow Temple", "Master Quest", "Skulltulas"]),
    gs("Shadow Temple MQ GS After Ship", 0x07, 0x10, &["Shadow Temple", "Master Quest", "Skulltulas"]),
    gs("Shadow Temple MQ GS Near Boss", 0x07, 0x04, &["Shadow Temple", "Master Quest", "Skulltulas"]),
    scene_actor("Shadow Temple Invisible Blades Silver Rupee 1", SilverRupee, 0x07, Coord(16, 2, 6), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Blades Silver Rupee 2", SilverRupee, 0x07, Coord(16, 2, 7), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Blades Silver Rupee 3", SilverRupee, 0x07, Coord(16, 2, 8), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Blades Silver Rupee 4", SilverRupee, 0x07, Coord(16, 2, 9), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Blades Silver Rupee 5", SilverRupee, 0x07, Coord(16, 2, 10), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Huge Pit Silver Rupee 1", SilverRupee, 0x07, Coord(9, 2, 5), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Huge Pit Silver Rupee 2", SilverRupee, 0x07, Coord(9, 2, 6), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Huge Pit Silver Rupee 3", SilverRupee, 0x07, Coord(9, 2, 7), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Huge Pit Silver Rupee 4", SilverRupee, 0x07, Coord(9, 2, 8), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Huge Pit Silver Rupee 5", SilverRupee, 0x07, Coord(9, 2, 9), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Spikes Silver Rupee 1", SilverRupee, 0x07, Coord(11, 2, 4), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Spikes Silver Rupee 2", SilverRupee, 0x07, Coord(11, 2, 5), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Spikes Silver Rupee 3", SilverRupee, 0x07, Coord(11, 2, 6), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Spikes Silver Rupee 4", SilverRupee, 0x07, Coord(11, 2, 7), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Invisible Spikes Silver Rupee 5", SilverRupee, 0x07, Coord(11, 2, 8), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Shadow Temple Whispering Walls Pot 1", Pot, 0x07, Coord(0, 2, 4), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple Whispering Walls Pot 2", Pot, 0x07, Coord(0, 2, 5), "Recovery Heart", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple After Boat Pot 1", Pot, 0x07, Coord(21, 2, 6), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple After Boat Pot 2", Pot, 0x07, Coord(21, 2, 7), "Arrows (10)", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple MQ Whispering Walls Pot 1", Pot, 0x07, Coord(0, 2, 6), "Rupee (1)", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ Whispering Walls Pot 2", Pot, 0x07, Coord(0, 2, 7), "Rupee (1)", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ Dead Hand Pot 1", Pot, 0x07, Coord(13, 2, 3), "Rupee (1)", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ Dead Hand Pot 2", Pot, 0x07, Coord(13, 2, 4), "Recovery Heart", &["Shadow Temple", "Master Quest", "Pots"]),
    boss_heart("Shadow Temple Bongo Bongo Heart", 0x18, 0x4F, &["Shadow Temple"]),
    scene_actor("Shadow Temple Spike Walls Flying Pot 1", FlyingPot, 0x07, Coord(12, 2, 4), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Shadow Temple Spike Walls Flying Pot 2", FlyingPot, 0x07, Coord(12, 2, 5), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Shadow Temple Before Boat Flying Pot 1", FlyingPot, 0x07, Coord(19, 2, 6), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Shadow Temple Before Boat Flying Pot 2", FlyingPot, 0x07, Coord(19, 2, 7), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Shadow Temple Falling Spikes Pot 1", Pot, 0x07, Coord(10, 2, 5), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple Falling Spikes Pot 2", Pot, 0x07, Coord(10, 2, 6), "Arrows (10)", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple Wind Hint Pot 1", Pot, 0x07, Coord(17, 2, 3), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple Wind Hint Pot 2", Pot, 0x07, Coord(17, 2, 4), "Recovery Heart", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple MQ After Boat Pot 1", Pot, 0x07, Coord(21, 2, 8), "Rupee (1)", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ After Boat Pot 2", Pot, 0x07, Coord(21, 2, 9), "Arrows (10)", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ Spike Walls Flying Pot 1", FlyingPot, 0x07, Coord(12, 2, 6), "Rupee (1)", &["Shadow Temple", "Master Quest", "Flying Pots"]),
    scene_actor("Shadow Temple MQ Spike Walls Flying Pot 2", FlyingPot, 0x07, Coord(12, 2, 7), "Rupee (1)", &["Shadow Temple", "Master Quest", "Flying Pots"]),
    scene_actor("Shadow Temple Floormaster Pot 1", Pot, 0x07, Coord(3, 2, 4), "Rupee (1)", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple Floormaster Pot 2", Pot, 0x07, Coord(3, 2, 5), "Recovery Heart", &["Shadow Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Shadow Temple MQ Stalfos Room Pot 1", Pot, 0x07, Coord(18, 2, 3), "Rupee (1)", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ Stalfos Room Pot 2", Pot, 0x07, Coord(18, 2, 4), "Arrows (10)", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ Wind Hint Pot 1", Pot, 0x07, Coord(17, 2, 5), "Rupee (1)", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ Wind Hint Pot 2", Pot, 0x07, Coord(17, 2, 6), "Recovery Heart", &["Shadow Temple", "Master Quest", "Pots"]),
    scene_actor("Shadow Temple MQ Scythe Shortcut Silver Rupee 1", SilverRupee, 0x07, Coord(1, 2, 19), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Scythe Shortcut Silver Rupee 2", SilverRupee, 0x07, Coord(1, 2, 20), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Scythe Shortcut Silver Rupee 3", SilverRupee, 0x07, Coord(1, 2, 21), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Scythe Shortcut Silver Rupee 4", SilverRupee, 0x07, Coord(1, 2, 22), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Scythe Shortcut Silver Rupee 5", SilverRupee, 0x07, Coord(1, 2, 23), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Invisible Blades Silver Rupee 1", SilverRupee, 0x07, Coord(16, 2, 11), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Invisible Blades Silver Rupee 2", SilverRupee, 0x07, Coord(16, 2, 12), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Invisible Blades Silver Rupee 3", SilverRupee, 0x07, Coord(16, 2, 13), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Invisible Blades Silver Rupee 4", SilverRupee, 0x07, Coord(16, 2, 14), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Shadow Temple MQ Invisible Blades Silver Rupee 5", SilverRupee, 0x07, Coord(16, 2, 15), "Rupee (1)", &["Shadow Temple", "Master Quest", "Silver Rupees"]),
    // Spirit Temple
    chest("Spirit Temple Child Bridge Chest", 0x06, 0x08, "Deku Shield", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Child Early Torches Chest", 0x06, 0x00, "Small Key (Spirit Temple)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Child Climb North Chest", 0x06, 0x06, "Bombchus (10)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Child Climb East Chest", 0x06, 0x0C, "Deku Shield", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Map Chest", 0x06, 0x03, "Map (Spirit Temple)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Sun Block Room Chest", 0x06, 0x01, "Small Key (Spirit Temple)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Silver Gauntlets Chest", 0x5C, 0x0B, "Silver Gauntlets", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Compass Chest", 0x06, 0x04, "Compass (Spirit Temple)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Early Adult Right Chest", 0x06, 0x07, "Small Key (Spirit Temple)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple First Mirror Left Chest", 0x06, 0x0D, "Ice Trap", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple First Mirror Right Chest", 0x06, 0x0E, "Recovery Heart", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Statue Room Northeast Chest", 0x06, 0x0F, "Rupees (5)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Statue Room Hand Chest", 0x06, 0x02, "Small Key (Spirit Temple)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Near Four Armos Chest", 0x06, 0x05, "Small Key (Spirit Temple)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Hallway Right Invisible Chest", 0x06, 0x14, "Recovery Heart", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Hallway Left Invisible Chest", 0x06, 0x15, "Recovery Heart", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Mirror Shield Chest", 0x5C, 0x09, "Mirror Shield", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Boss Key Chest", 0x06, 0x0A, "Boss Key (Spirit Temple)", &["Spirit Temple", "Vanilla Dungeons"]),
    chest("Spirit Temple Topmost Chest", 0x06, 0x12, "Bombs (20)", &["Spirit Temple", "Vanilla Dungeons"]),
    gs("Spirit Temple GS Metal Fence", 0x06, 0x10, &["Spirit Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Spirit Temple GS Sun on Floor Room", 0x06, 0x08, &["Spirit Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Spirit Temple GS Hall After Sun Block Room", 0x06, 0x01, &["Spirit Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Spirit Temple GS Boulder Room", 0x06, 0x02, &["Spirit Temple", "Vanilla Dungeons", "Skulltulas"]),
    gs("Spirit Temple GS Lobby", 0x06, 0x04, &["Spirit Temple", "Vanilla Dungeons", "Skulltulas"]),
    // Flag 0x2C dodges a collision with the boulder room skulltula bit.
    scene_actor("Spirit Temple Before Child Climb Small Wooden Crate 1", SmallCrate, 0x06, DefaultDef::Flag(0x2C), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Small Crates"]),
    chest("Spirit Temple MQ Entrance Front Left Chest", 0x06, 0x1A, "Bombchus (10)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Entrance Back Right Chest", 0x06, 0x1F, "Bombchus (10)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Entrance Front Right Chest", 0x06, 0x1B, "Rupees (5)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Entrance Back Left Chest", 0x06, 0x1E, "Rupees (5)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Child Hammer Switch Chest", 0x06, 0x1D, "Small Key (Spirit Temple)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Map Chest", 0x06, 0x00, "Map (Spirit Temple)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Map Room Enemy Chest", 0x06, 0x08, "Small Key (Spirit Temple)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Child Climb North Chest", 0x06, 0x06, "Bombchus (10)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Child Climb South Chest", 0x06, 0x0C, "Small Key (Spirit Temple)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Compass Chest", 0x06, 0x03, "Compass (Spirit Temple)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Statue Room Lullaby Chest", 0x06, 0x0F, "Rupees (5)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Statue Room Invisible Chest", 0x06, 0x02, "Recovery Heart", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Silver Block Hallway Chest", 0x06, 0x1C, "Small Key (Spirit Temple)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Sun Block Room Chest", 0x06, 0x01, "Recovery Heart", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Symphony Room Chest", 0x06, 0x07, "Rupees (50)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Leever Room Chest", 0x06, 0x04, "Rupees (50)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Beamos Room Chest", 0x06, 0x19, "Recovery Heart", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Chest Switch Chest", 0x06, 0x12, "Ice Trap", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Boss Key Chest", 0x06, 0x05, "Boss Key (Spirit Temple)", &["Spirit Temple", "Master Quest"]),
    chest("Spirit Temple MQ Mirror Puzzle Invisible Chest", 0x06, 0x14, "Small Key (Spirit Temple)", &["Spirit Temple", "Master Quest"]),
    gs("Spirit Temple MQ GS Symphony Room", 0x06, 0x08, &["Spirit Temple", "Master Quest", "Skulltulas"]),
    gs("Spirit Temple MQ GS Leever Room", 0x06, 0x02, &["Spirit Temple", "Master Quest", "Skulltulas"]),
    gs("Spirit Temple MQ GS Nine Thrones Room West", 0x06, 0x04, &["Spirit Temple", "Master Quest", "Skulltulas"]),
    gs("Spirit Temple MQ GS Nine Thrones Room North", 0x06, 0x10, &["Spirit Temple", "Master Quest", "Skulltulas"]),
    gs("Spirit Temple MQ GS Sun Block Room", 0x06, 0x01, &["Spirit Temple", "Master Quest", "Skulltulas"]),
    scene_actor("Spirit Temple Child Early Torches Silver Rupee 1", SilverRupee, 0x06, Coord(2, 0, 12), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Child Early Torches Silver Rupee 2", SilverRupee, 0x06, Coord(2, 0, 13), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Child Early Torches Silver Rupee 3", SilverRupee, 0x06, Coord(2, 0, 14), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Child Early Torches Silver Rupee 4", SilverRupee, 0x06, Coord(2, 0, 15), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Child Early Torches Silver Rupee 5", SilverRupee, 0x06, Coord(2, 0, 16), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Adult Boulder Silver Rupee 1", SilverRupee, 0x06, Coord(14, 2, 8), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Adult Boulder Silver Rupee 2", SilverRupee, 0x06, Coord(14, 2, 9), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Adult Boulder Silver Rupee 3", SilverRupee, 0x06, Coord(14, 2, 10), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Adult Boulder Silver Rupee 4", SilverRupee, 0x06, Coord(14, 2, 11), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Adult Boulder Silver Rupee 5", SilverRupee, 0x06, Coord(14, 2, 12), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Sun Block Room Silver Rupee 1", SilverRupee, 0x06, Coord(8, 2, 6), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Sun Block Room Silver Rupee 2", SilverRupee, 0x06, Coord(8, 2, 7), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Sun Block Room Silver Rupee 3", SilverRupee, 0x06, Coord(8, 2, 8), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Sun Block Room Silver Rupee 4", SilverRupee, 0x06, Coord(8, 2, 9), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Sun Block Room Silver Rupee 5", SilverRupee, 0x06, Coord(8, 2, 10), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Spirit Temple Lobby Pot 1", Pot, 0x06, Coord(0, 0, 6), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple Lobby Pot 2", Pot, 0x06, Coord(0, 0, 7), "Recovery Heart", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple Anubis Pot 1", Pot, 0x06, Coord(12, 0, 4), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple Anubis Pot 2", Pot, 0x06, Coord(12, 0, 5), "Deku Seeds (30)", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple MQ Lobby Pot 1", Pot, 0x06, Coord(0, 0, 8), "Rupee (1)", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple MQ Lobby Pot 2", Pot, 0x06, Coord(0, 0, 9), "Rupee (1)", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple MQ Below Four Armos Pot 1", Pot, 0x06, Coord(22, 2, 5), "Rupee (1)", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple MQ Below Four Armos Pot 2", Pot, 0x06, Coord(22, 2, 6), "Recovery Heart", &["Spirit Temple", "Master Quest", "Pots"]),
    boss_heart("Spirit Temple Twinrova Heart", 0x17, 0x4F, &["Spirit Temple"]),
    scene_actor("Spirit Temple Child Climb Flying Pot 1", FlyingPot, 0x06, Coord(4, 0, 6), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Spirit Temple Child Climb Flying Pot 2", FlyingPot, 0x06, Coord(4, 0, 7), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Spirit Temple Big Mirror Flying Pot 1", FlyingPot, 0x06, Coord(25, 2, 4), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Spirit Temple Big Mirror Flying Pot 2", FlyingPot, 0x06, Coord(25, 2, 5), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Spirit Temple Big Mirror Pot 1", Pot, 0x06, Coord(25, 2, 6), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple Big Mirror Pot 2", Pot, 0x06, Coord(25, 2, 7), "Recovery Heart", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple Hallway Pot 1", Pot, 0x06, Coord(17, 2, 3), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple Hallway Pot 2", Pot, 0x06, Coord(17, 2, 4), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple Beamos Room Pot", Pot, 0x06, Coord(19, 2, 5), "Deku Seeds (30)", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple MQ Child Climb Pot 1", Pot, 0x06, Coord(4, 0, 8), "Rupee (1)", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple MQ Child Climb Pot 2", Pot, 0x06, Coord(4, 0, 9), "Rupee (1)", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple MQ Big Mirror Pot 1", Pot, 0x06, Coord(25, 2, 8), "Rupee (1)", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple MQ Big Mirror Pot 2", Pot, 0x06, Coord(25, 2, 9), "Recovery Heart", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple Four Armos Pot 1", Pot, 0x06, Coord(22, 2, 7), "Rupee (1)", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple Four Armos Pot 2", Pot, 0x06, Coord(22, 2, 8), "Recovery Heart", &["Spirit Temple", "Vanilla Dungeons", "Pots"]),
    scene_actor("Spirit Temple MQ Sun Block Room Pot 1", Pot, 0x06, Coord(8, 2, 11), "Rupee (1)", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple MQ Sun Block Room Pot 2", Pot, 0x06, Coord(8, 2, 12), "Rupee (1)", &["Spirit Temple", "Master Quest", "Pots"]),
    scene_actor("Spirit Temple Big Mirror Wonderitem 1", Wonderitem, 0x06, Coord(25, 2, 10), "Rupees (5)", &["Spirit Temple", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Spirit Temple Big Mirror Wonderitem 2", Wonderitem, 0x06, Coord(25, 2, 11), "Rupees (5)", &["Spirit Temple", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Spirit Temple MQ Lobby Silver Rupee 1", SilverRupee, 0x06, Coord(0, 0, 10), "Rupee (1)", &["Spirit Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Spirit Temple MQ Lobby Silver Rupee 2", SilverRupee, 0x06, Coord(0, 0, 11), "Rupee (1)", &["Spirit Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Spirit Temple MQ Lobby Silver Rupee 3", SilverRupee, 0x06, Coord(0, 0, 12), "Rupee (1)", &["Spirit Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Spirit Temple MQ Lobby Silver Rupee 4", SilverRupee, 0x06, Coord(0, 0, 13), "Rupee (1)", &["Spirit Temple", "Master Quest", "Silver Rupees"]),
    scene_actor("Spirit Temple MQ Lobby Silver Rupee 5", SilverRupee, 0x06, Coord(0, 0, 14), "Rupee (1)", &["Spirit Temple", "Master Quest", "Silver Rupees"]),
    // Bottom of the Well
    chest("Bottom of the Well Front Left Fake Wall Chest", 0x08, 0x08, "Small Key (Bottom of the Well)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Front Center Bombable Chest", 0x08, 0x02, "Bombchus (10)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Back Left Bombable Chest", 0x08, 0x04, "Deku Nuts (10)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Underwater Left Chest", 0x08, 0x09, "Rupees (20)", &["Bottom of the Well", "Vanilla Dungeons"]),
    collectable("Bottom of the Well Freestanding Key", 0x08, 0x01, "Small Key (Bottom of the Well)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Compass Chest", 0x08, 0x01, "Compass (Bottom of the Well)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Center Skulltula Chest", 0x08, 0x0E, "Deku Nuts (5)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Right Bottom Fake Wall Chest", 0x08, 0x05, "Small Key (Bottom of the Well)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Fire Keese Chest", 0x08, 0x0A, "Deku Shield", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Like Like Chest", 0x08, 0x0C, "Hylian Shield", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Map Chest", 0x08, 0x07, "Map (Bottom of the Well)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Underwater Front Chest", 0x08, 0x10, "Bombs (10)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Invisible Chest", 0x08, 0x14, "Rupees (200)", &["Bottom of the Well", "Vanilla Dungeons"]),
    chest("Bottom of the Well Lens of Truth Chest", 0x08, 0x03, "Lens of Truth", &["Bottom of the Well", "Vanilla Dungeons"]),
    gs("Bottom of the Well GS Like Like Cage", 0x08, 0x01, &["Bottom of the Well", "Vanilla Dungeons", "Skulltulas"]),
    gs("Bottom of the Well GS East Inner Room", 0x08, 0x02, &["Bottom of the Well", "Vanilla Dungeons", "Skulltulas"]),
    gs("Bottom of the Well GS West Inner Room", 0x08, 0x04, &["Bottom of the Well", "Vanilla Dungeons", "Skulltulas"]),
    chest("Bottom of the Well MQ Map Chest", 0x08, 0x03, "Map (Bottom of the Well)", &["Bottom of the Well", "Master Quest"]),
    chest("Bottom of the Well MQ Lens of Truth Chest", 0x08, 0x01, "Lens of Truth", &["Bottom of the Well", "Master Quest"]),
    chest("Bottom of the Well MQ Compass Chest", 0x08, 0x02, "Compass (Bottom of the Well)", &["Bottom of the Well", "Master Quest"]),
    collectable("Bottom of the Well MQ Dead Hand Freestanding Key", 0x08, 0x02, "Small Key (Bottom of the Well)", &["Bottom of the Well", "Master Quest"]),
    collectable("Bottom of the Well MQ East Inner Room Freestanding Key", 0x08, 0x01, "Small Key (Bottom of the Well)", &["Bottom of the Well", "Master Quest"]),
    gs("Bottom of the Well MQ GS Basement", 0x08, 0x01, &["Bottom of the Well", "Master Quest", "Skulltulas"]),
    gs("Bottom of the Well MQ GS Coffin Room", 0x08, 0x04, &["Bottom of the Well", "Master Quest", "Skulltulas"]),
    gs("Bottom of the Well MQ GS West Inner Room", 0x08, 0x02, &["Bottom of the Well", "Master Quest", "Skulltulas"]),
    scene_actor("Bottom of the Well Basement Silver Rupee 1", SilverRupee, 0x08, Coord(1, 0, 8), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Bottom of the Well Basement Silver Rupee 2", SilverRupee, 0x08, Coord(1, 0, 9), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Bottom of the Well Basement Silver Rupee 3", SilverRupee, 0x08, Coord(1, 0, 10), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Bottom of the Well Basement Silver Rupee 4", SilverRupee, 0x08, Coord(1, 0, 11), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Bottom of the Well Basement Silver Rupee 5", SilverRupee, 0x08, Coord(1, 0, 12), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Bottom of the Well Left Side Pot 1", Pot, 0x08, Coord(0, 0, 14), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Pots"]),
    scene_actor("Bottom of the Well Left Side Pot 2", Pot, 0x08, Coord(0, 0, 15), "Recovery Heart", &["Bottom of the Well", "Vanilla Dungeons", "Pots"]),
    scene_actor("Bottom of the Well Left Side Pot 3", Pot, 0x08, Coord(0, 0, 16), "Deku Nuts (5)", &["Bottom of the Well", "Vanilla Dungeons", "Pots"]),
    scene_actor("Bottom of the Well Underwater Pot", Pot, 0x08, Coord(0, 0, 17), "Bombs (5)", &["Bottom of the Well", "Vanilla Dungeons", "Pots"]),
    scene_actor("Bottom of the Well Fire Keese Pot", Pot, 0x08, Coord(2, 0, 6), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Pots"]),
    scene_actor("Bottom of the Well MQ Inner Lobby Pot 1", Pot, 0x08, Coord(0, 0, 18), "Rupee (1)", &["Bottom of the Well", "Master Quest", "Pots"]),
    scene_actor("Bottom of the Well MQ Inner Lobby Pot 2", Pot, 0x08, Coord(0, 0, 19), "Rupee (1)", &["Bottom of the Well", "Master Quest", "Pots"]),
    scene_actor("Bottom of the Well MQ Inner Lobby Pot 3", Pot, 0x08, Coord(0, 0, 20), "Recovery Heart", &["Bottom of the Well", "Master Quest", "Pots"]),
    scene_actor("Bottom of the Well MQ Coffin Room Pot 1", Pot, 0x08, Coord(4, 0, 5), "Rupee (1)", &["Bottom of the Well", "Master Quest", "Pots"]),
    scene_actor("Bottom of the Well MQ Coffin Room Pot 2", Pot, 0x08, Coord(4, 0, 6), "Rupee (1)", &["Bottom of the Well", "Master Quest", "Pots"]),
    scene_actor("Bottom of the Well Coffin Room Flying Pot 1", FlyingPot, 0x08, Coord(4, 0, 7), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Bottom of the Well Coffin Room Flying Pot 2", FlyingPot, 0x08, Coord(4, 0, 8), "Rupee (1)", &["Bottom of the Well", "Vanilla Dungeons", "Flying Pots"]),
    scene_actor("Bottom of the Well Basement Wonderitem", Wonderitem, 0x08, Coord(1, 0, 13), "Rupees (5)", &["Bottom of the Well", "Vanilla Dungeons", "Wonderitem"]),
    // Ice Cavern
    chest("Ice Cavern Map Chest", 0x09, 0x00, "Map (Ice Cavern)", &["Ice Cavern", "Vanilla Dungeons"]),
    chest("Ice Cavern Compass Chest", 0x09, 0x01, "Compass (Ice Cavern)", &["Ice Cavern", "Vanilla Dungeons"]),
    chest("Ice Cavern Iron Boots Chest", 0x09, 0x02, "Iron Boots", &["Ice Cavern", "Vanilla Dungeons"]),
    collectable("Ice Cavern Freestanding PoH", 0x09, 0x01, "Piece of Heart", &["Ice Cavern", "Vanilla Dungeons"]),
    gs("Ice Cavern GS Push Block Room", 0x09, 0x04, &["Ice Cavern", "Vanilla Dungeons", "Skulltulas"]),
    gs("Ice Cavern GS Spinning Scythe Room", 0x09, 0x02, &["Ice Cavern", "Vanilla Dungeons", "Skulltulas"]),
    gs("Ice Cavern GS Heart Piece Room", 0x09, 0x01, &["Ice Cavern", "Vanilla Dungeons", "Skulltulas"]),
    chest("Ice Cavern MQ Map Chest", 0x09, 0x01, "Map (Ice Cavern)", &["Ice Cavern", "Master Quest"]),
    chest("Ice Cavern MQ Compass Chest", 0x09, 0x00, "Compass (Ice Cavern)", &["Ice Cavern", "Master Quest"]),
    chest("Ice Cavern MQ Iron Boots Chest", 0x09, 0x02, "Iron Boots", &["Ice Cavern", "Master Quest"]),
    collectable("Ice Cavern MQ Freestanding PoH", 0x09, 0x01, "Piece of Heart", &["Ice Cavern", "Master Quest"]),
    gs("Ice Cavern MQ GS Red Ice", 0x09, 0x02, &["Ice Cavern", "Master Quest", "Skulltulas"]),
    gs("Ice Cavern MQ GS Ice Block", 0x09, 0x04, &["Ice Cavern", "Master Quest", "Skulltulas"]),
    gs("Ice Cavern MQ GS Scarecrow", 0x09, 0x01, &["Ice Cavern", "Master Quest", "Skulltulas"]),
    scene_actor("Ice Cavern Spinning Scythe Silver Rupee 1", SilverRupee, 0x09, Coord(3, 0, 6), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Spinning Scythe Silver Rupee 2", SilverRupee, 0x09, Coord(3, 0, 7), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Spinning Scythe Silver Rupee 3", SilverRupee, 0x09, Coord(3, 0, 8), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Spinning Scythe Silver Rupee 4", SilverRupee, 0x09, Coord(3, 0, 9), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Spinning Scythe Silver Rupee 5", SilverRupee, 0x09, Coord(3, 0, 10), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Push Block Silver Rupee 1", SilverRupee, 0x09, Coord(5, 0, 4), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Push Block Silver Rupee 2", SilverRupee, 0x09, Coord(5, 0, 5), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Push Block Silver Rupee 3", SilverRupee, 0x09, Coord(5, 0, 6), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Push Block Silver Rupee 4", SilverRupee, 0x09, Coord(5, 0, 7), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Push Block Silver Rupee 5", SilverRupee, 0x09, Coord(5, 0, 8), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ice Cavern Lobby Rupee", Freestanding, 0x09, Coord(0, 0, 3), "Rupee (1)", &["Ice Cavern", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Ice Cavern Map Room Recovery Heart 1", Freestanding, 0x09, Coord(9, 0, 4), "Recovery Heart", &["Ice Cavern", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Ice Cavern Map Room Recovery Heart 2", Freestanding, 0x09, Coord(9, 0, 5), "Recovery Heart", &["Ice Cavern", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Ice Cavern MQ First Hall Pot", Pot, 0x09, Coord(1, 0, 3), "Rupee (1)", &["Ice Cavern", "Master Quest", "Pots"]),
    scene_actor("Ice Cavern MQ Compass Room Pot 1", Pot, 0x09, Coord(8, 0, 5), "Rupee (1)", &["Ice Cavern", "Master Quest", "Pots"]),
    scene_actor("Ice Cavern MQ Compass Room Pot 2", Pot, 0x09, Coord(8, 0, 6), "Recovery Heart", &["Ice Cavern", "Master Quest", "Pots"]),
    scene_actor("Ice Cavern Big Room Red Rupee 1", Freestanding, 0x09, Coord(7, 0, 4), "Rupees (20)", &["Ice Cavern", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Ice Cavern Big Room Red Rupee 2", Freestanding, 0x09, Coord(7, 0, 5), "Rupees (20)", &["Ice Cavern", "Vanilla Dungeons", "Freestandings"]),
    scene_actor("Ice Cavern Big Room Red Rupee 3", Freestanding, 0x09, Coord(7, 0, 6), "Rupees (20)", &["Ice Cavern", "Vanilla Dungeons", "Freestandings"]),
    // Gerudo Training Grounds
    chest("Gerudo Training Grounds Lobby Left Chest", 0x0B, 0x13, "Rupees (5)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Lobby Right Chest", 0x0B, 0x07, "Arrows (10)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Stalfos Chest", 0x0B, 0x00, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Beamos Chest", 0x0B, 0x01, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Hidden Ceiling Chest", 0x0B, 0x0B, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Maze Path First Chest", 0x0B, 0x06, "Rupees (50)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Maze Path Second Chest", 0x0B, 0x0A, "Rupees (20)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Maze Path Third Chest", 0x0B, 0x09, "Arrows (30)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Maze Path Final Chest", 0x0B, 0x0C, "Ice Arrows", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Maze Right Central Chest", 0x0B, 0x05, "Bombchus (5)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Maze Right Side Chest", 0x0B, 0x08, "Arrows (30)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Underwater Silver Rupee Chest", 0x0B, 0x0D, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Hammer Room Clear Chest", 0x0B, 0x12, "Arrows (10)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Hammer Room Switch Chest", 0x0B, 0x10, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Eye Statue Chest", 0x0B, 0x03, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Near Scarecrow Chest", 0x0B, 0x04, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Before Heavy Block Chest", 0x0B, 0x11, "Arrows (10)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Heavy Block First Chest", 0x0B, 0x0F, "Rupees (200)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Heavy Block Second Chest", 0x0B, 0x0E, "Rupees (5)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Heavy Block Third Chest", 0x0B, 0x14, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    chest("Gerudo Training Grounds Heavy Block Fourth Chest", 0x0B, 0x02, "Ice Trap", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    collectable("Gerudo Training Grounds Freestanding Key", 0x0B, 0x01, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Vanilla Dungeons"]),
    scene_actor("Gerudo Training Grounds Beamos Silver Rupee 1", SilverRupee, 0x0B, Coord(7, 0, 10), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Beamos Silver Rupee 2", SilverRupee, 0x0B, Coord(7, 0, 11), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Beamos Silver Rupee 3", SilverRupee, 0x0B, Coord(7, 0, 12), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Beamos Silver Rupee 4", SilverRupee, 0x0B, Coord(7, 0, 13), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Beamos Silver Rupee 5", SilverRupee, 0x0B, Coord(7, 0, 14), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    chest("Gerudo Training Grounds MQ Lobby Left Chest", 0x0B, 0x13, "Arrows (10)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Lobby Right Chest", 0x0B, 0x07, "Bombchus (5)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ First Iron Knuckle Chest", 0x0B, 0x00, "Rupees (5)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Before Heavy Block Chest", 0x0B, 0x11, "Arrows (10)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Heavy Block Chest", 0x0B, 0x02, "Rupees (50)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Eye Statue Chest", 0x0B, 0x03, "Rupees (50)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Ice Arrows Chest", 0x0B, 0x04, "Ice Arrows", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Second Iron Knuckle Chest", 0x0B, 0x12, "Arrows (10)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Flame Circle Chest", 0x0B, 0x0E, "Small Key (Gerudo Training Grounds)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Maze Right Central Chest", 0x0B, 0x05, "Rupees (5)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Maze Right Side Chest", 0x0B, 0x08, "Rupee (Treasure Chest Game)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Maze Path First Chest", 0x0B, 0x06, "Rupee (1)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Maze Path Second Chest", 0x0B, 0x0A, "Rupees (20)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Maze Path Third Chest", 0x0B, 0x09, "Rupees (5)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Hidden Ceiling Chest", 0x0B, 0x0B, "Rupees (50)", &["Gerudo Training Grounds", "Master Quest"]),
    chest("Gerudo Training Grounds MQ Underwater Silver Rupee Chest", 0x0B, 0x0D, "Rupees (20)", &["Gerudo Training Grounds", "Master Quest"]),
    scene_actor("Gerudo Training Grounds Slopes Silver Rupee 1", SilverRupee, 0x0B, Coord(2, 2, 6), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Slopes Silver Rupee 2", SilverRupee, 0x0B, Coord(2, 2, 7), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Slopes Silver Rupee 3", SilverRupee, 0x0B, Coord(2, 2, 8), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Slopes Silver Rupee 4", SilverRupee, 0x0B, Coord(2, 2, 9), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Slopes Silver Rupee 5", SilverRupee, 0x0B, Coord(2, 2, 10), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Lava Silver Rupee 1", SilverRupee, 0x0B, Coord(4, 2, 5), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Lava Silver Rupee 2", SilverRupee, 0x0B, Coord(4, 2, 6), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Lava Silver Rupee 3", SilverRupee, 0x0B, Coord(4, 2, 7), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Lava Silver Rupee 4", SilverRupee, 0x0B, Coord(4, 2, 8), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Lava Silver Rupee 5", SilverRupee, 0x0B, Coord(4, 2, 9), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Water Silver Rupee 1", SilverRupee, 0x0B, Coord(6, 2, 4), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Water Silver Rupee 2", SilverRupee, 0x0B, Coord(6, 2, 5), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Water Silver Rupee 3", SilverRupee, 0x0B, Coord(6, 2, 6), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Water Silver Rupee 4", SilverRupee, 0x0B, Coord(6, 2, 7), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds Water Silver Rupee 5", SilverRupee, 0x0B, Coord(6, 2, 8), "Rupee (1)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Lobby Pot 1", Pot, 0x0B, Coord(0, 2, 4), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Pots"]),
    scene_actor("Gerudo Training Grounds MQ Lobby Pot 2", Pot, 0x0B, Coord(0, 2, 5), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Pots"]),
    scene_actor("Gerudo Training Grounds MQ Maze Pot 1", Pot, 0x0B, Coord(1, 2, 6), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Pots"]),
    scene_actor("Gerudo Training Grounds MQ Maze Pot 2", Pot, 0x0B, Coord(1, 2, 7), "Recovery Heart", &["Gerudo Training Grounds", "Master Quest", "Pots"]),
    scene_actor("Gerudo Training Grounds Hammer Room Wonderitem 1", Wonderitem, 0x0B, Coord(9, 2, 4), "Rupees (5)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Gerudo Training Grounds Hammer Room Wonderitem 2", Wonderitem, 0x0B, Coord(9, 2, 5), "Rupees (5)", &["Gerudo Training Grounds", "Vanilla Dungeons", "Wonderitem"]),
    scene_actor("Gerudo Training Grounds MQ Slopes Silver Rupee 1", SilverRupee, 0x0B, Coord(2, 2, 11), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Slopes Silver Rupee 2", SilverRupee, 0x0B, Coord(2, 2, 12), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Slopes Silver Rupee 3", SilverRupee, 0x0B, Coord(2, 2, 13), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Slopes Silver Rupee 4", SilverRupee, 0x0B, Coord(2, 2, 14), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Slopes Silver Rupee 5", SilverRupee, 0x0B, Coord(2, 2, 15), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Water Silver Rupee 1", SilverRupee, 0x0B, Coord(6, 2, 9), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Water Silver Rupee 2", SilverRupee, 0x0B, Coord(6, 2, 10), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Water Silver Rupee 3", SilverRupee, 0x0B, Coord(6, 2, 11), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Water Silver Rupee 4", SilverRupee, 0x0B, Coord(6, 2, 12), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    scene_actor("Gerudo Training Grounds MQ Water Silver Rupee 5", SilverRupee, 0x0B, Coord(6, 2, 13), "Rupee (1)", &["Gerudo Training Grounds", "Master Quest", "Silver Rupees"]),
    // Ganons Castle
    chest("Ganons Castle Forest Trial Chest", 0x0D, 0x09, "Rupees (5)", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Water Trial Left Chest", 0x0D, 0x07, "Ice Trap", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Water Trial Right Chest", 0x0D, 0x06, "Recovery Heart", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Shadow Trial Front Chest", 0x0D, 0x08, "Rupees (5)", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Shadow Trial Golden Gauntlets Chest", 0x0D, 0x05, "Golden Gauntlets", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Spirit Trial Crystal Switch Chest", 0x0D, 0x12, "Bombchus (20)", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Spirit Trial Invisible Chest", 0x0D, 0x14, "Arrows (10)", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Light Trial First Left Chest", 0x0D, 0x0C, "Rupees (5)", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Light Trial Second Left Chest", 0x0D, 0x0B, "Ice Trap", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Light Trial Third Left Chest", 0x0D, 0x0D, "Recovery Heart", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Light Trial First Right Chest", 0x0D, 0x0E, "Ice Trap", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Light Trial Second Right Chest", 0x0D, 0x0A, "Arrows (30)", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Light Trial Third Right Chest", 0x0D, 0x0F, "Ice Trap", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Light Trial Invisible Enemies Chest", 0x0D, 0x10, "Small Key (Ganons Castle)", &["Ganons Castle", "Vanilla Dungeons"]),
    chest("Ganons Castle Light Trial Lullaby Chest", 0x0D, 0x11, "Small Key (Ganons Castle)", &["Ganons Castle", "Vanilla Dungeons"]),
    scrub("Ganons Castle Deku Scrub Left", 0x0D, 0x3A, "Buy Green Potion", &["Ganons Castle", "Vanilla Dungeons", "Deku Scrubs"]),
    scrub("Ganons Castle Deku Scrub Center-Left", 0x0D, 0x37, "Buy Bombs (5) for 35 Rupees", &["Ganons Castle", "Vanilla Dungeons", "Deku Scrubs"]),
    scrub("Ganons Castle Deku Scrub Center-Right", 0x0D, 0x33, "Buy Arrows (30)", &["Ganons Castle", "Vanilla Dungeons", "Deku Scrubs"]),
    scrub("Ganons Castle Deku Scrub Right", 0x0D, 0x39, "Buy Red Potion for 30 Rupees", &["Ganons Castle", "Vanilla Dungeons", "Deku Scrubs"]),
    chest("Ganons Tower Boss Key Chest", 0x0A, 0x0B, "Boss Key (Ganons Castle)", &["Ganons Castle", "Vanilla Dungeons"]),
    collectable("Ganons Castle MQ Forest Trial Freestanding Key", 0x0D, 0x01, "Small Key (Ganons Castle)", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Forest Trial Eye Switch Chest", 0x0D, 0x02, "Arrows (10)", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Forest Trial Frozen Eye Switch Chest", 0x0D, 0x03, "Bombs (5)", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Water Trial Chest", 0x0D, 0x01, "Rupees (20)", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Shadow Trial Bomb Flower Chest", 0x0D, 0x00, "Arrows (10)", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Shadow Trial Eye Switch Chest", 0x0D, 0x05, "Small Key (Ganons Castle)", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Spirit Trial Golden Gauntlets Chest", 0x0D, 0x06, "Golden Gauntlets", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Spirit Trial Sun Back Left Chest", 0x0D, 0x08, "Recovery Heart", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Spirit Trial Sun Back Right Chest", 0x0D, 0x09, "Recovery Heart", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Spirit Trial Sun Front Left Chest", 0x0D, 0x0A, "Recovery Heart", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Spirit Trial First Chest", 0x0D, 0x0B, "Arrows (10)", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Spirit Trial Invisible Chest", 0x0D, 0x14, "Arrows (10)", &["Ganons Castle", "Master Quest"]),
    chest("Ganons Castle MQ Light Trial Lullaby Chest", 0x0D, 0x04, "Recovery Heart", &["Ganons Castle", "Master Quest"]),
    scrub("Ganons Castle MQ Deku Scrub Right", 0x0D, 0x3A, "Buy Green Potion", &["Ganons Castle", "Master Quest", "Deku Scrubs"]),
    scrub("Ganons Castle MQ Deku Scrub Center-Left", 0x0D, 0x37, "Buy Bombs (5) for 35 Rupees", &["Ganons Castle", "Master Quest", "Deku Scrubs"]),
    scrub("Ganons Castle MQ Deku Scrub Center", 0x0D, 0x33, "Buy Arrows (30)", &["Ganons Castle", "Master Quest", "Deku Scrubs"]),
    scrub("Ganons Castle MQ Deku Scrub Center-Right", 0x0D, 0x39, "Buy Red Potion for 30 Rupees", &["Ganons Castle", "Master Quest", "Deku Scrubs"]),
    scrub("Ganons Castle MQ Deku Scrub Left", 0x0D, 0x30, "Buy Deku Nut (5)", &["Ganons Castle", "Master Quest", "Deku Scrubs"]),
    scene_actor("Ganons Castle Fire Trial Silver Rupee 1", SilverRupee, 0x0D, Coord(14, 2, 6), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ganons Castle Fire Trial Silver Rupee 2", SilverRupee, 0x0D, Coord(14, 2, 7), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ganons Castle Fire Trial Silver Rupee 3", SilverRupee, 0x0D, Coord(14, 2, 8), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ganons Castle Fire Trial Silver Rupee 4", SilverRupee, 0x0D, Coord(14, 2, 9), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ganons Castle Fire Trial Silver Rupee 5", SilverRupee, 0x0D, Coord(14, 2, 10), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Silver Rupees"]),
    scene_actor("Ganons Castle Forest Trial Pot 1", Pot, 0x0D, Coord(2, 2, 4), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle Forest Trial Pot 2", Pot, 0x0D, Coord(2, 2, 5), "Recovery Heart", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle Water Trial Pot 1", Pot, 0x0D, Coord(4, 2, 3), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle Water Trial Pot 2", Pot, 0x0D, Coord(4, 2, 4), "Arrows (10)", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle MQ Forest Trial Pot 1", Pot, 0x0D, Coord(2, 2, 6), "Rupee (1)", &["Ganons Castle", "Master Quest", "Pots"]),
    scene_actor("Ganons Castle MQ Forest Trial Pot 2", Pot, 0x0D, Coord(2, 2, 7), "Rupee (1)", &["Ganons Castle", "Master Quest", "Pots"]),
    scene_actor("Ganons Castle MQ Shadow Trial Pot 1", Pot, 0x0D, Coord(10, 2, 5), "Rupee (1)", &["Ganons Castle", "Master Quest", "Pots"]),
    scene_actor("Ganons Castle MQ Shadow Trial Pot 2", Pot, 0x0D, Coord(10, 2, 6), "Recovery Heart", &["Ganons Castle", "Master Quest", "Pots"]),
    scene_actor("Ganons Tower Pot 1", Pot, 0x0A, Coord(0, 2, 4), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 2", Pot, 0x0A, Coord(0, 2, 5), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 3", Pot, 0x0A, Coord(0, 2, 6), "Recovery Heart", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 4", Pot, 0x0A, Coord(0, 2, 7), "Arrows (10)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 5", Pot, 0x0A, Coord(1, 2, 8), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 6", Pot, 0x0A, Coord(1, 2, 9), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 7", Pot, 0x0A, Coord(2, 2, 10), "Recovery Heart", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 8", Pot, 0x0A, Coord(2, 2, 11), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 9", Pot, 0x0A, Coord(3, 2, 12), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 10", Pot, 0x0A, Coord(3, 2, 13), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 11", Pot, 0x0A, Coord(3, 2, 14), "Recovery Heart", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 12", Pot, 0x0A, Coord(3, 2, 15), "Arrows (10)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 13", Pot, 0x0A, Coord(4, 2, 16), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 14", Pot, 0x0A, Coord(4, 2, 17), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 15", Pot, 0x0A, Coord(4, 2, 18), "Recovery Heart", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 16", Pot, 0x0A, Coord(4, 2, 19), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 17", Pot, 0x0A, Coord(5, 2, 20), "Rupee (1)", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Tower Pot 18", Pot, 0x0A, Coord(5, 2, 21), "Recovery Heart", &["Ganons Castle", "Pots"]),
    scene_actor("Ganons Castle MQ Forest Trial Crate 1", Crate, 0x0D, Coord(2, 2, 10), "Rupee (1)", &["Ganons Castle", "Master Quest", "Crates"]),
    scene_actor("Ganons Castle MQ Forest Trial Crate 2", Crate, 0x0D, Coord(2, 2, 11), "Rupee (1)", &["Ganons Castle", "Master Quest", "Crates"]),
    scene_actor("Ganons Castle MQ Water Trial Crate 1", Crate, 0x0D, Coord(4, 2, 8), "Rupee (1)", &["Ganons Castle", "Master Quest", "Crates"]),
    scene_actor("Ganons Castle MQ Water Trial Crate 2", Crate, 0x0D, Coord(4, 2, 9), "Rupee (1)", &["Ganons Castle", "Master Quest", "Crates"]),
    scene_actor("Ganons Castle MQ Light Trial Crate 1", Crate, 0x0D, Coord(16, 2, 6), "Rupee (1)", &["Ganons Castle", "Master Quest", "Crates"]),
    scene_actor("Ganons Castle MQ Light Trial Crate 2", Crate, 0x0D, Coord(16, 2, 7), "Rupee (1)", &["Ganons Castle", "Master Quest", "Crates"]),
    scene_actor("Ganons Castle Light Trial Pot 1", Pot, 0x0D, Coord(16, 2, 8), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle Light Trial Pot 2", Pot, 0x0D, Coord(16, 2, 9), "Recovery Heart", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle Spirit Trial Pot 1", Pot, 0x0D, Coord(12, 2, 4), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle Spirit Trial Pot 2", Pot, 0x0D, Coord(12, 2, 5), "Arrows (10)", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle Shadow Trial Pot 1", Pot, 0x0D, Coord(10, 2, 7), "Rupee (1)", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle Shadow Trial Pot 2", Pot, 0x0D, Coord(10, 2, 8), "Recovery Heart", &["Ganons Castle", "Vanilla Dungeons", "Pots"]),
    scene_actor("Ganons Castle MQ Spirit Trial Pot 1", Pot, 0x0D, Coord(12, 2, 6), "Rupee (1)", &["Ganons Castle", "Master Quest", "Pots"]),
    scene_actor("Ganons Castle MQ Spirit Trial Pot 2", Pot, 0x0D, Coord(12, 2, 7), "Arrows (10)", &["Ganons Castle", "Master Quest", "Pots"]),
    scene_actor("Ganons Castle MQ Fire Trial Silver Rupee 1", SilverRupee, 0x0D, Coord(14, 2, 11), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Fire Trial Silver Rupee 2", SilverRupee, 0x0D, Coord(14, 2, 12), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Fire Trial Silver Rupee 3", SilverRupee, 0x0D, Coord(14, 2, 13), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Fire Trial Silver Rupee 4", SilverRupee, 0x0D, Coord(14, 2, 14), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Fire Trial Silver Rupee 5", SilverRupee, 0x0D, Coord(14, 2, 15), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Shadow Trial Silver Rupee 1", SilverRupee, 0x0D, Coord(10, 2, 9), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Shadow Trial Silver Rupee 2", SilverRupee, 0x0D, Coord(10, 2, 10), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Shadow Trial Silver Rupee 3", SilverRupee, 0x0D, Coord(10, 2, 11), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Shadow Trial Silver Rupee 4", SilverRupee, 0x0D, Coord(10, 2, 12), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    scene_actor("Ganons Castle MQ Shadow Trial Silver Rupee 5", SilverRupee, 0x0D, Coord(10, 2, 13), "Rupee (1)", &["Ganons Castle", "Master Quest", "Silver Rupees"]),
    // Events
    event("Master Sword Pedestal", "Time Travel"),
    event("Deliver Rutos Letter", "Deliver Letter"),
    event("Pierre", "Scarecrow Song"),
    event("Big Poe Kill", "Big Poe"),
    // Drops
    drop_item("Deku Baba Sticks", "Deku Stick Drop"),
    drop_item("Deku Baba Nuts", "Deku Nut Drop"),
    drop_item("Stick Pot", "Deku Stick Drop"),
    drop_item("Nut Pot", "Deku Nut Drop"),
    drop_item("Nut Crate", "Deku Nut Drop"),
    drop_item("Blue Fire", "Blue Fire"),
    drop_item("Lone Fish", "Fish"),
    drop_item("Fish Group", "Fish"),
    drop_item("Bug Rock", "Bugs"),
    drop_item("Bug Shrub", "Bugs"),
    drop_item("Wandering Bugs", "Bugs"),
    drop_item("Fairy Pot", "Fairy"),
    drop_item("Free Fairies", "Fairy"),
    drop_item("Wall Fairy", "Fairy"),
    drop_item("Butterfly Fairy", "Fairy"),
    drop_item("Gossip Stone Fairy", "Fairy"),
    drop_item("Bean Plant Fairy", "Fairy"),
    drop_item("Fairy Pond", "Fairy"),
    drop_item("Big Poe Pond", "Big Poe"),
    // Hints
    hint("Ganondorf Hint"),
    hint("Dampe Diary Hint"),
    hint("ToT Child Altar Hint"),
    hint("ToT Adult Altar Hint"),
    hint("10 Skulltulas Reward Hint"),
    hint("20 Skulltulas Reward Hint"),
    hint("30 Skulltulas Reward Hint"),
    hint("40 Skulltulas Reward Hint"),
    hint("50 Skulltulas Reward Hint"),
    // Gossip stones
    hint_stone("Colossus Gossip Stone"),
    hint_stone("DMC Gossip Stone"),
    hint_stone("DMC Upper Grotto Gossip Stone"),
    hint_stone("DMT Gossip Stone"),
    hint_stone("DMT Storms Grotto Gossip Stone"),
    hint_stone("Dodongos Cavern Gossip Stone"),
    hint_stone("GC Maze Gossip Stone"),
    hint_stone("GC Medigoron Gossip Stone"),
    hint_stone("GV Gossip Stone"),
    hint_stone("Graveyard Gossip Stone"),
    hint_stone("HC Malon Gossip Stone"),
    hint_stone("HC Rock Wall Gossip Stone"),
    hint_stone("HC Storms Grotto Gossip Stone"),
    hint_stone("HF Cow Grotto Gossip Stone"),
    hint_stone("HF Near Market Grotto Gossip Stone"),
    hint_stone("HF Open Grotto Gossip Stone"),
    hint_stone("HF Southeast Grotto Gossip Stone"),
    hint_stone("KF Deku Tree Gossip Stone (Left)"),
    hint_stone("KF Deku Tree Gossip Stone (Right)"),
    hint_stone("KF Gossip Stone"),
    hint_stone("KF Storms Grotto Gossip Stone"),
    hint_stone("Kak Open Grotto Gossip Stone"),
    hint_stone("LH Lab Gossip Stone"),
    hint_stone("LH Gossip Stone (Southeast)"),
    hint_stone("LH Gossip Stone (Southwest)"),
    hint_stone("LW Gossip Stone"),
    hint_stone("LW Near Shortcuts Grotto Gossip Stone"),
    hint_stone("SFM Maze Gossip Stone (Lower)"),
    hint_stone("SFM Maze Gossip Stone (Upper)"),
    hint_stone("SFM Saria Gossip Stone"),
    hint_stone("ToT Gossip Stone (Left)"),
    hint_stone("ToT Gossip Stone (Left-Center)"),
    hint_stone("ToT Gossip Stone (Right)"),
    hint_stone("ToT Gossip Stone (Right-Center)"),
    hint_stone("ZD Gossip Stone"),
    hint_stone("ZF Fairy Gossip Stone"),
    hint_stone("ZF Jabu Gossip Stone"),
    hint_stone("ZR Near Grottos Gossip Stone"),
    hint_stone("ZR Near Domain Gossip Stone"),
    hint_stone("ZR Open Grotto Gossip Stone"),
];

/// Transaction descriptors for the business-scrub set, in merchant order.
/// The `0x38` entry is unused in the vanilla game but is preserved to keep
/// the sequence ordinally stable for the text patcher.
pub static BUSINESS_SCRUBS: &[BusinessScrub] = &[
    BusinessScrub { flag: 0x30, price: 20, text_id: 0x10A0, text_replacement: ["Deku Nuts", "a mysterious item"] },
    BusinessScrub { flag: 0x31, price: 15, text_id: 0x10A1, text_replacement: ["Deku Sticks", "a mysterious item"] },
    BusinessScrub { flag: 0x3E, price: 10, text_id: 0x10A2, text_replacement: ["Piece of the Heart", "a mysterious item"] },
    BusinessScrub { flag: 0x33, price: 40, text_id: 0x10CA, text_replacement: ["\u{5}\u{42}Deku Seeds", "a \u{5}\u{42}mysterious item"] },
    BusinessScrub { flag: 0x34, price: 50, text_id: 0x10CB, text_replacement: ["\u{5}\u{41}Deku Shield", "a \u{5}\u{41}mysterious item"] },
    BusinessScrub { flag: 0x37, price: 40, text_id: 0x10CC, text_replacement: ["\u{5}\u{41}Bombs", "a \u{5}\u{41}mysterious item"] },
    BusinessScrub { flag: 0x38, price: 0, text_id: 0x10CD, text_replacement: ["\u{5}\u{42}Arrows", "a \u{5}\u{42}mysterious item"] },
    BusinessScrub { flag: 0x39, price: 40, text_id: 0x10CE, text_replacement: ["\u{5}\u{41}Red Potion", "a \u{5}\u{41}mysterious item"] },
    BusinessScrub { flag: 0x3A, price: 40, text_id: 0x10CF, text_replacement: ["\u{5}\u{42}Green Potion", "a \u{5}\u{42}mysterious item"] },
    BusinessScrub { flag: 0x77, price: 40, text_id: 0x10D0, text_replacement: ["enable you to pick up more\u{1}\u{5}\u{41}Deku Sticks", "sell you a \u{5}\u{41}mysterious item"] },
    BusinessScrub { flag: 0x79, price: 40, text_id: 0x10D1, text_replacement: ["enable you to pick up more \u{5}\u{42}Deku\u{1}Nuts", "sell you a \u{5}\u{42}mysterious item"] },
];
