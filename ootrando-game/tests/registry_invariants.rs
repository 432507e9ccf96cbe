use anyhow::Result;
use ootrando_game::{
    shop_address, BigOctoHint, ChestAppearance, DefaultDef, LocationKind, LocationRegistry,
    RomAddrs, SceneSetup, DUNGEON_NAMES, NUM_SHOP_SHELVES, SHOP_ITEM_BASE,
};

struct FakeWorld {
    bigocto: Option<&'static str>,
}

impl BigOctoHint for FakeWorld {
    fn bigocto_location(&self) -> Option<&str> {
        self.bigocto
    }
}

#[test]
fn test_registry_builds() -> Result<()> {
    let registry = LocationRegistry::new()?;
    assert!(!registry.is_empty());
    // The full table enumerates on the order of two thousand records.
    assert!(registry.len() > 1800);
    Ok(())
}

#[test]
fn test_registration_order_indexes() -> Result<()> {
    let registry = LocationRegistry::new()?;
    for (position, loc) in registry.iter().enumerate() {
        assert_eq!(loc.index, position, "{}", loc.name);
        assert_eq!(registry.get(loc.name).unwrap().index, position);
    }
    Ok(())
}

#[test]
fn test_by_kind_partitions_the_registry() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let mut counted = 0;
    for kind in [
        LocationKind::Chest,
        LocationKind::Collectable,
        LocationKind::Freestanding,
        LocationKind::ActorOverride,
        LocationKind::RupeeTower,
        LocationKind::Pot,
        LocationKind::FlyingPot,
        LocationKind::Crate,
        LocationKind::SmallCrate,
        LocationKind::Beehive,
        LocationKind::Wonderitem,
        LocationKind::Scrub,
        LocationKind::GrottoScrub,
        LocationKind::Npc,
        LocationKind::Song,
        LocationKind::Cutscene,
        LocationKind::Boss,
        LocationKind::BossHeart,
        LocationKind::GSToken,
        LocationKind::Shop,
        LocationKind::MaskShop,
        LocationKind::SilverRupee,
        LocationKind::Event,
        LocationKind::Drop,
        LocationKind::Hint,
        LocationKind::HintStone,
    ] {
        for loc in registry.by_kind(kind) {
            assert_eq!(loc.kind, kind, "{}", loc.name);
            counted += 1;
        }
    }
    assert_eq!(counted, registry.len());
    Ok(())
}

#[test]
fn test_songs_carry_patch_offset_pairs() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let songs: Vec<_> = registry.by_kind(LocationKind::Song).collect();
    assert_eq!(songs.len(), 12);
    for song in songs {
        assert_eq!(song.scene, Some(0xFF), "{}", song.name);
        assert!(song.flag().is_some(), "{}", song.name);
        assert!(
            matches!(song.addresses, RomAddrs::Pair(_, _)),
            "{}",
            song.name
        );
    }
    Ok(())
}

#[test]
fn test_song_from_impa_record() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let loc = registry.get("Song from Impa").unwrap();
    assert_eq!(loc.kind, LocationKind::Song);
    assert_eq!(loc.scene, Some(0xFF));
    assert_eq!(loc.flag(), Some(0x26));
    assert_eq!(loc.addresses, RomAddrs::Pair(0x2E8E925, 0x2E8E925));
    assert_eq!(loc.vanilla_item, Some("Zeldas Lullaby"));
    assert!(loc.scene_coords().is_empty());
    Ok(())
}

#[test]
fn test_queen_gohma_record() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let loc = registry.get("Queen Gohma").unwrap();
    assert_eq!(loc.kind, LocationKind::Boss);
    assert_eq!(loc.scene, Some(0x11));
    assert_eq!(loc.flag(), Some(0x65));
    assert_eq!(loc.vanilla_item, Some("Kokiri Emerald"));
    assert!(loc.has_tag("Dungeon Rewards"));
    assert!(loc.has_tag("Deku Tree"));
    Ok(())
}

#[test]
fn test_shop_address_layout() {
    assert_eq!(shop_address(0, 0), 0xC71ED0);
    assert_eq!(shop_address(0, 7), 0xC71ED0 + 0x38);
    assert_eq!(shop_address(1, 0), 0xC71F10);
}

#[test]
fn test_kf_shop_block() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let first = registry.get("KF Shop Item 1").unwrap();
    assert_eq!(first.kind, LocationKind::Shop);
    assert_eq!(first.addresses.first(), Some(0xC71ED0));
    assert_eq!(first.vanilla_item, Some("Buy Deku Shield"));
    let last = registry.get("KF Shop Item 8").unwrap();
    assert_eq!(last.addresses.first(), Some(0xC71F08));
    Ok(())
}

#[test]
fn test_shop_blocks_are_complete() -> Result<()> {
    use hashbrown::HashMap;
    let registry = LocationRegistry::new()?;
    let mut shelves_by_shop: HashMap<u32, Vec<u32>> = HashMap::new();
    for loc in registry
        .by_kind(LocationKind::Shop)
        .chain(registry.by_kind(LocationKind::MaskShop))
    {
        let addr = loc.addresses.first().unwrap();
        let offset = addr - SHOP_ITEM_BASE;
        assert_eq!(offset % 0x08, 0, "{}", loc.name);
        shelves_by_shop
            .entry(offset / 0x40)
            .or_default()
            .push(offset % 0x40 / 0x08);
    }
    for (shop_id, mut shelves) in shelves_by_shop {
        shelves.sort();
        assert_eq!(
            shelves,
            (0..NUM_SHOP_SHELVES as u32).collect::<Vec<_>>(),
            "shop block {}",
            shop_id
        );
    }
    Ok(())
}

#[test]
fn test_mask_shop_kind() -> Result<()> {
    let registry = LocationRegistry::new()?;
    for shelf in 1..=8 {
        let name = format!("Market Mask Shop Item {shelf}");
        let loc = registry.get(&name).unwrap();
        assert_eq!(loc.kind, LocationKind::MaskShop, "{name}");
        let addr = loc.addresses.first().unwrap();
        assert_eq!((addr - SHOP_ITEM_BASE) / 0x40, 10, "{name}");
    }
    Ok(())
}

#[test]
fn test_pseudo_locations_carry_no_world_data() -> Result<()> {
    let registry = LocationRegistry::new()?;
    for loc in registry.iter() {
        if loc.kind.is_pseudo() {
            assert_eq!(loc.scene, None, "{}", loc.name);
            assert_eq!(loc.flag(), None, "{}", loc.name);
            assert!(loc.scene_coords().is_empty(), "{}", loc.name);
            assert_eq!(loc.addresses, RomAddrs::None, "{}", loc.name);
        }
    }
    Ok(())
}

#[test]
fn test_bean_platform_rupee_tower_coords() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let loc = registry.get("KF Bean Platform Green Rupee 1").unwrap();
    assert_eq!(loc.kind, LocationKind::RupeeTower);
    assert_eq!(
        *loc.default_def(),
        DefaultDef::Multi(&[
            DefaultDef::Collectible(0, 2, 12, 1),
            DefaultDef::Collectible(0, 3, 10, 1)
        ])
    );
    let coords = loc.scene_coords();
    assert_eq!(coords.len(), 2);
    assert_eq!(coords[0].setup, SceneSetup::AdultDay);
    assert_eq!(coords[0].actor_idx, 12);
    assert_eq!(coords[0].sub_id, Some(1));
    assert_eq!(coords[1].setup, SceneSetup::AdultNight);
    assert_eq!(coords[1].actor_idx, 10);
    assert_eq!(coords[1].sub_id, Some(1));
    Ok(())
}

#[test]
fn test_default_payloads_round_trip() -> Result<()> {
    use hashbrown::HashSet;
    use ootrando_game::SceneCoord;
    let registry = LocationRegistry::new()?;
    for loc in registry.iter() {
        match *loc.default_def() {
            DefaultDef::None => {
                assert_eq!(loc.flag(), None, "{}", loc.name);
                assert!(loc.scene_coords().is_empty(), "{}", loc.name);
            }
            DefaultDef::Flag(flag) => {
                assert_eq!(loc.flag(), Some(flag), "{}", loc.name);
                assert!(loc.scene_coords().is_empty(), "{}", loc.name);
            }
            DefaultDef::Coord(room, setup, actor_idx) => {
                let expected = SceneCoord {
                    room,
                    setup: SceneSetup::try_from(setup)?,
                    actor_idx,
                    sub_id: None,
                };
                assert_eq!(loc.scene_coords(), [expected], "{}", loc.name);
            }
            DefaultDef::Collectible(room, setup, actor_idx, sub) => {
                let expected = SceneCoord {
                    room,
                    setup: SceneSetup::try_from(setup)?,
                    actor_idx,
                    sub_id: Some(sub),
                };
                assert_eq!(loc.scene_coords(), [expected], "{}", loc.name);
            }
            DefaultDef::Multi(entries) => {
                let mut expected = HashSet::new();
                for entry in entries {
                    match *entry {
                        DefaultDef::Coord(room, setup, actor_idx) => {
                            expected.insert(SceneCoord {
                                room,
                                setup: SceneSetup::try_from(setup)?,
                                actor_idx,
                                sub_id: None,
                            });
                        }
                        DefaultDef::Collectible(room, setup, actor_idx, sub) => {
                            expected.insert(SceneCoord {
                                room,
                                setup: SceneSetup::try_from(setup)?,
                                actor_idx,
                                sub_id: Some(sub),
                            });
                        }
                        _ => unreachable!("validated at construction"),
                    }
                }
                let actual: HashSet<SceneCoord> = loc.scene_coords().iter().copied().collect();
                assert_eq!(actual, expected, "{}", loc.name);
            }
        }
    }
    Ok(())
}

#[test]
fn test_boss_like_group() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let mut saw_rauru = false;
    for loc in registry.boss_like() {
        if loc.name == "ToT Reward from Rauru" {
            saw_rauru = true;
        } else {
            assert_eq!(loc.kind, LocationKind::Boss, "{}", loc.name);
        }
    }
    assert!(saw_rauru);
    assert_eq!(registry.boss_like().count(), 9);
    Ok(())
}

#[test]
fn test_collectable_like_group() -> Result<()> {
    let registry = LocationRegistry::new()?;
    for loc in registry.collectable_like() {
        assert!(
            matches!(
                loc.kind,
                LocationKind::Collectable
                    | LocationKind::BossHeart
                    | LocationKind::GSToken
                    | LocationKind::SilverRupee
            ),
            "{}",
            loc.name
        );
    }
    assert!(registry.collectable_like().any(|loc| loc.name == "Deku Tree Queen Gohma Heart"));
    Ok(())
}

#[test]
fn test_can_see_specials() -> Result<()> {
    let registry = LocationRegistry::new()?;
    for loc in registry.can_see() {
        if loc.kind == LocationKind::Chest {
            assert_eq!(loc.scene, Some(0x10), "{}", loc.name);
        }
        if loc.kind == LocationKind::Npc {
            assert!(
                matches!(loc.scene, Some(0x4B) | Some(0x51) | Some(0x5B)),
                "{}",
                loc.name
            );
        }
    }
    assert!(registry
        .can_see()
        .any(|loc| loc.name == "Market Treasure Chest Game Reward"
            || loc.scene == Some(0x10)));
    assert!(registry.can_see().any(|loc| loc.scene == Some(0x4B)));
    Ok(())
}

#[test]
fn test_dungeon_group() -> Result<()> {
    let registry = LocationRegistry::new()?;
    for loc in registry.dungeon_locations() {
        assert!(
            DUNGEON_NAMES.iter().any(|name| loc.has_tag(name)),
            "{}",
            loc.name
        );
    }
    let in_dungeon: Vec<_> = registry.dungeon_locations().map(|loc| loc.name).collect();
    assert!(in_dungeon.contains(&"Deku Tree Map Chest"));
    assert!(in_dungeon.contains(&"Queen Gohma"));
    assert!(!in_dungeon.contains(&"KF Midos Top Left Chest"));
    Ok(())
}

#[test]
fn test_is_viewable_scenarios() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let gohma = registry.get("Queen Gohma").unwrap();
    let mido = registry.get("KF Midos Top Left Chest").unwrap();
    assert!(!registry.is_viewable(gohma, ChestAppearance::Textures, true, None));
    assert!(registry.is_viewable(mido, ChestAppearance::Textures, true, None));
    // With plain chests and fast animations off, every chest is shown.
    assert!(registry.is_viewable(mido, ChestAppearance::Off, false, None));
    // With plain chests and fast animations on, only the can_see group shows.
    assert!(!registry.is_viewable(mido, ChestAppearance::Off, true, None));
    let shop_item = registry.get("KF Shop Item 1").unwrap();
    assert!(registry.is_viewable(shop_item, ChestAppearance::Off, true, None));
    Ok(())
}

#[test]
fn test_is_viewable_bigocto_hook() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let impa = registry.get("Song from Impa").unwrap();
    assert!(!registry.is_viewable(impa, ChestAppearance::Off, true, None));
    let world = FakeWorld {
        bigocto: Some("Song from Impa"),
    };
    assert!(registry.is_viewable(impa, ChestAppearance::Off, true, Some(&world)));
    let other = FakeWorld {
        bigocto: Some("Queen Gohma"),
    };
    assert!(!registry.is_viewable(impa, ChestAppearance::Off, true, Some(&other)));
    Ok(())
}

#[test]
fn test_business_scrub_table() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let scrubs = registry.business_scrubs();
    assert_eq!(scrubs.len(), 11);
    assert_eq!(scrubs[0].flag, 0x30);
    assert_eq!(scrubs[0].price, 20);
    assert_eq!(scrubs[0].text_id, 0x10A0);
    // Text ids are unique; flags are unique.
    let mut text_ids: Vec<_> = scrubs.iter().map(|s| s.text_id).collect();
    text_ids.sort();
    text_ids.dedup();
    assert_eq!(text_ids.len(), scrubs.len());
    let mut flags: Vec<_> = scrubs.iter().map(|s| s.flag).collect();
    flags.sort();
    flags.dedup();
    assert_eq!(flags.len(), scrubs.len());
    Ok(())
}

#[test]
fn test_grotto_scrubs_use_virtual_scenes() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let mut count = 0;
    for loc in registry.by_kind(LocationKind::GrottoScrub) {
        assert!(loc.scene.unwrap() >= 0xE0, "{}", loc.name);
        count += 1;
    }
    assert!(count > 0);
    Ok(())
}

#[test]
fn test_location_serializes_with_renamed_kinds() -> Result<()> {
    let registry = LocationRegistry::new()?;
    let gs = registry.get("Deku Tree GS Compass Room").unwrap();
    let json = serde_json::to_value(gs)?;
    assert_eq!(json["kind"], "GS Token");
    assert_eq!(json["name"], "Deku Tree GS Compass Room");
    assert_eq!(json["scene"], 0x00);
    Ok(())
}
