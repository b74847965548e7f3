use battlesoup_ai::{BattleInfo, CandidateSet, Coord, EngineError, Ship, ShipPosition, Tile};

fn pair_info(size: usize) -> Result<BattleInfo, EngineError> {
    Ok(BattleInfo::new(size, vec![Ship::from_body("Pair", "11")?]))
}

#[test]
fn fresh_map_lists_every_fit_flipped_first() -> Result<(), EngineError> {
    let info = pair_info(3)?;
    let set = CandidateSet::enumerate(&info)?;
    assert_eq!(set.hidden[0].len(), 12);
    assert!(set.exposed[0].is_empty());
    assert_eq!(
        &set.hidden[0][..5],
        &[
            ShipPosition::new(0, 0, true),
            ShipPosition::new(0, 0, false),
            ShipPosition::new(1, 0, true),
            ShipPosition::new(1, 0, false),
            ShipPosition::new(2, 0, true),
        ]
    );
    Ok(())
}

#[test]
fn symmetric_ships_skip_flips() -> Result<(), EngineError> {
    let info = BattleInfo::new(3, vec![Ship::from_body("Square", "11,11")?]);
    let set = CandidateSet::enumerate(&info)?;
    assert_eq!(set.hidden[0].len(), 4);
    assert!(set.hidden[0].iter().all(|p| !p.flip));
    Ok(())
}

#[test]
fn hit_splits_hidden_and_exposed() -> Result<(), EngineError> {
    let mut info = pair_info(3)?;
    info.tiles[Coord::new(1, 1)] = Tile::HIT_SHIP;
    let set = CandidateSet::enumerate(&info)?;
    assert_eq!(
        set.exposed[0],
        vec![
            ShipPosition::new(1, 0, true),
            ShipPosition::new(0, 1, false),
            ShipPosition::new(1, 1, true),
            ShipPosition::new(1, 1, false),
        ]
    );
    assert_eq!(set.hidden[0].len(), 8);
    assert!(set.hidden[0].iter().all(|p| !set.exposed[0].contains(p)));
    assert_eq!(set.total(0), 12);
    Ok(())
}

#[test]
fn revealed_water_and_stones_block() -> Result<(), EngineError> {
    let mut info = pair_info(3)?.with_stones(&[Coord::new(0, 0)]);
    info.tiles[Coord::new(1, 1)] = Tile::REVEALED_WATER;
    let set = CandidateSet::enumerate(&info)?;
    // 12 fits, minus 4 through the center, minus 2 through the corner
    assert_eq!(set.hidden[0].len(), 6);
    assert!(set.exposed[0].is_empty());
    Ok(())
}

#[test]
fn fully_hit_placement_is_not_a_candidate() -> Result<(), EngineError> {
    let mut info = pair_info(3)?;
    info.tiles[Coord::new(0, 0)] = Tile::HIT_SHIP;
    info.tiles[Coord::new(1, 0)] = Tile::HIT_SHIP;
    let set = CandidateSet::enumerate(&info)?;
    assert!(!set.exposed[0].contains(&ShipPosition::new(0, 0, false)));
    assert!(set.exposed[0].contains(&ShipPosition::new(1, 0, false)));
    Ok(())
}

#[test]
fn dead_and_known_ships_are_skipped() -> Result<(), EngineError> {
    let ships = vec![
        Ship::from_body("Pair", "11")?,
        Ship::from_body("Single", "1")?,
        Ship::from_body("Other", "11")?,
    ];
    let mut info = BattleInfo::new(3, ships);
    info.ships_alive[0] = false;
    info.known_positions[2] = Some(ShipPosition::new(0, 0, false));
    let mut set = CandidateSet::enumerate(&info)?;
    assert!(set.hidden[0].is_empty());
    assert!(set.hidden[2].is_empty());
    // known placements do not hide cells from the others
    assert_eq!(set.hidden[1].len(), 9);
    assert_eq!(set.len(), 9);
    assert!(!set.is_empty());

    assert_eq!(set.drop_claimed(&info), 2);
    assert_eq!(set.hidden[1].len(), 7);
    assert_eq!(set.drop_claimed(&info), 0);
    Ok(())
}

#[test]
fn sunk_ship_tiles_still_count_as_evidence() -> Result<(), EngineError> {
    let ships = vec![Ship::from_body("Pair", "11")?, Ship::from_body("Line", "111")?];
    let mut info = BattleInfo::new(3, ships);
    info.tiles[Coord::new(0, 0)] = Tile::HIT_SHIP;
    info.tiles[Coord::new(1, 0)] = Tile::HIT_SHIP;
    info.ships_alive[0] = false;
    info.known_positions[0] = Some(ShipPosition::new(0, 0, false));

    let mut set = CandidateSet::enumerate(&info)?;
    assert!(set.exposed[1].contains(&ShipPosition::new(0, 0, false)));
    assert!(set.exposed[1].contains(&ShipPosition::new(0, 0, true)));

    set.drop_claimed(&info);
    assert!(!set.exposed[1].contains(&ShipPosition::new(0, 0, false)));
    assert!(set.all(1).all(|&p| !info.ships[1].contains(Coord::new(1, 0), p)));
    Ok(())
}

#[test]
fn mismatched_arrays_are_rejected() -> Result<(), EngineError> {
    let mut info = pair_info(3)?;
    info.cooldowns.push(0);
    assert_eq!(
        CandidateSet::enumerate(&info),
        Err(EngineError::LengthMismatch {
            what: "cooldown",
            expected: 1,
            found: 2
        })
    );
    let mut info = pair_info(3)?;
    info.map_size = 4;
    assert_eq!(
        CandidateSet::enumerate(&info),
        Err(EngineError::GridSizeMismatch { expected: 4, found: 3 })
    );
    Ok(())
}
