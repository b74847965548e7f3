use battlesoup_ai::{BattleInfo, CandidateSet, Coord, EngineError, ProbabilityMap, Propagator, Ship, ShipPosition, Tile};

#[test]
fn counts_candidates_per_cell() -> Result<(), EngineError> {
    let info = BattleInfo::new(3, vec![Ship::from_body("Pair", "11")?]);
    let set = CandidateSet::enumerate(&info)?;
    let map = ProbabilityMap::build(&info, &set)?;

    assert_eq!(map.ship_count(), 1);
    assert_eq!(map.map_size(), 3);
    assert_eq!(map.value(0, Coord::new(1, 1)), 4);
    assert_eq!(map.value(0, Coord::new(0, 0)), 2);
    assert_eq!(map.value(0, Coord::new(1, 0)), 3);
    assert_eq!(map.layer(0).iter().sum::<u32>(), 24);
    assert_eq!(map.value_range(), Some((2, 4)));
    assert_eq!(map.normalized(0, Coord::new(1, 1)), 1.0);
    assert_eq!(map.normalized(0, Coord::new(0, 0)), 0.5);
    Ok(())
}

#[test]
fn total_layer_sums_ships() -> Result<(), EngineError> {
    let mut info = BattleInfo::new(
        5,
        vec![
            Ship::from_body("Line", "111")?,
            Ship::from_body("Pair", "11")?,
            Ship::from_body("L", "10,11")?,
        ],
    );
    info.tiles[Coord::new(2, 2)] = Tile::HIT_SHIP;
    info.tiles[Coord::new(0, 4)] = Tile::REVEALED_WATER;
    let mut set = CandidateSet::enumerate(&info)?;
    Propagator::new().propagate(&info, &mut set)?;
    let map = ProbabilityMap::build(&info, &set)?;

    assert_eq!(map.layer(3), map.total());
    for c in map.total().coords() {
        let sum: u32 = (0..3).map(|i| map.value(i, c)).sum();
        assert_eq!(map.total()[c], sum);
    }
    for i in 0..3 {
        let covered: u32 = map.layer(i).iter().sum();
        assert_eq!(covered as usize, set.total(i) * info.ships[i].len());
    }
    assert_eq!(map.value(0, Coord::new(0, 4)), 0);
    Ok(())
}

#[test]
fn empty_lists_give_no_range() -> Result<(), EngineError> {
    let info = BattleInfo::new(4, vec![Ship::from_body("Pair", "11")?]);
    let map = ProbabilityMap::from_lists(&info, &[Vec::new()])?;
    assert_eq!(map.value_range(), None);
    assert_eq!(map.normalized(0, Coord::new(0, 0)), 0.0);
    assert!(map.total().iter().all(|&v| v == 0));
    Ok(())
}

#[test]
fn from_lists_checks_length() -> Result<(), EngineError> {
    let info = BattleInfo::new(4, vec![Ship::from_body("Pair", "11")?]);
    let lists = vec![vec![ShipPosition::new(0, 0, false)], Vec::new()];
    assert_eq!(
        ProbabilityMap::from_lists(&info, &lists),
        Err(EngineError::LengthMismatch {
            what: "candidate list",
            expected: 1,
            found: 2
        })
    );
    Ok(())
}
