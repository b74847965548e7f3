use battlesoup_ai::{
    default_fleet, position_ships_random, position_ships_with_retries, Coord, EngineError, Grid, Ship,
    PLACEMENT_ATTEMPTS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_stones(rng: &mut SmallRng, size: usize, count: usize) -> Vec<Coord> {
    (0..count)
        .map(|_| Coord::new(rng.random_range(0..size as i32), rng.random_range(0..size as i32)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placements_fit_and_never_overlap(seed in any::<u64>(), size in 6usize..12, stone_count in 0usize..6) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = default_fleet().unwrap();
        let stones = random_stones(&mut rng, size, stone_count);
        let positions = position_ships_with_retries(&mut rng, size, &ships, &stones, PLACEMENT_ATTEMPTS).unwrap();
        prop_assert_eq!(positions.len(), ships.len());

        let mut used = Grid::filled(size, false);
        for s in &stones {
            used.set(*s, true);
        }
        for (ship, &pos) in ships.iter().zip(positions.iter()) {
            prop_assert!(ship.fits(pos, size));
            for c in ship.cells(pos) {
                prop_assert_eq!(used.get(c), Some(false));
                used.set(c, true);
            }
        }
    }

    #[test]
    fn same_seed_same_fleet(seed in any::<u64>()) {
        let ships = default_fleet().unwrap();
        let a = position_ships_random(&mut SmallRng::seed_from_u64(seed), 8, &ships, &[]);
        let b = position_ships_random(&mut SmallRng::seed_from_u64(seed), 8, &ships, &[]);
        prop_assert_eq!(a, b);
    }
}

#[test]
fn empty_fleet_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(position_ships_random(&mut rng, 8, &[], &[]), Err(EngineError::EmptyFleet));
}

#[test]
fn ship_larger_than_map_fails() -> Result<(), EngineError> {
    let mut rng = SmallRng::seed_from_u64(2);
    let ships = vec![Ship::from_body("Small", "1")?, Ship::from_body("Huge", "1111")?];
    let err = position_ships_with_retries(&mut rng, 3, &ships, &[], 4).unwrap_err();
    assert_eq!(err, EngineError::UnableToPlaceShip { ship: 1 });
    Ok(())
}

#[test]
fn stones_leave_exact_room() -> Result<(), EngineError> {
    let mut rng = SmallRng::seed_from_u64(3);
    let ships = vec![Ship::from_body("Pair", "11")?];
    let stones = [Coord::new(0, 0), Coord::new(0, 1)];
    let positions = position_ships_random(&mut rng, 2, &ships, &stones)?;
    let cells: Vec<Coord> = ships[0].cells(positions[0]).collect();
    assert_eq!(cells, vec![Coord::new(1, 0), Coord::new(1, 1)]);
    Ok(())
}
