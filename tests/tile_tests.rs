use battlesoup_ai::{Coord, Grid, Tile};

#[test]
fn filters_match_any_flag() {
    assert!(Tile::GENERAL_WATER.matches(Tile::ATTACKABLE));
    assert!(Tile::REVEALED_SHIP.matches(Tile::ATTACKABLE));
    assert!(!Tile::HIT_SHIP.matches(Tile::ATTACKABLE));
    assert!(!Tile::REVEALED_WATER.matches(Tile::ATTACKABLE));

    assert!(Tile::HIT_SHIP.matches(Tile::SHIP_ALLOWED));
    assert!(!Tile::GENERAL_STONE.matches(Tile::SHIP_ALLOWED));
    assert!(Tile::REVEALED_STONE.matches(Tile::ALL_STONE));
    assert!(Tile::REVEALED_WATER.matches(Tile::ALL_WATER));
    assert!(!Tile::GENERAL_WATER.matches(Tile::NONE));
}

#[test]
fn exposed_ship_states() {
    assert!(Tile::REVEALED_SHIP.is_exposed_ship());
    assert!(Tile::HIT_SHIP.is_exposed_ship());
    assert!(!Tile::GENERAL_WATER.is_exposed_ship());
    assert_eq!(Tile::EXPOSED_SHIP, Tile::REVEALED_SHIP | Tile::HIT_SHIP);
}

#[test]
fn bit_operations_stay_within_known_flags() {
    let not_water = !Tile::ALL_WATER;
    assert!(!not_water.matches(Tile::GENERAL_WATER));
    assert!(not_water.contains(Tile::HIT_SHIP | Tile::GENERAL_STONE));
    assert_eq!(Tile::from_bits_truncate(0xff), !Tile::NONE);

    let mut t = Tile::NONE;
    t |= Tile::REVEALED_SHIP;
    t &= Tile::EXPOSED_SHIP;
    assert_eq!(t, Tile::REVEALED_SHIP);
    assert_eq!(t.bits(), 16);
}

#[test]
fn display_and_debug() {
    let mut grid = Grid::filled(2, Tile::GENERAL_WATER);
    grid[Coord::new(1, 0)] = Tile::HIT_SHIP;
    grid[Coord::new(0, 1)] = Tile::REVEALED_STONE;
    let row: String = grid.iter().map(|t| t.to_string()).collect();
    assert_eq!(row, ".X@.");
    assert_eq!(format!("{:?}", Tile::ATTACKABLE), "Tile(GeneralWater | RevealedShip)");
    assert_eq!(format!("{:?}", Tile::NONE), "Tile(None)");
}

#[test]
fn grid_is_row_major() {
    let mut grid: Grid<u32> = Grid::zeroed(3);
    assert!(grid.set(Coord::new(2, 1), 7));
    assert!(!grid.set(Coord::new(3, 0), 1));
    assert_eq!(grid.offset(Coord::new(2, 1)), Some(5));
    assert_eq!(grid.as_slice()[5], 7);
    assert_eq!(grid.get(Coord::new(-1, 0)), None);
    assert_eq!(Coord::from((3, 1)) - Coord::new(1, 1), Coord::new(2, 0));

    let order: Vec<Coord> = grid.coords().take(4).collect();
    assert_eq!(
        order,
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0), Coord::new(0, 1)]
    );

    grid.reset(4);
    assert_eq!(grid.size(), 4);
    assert!(grid.iter().all(|&v| v == 0));
}
