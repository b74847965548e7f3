use battlesoup_ai::{cluster_size_at, cluster_sizes, Coord, Grid, Tile};

fn grid_with(size: usize, cells: &[(i32, i32, Tile)]) -> Grid<Tile> {
    let mut tiles = Grid::filled(size, Tile::GENERAL_WATER);
    for &(x, y, t) in cells {
        tiles[Coord::new(x, y)] = t;
    }
    tiles
}

#[test]
fn lone_hit_is_its_own_cluster() {
    let tiles = grid_with(4, &[(2, 1, Tile::HIT_SHIP)]);
    let sizes = cluster_sizes(&tiles, Tile::HIT_SHIP);
    assert_eq!(sizes[Coord::new(2, 1)], 1);
    assert_eq!(sizes.iter().sum::<u32>(), 1);
}

#[test]
fn diagonal_neighbours_join() {
    let tiles = grid_with(
        4,
        &[(0, 0, Tile::HIT_SHIP), (1, 1, Tile::HIT_SHIP), (1, 2, Tile::HIT_SHIP), (3, 3, Tile::HIT_SHIP)],
    );
    let sizes = cluster_sizes(&tiles, Tile::HIT_SHIP);
    for c in [Coord::new(0, 0), Coord::new(1, 1), Coord::new(1, 2)] {
        assert_eq!(sizes[c], 3);
    }
    assert_eq!(sizes[Coord::new(3, 3)], 1);
    assert_eq!(sizes[Coord::new(2, 2)], 0);
}

#[test]
fn l_shape_is_one_cluster() {
    let tiles = grid_with(3, &[(0, 0, Tile::HIT_SHIP), (0, 1, Tile::HIT_SHIP), (1, 1, Tile::HIT_SHIP)]);
    let sizes = cluster_sizes(&tiles, Tile::HIT_SHIP);
    for c in [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)] {
        assert_eq!(sizes[c], 3);
        assert_eq!(cluster_size_at(&tiles, Tile::HIT_SHIP, c), 3);
    }
    assert_eq!(sizes[Coord::new(1, 0)], 0);
    assert_eq!(sizes.iter().sum::<u32>(), 9);
}

#[test]
fn filter_picks_counted_members() {
    let tiles = grid_with(
        4,
        &[(0, 0, Tile::HIT_SHIP), (1, 0, Tile::REVEALED_SHIP), (2, 0, Tile::HIT_SHIP)],
    );
    assert_eq!(cluster_size_at(&tiles, Tile::HIT_SHIP, Coord::new(1, 0)), 2);
    assert_eq!(cluster_size_at(&tiles, Tile::EXPOSED_SHIP, Coord::new(1, 0)), 3);
    assert_eq!(cluster_size_at(&tiles, Tile::REVEALED_SHIP, Coord::new(0, 0)), 1);
    assert_eq!(cluster_size_at(&tiles, Tile::HIT_SHIP, Coord::new(3, 0)), 0);
    assert_eq!(cluster_size_at(&tiles, Tile::HIT_SHIP, Coord::new(9, 9)), 0);
}

#[test]
fn three_long_ship_on_ten_by_ten() {
    let tiles = grid_with(
        10,
        &[
            (4, 6, Tile::HIT_SHIP),
            (5, 6, Tile::HIT_SHIP),
            (6, 6, Tile::HIT_SHIP),
            (5, 5, Tile::REVEALED_WATER),
            (0, 9, Tile::HIT_SHIP),
        ],
    );
    let sizes = cluster_sizes(&tiles, Tile::HIT_SHIP);
    assert_eq!(sizes[Coord::new(4, 6)], 3);
    assert_eq!(sizes[Coord::new(6, 6)], 3);
    assert_eq!(sizes[Coord::new(0, 9)], 1);
    assert_eq!(sizes[Coord::new(5, 5)], 0);
    assert_eq!(sizes.iter().filter(|&&v| v > 0).count(), 4);
}
