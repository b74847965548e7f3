//! Sizes of 8-connected clusters of exposed ship tiles.

use alloc::collections::VecDeque;

use crate::grid::{Coord, Grid};
use crate::tile::Tile;

/// For every cell, the number of members of its cluster of revealed or hit
/// ship tiles that also match `filter`. Cells that are not exposed ship
/// tiles score zero.
///
/// Each exposed cell runs its own flood fill.
pub fn cluster_sizes(tiles: &Grid<Tile>, filter: Tile) -> Grid<u32> {
    let mut values = Grid::zeroed(tiles.size());
    let mut visited = Grid::filled(tiles.size(), false);
    let mut queue = VecDeque::new();
    for c in tiles.coords() {
        values[c] = cluster_value(tiles, filter, c, &mut visited, &mut queue);
    }
    values
}

/// Cluster size at a single cell, see [`cluster_sizes`].
pub fn cluster_size_at(tiles: &Grid<Tile>, filter: Tile, coord: Coord) -> u32 {
    let mut visited = Grid::filled(tiles.size(), false);
    cluster_value(tiles, filter, coord, &mut visited, &mut VecDeque::new())
}

fn cluster_value(
    tiles: &Grid<Tile>,
    filter: Tile,
    seed: Coord,
    visited: &mut Grid<bool>,
    queue: &mut VecDeque<Coord>,
) -> u32 {
    match tiles.get(seed) {
        Some(t) if t.is_exposed_ship() => {}
        _ => return 0,
    }
    visited.fill(false);
    queue.clear();
    queue.push_back(seed);
    visited[seed] = true;

    let mut result = 0;
    while let Some(pos) = queue.pop_front() {
        if tiles[pos].matches(filter) {
            result += 1;
        }
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let next = Coord::new(pos.x + dx, pos.y + dy);
                match (tiles.get(next), visited.get(next)) {
                    (Some(t), Some(false)) if t.is_exposed_ship() => {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                    _ => {}
                }
            }
        }
    }
    result
}
