//! Stateless scans used by strategies to pick a target.
//!
//! Ties are broken by a coin flip each time an equal value is met during the
//! scan, so later ties are favoured over a uniform pick. Strategies rely on
//! this exact behaviour.

use alloc::vec::Vec;
use rand::Rng;

use crate::battle::{BattleInfo, SonarPosition};
use crate::candidates::CandidateSet;
use crate::grid::{Coord, Grid};
use crate::probability::ProbabilityMap;
use crate::ship::{AbilityDirection, Attack, Ship, ShipPosition};
use crate::tile::Tile;

/// Ship picked by [`ship_with_fewest_candidates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FewestCandidates {
    pub ship: usize,
    /// True when the pick came from the exposed lists.
    pub exposed: bool,
}

/// Best aim found by [`most_valuable_target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimedTarget {
    pub position: Coord,
    pub direction: AbilityDirection,
    /// Strikes that would land on the ship.
    pub value: usize,
}

/// Index of the candidate in `positions` covering the most exposed tiles.
///
/// A single candidate is returned as is. Otherwise the scan starts from zero
/// and a tie replaces the best with probability one half, so `None` is
/// possible when nothing is exposed and every coin flip fails.
pub fn most_exposed_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    ship: &Ship,
    tiles: &Grid<Tile>,
    positions: &[ShipPosition],
) -> Option<usize> {
    match positions.len() {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }
    let mut max_exposure = 0;
    let mut best = None;
    for (i, &pos) in positions.iter().enumerate() {
        let exposure = tile_count_in_ship(tiles, Tile::EXPOSED_SHIP, ship, pos);
        if exposure > max_exposure || (exposure == max_exposure && rng.random_bool(0.5)) {
            max_exposure = exposure;
            best = Some(i);
        }
    }
    best
}

/// Alive ship with the fewest remaining candidates.
///
/// Minimum hidden and exposed counts are tracked separately, ignoring empty
/// lists. Any ship with exposed candidates wins over hidden-only ships.
pub fn ship_with_fewest_candidates(info: &BattleInfo, set: &CandidateSet) -> Option<FewestCandidates> {
    let mut best_exposed: Option<(usize, usize)> = None;
    let mut best_hidden: Option<(usize, usize)> = None;
    for i in 0..info.ship_count() {
        if !info.ships_alive[i] {
            continue;
        }
        let ex = set.exposed[i].len();
        if ex > 0 && best_exposed.map_or(true, |(_, n)| ex < n) {
            best_exposed = Some((i, ex));
        }
        let hd = set.hidden[i].len();
        if hd > 0 && best_hidden.map_or(true, |(_, n)| hd < n) {
            best_hidden = Some((i, hd));
        }
    }
    match (best_exposed, best_hidden) {
        (Some((ship, _)), _) => Some(FewestCandidates { ship, exposed: true }),
        (None, Some((ship, _))) => Some(FewestCandidates {
            ship,
            exposed: false,
        }),
        (None, None) => None,
    }
}

/// Hottest cell of layer `index`, with its value. Cells are scanned row by
/// row starting from a best value of zero.
pub fn max_probability_cell<R: Rng + ?Sized>(
    rng: &mut R,
    map: &ProbabilityMap,
    index: usize,
) -> (Coord, u32) {
    max_cell_where(rng, map.layer(index), |_| true)
}

/// Like [`max_probability_cell`] but only cells accepted by `keep` compete.
pub fn max_cell_where<R, F>(rng: &mut R, values: &Grid<u32>, keep: F) -> (Coord, u32)
where
    R: Rng + ?Sized,
    F: Fn(Coord) -> bool,
{
    let mut pos = Coord::default();
    let mut max = 0;
    for c in values.coords() {
        if !keep(c) {
            continue;
        }
        let v = values[c];
        if v > max || (v == max && rng.random_bool(0.5)) {
            max = v;
            pos = c;
        }
    }
    (pos, max)
}

/// First cell in raster order whose tile matches `filter`.
pub fn first_tile(tiles: &Grid<Tile>, filter: Tile) -> Option<Coord> {
    tiles.coords().find(|&c| tiles[c].matches(filter))
}

/// Returns true if any tile on the map matches `filter`.
pub fn contains_tile(tiles: &Grid<Tile>, filter: Tile) -> bool {
    first_tile(tiles, filter).is_some()
}

/// First body cell of `ship` at `pos` whose tile matches `filter`.
pub fn first_tile_in_ship(tiles: &Grid<Tile>, filter: Tile, ship: &Ship, pos: ShipPosition) -> Option<Coord> {
    ship.cells(pos)
        .find(|&c| matches!(tiles.get(c), Some(t) if t.matches(filter)))
}

/// Returns true if any body cell of `ship` at `pos` matches `filter`.
pub fn ship_contains_tile(tiles: &Grid<Tile>, filter: Tile, ship: &Ship, pos: ShipPosition) -> bool {
    first_tile_in_ship(tiles, filter, ship, pos).is_some()
}

/// Body cells of `ship` at `pos` whose tile matches `filter`.
pub fn tile_count_in_ship(tiles: &Grid<Tile>, filter: Tile, ship: &Ship, pos: ShipPosition) -> usize {
    ship.cells(pos)
        .filter(|&c| matches!(tiles.get(c), Some(t) if t.matches(filter)))
        .count()
}

/// Tiles matching `filter` in the 3×3 window around `center`, clamped to
/// the map. The center itself counts.
pub fn count_neighbor_tiles(tiles: &Grid<Tile>, center: Coord, filter: Tile) -> usize {
    let last = tiles.size() as i32 - 1;
    let (l, r) = ((center.x - 1).max(0), (center.x + 1).min(last));
    let (d, u) = ((center.y - 1).max(0), (center.y + 1).min(last));
    let mut result = 0;
    for y in d..=u {
        for x in l..=r {
            if matches!(tiles.get(Coord::new(x, y)), Some(t) if t.matches(filter)) {
                result += 1;
            }
        }
    }
    result
}

/// Mean position of every tile matching `filter`.
pub fn average_position(tiles: &Grid<Tile>, filter: Tile) -> Option<(f32, f32)> {
    let (mut sx, mut sy, mut count) = (0.0f32, 0.0f32, 0.0f32);
    for c in tiles.coords().filter(|&c| tiles[c].matches(filter)) {
        sx += c.x as f32;
        sy += c.y as f32;
        count += 1.0;
    }
    if count > 0.0 {
        Some((sx / count, sy / count))
    } else {
        None
    }
}

/// Matching tile closest to `from` with its squared distance. The first
/// cell in raster order wins among equals.
pub fn nearest_position(tiles: &Grid<Tile>, from: Coord, filter: Tile) -> Option<(Coord, i32)> {
    let mut best: Option<(Coord, i32)> = None;
    for c in tiles.coords().filter(|&c| tiles[c].matches(filter)) {
        let d = c.distance_sq(from);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((c, d));
        }
    }
    best
}

/// Aim for an ability that lands the most aimed strikes on `ship` placed at
/// `pos`, counting only cells that are unknown water or revealed ship.
///
/// Every cell and each of the four directions is tried; strictly better aims
/// replace earlier ones. `None` when no aim lands anything.
pub fn most_valuable_target(
    tiles: &Grid<Tile>,
    ship: &Ship,
    attacks: &[Attack],
    pos: ShipPosition,
) -> Option<AimedTarget> {
    let body: Vec<Coord> = ship.cells(pos).collect();
    let filter = Tile::ATTACKABLE;
    let mut best: Option<AimedTarget> = None;
    for origin in tiles.coords() {
        for direction in AbilityDirection::ALL {
            let value = attacks
                .iter()
                .filter(|a| a.is_aimed())
                .map(|a| a.position(origin, direction))
                .filter(|c| body.contains(c))
                .filter(|&c| matches!(tiles.get(c), Some(t) if t.matches(filter)))
                .count();
            if value > best.map_or(0, |b| b.value) {
                best = Some(AimedTarget {
                    position: origin,
                    direction,
                    value,
                });
            }
        }
    }
    best
}

/// In-bounds cells exactly `radius` Manhattan steps from the sonar center.
pub fn sonar_ring(map_size: usize, sonar: &SonarPosition) -> Vec<Coord> {
    let mut ring = Vec::new();
    let r = i64::from(sonar.radius);
    if r < 0 || map_size == 0 {
        return ring;
    }
    let last = map_size as i64 - 1;
    let (cx, cy) = (i64::from(sonar.center.x), i64::from(sonar.center.y));
    let top = (cy - r).max(0);
    let bottom = (cy + r).min(last);
    for y in top..=bottom {
        let rest = r - (y - cy).abs();
        let left = cx - rest;
        let right = cx + rest;
        if (0..=last).contains(&left) {
            ring.push(Coord::new(left as i32, y as i32));
        }
        if rest > 0 && (0..=last).contains(&right) {
            ring.push(Coord::new(right as i32, y as i32));
        }
    }
    ring
}
