//! Fixpoint elimination of candidate placements.
//!
//! Two rules run once per pass, and passes repeat until one removes nothing:
//!
//! 1. Singleton: a ship with exactly one candidate owns those cells. Its id is
//!    stamped into the forced-owner grid and every other ship loses the
//!    candidates that overlap a cell stamped with a different id.
//! 2. Unique exposed owner: when exactly one ship has exposed candidates
//!    covering an exposed cell, that ship must cover the cell, so all of its
//!    candidates that miss the cell are dropped.
//!
//! Candidate counts never grow, so the loop terminates.

use alloc::vec::Vec;

use crate::battle::BattleInfo;
use crate::candidates::CandidateSet;
use crate::common::EngineError;
use crate::grid::{Coord, Grid};
use crate::ship::{Ship, ShipPosition};
use crate::tile::Tile;

/// Outcome of a propagation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropagationStats {
    /// Full passes run, including the last one that removed nothing.
    pub passes: usize,
    /// Candidates removed by the singleton rule.
    pub removed_by_singleton: usize,
    /// Candidates removed by the unique exposed owner rule.
    pub removed_by_exposure: usize,
}

impl PropagationStats {
    pub fn removed(&self) -> usize {
        self.removed_by_singleton + self.removed_by_exposure
    }
}

/// Owns the scratch grids used during propagation.
///
/// Grids are resized lazily to the last map seen and cleared at the start of
/// every call. One call at a time per instance.
#[derive(Debug, Default)]
pub struct Propagator {
    /// 0 when unforced, otherwise the 1-based id of the owning ship.
    forced: Grid<u32>,
    /// Per ship, how many of its exposed candidates cover each exposed cell.
    coverage: Vec<Grid<u32>>,
}

impl Propagator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every candidate that cannot be part of a consistent assignment.
    /// The lists in `set` are pruned in place.
    pub fn propagate(
        &mut self,
        info: &BattleInfo,
        set: &mut CandidateSet,
    ) -> Result<PropagationStats, EngineError> {
        info.validate()?;
        let ship_count = info.ship_count();
        for (what, found) in [("hidden list", set.hidden.len()), ("exposed list", set.exposed.len())] {
            if found != ship_count {
                return Err(EngineError::LengthMismatch {
                    what,
                    expected: ship_count,
                    found,
                });
            }
        }

        self.reset(info.map_size, ship_count);
        for (index, ship) in info.ships.iter().enumerate() {
            for &pos in set.exposed[index].iter() {
                add_coverage(&mut self.coverage[index], &info.tiles, ship, pos);
            }
        }

        let mut stats = PropagationStats::default();
        loop {
            stats.passes += 1;
            let singleton = self.singleton_pass(info, set);
            let exposure = self.exposure_pass(info, set);
            stats.removed_by_singleton += singleton;
            stats.removed_by_exposure += exposure;
            log::trace!(
                "pass {}: {} singleton removals, {} exposure removals",
                stats.passes,
                singleton,
                exposure
            );
            if singleton + exposure == 0 {
                break;
            }
        }
        log::debug!(
            "propagation settled after {} passes, {} candidates removed",
            stats.passes,
            stats.removed()
        );
        Ok(stats)
    }

    fn reset(&mut self, map_size: usize, ship_count: usize) {
        self.forced.reset(map_size);
        self.coverage.truncate(ship_count);
        for grid in self.coverage.iter_mut() {
            grid.reset(map_size);
        }
        while self.coverage.len() < ship_count {
            self.coverage.push(Grid::zeroed(map_size));
        }
    }

    fn singleton_pass(&mut self, info: &BattleInfo, set: &mut CandidateSet) -> usize {
        let mut removed = 0;
        for index in 0..info.ship_count() {
            let pos = match set.singleton(index) {
                Some(pos) => pos,
                None => continue,
            };
            let id = index as u32 + 1;
            for c in info.ships[index].cells(pos) {
                self.forced.set(c, id);
            }
            for other in 0..info.ship_count() {
                if other == index {
                    continue;
                }
                removed += remove_forced_conflicts(
                    &self.forced,
                    &mut self.coverage[other],
                    &info.tiles,
                    &info.ships[other],
                    other as u32 + 1,
                    &mut set.hidden[other],
                    &mut set.exposed[other],
                );
            }
        }
        removed
    }

    fn exposure_pass(&mut self, info: &BattleInfo, set: &mut CandidateSet) -> usize {
        let mut removed = 0;
        for c in info.tiles.coords() {
            let owner = match sole_exposed_owner(&self.coverage, c) {
                Some(owner) => owner,
                None => continue,
            };
            let ship = &info.ships[owner];
            let before = set.hidden[owner].len();
            set.hidden[owner].retain(|&pos| ship.contains(c, pos));
            removed += before - set.hidden[owner].len();
            removed += retain_exposed(
                &mut self.coverage[owner],
                &info.tiles,
                ship,
                &mut set.exposed[owner],
                |pos| ship.contains(c, pos),
            );
        }
        removed
    }
}

/// Drop candidates of the ship with 1-based `id` that overlap a cell forced
/// to a different ship.
fn remove_forced_conflicts(
    forced: &Grid<u32>,
    coverage: &mut Grid<u32>,
    tiles: &Grid<Tile>,
    ship: &Ship,
    id: u32,
    hidden: &mut Vec<ShipPosition>,
    exposed: &mut Vec<ShipPosition>,
) -> usize {
    let fits = |pos: ShipPosition| {
        ship.cells(pos)
            .all(|c| forced.get(c).map_or(true, |owner| owner == 0 || owner == id))
    };
    let before = hidden.len();
    hidden.retain(|&pos| fits(pos));
    let removed = before - hidden.len();
    removed + retain_exposed(coverage, tiles, ship, exposed, fits)
}

/// Keep exposed candidates matching `keep`, releasing the coverage of the
/// dropped ones. Returns the number dropped.
fn retain_exposed<F>(
    coverage: &mut Grid<u32>,
    tiles: &Grid<Tile>,
    ship: &Ship,
    exposed: &mut Vec<ShipPosition>,
    keep: F,
) -> usize
where
    F: Fn(ShipPosition) -> bool,
{
    let before = exposed.len();
    exposed.retain(|&pos| {
        if keep(pos) {
            true
        } else {
            remove_coverage(coverage, tiles, ship, pos);
            false
        }
    });
    before - exposed.len()
}

fn add_coverage(coverage: &mut Grid<u32>, tiles: &Grid<Tile>, ship: &Ship, pos: ShipPosition) {
    for c in ship.cells(pos) {
        if matches!(tiles.get(c), Some(t) if t.is_exposed_ship()) {
            coverage[c] += 1;
        }
    }
}

fn remove_coverage(coverage: &mut Grid<u32>, tiles: &Grid<Tile>, ship: &Ship, pos: ShipPosition) {
    for c in ship.cells(pos) {
        if matches!(tiles.get(c), Some(t) if t.is_exposed_ship()) {
            coverage[c] -= 1;
        }
    }
}

/// The only ship with positive coverage at `c`, if there is exactly one.
fn sole_exposed_owner(coverage: &[Grid<u32>], c: Coord) -> Option<usize> {
    let mut owner = None;
    for (index, grid) in coverage.iter().enumerate() {
        if grid[c] > 0 {
            if owner.is_some() {
                return None;
            }
            owner = Some(index);
        }
    }
    owner
}
