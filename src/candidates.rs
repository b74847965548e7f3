//! Enumeration of every placement still consistent with the observed grid.

use alloc::vec;
use alloc::vec::Vec;

use crate::battle::BattleInfo;
use crate::common::EngineError;
use crate::ship::{Ship, ShipPosition};
use crate::tile::Tile;

/// Per-ship candidate placements split by whether they touch an exposed tile.
///
/// `hidden[i]` only covers unknown water, `exposed[i]` covers at least one
/// revealed or hit ship tile. The two lists of a ship never share a placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    pub hidden: Vec<Vec<ShipPosition>>,
    pub exposed: Vec<Vec<ShipPosition>>,
}

impl CandidateSet {
    /// Enumerate hidden and exposed candidates for every searchable ship.
    pub fn enumerate(info: &BattleInfo) -> Result<Self, EngineError> {
        Ok(Self {
            hidden: potential_positions(info, Tile::GENERAL_WATER, Tile::GENERAL_WATER)?,
            exposed: potential_positions(info, Tile::EXPOSED_SHIP, Tile::SHIP_ALLOWED)?,
        })
    }

    pub fn ship_count(&self) -> usize {
        self.hidden.len()
    }

    /// Combined candidate count of ship `index`.
    pub fn total(&self, index: usize) -> usize {
        self.hidden[index].len() + self.exposed[index].len()
    }

    /// Every candidate of ship `index`, hidden first.
    pub fn all(&self, index: usize) -> impl Iterator<Item = &ShipPosition> + '_ {
        self.hidden[index].iter().chain(self.exposed[index].iter())
    }

    /// The placement of ship `index` if exactly one candidate remains.
    pub fn singleton(&self, index: usize) -> Option<ShipPosition> {
        if self.total(index) == 1 {
            self.all(index).next().copied()
        } else {
            None
        }
    }

    /// Sum of every ship's candidate count.
    pub fn len(&self) -> usize {
        (0..self.ship_count()).map(|i| self.total(i)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every candidate covering a cell of a ship whose placement is
    /// known. Returns the number dropped.
    ///
    /// Enumeration alone lets living ships explain the hit tiles of sunk
    /// ones; run this before propagating when that evidence must not count.
    pub fn drop_claimed(&mut self, info: &BattleInfo) -> usize {
        let claimed = info.claimed_cells();
        let mut removed = 0;
        for (index, ship) in info.ships.iter().enumerate().take(self.ship_count()) {
            let free = |pos: &ShipPosition| ship.cells(*pos).all(|c| claimed.get(c) != Some(true));
            for list in [&mut self.hidden[index], &mut self.exposed[index]] {
                let before = list.len();
                list.retain(free);
                removed += before - list.len();
            }
        }
        if removed > 0 {
            log::trace!("{} candidates overlap known ships", removed);
        }
        removed
    }
}

/// List every placement of each searchable ship such that all body cells are
/// in bounds and match `allowed`, at least one matches `relevant`, and fewer
/// body cells than the ship length are already hit.
///
/// Dead or known ships get an empty list. Scan order is row by row, the flipped
/// orientation before the unflipped one, and symmetric shapes skip flipping.
pub fn potential_positions(
    info: &BattleInfo,
    relevant: Tile,
    allowed: Tile,
) -> Result<Vec<Vec<ShipPosition>>, EngineError> {
    info.validate()?;
    let size = info.map_size as i32;
    let mut positions = vec![Vec::new(); info.ship_count()];

    for (index, list) in positions.iter_mut().enumerate() {
        if !info.is_searchable(index) {
            continue;
        }
        let ship = &info.ships[index];
        for y in 0..size {
            for x in 0..size {
                if !ship.symmetry() {
                    let pos = ShipPosition::new(x, y, true);
                    if available(info, ship, pos, relevant, allowed) {
                        list.push(pos);
                    }
                }
                let pos = ShipPosition::new(x, y, false);
                if available(info, ship, pos, relevant, allowed) {
                    list.push(pos);
                }
            }
        }
        log::trace!("ship {} has {} candidates", index, list.len());
    }
    Ok(positions)
}

fn available(
    info: &BattleInfo,
    ship: &Ship,
    pos: ShipPosition,
    relevant: Tile,
    allowed: Tile,
) -> bool {
    let mut hit_count = 0;
    let mut contains_target = false;
    for c in ship.cells(pos) {
        let tile = match info.tile(c) {
            Some(tile) => tile,
            None => return false,
        };
        if !tile.matches(allowed) {
            return false;
        }
        if tile.matches(relevant) {
            contains_target = true;
        }
        if tile == Tile::HIT_SHIP {
            hit_count += 1;
        }
    }
    contains_target && hit_count < ship.len()
}
