//! Per-cell occupancy counts built from surviving candidates.

use alloc::vec::Vec;

use crate::battle::BattleInfo;
use crate::candidates::CandidateSet;
use crate::common::EngineError;
use crate::grid::{Coord, Grid};
use crate::ship::ShipPosition;

/// `ship_count + 1` layers of `size × size` counters. Layer `i` counts the
/// candidates of ship `i` covering each cell; the last layer is the sum over
/// all ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityMap {
    layers: Vec<Grid<u32>>,
    range: Option<(u32, u32)>,
}

impl ProbabilityMap {
    /// Count every hidden and exposed candidate in `set`.
    pub fn build(info: &BattleInfo, set: &CandidateSet) -> Result<Self, EngineError> {
        let mut map = Self::empty(info)?;
        for (what, found) in [("hidden list", set.hidden.len()), ("exposed list", set.exposed.len())] {
            if found != info.ship_count() {
                return Err(EngineError::LengthMismatch {
                    what,
                    expected: info.ship_count(),
                    found,
                });
            }
        }
        for (index, (hidden, exposed)) in set.hidden.iter().zip(set.exposed.iter()).enumerate() {
            map.add_all(info, index, hidden.iter().chain(exposed.iter()))?;
        }
        map.update_range();
        Ok(map)
    }

    /// Count one candidate list per ship.
    pub fn from_lists(info: &BattleInfo, positions: &[Vec<ShipPosition>]) -> Result<Self, EngineError> {
        let mut map = Self::empty(info)?;
        if positions.len() != info.ship_count() {
            return Err(EngineError::LengthMismatch {
                what: "candidate list",
                expected: info.ship_count(),
                found: positions.len(),
            });
        }
        for (index, list) in positions.iter().enumerate() {
            map.add_all(info, index, list.iter())?;
        }
        map.update_range();
        Ok(map)
    }

    fn empty(info: &BattleInfo) -> Result<Self, EngineError> {
        info.validate()?;
        let layers = (0..=info.ship_count())
            .map(|_| Grid::zeroed(info.map_size))
            .collect();
        Ok(Self { layers, range: None })
    }

    fn add_all<'a, I>(&mut self, info: &BattleInfo, index: usize, positions: I) -> Result<(), EngineError>
    where
        I: Iterator<Item = &'a ShipPosition>,
    {
        let ship = info.ships.get(index).ok_or(EngineError::InvalidShipIndex(index))?;
        let total = self.layers.len() - 1;
        for &pos in positions {
            for c in ship.cells(pos) {
                if let Some(cell) = self.layers[index].get_mut(c) {
                    *cell += 1;
                    self.layers[total][c] += 1;
                }
            }
        }
        Ok(())
    }

    fn update_range(&mut self) {
        let ships = self.ship_count();
        self.range = self.layers[..ships]
            .iter()
            .flat_map(|layer| layer.iter().copied())
            .filter(|&v| v > 0)
            .fold(None, |range, v| match range {
                Some((min, max)) => Some((v.min(min), v.max(max))),
                None => Some((v, v)),
            });
    }

    /// Number of ships covered; the total layer is at this index.
    pub fn ship_count(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn map_size(&self) -> usize {
        self.layers[0].size()
    }

    /// Counts of ship `index`, or the total when `index == ship_count()`.
    pub fn layer(&self, index: usize) -> &Grid<u32> {
        &self.layers[index]
    }

    /// Sum over every ship.
    pub fn total(&self) -> &Grid<u32> {
        &self.layers[self.ship_count()]
    }

    pub fn value(&self, index: usize, coord: Coord) -> u32 {
        self.layers[index].get(coord).unwrap_or(0)
    }

    /// Smallest and largest nonzero value over every ship layer. `None` when
    /// no candidate was counted.
    pub fn value_range(&self) -> Option<(u32, u32)> {
        self.range
    }

    /// Value divided by the largest ship-layer value. Ship layers land in
    /// `0.0..=1.0`.
    pub fn normalized(&self, index: usize, coord: Coord) -> f32 {
        match self.range {
            Some((_, max)) if max > 0 => self.value(index, coord) as f32 / max as f32,
            _ => 0.0,
        }
    }
}
