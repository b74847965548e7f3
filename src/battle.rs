//! Per-side battle snapshot handed to the engine every turn.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::EngineError;
use crate::grid::{Coord, Grid};
use crate::ship::{Ship, ShipPosition};
use crate::tile::Tile;

/// A sonar reading: at least one ship cell lies exactly `radius` steps
/// (Manhattan) away from `center`, and none closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SonarPosition {
    pub center: Coord,
    pub radius: i32,
}

impl SonarPosition {
    pub const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            center: Coord::new(x, y),
            radius,
        }
    }
}

/// Read-only view of one side: map, fleet and per-ship status.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleInfo {
    pub map_size: usize,
    pub tiles: Grid<Tile>,
    pub ships: Vec<Ship>,
    pub cooldowns: Vec<i32>,
    pub ships_alive: Vec<bool>,
    /// Placements fully deduced or revealed. Such ships are skipped by
    /// enumeration and propagation.
    pub known_positions: Vec<Option<ShipPosition>>,
    pub sonars: Vec<SonarPosition>,
}

impl BattleInfo {
    /// Fresh snapshot: unknown water everywhere, every ship alive and ready.
    pub fn new(map_size: usize, ships: Vec<Ship>) -> Self {
        let count = ships.len();
        Self {
            map_size,
            tiles: Grid::filled(map_size, Tile::GENERAL_WATER),
            cooldowns: ships.iter().map(|s| s.cooldown() as i32).collect(),
            ships,
            ships_alive: vec![true; count],
            known_positions: vec![None; count],
            sonars: Vec::new(),
        }
    }

    /// Mark `stones` as unrevealed stone tiles. Out-of-range stones are ignored.
    pub fn with_stones(mut self, stones: &[Coord]) -> Self {
        for &stone in stones {
            self.tiles.set(stone, Tile::GENERAL_STONE);
        }
        self
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn alive_ship_count(&self) -> usize {
        self.ships_alive.iter().filter(|&&alive| alive).count()
    }

    /// Tile at `coord`, `None` when out of bounds.
    pub fn tile(&self, coord: Coord) -> Option<Tile> {
        self.tiles.get(coord)
    }

    /// True if ship `index` still needs to be located.
    pub fn is_searchable(&self, index: usize) -> bool {
        self.ships_alive[index] && self.known_positions[index].is_none()
    }

    /// Check that every per-ship array matches the roster and the grid
    /// matches the map size.
    pub fn validate(&self) -> Result<(), EngineError> {
        let expected = self.ships.len();
        let arrays = [
            ("cooldown", self.cooldowns.len()),
            ("alive", self.ships_alive.len()),
            ("known position", self.known_positions.len()),
        ];
        for (what, found) in arrays {
            if found != expected {
                return Err(EngineError::LengthMismatch {
                    what,
                    expected,
                    found,
                });
            }
        }
        if self.tiles.size() != self.map_size {
            return Err(EngineError::GridSizeMismatch {
                expected: self.map_size,
                found: self.tiles.size(),
            });
        }
        Ok(())
    }

    /// Cells claimed by ships whose placement is known.
    pub fn claimed_cells(&self) -> Grid<bool> {
        let mut claimed = Grid::filled(self.map_size, false);
        for (ship, pos) in self.ships.iter().zip(self.known_positions.iter()) {
            if let Some(pos) = pos {
                for c in ship.cells(*pos) {
                    claimed.set(c, true);
                }
            }
        }
        claimed
    }
}
