//! Random fleet placement.
//!
//! Ships are placed greedily in roster order. There is no backtracking: if a
//! ship finds no room the whole attempt fails and the caller retries.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::EngineError;
use crate::grid::{Coord, Grid};
use crate::ship::{Ship, ShipPosition};

/// Place every ship once without overlapping each other or `stones`.
///
/// Each ship starts at a random pivot and scans all `size²` offsets in raster
/// order from there (wrapping), trying the unflipped then the flipped shape
/// at each offset. The first fit wins.
pub fn position_ships_random<R: Rng + ?Sized>(
    rng: &mut R,
    map_size: usize,
    ships: &[Ship],
    stones: &[Coord],
) -> Result<Vec<ShipPosition>, EngineError> {
    if ships.is_empty() {
        return Err(EngineError::EmptyFleet);
    }
    if map_size == 0 {
        return Err(EngineError::UnableToPlaceShip { ship: 0 });
    }

    let mut occupied = Grid::filled(map_size, false);
    for &stone in stones {
        occupied.set(stone, true);
    }

    let size = map_size as i32;
    let mut result = Vec::with_capacity(ships.len());
    for (index, ship) in ships.iter().enumerate() {
        let basic = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        let found = (0..size)
            .flat_map(|j| (0..size).map(move |i| (i, j)))
            .flat_map(|(i, j)| {
                let pivot = Coord::new((basic.x + i) % size, (basic.y + j) % size);
                [
                    ShipPosition { pivot, flip: false },
                    ShipPosition { pivot, flip: true },
                ]
            })
            .find(|&pos| position_available(ship, pos, map_size, &occupied));

        match found {
            Some(pos) => {
                for c in ship.cells(pos) {
                    occupied.set(c, true);
                }
                result.push(pos);
            }
            None => {
                log::debug!("no room left for ship {} ({})", index, ship.name());
                return Err(EngineError::UnableToPlaceShip { ship: index });
            }
        }
    }
    Ok(result)
}

/// Retry [`position_ships_random`] up to `attempts` times.
pub fn position_ships_with_retries<R: Rng + ?Sized>(
    rng: &mut R,
    map_size: usize,
    ships: &[Ship],
    stones: &[Coord],
    attempts: usize,
) -> Result<Vec<ShipPosition>, EngineError> {
    let mut last = EngineError::EmptyFleet;
    for attempt in 0..attempts.max(1) {
        match position_ships_random(rng, map_size, ships, stones) {
            Ok(positions) => return Ok(positions),
            Err(EngineError::UnableToPlaceShip { ship }) => {
                log::trace!("placement attempt {} failed at ship {}", attempt, ship);
                last = EngineError::UnableToPlaceShip { ship };
            }
            Err(e) => return Err(e),
        }
    }
    log::warn!("random placement gave up after {} attempts", attempts.max(1));
    Err(last)
}

fn position_available(ship: &Ship, pos: ShipPosition, map_size: usize, occupied: &Grid<bool>) -> bool {
    ship.fits(pos, map_size) && ship.cells(pos).all(|c| occupied.get(c) == Some(false))
}
