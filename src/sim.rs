#![cfg(feature = "std")]

//! Self-play harness: a hidden fleet, its observed snapshot, and a loop that
//! lets a strategy shoot at it. Used by the binaries and the tests.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::Serialize;

use crate::battle::BattleInfo;
use crate::common::EngineError;
use crate::config::PLACEMENT_ATTEMPTS;
use crate::grid::{Coord, Grid};
use crate::placement;
use crate::ship::{AbilityDirection, Ship, ShipPosition};
use crate::strategy::{AnalyseResult, Strategy};
use crate::tile::Tile;

/// Result of a single strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    Hit,
    Sunk(usize),
    Miss,
    Stone,
    /// Target was off the map or already resolved.
    Wasted,
}

/// One fleet hidden on a map, plus what the attacker has seen of it.
#[derive(Debug, Clone)]
pub struct Battlefield {
    positions: Vec<ShipPosition>,
    /// Ship index covering each cell, if any.
    occupant: Grid<Option<usize>>,
    observed: BattleInfo,
}

impl Battlefield {
    /// Hide `ships` at `positions`. The observed view starts with every
    /// stone visible and everything else unknown.
    pub fn new(
        map_size: usize,
        ships: Vec<Ship>,
        stones: &[Coord],
        positions: Vec<ShipPosition>,
    ) -> Result<Self, EngineError> {
        if positions.len() != ships.len() {
            return Err(EngineError::LengthMismatch {
                what: "ship position",
                expected: ships.len(),
                found: positions.len(),
            });
        }
        let mut occupant = Grid::filled(map_size, None);
        for (index, (ship, &pos)) in ships.iter().zip(positions.iter()).enumerate() {
            for c in ship.cells(pos) {
                if occupant.get(c) != Some(None) {
                    return Err(EngineError::UnableToPlaceShip { ship: index });
                }
                occupant[c] = Some(index);
            }
        }
        if let Some(ship) = stones.iter().find_map(|&s| occupant.get(s).flatten()) {
            return Err(EngineError::UnableToPlaceShip { ship });
        }
        let observed = BattleInfo::new(map_size, ships).with_stones(stones);
        Ok(Self {
            positions,
            occupant,
            observed,
        })
    }

    /// Hide `ships` at random.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        map_size: usize,
        ships: Vec<Ship>,
        stones: &[Coord],
    ) -> Result<Self, EngineError> {
        let positions =
            placement::position_ships_with_retries(rng, map_size, &ships, stones, PLACEMENT_ATTEMPTS)?;
        Self::new(map_size, ships, stones, positions)
    }

    /// What the attacker knows about this side.
    pub fn observed(&self) -> &BattleInfo {
        &self.observed
    }

    /// Where the ships really are.
    pub fn positions(&self) -> &[ShipPosition] {
        &self.positions
    }

    pub fn all_sunk(&self) -> bool {
        self.observed.alive_ship_count() == 0
    }

    /// Resolve a plain attack at `target`.
    pub fn strike(&mut self, target: Coord) -> Strike {
        let tile = match self.observed.tiles.get(target) {
            Some(tile) => tile,
            None => return Strike::Wasted,
        };
        if !tile.matches(Tile::ATTACKABLE | Tile::GENERAL_STONE) {
            return Strike::Wasted;
        }
        match self.occupant[target] {
            Some(index) => {
                self.observed.tiles[target] = Tile::HIT_SHIP;
                if self.refresh_alive(index) {
                    Strike::Sunk(index)
                } else {
                    Strike::Hit
                }
            }
            None if tile == Tile::GENERAL_STONE => {
                self.observed.tiles[target] = Tile::REVEALED_STONE;
                Strike::Stone
            }
            None => {
                self.observed.tiles[target] = Tile::REVEALED_WATER;
                Strike::Miss
            }
        }
    }

    /// Update the alive flag of ship `index`. Returns true if it just died.
    fn refresh_alive(&mut self, index: usize) -> bool {
        let ship = &self.observed.ships[index];
        let pos = self.positions[index];
        if !self.observed.ships_alive[index] || ship.is_alive_at(pos, &self.observed.tiles) {
            return false;
        }
        let cells: Vec<Coord> = ship.cells(pos).collect();
        for c in cells {
            self.observed.tiles.set(c, Tile::HIT_SHIP);
        }
        self.observed.ships_alive[index] = false;
        self.observed.known_positions[index] = Some(pos);
        log::debug!("ship {} sunk at {}", index, pos);
        true
    }
}

/// Counters collected by [`play_solo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimReport {
    pub turns: usize,
    pub hits: usize,
    pub misses: usize,
    pub wasted: usize,
    pub abilities_used: usize,
    pub sunk: Vec<usize>,
    pub finished: bool,
}

/// Let `strategy` shoot at `target` until every ship is dead or `max_turns`
/// is reached. `own` is the attacker's side; only its abilities and
/// cooldowns are used.
pub fn play_solo<S: Strategy + ?Sized>(
    strategy: &mut S,
    rng: &mut SmallRng,
    own: &mut BattleInfo,
    target: &mut Battlefield,
    max_turns: usize,
) -> Result<SimReport, EngineError> {
    let mut report = SimReport::default();
    strategy.on_battle_start(own, target.observed());
    while report.turns < max_turns && !target.all_sunk() {
        report.turns += 1;
        let decision = strategy.analyse(rng, own, target.observed(), None);
        if !decision.is_success() {
            log::warn!("turn {}: {}", report.turns, decision);
            strategy.on_battle_end(own, target.observed());
            return Err(EngineError::NoTarget);
        }
        for strike in resolve(own, target, &decision) {
            match strike {
                Strike::Hit => report.hits += 1,
                Strike::Sunk(index) => {
                    report.hits += 1;
                    report.sunk.push(index);
                }
                Strike::Miss | Strike::Stone => report.misses += 1,
                Strike::Wasted => report.wasted += 1,
            }
        }
        if decision.ability_slot().is_some() {
            report.abilities_used += 1;
        }
        tick_cooldowns(own);
    }
    report.finished = target.all_sunk();
    strategy.on_battle_end(own, target.observed());
    Ok(report)
}

fn resolve(own: &mut BattleInfo, target: &mut Battlefield, decision: &AnalyseResult) -> Vec<Strike> {
    let slot = match decision.ability_slot() {
        Some(slot) if slot < own.ship_count() && own.cooldowns[slot] <= 0 => slot,
        _ => return vec![target.strike(decision.target)],
    };
    let ship = &own.ships[slot];
    let strikes = aimed_cells(ship, decision.target, decision.ability_direction)
        .into_iter()
        .map(|c| target.strike(c))
        .collect();
    own.cooldowns[slot] = ship.cooldown() as i32 + 1;
    strikes
}

fn aimed_cells(ship: &Ship, origin: Coord, direction: AbilityDirection) -> Vec<Coord> {
    ship.attacks()
        .iter()
        .filter(|a| a.is_aimed())
        .map(|a| a.position(origin, direction))
        .collect()
}

fn tick_cooldowns(own: &mut BattleInfo) {
    for cd in own.cooldowns.iter_mut() {
        *cd = (*cd - 1).max(0);
    }
}
