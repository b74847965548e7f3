//! Ship shapes, placements and special attacks.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::EngineError;
use crate::grid::{Coord, Grid};
use crate::tile::Tile;

/// One placement of a ship shape: a pivot plus a flip flag.
///
/// Flipping swaps the two axes of every body offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipPosition {
    pub pivot: Coord,
    pub flip: bool,
}

impl ShipPosition {
    pub const fn new(x: i32, y: i32, flip: bool) -> Self {
        Self {
            pivot: Coord::new(x, y),
            flip,
        }
    }

    /// Board coordinate of the body offset `offset`.
    #[inline]
    pub fn cell(&self, offset: Coord) -> Coord {
        if self.flip {
            self.pivot + offset.swapped()
        } else {
            self.pivot + offset
        }
    }
}

impl fmt::Display for ShipPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pivot, if self.flip { " flipped" } else { "" })
    }
}

/// Direction an ability is aimed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl AbilityDirection {
    pub const ALL: [AbilityDirection; 4] = [
        AbilityDirection::Up,
        AbilityDirection::Down,
        AbilityDirection::Left,
        AbilityDirection::Right,
    ];

    /// Rotate a local attack offset into board space.
    pub fn rotate(self, offset: Coord) -> Coord {
        match self {
            AbilityDirection::Up => offset,
            AbilityDirection::Down => Coord::new(-offset.x, -offset.y),
            AbilityDirection::Left => Coord::new(-offset.y, offset.x),
            AbilityDirection::Right => Coord::new(offset.y, -offset.x),
        }
    }
}

/// When an attack fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackTrigger {
    /// Lands relative to the cell the player picks.
    #[default]
    Picked,
    /// Lands on a random tile when the ability is used.
    Random,
    /// Lands on a random tile every turn without being used.
    PassiveRandom,
}

/// A single strike of a ship's special ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub offset: Coord,
    pub trigger: AttackTrigger,
}

impl Attack {
    pub const fn picked(x: i32, y: i32) -> Self {
        Self {
            offset: Coord::new(x, y),
            trigger: AttackTrigger::Picked,
        }
    }

    /// Cell hit when aimed from `origin` in `direction`.
    pub fn position(&self, origin: Coord, direction: AbilityDirection) -> Coord {
        origin + direction.rotate(self.offset)
    }

    /// Returns true if the strike lands where the player aims.
    pub fn is_aimed(&self) -> bool {
        matches!(self.trigger, AttackTrigger::Picked)
    }
}

/// A ship shape: body offsets relative to a pivot plus gameplay data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    name: String,
    body: Vec<Coord>,
    symmetry: bool,
    min: Coord,
    max: Coord,
    terminate_hp: usize,
    cooldown: u32,
    attacks: Vec<Attack>,
}

impl Ship {
    /// Create a ship from its body offsets.
    pub fn new(name: &str, body: Vec<Coord>) -> Result<Self, EngineError> {
        let first = *body.first().ok_or(EngineError::InvalidShape)?;
        let (mut min, mut max) = (first, first);
        for v in body.iter() {
            min = Coord::new(min.x.min(v.x), min.y.min(v.y));
            max = Coord::new(max.x.max(v.x), max.y.max(v.y));
        }
        let symmetry = body.iter().all(|v| body.contains(&v.swapped()));
        Ok(Self {
            name: String::from(name),
            body,
            symmetry,
            min,
            max,
            terminate_hp: 0,
            cooldown: 1,
            attacks: Vec::new(),
        })
    }

    /// Parse a compact body string: `'1'` is a body cell, `'0'` skips a
    /// column and `','` starts the next row.
    pub fn from_body(name: &str, body: &str) -> Result<Self, EngineError> {
        let mut cells = Vec::new();
        let (mut x, mut y) = (0, 0);
        for ch in body.chars() {
            match ch {
                '0' => x += 1,
                '1' => {
                    cells.push(Coord::new(x, y));
                    x += 1;
                }
                ',' => {
                    y += 1;
                    x = 0;
                }
                _ => {}
            }
        }
        Self::new(name, cells)
    }

    /// Number of intact cells a ship may keep while already counting as dead.
    pub fn with_terminate_hp(mut self, hp: usize) -> Self {
        self.terminate_hp = hp;
        self
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_attacks(mut self, attacks: Vec<Attack>) -> Self {
        self.attacks = attacks;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Body offsets in definition order.
    pub fn body(&self) -> &[Coord] {
        &self.body
    }

    /// Number of body cells.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True when flipping yields the same occupied cell set.
    pub fn symmetry(&self) -> bool {
        self.symmetry
    }

    pub fn terminate_hp(&self) -> usize {
        self.terminate_hp
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    /// Bounding box of the body offsets under `flip`.
    pub fn bounds(&self, flip: bool) -> (Coord, Coord) {
        if flip {
            (self.min.swapped(), self.max.swapped())
        } else {
            (self.min, self.max)
        }
    }

    /// Board cells covered at `pos`.
    pub fn cells(&self, pos: ShipPosition) -> impl Iterator<Item = Coord> + '_ {
        self.body.iter().map(move |&v| pos.cell(v))
    }

    /// Returns true if the ship placed at `pos` covers `coord`.
    pub fn contains(&self, coord: Coord, pos: ShipPosition) -> bool {
        self.cells(pos).any(|c| c == coord)
    }

    /// Returns true if the whole body fits in a `size × size` map.
    pub fn fits(&self, pos: ShipPosition, size: usize) -> bool {
        let (min, max) = self.bounds(pos.flip);
        let size = size as i32;
        pos.pivot.x >= -min.x
            && pos.pivot.x <= size - max.x - 1
            && pos.pivot.y >= -min.y
            && pos.pivot.y <= size - max.y - 1
    }

    /// A ship stays alive while more than `terminate_hp` of its in-bounds
    /// body cells are not hit.
    pub fn is_alive_at(&self, pos: ShipPosition, tiles: &Grid<Tile>) -> bool {
        let intact = self
            .cells(pos)
            .filter(|&c| matches!(tiles.get(c), Some(t) if t != Tile::HIT_SHIP))
            .count();
        intact > self.terminate_hp
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cells)", self.name, self.body.len())
    }
}
