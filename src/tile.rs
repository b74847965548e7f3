//! Cell state flags for one side of the battle.
//!
//! A grid cell always holds exactly one flag. Filters are built by OR-ing
//! flags together and are tested with "any flag present" semantics, so one
//! filter can match several cell states at once.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of tile state flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(u8);

impl Tile {
    /// Empty set. Never matches anything.
    pub const NONE: Tile = Tile(0);
    /// Water that has not been looked at yet.
    pub const GENERAL_WATER: Tile = Tile(1 << 0);
    /// Stone that has not been looked at yet. Stones are public map data.
    pub const GENERAL_STONE: Tile = Tile(1 << 1);
    /// Water revealed by an attack or a sonar.
    pub const REVEALED_WATER: Tile = Tile(1 << 2);
    /// Stone revealed by an attack.
    pub const REVEALED_STONE: Tile = Tile(1 << 3);
    /// Ship body revealed but not damaged.
    pub const REVEALED_SHIP: Tile = Tile(1 << 4);
    /// Ship body that has been hit.
    pub const HIT_SHIP: Tile = Tile(1 << 5);

    /// Every water state.
    pub const ALL_WATER: Tile = Tile(Self::GENERAL_WATER.0 | Self::REVEALED_WATER.0);
    /// Every stone state.
    pub const ALL_STONE: Tile = Tile(Self::GENERAL_STONE.0 | Self::REVEALED_STONE.0);
    /// Tiles known to hold a ship.
    pub const EXPOSED_SHIP: Tile = Tile(Self::REVEALED_SHIP.0 | Self::HIT_SHIP.0);
    /// Tiles a plain attack can still do something useful against.
    pub const ATTACKABLE: Tile = Tile(Self::GENERAL_WATER.0 | Self::REVEALED_SHIP.0);
    /// Tiles a ship can occupy given what has been observed.
    pub const SHIP_ALLOWED: Tile =
        Tile(Self::GENERAL_WATER.0 | Self::REVEALED_SHIP.0 | Self::HIT_SHIP.0);

    /// Raw bits of the set.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Rebuild a set from raw bits, dropping unknown ones.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Tile(bits & 0b0011_1111)
    }

    /// Returns true if no flag is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if any flag of `self` is also present in `filter`.
    #[inline]
    pub const fn matches(self, filter: Tile) -> bool {
        self.0 & filter.0 != 0
    }

    /// Returns true if every flag of `other` is present in `self`.
    #[inline]
    pub const fn contains(self, other: Tile) -> bool {
        self.0 & other.0 == other.0
    }

    /// True for revealed or hit ship bodies.
    #[inline]
    pub const fn is_exposed_ship(self) -> bool {
        self.matches(Self::EXPOSED_SHIP)
    }
}

const NAMES: [(Tile, &str); 6] = [
    (Tile::GENERAL_WATER, "GeneralWater"),
    (Tile::GENERAL_STONE, "GeneralStone"),
    (Tile::REVEALED_WATER, "RevealedWater"),
    (Tile::REVEALED_STONE, "RevealedStone"),
    (Tile::REVEALED_SHIP, "RevealedShip"),
    (Tile::HIT_SHIP, "HitShip"),
];

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Tile(None)");
        }
        write!(f, "Tile(")?;
        let mut first = true;
        for (flag, name) in NAMES.iter() {
            if self.contains(*flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        write!(f, ")")
    }
}

impl fmt::Display for Tile {
    /// Single character used by the terminal renderers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match *self {
            Tile::GENERAL_WATER => '.',
            Tile::GENERAL_STONE => '#',
            Tile::REVEALED_WATER => 'o',
            Tile::REVEALED_STONE => '@',
            Tile::REVEALED_SHIP => 'S',
            Tile::HIT_SHIP => 'X',
            _ => '?',
        };
        write!(f, "{}", ch)
    }
}

impl BitOr for Tile {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Tile(self.0 | rhs.0)
    }
}

impl BitAnd for Tile {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Tile(self.0 & rhs.0)
    }
}

/// Complement within the known flags.
impl Not for Tile {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Tile::from_bits_truncate(!self.0)
    }
}

impl BitOrAssign for Tile {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAndAssign for Tile {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}
