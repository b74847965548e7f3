//! Errors shared by every engine operation.

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No ships were supplied.
    EmptyFleet,
    /// Ship body definition contains no cells.
    InvalidShape,
    /// A per-ship array does not have one entry per ship.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// Tile grid size differs from the declared map size.
    GridSizeMismatch { expected: usize, found: usize },
    /// Ship index is out of range.
    InvalidShipIndex(usize),
    /// Random placement could not fit the given ship.
    UnableToPlaceShip { ship: usize },
    /// No cell is worth attacking.
    NoTarget,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::EmptyFleet => write!(f, "Fleet is empty"),
            EngineError::InvalidShape => write!(f, "Ship body has no cells"),
            EngineError::LengthMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "Expected {} {} entries (one per ship), found {}",
                expected, what, found
            ),
            EngineError::GridSizeMismatch { expected, found } => {
                write!(f, "Tile grid is {found}x{found}, expected {expected}x{expected}")
            }
            EngineError::InvalidShipIndex(i) => write!(f, "Ship index {} is out of range", i),
            EngineError::UnableToPlaceShip { ship } => write!(f, "Unable to place ship {}", ship),
            EngineError::NoTarget => write!(f, "No target available"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
