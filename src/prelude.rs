//! Commonly used types and utilities for ease of import.

pub use crate::{
    default_fleet, AbilityDirection, AnalyseResult, BattleInfo, CandidateSet, Coord, EngineError, Grid,
    ProbabilityHunter, ProbabilityMap, Propagator, Ship, ShipPosition, SonarPosition, Strategy, Tile,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, play_solo, Battlefield, SimReport};
