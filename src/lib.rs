#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod battle;
mod common;
mod config;
mod grid;
mod ship;
mod strategy;
mod tile;

pub mod candidates;
pub mod cluster;
pub mod hunter;
pub mod placement;
pub mod prelude;
pub mod probability;
pub mod propagate;
pub mod query;

#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod sim;
#[cfg(feature = "std")]
pub mod ui;

pub use battle::*;
pub use candidates::{potential_positions, CandidateSet};
pub use cluster::{cluster_size_at, cluster_sizes};
pub use common::*;
pub use config::*;
pub use grid::*;
pub use hunter::ProbabilityHunter;
pub use placement::{position_ships_random, position_ships_with_retries};
pub use probability::ProbabilityMap;
pub use propagate::{PropagationStats, Propagator};
pub use ship::*;
pub use strategy::*;
pub use tile::Tile;

#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use sim::{play_solo, Battlefield, SimReport, Strike};
