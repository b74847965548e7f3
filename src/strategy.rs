//! The contract between the turn controller and an attack strategy.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use rand::rngs::SmallRng;

use crate::battle::BattleInfo;
use crate::common::EngineError;
use crate::config::{FLEET_ID, PLACEMENT_ATTEMPTS};
use crate::grid::Coord;
use crate::placement;
use crate::ship::{AbilityDirection, Ship, ShipPosition};

/// A strategy's answer for one turn.
///
/// Only an empty `error_message` means success; every other field is
/// meaningful only then. A negative `ability_index` is a plain attack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyseResult {
    pub target: Coord,
    pub ability_index: i32,
    pub ability_direction: AbilityDirection,
    pub error_message: String,
}

impl AnalyseResult {
    /// Successful "do nothing" answer.
    pub fn none() -> Self {
        Self {
            target: Coord::default(),
            ability_index: -1,
            ability_direction: AbilityDirection::default(),
            error_message: String::new(),
        }
    }

    /// The strategy did not run.
    pub fn not_performed() -> Self {
        Self::failed("Task not performed")
    }

    pub fn failed(message: &str) -> Self {
        Self {
            error_message: message.to_string(),
            ..Self::none()
        }
    }

    /// Plain attack at `target`.
    pub fn attack(target: Coord) -> Self {
        Self {
            target,
            ..Self::none()
        }
    }

    /// Use the ability of own ship `index` aimed at `target`.
    pub fn ability(target: Coord, index: usize, direction: AbilityDirection) -> Self {
        Self {
            target,
            ability_index: index as i32,
            ability_direction: direction,
            error_message: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_message.is_empty()
    }

    /// Own ship whose ability is used, if any.
    pub fn ability_slot(&self) -> Option<usize> {
        usize::try_from(self.ability_index).ok()
    }
}

impl From<EngineError> for AnalyseResult {
    fn from(err: EngineError) -> Self {
        AnalyseResult::failed(&err.to_string())
    }
}

impl fmt::Display for AnalyseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(
                f,
                "pos.x:{}, pos.y:{} abi:{}, dir:{:?}",
                self.target.x, self.target.y, self.ability_index, self.ability_direction
            )
        } else {
            write!(f, "ERROR: {}", self.error_message)
        }
    }
}

/// Interface implemented by every automated opponent.
///
/// The host owns the random source and passes it in, so seeding it is how a
/// battle is replayed.
pub trait Strategy {
    fn display_name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Names of the ships this strategy wants to sail with.
    fn fleet(&self) -> &[&'static str] {
        &FLEET_ID
    }

    /// Choose the next target. `using_ability` is set when the controller
    /// asks where to aim an ability that is already being used.
    fn analyse(
        &mut self,
        rng: &mut SmallRng,
        own: &BattleInfo,
        opponent: &BattleInfo,
        using_ability: Option<usize>,
    ) -> AnalyseResult;

    /// Hide the fleet. Defaults to random placement with retries.
    fn position_ships(
        &mut self,
        rng: &mut SmallRng,
        map_size: usize,
        ships: &[Ship],
        stones: &[Coord],
    ) -> Result<Vec<ShipPosition>, EngineError> {
        placement::position_ships_with_retries(rng, map_size, ships, stones, PLACEMENT_ATTEMPTS)
    }

    fn on_battle_start(&mut self, _own: &BattleInfo, _opponent: &BattleInfo) {}

    fn on_battle_end(&mut self, _own: &BattleInfo, _opponent: &BattleInfo) {}
}
