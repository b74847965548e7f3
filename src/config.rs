use alloc::vec;
use alloc::vec::Vec;

use crate::common::EngineError;
use crate::ship::{Attack, Ship};

/// Map size used when none is given.
pub const DEFAULT_MAP_SIZE: usize = 8;

/// How many whole-fleet attempts the random placer makes before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 64;

/// Names of the ships in the default fleet, in placement order.
pub const FLEET_ID: [&str; 4] = ["Sailboat", "SeaMonster", "Longboat", "MiniSub"];

/// Body strings of the default fleet, matching [`FLEET_ID`].
pub const FLEET_BODIES: [&str; 4] = ["111", "11,11", "1111", "1,1"];

/// Build the default fleet with its abilities.
pub fn default_fleet() -> Result<Vec<Ship>, EngineError> {
    Ok(vec![
        Ship::from_body(FLEET_ID[0], FLEET_BODIES[0])?
            .with_cooldown(2)
            .with_attacks(vec![Attack::picked(0, 0), Attack::picked(1, 0)]),
        Ship::from_body(FLEET_ID[1], FLEET_BODIES[1])?
            .with_cooldown(4)
            .with_terminate_hp(1)
            .with_attacks(vec![
                Attack::picked(0, 0),
                Attack::picked(1, 0),
                Attack::picked(-1, 0),
                Attack::picked(0, 1),
                Attack::picked(0, -1),
            ]),
        Ship::from_body(FLEET_ID[2], FLEET_BODIES[2])?
            .with_cooldown(3)
            .with_attacks(vec![
                Attack::picked(0, 0),
                Attack::picked(0, 1),
                Attack::picked(0, 2),
            ]),
        Ship::from_body(FLEET_ID[3], FLEET_BODIES[3])?.with_cooldown(1),
    ])
}

/// Total number of body cells in the default fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 4 + 4 + 2;
