use rand::rngs::SmallRng;

use crate::battle::BattleInfo;
use crate::candidates::CandidateSet;
use crate::common::EngineError;
use crate::grid::Coord;
use crate::probability::ProbabilityMap;
use crate::propagate::Propagator;
use crate::query;
use crate::ship::{AbilityDirection, ShipPosition};
use crate::strategy::{AnalyseResult, Strategy};
use crate::tile::Tile;

/// Strategy that finishes exposed ships first and otherwise shoots the cell
/// covered by the most surviving candidates.
#[derive(Debug, Default)]
pub struct ProbabilityHunter {
    propagator: Propagator,
}

impl ProbabilityHunter {
    pub fn new() -> Self {
        Self::default()
    }

    fn decide(
        &mut self,
        rng: &mut SmallRng,
        own: &BattleInfo,
        opponent: &BattleInfo,
        using_ability: Option<usize>,
    ) -> Result<AnalyseResult, EngineError> {
        own.validate()?;
        let mut set = CandidateSet::enumerate(opponent)?;
        set.drop_claimed(opponent);
        self.propagator.propagate(opponent, &mut set)?;
        let focus = focus_candidate(rng, opponent, &set);

        if let Some(slot) = using_ability.or_else(|| ready_ability(own)) {
            let attacks = own
                .ships
                .get(slot)
                .ok_or(EngineError::InvalidShipIndex(slot))?
                .attacks();
            let aim = focus.and_then(|(ship, pos)| {
                query::most_valuable_target(&opponent.tiles, &opponent.ships[ship], attacks, pos)
            });
            match aim {
                Some(aim) if using_ability.is_some() || aim.value > 1 => {
                    log::debug!("aiming ability {} at {} ({} strikes)", slot, aim.position, aim.value);
                    return Ok(AnalyseResult::ability(aim.position, slot, aim.direction));
                }
                _ if using_ability.is_some() => {
                    let target = hunt_target(rng, opponent, &set)?;
                    return Ok(AnalyseResult::ability(target, slot, AbilityDirection::Up));
                }
                _ => {}
            }
        }

        if let Some((ship, pos)) = focus {
            let ship = &opponent.ships[ship];
            if let Some(target) = query::first_tile_in_ship(&opponent.tiles, Tile::ATTACKABLE, ship, pos) {
                return Ok(AnalyseResult::attack(target));
            }
        }
        Ok(AnalyseResult::attack(hunt_target(rng, opponent, &set)?))
    }
}

impl Strategy for ProbabilityHunter {
    fn display_name(&self) -> &str {
        "Probability Hunter"
    }

    fn description(&self) -> &str {
        "Finishes exposed ships, otherwise fires at the most likely cell"
    }

    fn analyse(
        &mut self,
        rng: &mut SmallRng,
        own: &BattleInfo,
        opponent: &BattleInfo,
        using_ability: Option<usize>,
    ) -> AnalyseResult {
        match self.decide(rng, own, opponent, using_ability) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("{} failed: {}", self.display_name(), err);
                err.into()
            }
        }
    }
}

/// Most exposed candidate of the exposed ship with the fewest candidates.
fn focus_candidate(
    rng: &mut SmallRng,
    info: &BattleInfo,
    set: &CandidateSet,
) -> Option<(usize, ShipPosition)> {
    let pick = query::ship_with_fewest_candidates(info, set)?;
    if !pick.exposed {
        return None;
    }
    let list = &set.exposed[pick.ship];
    let index = query::most_exposed_candidate(rng, &info.ships[pick.ship], &info.tiles, list)?;
    Some((pick.ship, list[index]))
}

/// First alive own ship whose ability is off cooldown and can be aimed.
fn ready_ability(own: &BattleInfo) -> Option<usize> {
    (0..own.ship_count()).find(|&i| {
        own.ships_alive[i] && own.cooldowns[i] <= 0 && own.ships[i].attacks().iter().any(|a| a.is_aimed())
    })
}

/// Hottest attackable cell of the total probability layer, restricted to the
/// latest sonar ring while that ring still has candidates on it.
fn hunt_target(rng: &mut SmallRng, info: &BattleInfo, set: &CandidateSet) -> Result<Coord, EngineError> {
    let map = ProbabilityMap::build(info, set)?;
    let attackable = |c: Coord| matches!(info.tile(c), Some(t) if t.matches(Tile::ATTACKABLE));

    if let Some(sonar) = info.sonars.last() {
        let ring = query::sonar_ring(info.map_size, sonar);
        let (pos, max) = query::max_cell_where(rng, map.total(), |c| attackable(c) && ring.contains(&c));
        if max > 0 {
            return Ok(pos);
        }
    }
    let (pos, max) = query::max_cell_where(rng, map.total(), attackable);
    if max > 0 {
        return Ok(pos);
    }
    query::first_tile(&info.tiles, Tile::ATTACKABLE).ok_or(EngineError::NoTarget)
}
