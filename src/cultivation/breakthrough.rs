use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::player::Player;
use crate::character::stats::Stats;
use crate::core::error::EngineError;
use crate::realms::RealmCatalog;

/// Where the player stands relative to the next realm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakthroughState {
    /// Enough qi and a higher realm exists; an attempt may be made.
    Eligible,
    /// A higher realm exists but the qi bar is not full yet.
    Ineligible,
    /// No realm above the current one. Absorbing: nothing re-opens it.
    AtCeiling,
}

/// Classifies the player's breakthrough eligibility.
pub fn breakthrough_state(
    player: &Player,
    realms: &RealmCatalog,
) -> Result<BreakthroughState, EngineError> {
    let current = realms
        .get(&player.realm_id)
        .ok_or_else(|| EngineError::UnknownRealm(player.realm_id.clone()))?;

    if realms.is_highest(current) {
        return Ok(BreakthroughState::AtCeiling);
    }
    if player.cultivation_progress >= current.qi_needed as f64 {
        Ok(BreakthroughState::Eligible)
    } else {
        Ok(BreakthroughState::Ineligible)
    }
}

/// Result of a resolved breakthrough attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum BreakthroughOutcome {
    /// Ascended. Stats were rescaled by the new realm's gains; progress and
    /// per-realm refinements were reset.
    Success {
        realm_id: String,
        realm_name: String,
        stats: Stats,
    },
    /// The tribulation failed; part of the accrued qi burned away.
    Failure { qi_lost: f64 },
}

/// Attempts to ascend into the next realm.
///
/// One uniform draw decides the attempt: success iff `r` falls below the
/// next realm's `breakthrough_chance`. On failure the player keeps realm
/// and stats but loses `qi_needed * qi_loss_on_failure` qi, floored at 0.
pub fn attempt_breakthrough(
    player: &mut Player,
    realms: &RealmCatalog,
    rng: &mut impl Rng,
) -> Result<BreakthroughOutcome, EngineError> {
    let current = realms
        .get(&player.realm_id)
        .ok_or_else(|| EngineError::UnknownRealm(player.realm_id.clone()))?;

    let next = match realms.next_after(current) {
        Some(next) => next,
        None => return Err(EngineError::NotEligible),
    };
    if player.cultivation_progress < current.qi_needed as f64 {
        return Err(EngineError::NotEligible);
    }

    let roll: f64 = rng.gen();
    if roll < next.breakthrough_chance {
        let rescaled = next.breakthrough_gains.apply_to(&player.stats);
        player.realm_id = next.id.clone();
        player.cultivation_progress = 0.0;
        player.body_refinements_in_realm = 0;
        player.stats = rescaled;

        debug!("{} broke through into {}", player.username, next.name);

        Ok(BreakthroughOutcome::Success {
            realm_id: next.id.clone(),
            realm_name: next.name.clone(),
            stats: rescaled,
        })
    } else {
        let qi_lost = current.qi_needed as f64 * next.qi_loss_on_failure;
        player.cultivation_progress = (player.cultivation_progress - qi_lost).max(0.0);

        debug!(
            "{} failed the breakthrough into {} and lost {:.0} qi",
            player.username, next.name, qi_lost
        );

        Ok(BreakthroughOutcome::Failure { qi_lost })
    }
}
