use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::character::player::Player;
use crate::character::stats::Stats;
use crate::core::constants::MAX_REFINEMENTS_PER_REALM;
use crate::core::error::EngineError;
use crate::realms::{Realm, RealmCatalog};

/// Configured stat gain per refinement level within a realm.
///
/// Supplied by the data collaborator; levels without an entry grant nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefinementTable {
    gains: BTreeMap<u32, Stats>,
}

impl RefinementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (u32, Stats)>) -> Self {
        Self {
            gains: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, level: u32, gain: Stats) {
        self.gains.insert(level, gain);
    }

    pub fn gain_for_level(&self, level: u32) -> Stats {
        self.gains.get(&level).copied().unwrap_or_default()
    }
}

/// Qi charged per refinement attempt in `realm`.
///
/// The cost depends only on the realm, not on how many refinements the
/// player already performed there.
pub fn refinement_cost(realm: &Realm) -> u64 {
    (realm.qi_needed as f64 * realm.body_refinement_cost_percent).floor() as u64
}

/// The stat gain the player's next refinement would grant.
pub fn next_refinement_gain(player: &Player, table: &RefinementTable) -> Stats {
    table.gain_for_level(player.body_refinements_in_realm + 1)
}

/// What a successful refinement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefineOutcome {
    pub cost: u64,
    pub gain: Stats,
    pub body_level: u32,
    pub refinements_in_realm: u32,
}

/// Tempers the player's body once.
///
/// Deducts the realm-percent qi cost, bumps both refinement counters and
/// folds the configured gain into base stats, all in one call. The caller
/// may animate the deduction and the gain separately, but no snapshot with
/// only half of the transaction ever leaves the engine.
pub fn attempt_refine(
    player: &mut Player,
    realms: &RealmCatalog,
    table: &RefinementTable,
) -> Result<RefineOutcome, EngineError> {
    let realm = realms
        .get(&player.realm_id)
        .ok_or_else(|| EngineError::UnknownRealm(player.realm_id.clone()))?;

    if player.body_refinements_in_realm >= MAX_REFINEMENTS_PER_REALM {
        return Err(EngineError::MaxedOut);
    }

    let cost = refinement_cost(realm);
    if player.cultivation_progress < cost as f64 {
        return Err(EngineError::InsufficientQi {
            required: cost,
            available: player.cultivation_progress,
        });
    }

    let gain = next_refinement_gain(player, table);
    player.cultivation_progress -= cost as f64;
    player.body_level += 1;
    player.body_refinements_in_realm += 1;
    player.stats = player.stats.add(&gain);

    debug!(
        "{} refined body to level {} ({}/{} in {})",
        player.username,
        player.body_level,
        player.body_refinements_in_realm,
        MAX_REFINEMENTS_PER_REALM,
        realm.name
    );

    Ok(RefineOutcome {
        cost,
        gain,
        body_level: player.body_level,
        refinements_in_realm: player.body_refinements_in_realm,
    })
}
