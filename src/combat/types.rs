use serde::{Deserialize, Serialize};

use crate::character::stats::Stats;
use crate::items::types::{Item, ItemDrop};

/// A PvE opponent from the monster catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: String,
    pub name: String,
    pub stats: Stats,
    /// Qi credited to the victor's cultivation progress.
    pub qi_reward: u64,
    /// Seconds before this monster's opponent may fight again.
    pub cooldown: u32,
    #[serde(default)]
    pub drops: Vec<ItemDrop>,
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Win,
    Loss,
}

/// One combatant action within a round. HP values are the display values,
/// clamped at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    PlayerHit { damage: u32, monster_hp: u32 },
    MonsterDodged,
    MonsterHit { damage: u32, player_hp: u32 },
    PlayerDodged,
}

/// The events of a single round, in resolution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRound {
    pub round: u32,
    pub events: Vec<CombatEvent>,
}

/// Fully resolved battle: outcome plus the complete round log.
///
/// `round_interval_ms` is a pacing hint for presentation layers replaying
/// the log; the engine itself never sleeps between rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleResolution {
    pub outcome: BattleOutcome,
    pub rounds: Vec<BattleRound>,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub round_interval_ms: u64,
}

/// Outcome of a full `fight` operation, rewards included.
#[derive(Debug, Clone, PartialEq)]
pub struct FightReport {
    pub outcome: BattleOutcome,
    pub rounds: Vec<BattleRound>,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    /// Qi credited on a win, 0 on a loss.
    pub qi_gained: u64,
    /// Items granted by the drop table on a win.
    pub items_gained: Vec<Item>,
    pub round_interval_ms: u64,
}

impl FightReport {
    pub(crate) fn from_resolution(
        resolution: BattleResolution,
        qi_gained: u64,
        items_gained: Vec<Item>,
    ) -> Self {
        Self {
            outcome: resolution.outcome,
            rounds: resolution.rounds,
            damage_dealt: resolution.damage_dealt,
            damage_taken: resolution.damage_taken,
            qi_gained,
            items_gained,
            round_interval_ms: resolution.round_interval_ms,
        }
    }
}
