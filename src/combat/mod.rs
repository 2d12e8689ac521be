//! Turn-based PvE combat: formulas, battle resolver and cooldown gate.

pub mod cooldown;
pub mod logic;
pub mod math;
pub mod types;

pub use cooldown::{is_ready, remaining_cooldown};
pub use logic::{fight, resolve_battle, Battle};
pub use math::{attack_damage, dodge_chance};
pub use types::{
    BattleOutcome, BattleResolution, BattleRound, CombatEvent, FightReport, Monster,
};
