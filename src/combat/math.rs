//! Pure combat formulas.
//!
//! These functions have no side effects and carry no state; both the
//! battle resolver and any balancing harness use them for identical math.

use rand::Rng;

use crate::core::constants::MIN_ATTACK_DAMAGE;

/// Chance for the defender to evade one incoming attack.
///
/// The defender's share of the combined agility pool, so the result is
/// always within [0, 1]. With no agility on either side nobody dodges.
pub fn dodge_chance(defender_agi: u32, attacker_agi: u32) -> f64 {
    let total = defender_agi as u64 + attacker_agi as u64;
    if total == 0 {
        return 0.0;
    }
    defender_agi as f64 / total as f64
}

/// Rolls one dodge attempt for the defender.
pub fn roll_dodge(defender_agi: u32, attacker_agi: u32, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < dodge_chance(defender_agi, attacker_agi)
}

/// Damage of one landed attack.
///
/// `atk^2 / (atk + def)` gives diminishing returns as defense approaches
/// attack; a bare `atk` when both are zero. Landed attacks always deal at
/// least 1 so every battle makes forward progress.
pub fn attack_damage(atk: u32, def: u32) -> u32 {
    let divisor = atk as u64 + def as u64;
    let raw = if divisor > 0 {
        let atk = atk as f64;
        atk * atk / divisor as f64
    } else {
        atk as f64
    };
    (raw.round() as u32).max(MIN_ATTACK_DAMAGE)
}
