use serde::{Deserialize, Serialize};

use crate::character::stats::Stats;

/// Fractional per-stat multipliers applied on a breakthrough.
/// 0.1 means +10% of the pre-breakthrough value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentGains {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    pub agi: f64,
}

/// Stat rescaling granted by ascending into a realm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakthroughGains {
    pub flat_gains: Stats,
    pub percent_gains: PercentGains,
}

impl BreakthroughGains {
    /// Rescales stats to `floor(stat * (1 + percent) + flat)` per component.
    pub fn apply_to(&self, stats: &Stats) -> Stats {
        Stats {
            hp: scale(stats.hp, self.percent_gains.hp, self.flat_gains.hp),
            atk: scale(stats.atk, self.percent_gains.atk, self.flat_gains.atk),
            def: scale(stats.def, self.percent_gains.def, self.flat_gains.def),
            agi: scale(stats.agi, self.percent_gains.agi, self.flat_gains.agi),
        }
    }
}

fn scale(base: u32, percent: f64, flat: u32) -> u32 {
    (base as f64 * (1.0 + percent) + flat as f64).floor() as u32
}

/// One tier of the cultivation ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    pub id: String,
    pub name: String,
    /// Position in the ladder; higher order is more advanced. Orders form a
    /// strict total order across the catalog.
    pub order: u32,
    /// Qi required to attempt a breakthrough out of this realm.
    pub qi_needed: u64,
    /// Passive qi accrued per second while cultivating here.
    pub qi_rate: f64,
    /// Probability that a breakthrough INTO this realm succeeds, 0.0 to 1.0.
    pub breakthrough_chance: f64,
    /// Fraction of the previous realm's `qi_needed` lost when a breakthrough
    /// into this realm fails.
    pub qi_loss_on_failure: f64,
    /// Fraction of `qi_needed` charged per body refinement attempt.
    pub body_refinement_cost_percent: f64,
    pub breakthrough_gains: BreakthroughGains,
}
