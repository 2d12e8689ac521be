// Body refinement
pub const MAX_REFINEMENTS_PER_REALM: u32 = 20;

// PvE combat
pub const MIN_ATTACK_DAMAGE: u32 = 1;
pub const PVE_ROUND_INTERVAL_MS: u64 = 1000;
// Safety bound so a stalemate battle cannot spin forever; scored as a loss.
pub const MAX_BATTLE_ROUNDS: u32 = 10_000;

// Idle qi accrual
pub const OFFLINE_QI_MULTIPLIER: f64 = 0.25;
pub const MAX_OFFLINE_SECONDS: f64 = 7.0 * 24.0 * 60.0 * 60.0;
