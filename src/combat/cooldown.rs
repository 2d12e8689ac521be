//! Post-fight re-engagement gate.

/// Seconds left before the player may fight again; 0 when ready.
///
/// Stateless: callers feed the timestamps the player snapshot carries.
/// Also usable by a presentation layer for a countdown display.
pub fn remaining_cooldown(now_ms: i64, last_fight_ms: i64, cooldown_seconds: u32) -> f64 {
    let elapsed = (now_ms - last_fight_ms) as f64 / 1000.0;
    (cooldown_seconds as f64 - elapsed).max(0.0)
}

/// True when the cooldown has fully elapsed.
pub fn is_ready(now_ms: i64, last_fight_ms: i64, cooldown_seconds: u32) -> bool {
    remaining_cooldown(now_ms, last_fight_ms, cooldown_seconds) == 0.0
}
