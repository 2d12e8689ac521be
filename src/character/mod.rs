//! Player snapshot and combat statistics.

pub mod player;
pub mod stats;

pub use player::Player;
pub use stats::{effective_stats, Stats};
