//! Ascension - Cultivation Idle RPG Engine
//!
//! The progression and combat core of a cultivation idle game: players
//! accrue qi over time, temper their bodies on a capped refinement ladder,
//! gamble accrued qi on realm breakthroughs that rescale their stats, and
//! fight monsters in turn-based battles for qi and item drops.
//!
//! The engine is synchronous and in-process. Callers supply the `Player`
//! snapshot plus the realm/item data catalogs, every randomized operation
//! takes an injected `rand::Rng` so outcomes are reproducible, and each
//! operation either returns an updated snapshot with a structured outcome
//! or a typed [`EngineError`] that leaves the snapshot untouched.
//! Presentation, persistence and transport live outside this crate.

pub mod character;
pub mod combat;
pub mod core;
pub mod cultivation;
pub mod items;
pub mod realms;
pub mod repository;

pub use character::{effective_stats, Player, Stats};
pub use crate::core::EngineError;
