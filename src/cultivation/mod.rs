//! Cultivation progression: body refinement, realm breakthroughs and
//! passive qi accrual.

pub mod breakthrough;
pub mod qi;
pub mod refinement;

pub use breakthrough::{
    attempt_breakthrough, breakthrough_state, BreakthroughOutcome, BreakthroughState,
};
pub use qi::{accrue_offline_qi, accrue_qi, OfflineQiReport};
pub use refinement::{
    attempt_refine, next_refinement_gain, refinement_cost, RefineOutcome, RefinementTable,
};
