use thiserror::Error;

/// Caller-facing engine failures.
///
/// Every variant is a recoverable precondition miss, never a process fault.
/// When an operation returns an error, the `Player` it was given has not
/// been modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("not enough qi: need {required}, have {available:.0}")]
    InsufficientQi { required: u64, available: f64 },

    #[error("body refinement is already at the cap for this realm")]
    MaxedOut,

    #[error("breakthrough conditions are not met")]
    NotEligible,

    #[error("still recovering from the last fight ({remaining_seconds:.1}s left)")]
    OnCooldown { remaining_seconds: f64 },

    #[error("unknown realm id: {0}")]
    UnknownRealm(String),

    #[error("unknown item id: {0}")]
    UnknownItem(String),

    #[error("item cannot be equipped: {0}")]
    NotEquippable(String),
}
