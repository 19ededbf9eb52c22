//! Validation error type shared by the workspace.
//!
//! Sub-crates wrap `CoreError` as one variant of their own enums via `From`
//! so a failed construction deep inside the growth pipeline still surfaces as
//! a validation failure rather than an invariant violation.

use thiserror::Error;

/// Construction-time failures of the validated value types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("{what} must be in {expected}, got {value}")]
    OutOfRange {
        what:     &'static str,
        expected: &'static str,
        value:    f64,
    },

    #[error("{what} must be a positive integer, got 0")]
    NotPositive { what: &'static str },

    #[error("bias of exactly 0.5 has no advantage or disadvantage direction")]
    NeutralBias,

    #[error("PRNG state must not be all zeros")]
    DegenerateState,

    #[error("input range [{lower}, {upper}] is degenerate: bounds must differ")]
    DegenerateRange { lower: f64, upper: f64 },
}

/// Shorthand result type for `gg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
