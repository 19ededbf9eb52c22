use gg_core::CoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(
        "internal invariant failed: weight total {total} != edges {edges} + nodes * fairness {fairness}"
    )]
    WeightSumMismatch {
        total:    usize,
        edges:    usize,
        fairness: usize,
    },
}

impl DistError {
    /// `true` for internal consistency failures, `false` for rejected inputs.
    pub fn is_invariant(&self) -> bool {
        matches!(self, DistError::WeightSumMismatch { .. })
    }
}

pub type DistResult<T> = Result<T, DistError>;
