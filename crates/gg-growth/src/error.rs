use gg_core::{CoreError, NodeIndex};
use gg_dist::DistError;
use thiserror::Error;

/// Consistency checks that correct inputs can never trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Invariant {
    #[error("genesis picked the new node {0} as its own parent")]
    GenesisSelfLoop(NodeIndex),

    #[error("no {0} link candidates left")]
    NoCandidates(&'static str),

    #[error("{edges} edges already saturate {vertices} vertices (max {max})")]
    EdgeCapacity {
        vertices: usize,
        edges:    usize,
        max:      usize,
    },

    #[error("edge count {edges} overshot the target {target}")]
    EdgesOvershot { edges: usize, target: usize },

    #[error("gravitate needs at least one vertex")]
    EmptyGraph,

    #[error("picked position {position} out of {len} candidates")]
    PickOutOfBounds { position: usize, len: usize },

    #[error("growth step produced no operation")]
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Distribution(#[from] DistError),

    #[error("{edges} edges requested but {nodes} nodes allow at most {max}")]
    Infeasible {
        nodes: usize,
        edges: usize,
        max:   usize,
    },

    #[error("{nodes} nodes do not fit the node index type")]
    TooManyNodes { nodes: usize },

    #[error("growth must start from an empty graph, got {vertices} vertices")]
    GraphNotEmpty { vertices: usize },

    #[error("internal invariant failed: {0}")]
    Invariant(#[from] Invariant),
}

impl GrowthError {
    /// `true` when the run aborted on an internal consistency check rather
    /// than on rejected input.
    pub fn is_invariant(&self) -> bool {
        match self {
            GrowthError::Invariant(_) => true,
            GrowthError::Distribution(e) => e.is_invariant(),
            _ => false,
        }
    }
}

pub type GrowthResult<T> = Result<T, GrowthError>;
