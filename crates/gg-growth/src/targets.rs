//! Node and edge targets for one run.

use gg_core::linear_transformation;

use crate::{GrowthError, GrowthResult, Settings};

/// Density 1 never asks for more edges than this, unless `nodes - 1` (the
/// spanning minimum) is already larger.
pub const EDGE_SOFT_CAP: usize = 4000;

/// Most directed edges `vertices` nodes can hold without self-loops or
/// parallel edges: `(v+1)² − 3(v+1) + 2`, i.e. `v(v−1)`.
pub fn max_edges(vertices: usize) -> usize {
    vertices.saturating_mul(vertices.saturating_sub(1))
}

/// What a run grows towards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct GrowthTargets {
    nodes: usize,
    edges: usize,
}

impl GrowthTargets {
    /// Reject combinations the state machine could never finish.
    ///
    /// `edges` below `nodes - 1` is accepted; growth then stops as soon as
    /// the edge target is met, before every node exists.
    pub fn new(nodes: usize, edges: usize) -> GrowthResult<Self> {
        if nodes > u32::MAX as usize {
            return Err(GrowthError::TooManyNodes { nodes });
        }
        let max = max_edges(nodes);
        if edges > max {
            return Err(GrowthError::Infeasible { nodes, edges, max });
        }
        Ok(Self { nodes, edges })
    }

    /// Derive the edge target from density.
    ///
    /// ```text
    /// cap   = min(max(EDGE_SOFT_CAP, nodes - 1), max_edges(nodes))
    /// edges = ceil(max(0, lerp(density, [0, 1] -> [nodes - 1, cap])))
    /// ```
    pub fn from_settings(settings: &Settings) -> GrowthResult<Self> {
        let nodes = settings.nodes;
        let spanning = nodes as f64 - 1.0;
        let cap = (EDGE_SOFT_CAP as f64).max(spanning).min(max_edges(nodes) as f64);
        let edges = linear_transformation(settings.density.get(), (0.0, 1.0), (spanning, cap))?
            .max(0.0)
            .ceil() as usize;
        Self::new(nodes, edges)
    }

    #[inline]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    #[inline]
    pub fn edges(&self) -> usize {
        self.edges
    }
}
