//! Non-linear preferential attachment.
//!
//! # Algorithm
//!
//! For nodes `0..n` with weights `w_i = degree(i) + FAIRNESS`:
//!
//! ```text
//! total  = Σ w_i                        (must equal edges + n * FAIRNESS)
//! target = (r * total + 1) ^ alpha
//! pick   = first i with target <= Σ_{j<=i} w_j ^ alpha
//! ```
//!
//! Each weight is exponentiated on its own before accumulating; the running
//! sum is never exponentiated.  Results must stay bit-compatible with
//! previously generated graphs, so this shape is kept as is.
//!
//! When the walk runs off the end without crossing the target the last node
//! is returned.  With `alpha = 1` that happens exactly when
//! `r >= 1 - 1/total`; with `alpha > 1` the reachable region is wider because
//! `Σ w^alpha` grows slower than `(Σ w)^alpha`.

use gg_core::{Decimal0n, Decimal1n, NodeIndex, PositiveCount, PrngState, Uniform01};
use tracing::debug;

use crate::{DistError, DistResult};

/// Weight added to every node so zero-degree nodes stay selectable.
pub const FAIRNESS: usize = 1;

/// Graph snapshot the NLPA draw reads.
pub struct NlpaInput<F> {
    pub total_nodes: PositiveCount,
    /// Directed edge count: each edge counted once.
    pub total_edges: usize,
    /// Degree of each node in `0..total_nodes`.
    pub degree: F,
}

/// Result of the cumulative walk before the fallback is applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Walk {
    Hit(NodeIndex),
    Exhausted,
}

/// NLPA sampler with a fixed exponent.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Nlpa {
    alpha: Decimal0n,
}

impl Nlpa {
    pub fn new(alpha: Decimal0n) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> Decimal0n {
        self.alpha
    }

    /// Pick a node for an already drawn `r`.
    pub fn pick<F>(&self, input: &NlpaInput<F>, r: Uniform01) -> DistResult<NodeIndex>
    where
        F: Fn(NodeIndex) -> usize,
    {
        match self.walk(input, r)? {
            Walk::Hit(node) => Ok(node),
            Walk::Exhausted => {
                let last = NodeIndex((input.total_nodes.get() - 1) as u32);
                debug!(r = r.get(), alpha = self.alpha.get(), %last, "nlpa walk exhausted, using last node");
                Ok(last)
            }
        }
    }

    /// Draw `r` from `state`, then [`pick`](Self::pick).
    pub fn draw<F>(&self, input: &NlpaInput<F>, state: PrngState) -> DistResult<(NodeIndex, PrngState)>
    where
        F: Fn(NodeIndex) -> usize,
    {
        let (r, next) = state.next();
        Ok((self.pick(input, r)?, next))
    }

    pub(crate) fn walk<F>(&self, input: &NlpaInput<F>, r: Uniform01) -> DistResult<Walk>
    where
        F: Fn(NodeIndex) -> usize,
    {
        let nodes = input.total_nodes.get();
        let weights: Vec<usize> = (0..nodes)
            .map(|i| (input.degree)(NodeIndex(i as u32)) + FAIRNESS)
            .collect();

        // Integer sum: floats would drift and the check below must be exact.
        let total: usize = weights.iter().sum();
        let fairness = nodes * FAIRNESS;
        if total != input.total_edges + fairness {
            return Err(DistError::WeightSumMismatch {
                total,
                edges: input.total_edges,
                fairness,
            });
        }

        let alpha = self.alpha.get();
        let target = Decimal1n::new(r.get() * total as f64 + 1.0)?;
        // May overflow to +inf for large alpha; the cumulative sum then
        // overflows too and the comparison still resolves.
        let scaled_target = target.get().powf(alpha);

        let mut cumulative = 0.0f64;
        for (i, &w) in weights.iter().enumerate() {
            cumulative += (w as f64).powf(alpha);
            if scaled_target <= cumulative {
                return Ok(Walk::Hit(NodeIndex(i as u32)));
            }
        }
        Ok(Walk::Exhausted)
    }
}
