//! Node selection strategies.
//!
//! A [`Gravitate`] is chosen once from the settings and handed to every
//! growth step.  It picks either among all vertices (genesis) or among a
//! candidate subset (abundance); in both cases the result is an existing
//! node.
//!
//! | Model             | Strategy                                                   |
//! |-------------------|------------------------------------------------------------|
//! | `barabasi-albert` | NLPA over out-degrees, alpha scaled from heterogeneity     |
//! | `dnd`             | one draw skewed by the biased roll (K = heterogeneity), scaled to an index |

use gg_core::{NodeIndex, PositiveCount, PrngState, Uniform01};
use gg_dist::{
    scale_nlpa_heterogeneity, scale_nlpa_heterogeneity_unbounded, BiasedRoll, Nlpa, NlpaInput,
};
use gg_graph::{Direction, GraphView};

use crate::{BranchingModel, GrowthResult, Invariant, Settings};

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Gravitate {
    Nlpa(Nlpa),
    BiasedUniform(BiasedRoll),
}

impl Gravitate {
    /// Pick the strategy for `settings.branching_model`.
    ///
    /// The NLPA exponent uses the bounded scaling against the target node
    /// count.  With zero target nodes nothing is ever picked, and the
    /// count-free `2h` form fills in.
    pub fn from_settings(settings: &Settings) -> GrowthResult<Self> {
        Self::for_nodes(settings, settings.nodes)
    }

    /// As [`from_settings`](Self::from_settings), scaling against `nodes`
    /// instead of `settings.nodes`.
    pub fn for_nodes(settings: &Settings, nodes: usize) -> GrowthResult<Self> {
        Ok(match settings.branching_model {
            BranchingModel::BarabasiAlbert => {
                let alpha = match PositiveCount::new(nodes) {
                    Ok(nodes) => scale_nlpa_heterogeneity(nodes, settings.heterogeneity)?,
                    Err(_) => scale_nlpa_heterogeneity_unbounded(settings.heterogeneity)?,
                };
                Gravitate::Nlpa(Nlpa::new(alpha))
            }
            BranchingModel::Dnd => Gravitate::BiasedUniform(BiasedRoll::new(settings.heterogeneity.into())),
        })
    }

    /// Pick one of the graph's vertices.
    pub fn pick<G>(&self, graph: &G, rng: PrngState) -> GrowthResult<(NodeIndex, PrngState)>
    where
        G: GraphView + ?Sized,
    {
        let (position, rng) = self.choose(
            graph.vertex_count(),
            graph.edge_count(),
            |i| graph.degree(NodeIndex(i as u32), Direction::Out),
            rng,
        )?;
        Ok((NodeIndex(position as u32), rng))
    }

    /// Pick one of `candidates`.  NLPA weights come from the candidates'
    /// out-degrees alone.
    pub fn pick_among<G>(
        &self,
        graph:      &G,
        candidates: &[NodeIndex],
        rng:        PrngState,
    ) -> GrowthResult<(NodeIndex, PrngState)>
    where
        G: GraphView + ?Sized,
    {
        let out_degree = |i: usize| graph.degree(candidates[i], Direction::Out);
        let total_edges = (0..candidates.len()).map(out_degree).sum();
        let (position, rng) = self.choose(candidates.len(), total_edges, out_degree, rng)?;
        let picked = candidates
            .get(position)
            .copied()
            .ok_or(Invariant::PickOutOfBounds { position, len: candidates.len() })?;
        Ok((picked, rng))
    }

    fn choose<F>(
        &self,
        len:         usize,
        total_edges: usize,
        degree:      F,
        rng:         PrngState,
    ) -> GrowthResult<(usize, PrngState)>
    where
        F: Fn(usize) -> usize,
    {
        let total_nodes = PositiveCount::new(len).map_err(|_| Invariant::EmptyGraph)?;
        match self {
            Gravitate::Nlpa(nlpa) => {
                let input = NlpaInput {
                    total_nodes,
                    total_edges,
                    degree: |n: NodeIndex| degree(n.index()),
                };
                let (picked, rng) = nlpa.draw(&input, rng)?;
                Ok((picked.index(), rng))
            }
            Gravitate::BiasedUniform(roll) => {
                let (v, rng) = roll.draw(rng)?;
                Ok((scale_to_index(v, total_nodes), rng))
            }
        }
    }
}

/// `floor(v * len)`, kept below `len` when the product rounds up.
pub fn scale_to_index(v: Uniform01, len: PositiveCount) -> usize {
    let len = len.get();
    ((v.get() * len as f64).floor() as usize).min(len - 1)
}
