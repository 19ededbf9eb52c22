//! The pull-based driver.
//!
//! [`GraphStream`] owns the graph and the PRNG state.  Each [`step`] either
//! yields one applied operation or reports the end of the run.  A link
//! transition can produce two operations (genesis); the second is buffered
//! and handed out on the next step without drawing again.
//!
//! The stream is fused: after the first error or the end of the run every
//! further step returns `Ok(None)`.
//!
//! [`step`]: GraphStream::step

use std::collections::VecDeque;
use std::iter::FusedIterator;

use gg_core::{NodeIndex, PrngState, Seed};
use gg_graph::{AdjacencyList, Graph, GraphStreamOp};
use tracing::{debug, info, instrument, trace};

use crate::link::{link, LinkState};
use crate::{
    Gravitate, GraphStreamBuilder, GrowthObserver, GrowthResult, GrowthTargets, Invariant, Phase,
    Settings,
};

/// Progress after an operation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GraphStreamState {
    pub edges_left:  usize,
    pub total_edges: usize,
}

/// One element of the stream.  `rng` is the state after the transition that
/// produced `op`; resuming from it continues the same sequence.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphStreamItem {
    pub op:       GraphStreamOp,
    pub progress: GraphStreamState,
    pub rng:      PrngState,
}

pub struct GraphStream<G: Graph = AdjacencyList> {
    graph:          G,
    targets:        GrowthTargets,
    gravitate:      Gravitate,
    rng:            PrngState,
    next_vertex_id: NodeIndex,
    pending:        VecDeque<GraphStreamOp>,
    phase:          Option<Phase>,
    finished:       bool,
}

impl GraphStream<AdjacencyList> {
    /// Stream into a fresh [`AdjacencyList`].
    pub fn new(seed: Seed, settings: &Settings) -> GrowthResult<Self> {
        GraphStreamBuilder::new(seed).settings(settings.clone()).build()
    }
}

impl<G: Graph> GraphStream<G> {
    pub(crate) fn from_parts(graph: G, targets: GrowthTargets, gravitate: Gravitate, rng: PrngState) -> Self {
        Self {
            graph,
            targets,
            gravitate,
            rng,
            next_vertex_id: NodeIndex(0),
            pending: VecDeque::with_capacity(2),
            phase: None,
            finished: false,
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn targets(&self) -> GrowthTargets {
        self.targets
    }

    pub fn gravitate(&self) -> Gravitate {
        self.gravitate
    }

    /// Current PRNG state.
    pub fn rng(&self) -> PrngState {
        self.rng
    }

    /// Phase of the most recent transition; `None` before the first step.
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.finished && self.pending.is_empty()
    }

    /// Edges still to add.  Fails if the graph somehow holds more edges
    /// than the target.
    pub fn progress(&self) -> GrowthResult<GraphStreamState> {
        let total_edges = self.targets.edges();
        let edges = self.graph.edge_count();
        let edges_left = total_edges
            .checked_sub(edges)
            .ok_or(Invariant::EdgesOvershot { edges, target: total_edges })?;
        Ok(GraphStreamState { edges_left, total_edges })
    }

    /// Advance by one operation.
    pub fn step(&mut self) -> GrowthResult<Option<GraphStreamItem>> {
        let result = self.advance();
        if result.is_err() {
            self.finished = true;
            self.pending.clear();
        }
        result
    }

    fn advance(&mut self) -> GrowthResult<Option<GraphStreamItem>> {
        if let Some(op) = self.pending.pop_front() {
            return self.emit(op).map(Some);
        }
        if self.finished {
            return Ok(None);
        }

        let state = LinkState { graph: &self.graph, next_vertex_id: self.next_vertex_id };
        let phase = Phase::classify(&state, &self.targets);
        if self.phase != Some(phase) {
            debug!(?phase, vertices = self.graph.vertex_count(), edges = self.graph.edge_count(), "phase change");
            self.phase = Some(phase);
        }

        let (ops, rng) = link(&state, &self.targets, &self.gravitate, self.rng)?;
        self.rng = rng;
        match ops {
            None => {
                self.finished = true;
                info!(
                    vertices = self.graph.vertex_count(),
                    edges = self.graph.edge_count(),
                    "growth complete"
                );
                Ok(None)
            }
            Some(ops) => {
                self.pending.extend(ops);
                let op = self.pending.pop_front().ok_or(Invariant::Unreachable)?;
                self.emit(op).map(Some)
            }
        }
    }

    fn emit(&mut self, op: GraphStreamOp) -> GrowthResult<GraphStreamItem> {
        op.apply_to(&mut self.graph);
        if let GraphStreamOp::AddNode { id } = op {
            self.next_vertex_id = id.next();
        }
        let progress = self.progress()?;
        trace!(%op, edges_left = progress.edges_left, "op");
        Ok(GraphStreamItem { op, progress, rng: self.rng })
    }

    /// Drain the stream, reporting to `observer`.  Returns the final
    /// progress.
    #[instrument(skip_all, fields(nodes = self.targets.nodes(), edges = self.targets.edges()))]
    pub fn run<O: GrowthObserver>(&mut self, observer: &mut O) -> GrowthResult<GraphStreamState> {
        let mut reported = None;
        loop {
            let item = self.step()?;
            if self.phase != reported {
                if let Some(phase) = self.phase {
                    observer.on_phase(phase);
                }
                reported = self.phase;
            }
            match item {
                Some(item) => observer.on_op(&item),
                None => break,
            }
        }
        let progress = self.progress()?;
        observer.on_finish(&progress);
        Ok(progress)
    }

    pub fn into_graph(self) -> G {
        self.graph
    }

    /// The graph plus the PRNG state to resume from.
    pub fn into_parts(self) -> (G, PrngState) {
        (self.graph, self.rng)
    }
}

impl<G: Graph> Iterator for GraphStream<G> {
    type Item = GrowthResult<GraphStreamItem>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

impl<G: Graph> FusedIterator for GraphStream<G> {}

/// A completed run.
#[derive(Clone, Debug)]
pub struct FinalizedGraph<G = AdjacencyList> {
    pub graph:    G,
    pub rng:      PrngState,
    pub progress: GraphStreamState,
}

/// Grow a graph to completion.
pub fn generate(seed: Seed, settings: &Settings) -> GrowthResult<FinalizedGraph> {
    generate_with(seed, settings, &mut crate::NoopObserver)
}

/// [`generate`] with an observer attached.
pub fn generate_with<O: GrowthObserver>(
    seed:     Seed,
    settings: &Settings,
    observer: &mut O,
) -> GrowthResult<FinalizedGraph> {
    let mut stream = GraphStream::new(seed, settings)?;
    let progress = stream.run(observer)?;
    let (graph, rng) = stream.into_parts();
    Ok(FinalizedGraph { graph, rng, progress })
}
