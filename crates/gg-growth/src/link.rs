//! One step of the growth state machine.
//!
//! ```text
//! Bootstrap  no vertices yet, nodes wanted   -> [addNode(0)]
//! Done       edge target is 0 or reached     -> nothing
//! Genesis    fewer vertices than wanted      -> [addNode(new), addEdge(picked, new)]
//! Abundance  all vertices, edges still short -> [addEdge(from, to)]
//! Done       otherwise
//! ```
//!
//! The step only reads the graph.  Applying the returned operations is the
//! caller's job.

use gg_core::{NodeIndex, PositiveCount, PrngState};
use gg_graph::{Direction, GraphStreamOp, GraphView};
use tracing::trace;

use crate::gravitate::scale_to_index;
use crate::targets::max_edges;
use crate::{Gravitate, GrowthResult, GrowthTargets, Invariant};

/// Read-only snapshot a step works from.
pub struct LinkState<'g, G: ?Sized> {
    pub graph:          &'g G,
    /// Id the next `addNode` will use.
    pub next_vertex_id: NodeIndex,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Phase {
    Bootstrap,
    Genesis,
    Abundance,
    Done,
}

impl Phase {
    pub fn classify<G>(state: &LinkState<'_, G>, targets: &GrowthTargets) -> Phase
    where
        G: GraphView + ?Sized,
    {
        let vertices = state.graph.vertex_count();
        let edges = state.graph.edge_count();
        if vertices == 0 && targets.nodes() > 0 {
            Phase::Bootstrap
        } else if targets.edges() == 0 || edges == targets.edges() {
            Phase::Done
        } else if targets.nodes() > vertices {
            Phase::Genesis
        } else if targets.edges() > edges {
            Phase::Abundance
        } else {
            Phase::Done
        }
    }
}

/// Run one transition.  `None` means the run is complete.
pub fn link<G>(
    state:     &LinkState<'_, G>,
    targets:   &GrowthTargets,
    gravitate: &Gravitate,
    rng:       PrngState,
) -> GrowthResult<(Option<Vec<GraphStreamOp>>, PrngState)>
where
    G: GraphView + ?Sized,
{
    match Phase::classify(state, targets) {
        Phase::Bootstrap => Ok((Some(vec![GraphStreamOp::AddNode { id: state.next_vertex_id }]), rng)),
        Phase::Genesis => {
            let (ops, rng) = genesis(state, gravitate, rng)?;
            Ok((Some(ops), rng))
        }
        Phase::Abundance => {
            let (ops, rng) = abundance(state.graph, gravitate, rng)?;
            Ok((Some(ops), rng))
        }
        Phase::Done => Ok((None, rng)),
    }
}

fn genesis<G>(
    state:     &LinkState<'_, G>,
    gravitate: &Gravitate,
    rng:       PrngState,
) -> GrowthResult<(Vec<GraphStreamOp>, PrngState)>
where
    G: GraphView + ?Sized,
{
    let (parent, rng) = gravitate.pick(state.graph, rng)?;
    let child = state.next_vertex_id;
    if parent == child {
        return Err(Invariant::GenesisSelfLoop(child).into());
    }
    Ok((
        vec![
            GraphStreamOp::AddNode { id: child },
            GraphStreamOp::AddEdge { from: parent, to: child },
        ],
        rng,
    ))
}

pub(crate) fn abundance<G>(graph: &G, gravitate: &Gravitate, rng: PrngState) -> GrowthResult<(Vec<GraphStreamOp>, PrngState)>
where
    G: GraphView + ?Sized,
{
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();
    let max = max_edges(vertices);
    if edges >= max {
        return Err(Invariant::EdgeCapacity { vertices, edges, max }.into());
    }

    // Quadratic per step: every vertex is scanned, then filtered by has_edge.
    let incoming = link_candidates(graph, Direction::In);
    if incoming.is_empty() {
        return Err(Invariant::NoCandidates("incoming").into());
    }
    let (to, rng) = gravitate.pick_among(graph, &incoming, rng)?;

    let outgoing: Vec<NodeIndex> = link_candidates(graph, Direction::Out)
        .into_iter()
        .filter(|&from| from != to && !graph.has_edge(from, to))
        .collect();
    let len = PositiveCount::new(outgoing.len()).map_err(|_| Invariant::NoCandidates("outgoing"))?;
    let (r, rng) = rng.next();
    let from = outgoing[scale_to_index(r, len)];
    trace!(incoming = incoming.len(), outgoing = outgoing.len(), %from, %to, "abundance edge");

    Ok((vec![GraphStreamOp::AddEdge { from, to }], rng))
}

/// Vertices with a free slot in `direction`: degree below `vertices - 1`.
pub fn link_candidates<G>(graph: &G, direction: Direction) -> Vec<NodeIndex>
where
    G: GraphView + ?Sized,
{
    let limit = graph.vertex_count().saturating_sub(1);
    graph
        .vertices()
        .filter(|&v| graph.degree(v, direction) < limit)
        .collect()
}
