//! The mutation vocabulary emitted by the generator.

use std::fmt;

use gg_core::NodeIndex;

use crate::GraphSink;

/// One graph mutation.
///
/// With the `serde` feature this serialises tagged by `op`:
/// `{"op":"addNode","id":0}` and `{"op":"addEdge","from":0,"to":1}`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "camelCase"))]
pub enum GraphStreamOp {
    AddNode { id: NodeIndex },
    AddEdge { from: NodeIndex, to: NodeIndex },
}

impl GraphStreamOp {
    /// Apply this operation to `graph`.
    pub fn apply_to<G: GraphSink + ?Sized>(self, graph: &mut G) {
        match self {
            GraphStreamOp::AddNode { id } => graph.add_vertex(id),
            GraphStreamOp::AddEdge { from, to } => graph.add_edge(from, to),
        }
    }

    #[inline]
    pub fn is_edge(self) -> bool {
        matches!(self, GraphStreamOp::AddEdge { .. })
    }
}

impl fmt::Display for GraphStreamOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphStreamOp::AddNode { id } => write!(f, "addNode({id})"),
            GraphStreamOp::AddEdge { from, to } => write!(f, "addEdge({from} -> {to})"),
        }
    }
}
