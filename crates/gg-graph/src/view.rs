//! Capability traits for graph storage.

use gg_core::NodeIndex;

/// Which edges count towards [`GraphView::degree`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    In,
    #[default]
    Out,
    Both,
}

/// Read-only view of a directed graph.
///
/// Vertices are expected to be the contiguous indices `0..vertex_count()`.
pub trait GraphView {
    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Degree of `v`; zero for a vertex that does not exist.
    fn degree(&self, v: NodeIndex, direction: Direction) -> usize;

    fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool;

    /// All vertices in ascending index order.
    fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_;
}

/// Write side of the graph.  Only the consumer of the operation stream
/// mutates storage.
pub trait GraphSink {
    /// Insert `id`.  Adding an existing vertex is a no-op.
    fn add_vertex(&mut self, id: NodeIndex);

    /// Insert the directed edge `from -> to`, creating missing endpoints.
    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex);
}

/// Storage that can be both read and written.
pub trait Graph: GraphView + GraphSink {}

impl<T: GraphView + GraphSink> Graph for T {}
