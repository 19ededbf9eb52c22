//! Adjacency-list graph storage.
//!
//! # Data layout
//!
//! Each vertex owns a `Vec` of its out-neighbours; in-degrees are kept in a
//! parallel counter array so `degree(v, In)` is O(1).  `has_edge` scans the
//! source's out-list, which is fine for the node counts the generator targets.

use gg_core::NodeIndex;

use crate::{Direction, GraphSink, GraphView};

/// Directed graph as out-adjacency lists.
///
/// Vertex slots are created on demand; a slot that was never added is `None`
/// and does not count as a vertex.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyList {
    adjacency:    Vec<Option<Vec<NodeIndex>>>,
    in_degree:    Vec<u32>,
    num_vertices: usize,
    num_edges:    usize,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate vertex slots.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency:    Vec::with_capacity(vertices),
            in_degree:    Vec::with_capacity(vertices),
            num_vertices: 0,
            num_edges:    0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    pub fn has_vertex(&self, v: NodeIndex) -> bool {
        matches!(self.adjacency.get(v.index()), Some(Some(_)))
    }

    /// Out-neighbours of `v` in insertion order.
    pub fn neighbors(&self, v: NodeIndex) -> &[NodeIndex] {
        match self.adjacency.get(v.index()) {
            Some(Some(out)) => out,
            _ => &[],
        }
    }

    /// Every edge as `(from, to)`, grouped by source in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, slot)| {
            slot.iter()
                .flatten()
                .map(move |&to| (NodeIndex(i as u32), to))
        })
    }

    fn ensure_vertex(&mut self, v: NodeIndex) -> &mut Vec<NodeIndex> {
        let i = v.index();
        if i >= self.adjacency.len() {
            self.adjacency.resize_with(i + 1, || None);
            self.in_degree.resize(i + 1, 0);
        }
        let slot = &mut self.adjacency[i];
        if slot.is_none() {
            self.num_vertices += 1;
        }
        slot.get_or_insert_with(Vec::new)
    }
}

impl GraphView for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    fn edge_count(&self) -> usize {
        self.num_edges
    }

    fn degree(&self, v: NodeIndex, direction: Direction) -> usize {
        let Some(Some(out)) = self.adjacency.get(v.index()) else {
            return 0;
        };
        let incoming = self.in_degree[v.index()] as usize;
        match direction {
            Direction::Out  => out.len(),
            Direction::In   => incoming,
            Direction::Both => out.len() + incoming,
        }
    }

    fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.neighbors(from).contains(&to)
    }

    fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeIndex(i as u32))
    }
}

impl GraphSink for AdjacencyList {
    fn add_vertex(&mut self, id: NodeIndex) {
        self.ensure_vertex(id);
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.ensure_vertex(to);
        self.ensure_vertex(from).push(to);
        self.in_degree[to.index()] += 1;
        self.num_edges += 1;
    }
}
