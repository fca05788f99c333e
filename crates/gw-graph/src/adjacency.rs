//! Derived neighbor mapping.

use gw_core::NodeId;

use crate::graph::Graph;

/// Node -> neighbors, derived from the edge list.
///
/// Built by walking edges in input order and recording each edge at both
/// endpoints, so neighbor order is insertion order and traversal order follows
/// from it. Parallel edges repeat a neighbor; a self-loop lists the node as its
/// own neighbor twice. Consumers filter by visitation, not by uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyView {
    neighbors: Vec<Vec<NodeId>>,
}

impl AdjacencyView {
    pub fn build(graph: &Graph) -> Self {
        let mut neighbors = vec![Vec::new(); graph.nodes().len()];
        for edge in graph.edges() {
            neighbors[edge.source.slot()].push(edge.target);
            neighbors[edge.target.slot()].push(edge.source);
        }
        Self { neighbors }
    }

    /// Neighbors of `id` in insertion order (empty for unknown ids).
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.neighbors
            .get(id.slot())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
