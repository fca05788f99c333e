//! Incremental graph builder.

use std::collections::HashMap;

use gw_core::{EdgeId, NodeId};
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::{Edge, Graph, Node};
use crate::validate;

/// Builder for constructing a graph edge by edge.
///
/// Nodes are created implicitly the first time an edge names them, so node
/// order is first-seen order across all endpoints. Call `build()` to validate
/// and freeze the result into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_name: HashMap<String, NodeId>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, creating the node if this is its first mention.
    pub fn intern_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = NodeId::from_usize(self.nodes.len());
        self.nodes.push(Node {
            id,
            name: name.to_string(),
            label: name.to_string(),
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Add an edge and return its ID.
    ///
    /// Edges are never merged: the same pair entered twice yields two edges
    /// whose keys differ by their input position.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Option<String>) -> EdgeId {
        let source = self.intern_node(from);
        let target = self.intern_node(to);
        let index = self.edges.len();
        let id = EdgeId::from_usize(index);
        self.edges.push(Edge {
            id,
            key: format!("{from}-{to}-{index}"),
            source,
            target,
            weight,
        });
        id
    }

    /// Validate and build the final graph.
    pub fn build(self) -> GraphResult<Graph> {
        validate::validate_structure(&self.nodes, &self.edges)?;
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph built"
        );
        Ok(Graph {
            nodes: self.nodes,
            edges: self.edges,
            by_name: self.by_name,
        })
    }
}
