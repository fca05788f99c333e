//! Core graph data structures.

use std::collections::HashMap;

use gw_core::{EdgeId, NodeId};

use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::parse::EdgeRecord;

/// A vertex of the loaded graph.
///
/// Nodes exist only because some edge names them; there is no way to declare
/// an isolated node in edge-list input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    /// Identifier as typed by the user.
    pub name: String,
    /// Display label (currently the name itself).
    pub label: String,
}

/// An edge between two nodes.
///
/// Stored with the orientation it was entered in, but traversable from either
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    /// Stable key `"{from}-{to}-{index}"`; unique even for parallel edges.
    pub key: String,
    pub source: NodeId,
    pub target: NodeId,
    /// Optional weight label. Carried for display only.
    pub weight: Option<String>,
}

impl Edge {
    /// True if this edge joins `a` and `b` in either orientation.
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// The graph: a validated, immutable collection of nodes and edges.
///
/// Nodes are kept in first-seen order and edges in input order; both orders
/// are observable through traversal and must not change between loads of the
/// same text.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) by_name: HashMap<String, NodeId>,
}

impl Graph {
    /// Build a graph from parsed edge records.
    pub fn from_records(records: &[EdgeRecord]) -> GraphResult<Self> {
        let mut builder = GraphBuilder::new();
        for rec in records {
            builder.add_edge(&rec.from, &rec.to, rec.weight.clone());
        }
        builder.build()
    }

    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.by_name.get(name).and_then(|&id| self.node(id))
    }

    pub fn edge_by_key(&self, key: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.key == key)
    }

    /// Name of a node, or `"?"` for an id from another graph.
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).map(|n| n.name.as_str()).unwrap_or("?")
    }

    /// First edge in input order joining `a` and `b`, in either orientation.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.joins(a, b))
    }

    /// Edges incident to a node, in input order.
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |e| e.source == id || e.target == id)
    }

    /// `(from, to)` name pairs in input order, the shape external services expect.
    pub fn endpoint_names(&self) -> Vec<(String, String)> {
        self.edges
            .iter()
            .map(|e| (self.name(e.source).to_string(), self.name(e.target).to_string()))
            .collect()
    }
}
