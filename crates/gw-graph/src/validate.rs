//! Graph validation logic.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Node};

/// Validate the graph structure: ids match positions, endpoints exist, keys are unique.
///
/// These are invariant checks. `GraphBuilder` assigns ids from positions, interns
/// every endpoint and suffixes keys with the edge index, so a built graph always
/// passes; an error here means the builder itself is broken.
pub(crate) fn validate_structure(nodes: &[Node], edges: &[Edge]) -> GraphResult<()> {
    for (i, node) in nodes.iter().enumerate() {
        if node.id.slot() != i {
            return Err(GraphError::NonContiguousId {
                what: "node",
                index: i,
            });
        }
    }

    for (i, edge) in edges.iter().enumerate() {
        if edge.id.slot() != i {
            return Err(GraphError::NonContiguousId {
                what: "edge",
                index: i,
            });
        }
        for node in [edge.source, edge.target] {
            if node.slot() >= nodes.len() {
                return Err(GraphError::InvalidNodeRef {
                    edge: edge.id,
                    node,
                });
            }
        }
    }

    let mut keys = HashSet::with_capacity(edges.len());
    for edge in edges {
        if !keys.insert(edge.key.as_str()) {
            return Err(GraphError::DuplicateEdgeKey {
                key: edge.key.clone(),
            });
        }
    }

    Ok(())
}
