//! Graph-specific error types.

use gw_core::{EdgeId, NodeId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Edge-list parsing and graph validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An input line has fewer than two tokens.
    MalformedLine { line_no: usize, line: String },

    /// An edge refers to a node that doesn't exist. This and the next two are
    /// structural invariant violations that `GraphBuilder` never produces.
    InvalidNodeRef { edge: EdgeId, node: NodeId },

    /// Two edges were given the same key.
    DuplicateEdgeKey { key: String },

    /// Ids are not contiguous with their storage positions.
    NonContiguousId { what: &'static str, index: usize },

    /// A node name was looked up that the graph doesn't contain.
    UnknownNode { name: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::MalformedLine { line_no, line } => {
                write!(
                    f,
                    "Invalid line {}: '{}' (each line should be: u v [w])",
                    line_no, line
                )
            }
            GraphError::InvalidNodeRef { edge, node } => {
                write!(f, "Edge {} refers to non-existent node {}", edge, node)
            }
            GraphError::DuplicateEdgeKey { key } => {
                write!(f, "Edge key '{}' is used more than once", key)
            }
            GraphError::NonContiguousId { what, index } => {
                write!(f, "{} at position {} has a mismatched id", what, index)
            }
            GraphError::UnknownNode { name } => {
                write!(f, "Node '{}' is not in the graph", name)
            }
        }
    }
}

impl std::error::Error for GraphError {}
