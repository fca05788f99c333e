//! Error types for traversal configuration.
//!
//! Stepping itself never fails; only user-supplied configuration does.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraverseError {
    #[error("Unknown traversal algorithm '{0}' (expected BFS or DFS)")]
    UnknownAlgorithm(String),
}

pub type TraverseResult<T> = Result<T, TraverseError>;
