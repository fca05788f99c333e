use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraverseError;

/// Traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    Bfs,
    #[default]
    Dfs,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dfs => write!(f, "DFS"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = TraverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(TraverseError::UnknownAlgorithm(s.to_string())),
        }
    }
}
