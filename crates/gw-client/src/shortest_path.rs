//! `POST /shortest_path` request and response handling.

use gw_graph::Graph;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Request body: the full edge list plus the two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathQuery {
    pub edges: Vec<[String; 2]>,
    pub start: String,
    pub end: String,
}

impl PathQuery {
    pub fn new(edges: Vec<[String; 2]>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            edges,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Query over the current edge list of `graph`. Weights are not sent.
    pub fn from_graph(graph: &Graph, start: impl Into<String>, end: impl Into<String>) -> Self {
        let edges = graph
            .endpoint_names()
            .into_iter()
            .map(|(from, to)| [from, to])
            .collect();
        Self::new(edges, start, end)
    }

    /// Checks that never need the service.
    pub fn validate(&self) -> ClientResult<()> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err(ClientError::Validation(
                "Please select both start and end nodes".to_string(),
            ));
        }
        if self.start == self.end {
            return Err(ClientError::Validation(
                "Start and end nodes must be different".to_string(),
            ));
        }
        Ok(())
    }
}

/// A path found by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Node names from start to end inclusive.
    pub path: Vec<String>,
    /// Edge count as reported by the service.
    pub length: usize,
    /// Consecutive `(from, to)` pairs along the path.
    pub edges: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
struct ShortestPathResponse {
    #[serde(default)]
    exists: Option<bool>,
    #[serde(default)]
    path: Vec<String>,
    #[serde(default)]
    length: Option<i64>,
    #[serde(default)]
    edges: Vec<(String, String)>,
    #[serde(default)]
    error: Option<String>,
}

/// Turn a raw service reply into a path or a descriptive error.
pub(crate) fn interpret_response(
    query: &PathQuery,
    status: StatusCode,
    body: &str,
) -> ClientResult<ShortestPath> {
    if !status.is_success() {
        let message = serde_json::from_str::<ShortestPathResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .unwrap_or_else(|| "Failed to calculate shortest path".to_string());
        return Err(ClientError::Service(message));
    }

    let resp: ShortestPathResponse = serde_json::from_str(body)?;
    if resp.exists != Some(true) {
        return Err(ClientError::NoPath(resp.error.unwrap_or_else(|| {
            format!("No path exists between {} and {}", query.start, query.end)
        })));
    }

    let length = match resp.length {
        Some(n) => usize::try_from(n).map_err(|_| {
            ClientError::Service(format!("Service reported an invalid path length {n}"))
        })?,
        None => resp.edges.len(),
    };
    Ok(ShortestPath {
        path: resp.path,
        length,
        edges: resp.edges,
    })
}
