//! `POST /classify` request and response handling.

use std::collections::BTreeMap;
use std::fmt;

use gw_graph::Graph;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Request body: `{ edges: [[from, to, weight|null], ...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifyRequest {
    pub edges: Vec<(String, String, Option<String>)>,
}

impl ClassifyRequest {
    pub fn from_graph(graph: &Graph) -> Self {
        let edges = graph
            .edges()
            .iter()
            .map(|e| {
                (
                    graph.name(e.source).to_string(),
                    graph.name(e.target).to_string(),
                    e.weight.clone(),
                )
            })
            .collect();
        Self { edges }
    }
}

/// Structural label returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphKind {
    Tree,
    Dag,
    Cycle,
    /// Any label the service adds later (it currently also sends `Unknown`).
    Other(String),
}

impl From<&str> for GraphKind {
    fn from(s: &str) -> Self {
        match s {
            "Tree" => GraphKind::Tree,
            "DAG" => GraphKind::Dag,
            "Cycle" => GraphKind::Cycle,
            other => GraphKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Tree => write!(f, "Tree"),
            GraphKind::Dag => write!(f, "DAG"),
            GraphKind::Cycle => write!(f, "Cycle"),
            GraphKind::Other(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub kind: GraphKind,
    pub confidence: Option<f64>,
    /// Per-label probabilities, when the service reports them.
    pub probabilities: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    classification: Option<ClassificationBody>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClassificationBody {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    probabilities: BTreeMap<String, f64>,
    #[serde(default)]
    error: Option<String>,
}

pub(crate) fn interpret_response(status: StatusCode, body: &str) -> ClientResult<Classification> {
    if !status.is_success() {
        return Err(ClientError::Service("Classification failed".to_string()));
    }
    let resp: ClassifyResponse = serde_json::from_str(body)?;
    if resp.success == Some(false) {
        return Err(ClientError::Service(
            resp.error
                .unwrap_or_else(|| "Classification failed".to_string()),
        ));
    }
    let Some(body) = resp.classification else {
        return Err(ClientError::Service(
            "Classification missing from response".to_string(),
        ));
    };
    if let Some(err) = body.error {
        tracing::warn!(error = %err, label = %body.kind, "classifier reported an internal error");
    }
    Ok(Classification {
        kind: GraphKind::from(body.kind.as_str()),
        confidence: body.confidence,
        probabilities: body.probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_graph::parse_edge_lines;

    #[test]
    fn request_keeps_weights_and_nulls() {
        let g = Graph::from_records(&parse_edge_lines("A B 3\nB C").unwrap()).unwrap();
        let json = serde_json::to_string(&ClassifyRequest::from_graph(&g)).unwrap();
        assert_eq!(json, r#"{"edges":[["A","B","3"],["B","C",null]]}"#);
    }

    #[test]
    fn full_response_is_parsed() {
        let body = r#"{"success": true, "classification": {"type": "DAG", "confidence": 0.7,
            "probabilities": {"Tree": 0.15, "Cycle": 0.15, "DAG": 0.7}}}"#;
        let c = interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(c.kind, GraphKind::Dag);
        assert_eq!(c.confidence, Some(0.7));
        assert_eq!(c.probabilities.get("DAG"), Some(&0.7));
    }

    #[test]
    fn minimal_response_is_parsed() {
        let c = interpret_response(StatusCode::OK, r#"{"classification": {"type": "Tree"}}"#).unwrap();
        assert_eq!(c.kind, GraphKind::Tree);
        assert!(c.probabilities.is_empty());
    }

    #[test]
    fn unknown_label_is_kept() {
        let c = interpret_response(
            StatusCode::OK,
            r#"{"success": true, "classification": {"type": "Unknown", "confidence": 0.0}}"#,
        )
        .unwrap();
        assert_eq!(c.kind, GraphKind::Other("Unknown".into()));
        assert_eq!(c.kind.to_string(), "Unknown");
    }

    #[test]
    fn failures_become_service_errors() {
        let err = interpret_response(StatusCode::OK, r#"{"success": false, "error": "boom"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");

        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "").unwrap_err();
        assert_eq!(err.to_string(), "Classification failed");
    }
}
