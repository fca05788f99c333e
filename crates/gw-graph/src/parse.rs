//! Edge-list text input.

use crate::error::{GraphError, GraphResult};

/// One `(from, to, weight?)` triple as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Option<String>,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: None,
        }
    }

    pub fn weighted(from: impl Into<String>, to: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: Some(weight.into()),
        }
    }
}

/// Parse `u v [w]` lines into edge records.
///
/// Blank lines are skipped. Tokens past the third are ignored. A line with
/// fewer than two tokens rejects the whole input so a half-parsed graph never
/// reaches the model.
pub fn parse_edge_lines(text: &str) -> GraphResult<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let (Some(from), Some(to)) = (tokens.next(), tokens.next()) else {
            return Err(GraphError::MalformedLine {
                line_no: i + 1,
                line: line.to_string(),
            });
        };
        records.push(EdgeRecord {
            from: from.to_string(),
            to: to.to_string(),
            weight: tokens.next().map(str::to_string),
        });
    }
    Ok(records)
}
