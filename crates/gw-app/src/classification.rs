//! Graph classification state, guarded the same way as shortest path.

use gw_client::{Classification, ClassifyRequest, ClientResult};
use gw_graph::Graph;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ClassifyTicket {
    generation: u64,
    request: ClassifyRequest,
}

impl ClassifyTicket {
    pub fn request(&self) -> &ClassifyRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClassificationState {
    classification: Option<Classification>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl ClassificationState {
    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Issue a request for `graph`. The previous label stays visible until
    /// the new response lands; the previous error does not.
    pub fn begin(&mut self, graph: &Graph) -> ClassifyTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        ClassifyTicket {
            generation: self.generation,
            request: ClassifyRequest::from_graph(graph),
        }
    }

    /// Apply a response unless a newer request was issued since.
    pub fn finish(&mut self, ticket: ClassifyTicket, result: ClientResult<Classification>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "discarding stale classification"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(c) => {
                self.classification = Some(c);
                self.error = None;
            }
            Err(e) => {
                self.classification = None;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn clear(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_client::{ClientError, GraphKind};
    use gw_graph::parse_edge_lines;
    use std::collections::BTreeMap;

    fn label(kind: GraphKind) -> Classification {
        Classification {
            kind,
            confidence: None,
            probabilities: BTreeMap::new(),
        }
    }

    #[test]
    fn stale_result_is_dropped() {
        let g = Graph::from_records(&parse_edge_lines("A B\nB C\nC A").unwrap()).unwrap();
        let mut s = ClassificationState::default();
        let old = s.begin(&g);
        let new = s.begin(&g);
        assert_eq!(new.request().edges.len(), 3);

        assert!(s.finish(new, Ok(label(GraphKind::Cycle))));
        assert!(!s.finish(old, Ok(label(GraphKind::Tree))));
        assert_eq!(s.classification().map(|c| &c.kind), Some(&GraphKind::Cycle));
        assert!(!s.is_loading());
    }

    #[test]
    fn failure_clears_label() {
        let g = Graph::from_records(&parse_edge_lines("A B").unwrap()).unwrap();
        let mut s = ClassificationState::default();
        let t = s.begin(&g);
        s.finish(t, Ok(label(GraphKind::Tree)));

        let t = s.begin(&g);
        assert!(s.is_loading());
        s.finish(t, Err(ClientError::Service("Classification failed".into())));
        assert!(s.classification().is_none());
        assert_eq!(s.error(), Some("Classification failed"));
    }

    #[test]
    fn clear_invalidates_in_flight() {
        let g = Graph::from_records(&parse_edge_lines("A B").unwrap()).unwrap();
        let mut s = ClassificationState::default();
        let t = s.begin(&g);
        s.clear();
        assert!(!s.finish(t, Ok(label(GraphKind::Tree))));
        assert!(!s.is_loading());
        assert!(s.classification().is_none());
    }
}
