//! Shortest-path query state with a latest-request-wins guard.

use gw_client::{ClientResult, PathQuery, ShortestPath};
use gw_graph::Graph;
use tracing::debug;

/// Exactly one of these holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PathStatus {
    #[default]
    NotCalculated,
    Found(ShortestPath),
    Failed(String),
}

/// Handle for one issued request. Only the most recently issued ticket can
/// apply its result.
#[derive(Debug, Clone)]
pub struct PathTicket {
    generation: u64,
    query: PathQuery,
}

impl PathTicket {
    pub fn query(&self) -> &PathQuery {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShortestPathState {
    start: Option<String>,
    end: Option<String>,
    status: PathStatus,
    is_calculating: bool,
    generation: u64,
}

impl ShortestPathState {
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn status(&self) -> &PathStatus {
        &self.status
    }

    pub fn is_calculating(&self) -> bool {
        self.is_calculating
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The path, when one was found.
    pub fn path(&self) -> Option<&ShortestPath> {
        match &self.status {
            PathStatus::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            PathStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Choose endpoints. Any previous result is dropped and any in-flight
    /// request becomes stale.
    pub fn set_endpoints(&mut self, start: Option<String>, end: Option<String>) {
        self.start = start;
        self.end = end;
        self.status = PathStatus::NotCalculated;
        self.is_calculating = false;
        self.generation += 1;
    }

    /// Issue a new request against `graph`.
    ///
    /// Local validation failures are recorded immediately and yield no ticket.
    /// Either way every earlier ticket is invalidated.
    pub fn begin(&mut self, graph: &Graph) -> Option<PathTicket> {
        self.generation += 1;
        let query = PathQuery::from_graph(
            graph,
            self.start.clone().unwrap_or_default(),
            self.end.clone().unwrap_or_default(),
        );
        if let Err(e) = query.validate() {
            debug!(error = %e, "shortest path rejected locally");
            self.status = PathStatus::Failed(e.to_string());
            self.is_calculating = false;
            return None;
        }

        self.status = PathStatus::NotCalculated;
        self.is_calculating = true;
        Some(PathTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply a response. Returns false, changing nothing, if `ticket` has been
    /// superseded.
    pub fn finish(&mut self, ticket: PathTicket, result: ClientResult<ShortestPath>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "discarding stale shortest path response"
            );
            return false;
        }
        self.is_calculating = false;
        self.status = match result {
            Ok(path) => PathStatus::Found(path),
            Err(e) => PathStatus::Failed(e.to_string()),
        };
        true
    }

    /// Forget endpoints and result; in-flight requests become stale.
    pub fn clear(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}
