//! HTTP clients for the graph services.
//!
//! Two remote operations are used by graphwalk:
//! - `POST /shortest_path`: unweighted shortest path between two nodes
//! - `POST /classify`: structural label for the whole graph (Tree/DAG/Cycle)
//!
//! plus `GET /health`. Requests are derived purely from their arguments; the
//! client keeps no per-request state, does not retry, and reports every
//! failure as a [`ClientError`] value.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod shortest_path;

pub use classify::{Classification, ClassifyRequest, GraphKind};
pub use client::ServiceClient;
pub use config::{BACKEND_URL_ENV, ClientConfig, DEFAULT_BACKEND_URL};
pub use error::{ClientError, ClientResult};
pub use shortest_path::{PathQuery, ShortestPath};
