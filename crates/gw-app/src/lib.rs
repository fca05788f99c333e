//! Application service layer for graphwalk.
//!
//! [`Session`] is the single state container a frontend drives: it owns the
//! loaded graph, its layout, the traversal engine and the state of the two
//! remote queries. Every reload tears all of it down together.

pub mod classification;
pub mod config;
pub mod error;
pub mod session;
pub mod shortest_path;

pub use classification::{ClassificationState, ClassifyTicket};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::Session;
pub use shortest_path::{PathStatus, PathTicket, ShortestPathState};
