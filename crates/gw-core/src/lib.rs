//! gw-core: shared foundation for graphwalk.
//!
//! Contains:
//! - ids (compact ids for nodes and edges of a loaded graph)
//! - numeric (Real, tolerances, 2-D points)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use numeric::*;
