//! Force-relaxation layout for graphwalk.
//!
//! Positions are computed from edge connectivity alone: nodes start at seeded
//! random positions inside a rectangle, then a fixed number of iterations
//! apply pairwise repulsion and edge attraction, clamping every node back into
//! the rectangle after each iteration. There is no convergence test; the
//! iteration budget is the only stopping rule.

pub mod config;
pub mod error;
pub mod layout;
pub mod solve;

pub use config::{LayoutConfig, SeedPolicy};
pub use error::{LayoutError, LayoutResult};
pub use layout::{Bounds, Layout};
pub use solve::{LayoutProgress, solve_layout, solve_layout_with_progress};
