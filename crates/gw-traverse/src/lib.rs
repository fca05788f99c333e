//! Resumable breadth-first and depth-first traversal.
//!
//! Provides:
//! - A step function that does one observable unit of work per call
//! - DFS expressed as explicit `Start` / `Exploring` / `Backtracking` frames so
//!   it can stop between any two visual updates and resume later
//! - BFS over a pending queue with idempotent revisits
//! - A scoped auto-play timer that drives the same step function
//!
//! The engine never recurses and never blocks; every call to
//! [`TraversalEngine::step`] returns after a bounded amount of work.

pub mod algorithm;
pub mod autoplay;
mod bfs;
mod dfs;
pub mod engine;
pub mod error;
pub mod frame;
pub mod state;

pub use algorithm::Algorithm;
pub use autoplay::{AutoPlay, DEFAULT_AUTO_PLAY_INTERVAL};
pub use engine::TraversalEngine;
pub use error::{TraverseError, TraverseResult};
pub use frame::{BfsFrame, DfsFrame, DfsPhase, Pending};
pub use state::{StepOutcome, TraversalPhase, TraversalState};
