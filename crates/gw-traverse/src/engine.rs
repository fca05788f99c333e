//! Traversal engine: configuration, stepping and auto-play.

use std::time::Duration;

use gw_core::NodeId;
use gw_graph::{AdjacencyView, Graph};
use tracing::{debug, info};

use crate::algorithm::Algorithm;
use crate::autoplay::{AutoPlay, DEFAULT_AUTO_PLAY_INTERVAL};
use crate::state::{StepOutcome, TraversalPatch, TraversalState};
use crate::{bfs, dfs};

/// Owns one traversal run and the timer that may be driving it.
///
/// The graph is borrowed per call rather than stored; callers must `reset`
/// (or change root/algorithm) whenever the graph is replaced, since frames
/// hold ids that are only valid for the graph they were built from.
#[derive(Debug)]
pub struct TraversalEngine {
    algorithm: Algorithm,
    root: Option<NodeId>,
    state: TraversalState,
    auto_play: Option<AutoPlay>,
    interval: Duration,
}

impl Default for TraversalEngine {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl TraversalEngine {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            root: None,
            state: TraversalState::idle(algorithm),
            auto_play: None,
            interval: DEFAULT_AUTO_PLAY_INTERVAL,
        }
    }

    /// Set the auto-play period used by the next `start_auto_play`.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play.is_some()
    }

    /// Switch algorithm. A change stops any run and returns to idle.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm != self.algorithm {
            self.algorithm = algorithm;
            self.reset();
        }
    }

    /// Choose (or clear) the root. A change stops any run and returns to idle.
    pub fn set_root(&mut self, root: Option<NodeId>) {
        if root != self.root {
            self.root = root;
            self.reset();
        }
    }

    /// Begin a fresh run from the root.
    ///
    /// Returns false, leaving the engine idle, when no root is set or the root
    /// is not a node of `graph`.
    pub fn start(&mut self, graph: &Graph) -> bool {
        self.reset();
        let Some(root) = self.root.filter(|&r| graph.node(r).is_some()) else {
            debug!("traversal start ignored: no root");
            return false;
        };
        self.state = TraversalState::seeded(self.algorithm, root);
        info!(algorithm = %self.algorithm, root = graph.name(root), "traversal started");
        true
    }

    /// Advance the run by one unit of work.
    pub fn step(&mut self, graph: &Graph) -> StepOutcome {
        if !self.state.is_running() || self.state.is_complete() {
            return StepOutcome::Ignored;
        }

        let adj = AdjacencyView::build(graph);
        let outcome = match self.algorithm {
            Algorithm::Bfs => bfs::step(&mut self.state, graph, &adj),
            Algorithm::Dfs => dfs::step(&mut self.state, graph, &adj),
        };
        debug!(?outcome, pending = self.state.pending().len(), "traversal step");

        if self.state.is_complete() {
            info!(
                visited = self.state.visit_order().len(),
                path = %self.state.visit_path(graph),
                "traversal complete"
            );
            self.stop_auto_play();
        }
        outcome
    }

    /// Clear all traversal state and release any timer.
    pub fn reset(&mut self) {
        self.auto_play = None;
        self.state = TraversalState::idle(self.algorithm);
    }

    /// Start a fresh run and drive it from a timer.
    ///
    /// Must be called from within a Tokio runtime. Returns false if the run
    /// could not start (no root).
    pub fn start_auto_play(&mut self, graph: &Graph) -> bool {
        if !self.start(graph) {
            return false;
        }
        self.auto_play = Some(AutoPlay::start(self.interval));
        self.state.apply(TraversalPatch::new().auto_playing(true));
        true
    }

    /// Release the timer. The run itself is left where it is.
    pub fn stop_auto_play(&mut self) {
        if self.auto_play.take().is_some() {
            self.state.apply(TraversalPatch::new().auto_playing(false));
        }
    }

    /// Wait for the next timer tick, then step.
    ///
    /// Returns `None` immediately when auto-play is not active, which is the
    /// signal for a driver loop to exit.
    pub async fn tick(&mut self, graph: &Graph) -> Option<StepOutcome> {
        self.auto_play.as_mut()?.tick().await;
        Some(self.step(graph))
    }
}
