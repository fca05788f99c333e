//! Observable traversal state.

use std::collections::{HashSet, VecDeque};

use gw_core::{EdgeId, NodeId};
use gw_graph::Graph;

use crate::algorithm::Algorithm;
use crate::frame::{BfsFrame, DfsFrame, Pending};

/// Coarse phase published for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalPhase {
    #[default]
    Idle,
    /// A node was just visited.
    Visiting,
    /// An edge to a child was just taken.
    Exploring,
    /// Returning towards the root.
    Backtracking,
    Complete,
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not running, already complete, or no traversal configured.
    Ignored,
    /// `node` was marked visited; `via` is the edge it was reached by (BFS only).
    Visited {
        node: NodeId,
        via: Option<EdgeId>,
    },
    /// A frame for an already-visited node was discarded.
    Skipped { node: NodeId },
    /// DFS took the edge from `from` down to `to`.
    Descended {
        from: NodeId,
        to: NodeId,
        edge: Option<EdgeId>,
    },
    /// DFS ran out of unvisited children at `node`.
    ChildrenExhausted { node: NodeId },
    /// DFS returned from `from` to `to` (`None` when leaving the root).
    Backtracked {
        from: NodeId,
        to: Option<NodeId>,
        edge: Option<EdgeId>,
    },
    /// The pending container was already empty.
    Completed,
}

/// Partial update merged into a [`TraversalState`].
///
/// Unset fields are left untouched. For the two optional cursors the outer
/// `Option` means "change this field" and the inner one is the new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TraversalPatch {
    current: Option<Option<NodeId>>,
    current_edge: Option<Option<EdgeId>>,
    is_running: Option<bool>,
    is_complete: Option<bool>,
    is_auto_playing: Option<bool>,
    phase: Option<TraversalPhase>,
}

impl TraversalPatch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(mut self, node: Option<NodeId>) -> Self {
        self.current = Some(node);
        self
    }

    pub(crate) fn current_edge(mut self, edge: Option<EdgeId>) -> Self {
        self.current_edge = Some(edge);
        self
    }

    pub(crate) fn running(mut self, v: bool) -> Self {
        self.is_running = Some(v);
        self
    }

    pub(crate) fn complete(mut self, v: bool) -> Self {
        self.is_complete = Some(v);
        self
    }

    pub(crate) fn auto_playing(mut self, v: bool) -> Self {
        self.is_auto_playing = Some(v);
        self
    }

    pub(crate) fn phase(mut self, phase: TraversalPhase) -> Self {
        self.phase = Some(phase);
        self
    }
}

/// Everything the renderer needs to draw the current traversal.
///
/// Only the engine mutates this; readers get accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    visited: HashSet<NodeId>,
    visit_order: Vec<NodeId>,
    current: Option<NodeId>,
    current_edge: Option<EdgeId>,
    pending: Pending,
    is_running: bool,
    is_complete: bool,
    is_auto_playing: bool,
    phase: TraversalPhase,
}

impl Default for TraversalState {
    fn default() -> Self {
        Self::idle(Algorithm::default())
    }
}

impl TraversalState {
    /// Initial empty form for `algorithm`.
    pub fn idle(algorithm: Algorithm) -> Self {
        Self {
            visited: HashSet::new(),
            visit_order: Vec::new(),
            current: None,
            current_edge: None,
            pending: Pending::empty(algorithm),
            is_running: false,
            is_complete: false,
            is_auto_playing: false,
            phase: TraversalPhase::Idle,
        }
    }

    /// Running state with only the root frame pending.
    pub(crate) fn seeded(algorithm: Algorithm, root: NodeId) -> Self {
        Self {
            pending: Pending::seeded(algorithm, root),
            is_running: true,
            ..Self::idle(algorithm)
        }
    }

    pub fn visited(&self) -> &HashSet<NodeId> {
        &self.visited
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn current_edge(&self) -> Option<EdgeId> {
        self.current_edge
    }

    pub fn pending(&self) -> &Pending {
        &self.pending
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn is_auto_playing(&self) -> bool {
        self.is_auto_playing
    }

    pub fn phase(&self) -> TraversalPhase {
        self.phase
    }

    /// Visit order as `"A → B → C"`.
    pub fn visit_path(&self, graph: &Graph) -> String {
        self.visit_order
            .iter()
            .map(|&id| graph.name(id))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    pub(crate) fn apply(&mut self, patch: TraversalPatch) {
        if let Some(v) = patch.current {
            self.current = v;
        }
        if let Some(v) = patch.current_edge {
            self.current_edge = v;
        }
        if let Some(v) = patch.is_running {
            self.is_running = v;
        }
        if let Some(v) = patch.is_complete {
            self.is_complete = v;
        }
        if let Some(v) = patch.is_auto_playing {
            self.is_auto_playing = v;
        }
        if let Some(v) = patch.phase {
            self.phase = v;
        }
    }

    /// Record a first visit. Returns false if `node` was already visited.
    pub(crate) fn mark_visited(&mut self, node: NodeId) -> bool {
        if !self.visited.insert(node) {
            return false;
        }
        self.visit_order.push(node);
        true
    }

    /// Terminal transition shared by both algorithms.
    pub(crate) fn finish(&mut self) {
        self.apply(
            TraversalPatch::new()
                .complete(true)
                .running(false)
                .current(None)
                .current_edge(None)
                .phase(TraversalPhase::Complete),
        );
    }

    pub(crate) fn queue_mut(&mut self) -> Option<&mut VecDeque<BfsFrame>> {
        match &mut self.pending {
            Pending::Queue(q) => Some(q),
            Pending::Stack(_) => None,
        }
    }

    pub(crate) fn stack_mut(&mut self) -> Option<&mut Vec<DfsFrame>> {
        match &mut self.pending {
            Pending::Stack(s) => Some(s),
            Pending::Queue(_) => None,
        }
    }
}
