//! Units of pending traversal work.

use std::collections::VecDeque;

use gw_core::NodeId;

use crate::algorithm::Algorithm;

/// A node scheduled for a BFS visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsFrame {
    pub node: NodeId,
    pub parent: Option<NodeId>,
}

/// Sub-state of a DFS frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsPhase {
    /// Not yet visited.
    Start,
    /// Visited; descending into children one per step.
    Exploring,
    /// All children done; next step returns to the parent.
    Backtracking,
}

/// One activation of a recursive DFS, reified.
///
/// `children` is the unvisited-neighbor list taken at visit time. A child can
/// become visited through a sibling subtree before the cursor reaches it, so
/// the cursor skips visited children rather than trusting the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsFrame {
    pub node: NodeId,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub next_child: usize,
    pub phase: DfsPhase,
}

impl DfsFrame {
    pub fn start(node: NodeId, parent: Option<NodeId>) -> Self {
        Self {
            node,
            parent,
            children: Vec::new(),
            next_child: 0,
            phase: DfsPhase::Start,
        }
    }
}

/// Pending-frame container: a queue for BFS, a stack for DFS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    Queue(VecDeque<BfsFrame>),
    Stack(Vec<DfsFrame>),
}

impl Pending {
    pub fn empty(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => Pending::Queue(VecDeque::new()),
            Algorithm::Dfs => Pending::Stack(Vec::new()),
        }
    }

    /// Container holding only the root frame.
    pub fn seeded(algorithm: Algorithm, root: NodeId) -> Self {
        match algorithm {
            Algorithm::Bfs => Pending::Queue(VecDeque::from([BfsFrame {
                node: root,
                parent: None,
            }])),
            Algorithm::Dfs => Pending::Stack(vec![DfsFrame::start(root, None)]),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Pending::Queue(q) => q.len(),
            Pending::Stack(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `node` already has a frame waiting.
    pub fn contains(&self, node: NodeId) -> bool {
        match self {
            Pending::Queue(q) => q.iter().any(|f| f.node == node),
            Pending::Stack(s) => s.iter().any(|f| f.node == node),
        }
    }
}
