//! One BFS step.

use gw_graph::{AdjacencyView, Graph};

use crate::frame::BfsFrame;
use crate::state::{StepOutcome, TraversalPatch, TraversalPhase, TraversalState};

/// Dequeue one frame and visit it.
///
/// A node is enqueued only if it is neither visited nor already queued, so a
/// stale frame should not occur; if one does it is discarded without touching
/// the visit order. The last visit stays current until the following step
/// finds the queue empty and completes.
pub(crate) fn step(state: &mut TraversalState, graph: &Graph, adj: &AdjacencyView) -> StepOutcome {
    let Some(BfsFrame { node, parent }) = state.queue_mut().and_then(|q| q.pop_front()) else {
        state.finish();
        return StepOutcome::Completed;
    };

    if state.mark_visited(node) {
        let via = parent
            .and_then(|p| graph.edge_between(p, node))
            .map(|e| e.id);

        for &next in adj.neighbors(node) {
            if state.is_visited(next) || state.pending().contains(next) {
                continue;
            }
            if let Some(queue) = state.queue_mut() {
                queue.push_back(BfsFrame {
                    node: next,
                    parent: Some(node),
                });
            }
        }

        state.apply(
            TraversalPatch::new()
                .current(Some(node))
                .current_edge(via)
                .phase(TraversalPhase::Visiting),
        );
        StepOutcome::Visited { node, via }
    } else {
        StepOutcome::Skipped { node }
    }
}
