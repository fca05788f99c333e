//! One DFS step.
//!
//! Each call pops the top frame, advances it by exactly one phase action and
//! pushes it back if it is still live. The sequence of highlighted edges is the
//! one a recursive DFS would draw: each tree edge once on the way down and once
//! on the way back up.

use gw_graph::{AdjacencyView, Graph};

use crate::frame::{DfsFrame, DfsPhase};
use crate::state::{StepOutcome, TraversalPatch, TraversalPhase, TraversalState};

pub(crate) fn step(state: &mut TraversalState, graph: &Graph, adj: &AdjacencyView) -> StepOutcome {
    let Some(mut frame) = state.stack_mut().and_then(|s| s.pop()) else {
        state.finish();
        return StepOutcome::Completed;
    };

    match frame.phase {
        DfsPhase::Start => {
            let node = frame.node;
            if !state.mark_visited(node) {
                return finish_if_drained(state, StepOutcome::Skipped { node });
            }
            frame.children = adj
                .neighbors(node)
                .iter()
                .copied()
                .filter(|&n| !state.is_visited(n))
                .collect();
            frame.next_child = 0;
            frame.phase = DfsPhase::Exploring;
            state.apply(
                TraversalPatch::new()
                    .current(Some(node))
                    .current_edge(None)
                    .phase(TraversalPhase::Visiting),
            );
            push(state, frame);
            StepOutcome::Visited { node, via: None }
        }
        DfsPhase::Exploring => {
            let node = frame.node;
            while frame
                .children
                .get(frame.next_child)
                .is_some_and(|&c| state.is_visited(c))
            {
                frame.next_child += 1;
            }

            match frame.children.get(frame.next_child).copied() {
                Some(child) => {
                    frame.next_child += 1;
                    let edge = graph.edge_between(node, child).map(|e| e.id);
                    state.apply(
                        TraversalPatch::new()
                            .current(Some(node))
                            .current_edge(edge)
                            .phase(TraversalPhase::Exploring),
                    );
                    push(state, frame);
                    push(state, DfsFrame::start(child, Some(node)));
                    StepOutcome::Descended {
                        from: node,
                        to: child,
                        edge,
                    }
                }
                None => {
                    frame.phase = DfsPhase::Backtracking;
                    state.apply(
                        TraversalPatch::new()
                            .current(Some(node))
                            .phase(TraversalPhase::Backtracking),
                    );
                    push(state, frame);
                    StepOutcome::ChildrenExhausted { node }
                }
            }
        }
        DfsPhase::Backtracking => {
            let edge = frame
                .parent
                .and_then(|p| graph.edge_between(p, frame.node))
                .map(|e| e.id);
            state.apply(
                TraversalPatch::new()
                    .current(frame.parent)
                    .current_edge(edge)
                    .phase(TraversalPhase::Backtracking),
            );
            finish_if_drained(
                state,
                StepOutcome::Backtracked {
                    from: frame.node,
                    to: frame.parent,
                    edge,
                },
            )
        }
    }
}

fn push(state: &mut TraversalState, frame: DfsFrame) {
    if let Some(stack) = state.stack_mut() {
        stack.push(frame);
    }
}

fn finish_if_drained(state: &mut TraversalState, outcome: StepOutcome) -> StepOutcome {
    if state.pending().is_empty() {
        state.finish();
    }
    outcome
}
