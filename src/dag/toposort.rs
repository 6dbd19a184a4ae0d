// src/dag/toposort.rs

//! Depth-first topological sort with three-colour cycle detection.
//!
//! The traversal keeps its own frame stack, so arbitrarily long chains are
//! sorted without recursing.

use tracing::{debug, trace};

use crate::dag::graph::TaskGraph;
use crate::dag::task::{TaskIndex, VisitState};
use crate::errors::{CritpathError, Result};

#[derive(Debug, Clone, Copy)]
struct Frame {
    task: TaskIndex,
    /// Position of the next successor to look at.
    next_successor: usize,
}

/// Order every task so that each predecessor comes before its successors.
///
/// Roots are taken in arena order and successors in successor-list order, so
/// the result is deterministic for a given input. On a cycle the whole sort
/// is abandoned and [`CritpathError::CycleDetected`] is returned.
pub fn topological_sort(graph: &mut TaskGraph) -> Result<Vec<TaskIndex>> {
    graph.reset_visit_state();

    let mut finished: Vec<TaskIndex> = Vec::with_capacity(graph.len());
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.indices() {
        if graph.task(root).visit_state != VisitState::Unvisited {
            continue;
        }

        graph.task_mut(root).visit_state = VisitState::InProgress;
        stack.push(Frame {
            task: root,
            next_successor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let current = frame.task;
            let successors = graph.successors_of(current);

            if frame.next_successor >= successors.len() {
                graph.task_mut(current).visit_state = VisitState::Done;
                finished.push(current);
                stack.pop();
                continue;
            }

            let succ = successors[frame.next_successor];
            frame.next_successor += 1;

            match graph.task(succ).visit_state {
                VisitState::Done => {}
                VisitState::Unvisited => {
                    trace!(from = %graph.task(current).id, to = %graph.task(succ).id, "descending");
                    graph.task_mut(succ).visit_state = VisitState::InProgress;
                    stack.push(Frame {
                        task: succ,
                        next_successor: 0,
                    });
                }
                VisitState::InProgress => {
                    return Err(cycle_error(graph, &stack, current, succ));
                }
            }
        }
    }

    if finished.len() != graph.len() {
        return Err(CritpathError::Internal(format!(
            "topological sort finished {} of {} tasks",
            finished.len(),
            graph.len()
        )));
    }

    finished.reverse();
    debug!(tasks = finished.len(), "topological order computed");
    Ok(finished)
}

/// Build the error for the back edge `current -> succ`.
///
/// `succ` is still on the stack, so the cycle is the stack slice from `succ`
/// up to `current`, closed by `succ` again.
fn cycle_error(graph: &TaskGraph, stack: &[Frame], current: TaskIndex, succ: TaskIndex) -> CritpathError {
    let start = stack
        .iter()
        .position(|f| f.task == succ)
        .unwrap_or(stack.len().saturating_sub(1));

    let mut cycle: Vec<String> = stack[start..]
        .iter()
        .map(|f| graph.task(f.task).id.clone())
        .collect();
    cycle.push(graph.task(succ).id.clone());

    debug!(cycle = ?cycle, "cycle detected");

    CritpathError::CycleDetected {
        from: graph.task(current).id.clone(),
        to: graph.task(succ).id.clone(),
        cycle,
    }
}
