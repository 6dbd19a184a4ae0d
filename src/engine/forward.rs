// src/engine/forward.rs

use tracing::{debug, trace};

use crate::dag::{TaskGraph, TaskIndex};
use crate::errors::{CritpathError, Result};

/// Forward pass: earliest start and finish for every task in `order`.
///
/// `order` must be a topological order of `graph`; a predecessor whose
/// earliest finish has not been computed yet is reported as an internal
/// error instead of being treated as zero.
pub fn forward_pass(graph: &mut TaskGraph, order: &[TaskIndex]) -> Result<()> {
    for &idx in order {
        let mut earliest_start: i64 = 0;

        for &pred in graph.predecessors_of(idx) {
            let pred_task = graph.task(pred);
            let finish = pred_task.earliest_finish.ok_or_else(|| {
                CritpathError::Internal(format!(
                    "earliest finish of '{}' read before it was computed (needed by '{}')",
                    pred_task.id,
                    graph.task(idx).id
                ))
            })?;
            earliest_start = earliest_start.max(finish);
        }

        let task = graph.task_mut(idx);
        let earliest_finish = earliest_start.checked_add(task.duration).ok_or_else(|| {
            CritpathError::Overflow(format!("earliest finish of '{}'", task.id))
        })?;

        task.earliest_start = Some(earliest_start);
        task.earliest_finish = Some(earliest_finish);
        trace!(task = %task.id, es = earliest_start, ef = earliest_finish, "forward");
    }

    debug!(tasks = order.len(), "forward pass complete");
    Ok(())
}

/// Project duration: the largest earliest finish among tasks with no
/// successors, or 0 for an empty graph.
pub fn project_duration(graph: &TaskGraph) -> Result<i64> {
    let mut duration: i64 = 0;

    for task in graph.tasks().filter(|t| t.is_sink()) {
        let finish = task.earliest_finish.ok_or_else(|| {
            CritpathError::Internal(format!(
                "project duration requested before forward pass reached '{}'",
                task.id
            ))
        })?;
        duration = duration.max(finish);
    }

    Ok(duration)
}
