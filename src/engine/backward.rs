// src/engine/backward.rs

use tracing::{debug, trace};

use crate::dag::{TaskGraph, TaskIndex};
use crate::errors::{CritpathError, Result};

/// Backward pass: latest start/finish and slack, walking `order` in reverse.
///
/// Sinks finish at `project_duration`; every other task must finish by the
/// earliest latest-start of its successors. Requires a completed forward
/// pass. Negative slack means the input is inconsistent and aborts the run.
pub fn backward_pass(graph: &mut TaskGraph, order: &[TaskIndex], project_duration: i64) -> Result<()> {
    for &idx in order.iter().rev() {
        let latest_finish = if graph.task(idx).is_sink() {
            project_duration
        } else {
            let mut latest_finish = i64::MAX;
            for &succ in graph.successors_of(idx) {
                let succ_task = graph.task(succ);
                let start = succ_task.latest_start.ok_or_else(|| {
                    CritpathError::Internal(format!(
                        "latest start of '{}' read before it was computed (needed by '{}')",
                        succ_task.id,
                        graph.task(idx).id
                    ))
                })?;
                latest_finish = latest_finish.min(start);
            }
            latest_finish
        };

        let task = graph.task_mut(idx);
        let earliest_start = task.earliest_start.ok_or_else(|| {
            CritpathError::Internal(format!(
                "backward pass reached '{}' before the forward pass",
                task.id
            ))
        })?;
        let latest_start = latest_finish.checked_sub(task.duration).ok_or_else(|| {
            CritpathError::Overflow(format!("latest start of '{}'", task.id))
        })?;
        let slack = latest_start.checked_sub(earliest_start).ok_or_else(|| {
            CritpathError::Overflow(format!("slack of '{}'", task.id))
        })?;

        if slack < 0 {
            return Err(CritpathError::NegativeSlack {
                task: task.id.clone(),
                slack,
            });
        }

        task.latest_finish = Some(latest_finish);
        task.latest_start = Some(latest_start);
        task.slack = Some(slack);
        trace!(task = %task.id, ls = latest_start, lf = latest_finish, slack, "backward");
    }

    debug!(tasks = order.len(), project_duration, "backward pass complete");
    Ok(())
}
