// src/engine/core.rs

//! The scheduling pipeline.
//!
//! Runs sort, forward pass, project duration, backward pass and critical path
//! extraction in that order over a [`TaskGraph`], and snapshots the result
//! into an immutable [`Schedule`]. Any failure aborts the run: callers get a
//! complete schedule or an error, never a partial one.

use tracing::{debug, info};

use crate::dag::{TaskGraph, TaskIndex, topological_sort};
use crate::engine::backward::backward_pass;
use crate::engine::critical::{critical_chain, critical_tasks, is_critical_edge};
use crate::engine::forward::{forward_pass, project_duration};
use crate::engine::{Schedule, ScheduleEdge, ScheduledTask};
use crate::errors::{CritpathError, Result};
use crate::types::CriticalPathMode;

/// Compute a full CPM schedule.
///
/// Timing attributes on `graph` are cleared first, so running this twice on
/// the same graph yields identical schedules. On any error they are cleared
/// again before returning, so a failed run leaves every timing attribute
/// `None`.
pub fn compute_schedule(graph: &mut TaskGraph, mode: CriticalPathMode) -> Result<Schedule> {
    graph.clear_timings();

    let result = run_passes(graph, mode);
    if let Err(err) = &result {
        debug!(error = %err, "schedule run failed; discarding computed times");
        graph.clear_timings();
    }
    result
}

fn run_passes(graph: &mut TaskGraph, mode: CriticalPathMode) -> Result<Schedule> {
    let order = topological_sort(graph)?;
    forward_pass(graph, &order)?;
    let duration = project_duration(graph)?;
    backward_pass(graph, &order, duration)?;

    let critical = match mode {
        CriticalPathMode::AllZeroSlack => critical_tasks(graph, &order),
        CriticalPathMode::Chain => critical_chain(graph, &order),
    };

    let schedule = snapshot(graph, &order, duration, &critical)?;

    info!(
        tasks = schedule.tasks.len(),
        project_duration = schedule.project_duration,
        critical_path = %schedule.critical_path.join(" -> "),
        "schedule computed"
    );
    Ok(schedule)
}

fn snapshot(
    graph: &TaskGraph,
    order: &[TaskIndex],
    project_duration: i64,
    critical: &[TaskIndex],
) -> Result<Schedule> {
    let mut tasks = Vec::with_capacity(order.len());
    let mut edges = Vec::new();

    for &idx in order {
        let task = graph.task(idx);
        let missing = |what: &str| CritpathError::Internal(format!("{what} of '{}' not computed", task.id));

        tasks.push(ScheduledTask {
            id: task.id.clone(),
            duration: task.duration,
            earliest_start: task.earliest_start.ok_or_else(|| missing("earliest start"))?,
            earliest_finish: task.earliest_finish.ok_or_else(|| missing("earliest finish"))?,
            latest_start: task.latest_start.ok_or_else(|| missing("latest start"))?,
            latest_finish: task.latest_finish.ok_or_else(|| missing("latest finish"))?,
            slack: task.slack.ok_or_else(|| missing("slack"))?,
            is_critical: task.is_critical(),
        });

        for &succ in graph.successors_of(idx) {
            edges.push(ScheduleEdge {
                from: task.id.clone(),
                to: graph.task(succ).id.clone(),
                is_critical: is_critical_edge(graph, idx, succ),
            });
        }
    }

    debug!(edges = edges.len(), "schedule snapshot taken");

    Ok(Schedule {
        project_duration,
        topological_order: graph.ids(order),
        critical_path: graph.ids(critical),
        tasks,
        edges,
        dangling_references: graph.dangling_references().to_vec(),
    })
}
