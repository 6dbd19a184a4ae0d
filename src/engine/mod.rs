// src/engine/mod.rs

//! CPM timing engine.
//!
//! - [`forward`] computes earliest times and the project duration.
//! - [`backward`] computes latest times and slack.
//! - [`critical`] extracts the critical tasks, chain and edges.
//! - [`core`] chains everything into one run producing a [`Schedule`].

use serde::Serialize;

use crate::dag::DanglingRef;
use crate::types::TaskId;

/// Computed times for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub duration: i64,
    pub earliest_start: i64,
    pub earliest_finish: i64,
    pub latest_start: i64,
    pub latest_finish: i64,
    pub slack: i64,
    pub is_critical: bool,
}

/// A precedence edge `from -> to` with its criticality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEdge {
    pub from: TaskId,
    pub to: TaskId,
    pub is_critical: bool,
}

/// Immutable result of a successful pipeline run.
///
/// `tasks` and `edges` follow `topological_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub project_duration: i64,
    pub topological_order: Vec<TaskId>,
    pub critical_path: Vec<TaskId>,
    pub tasks: Vec<ScheduledTask>,
    pub edges: Vec<ScheduleEdge>,
    pub dangling_references: Vec<DanglingRef>,
}

impl Schedule {
    pub fn task(&self, id: &str) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

pub mod backward;
pub mod core;
pub mod critical;
pub mod forward;

pub use backward::backward_pass;
pub use self::core::compute_schedule;
pub use critical::{critical_chain, critical_tasks, is_critical_edge};
pub use forward::{forward_pass, project_duration};
