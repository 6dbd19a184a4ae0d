// src/dag/task.rs

//! Per-task record stored in the graph arena.

use crate::types::TaskId;

/// Stable position of a task inside [`TaskGraph`](crate::dag::TaskGraph).
pub type TaskIndex = usize;

/// Traversal marker used by the topological sorter.
///
/// Reset to `Unvisited` before every sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// A node of the precedence graph.
///
/// Timing fields stay `None` until the corresponding pass has run over the
/// task in the current computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub duration: i64,

    /// Predecessor ids exactly as declared (trimmed, de-duplicated), including
    /// ids that name no task.
    pub declared_predecessors: Vec<TaskId>,
    /// Resolved predecessors present in the graph.
    pub predecessors: Vec<TaskIndex>,
    /// Derived: every task that lists this one as a predecessor.
    pub successors: Vec<TaskIndex>,

    pub earliest_start: Option<i64>,
    pub earliest_finish: Option<i64>,
    pub latest_start: Option<i64>,
    pub latest_finish: Option<i64>,
    pub slack: Option<i64>,

    pub visit_state: VisitState,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, duration: i64, declared_predecessors: Vec<TaskId>) -> Self {
        Self {
            id: id.into(),
            duration,
            declared_predecessors,
            predecessors: Vec::new(),
            successors: Vec::new(),
            earliest_start: None,
            earliest_finish: None,
            latest_start: None,
            latest_finish: None,
            slack: None,
            visit_state: VisitState::Unvisited,
        }
    }

    pub fn is_sink(&self) -> bool {
        self.successors.is_empty()
    }

    /// `true` once both passes have run and slack is zero.
    pub fn is_critical(&self) -> bool {
        self.slack == Some(0)
    }

    /// Forget every computed time.
    pub fn clear_timings(&mut self) {
        self.earliest_start = None;
        self.earliest_finish = None;
        self.latest_start = None;
        self.latest_finish = None;
        self.slack = None;
    }
}
