// src/dag/graph.rs

use std::collections::HashMap;

use serde::Serialize;

use crate::dag::task::{Task, TaskIndex, VisitState};
use crate::types::TaskId;

/// A predecessor id that did not resolve to any task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingRef {
    /// The task whose precedence list contains the unknown id.
    pub task: TaskId,
    pub missing: TaskId,
}

/// Precedence graph stored as a dense arena.
///
/// Tasks are addressed by [`TaskIndex`]; the id lookup table is built once by
/// the [`GraphBuilder`](crate::dag::GraphBuilder), so the timing passes never
/// hash ids. Arena order is input order (first occurrence of each id) and
/// drives the sorter's root iteration.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<TaskId, TaskIndex>,
    dangling: Vec<DanglingRef>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index for `id`, if the task exists.
    pub fn index_of(&self, id: &str) -> Option<TaskIndex> {
        self.index.get(id).copied()
    }

    pub fn task(&self, idx: TaskIndex) -> &Task {
        &self.tasks[idx]
    }

    pub fn task_mut(&mut self, idx: TaskIndex) -> &mut Task {
        &mut self.tasks[idx]
    }

    /// Look a task up by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.index_of(id).map(|idx| &self.tasks[idx])
    }

    /// All tasks in arena order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn indices(&self) -> std::ops::Range<TaskIndex> {
        0..self.tasks.len()
    }

    /// Direct predecessors of a task (tasks listed in its precedence).
    pub fn predecessors_of(&self, idx: TaskIndex) -> &[TaskIndex] {
        &self.tasks[idx].predecessors
    }

    /// Direct successors of a task (tasks that list it as a predecessor).
    pub fn successors_of(&self, idx: TaskIndex) -> &[TaskIndex] {
        &self.tasks[idx].successors
    }

    /// Map a list of indices back to ids.
    pub fn ids(&self, indices: &[TaskIndex]) -> Vec<TaskId> {
        indices.iter().map(|&i| self.tasks[i].id.clone()).collect()
    }

    /// Predecessor ids that did not resolve, as recorded by the builder
    /// (only populated under `DanglingPolicy::Warn`).
    pub fn dangling_references(&self) -> &[DanglingRef] {
        &self.dangling
    }

    pub fn reset_visit_state(&mut self) {
        for task in &mut self.tasks {
            task.visit_state = VisitState::Unvisited;
        }
    }

    pub fn clear_timings(&mut self) {
        for task in &mut self.tasks {
            task.clear_timings();
        }
    }

    /// Insert a new task at the end of the arena.
    pub(crate) fn push(&mut self, task: Task) -> TaskIndex {
        let idx = self.tasks.len();
        self.index.insert(task.id.clone(), idx);
        self.tasks.push(task);
        idx
    }

    pub(crate) fn record_dangling(&mut self, dangling: DanglingRef) {
        self.dangling.push(dangling);
    }
}
