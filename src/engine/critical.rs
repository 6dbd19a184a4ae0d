// src/engine/critical.rs

//! Critical path extraction over a fully timed graph.

use crate::dag::{TaskGraph, TaskIndex};

/// Zero-slack tasks in the order they appear in `order`.
///
/// May span several parallel branches when more than one path is critical.
pub fn critical_tasks(graph: &TaskGraph, order: &[TaskIndex]) -> Vec<TaskIndex> {
    order
        .iter()
        .copied()
        .filter(|&idx| graph.task(idx).is_critical())
        .collect()
}

/// One connected critical chain.
///
/// Starts at the first critical task (in `order`) that begins at time 0 and
/// repeatedly steps to the critical successor that starts exactly when the
/// current task finishes, preferring the one earliest in `order`.
pub fn critical_chain(graph: &TaskGraph, order: &[TaskIndex]) -> Vec<TaskIndex> {
    let mut position = vec![usize::MAX; graph.len()];
    for (pos, &idx) in order.iter().enumerate() {
        position[idx] = pos;
    }

    let Some(mut current) = order.iter().copied().find(|&idx| {
        let task = graph.task(idx);
        task.is_critical() && task.earliest_start == Some(0)
    }) else {
        return Vec::new();
    };

    let mut chain = vec![current];
    while let Some(next) = graph
        .successors_of(current)
        .iter()
        .copied()
        .filter(|&succ| is_critical_edge(graph, current, succ))
        .min_by_key(|&succ| position[succ])
    {
        chain.push(next);
        current = next;
    }

    chain
}

/// An edge is critical when both ends are critical and the successor starts
/// exactly when the predecessor finishes.
pub fn is_critical_edge(graph: &TaskGraph, pred: TaskIndex, succ: TaskIndex) -> bool {
    let p = graph.task(pred);
    let s = graph.task(succ);
    p.is_critical()
        && s.is_critical()
        && p.earliest_finish.is_some()
        && p.earliest_finish == s.earliest_start
}
