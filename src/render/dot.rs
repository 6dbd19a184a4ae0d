// src/render/dot.rs

//! Graphviz DOT output built on `petgraph::dot`.

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::engine::Schedule;
use crate::errors::{CritpathError, Result};

/// Render `schedule` as a DOT digraph.
///
/// Node weights are positions in `schedule.tasks`; edge weights carry the
/// criticality flag. Critical nodes and edges are drawn red and bold.
/// Attribute strings end in a space because `Dot` writes `]` right after them.
pub fn render_dot(schedule: &Schedule) -> Result<String> {
    let mut graph: DiGraph<usize, bool> = DiGraph::with_capacity(schedule.tasks.len(), schedule.edges.len());
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::with_capacity(schedule.tasks.len());

    for (pos, task) in schedule.tasks.iter().enumerate() {
        nodes.insert(task.id.as_str(), graph.add_node(pos));
    }

    for edge in &schedule.edges {
        let (Some(&from), Some(&to)) = (nodes.get(edge.from.as_str()), nodes.get(edge.to.as_str())) else {
            return Err(CritpathError::Render(format!(
                "edge {} -> {} references a task missing from the schedule",
                edge.from, edge.to
            )));
        };
        graph.add_edge(from, to, edge.is_critical);
    }

    let node_attrs = |_, (_, &pos): (NodeIndex, &usize)| node_attributes(schedule, pos);
    let dot = Dot::with_attr_getters(
        &graph,
        &[Config::NodeNoLabel, Config::EdgeNoLabel],
        &|_, edge| {
            if *edge.weight() {
                "color = red, style = bold ".to_string()
            } else {
                String::new()
            }
        },
        &node_attrs,
    );

    Ok(format!("{dot}"))
}

fn node_attributes(schedule: &Schedule, pos: usize) -> String {
    let t = &schedule.tasks[pos];
    let label = format!(
        "{} ({})\\nES {} EF {}\\nLS {} LF {}\\nslack {}",
        escape(&t.id),
        t.duration,
        t.earliest_start,
        t.earliest_finish,
        t.latest_start,
        t.latest_finish,
        t.slack
    );
    if t.is_critical {
        format!("label = \"{label}\", shape = box, color = red, style = bold ")
    } else {
        format!("label = \"{label}\", shape = box ")
    }
}

fn escape(id: &str) -> String {
    id.replace('\\', "\\\\").replace('"', "\\\"")
}
