// src/render/table.rs

//! Fixed-width console table.

use std::fmt::Write as _;

use crate::engine::Schedule;

const HEADERS: [&str; 8] = ["Task", "Dur", "ES", "EF", "LS", "LF", "Slack", "Critical"];

/// Render `schedule` as a text table in topological order, preceded by the
/// order itself and followed by the project duration and the critical
/// sequence.
pub fn render_table(schedule: &Schedule) -> String {
    let rows: Vec<[String; 8]> = schedule
        .tasks
        .iter()
        .map(|t| {
            [
                t.id.clone(),
                t.duration.to_string(),
                t.earliest_start.to_string(),
                t.earliest_finish.to_string(),
                t.latest_start.to_string(),
                t.latest_finish.to_string(),
                t.slack.to_string(),
                if t.is_critical { "yes" } else { "" }.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 8] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Topological order: {}", schedule.topological_order.join(" -> "));
    out.push('\n');

    push_row(&mut out, &HEADERS.map(String::from), &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push('\n');
    let _ = writeln!(out, "Project duration: {}", schedule.project_duration);
    let _ = writeln!(out, "Critical path: {}", schedule.critical_path.join(" -> "));

    if !schedule.dangling_references.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Unknown predecessors (ignored):");
        for d in &schedule.dangling_references {
            let _ = writeln!(out, "  {} -> {}", d.missing, d.task);
        }
    }

    out
}

/// Task id left-aligned, numbers right-aligned.
fn push_row(out: &mut String, cells: &[String; 8], widths: &[usize; 8]) {
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(col, (cell, &w))| {
            if col == 0 || col == 7 {
                format!("{cell:<w$}")
            } else {
                format!("{cell:>w$}")
            }
        })
        .collect();
    let _ = writeln!(out, "{}", formatted.join(" | ").trim_end());
}
