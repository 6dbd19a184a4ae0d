// tests/integration/rendering.rs

use critpath::render::{render, render_dot, render_json, render_table};
use critpath::types::{DanglingPolicy, OutputFormat};
use critpath_test_utils::builders::diamond;
use critpath_test_utils::schedule_for;

#[test]
fn table_lists_tasks_in_topological_order() {
    let schedule = schedule_for(&diamond()).unwrap();
    let table = render_table(&schedule);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "Topological order: A -> C -> B -> D");
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("Task"));
    for header in ["Dur", "ES", "EF", "LS", "LF", "Slack", "Critical"] {
        assert!(lines[2].contains(header), "missing header {header}");
    }

    let first_cells: Vec<&str> = lines[4..8]
        .iter()
        .map(|l| l.split('|').next().unwrap().trim())
        .collect();
    assert_eq!(first_cells, vec!["A", "C", "B", "D"]);

    let c_row = lines[5];
    let cells: Vec<&str> = c_row.split('|').map(str::trim).collect();
    assert_eq!(cells, vec!["C", "1", "2", "3", "4", "5", "2", ""]);

    assert!(table.contains("Project duration: 9"));
    assert!(table.contains("Critical path: A -> B -> D"));
}

#[test]
fn table_mentions_recorded_dangling_references() {
    let project = diamond()
        .task("E", 1, "D, ghost")
        .dangling(DanglingPolicy::Warn);
    let schedule = schedule_for(&project).unwrap();

    let table = render_table(&schedule);
    assert!(table.contains("Unknown predecessors"));
    assert!(table.contains("ghost -> E"));
}

#[test]
fn dot_highlights_critical_nodes_and_edges() {
    let schedule = schedule_for(&diamond()).unwrap();
    let dot = render_dot(&schedule).unwrap();

    assert!(dot.starts_with("digraph"));
    assert_eq!(dot.matches("->").count(), 4);
    // three critical tasks plus two critical edges
    assert_eq!(dot.matches("style = bold").count(), 5);
    assert!(dot.contains("label = \"C (1)\\nES 2 EF 3\\nLS 4 LF 5\\nslack 2\", shape = box"));
}

#[test]
fn json_contains_whole_schedule() {
    let schedule = schedule_for(&diamond()).unwrap();
    let json = render_json(&schedule).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["project_duration"], 9);
    assert_eq!(value["critical_path"], serde_json::json!(["A", "B", "D"]));
    assert_eq!(value["topological_order"][1], "C");
    assert_eq!(value["tasks"].as_array().unwrap().len(), 4);
    assert_eq!(value["tasks"][1]["slack"], 2);
    assert_eq!(value["tasks"][1]["is_critical"], false);
    assert_eq!(value["edges"].as_array().unwrap().len(), 4);
    assert!(value["dangling_references"].as_array().unwrap().is_empty());
}

#[test]
fn render_dispatch_ends_with_newline() {
    let schedule = schedule_for(&diamond()).unwrap();
    for format in [OutputFormat::Table, OutputFormat::Dot, OutputFormat::Json] {
        let out = render(&schedule, format).unwrap();
        assert!(out.ends_with('\n'), "{format:?} output lacks trailing newline");
    }
}
