pub mod builders;

use std::sync::Once;

use critpath::dag::{GraphBuilder, TaskGraph};
use critpath::engine::{Schedule, compute_schedule};
use critpath::types::CriticalPathMode;
use tracing_subscriber::{EnvFilter, fmt};

use crate::builders::ProjectBuilder;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .try_init();
    });
}

/// Build the graph for `project` with its own `[config]` options.
pub fn graph_for(project: &ProjectBuilder) -> anyhow::Result<TaskGraph> {
    let project = project.clone().build()?;
    let graph = GraphBuilder::new(project.build_options()).build(&project.task)?;
    Ok(graph)
}

/// Build and schedule `project` using its configured critical path mode.
pub fn schedule_for(project: &ProjectBuilder) -> anyhow::Result<Schedule> {
    let mode = project.critical_path_mode();
    schedule_with_mode(project, mode)
}

pub fn schedule_with_mode(project: &ProjectBuilder, mode: CriticalPathMode) -> anyhow::Result<Schedule> {
    let mut graph = graph_for(project)?;
    Ok(compute_schedule(&mut graph, mode)?)
}
