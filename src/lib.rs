// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod render;
pub mod types;

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::{load_and_validate, load_demo};
use crate::config::model::ProjectFile;
use crate::dag::{GraphBuilder, TaskGraph};
use crate::engine::compute_schedule;

/// High-level entry point used by `main.rs`.
///
/// Loads the project (file or built-in demo), builds the task graph,
/// computes the schedule and writes the rendering either to `--output` or to
/// `stdout`.
pub fn run(args: &CliArgs, stdout: &mut dyn Write) -> Result<()> {
    let project = if args.demo {
        debug!("using built-in demo project");
        load_demo()?
    } else {
        let path = &args.project;
        load_and_validate(path)
            .with_context(|| format!("failed to load project file {}", path.display()))?
    };

    let mut graph = GraphBuilder::new(project.build_options()).build(&project.task)?;

    if args.dry_run {
        print_dry_run(&project, &graph, stdout)?;
        return Ok(());
    }

    let mode = args.critical_path.unwrap_or(project.config.critical_path);
    let schedule = compute_schedule(&mut graph, mode)?;
    let rendered = render::render(&schedule, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("failed to write {path}"))?;
            info!(path = %path, format = ?args.format, "schedule written");
        }
        None => stdout.write_all(rendered.as_bytes())?,
    }

    Ok(())
}

/// Dry-run output: print the effective settings and each task with its
/// resolved predecessors.
fn print_dry_run(project: &ProjectFile, graph: &TaskGraph, out: &mut dyn Write) -> Result<()> {
    let cfg = &project.config;

    writeln!(out, "critpath dry-run")?;
    writeln!(out, "  config.delimiter = {:?}", cfg.delimiter)?;
    writeln!(out, "  config.empty_marker = {:?}", cfg.empty_marker)?;
    writeln!(out, "  config.duplicate_ids = {:?}", cfg.duplicate_ids)?;
    writeln!(out, "  config.dangling_refs = {:?}", cfg.dangling_refs)?;
    writeln!(out, "  config.critical_path = {}", cfg.critical_path)?;
    writeln!(out)?;

    writeln!(out, "tasks ({}):", graph.len())?;
    for idx in graph.indices() {
        let task = graph.task(idx);
        writeln!(out, "  - {} (duration {})", task.id, task.duration)?;
        let preds = graph.ids(graph.predecessors_of(idx));
        if !preds.is_empty() {
            writeln!(out, "      after: {}", preds.join(", "))?;
        }
    }

    for dangling in graph.dangling_references() {
        writeln!(
            out,
            "  ! {} lists unknown predecessor {}",
            dangling.task, dangling.missing
        )?;
    }

    debug!("dry-run complete (no computation)");
    Ok(())
}
