// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::loader::default_project_path;
use crate::types::{CriticalPathMode, OutputFormat};

/// Command-line arguments for `critpath`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "critpath",
    version,
    about = "Compute a critical path (CPM/PERT) schedule for a task graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the project file (TOML).
    ///
    /// Default: `Critpath.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_project_path())]
    pub project: PathBuf,

    /// Use the built-in 14-activity textbook project instead of a file.
    #[arg(long, conflicts_with = "project")]
    pub demo: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Override `[config].critical_path` from the project file.
    #[arg(long, value_enum, value_name = "MODE")]
    pub critical_path: Option<CriticalPathMode>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CRITPATH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate and print the task records, but don't compute.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
