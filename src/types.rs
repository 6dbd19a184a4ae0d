// src/types.rs

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Canonical task identifier type.
pub type TaskId = String;

/// What the graph builder does when two records share an id.
///
/// - `LastWins`: the later record replaces the earlier one's duration and
///   precedence list. The task keeps the position of its first occurrence.
/// - `Reject`: building fails with `DuplicateTaskId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    LastWins,
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "last_wins" => Ok(DuplicatePolicy::LastWins),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(format!(
                "invalid duplicate_ids policy: {other} (expected \"last_wins\" or \"reject\")"
            )),
        }
    }
}

/// What the graph builder does with a predecessor id that names no task.
///
/// Timing results are the same for `Ignore` and `Warn`; the dangling edge
/// never constrains a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    #[default]
    Ignore,
    Warn,
    Reject,
}

impl FromStr for DanglingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(DanglingPolicy::Ignore),
            "warn" | "warning" => Ok(DanglingPolicy::Warn),
            "reject" => Ok(DanglingPolicy::Reject),
            other => Err(format!(
                "invalid dangling_refs policy: {other} (expected \"ignore\", \"warn\" or \"reject\")"
            )),
        }
    }
}

/// Which task list a schedule reports as its critical path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CriticalPathMode {
    /// Every zero-slack task, in topological order.
    #[default]
    AllZeroSlack,
    /// One connected chain of critical tasks joined by critical edges.
    Chain,
}

impl FromStr for CriticalPathMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all_zero_slack" | "all" => Ok(CriticalPathMode::AllZeroSlack),
            "chain" => Ok(CriticalPathMode::Chain),
            other => Err(format!(
                "invalid critical_path mode: {other} (expected \"all_zero_slack\" or \"chain\")"
            )),
        }
    }
}

impl fmt::Display for CriticalPathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriticalPathMode::AllZeroSlack => f.write_str("all_zero_slack"),
            CriticalPathMode::Chain => f.write_str("chain"),
        }
    }
}

/// Rendering selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Dot,
    Json,
}
