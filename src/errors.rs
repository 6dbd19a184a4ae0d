// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CritpathError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid task record: {0}")]
    InvalidRecord(String),

    #[error("task '{task}' has negative duration {duration}")]
    InvalidDuration { task: String, duration: i64 },

    #[error("duplicate task id '{0}'")]
    DuplicateTaskId(String),

    #[error("task '{task}' lists unknown predecessor '{missing}'")]
    DanglingReference { task: String, missing: String },

    /// `from -> to` is the edge that closed the cycle; `cycle` starts and
    /// ends with `to`.
    #[error("computation could not complete: cycle involving {}", .cycle.join(" -> "))]
    CycleDetected {
        from: String,
        to: String,
        cycle: Vec<String>,
    },

    #[error("task '{task}' has negative slack {slack}; duration or edge data is inconsistent")]
    NegativeSlack { task: String, slack: i64 },

    #[error("arithmetic overflow while computing {0}")]
    Overflow(String),

    #[error("internal scheduling error: {0}")]
    Internal(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CritpathError>;
