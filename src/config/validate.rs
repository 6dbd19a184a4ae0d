// src/config/validate.rs

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::{CritpathError, Result};

impl TryFrom<RawProjectFile> for ProjectFile {
    type Error = crate::errors::CritpathError;

    fn try_from(raw: RawProjectFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_project(&raw)?;
        Ok(ProjectFile::new_unchecked(raw.config, raw.task))
    }
}

/// Sanity checks on a project file.
///
/// Task-level checks (ids, durations, duplicates, unknown predecessors) are
/// left to the graph builder so that every record source gets them.
pub fn validate_raw_project(cfg: &RawProjectFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_separators(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawProjectFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(CritpathError::ConfigError(
            "project must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_separators(cfg: &RawProjectFile) -> Result<()> {
    let delimiter = &cfg.config.delimiter;
    let marker = &cfg.config.empty_marker;

    if delimiter.trim().is_empty() {
        return Err(CritpathError::ConfigError(format!(
            "[config].delimiter must contain a non-whitespace character (got {delimiter:?})"
        )));
    }

    if marker.trim().is_empty() {
        return Err(CritpathError::ConfigError(
            "[config].empty_marker must not be empty".to_string(),
        ));
    }

    if marker.contains(delimiter.as_str()) {
        return Err(CritpathError::ConfigError(format!(
            "[config].empty_marker {marker:?} must not contain the delimiter {delimiter:?}"
        )));
    }

    Ok(())
}
