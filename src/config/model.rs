// src/config/model.rs

use serde::Deserialize;

use crate::dag::builder::{BuildOptions, DEFAULT_DELIMITER, DEFAULT_EMPTY_MARKER, TaskRecord};
use crate::types::{CriticalPathMode, DanglingPolicy, DuplicatePolicy};

/// Project file exactly as deserialized from TOML, before validation.
///
/// ```toml
/// [config]
/// delimiter = ","
/// empty_marker = "-"
/// duplicate_ids = "last_wins"
/// dangling_refs = "ignore"
/// critical_path = "all_zero_slack"
///
/// [[task]]
/// id = "A"
/// duration = 2
/// after = "-"
///
/// [[task]]
/// id = "B"
/// duration = 3
/// after = ["A"]
/// ```
///
/// Every `[config]` key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProjectFile {
    #[serde(default)]
    pub config: ProjectSection,

    /// `[[task]]` entries in file order. Order matters: it decides which
    /// record wins for duplicate ids and the traversal order of the sort.
    #[serde(default)]
    pub task: Vec<TaskRecord>,
}

/// Validated project file.
///
/// Only obtainable through `ProjectFile::try_from(RawProjectFile)` (see
/// `config::validate`) or the loader.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    pub config: ProjectSection,
    pub task: Vec<TaskRecord>,
}

impl ProjectFile {
    pub(crate) fn new_unchecked(config: ProjectSection, task: Vec<TaskRecord>) -> Self {
        Self { config, task }
    }

    /// Graph builder options derived from `[config]`.
    pub fn build_options(&self) -> BuildOptions {
        self.config.build_options()
    }
}

/// `[config]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Separator between ids in a precedence string.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Precedence string meaning "no predecessors".
    #[serde(default = "default_empty_marker")]
    pub empty_marker: String,

    #[serde(default)]
    pub duplicate_ids: DuplicatePolicy,

    #[serde(default)]
    pub dangling_refs: DanglingPolicy,

    /// Which list is reported as the critical path. Overridable with
    /// `--critical-path`.
    #[serde(default)]
    pub critical_path: CriticalPathMode,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_empty_marker() -> String {
    DEFAULT_EMPTY_MARKER.to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            empty_marker: default_empty_marker(),
            duplicate_ids: DuplicatePolicy::default(),
            dangling_refs: DanglingPolicy::default(),
            critical_path: CriticalPathMode::default(),
        }
    }
}

impl ProjectSection {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            delimiter: self.delimiter.clone(),
            empty_marker: self.empty_marker.clone(),
            duplicates: self.duplicate_ids,
            dangling: self.dangling_refs,
        }
    }
}
