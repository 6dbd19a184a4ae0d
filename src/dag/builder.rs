// src/dag/builder.rs

//! Turn an ordered list of task records into a [`TaskGraph`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::dag::graph::{DanglingRef, TaskGraph};
use crate::dag::task::Task;
use crate::errors::{CritpathError, Result};
use crate::types::{DanglingPolicy, DuplicatePolicy, TaskId};

pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_EMPTY_MARKER: &str = "-";

/// Precedence as it appears in a record.
///
/// Either a delimited string (`"F, I"`, or the empty marker `"-"`) or an
/// explicit list of ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Precedence {
    Spec(String),
    Ids(Vec<String>),
}

impl Default for Precedence {
    fn default() -> Self {
        Precedence::Ids(Vec::new())
    }
}

impl Precedence {
    /// Split into predecessor ids.
    ///
    /// Entries are trimmed; empty entries and entries equal to the empty
    /// marker are dropped. Repeats are removed keeping the first occurrence.
    pub fn resolve(&self, delimiter: &str, empty_marker: &str) -> Vec<TaskId> {
        let raw: Vec<&str> = match self {
            Precedence::Spec(s) => s.split(delimiter).collect(),
            Precedence::Ids(ids) => ids.iter().map(String::as_str).collect(),
        };

        let mut out: Vec<TaskId> = Vec::with_capacity(raw.len());
        for entry in raw {
            let entry = entry.trim();
            if entry.is_empty() || entry == empty_marker {
                continue;
            }
            if !out.iter().any(|existing| existing == entry) {
                out.push(entry.to_string());
            }
        }
        out
    }
}

impl From<&str> for Precedence {
    fn from(s: &str) -> Self {
        Precedence::Spec(s.to_string())
    }
}

impl From<Vec<String>> for Precedence {
    fn from(ids: Vec<String>) -> Self {
        Precedence::Ids(ids)
    }
}

/// One `(id, duration, precedence)` input row.
///
/// Also the shape of a `[[task]]` entry in a project file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaskRecord {
    pub id: String,
    pub duration: i64,
    #[serde(default, alias = "predecessors")]
    pub after: Precedence,
}

impl TaskRecord {
    pub fn new(id: impl Into<String>, duration: i64, after: impl Into<Precedence>) -> Self {
        Self {
            id: id.into(),
            duration,
            after: after.into(),
        }
    }
}

/// Knobs controlling how records are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub delimiter: String,
    pub empty_marker: String,
    pub duplicates: DuplicatePolicy,
    pub dangling: DanglingPolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            empty_marker: DEFAULT_EMPTY_MARKER.to_string(),
            duplicates: DuplicatePolicy::default(),
            dangling: DanglingPolicy::default(),
        }
    }
}

/// Builds a [`TaskGraph`] from records.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    options: BuildOptions,
}

impl GraphBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Build the graph.
    ///
    /// First pass inserts tasks (applying the duplicate policy); second pass
    /// resolves predecessor ids and derives successor lists.
    pub fn build<'a, I>(&self, records: I) -> Result<TaskGraph>
    where
        I: IntoIterator<Item = &'a TaskRecord>,
    {
        let mut graph = TaskGraph::new();

        for record in records {
            self.insert(&mut graph, record)?;
        }

        self.link(&mut graph)?;

        debug!(tasks = graph.len(), "task graph built");
        Ok(graph)
    }

    fn insert(&self, graph: &mut TaskGraph, record: &TaskRecord) -> Result<()> {
        let id = record.id.trim();
        if id.is_empty() {
            return Err(CritpathError::InvalidRecord(
                "task id must not be empty".to_string(),
            ));
        }
        if id == self.options.empty_marker {
            return Err(CritpathError::InvalidRecord(format!(
                "task id '{id}' is the empty marker and could never be referenced"
            )));
        }
        if id.contains(self.options.delimiter.as_str()) {
            return Err(CritpathError::InvalidRecord(format!(
                "task id '{id}' contains the delimiter '{}'",
                self.options.delimiter
            )));
        }
        if record.duration < 0 {
            return Err(CritpathError::InvalidDuration {
                task: id.to_string(),
                duration: record.duration,
            });
        }

        let declared = record
            .after
            .resolve(&self.options.delimiter, &self.options.empty_marker);

        match graph.index_of(id) {
            Some(existing) => match self.options.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(CritpathError::DuplicateTaskId(id.to_string()));
                }
                DuplicatePolicy::LastWins => {
                    debug!(task = %id, "duplicate task id; later record replaces earlier one");
                    let task = graph.task_mut(existing);
                    task.duration = record.duration;
                    task.declared_predecessors = declared;
                }
            },
            None => {
                trace!(task = %id, duration = record.duration, "adding task");
                graph.push(Task::new(id, record.duration, declared));
            }
        }

        Ok(())
    }

    fn link(&self, graph: &mut TaskGraph) -> Result<()> {
        for idx in graph.indices() {
            let declared = graph.task(idx).declared_predecessors.clone();

            for pred_id in declared {
                let Some(pred) = graph.index_of(&pred_id) else {
                    let task = graph.task(idx).id.clone();
                    match self.options.dangling {
                        DanglingPolicy::Ignore => {
                            trace!(task = %task, missing = %pred_id, "ignoring unknown predecessor");
                        }
                        DanglingPolicy::Warn => {
                            warn!(task = %task, missing = %pred_id, "task lists unknown predecessor; ignoring it");
                            graph.record_dangling(DanglingRef {
                                task,
                                missing: pred_id,
                            });
                        }
                        DanglingPolicy::Reject => {
                            return Err(CritpathError::DanglingReference {
                                task,
                                missing: pred_id,
                            });
                        }
                    }
                    continue;
                };

                // declared ids are already unique, so each edge is added once
                graph.task_mut(idx).predecessors.push(pred);
                graph.task_mut(pred).successors.push(idx);
            }
        }

        Ok(())
    }
}

/// Build with default options.
pub fn build_graph<'a, I>(records: I) -> Result<TaskGraph>
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    GraphBuilder::default().build(records)
}
