#![allow(dead_code)]

use critpath::config::{ProjectFile, ProjectSection, RawProjectFile};
use critpath::dag::{Precedence, TaskRecord};
use critpath::errors::Result;
use critpath::types::{CriticalPathMode, DanglingPolicy, DuplicatePolicy};

/// Builder for `ProjectFile` to simplify test setup.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    project: RawProjectFile,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self {
            project: RawProjectFile {
                config: ProjectSection::default(),
                task: Vec::new(),
            },
        }
    }

    /// Add a task whose precedence is a delimited string such as `"A, B"`
    /// or the empty marker.
    pub fn task(self, id: &str, duration: i64, after: &str) -> Self {
        self.with_record(RecordBuilder::new(id, duration).after(after).build())
    }

    pub fn with_record(mut self, record: TaskRecord) -> Self {
        self.project.task.push(record);
        self
    }

    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.project.config.delimiter = delimiter.to_string();
        self
    }

    pub fn empty_marker(mut self, marker: &str) -> Self {
        self.project.config.empty_marker = marker.to_string();
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.project.config.duplicate_ids = policy;
        self
    }

    pub fn dangling(mut self, policy: DanglingPolicy) -> Self {
        self.project.config.dangling_refs = policy;
        self
    }

    pub fn critical_path(mut self, mode: CriticalPathMode) -> Self {
        self.project.config.critical_path = mode;
        self
    }

    pub fn critical_path_mode(&self) -> CriticalPathMode {
        self.project.config.critical_path
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.project.task
    }

    pub fn raw(self) -> RawProjectFile {
        self.project
    }

    /// Validate into a `ProjectFile`.
    pub fn build(self) -> Result<ProjectFile> {
        ProjectFile::try_from(self.project)
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `TaskRecord`.
pub struct RecordBuilder {
    record: TaskRecord,
}

impl RecordBuilder {
    pub fn new(id: &str, duration: i64) -> Self {
        Self {
            record: TaskRecord {
                id: id.to_string(),
                duration,
                after: Precedence::default(),
            },
        }
    }

    /// Delimited precedence string.
    pub fn after(mut self, precedence: &str) -> Self {
        self.record.after = Precedence::Spec(precedence.to_string());
        self
    }

    /// Explicit list of predecessor ids.
    pub fn after_ids(mut self, ids: &[&str]) -> Self {
        self.record.after = Precedence::Ids(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn build(self) -> TaskRecord {
        self.record
    }
}

/// The four-task diamond A(2) -> {B(3), C(1)} -> D(4).
pub fn diamond() -> ProjectBuilder {
    ProjectBuilder::new()
        .task("A", 2, "-")
        .task("B", 3, "A")
        .task("C", 1, "A")
        .task("D", 4, "B,C")
}

/// The 14-activity textbook network (duration 44).
pub fn textbook() -> ProjectBuilder {
    ProjectBuilder::new()
        .task("A", 2, "-")
        .task("B", 6, "K,L")
        .task("C", 10, "N")
        .task("D", 6, "C")
        .task("E", 4, "C")
        .task("F", 5, "E")
        .task("G", 7, "D")
        .task("H", 9, "E,G")
        .task("I", 7, "C")
        .task("J", 8, "F, I")
        .task("K", 4, "J")
        .task("L", 5, "J")
        .task("M", 2, "H")
        .task("N", 4, "A")
}
