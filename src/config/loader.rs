// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::Result;

/// Built-in 14-activity textbook project used by `--demo`.
pub const DEMO_PROJECT: &str = include_str!("../../demos/textbook.toml");

/// Load a project file from a given path and return the raw `RawProjectFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawProjectFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read project file");

    load_from_str(&contents)
}

/// Deserialize a project from TOML text.
pub fn load_from_str(contents: &str) -> Result<RawProjectFile> {
    let project: RawProjectFile = toml::from_str(contents)?;
    Ok(project)
}

/// Load a project file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks there is at least one task and the separators are usable.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ProjectFile> {
    let raw = load_from_path(&path)?;
    let project = ProjectFile::try_from(raw)?;
    Ok(project)
}

/// The embedded demo project, validated.
pub fn load_demo() -> Result<ProjectFile> {
    ProjectFile::try_from(load_from_str(DEMO_PROJECT)?)
}

/// Default project path: `Critpath.toml` in the current working directory.
pub fn default_project_path() -> PathBuf {
    PathBuf::from("Critpath.toml")
}
