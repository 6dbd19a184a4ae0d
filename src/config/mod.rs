// src/config/mod.rs

//! Project file loading and validation for critpath.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a project file from disk or the embedded demo (`loader.rs`).
//! - Validate file-level invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_demo, load_from_path, load_from_str};
pub use model::{ProjectFile, ProjectSection, RawProjectFile};
pub use validate::validate_raw_project;
