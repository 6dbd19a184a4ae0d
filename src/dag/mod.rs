// src/dag/mod.rs

//! Precedence graph representation and ordering.
//!
//! - [`task`] holds the per-task record (duration, edges, computed times).
//! - [`graph`] is the arena of tasks addressed by [`TaskIndex`].
//! - [`builder`] turns input records into a graph, deriving successors.
//! - [`toposort`] orders the graph and reports cycles.

pub mod builder;
pub mod graph;
pub mod task;
pub mod toposort;

pub use builder::{BuildOptions, GraphBuilder, Precedence, TaskRecord, build_graph};
pub use graph::{DanglingRef, TaskGraph};
pub use task::{Task, TaskIndex, VisitState};
pub use toposort::topological_sort;
