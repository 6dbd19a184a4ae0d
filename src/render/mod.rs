// src/render/mod.rs

//! Output formats for a computed [`Schedule`](crate::engine::Schedule).

pub mod dot;
pub mod json;
pub mod table;

pub use dot::render_dot;
pub use json::render_json;
pub use table::render_table;

use crate::engine::Schedule;
use crate::errors::Result;
use crate::types::OutputFormat;

/// Render `schedule` in the requested format. Output always ends with a
/// newline.
pub fn render(schedule: &Schedule, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Table => render_table(schedule),
        OutputFormat::Dot => render_dot(schedule)?,
        OutputFormat::Json => render_json(schedule)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
