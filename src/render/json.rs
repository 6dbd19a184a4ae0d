// src/render/json.rs

use crate::engine::Schedule;
use crate::errors::{CritpathError, Result};

/// Pretty-printed JSON of the whole schedule.
pub fn render_json(schedule: &Schedule) -> Result<String> {
    serde_json::to_string_pretty(schedule).map_err(|e| CritpathError::Render(e.to_string()))
}
