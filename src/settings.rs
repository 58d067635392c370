//! Runtime settings for the chart and the built-in tools.
//!
//! Settings are plain JSON. Every field has a default, so a partial file (or
//! `{}`) is valid:
//!
//! ```json
//! {
//!   "max_transition_depth": 64,
//!   "pen": { "flush_interval_ms": 33.0 },
//!   "select": { "drag_threshold": 6.0 }
//! }
//! ```

use crate::constants::{
    DEFAULT_STROKE_COLOR, DEFAULT_STROKE_THICKNESS, PEN_FLUSH_INTERVAL_MS, PEN_SIMPLIFY_TOLERANCE,
    SELECT_DRAG_THRESHOLD,
};
use crate::error::StateResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Maximum nesting of transitions triggered from hooks.
    /// `None` leaves re-entrant transitions unguarded.
    pub max_transition_depth: Option<usize>,
    pub pen: PenSettings,
    pub select: SelectSettings,
}

/// Appearance of committed strokes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: String,
    pub thickness: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_STROKE_COLOR.to_string(),
            thickness: DEFAULT_STROKE_THICKNESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenSettings {
    /// Buffered samples are pushed to the surface at most this often
    pub flush_interval_ms: f64,
    /// Points closer than this to the previously kept point are dropped on finish
    pub simplify_tolerance: f64,
    #[serde(flatten)]
    pub style: StrokeStyle,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            flush_interval_ms: PEN_FLUSH_INTERVAL_MS,
            simplify_tolerance: PEN_SIMPLIFY_TOLERANCE,
            style: StrokeStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectSettings {
    /// Pointer travel (world units) before a press becomes a translation
    pub drag_threshold: f64,
}

impl Default for SelectSettings {
    fn default() -> Self {
        Self {
            drag_threshold: SELECT_DRAG_THRESHOLD,
        }
    }
}

impl ChartSettings {
    pub fn from_json_str(json: &str) -> StateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> StateResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let settings = Self::from_json_str(&content)?;
        debug!(path = %path.display(), "Loaded chart settings");
        Ok(settings)
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> StateResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
