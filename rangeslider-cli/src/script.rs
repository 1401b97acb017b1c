//! Pointer scripts: a JSON recording of host events to replay against a slider.
//!
//! ```json
//! {
//!   "width": 300, "height": 30,
//!   "events": [
//!     { "kind": "down", "x": 69, "y": 15 },
//!     { "kind": "move", "x": 269, "y": 15 },
//!     { "kind": "up" }
//!   ]
//! }
//! ```
//!
//! `pointer` defaults to 0 on every event. `width`/`height` may be omitted
//! when given on the command line.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use rangeslider_core::{PointerEvent, RangeSelection, RangeSlider, TrackResponse};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    pub events: Vec<PointerEvent>,
}

impl Script {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("parse pointer script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read pointer script {}", path.display()))?;
        Self::from_json(&content)
    }
}

/// One line of replay output.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub event: PointerEvent,
    pub response: TrackResponse,
    pub selection: RangeSelection,
}

/// Feed every event through the slider, recording each response.
pub fn replay(slider: &mut RangeSlider, events: &[PointerEvent]) -> Vec<ReplayStep> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let response = slider.dispatch(*event);
            ReplayStep {
                index,
                event: *event,
                response,
                selection: slider.selection(),
            }
        })
        .collect()
}
