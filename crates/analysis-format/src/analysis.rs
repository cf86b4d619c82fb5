use claw_types::{CameraHint, Step, TechniqueId};
use serde::Serialize;

/// A normalized analysis result, ready for the renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Recognized technique, if the reported name matched one.
    pub technique: Option<TechniqueId>,
    /// The name exactly as reported, for display when unrecognized.
    pub technique_name: Option<String>,
    /// Never empty.
    pub steps: Vec<Step>,
    pub camera_hint: Option<CameraHint>,
    /// Move counter reported by the service, 1 when absent.
    pub move_number: usize,
}

impl Analysis {
    /// The step at `index`, falling back to the first step.
    pub fn step_or_first(&self, index: usize) -> Option<&Step> {
        self.steps.get(index).or_else(|| self.steps.first())
    }

    /// Camera hint, or the canonical head-on 45° shot.
    pub fn camera_hint_or_default(&self) -> CameraHint {
        self.camera_hint.map(|h| h.clamped()).unwrap_or_default()
    }
}
