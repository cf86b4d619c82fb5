//! Technique diagrams: three snapshots per technique from the pose table.

use claw_canvas::{FontSource, PixmapCanvas, Snapshot, Surface};
use claw_types::TechniqueId;
use tracing::{debug, info, instrument, warn};

use crate::config::DiagramConfig;
use crate::errors::RenderError;
use crate::scene::{draw_scene, StepScene};
use crate::techniques;

pub struct SceneComposer {
    config: DiagramConfig,
    font: Option<FontSource>,
}

impl SceneComposer {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config, font: None }
    }

    pub fn with_font(mut self, font: Option<FontSource>) -> Self {
        self.font = font;
        self
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// The declarative frames for `id`, without drawing them.
    pub fn scenes(&self, id: TechniqueId) -> [StepScene; 3] {
        techniques::scenes(id)
    }

    /// Draw every frame of `id` onto `surface`, snapshotting after each.
    ///
    /// The surface is cleared at the start of every frame, so each snapshot is
    /// independent of the ones before it.
    pub fn compose_on<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        id: TechniqueId,
    ) -> Result<Vec<S::Frame>, RenderError> {
        let camera = self.config.camera();
        let mut frames = Vec::with_capacity(3);
        for (i, scene) in self.scenes(id).iter().enumerate() {
            draw_scene(surface, &camera, scene, i + 1);
            frames.push(surface.snapshot()?);
            debug!(step = i + 1, title = %scene.title, "diagram frame drawn");
        }
        Ok(frames)
    }

    /// Rasterize all three frames of `id` as PNG snapshots.
    #[instrument(skip(self), fields(technique = %id))]
    pub fn compose(&self, id: TechniqueId) -> Result<Vec<Snapshot>, RenderError> {
        let mut canvas = PixmapCanvas::new(self.config.width, self.config.height, self.config.dpi_scale)?
            .with_font(self.font.clone());
        let frames = self.compose_on(&mut canvas, id)?;
        info!(frames = frames.len(), "technique diagrams rendered");
        Ok(frames)
    }

    /// Like [`compose`](Self::compose) but takes a technique name; an
    /// unrecognized name yields no frames.
    pub fn compose_named(&self, name: &str) -> Result<Vec<Snapshot>, RenderError> {
        match TechniqueId::parse(name) {
            Some(id) => self.compose(id),
            None => {
                warn!(technique = name, "unknown technique; no diagrams");
                Ok(Vec::new())
            }
        }
    }
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(DiagramConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claw_canvas::{DrawCall, RecordingCanvas};

    #[test]
    fn test_three_frames_each_starting_with_clear() {
        let composer = SceneComposer::default();
        let mut canvas = RecordingCanvas::new(440.0, 320.0);
        let frames = composer.compose_on(&mut canvas, TechniqueId::EdgeNudge).unwrap();
        assert_eq!(frames.len(), 3);
        for frame in &frames {
            assert!(matches!(frame.first(), Some(DrawCall::Clear(_))));
        }
    }

    #[test]
    fn test_unknown_technique_is_empty() {
        let composer = SceneComposer::default();
        assert!(composer.compose_named("moonwalk").unwrap().is_empty());
    }

    #[test]
    fn test_badges_are_numbered_in_order() {
        let composer = SceneComposer::default();
        let mut canvas = RecordingCanvas::new(440.0, 320.0);
        let frames = composer.compose_on(&mut canvas, TechniqueId::LeverFlip).unwrap();
        for (i, frame) in frames.iter().enumerate() {
            let prefix = format!("Step {}  ", i + 1);
            assert!(frame
                .iter()
                .any(|c| matches!(c, DrawCall::Text { text, .. } if text.starts_with(&prefix))));
        }
    }
}
