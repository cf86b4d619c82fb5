//! Guidance overlays on the player's photograph.

use claw_canvas::{Canvas, FontSource, Path2, Photo, PixmapCanvas, Rect, Snapshot, StrokeStyle, Surface};
use claw_geometry::{resolve_anchors, GlyphTransform};
use claw_types::{CameraHint, Color, Point2, Step};
use tracing::{debug, info, instrument, warn};

use crate::config::OverlayConfig;
use crate::errors::RenderError;
use crate::gripper::{draw_schematic_glyph, GripperRenderMode};
use crate::palette;
use crate::primitives::{self, ArrowStyle};

/// Glyph size at marker scale 1.
const GLYPH_SIZE: f64 = 60.0;
/// Length of the direction arrow drawn into a schematic target.
const DIRECTION_REACH: f64 = 100.0;

/// What the compositor decided while drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPlan {
    /// Resolved targets for every step, in surface pixels.
    pub targets: Vec<Point2>,
    /// Marker scale, `min(W, H) / reference_size`.
    pub scale: f64,
    /// How the active step's gripper was drawn; `None` when there was no active step.
    pub mode: Option<GripperRenderMode>,
}

pub struct PhotoCompositor {
    config: OverlayConfig,
    font: Option<FontSource>,
}

impl PhotoCompositor {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config, font: None }
    }

    pub fn with_font(mut self, font: Option<FontSource>) -> Self {
        self.font = font;
        self
    }

    fn canonical_hint(&self) -> CameraHint {
        CameraHint::new(CameraHint::CANONICAL.horizontal_deg, self.config.default_vertical_deg)
    }

    /// Host photo with the darkening wash, then target resolution.
    fn prepare<C: Canvas + ?Sized>(&self, canvas: &mut C, photo: &Photo, steps: &[Step]) -> (Vec<Point2>, f64) {
        let (w, h) = (photo.width() as f64, photo.height() as f64);
        canvas.draw_image(photo, photo.bounds(), Rect::new(0.0, 0.0, w, h), 1.0);
        canvas.fill_rect(Rect::new(0.0, 0.0, w, h), Color::BLACK.faded(self.config.darken_alpha));

        let anchors: Vec<_> = steps.iter().map(|s| s.target).collect();
        let targets = resolve_anchors(&anchors, w, h, &self.config.layout_params(w, h));
        (targets, self.config.marker_scale(w, h))
    }

    /// Draw the overlay for `steps[active]` onto `canvas`, which must be the
    /// photo's size.
    pub fn compose_on<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        photo: &Photo,
        steps: &[Step],
        active: usize,
        hint: Option<&CameraHint>,
    ) -> OverlayPlan {
        let (targets, s) = self.prepare(canvas, photo, steps);
        let Some(step) = steps.get(active) else {
            warn!(active, steps = steps.len(), "no active step; photo left unmarked");
            return OverlayPlan {
                targets,
                scale: s,
                mode: None,
            };
        };
        let target = targets[active];
        let mode = GripperRenderMode::for_step(step);

        match mode {
            GripperRenderMode::PhotoCrop(bbox) => {
                let (sx, sy, sw, sh) = bbox.to_pixels(photo.width() as f64, photo.height() as f64);
                canvas.stroke_path(
                    &Path2::rect(sx, sy, sw, sh),
                    &StrokeStyle::dashed(palette::SOURCE_OUTLINE, 2.0 * s, 6.0 * s, 4.0 * s),
                );
                // tips sit slightly below the crop's center
                let dst = Rect::new(target.x - sw / 2.0, target.y - sh * 0.6, sw, sh);
                canvas.draw_image(photo, Rect::new(sx, sy, sw, sh), dst, self.config.crop_alpha);
                primitives::glow_stroke(
                    canvas,
                    &Path2::rect(dst.x, dst.y, dst.w, dst.h),
                    palette::RED,
                    3.0 * s,
                    8.0 * s,
                );
                let from = Point2::new(sx + sw / 2.0, sy + sh / 2.0);
                primitives::arrow(canvas, from, target, &ArrowStyle::photo_move(s));
            }
            GripperRenderMode::Schematic => {
                let hint = hint.copied().unwrap_or_else(|| self.canonical_hint());
                let transform = GlyphTransform::from_hint(Some(&hint));
                draw_schematic_glyph(
                    canvas,
                    target,
                    &transform,
                    GLYPH_SIZE * s,
                    step.direction.emphasized_side(),
                );
                // the reticle must stay visible over the glyph body
                primitives::crosshair(canvas, target, s);
                if let Some((dx, dy)) = step.direction.screen_vector() {
                    let reach = DIRECTION_REACH * s;
                    let from = target.offset(-dx * reach, -dy * reach);
                    primitives::arrow(canvas, from, target, &ArrowStyle::photo_move(s));
                }
            }
        }

        primitives::target_dot(canvas, target, s);
        primitives::move_badge(canvas, step.index, s);
        debug!(?mode, x = target.x, y = target.y, "overlay drawn");

        OverlayPlan {
            targets,
            scale: s,
            mode: Some(mode),
        }
    }

    /// Every step at once: resolved targets joined in order by dashed lines,
    /// each with a dot and its number.
    pub fn compose_overview_on<C: Canvas + ?Sized>(&self, canvas: &mut C, photo: &Photo, steps: &[Step]) -> OverlayPlan {
        let (targets, s) = self.prepare(canvas, photo, steps);
        let link = StrokeStyle::dashed(palette::MOVE_LINE, 2.0 * s, 8.0 * s, 6.0 * s);
        for pair in targets.windows(2) {
            canvas.stroke_path(&Path2::line(pair[0], pair[1]), &link);
        }
        for (step, target) in steps.iter().zip(&targets) {
            primitives::target_dot(canvas, *target, s);
            primitives::number_tag(canvas, step.index, *target, s);
        }
        OverlayPlan {
            targets,
            scale: s,
            mode: None,
        }
    }

    fn open(&self, bytes: &[u8]) -> Result<(Photo, PixmapCanvas), RenderError> {
        let photo = Photo::decode(bytes).map_err(|e| RenderError::Decode(e.to_string()))?;
        let canvas = PixmapCanvas::new(photo.width() as f64, photo.height() as f64, 1.0)?
            .with_font(self.font.clone());
        Ok((photo, canvas))
    }

    /// Decode, overlay `steps[active]` and encode at the photo's resolution.
    #[instrument(skip(self, bytes, steps, hint), fields(bytes = bytes.len(), steps = steps.len()))]
    pub fn try_compose(
        &self,
        bytes: &[u8],
        steps: &[Step],
        active: usize,
        hint: Option<&CameraHint>,
    ) -> Result<Snapshot, RenderError> {
        let (photo, mut canvas) = self.open(bytes)?;
        let plan = self.compose_on(&mut canvas, &photo, steps, active, hint);
        let snapshot = canvas.snapshot()?;
        info!(
            width = snapshot.width,
            height = snapshot.height,
            targets = plan.targets.len(),
            "photo overlay composed"
        );
        Ok(snapshot)
    }

    /// [`try_compose`](Self::try_compose), with any failure reported as no image.
    pub fn compose_bytes(
        &self,
        bytes: &[u8],
        steps: &[Step],
        active: usize,
        hint: Option<&CameraHint>,
    ) -> Option<Snapshot> {
        self.try_compose(bytes, steps, active, hint)
            .map_err(|e| warn!(error = %e, "photo overlay not produced"))
            .ok()
    }

    #[instrument(skip(self, bytes, steps), fields(bytes = bytes.len(), steps = steps.len()))]
    pub fn try_compose_overview(&self, bytes: &[u8], steps: &[Step]) -> Result<Snapshot, RenderError> {
        let (photo, mut canvas) = self.open(bytes)?;
        self.compose_overview_on(&mut canvas, &photo, steps);
        let snapshot = canvas.snapshot()?;
        info!(width = snapshot.width, height = snapshot.height, "overview composed");
        Ok(snapshot)
    }

    pub fn compose_overview_bytes(&self, bytes: &[u8], steps: &[Step]) -> Option<Snapshot> {
        self.try_compose_overview(bytes, steps)
            .map_err(|e| warn!(error = %e, "overview not produced"))
            .ok()
    }
}

impl Default for PhotoCompositor {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claw_canvas::{DrawCall, RecordingCanvas};
    use claw_types::{AnchorPoint, BBox, Direction};

    fn photo(w: u32, h: u32) -> Photo {
        Photo::from_rgba(image::RgbaImage::from_pixel(w, h, image::Rgba([90, 90, 90, 255])))
    }

    #[test]
    fn test_garbage_bytes_produce_no_image() {
        let steps = [Step::new(1, "grab", AnchorPoint::CENTER)];
        assert!(PhotoCompositor::default()
            .compose_bytes(b"\x00\x01garbage", &steps, 0, None)
            .is_none());
    }

    #[test]
    fn test_schematic_when_no_bbox() {
        let comp = PhotoCompositor::default();
        let p = photo(500, 500);
        let mut c = RecordingCanvas::new(500.0, 500.0);
        let steps = [Step::new(1, "grab", AnchorPoint::new(40.0, 60.0)).with_direction(Direction::Left)];
        let plan = comp.compose_on(&mut c, &p, &steps, 0, None);

        assert_eq!(plan.mode, Some(GripperRenderMode::Schematic));
        assert_eq!(plan.targets, vec![Point2::new(200.0, 300.0)]);
        // only the host photo is blitted
        assert_eq!(c.images().count(), 1);
        assert_eq!(c.texts(), vec!["Move 1"]);
    }

    #[test]
    fn test_crosshair_drawn_over_schematic_glyph() {
        let comp = PhotoCompositor::default();
        let p = photo(500, 500);
        let mut c = RecordingCanvas::new(500.0, 500.0);
        comp.compose_on(&mut c, &p, &[Step::new(1, "grab", AnchorPoint::CENTER)], 0, None);

        let calls = c.calls();
        let body = calls
            .iter()
            .rposition(|call| matches!(call, DrawCall::Fill { color, .. } if *color == palette::CLAW))
            .unwrap();
        let ring = calls
            .iter()
            .position(|call| matches!(call, DrawCall::Stroke { style, .. } if style.color == palette::CROSSHAIR_RING))
            .unwrap();
        assert!(ring > body, "crosshair at {ring} is under the glyph body at {body}");
    }

    #[test]
    fn test_crop_redrawn_at_target() {
        let comp = PhotoCompositor::default();
        let p = photo(1000, 500);
        let mut c = RecordingCanvas::new(1000.0, 500.0);
        let steps = [Step::new(2, "grab", AnchorPoint::new(50.0, 50.0))
            .with_source_bbox(BBox::new(10.0, 20.0, 10.0, 20.0))];
        let plan = comp.compose_on(&mut c, &p, &steps, 0, None);

        assert!(matches!(plan.mode, Some(GripperRenderMode::PhotoCrop(_))));
        let images: Vec<_> = c.images().collect();
        assert_eq!(images.len(), 2);
        let (src, dst, alpha) = images[1];
        assert_eq!(src, Rect::new(100.0, 100.0, 100.0, 100.0));
        assert_eq!(dst, Rect::new(450.0, 190.0, 100.0, 100.0));
        assert!((alpha - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_darkening_precedes_markers() {
        let comp = PhotoCompositor::default();
        let p = photo(400, 300);
        let mut c = RecordingCanvas::new(400.0, 300.0);
        comp.compose_on(&mut c, &p, &[Step::new(1, "grab", AnchorPoint::CENTER)], 0, None);
        assert!(matches!(c.calls()[0], DrawCall::Image { .. }));
        assert!(matches!(&c.calls()[1], DrawCall::Fill { color, .. } if color.a == 38));
    }

    #[test]
    fn test_center_direction_draws_no_arrow() {
        let comp = PhotoCompositor::default();
        let p = photo(500, 500);
        let count_heads = |dir: Direction| {
            let mut c = RecordingCanvas::new(500.0, 500.0);
            let steps = [Step::new(1, "grab", AnchorPoint::CENTER).with_direction(dir)];
            comp.compose_on(&mut c, &p, &steps, 0, None);
            c.strokes().filter(|(_, s)| s.color == palette::MOVE_LINE).count()
        };
        assert_eq!(count_heads(Direction::Center), 0);
        assert_eq!(count_heads(Direction::Forward), 1);
    }

    #[test]
    fn test_overview_links_targets_in_order() {
        let comp = PhotoCompositor::default();
        let p = photo(500, 500);
        let mut c = RecordingCanvas::new(500.0, 500.0);
        let steps = [
            Step::new(1, "a", AnchorPoint::new(20.0, 20.0)),
            Step::new(2, "b", AnchorPoint::new(50.0, 50.0)),
            Step::new(3, "c", AnchorPoint::new(80.0, 30.0)),
        ];
        let plan = comp.compose_overview_on(&mut c, &p, &steps);
        assert_eq!(plan.targets.len(), 3);
        let links = c.strokes().filter(|(_, s)| s.color == palette::MOVE_LINE).count();
        assert_eq!(links, 2);
        assert_eq!(c.texts(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_missing_active_step_leaves_photo_unmarked() {
        let comp = PhotoCompositor::default();
        let p = photo(100, 100);
        let mut c = RecordingCanvas::new(100.0, 100.0);
        let plan = comp.compose_on(&mut c, &p, &[], 0, None);
        assert!(plan.mode.is_none());
        assert_eq!(c.calls().len(), 2);
    }
}
