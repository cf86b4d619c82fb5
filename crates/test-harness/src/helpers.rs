//! Helper functions: error type, synthetic photos, canned analyses, point math.

use std::io::Cursor;

use claw_canvas::{DrawCall, RecordingCanvas};
use claw_render::SceneComposer;
use claw_types::{Point2, TechniqueId};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("analysis error: {reason}")]
    Analysis { reason: String },

    #[error("render error: {reason}")]
    Render { reason: String },

    #[error("image error: {reason}")]
    Image { reason: String },

    #[error("nothing composed yet: {context}")]
    NotComposed { context: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },
}

impl From<analysis_format::LoadError> for HarnessError {
    fn from(e: analysis_format::LoadError) -> Self {
        HarnessError::Analysis { reason: e.to_string() }
    }
}

impl From<claw_render::RenderError> for HarnessError {
    fn from(e: claw_render::RenderError) -> Self {
        HarnessError::Render { reason: e.to_string() }
    }
}

impl From<claw_canvas::CanvasError> for HarnessError {
    fn from(e: claw_canvas::CanvasError) -> Self {
        HarnessError::Render { reason: e.to_string() }
    }
}

// ── Synthetic Photos ────────────────────────────────────────────────────────

fn encode_png(img: image::RgbaImage) -> Result<Vec<u8>, HarnessError> {
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| HarnessError::Image { reason: e.to_string() })?;
    Ok(out.into_inner())
}

/// A PNG of uniform color.
pub fn solid_photo_png(width: u32, height: u32, rgba: [u8; 4]) -> Result<Vec<u8>, HarnessError> {
    encode_png(image::RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
}

/// A gray cabinet photo with a bright block standing in for the gripper.
///
/// `block` is `(x, y, w, h)` in pixels.
pub fn photo_with_block(
    width: u32,
    height: u32,
    block: (u32, u32, u32, u32),
) -> Result<Vec<u8>, HarnessError> {
    let (bx, by, bw, bh) = block;
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        if x >= bx && x < bx + bw && y >= by && y < by + bh {
            image::Rgba([240, 240, 240, 255])
        } else {
            image::Rgba([60, 60, 70, 255])
        }
    });
    encode_png(img)
}

// ── Canned Analyses ─────────────────────────────────────────────────────────

/// The single-move response shape, with the gripper visible.
pub const SINGLE_MOVE_JSON: &str = r#"{
    "move_number": 2,
    "technique": {"name_jp": "縦ハメ"},
    "situation_analysis": {"setup_type": "tatehame"},
    "claw_bbox": {"x_percent": 40, "y_percent": 10, "w_percent": 20, "h_percent": 20},
    "next_move": {
        "action": "press the near edge",
        "expected_result": "box stands up between the rails",
        "target_x_percent": 55,
        "target_y_percent": 65
    }
}"#;

/// A multi-step analysis with one step per `(x%, y%, direction)`.
pub fn multi_step_json(technique: &str, targets: &[(f64, f64, &str)]) -> String {
    let steps: Vec<serde_json::Value> = targets
        .iter()
        .enumerate()
        .map(|(i, (x, y, dir))| {
            serde_json::json!({
                "action": format!("move {}", i + 1),
                "direction": dir,
                "targetXPercent": x,
                "targetYPercent": y,
            })
        })
        .collect();
    serde_json::json!({ "technique": technique, "steps": steps }).to_string()
}

// ── Diagram Traces ──────────────────────────────────────────────────────────

/// Record every frame of a technique diagram at the default size.
pub fn diagram_trace(id: TechniqueId) -> Result<Vec<Vec<DrawCall>>, HarnessError> {
    let composer = SceneComposer::default();
    let config = composer.config();
    let mut canvas = RecordingCanvas::new(config.width, config.height);
    Ok(composer.compose_on(&mut canvas, id)?)
}

// ── Point Math ──────────────────────────────────────────────────────────────

/// Smallest pairwise distance, with the pair; `None` for fewer than two points.
pub fn closest_pair(points: &[Point2]) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = points[i].distance_to(&points[j]);
            if best.map_or(true, |(_, _, b)| d < b) {
                best = Some((i, j, d));
            }
        }
    }
    best
}
