//! A surface that records calls instead of rasterizing.

use claw_types::{Color, Point2};

use crate::canvas::{Canvas, Surface};
use crate::errors::CanvasError;
use crate::path::Path2;
use crate::photo::Photo;
use crate::style::{estimate_text_width, Rect, StrokeStyle, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Fill { path: Path2, color: Color },
    Stroke { path: Path2, style: StrokeStyle },
    Text { text: String, at: Point2, style: TextStyle },
    Image { src: Rect, dst: Rect, alpha: f64 },
}

/// Deterministic canvas keeping an ordered trace of draw calls.
///
/// Paths with non-finite points are dropped, matching [`crate::PixmapCanvas`].
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Path2, Color)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Fill { path, color } => Some((path, *color)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&Path2, &StrokeStyle)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Stroke { path, style } => Some((path, style)),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = (Rect, Rect, f64)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Image { src, dst, alpha } => Some((*src, *dst, *alpha)),
            _ => None,
        })
    }

    /// Every point referenced by any recorded path.
    pub fn all_points(&self) -> Vec<Point2> {
        self.calls
            .iter()
            .flat_map(|c| match c {
                DrawCall::Fill { path, .. } | DrawCall::Stroke { path, .. } => {
                    path.points().collect()
                }
                DrawCall::Text { at, .. } => vec![*at],
                _ => Vec::new(),
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_path(&mut self, path: &Path2, color: Color) {
        if path.is_empty() || !path.is_finite() {
            return;
        }
        self.calls.push(DrawCall::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path2, style: &StrokeStyle) {
        if path.is_empty() || !path.is_finite() {
            return;
        }
        self.calls.push(DrawCall::Stroke {
            path: path.clone(),
            style: style.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Point2, style: &TextStyle) {
        if text.is_empty() || !at.is_finite() {
            return;
        }
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            at,
            style: *style,
        });
    }

    fn text_width(&self, text: &str, size: f64) -> f64 {
        estimate_text_width(text, size)
    }

    fn draw_image(&mut self, _photo: &Photo, src: Rect, dst: Rect, alpha: f64) {
        if src.is_empty() || dst.is_empty() {
            return;
        }
        self.calls.push(DrawCall::Image { src, dst, alpha });
    }
}

impl Surface for RecordingCanvas {
    type Frame = Vec<DrawCall>;

    fn snapshot(&self) -> Result<Self::Frame, CanvasError> {
        Ok(self.calls.clone())
    }
}
