use claw_types::{Color, Point2};

use crate::errors::CanvasError;
use crate::path::Path2;
use crate::photo::Photo;
use crate::style::{Rect, StrokeStyle, TextStyle};

/// Drawing operations in logical surface units.
///
/// Implementations must skip paths with non-finite points rather than
/// propagate them, so callers can hand over degenerate geometry unchecked.
pub trait Canvas {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Replace every pixel with `color`.
    fn clear(&mut self, color: Color);

    fn fill_path(&mut self, path: &Path2, color: Color);

    fn stroke_path(&mut self, path: &Path2, style: &StrokeStyle);

    fn fill_text(&mut self, text: &str, at: Point2, style: &TextStyle);

    /// Advance width of `text` at `size`.
    fn text_width(&self, text: &str, size: f64) -> f64;

    /// Draw the `src` region of `photo` (photo pixels) into `dst` (surface units).
    fn draw_image(&mut self, photo: &Photo, src: Rect, dst: Rect, alpha: f64);

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_path(&Path2::rect(rect.x, rect.y, rect.w, rect.h), color);
    }

    fn stroke_line(&mut self, a: Point2, b: Point2, style: &StrokeStyle) {
        self.stroke_path(&Path2::line(a, b), style);
    }
}

/// A canvas that can hand back what has been drawn so far.
pub trait Surface: Canvas {
    type Frame;

    fn snapshot(&self) -> Result<Self::Frame, CanvasError>;
}
