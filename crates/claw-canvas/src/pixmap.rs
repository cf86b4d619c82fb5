//! Raster surface backed by tiny-skia, with text through rusttype.

use std::path::Path;

use claw_types::{Color, Point2};
use rusttype::{point as rt_point, Font, Scale};
use tiny_skia::{
    BlendMode, FillRule, FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pixmap,
    PixmapPaint, PremultipliedColorU8, Stroke, StrokeDash, Transform,
};
use tracing::{debug, warn};

use crate::canvas::{Canvas, Surface};
use crate::errors::CanvasError;
use crate::path::{Path2, PathCmd};
use crate::photo::Photo;
use crate::snapshot::Snapshot;
use crate::style::{estimate_text_width, Rect, StrokeStyle, TextAlign, TextBaseline, TextStyle};

/// A TrueType/OpenType font used for labels and badges.
#[derive(Clone)]
pub struct FontSource {
    font: Font<'static>,
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSource")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontSource {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, CanvasError> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| CanvasError::Font("unrecognized font data".into()))?;
        Ok(Self { font })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CanvasError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| CanvasError::Font(format!("{}: {e}", path.display())))?;
        Self::from_bytes(bytes)
    }

    fn advance(&self, text: &str, px: f32) -> f32 {
        self.font
            .layout(text, Scale::uniform(px), rt_point(0.0, 0.0))
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .fold(0.0, f32::max)
    }
}

/// Anti-aliased raster canvas.
///
/// Drawing happens in logical units; `scale` maps them to device pixels, so a
/// 440 x 320 diagram at scale 2 produces an 880 x 640 frame.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    width: f64,
    height: f64,
    scale: f64,
    font: Option<FontSource>,
    warned_missing_font: bool,
}

impl PixmapCanvas {
    pub fn new(width: f64, height: f64, scale: f64) -> Result<Self, CanvasError> {
        let px_w = (width * scale).round();
        let px_h = (height * scale).round();
        let invalid = || CanvasError::InvalidSize {
            width: px_w.max(0.0) as u32,
            height: px_h.max(0.0) as u32,
        };
        if !(px_w >= 1.0 && px_h >= 1.0) {
            return Err(invalid());
        }
        let pixmap = Pixmap::new(px_w as u32, px_h as u32).ok_or_else(invalid)?;
        debug!(width, height, scale, "allocated pixmap canvas");
        Ok(Self {
            pixmap,
            width,
            height,
            scale,
            font: None,
            warned_missing_font: false,
        })
    }

    pub fn with_font(mut self, font: Option<FontSource>) -> Self {
        self.font = font;
        self
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color of a device pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale as f32, self.scale as f32)
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint
    }

    fn build_path(path: &Path2) -> Option<tiny_skia::Path> {
        if !path.is_finite() {
            return None;
        }
        let mut pb = PathBuilder::new();
        for cmd in path.commands() {
            match *cmd {
                PathCmd::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
                PathCmd::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
                PathCmd::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
                PathCmd::Close => pb.close(),
            }
        }
        pb.finish()
    }

    /// Source-over blend of `color` at `coverage` into one device pixel.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (w, h) = (self.pixmap.width() as i32, self.pixmap.height() as i32);
        if x >= w || y >= h {
            return;
        }
        let idx = (y * w + x) as usize;
        let pixels = self.pixmap.pixels_mut();
        let dst = pixels[idx];

        let sa = color.alpha_f32() * coverage.clamp(0.0, 1.0);
        let inv = 1.0 - sa;
        let out_a = (sa * 255.0 + dst.alpha() as f32 * inv).round().min(255.0);
        let mix = |s: u8, d: u8| (s as f32 * sa + d as f32 * inv).round().min(out_a) as u8;
        if let Some(px) = PremultipliedColorU8::from_rgba(
            mix(color.r, dst.red()),
            mix(color.g, dst.green()),
            mix(color.b, dst.blue()),
            out_a as u8,
        ) {
            pixels[idx] = px;
        }
    }
}

impl Canvas for PixmapCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn fill_path(&mut self, path: &Path2, color: Color) {
        let Some(p) = Self::build_path(path) else {
            return;
        };
        let ts = self.transform();
        self.pixmap
            .fill_path(&p, &Self::paint(color), FillRule::Winding, ts, None);
    }

    fn stroke_path(&mut self, path: &Path2, style: &StrokeStyle) {
        if !(style.width > 0.0 && style.width.is_finite()) {
            return;
        }
        let Some(p) = Self::build_path(path) else {
            return;
        };
        let dash = if style.is_dashed() {
            StrokeDash::new(style.dash.iter().map(|d| *d as f32).collect(), 0.0)
        } else {
            None
        };
        let stroke = Stroke {
            width: style.width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            dash,
            ..Stroke::default()
        };
        let ts = self.transform();
        self.pixmap
            .stroke_path(&p, &Self::paint(style.color), &stroke, ts, None);
    }

    fn fill_text(&mut self, text: &str, at: Point2, style: &TextStyle) {
        if text.is_empty() || !at.is_finite() {
            return;
        }
        let Some(font) = self.font.clone() else {
            if !self.warned_missing_font {
                warn!("no font loaded; text labels are skipped");
                self.warned_missing_font = true;
            }
            return;
        };

        let px = (style.size * self.scale) as f32;
        let scale = Scale::uniform(px);
        let width = font.advance(text, px);
        let mut x = (at.x * self.scale) as f32;
        match style.align {
            TextAlign::Left => {}
            TextAlign::Center => x -= width / 2.0,
            TextAlign::Right => x -= width,
        }
        let mut y = (at.y * self.scale) as f32;
        if style.baseline == TextBaseline::Middle {
            let vm = font.font.v_metrics(scale);
            y += (vm.ascent + vm.descent) / 2.0;
        }

        for glyph in font.font.layout(text, scale, rt_point(x, y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                self.blend_pixel(bb.min.x + gx as i32, bb.min.y + gy as i32, style.color, v);
            });
        }
    }

    fn text_width(&self, text: &str, size: f64) -> f64 {
        match &self.font {
            Some(font) => font.advance(text, size as f32) as f64,
            None => estimate_text_width(text, size),
        }
    }

    fn draw_image(&mut self, photo: &Photo, src: Rect, dst: Rect, alpha: f64) {
        if src.is_empty() || dst.is_empty() {
            return;
        }
        let Some((wx, wy, ww, wh)) = photo.pixel_window(src) else {
            return;
        };
        let Some(mut crop) = Pixmap::new(ww, wh) else {
            return;
        };
        let rgba = photo.as_rgba();
        for (i, px) in crop.pixels_mut().iter_mut().enumerate() {
            let (cx, cy) = (i as u32 % ww, i as u32 / ww);
            let p = rgba.get_pixel(wx + cx, wy + cy).0;
            *px = tiny_skia::ColorU8::from_rgba(p[0], p[1], p[2], p[3]).premultiply();
        }

        let kx = dst.w / src.w;
        let ky = dst.h / src.h;
        let tx = dst.x + (wx as f64 - src.x) * kx;
        let ty = dst.y + (wy as f64 - src.y) * ky;
        let ts = Transform::from_row(kx as f32, 0.0, 0.0, ky as f32, tx as f32, ty as f32)
            .post_scale(self.scale as f32, self.scale as f32);
        let paint = PixmapPaint {
            opacity: alpha.clamp(0.0, 1.0) as f32,
            blend_mode: BlendMode::SourceOver,
            quality: FilterQuality::Bilinear,
        };
        self.pixmap.draw_pixmap(0, 0, crop.as_ref(), &paint, ts, None);
    }
}

impl Surface for PixmapCanvas {
    type Frame = Snapshot;

    fn snapshot(&self) -> Result<Snapshot, CanvasError> {
        let png = self
            .pixmap
            .encode_png()
            .map_err(|e| CanvasError::Encode(e.to_string()))?;
        Ok(Snapshot {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            png,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            PixmapCanvas::new(0.0, 10.0, 1.0),
            Err(CanvasError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_scale_sets_device_size() {
        let c = PixmapCanvas::new(440.0, 320.0, 2.0).unwrap();
        assert_eq!((c.pixel_width(), c.pixel_height()), (880, 640));
        assert!((c.width() - 440.0).abs() < 1e-12);
    }

    #[test]
    fn test_fill_and_clear_write_pixels() {
        let mut c = PixmapCanvas::new(20.0, 20.0, 1.0).unwrap();
        c.clear(Color::rgb(10, 10, 20));
        assert_eq!(c.pixel(0, 0), Some(Color::rgb(10, 10, 20)));
        c.fill_rect(Rect::new(5.0, 5.0, 10.0, 10.0), Color::rgb(255, 0, 0));
        assert_eq!(c.pixel(10, 10), Some(Color::rgb(255, 0, 0)));
        assert_eq!(c.pixel(1, 1), Some(Color::rgb(10, 10, 20)));
    }

    #[test]
    fn test_text_without_font_is_skipped() {
        let mut c = PixmapCanvas::new(20.0, 20.0, 1.0).unwrap();
        c.clear(Color::BLACK);
        c.fill_text("A", Point2::new(2.0, 15.0), &TextStyle::new(12.0, Color::WHITE));
        assert_eq!(c.pixel(6, 10), Some(Color::BLACK));
    }

    #[test]
    fn test_draw_image_copies_region() {
        let mut img = image::RgbaImage::new(4, 4);
        for p in img.pixels_mut() {
            *p = image::Rgba([0, 200, 0, 255]);
        }
        let photo = Photo::from_rgba(img);
        let mut c = PixmapCanvas::new(8.0, 8.0, 1.0).unwrap();
        c.clear(Color::BLACK);
        c.draw_image(&photo, photo.bounds(), Rect::new(0.0, 0.0, 8.0, 8.0), 1.0);
        assert_eq!(c.pixel(4, 4), Some(Color::rgb(0, 200, 0)));
    }

    #[test]
    fn test_snapshot_is_decodable_png() {
        let mut c = PixmapCanvas::new(12.0, 10.0, 1.0).unwrap();
        c.clear(Color::WHITE);
        let snap = c.snapshot().unwrap();
        assert_eq!(&snap.png[1..4], b"PNG");
        let photo = snap.decode().unwrap();
        assert_eq!((photo.width(), photo.height()), (12, 10));
        assert!(snap.to_data_url().starts_with("data:image/png;base64,"));
    }
}
