//! The two-pronged gripper glyph, for diagrams and for photo overlays.

use claw_canvas::{Canvas, Path2, StrokeStyle};
use claw_geometry::{Affine2, GlyphTransform};
use claw_types::{BBox, Color, Point2, Side, Step};

use crate::palette;

/// How the gripper is shown at a photo target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GripperRenderMode {
    /// Synthesized glyph distorted by the camera hint.
    Schematic,
    /// The gripper's own pixels, cropped from its current location.
    PhotoCrop(BBox),
}

impl GripperRenderMode {
    /// Crop when the step carries a usable source box, schematic otherwise.
    pub fn for_step(step: &Step) -> Self {
        match step.usable_bbox() {
            Some(bbox) => GripperRenderMode::PhotoCrop(bbox),
            None => GripperRenderMode::Schematic,
        }
    }
}

fn prong_color(side: Side, active: Option<Side>) -> (Color, f64) {
    if active == Some(side) {
        (palette::CLAW_ACTIVE, 1.4)
    } else {
        (palette::CLAW, 1.0)
    }
}

/// Flat diagram gripper centered above `at`: dashed cable, cross bar, hub and
/// two curved prongs ending just below `at`.
pub fn draw_diagram_gripper<C: Canvas + ?Sized>(canvas: &mut C, at: Point2, size: f64, active: Option<Side>) {
    let bar_y = at.y - size * 0.3;
    canvas.stroke_path(
        &Path2::line(Point2::new(at.x, at.y - size * 1.4), Point2::new(at.x, bar_y)),
        &StrokeStyle::dashed(palette::CLAW, 2.0, 3.0, 3.0),
    );
    canvas.stroke_path(
        &Path2::line(Point2::new(at.x - size * 0.5, bar_y), Point2::new(at.x + size * 0.5, bar_y)),
        &StrokeStyle::solid(palette::CLAW, 3.0),
    );
    canvas.fill_path(&Path2::circle(Point2::new(at.x, bar_y), 2.5), palette::CLAW);

    for side in [Side::Left, Side::Right] {
        let d = side.sign();
        let (color, weight) = prong_color(side, active);
        let tip = Point2::new(at.x + d * size * 0.3, at.y + size * 0.5);
        let prong = Path2::new()
            .move_to(Point2::new(at.x + d * size * 0.5, bar_y))
            .quad_to(Point2::new(at.x + d * size * 0.5, at.y + size * 0.15), tip);
        canvas.stroke_path(&prong, &StrokeStyle::solid(color, 2.5 * weight));
        canvas.fill_path(&Path2::circle(tip, 2.0), color);
    }
}

/// Glyph-local outline of the schematic gripper, tips near the origin.
struct GlyphShape {
    shaft: Path2,
    body_back: Path2,
    body_front: Path2,
    prongs: [(Side, Path2); 2],
}

fn glyph_shape(size: f64, arm_spread: f64) -> GlyphShape {
    let s = size;
    let top = -0.6 * s;
    let bottom = -0.42 * s;
    let half = 0.5 * s;
    let depth = 0.08 * s;

    let rect = |dx: f64, dy: f64| {
        Path2::polygon(&[
            Point2::new(-half + dx, top + dy),
            Point2::new(half + dx, top + dy),
            Point2::new(half + dx, bottom + dy),
            Point2::new(-half + dx, bottom + dy),
        ])
    };

    let prong = |side: Side| {
        let d = side.sign();
        Path2::new()
            .move_to(Point2::new(d * half * 0.9, bottom))
            .quad_to(
                Point2::new(d * half * 1.1 * arm_spread, -0.15 * s),
                Point2::new(d * 0.28 * s * arm_spread, 0.0),
            )
    };

    GlyphShape {
        shaft: Path2::line(Point2::new(0.0, -1.6 * s), Point2::new(0.0, top)),
        body_back: rect(depth, -depth),
        body_front: rect(0.0, 0.0),
        prongs: [(Side::Left, prong(Side::Left)), (Side::Right, prong(Side::Right))],
    }
}

/// Synthetic gripper whose tips land on `anchor`, squashed and sheared by
/// `transform`. Only the glyph geometry is transformed; stroke widths stay
/// in surface units.
pub fn draw_schematic_glyph<C: Canvas + ?Sized>(
    canvas: &mut C,
    anchor: Point2,
    transform: &GlyphTransform,
    size: f64,
    active: Option<Side>,
) -> Affine2 {
    let m = transform.affine(anchor);
    let shape = glyph_shape(size, transform.arm_spread);
    let line_w = (size * 0.05).max(1.0);

    canvas.stroke_path(
        &shape.shaft.transformed(&m),
        &StrokeStyle::dashed(palette::CLAW, line_w, line_w * 2.0, line_w * 1.5),
    );
    canvas.fill_path(&shape.body_back.transformed(&m), Color::rgb(0x2a, 0x86, 0xb0));
    canvas.fill_path(&shape.body_front.transformed(&m), palette::CLAW);
    for (side, prong) in &shape.prongs {
        let (color, weight) = prong_color(*side, active);
        canvas.stroke_path(&prong.transformed(&m), &StrokeStyle::solid(color, line_w * 1.6 * weight));
    }
    m
}
