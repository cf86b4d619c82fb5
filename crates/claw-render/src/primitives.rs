//! Arrows, dimension callouts, labels, badges and target markers.
//!
//! Every function draws straight onto a [`Canvas`] and keeps no state.
//! Degenerate input (coincident endpoints, non-finite points) draws nothing
//! for the affected part instead of producing NaN geometry.

use claw_canvas::{Canvas, Path2, Rect, StrokeStyle, TextStyle};
use claw_geometry::{default_tolerance, Camera};
use claw_types::{Color, Point2, Point3};

use crate::palette;

/// Half-angle between the arrowhead's sides and the shaft, in radians.
const HEAD_SPREAD: f64 = 0.4;

/// Curve parameter at which a curved arrow's head takes its direction.
const TANGENT_T: f64 = 0.95;

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Vec<f64>,
    pub head_len: f64,
}

impl ArrowStyle {
    /// Straight diagram arrow: dashed 6/4, width 2.5, head 10.
    pub fn diagram(color: Color) -> Self {
        Self {
            color,
            width: 2.5,
            dash: vec![6.0, 4.0],
            head_len: 10.0,
        }
    }

    /// Curved diagram arrow: dashed 5/4, width 2.5, head 9.
    pub fn curve(color: Color) -> Self {
        Self {
            color,
            width: 2.5,
            dash: vec![5.0, 4.0],
            head_len: 9.0,
        }
    }

    /// Photo move arrow scaled by the marker scale `s`.
    pub fn photo_move(s: f64) -> Self {
        Self {
            color: palette::MOVE_LINE,
            width: 3.0 * s,
            dash: vec![8.0 * s, 6.0 * s],
            head_len: 12.0 * s,
        }
    }

    fn stroke(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            width: self.width,
            dash: self.dash.clone(),
        }
    }
}

/// Filled triangular head with its tip at `tip`, pointing along `angle`.
pub fn arrow_head<C: Canvas + ?Sized>(canvas: &mut C, tip: Point2, angle: f64, len: f64, color: Color) {
    let side = |a: f64| tip.offset(-len * a.cos(), -len * a.sin());
    canvas.fill_path(
        &Path2::polygon(&[tip, side(angle - HEAD_SPREAD), side(angle + HEAD_SPREAD)]),
        color,
    );
}

/// Dashed shaft plus a solid head. Returns `false` when the segment has no
/// length and nothing was drawn.
pub fn arrow<C: Canvas + ?Sized>(canvas: &mut C, from: Point2, to: Point2, style: &ArrowStyle) -> bool {
    if !from.is_finite() || !to.is_finite() || default_tolerance().points_coincident(&from, &to) {
        return false;
    }
    canvas.stroke_path(&Path2::line(from, to), &style.stroke());
    arrow_head(canvas, to, from.angle_to(&to), style.head_len, style.color);
    true
}

/// Point on the quadratic Bézier `p0 -> ctrl -> p1` at `t`.
pub fn quad_point(p0: Point2, ctrl: Point2, p1: Point2, t: f64) -> Point2 {
    let u = 1.0 - t;
    Point2::new(
        u * u * p0.x + 2.0 * u * t * ctrl.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * ctrl.y + t * t * p1.y,
    )
}

/// Quadratic arrow through `midpoint(from, to) + control_offset`; the head
/// follows the curve's direction at `t = 0.95`.
pub fn curved_arrow<C: Canvas + ?Sized>(
    canvas: &mut C,
    from: Point2,
    to: Point2,
    control_offset: (f64, f64),
    style: &ArrowStyle,
) -> bool {
    let tol = default_tolerance();
    let ctrl = from.midpoint(&to).offset(control_offset.0, control_offset.1);
    if !ctrl.is_finite() || tol.points_coincident(&from, &to) {
        return false;
    }
    canvas.stroke_path(&Path2::new().move_to(from).quad_to(ctrl, to), &style.stroke());

    let near = quad_point(from, ctrl, to, TANGENT_T);
    let angle = if tol.points_coincident(&near, &to) {
        from.angle_to(&to)
    } else {
        near.angle_to(&to)
    };
    arrow_head(canvas, to, angle, style.head_len, style.color);
    true
}

/// Centered, vertically middled text.
pub fn label<C: Canvas + ?Sized>(canvas: &mut C, text: &str, at: Point2, color: Color, size: f64) {
    canvas.fill_text(text, at, &TextStyle::new(size, color).centered().middle());
}

/// Measurement callout between two model points.
///
/// The line runs parallel to the projected segment, shifted `offset` pixels
/// along its left normal, with end ticks from `0.5` to `1.5` times the offset
/// and the label at `1.8` times the offset past the midpoint.
pub fn dimension_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    camera: &Camera,
    from: Point3,
    to: Point3,
    text: &str,
    offset: f64,
) -> bool {
    let a = camera.project(&from);
    let b = camera.project(&to);
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len = (dx * dx + dy * dy).sqrt();
    if default_tolerance().is_zero_length(len) {
        return false;
    }
    let (nx, ny) = (-dy / len * offset, dx / len * offset);

    canvas.stroke_path(
        &Path2::line(a.offset(nx, ny), b.offset(nx, ny)),
        &StrokeStyle::dashed(palette::DIMENSION_LINE, 1.0, 3.0, 3.0),
    );
    let tick = StrokeStyle::solid(palette::DIMENSION_LINE, 1.0);
    for end in [a, b] {
        canvas.stroke_path(
            &Path2::line(end.offset(nx * 0.5, ny * 0.5), end.offset(nx * 1.5, ny * 1.5)),
            &tick,
        );
    }
    label(
        canvas,
        text,
        a.midpoint(&b).offset(nx * 1.8, ny * 1.8),
        palette::DIMENSION_TEXT,
        10.0,
    );
    true
}

/// `Step n  title` badge in the top-left corner; width is the measured text
/// plus 18. Returns the badge rectangle.
pub fn step_badge<C: Canvas + ?Sized>(canvas: &mut C, number: usize, title: &str) -> Rect {
    const SIZE: f64 = 11.0;
    let text = format!("Step {number}  {title}");
    let rect = Rect::new(8.0, 8.0, canvas.text_width(&text, SIZE) + 18.0, 24.0);
    canvas.fill_path(&Path2::round_rect(rect.x, rect.y, rect.w, rect.h, 6.0), palette::BADGE);
    canvas.fill_text(
        &text,
        Point2::new(16.0, 20.0),
        &TextStyle::new(SIZE, palette::WHITE).middle(),
    );
    rect
}

/// `Move n` badge for photo overlays at marker scale `s`.
///
/// Width is the measured text plus three paddings.
pub fn move_badge<C: Canvas + ?Sized>(canvas: &mut C, number: usize, s: f64) -> Rect {
    let size = 16.0 * s;
    let pad = 10.0 * s;
    let h = 32.0 * s;
    let text = format!("Move {number}");
    let rect = Rect::new(12.0 * s, 12.0 * s, canvas.text_width(&text, size) + pad * 3.0, h);
    canvas.fill_path(&Path2::round_rect(rect.x, rect.y, rect.w, rect.h, 6.0 * s), palette::RED);
    canvas.fill_text(
        &text,
        Point2::new(rect.x + pad, rect.y + h / 2.0),
        &TextStyle::new(size, palette::WHITE).middle(),
    );
    rect
}

/// Small numbered tag placed next to a target in overview mode.
pub fn number_tag<C: Canvas + ?Sized>(canvas: &mut C, number: usize, at: Point2, s: f64) -> Rect {
    let size = 13.0 * s;
    let text = number.to_string();
    let w = canvas.text_width(&text, size) + 12.0 * s;
    let rect = Rect::new(at.x + 10.0 * s, at.y - 30.0 * s, w, 20.0 * s);
    canvas.fill_path(&Path2::round_rect(rect.x, rect.y, rect.w, rect.h, 5.0 * s), palette::BADGE);
    label(canvas, &text, rect.center(), palette::WHITE, size);
    rect
}

/// Approximates a canvas shadow blur with a few widening, fading strokes
/// under the path, then strokes the path itself.
pub fn glow_stroke<C: Canvas + ?Sized>(canvas: &mut C, path: &Path2, color: Color, width: f64, blur: f64) {
    const PASSES: [(f64, f64); 3] = [(1.0, 0.12), (0.66, 0.2), (0.33, 0.3)];
    for (spread, alpha) in PASSES {
        canvas.stroke_path(path, &StrokeStyle::solid(color.faded(alpha), width + blur * spread));
    }
    canvas.stroke_path(path, &StrokeStyle::solid(color, width));
}

/// Red dot with a soft glow and a white ring.
pub fn target_dot<C: Canvas + ?Sized>(canvas: &mut C, at: Point2, s: f64) {
    let r = 6.0 * s;
    let blur = 12.0 * s;
    for (grow, alpha) in [(1.0, 0.12), (0.6, 0.22), (0.3, 0.35)] {
        canvas.fill_path(&Path2::circle(at, r + blur * grow), palette::RED.faded(alpha));
    }
    canvas.fill_path(&Path2::circle(at, r), palette::RED);
    canvas.stroke_path(&Path2::circle(at, r), &StrokeStyle::solid(palette::WHITE, 2.0 * s));
}

/// Two rings and a cross marking a target when the gripper was not located.
pub fn crosshair<C: Canvas + ?Sized>(canvas: &mut C, at: Point2, s: f64) {
    let size = 40.0 * s;
    let ring = StrokeStyle::solid(palette::CROSSHAIR_RING, 2.5 * s);
    canvas.stroke_path(&Path2::circle(at, size), &ring);
    canvas.stroke_path(&Path2::circle(at, size * 0.5), &ring);

    let line = StrokeStyle::solid(palette::CROSSHAIR_LINE, 2.0 * s);
    let reach = size * 1.3;
    canvas.stroke_path(&Path2::line(at.offset(-reach, 0.0), at.offset(reach, 0.0)), &line);
    canvas.stroke_path(&Path2::line(at.offset(0.0, -reach), at.offset(0.0, reach)), &line);
}

/// Outline circle, optionally dashed 3/3.
pub fn ring<C: Canvas + ?Sized>(canvas: &mut C, center: Point2, radius: f64, color: Color, dashed: bool) {
    let style = if dashed {
        StrokeStyle::dashed(color, 2.0, 3.0, 3.0)
    } else {
        StrokeStyle::solid(color, 2.0)
    };
    canvas.stroke_path(&Path2::circle(center, radius), &style);
}
