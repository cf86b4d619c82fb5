//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets a scenario collect every failure in one pass.

use claw_canvas::{DrawCall, RecordingCanvas};
use claw_geometry::{Camera, Cuboid, GlyphTransform, ProjectedCuboid};
use claw_types::Point2;

use crate::helpers::closest_pair;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Projection Oracles ──────────────────────────────────────────────────────

/// Shifting a point along `(1, 1, 1)` must not move its projection.
pub fn check_diagonal_shift_invisible(camera: &Camera, cuboid: &Cuboid, t: f64) -> OracleVerdict {
    let name = "diagonal_shift";
    let base = cuboid.project(&camera.projection, &camera.view_dir);
    let mut shifted = *cuboid;
    shifted.center = cuboid.center.shifted(t);
    let moved = shifted.project(&camera.projection, &camera.view_dir);

    let drift = base
        .screen
        .iter()
        .zip(moved.screen.iter())
        .map(|(a, b)| a.distance_to(b))
        .fold(0.0_f64, f64::max);
    if drift < 1e-9 {
        OracleVerdict::pass_val(name, format!("max drift {drift:.2e} for t={t}"), drift)
    } else {
        OracleVerdict::fail_val(name, format!("corners drifted {drift:.6} for t={t}"), drift)
    }
}

/// At most three faces, no two opposite, painted in non-decreasing depth.
pub fn check_face_culling(projected: &ProjectedCuboid) -> OracleVerdict {
    let name = "face_culling";
    let faces = &projected.faces;
    if faces.len() > 3 {
        return OracleVerdict::fail(name, format!("{} faces visible", faces.len()));
    }
    for (i, a) in faces.iter().enumerate() {
        for b in &faces[i + 1..] {
            if a.face.normal.dot(&b.face.normal) < -0.5 {
                return OracleVerdict::fail(
                    name,
                    format!("opposite faces {:?} and {:?} both visible", a.face.kind, b.face.kind),
                );
            }
        }
    }
    if let Some(w) = faces.windows(2).find(|w| w[0].depth > w[1].depth) {
        return OracleVerdict::fail(
            name,
            format!("{:?} (depth {}) painted before {:?} (depth {})", w[0].face.kind, w[0].depth, w[1].face.kind, w[1].depth),
        );
    }
    OracleVerdict::pass(name, format!("{:?}", projected.visible_kinds()))
}

// ── Layout Oracles ──────────────────────────────────────────────────────────

/// Every point lies on the `width` x `height` surface.
pub fn check_on_surface(points: &[Point2], width: f64, height: f64) -> OracleVerdict {
    let name = "on_surface";
    match points
        .iter()
        .position(|p| !(0.0..=width).contains(&p.x) || !(0.0..=height).contains(&p.y))
    {
        Some(i) => OracleVerdict::fail(
            name,
            format!("point {i} at ({:.1}, {:.1}) is off the {width}x{height} surface", points[i].x, points[i].y),
        ),
        None => OracleVerdict::pass(name, format!("{} points inside", points.len())),
    }
}

/// Every pair of points is at least `min_dist` apart.
///
/// The resolver is a single greedy pass, so this can legitimately fail for
/// three or more crowded points; use it for pairs or well-spread sets.
pub fn check_min_separation(points: &[Point2], min_dist: f64) -> OracleVerdict {
    let name = "min_separation";
    match closest_pair(points) {
        None => OracleVerdict::pass(name, "fewer than two points".to_string()),
        Some((i, j, d)) if d + 1e-9 >= min_dist => {
            OracleVerdict::pass_val(name, format!("closest pair ({i}, {j}) at {d:.2}"), d)
        }
        Some((i, j, d)) => OracleVerdict::fail_val(
            name,
            format!("pair ({i}, {j}) only {d:.2} apart, need {min_dist}"),
            d,
        ),
    }
}

// ── Glyph Oracles ───────────────────────────────────────────────────────────

/// Glyph scale and skew stay inside their documented ranges.
pub fn check_glyph_bounds(transform: &GlyphTransform) -> OracleVerdict {
    let name = "glyph_bounds";
    let (sy_lo, sy_hi) = GlyphTransform::SCALE_Y_RANGE;
    let (sk_lo, sk_hi) = GlyphTransform::SKEW_X_RANGE;
    let ok = (sy_lo..=sy_hi).contains(&transform.scale_y) && (sk_lo..=sk_hi).contains(&transform.skew_x);
    let detail = format!("scale_y={:.3} skew_x={:.3}", transform.scale_y, transform.skew_x);
    if ok {
        OracleVerdict::pass(name, detail)
    } else {
        OracleVerdict::fail(name, detail)
    }
}

// ── Trace Oracles ───────────────────────────────────────────────────────────

/// The host photograph is the first thing drawn.
pub fn check_photo_first(canvas: &RecordingCanvas) -> OracleVerdict {
    let name = "photo_first";
    match canvas.calls().first() {
        Some(DrawCall::Image { alpha, .. }) if (*alpha - 1.0).abs() < 1e-12 => {
            OracleVerdict::pass(name, "opaque photo drawn first".to_string())
        }
        Some(other) => OracleVerdict::fail(name, format!("first call was {other:?}")),
        None => OracleVerdict::fail(name, "nothing drawn".to_string()),
    }
}

/// Every drawn point is finite; degenerate inputs must never leak NaN paths.
pub fn check_finite_trace(canvas: &RecordingCanvas) -> OracleVerdict {
    let name = "finite_trace";
    let points = canvas.all_points();
    match points.iter().position(|p| !p.is_finite()) {
        Some(i) => OracleVerdict::fail(name, format!("point {i} is {:?}", points[i])),
        None => OracleVerdict::pass(name, format!("{} points finite", points.len())),
    }
}

/// Run the checks that hold for every single-move overlay.
pub fn run_overlay_oracles(canvas: &RecordingCanvas, targets: &[Point2], width: f64, height: f64) -> Vec<OracleVerdict> {
    vec![
        check_photo_first(canvas),
        check_finite_trace(canvas),
        check_on_surface(targets, width, height),
    ]
}
