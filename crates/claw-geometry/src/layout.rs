//! Greedy separation of label/target anchors on a drawing surface.

use claw_types::{AnchorPoint, Point2};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Extra clearance added to every push, in surface pixels.
const PUSH_SLACK: f64 = 5.0;

/// Direction used when two anchors coincide exactly.
const COINCIDENT_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Separation and clamping parameters for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Pairs closer than this get pushed apart.
    pub min_dist: f64,
    /// Points are clamped to `[margin, size - margin]` on each axis.
    pub margin: f64,
}

impl LayoutParams {
    pub const fn new(min_dist: f64, margin: f64) -> Self {
        Self { min_dist, margin }
    }

    /// Parameters as fractions of the surface's shorter side.
    pub fn for_surface(width: f64, height: f64, min_dist_fraction: f64, margin_fraction: f64) -> Self {
        let short = width.min(height).max(0.0);
        Self::new(short * min_dist_fraction, short * margin_fraction)
    }
}

impl Default for LayoutParams {
    /// 500 x 500 reference surface.
    fn default() -> Self {
        Self::for_surface(500.0, 500.0, 0.08, 0.04)
    }
}

fn clamp_axis(v: f64, size: f64, margin: f64) -> f64 {
    let lo = margin.max(0.0);
    let hi = size - lo;
    if hi < lo {
        return size / 2.0;
    }
    v.clamp(lo, hi)
}

fn clamp_point(p: Point2, width: f64, height: f64, margin: f64) -> Point2 {
    Point2::new(
        clamp_axis(p.x, width, margin),
        clamp_axis(p.y, height, margin),
    )
}

/// One greedy pass over `points`, in place.
///
/// For `i` in `1..n` and `j` in `0..i`, a pair closer than `min_dist` is
/// pushed apart along the angle from `j` to `i` (45° when coincident):
/// `i` moves forward and `j` moves back, each by `(min_dist - d) / 2 + 5`.
/// Both are then clamped into the surface minus the margin.
///
/// The pass is order-dependent and does not iterate to a fixed point: a pair
/// separated early can be pushed back into range by a later pair.
#[instrument(skip(points, params), fields(count = points.len()))]
pub fn separate_points(points: &mut [Point2], width: f64, height: f64, params: &LayoutParams) {
    let tol = crate::default_tolerance();
    let mut pushes = 0usize;

    for i in 1..points.len() {
        for j in 0..i {
            let (a, b) = (points[j], points[i]);
            let d = a.distance_to(&b);
            if !d.is_finite() || d >= params.min_dist {
                continue;
            }
            let angle = if tol.points_coincident(&a, &b) {
                COINCIDENT_ANGLE
            } else {
                a.angle_to(&b)
            };
            let push = (params.min_dist - d) / 2.0 + PUSH_SLACK;
            let (dx, dy) = (angle.cos() * push, angle.sin() * push);

            points[i] = clamp_point(b.offset(dx, dy), width, height, params.margin);
            points[j] = clamp_point(a.offset(-dx, -dy), width, height, params.margin);
            pushes += 1;
            debug!(i, j, distance = d, push, "separated anchors");
        }
    }

    info!(pushes, "layout pass complete");
}

/// Convert percent anchors to pixels (clamping into `[0,100]` first) and run
/// one separation pass.
pub fn resolve_anchors(
    anchors: &[AnchorPoint],
    width: f64,
    height: f64,
    params: &LayoutParams,
) -> Vec<Point2> {
    let mut points: Vec<Point2> = anchors
        .iter()
        .map(|a| a.clamped(0.0, 100.0).to_pixels(width, height))
        .collect();
    separate_points(&mut points, width, height, params);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_reference_surface() {
        let p = LayoutParams::default();
        assert!((p.min_dist - 40.0).abs() < 1e-12);
        assert!((p.margin - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_pair_is_separated() {
        let anchors = [AnchorPoint::new(50.0, 50.0), AnchorPoint::new(50.0, 50.0)];
        let pts = resolve_anchors(&anchors, 500.0, 500.0, &LayoutParams::new(40.0, 20.0));

        let d = pts[0].distance_to(&pts[1]);
        assert!(d >= 40.0, "distance {d}");
        // push 25 each way along 45°
        assert!((d - 50.0).abs() < 1e-9);
        let off = 25.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((pts[1].x - (250.0 + off)).abs() < 1e-9);
        assert!((pts[0].y - (250.0 - off)).abs() < 1e-9);
        for p in &pts {
            assert!((20.0..=480.0).contains(&p.x));
            assert!((20.0..=480.0).contains(&p.y));
        }
    }

    #[test]
    fn test_far_apart_points_are_untouched() {
        let mut pts = vec![Point2::new(100.0, 100.0), Point2::new(300.0, 300.0)];
        separate_points(&mut pts, 500.0, 500.0, &LayoutParams::new(40.0, 20.0));
        assert_eq!(pts, vec![Point2::new(100.0, 100.0), Point2::new(300.0, 300.0)]);
    }

    #[test]
    fn test_single_pass_does_not_guarantee_min_dist() {
        let params = LayoutParams::new(40.0, 0.0);
        let mut pts = vec![
            Point2::new(500.0, 500.0),
            Point2::new(545.0, 500.0),
            Point2::new(505.0, 500.0),
        ];
        separate_points(&mut pts, 1000.0, 1000.0, &params);

        assert!((pts[0].x - 477.5).abs() < 1e-9);
        assert!((pts[1].x - 561.25).abs() < 1e-9);
        assert!((pts[2].x - 511.25).abs() < 1e-9);
        // pair (0, 2) ends closer than min_dist after the later push
        assert!(pts[0].distance_to(&pts[2]) < params.min_dist);
    }

    #[test]
    fn test_pushed_points_stay_inside_margin() {
        let anchors = [AnchorPoint::new(100.0, 100.0), AnchorPoint::new(100.0, 100.0)];
        let pts = resolve_anchors(&anchors, 500.0, 500.0, &LayoutParams::new(40.0, 20.0));
        for p in &pts {
            assert!(p.x <= 480.0 && p.y <= 480.0);
        }
    }

    #[test]
    fn test_out_of_range_anchor_is_clamped_before_layout() {
        let anchors = [AnchorPoint::new(150.0, -20.0)];
        let pts = resolve_anchors(&anchors, 200.0, 100.0, &LayoutParams::default());
        assert_eq!(pts, vec![Point2::new(200.0, 0.0)]);
    }

    #[test]
    fn test_tiny_surface_does_not_panic() {
        let mut pts = vec![Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)];
        separate_points(&mut pts, 10.0, 10.0, &LayoutParams::new(40.0, 20.0));
        assert_eq!(pts[0], Point2::new(5.0, 5.0));
        assert_eq!(pts[1], Point2::new(5.0, 5.0));
    }
}
