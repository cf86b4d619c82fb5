//! Resolution-independent path model shared by every surface.

use claw_geometry::Affine2;
use claw_types::Point2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point2),
    LineTo(Point2),
    QuadTo(Point2, Point2),
    Close,
}

/// A sequence of move/line/quad commands in surface coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path2 {
    cmds: Vec<PathCmd>,
}

impl Path2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point2) -> Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point2) -> Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    pub fn quad_to(mut self, ctrl: Point2, p: Point2) -> Self {
        self.cmds.push(PathCmd::QuadTo(ctrl, p));
        self
    }

    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn line(a: Point2, b: Point2) -> Self {
        Self::new().move_to(a).line_to(b)
    }

    /// Closed polygon through `points`; empty when fewer than two are given.
    pub fn polygon(points: &[Point2]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new();
        };
        if rest.is_empty() {
            return Self::new();
        }
        rest.iter()
            .fold(Self::new().move_to(*first), |p, pt| p.line_to(*pt))
            .close()
    }

    /// Circle approximated by eight quadratic arcs.
    pub fn circle(center: Point2, radius: f64) -> Self {
        const SEGMENTS: usize = 8;
        let step = std::f64::consts::TAU / SEGMENTS as f64;
        let ctrl_r = radius / (step / 2.0).cos();
        let on = |k: usize| {
            let a = step * k as f64;
            center.offset(a.cos() * radius, a.sin() * radius)
        };
        let mut path = Self::new().move_to(on(0));
        for k in 0..SEGMENTS {
            let mid = step * (k as f64 + 0.5);
            let ctrl = center.offset(mid.cos() * ctrl_r, mid.sin() * ctrl_r);
            path = path.quad_to(ctrl, on(k + 1));
        }
        path.close()
    }

    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::polygon(&[
            Point2::new(x, y),
            Point2::new(x + w, y),
            Point2::new(x + w, y + h),
            Point2::new(x, y + h),
        ])
    }

    /// Rectangle with corners rounded by quadratic arcs of radius `r`.
    pub fn round_rect(x: f64, y: f64, w: f64, h: f64, r: f64) -> Self {
        let r = r.clamp(0.0, (w.min(h) / 2.0).max(0.0));
        Self::new()
            .move_to(Point2::new(x + r, y))
            .line_to(Point2::new(x + w - r, y))
            .quad_to(Point2::new(x + w, y), Point2::new(x + w, y + r))
            .line_to(Point2::new(x + w, y + h - r))
            .quad_to(Point2::new(x + w, y + h), Point2::new(x + w - r, y + h))
            .line_to(Point2::new(x + r, y + h))
            .quad_to(Point2::new(x, y + h), Point2::new(x, y + h - r))
            .line_to(Point2::new(x, y + r))
            .quad_to(Point2::new(x, y), Point2::new(x + r, y))
            .close()
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Every point the path references, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.cmds.iter().flat_map(|c| match *c {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => vec![p],
            PathCmd::QuadTo(c, p) => vec![c, p],
            PathCmd::Close => Vec::new(),
        })
    }

    pub fn is_finite(&self) -> bool {
        self.points().all(|p| p.is_finite())
    }

    pub fn transformed(&self, m: &Affine2) -> Self {
        let t = |p: Point2| m.transform_point(&p);
        Self {
            cmds: self
                .cmds
                .iter()
                .map(|c| match *c {
                    PathCmd::MoveTo(p) => PathCmd::MoveTo(t(p)),
                    PathCmd::LineTo(p) => PathCmd::LineTo(t(p)),
                    PathCmd::QuadTo(c, p) => PathCmd::QuadTo(t(c), t(p)),
                    PathCmd::Close => PathCmd::Close,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polygon_closes() {
        let p = Path2::polygon(&[Point2::ORIGIN, Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)]);
        assert_eq!(p.commands().len(), 4);
        assert_eq!(p.commands()[3], PathCmd::Close);
    }

    #[test]
    fn test_degenerate_polygon_is_empty() {
        assert!(Path2::polygon(&[]).is_empty());
        assert!(Path2::polygon(&[Point2::ORIGIN]).is_empty());
    }

    #[test]
    fn test_circle_endpoints_on_radius() {
        let c = Point2::new(10.0, 10.0);
        let path = Path2::circle(c, 5.0);
        for cmd in path.commands() {
            let end = match *cmd {
                PathCmd::MoveTo(p) | PathCmd::QuadTo(_, p) => p,
                _ => continue,
            };
            assert_relative_eq!(end.distance_to(&c), 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_circle_controls_outside_radius() {
        let c = Point2::new(0.0, 0.0);
        let path = Path2::circle(c, 8.0);
        let expected = 8.0 / (std::f64::consts::PI / 8.0).cos();
        for cmd in path.commands() {
            if let PathCmd::QuadTo(ctrl, _) = *cmd {
                assert_relative_eq!(ctrl.distance_to(&c), expected, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_transformed_moves_every_point() {
        let path = Path2::line(Point2::ORIGIN, Point2::new(2.0, 0.0));
        let moved = path.transformed(&Affine2::translation(3.0, 4.0));
        let pts: Vec<Point2> = moved.points().collect();
        assert_eq!(pts, vec![Point2::new(3.0, 4.0), Point2::new(5.0, 4.0)]);
    }

    #[test]
    fn test_nan_point_makes_path_non_finite() {
        let path = Path2::line(Point2::ORIGIN, Point2::new(f64::NAN, 0.0));
        assert!(!path.is_finite());
    }
}
