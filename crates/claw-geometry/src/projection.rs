//! Oblique projection from model space onto the drawing surface.

use claw_types::{Point2, Point3};

use crate::vector::Vec3;

/// Maps a model-space point to a drawing-surface point.
pub trait Projection {
    fn project(&self, p: &Point3) -> Point2;
}

impl<F> Projection for F
where
    F: Fn(&Point3) -> Point2,
{
    fn project(&self, p: &Point3) -> Point2 {
        self(p)
    }
}

/// Parallel 30° oblique projection used for technique diagrams.
///
/// `screen.x = origin.x + (x - z) * cos30 * scale`,
/// `screen.y = origin.y - y * scale + (x + z) * sin30 * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    pub scale: f64,
    pub origin: Point2,
}

impl IsoProjection {
    pub const COS30: f64 = 0.866_025_403_784_438_6;
    pub const SIN30: f64 = 0.5;

    pub fn new(scale: f64, origin: Point2) -> Self {
        Self { scale, origin }
    }

    /// Origin placed at a fraction of a `width` x `height` surface.
    pub fn for_surface(width: f64, height: f64, scale: f64, origin_fraction: (f64, f64)) -> Self {
        Self::new(
            scale,
            Point2::new(width * origin_fraction.0, height * origin_fraction.1),
        )
    }
}

impl Projection for IsoProjection {
    fn project(&self, p: &Point3) -> Point2 {
        let s = self.scale;
        Point2::new(
            self.origin.x + (p.x - p.z) * Self::COS30 * s,
            self.origin.y - p.y * s + (p.x + p.z) * Self::SIN30 * s,
        )
    }
}

/// A projection paired with the direction toward the viewer used for culling.
///
/// The view direction is carried explicitly rather than derived from the
/// projection, so alternative projections can be exercised in isolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub projection: IsoProjection,
    pub view_dir: Vec3,
}

impl Camera {
    pub fn new(projection: IsoProjection, view_dir: Vec3) -> Self {
        Self {
            projection,
            view_dir,
        }
    }

    /// The canonical diagram camera for a surface of `width` x `height`.
    pub fn diagram(width: f64, height: f64) -> Self {
        Self::new(
            IsoProjection::for_surface(width, height, 2.0, (0.5, 0.56)),
            Vec3::DIAGRAM_VIEW,
        )
    }

    pub fn project(&self, p: &Point3) -> Point2 {
        self.projection.project(p)
    }

    pub fn project_xyz(&self, x: f64, y: f64, z: f64) -> Point2 {
        self.projection.project(&Point3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_projects_to_surface_origin() {
        let proj = IsoProjection::for_surface(440.0, 320.0, 2.0, (0.5, 0.56));
        let p = proj.project(&Point3::ORIGIN);
        assert_eq!(p, Point2::new(220.0, 320.0 * 0.56));
    }

    #[test]
    fn test_unit_axes() {
        let proj = IsoProjection::new(2.0, Point2::ORIGIN);
        let px = proj.project(&Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(px.x, 10.0 * IsoProjection::COS30 * 2.0, epsilon = 1e-12);
        assert_relative_eq!(px.y, 10.0, epsilon = 1e-12);
        let py = proj.project(&Point3::new(0.0, 10.0, 0.0));
        assert_relative_eq!(py.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(py.y, -20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_closure_projection() {
        let top_down = |p: &Point3| Point2::new(p.x, p.z);
        assert_eq!(top_down.project(&Point3::new(1.0, 5.0, 2.0)), Point2::new(1.0, 2.0));
    }
}
