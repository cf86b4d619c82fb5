pub mod affine;
pub mod cuboid;
pub mod glyph;
pub mod layout;
pub mod projection;
pub mod rotation;
pub mod vector;

pub use affine::Affine2;
pub use cuboid::{paint_order, Cuboid, Face, FaceKind, ProjectedCuboid, ProjectedFace};
pub use glyph::GlyphTransform;
pub use layout::{resolve_anchors, separate_points, LayoutParams};
pub use projection::{Camera, IsoProjection, Projection};
pub use rotation::{rotate, rotate_vec};
pub use vector::Vec3;

use claw_types::Point2;

/// Tolerance used when deciding whether geometry is degenerate.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Points closer than this are considered coincident (surface units).
    pub coincidence: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { coincidence: 1e-9 }
    }
}

impl Tolerance {
    pub fn points_coincident(&self, a: &Point2, b: &Point2) -> bool {
        a.distance_to(b) < self.coincidence
    }

    pub fn is_zero_length(&self, length: f64) -> bool {
        !length.is_finite() || length.abs() < self.coincidence
    }
}

pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}
