//! Camera-hint driven distortion of the schematic gripper glyph.

use claw_types::{CameraHint, Point2};

use crate::affine::Affine2;

/// Vertical squash, horizontal shear and arm widening for one photograph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphTransform {
    /// In `[0.4, 1.0]`.
    pub scale_y: f64,
    /// In `[-0.5, 0.5]`.
    pub skew_x: f64,
    /// Multiplier on the arm splay, in `[1.0, 1.5]`.
    pub arm_spread: f64,
}

impl GlyphTransform {
    pub const SCALE_Y_RANGE: (f64, f64) = (0.4, 1.0);
    pub const SKEW_X_RANGE: (f64, f64) = (-0.5, 0.5);

    /// Derive the transform from a hint; `None` uses the canonical 45° head-on shot.
    ///
    /// `scale_y = cos(v) * 0.6 + 0.4`, `skew_x = sin(h) * 0.5`,
    /// `arm_spread = 1 + sin(v) * 0.5`, after clamping the hint into range.
    pub fn from_hint(hint: Option<&CameraHint>) -> Self {
        let hint = hint.copied().unwrap_or(CameraHint::CANONICAL).clamped();
        let v = hint.vertical_deg.to_radians();
        let h = hint.horizontal_deg.to_radians();

        let (sy_lo, sy_hi) = Self::SCALE_Y_RANGE;
        let (sk_lo, sk_hi) = Self::SKEW_X_RANGE;
        Self {
            scale_y: (v.cos() * 0.6 + 0.4).clamp(sy_lo, sy_hi),
            skew_x: (h.sin() * 0.5).clamp(sk_lo, sk_hi),
            arm_spread: (1.0 + v.sin() * 0.5).clamp(1.0, 1.5),
        }
    }

    /// Glyph-local to surface: shear and squash about the origin, then move to `anchor`.
    pub fn affine(&self, anchor: Point2) -> Affine2 {
        Affine2 {
            a: 1.0,
            b: 0.0,
            c: self.skew_x,
            d: self.scale_y,
            e: anchor.x,
            f: anchor.y,
        }
    }
}

impl Default for GlyphTransform {
    fn default() -> Self {
        Self::from_hint(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(t: &GlyphTransform) -> bool {
        (0.4..=1.0).contains(&t.scale_y) && (-0.5..=0.5).contains(&t.skew_x)
    }

    #[test]
    fn test_extreme_hints_stay_in_bounds() {
        let steep = GlyphTransform::from_hint(Some(&CameraHint::new(80.0, 80.0)));
        let shallow = GlyphTransform::from_hint(Some(&CameraHint::new(-80.0, 10.0)));
        assert!(in_bounds(&steep));
        assert!(in_bounds(&shallow));
        assert!(steep.skew_x > 0.0 && shallow.skew_x < 0.0);
        assert!(steep.scale_y < shallow.scale_y);
    }

    #[test]
    fn test_missing_hint_uses_45_degrees() {
        let t = GlyphTransform::from_hint(None);
        let expected = 45f64.to_radians().cos() * 0.6 + 0.4;
        assert!((t.scale_y - expected).abs() < 1e-12);
        assert!(t.skew_x.abs() < 1e-12);
        assert!((t.arm_spread - (1.0 + 45f64.to_radians().sin() * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_hint_falls_back() {
        let t = GlyphTransform::from_hint(Some(&CameraHint::new(f64::NAN, f64::INFINITY)));
        assert_eq!(t, GlyphTransform::default());
    }

    #[test]
    fn test_affine_places_origin_at_anchor() {
        let t = GlyphTransform::from_hint(Some(&CameraHint::new(30.0, 60.0)));
        let m = t.affine(Point2::new(120.0, 80.0));
        let p = m.transform_point(&Point2::ORIGIN);
        assert!((p.x - 120.0).abs() < 1e-12 && (p.y - 80.0).abs() < 1e-12);

        // a point straight below shears sideways by skew_x per unit
        let q = m.transform_point(&Point2::new(0.0, 10.0));
        assert!((q.x - (120.0 + 10.0 * t.skew_x)).abs() < 1e-12);
        assert!((q.y - (80.0 + 10.0 * t.scale_y)).abs() < 1e-12);
    }
}
