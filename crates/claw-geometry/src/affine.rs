use claw_types::Point2;
use serde::{Deserialize, Serialize};

/// A 2D affine transform in canvas convention:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine2 {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            e: dx,
            f: dy,
            ..Self::IDENTITY
        }
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Horizontal shear: `x' = x + k*y`.
    pub fn skew_x(k: f64) -> Self {
        Self {
            c: k,
            ..Self::IDENTITY
        }
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &Affine2) -> Affine2 {
        Affine2 {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    pub fn transform_point(&self, p: &Point2) -> Point2 {
        Point2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform. Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-15 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        Some(Affine2 {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_then_applies_in_order() {
        let t = Affine2::scaling(2.0, 2.0).then(&Affine2::translation(10.0, 0.0));
        let p = t.transform_point(&Point2::new(1.0, 1.0));
        assert!((p.x - 12.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_skew_x() {
        let p = Affine2::skew_x(0.5).transform_point(&Point2::new(0.0, 10.0));
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!((p.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse() {
        let t = Affine2::scaling(1.0, 0.5)
            .then(&Affine2::skew_x(0.3))
            .then(&Affine2::translation(5.0, -3.0));
        let inv = t.inverse().unwrap();
        let p = Point2::new(7.0, 2.0);
        let round_trip = inv.transform_point(&t.transform_point(&p));
        assert!(round_trip.distance_to(&p) < 1e-12);
        assert!(Affine2::scaling(1.0, 0.0).inverse().is_none());
    }
}
