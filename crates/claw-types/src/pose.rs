use serde::{Deserialize, Serialize};

/// Rotation in degrees, applied about X, then Y, then Z.
///
/// Angles are extrinsic and always applied in that fixed order. A pose never
/// accumulates across frames: every draw recomputes from the unrotated shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        rx: 0.0,
        ry: 0.0,
        rz: 0.0,
    };

    pub const fn new(rx: f64, ry: f64, rz: f64) -> Self {
        Self { rx, ry, rz }
    }

    pub const fn about_x(rx: f64) -> Self {
        Self::new(rx, 0.0, 0.0)
    }

    pub const fn about_y(ry: f64) -> Self {
        Self::new(0.0, ry, 0.0)
    }

    pub const fn about_z(rz: f64) -> Self {
        Self::new(0.0, 0.0, rz)
    }

    pub fn is_identity(&self) -> bool {
        self.rx == 0.0 && self.ry == 0.0 && self.rz == 0.0
    }
}
