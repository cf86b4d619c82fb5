use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with its alpha multiplied by `factor` (clamped to `[0,1]`).
    pub fn faded(&self, factor: f64) -> Self {
        let f = if factor.is_finite() {
            factor.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            a: (self.a as f64 * f).round() as u8,
            ..*self
        }
    }

    /// Alpha as a fraction in `[0,1]`.
    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

/// Fill colors for the three face groups of a box.
///
/// Front/back faces share `front`, left/right share `right`, top/bottom share `top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceColors {
    pub top: Color,
    pub right: Color,
    pub front: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_scales_alpha() {
        let c = Color::rgba(10, 20, 30, 200).faded(0.5);
        assert_eq!(c.a, 100);
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
    }

    #[test]
    fn test_faded_clamps_and_ignores_nan() {
        assert_eq!(Color::WHITE.faded(3.0).a, 255);
        assert_eq!(Color::WHITE.faded(-1.0).a, 0);
        assert_eq!(Color::WHITE.faded(f64::NAN).a, 255);
    }
}
