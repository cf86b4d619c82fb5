//! Render configuration: diagram surface, photo overlay sizing, font.

use std::path::PathBuf;

use claw_geometry::{Camera, IsoProjection, LayoutParams, Vec3};
use serde::{Deserialize, Serialize};

/// Technique diagram surface and camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Logical surface width.
    pub width: f64,
    /// Logical surface height.
    pub height: f64,
    /// Device pixels per logical unit.
    pub dpi_scale: f64,
    /// Pixels per model unit.
    pub projection_scale: f64,
    pub origin_x_fraction: f64,
    pub origin_y_fraction: f64,
    /// Direction toward the viewer, used for face culling.
    pub view_direction: [f64; 3],
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: 440.0,
            height: 320.0,
            dpi_scale: 1.0,
            projection_scale: 2.0,
            origin_x_fraction: 0.5,
            origin_y_fraction: 0.56,
            view_direction: Vec3::DIAGRAM_VIEW.to_array(),
        }
    }
}

impl DiagramConfig {
    /// Double-density output for high-DPI displays.
    pub fn retina() -> Self {
        Self {
            dpi_scale: 2.0,
            ..Self::default()
        }
    }

    pub fn camera(&self) -> Camera {
        let [x, y, z] = self.view_direction;
        Camera::new(
            IsoProjection::for_surface(
                self.width,
                self.height,
                self.projection_scale,
                (self.origin_x_fraction, self.origin_y_fraction),
            ),
            Vec3::new(x, y, z),
        )
    }
}

/// Photo overlay sizing. Marker sizes scale by `min(W, H) / reference_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Black wash over the host photograph.
    pub darken_alpha: f64,
    /// Opacity of the gripper crop redrawn at the target.
    pub crop_alpha: f64,
    /// Minimum target separation as a fraction of the shorter side.
    pub min_dist_fraction: f64,
    /// Clamp margin as a fraction of the shorter side.
    pub margin_fraction: f64,
    pub reference_size: f64,
    /// Elevation assumed when the analysis carries no camera hint.
    pub default_vertical_deg: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            darken_alpha: 0.15,
            crop_alpha: 0.55,
            min_dist_fraction: 0.08,
            margin_fraction: 0.04,
            reference_size: 500.0,
            default_vertical_deg: 45.0,
        }
    }
}

impl OverlayConfig {
    /// Marker scale for a `width` x `height` photograph.
    pub fn marker_scale(&self, width: f64, height: f64) -> f64 {
        let s = width.min(height) / self.reference_size;
        if s.is_finite() && s > 0.0 {
            s
        } else {
            1.0
        }
    }

    pub fn layout_params(&self, width: f64, height: f64) -> LayoutParams {
        LayoutParams::for_surface(width, height, self.min_dist_fraction, self.margin_fraction)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub diagram: DiagramConfig,
    pub overlay: OverlayConfig,
    /// TrueType font for labels; text is skipped without one.
    pub font_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_origin() {
        let cam = DiagramConfig::default().camera();
        let o = cam.project_xyz(0.0, 0.0, 0.0);
        assert!((o.x - 220.0).abs() < 1e-9);
        assert!((o.y - 179.2).abs() < 1e-9);
    }

    #[test]
    fn test_marker_scale_uses_shorter_side() {
        let cfg = OverlayConfig::default();
        assert!((cfg.marker_scale(1000.0, 750.0) - 1.5).abs() < 1e-12);
        assert!((cfg.marker_scale(0.0, 750.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: RenderConfig =
            serde_json::from_str(r#"{ "diagram": { "dpi_scale": 2.0 } }"#).unwrap();
        assert_eq!(cfg.diagram, DiagramConfig::retina());
        assert_eq!(cfg.overlay, OverlayConfig::default());
        assert!(cfg.font_path.is_none());
    }
}
