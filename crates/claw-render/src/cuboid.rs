//! Painter's-algorithm drawing of posed cuboids.

use claw_canvas::{Canvas, Path2, StrokeStyle};
use claw_geometry::{paint_order, Camera, Cuboid};
use claw_types::Color;
use serde::{Deserialize, Serialize};

use crate::palette;

/// A cuboid with the opacity it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub cuboid: Cuboid,
    pub alpha: f64,
}

impl Solid {
    pub fn opaque(cuboid: Cuboid) -> Self {
        Self { cuboid, alpha: 1.0 }
    }

    pub fn ghost(cuboid: Cuboid) -> Self {
        Self {
            cuboid,
            alpha: palette::GHOST_ALPHA,
        }
    }

    pub fn with_alpha(cuboid: Cuboid, alpha: f64) -> Self {
        Self { cuboid, alpha }
    }
}

/// Draw the visible faces of one cuboid back to front, then the top decal.
/// Returns how many faces were filled.
pub fn draw_cuboid<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera, cuboid: &Cuboid, alpha: f64) -> usize {
    let projected = cuboid.project(&camera.projection, &camera.view_dir);
    let edge = StrokeStyle::solid(palette::EDGE.faded(alpha), 1.0);

    for face in &projected.faces {
        let path = Path2::polygon(&face.corners);
        canvas.fill_path(&path, face.face.color.faded(alpha));
        canvas.stroke_path(&path, &edge);
    }

    if let Some(lines) = projected.top_decal() {
        let decal = StrokeStyle::solid(Color::WHITE.faded(alpha * 0.2), 1.0);
        for (a, b) in lines {
            canvas.stroke_path(&Path2::line(a, b), &decal);
        }
    }
    projected.faces.len()
}

/// Draw several solids, farthest center first (ascending `center.x + center.z`).
pub fn draw_solids<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera, solids: &[Solid]) -> usize {
    let cuboids: Vec<Cuboid> = solids.iter().map(|s| s.cuboid).collect();
    paint_order(&cuboids)
        .into_iter()
        .map(|i| draw_cuboid(canvas, camera, &solids[i].cuboid, solids[i].alpha))
        .sum()
}
