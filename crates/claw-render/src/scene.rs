//! Declarative description of one diagram frame and the code that draws it.

use claw_canvas::{Canvas, Path2, StrokeStyle};
use claw_geometry::{Camera, Cuboid};
use claw_types::{Color, Point2, Point3, Side};
use serde::{Deserialize, Serialize};

use crate::cuboid::{draw_cuboid, draw_solids, Solid};
use crate::gripper::draw_diagram_gripper;
use crate::palette;
use crate::primitives::{self, ArrowStyle};

/// Floor height of the exit zone below the rails.
const EXIT_FLOOR_Y: f64 = -30.0;
/// Rail cross-section.
const RAIL_SECTION: f64 = 6.0;
/// Vertical position of the headline and caption.
const HEADLINE_Y: f64 = 26.0;
const CAPTION_INSET: f64 = 14.0;

/// The support rails and the exit zone beneath them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    /// `z` of each rail; rails run along `x`.
    pub rails_z: Vec<f64>,
    pub rail_len: f64,
    /// Depth of the exit zone, centered on `z = 0`.
    pub exit_depth: f64,
}

impl Rig {
    /// Two rails at `z = ±gap / 2`.
    pub fn two_rails(gap: f64, rail_len: f64) -> Self {
        Self {
            rails_z: vec![-gap / 2.0, gap / 2.0],
            rail_len,
            exit_depth: gap,
        }
    }

    /// Two rails at `z0` and `z0 + gap`, with a wider exit zone.
    pub fn offset_rails(z0: f64, gap: f64, rail_len: f64, exit_depth: f64) -> Self {
        Self {
            rails_z: vec![z0, z0 + gap],
            rail_len,
            exit_depth,
        }
    }

    pub fn single_rail(z: f64, rail_len: f64, exit_depth: f64) -> Self {
        Self {
            rails_z: vec![z],
            rail_len,
            exit_depth,
        }
    }

    pub fn rails(&self) -> Vec<Cuboid> {
        self.rails_z
            .iter()
            .map(|&z| {
                Cuboid::new(
                    Point3::new(0.0, 0.0, z),
                    Point3::new(self.rail_len, RAIL_SECTION, RAIL_SECTION),
                    palette::RAIL,
                )
            })
            .collect()
    }

    /// Corners of the exit zone on the floor.
    pub fn exit_corners(&self) -> [Point3; 4] {
        let (hx, hz) = (self.rail_len / 2.0, self.exit_depth / 2.0);
        [
            Point3::new(-hx, EXIT_FLOOR_Y, -hz),
            Point3::new(hx, EXIT_FLOOR_Y, -hz),
            Point3::new(hx, EXIT_FLOOR_Y, hz),
            Point3::new(-hx, EXIT_FLOOR_Y, hz),
        ]
    }
}

/// Where a free label goes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LabelPos {
    /// Logical surface coordinates.
    Surface(Point2),
    /// A projected model point plus a pixel offset.
    Model { at: Point3, dx: f64, dy: f64 },
}

impl LabelPos {
    pub fn near(at: Point3, dx: f64, dy: f64) -> Self {
        LabelPos::Model { at, dx, dy }
    }

    pub fn resolve(&self, camera: &Camera) -> Point2 {
        match *self {
            LabelPos::Surface(p) => p,
            LabelPos::Model { at, dx, dy } => camera.project(&at).offset(dx, dy),
        }
    }
}

/// Overlay drawn after the solids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Annotation {
    Dimension {
        from: Point3,
        to: Point3,
        text: String,
        offset: f64,
    },
    Arrow {
        from: Point3,
        to: Point3,
        color: Color,
    },
    CurvedArrow {
        from: Point3,
        to: Point3,
        control_offset: (f64, f64),
        color: Color,
    },
    Label {
        text: String,
        at: LabelPos,
        color: Color,
        size: f64,
    },
    Ring {
        at: Point3,
        radius: f64,
        color: Color,
        dashed: bool,
    },
    Gripper {
        at: Point3,
        size: f64,
        active: Option<Side>,
    },
}

impl Annotation {
    pub fn dimension(from: Point3, to: Point3, text: impl Into<String>, offset: f64) -> Self {
        Annotation::Dimension {
            from,
            to,
            text: text.into(),
            offset,
        }
    }

    pub fn arrow(from: Point3, to: Point3, color: Color) -> Self {
        Annotation::Arrow { from, to, color }
    }

    pub fn curve(from: Point3, to: Point3, control_offset: (f64, f64), color: Color) -> Self {
        Annotation::CurvedArrow {
            from,
            to,
            control_offset,
            color,
        }
    }

    pub fn label(text: impl Into<String>, at: LabelPos, color: Color, size: f64) -> Self {
        Annotation::Label {
            text: text.into(),
            at,
            color,
            size,
        }
    }

    pub fn gripper(at: Point3, size: f64, active: Option<Side>) -> Self {
        Annotation::Gripper { at, size, active }
    }
}

/// Colored line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    pub color: Color,
}

impl Caption {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Everything needed to draw one diagram frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepScene {
    /// Badge title.
    pub title: String,
    /// Bottom line summarizing the frame's claim.
    pub caption: Caption,
    /// Optional emphasized line at the top.
    pub headline: Option<Caption>,
    pub rig: Rig,
    pub solids: Vec<Solid>,
    pub annotations: Vec<Annotation>,
}

impl StepScene {
    /// All text the frame will show, badge excluded.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = vec![self.caption.text.as_str()];
        if let Some(h) = &self.headline {
            out.push(h.text.as_str());
        }
        for a in &self.annotations {
            match a {
                Annotation::Dimension { text, .. } | Annotation::Label { text, .. } => {
                    out.push(text.as_str())
                }
                _ => {}
            }
        }
        out
    }
}

/// Background plus a faint floor grid from -80 to 80 in steps of 20.
pub fn draw_backdrop<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera) {
    canvas.clear(palette::BACKGROUND);
    let grid = StrokeStyle::solid(palette::GRID, 0.5);
    for i in (-80..=80).step_by(20) {
        let i = i as f64;
        canvas.stroke_line(camera.project_xyz(i, 0.0, -60.0), camera.project_xyz(i, 0.0, 60.0), &grid);
        canvas.stroke_line(camera.project_xyz(-80.0, 0.0, i), camera.project_xyz(80.0, 0.0, i), &grid);
    }
}

/// Dashed exit zone on the floor, then the rails.
pub fn draw_rig<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera, rig: &Rig) {
    let corners = rig.exit_corners().map(|p| camera.project(&p));
    let zone = Path2::polygon(&corners);
    canvas.fill_path(&zone, palette::EXIT_FILL);
    canvas.stroke_path(&zone, &StrokeStyle::dashed(palette::EXIT_LINE, 1.0, 4.0, 4.0));
    let center = corners
        .iter()
        .fold(Point2::ORIGIN, |acc, p| acc + *p);
    primitives::label(
        canvas,
        "exit",
        Point2::new(center.x / 4.0, center.y / 4.0),
        palette::EXIT_TEXT,
        10.0,
    );

    for rail in rig.rails() {
        draw_cuboid(canvas, camera, &rail, 1.0);
    }
}

pub fn draw_annotation<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera, annotation: &Annotation) {
    match annotation {
        Annotation::Dimension {
            from,
            to,
            text,
            offset,
        } => {
            primitives::dimension_line(canvas, camera, *from, *to, text, *offset);
        }
        Annotation::Arrow { from, to, color } => {
            primitives::arrow(
                canvas,
                camera.project(from),
                camera.project(to),
                &ArrowStyle::diagram(*color),
            );
        }
        Annotation::CurvedArrow {
            from,
            to,
            control_offset,
            color,
        } => {
            primitives::curved_arrow(
                canvas,
                camera.project(from),
                camera.project(to),
                *control_offset,
                &ArrowStyle::curve(*color),
            );
        }
        Annotation::Label {
            text,
            at,
            color,
            size,
        } => primitives::label(canvas, text, at.resolve(camera), *color, *size),
        Annotation::Ring {
            at,
            radius,
            color,
            dashed,
        } => primitives::ring(canvas, camera.project(at), *radius, *color, *dashed),
        Annotation::Gripper { at, size, active } => {
            draw_diagram_gripper(canvas, camera.project(at), *size, *active)
        }
    }
}

/// Draw a complete frame: backdrop, rig, solids, annotations, text, badge.
pub fn draw_scene<C: Canvas + ?Sized>(canvas: &mut C, camera: &Camera, scene: &StepScene, number: usize) {
    draw_backdrop(canvas, camera);
    draw_rig(canvas, camera, &scene.rig);
    draw_solids(canvas, camera, &scene.solids);
    for annotation in &scene.annotations {
        draw_annotation(canvas, camera, annotation);
    }

    let mid_x = canvas.width() / 2.0;
    if let Some(headline) = &scene.headline {
        primitives::label(canvas, &headline.text, Point2::new(mid_x, HEADLINE_Y), headline.color, 12.0);
    }
    let bottom = canvas.height() - CAPTION_INSET;
    primitives::label(canvas, &scene.caption.text, Point2::new(mid_x, bottom), scene.caption.color, 11.0);
    primitives::step_badge(canvas, number, &scene.title);
}
