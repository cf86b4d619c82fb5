//! Fixed colors shared by diagrams and photo overlays.

use claw_types::{Color, FaceColors};

pub const BACKGROUND: Color = Color::rgb(0x0a, 0x0a, 0x14);
pub const GRID: Color = Color::rgba(0xff, 0xff, 0xff, 8);

pub const RAIL: FaceColors = FaceColors {
    top: Color::rgb(0xaa, 0xaa, 0xaa),
    right: Color::rgb(0x77, 0x77, 0x77),
    front: Color::rgb(0x55, 0x55, 0x55),
};

pub const PRIZE: FaceColors = FaceColors {
    top: Color::rgb(0xff, 0xb0, 0x60),
    right: Color::rgb(0xe8, 0x80, 0x30),
    front: Color::rgb(0xcc, 0x66, 0x20),
};

/// Face outline on every cuboid.
pub const EDGE: Color = Color::rgba(0, 0, 0, 64);
/// Alpha of a prior-pose copy.
pub const GHOST_ALPHA: f64 = 0.25;

pub const CLAW: Color = Color::rgb(0x4f, 0xc3, 0xf7);
pub const CLAW_ACTIVE: Color = Color::rgb(0xff, 0xd7, 0x00);

pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x9d);
pub const RED: Color = Color::rgb(0xff, 0x3c, 0x50);
pub const ORANGE: Color = Color::rgb(0xff, 0x8c, 0x42);
pub const GOLD: Color = Color::rgb(0xff, 0xd7, 0x00);
pub const WHITE: Color = Color::WHITE;
pub const DIM: Color = Color::rgb(0x88, 0x88, 0x88);

pub const EXIT_FILL: Color = Color::rgba(0x00, 0xff, 0x9d, 15);
pub const EXIT_LINE: Color = Color::rgba(0x00, 0xff, 0x9d, 77);
pub const EXIT_TEXT: Color = Color::rgba(0x00, 0xff, 0x9d, 128);

pub const DIMENSION_LINE: Color = Color::rgba(0xff, 0xd7, 0x00, 128);
pub const DIMENSION_TEXT: Color = GOLD;

pub const BADGE: Color = Color::rgba(0xff, 0x3c, 0x50, 230);

// photo overlay
pub const SOURCE_OUTLINE: Color = Color::rgba(0xff, 0xff, 0xff, 102);
pub const CROSSHAIR_RING: Color = Color::rgba(0xff, 0x3c, 0x50, 153);
pub const CROSSHAIR_LINE: Color = Color::rgba(0xff, 0x3c, 0x50, 204);
pub const MOVE_LINE: Color = Color::rgba(0xff, 0x3c, 0x50, 179);
pub const MOVE_HEAD: Color = Color::rgba(0xff, 0x3c, 0x50, 204);
