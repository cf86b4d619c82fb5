use serde::{Deserialize, Serialize};

/// A location expressed as a percentage of the drawing surface's width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl AnchorPoint {
    pub const CENTER: Self = Self {
        x_percent: 50.0,
        y_percent: 50.0,
    };

    pub const fn new(x_percent: f64, y_percent: f64) -> Self {
        Self {
            x_percent,
            y_percent,
        }
    }

    /// Clamp both components into `[lo, hi]`; non-finite components become 50.
    pub fn clamped(&self, lo: f64, hi: f64) -> Self {
        let fix = |v: f64| if v.is_finite() { v.clamp(lo, hi) } else { 50.0 };
        Self::new(fix(self.x_percent), fix(self.y_percent))
    }

    /// Convert to surface coordinates for a surface of `width` x `height`.
    pub fn to_pixels(&self, width: f64, height: f64) -> crate::Point2 {
        crate::Point2::new(
            self.x_percent / 100.0 * width,
            self.y_percent / 100.0 * height,
        )
    }

    pub fn from_pixels(p: crate::Point2, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::CENTER;
        }
        Self::new(p.x / width * 100.0, p.y / height * 100.0)
    }
}

impl Default for AnchorPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Axis-aligned rectangle in percent of the photograph, `(x, y)` at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BBox {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// A box is usable only with a positive, finite size.
    pub fn is_usable(&self) -> bool {
        [self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite())
            && self.w > 0.0
            && self.h > 0.0
    }

    /// Pixel rectangle `(x, y, w, h)` for an image of `width` x `height`.
    pub fn to_pixels(&self, width: f64, height: f64) -> (f64, f64, f64, f64) {
        (
            self.x / 100.0 * width,
            self.y / 100.0 * height,
            self.w / 100.0 * width,
            self.h / 100.0 * height,
        )
    }
}

/// Which prong of the two-pronged gripper a step emphasizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// `-1` for left, `+1` for right.
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Direction of a step's move, as reported by the analysis service.
///
/// Any value outside the closed set deserializes as [`Direction::Center`],
/// which suppresses the directional arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Direction {
    Left,
    Right,
    /// Toward the player and exit chute; the bottom of a photograph.
    Forward,
    /// Away from the player; the top of a photograph.
    Back,
    #[default]
    Center,
}

impl Direction {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "left" => Direction::Left,
            "right" => Direction::Right,
            "forward" | "front" => Direction::Forward,
            "back" | "backward" | "rear" => Direction::Back,
            _ => Direction::Center,
        }
    }

    /// Unit vector in image space (y grows downward). `None` for `Center`.
    pub fn screen_vector(self) -> Option<(f64, f64)> {
        match self {
            Direction::Left => Some((-1.0, 0.0)),
            Direction::Right => Some((1.0, 0.0)),
            Direction::Forward => Some((0.0, 1.0)),
            Direction::Back => Some((0.0, -1.0)),
            Direction::Center => None,
        }
    }

    pub fn emphasized_side(self) -> Option<Side> {
        match self {
            Direction::Left => Some(Side::Left),
            Direction::Right => Some(Side::Right),
            _ => None,
        }
    }
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        Direction::parse(&value)
    }
}

/// Coarse shooting-angle estimate for a photograph, in degrees.
///
/// Only ever used to skew/scale overlay glyphs; never inferred from pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraHint {
    #[serde(alias = "horizontalDeg")]
    pub horizontal_deg: f64,
    #[serde(alias = "verticalDeg")]
    pub vertical_deg: f64,
}

impl CameraHint {
    pub const HORIZONTAL_RANGE: (f64, f64) = (-80.0, 80.0);
    pub const VERTICAL_RANGE: (f64, f64) = (10.0, 80.0);
    /// Head-on shot from 45° above.
    pub const CANONICAL: Self = Self {
        horizontal_deg: 0.0,
        vertical_deg: 45.0,
    };

    pub const fn new(horizontal_deg: f64, vertical_deg: f64) -> Self {
        Self {
            horizontal_deg,
            vertical_deg,
        }
    }

    /// Clamp into the supported ranges; non-finite angles fall back to canonical.
    pub fn clamped(&self) -> Self {
        let (h_lo, h_hi) = Self::HORIZONTAL_RANGE;
        let (v_lo, v_hi) = Self::VERTICAL_RANGE;
        let h = if self.horizontal_deg.is_finite() {
            self.horizontal_deg.clamp(h_lo, h_hi)
        } else {
            Self::CANONICAL.horizontal_deg
        };
        let v = if self.vertical_deg.is_finite() {
            self.vertical_deg.clamp(v_lo, v_hi)
        } else {
            Self::CANONICAL.vertical_deg
        };
        Self::new(h, v)
    }
}

impl Default for CameraHint {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// One instruction frame of a multi-step result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based move number shown on the badge.
    pub index: usize,
    pub action: String,
    pub direction: Direction,
    pub label_text: String,
    #[serde(default)]
    pub expected_result: String,
    pub target: AnchorPoint,
    /// Where the gripper currently is, when the analysis could see it.
    #[serde(default)]
    pub source_bbox: Option<BBox>,
}

impl Step {
    pub fn new(index: usize, action: impl Into<String>, target: AnchorPoint) -> Self {
        let action = action.into();
        Self {
            index,
            label_text: action.clone(),
            action,
            direction: Direction::Center,
            expected_result: String::new(),
            target,
            source_bbox: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_source_bbox(mut self, bbox: BBox) -> Self {
        self.source_bbox = Some(bbox);
        self
    }

    /// The source box, if it is present and has a usable size.
    pub fn usable_bbox(&self) -> Option<BBox> {
        self.source_bbox.filter(BBox::is_usable)
    }
}
