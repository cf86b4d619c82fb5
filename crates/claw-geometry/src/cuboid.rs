//! Parametric boxes: vertices, back-face culling and painter's-order faces.
//!
//! Everything here is pure geometry. Drawing the resulting polygons is the
//! renderer's job; this module only decides which faces are visible, where
//! their corners land on the surface, and in which order to paint them.

use std::cmp::Ordering;

use claw_types::{Color, FaceColors, Point2, Point3, Pose};
use serde::{Deserialize, Serialize};

use crate::projection::Projection;
use crate::rotation::{rotate, rotate_vec};
use crate::vector::Vec3;

/// One of the six canonical faces of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceKind {
    /// z+
    Back,
    /// z-
    Front,
    /// x-
    Left,
    /// x+
    Right,
    /// y+
    Top,
    /// y-
    Bottom,
}

/// Face table: kind, corner indices into the 8 local vertices, outward normal.
///
/// Vertices 0-3 are the bottom ring, 4-7 the top ring.
const FACE_TABLE: [(FaceKind, [usize; 4], Vec3); 6] = [
    (FaceKind::Back, [3, 2, 6, 7], Vec3::new(0.0, 0.0, 1.0)),
    (FaceKind::Front, [0, 1, 5, 4], Vec3::new(0.0, 0.0, -1.0)),
    (FaceKind::Left, [0, 3, 7, 4], Vec3::new(-1.0, 0.0, 0.0)),
    (FaceKind::Right, [1, 2, 6, 5], Vec3::new(1.0, 0.0, 0.0)),
    (FaceKind::Top, [4, 5, 6, 7], Vec3::new(0.0, 1.0, 0.0)),
    (FaceKind::Bottom, [0, 1, 2, 3], Vec3::new(0.0, -1.0, 0.0)),
];

/// An axis-aligned box posed by a rotation about its own center.
///
/// `extents` are full edge lengths; the vertices sit at `±extents / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    pub center: Point3,
    pub extents: Point3,
    pub pose: Pose,
    pub colors: FaceColors,
}

/// A face of a cuboid with its color resolved from the face group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    pub vertex_indices: [usize; 4],
    /// Outward normal in the unrotated local frame.
    pub normal: Vec3,
    pub color: Color,
}

/// A visible face ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedFace {
    pub face: Face,
    pub corners: [Point2; 4],
    /// Sum of the rotated local `x + z` of the four corners; paint ascending.
    pub depth: f64,
}

/// The result of projecting a cuboid: all corners plus the visible faces in
/// back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCuboid {
    /// Rotated vertices relative to the center.
    pub local: [Point3; 8],
    pub screen: [Point2; 8],
    pub faces: Vec<ProjectedFace>,
}

impl Cuboid {
    pub fn new(center: Point3, extents: Point3, colors: FaceColors) -> Self {
        Self {
            center,
            extents,
            pose: Pose::IDENTITY,
            colors,
        }
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// The 8 corners relative to the center, before rotation.
    pub fn local_vertices(&self) -> [Point3; 8] {
        let hw = self.extents.x / 2.0;
        let hh = self.extents.y / 2.0;
        let hd = self.extents.z / 2.0;
        [
            Point3::new(-hw, -hh, -hd),
            Point3::new(hw, -hh, -hd),
            Point3::new(hw, -hh, hd),
            Point3::new(-hw, -hh, hd),
            Point3::new(-hw, hh, -hd),
            Point3::new(hw, hh, -hd),
            Point3::new(hw, hh, hd),
            Point3::new(-hw, hh, hd),
        ]
    }

    /// All six faces in canonical enumeration order.
    pub fn faces(&self) -> [Face; 6] {
        FACE_TABLE.map(|(kind, vertex_indices, normal)| Face {
            kind,
            vertex_indices,
            normal,
            color: self.color_for(kind),
        })
    }

    fn color_for(&self, kind: FaceKind) -> Color {
        match kind {
            FaceKind::Back | FaceKind::Front => self.colors.front,
            FaceKind::Left | FaceKind::Right => self.colors.right,
            FaceKind::Top | FaceKind::Bottom => self.colors.top,
        }
    }

    /// Whether `face` points toward the viewer once the pose is applied.
    pub fn is_front_facing(&self, face: &Face, view_dir: &Vec3) -> bool {
        rotate_vec(&face.normal, &self.pose).dot(view_dir) > 0.0
    }

    /// Rotate, project, cull and depth-sort.
    ///
    /// Faces are kept when their rotated normal has a positive dot product
    /// with `view_dir`, then stably sorted ascending by the summed local
    /// `x + z` of their corners. Faces with a non-finite corner are dropped.
    pub fn project(&self, projection: &dyn Projection, view_dir: &Vec3) -> ProjectedCuboid {
        let local = self.local_vertices().map(|v| rotate(&v, &self.pose));
        let screen = local.map(|v| projection.project(&(self.center + v)));

        let mut faces: Vec<ProjectedFace> = self
            .faces()
            .into_iter()
            .filter(|f| self.is_front_facing(f, view_dir))
            .map(|face| {
                let idx = face.vertex_indices;
                ProjectedFace {
                    face,
                    corners: idx.map(|i| screen[i]),
                    depth: idx.iter().map(|&i| local[i].x + local[i].z).sum(),
                }
            })
            .filter(|pf| pf.corners.iter().all(Point2::is_finite))
            .collect();

        faces.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));

        ProjectedCuboid {
            local,
            screen,
            faces,
        }
    }
}

impl ProjectedCuboid {
    pub fn visible_kinds(&self) -> Vec<FaceKind> {
        self.faces.iter().map(|f| f.face.kind).collect()
    }

    pub fn is_visible(&self, kind: FaceKind) -> bool {
        self.faces.iter().any(|f| f.face.kind == kind)
    }

    /// Two segments joining opposite edge midpoints of the top face, when the
    /// top face survived culling.
    pub fn top_decal(&self) -> Option<[(Point2, Point2); 2]> {
        let top = self.faces.iter().find(|f| f.face.kind == FaceKind::Top)?;
        let [p0, p1, p2, p3] = top.corners;
        Some([
            (p0.midpoint(&p1), p2.midpoint(&p3)),
            (p0.midpoint(&p3), p1.midpoint(&p2)),
        ])
    }
}

/// Indices of `cuboids` in painting order: stable ascending by `center.x + center.z`.
pub fn paint_order(cuboids: &[Cuboid]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cuboids.len()).collect();
    order.sort_by(|&a, &b| {
        let da = cuboids[a].center.x + cuboids[a].center.z;
        let db = cuboids[b].center.x + cuboids[b].center.z;
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    });
    order
}
