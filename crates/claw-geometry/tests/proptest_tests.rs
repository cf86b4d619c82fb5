//! Property-based tests for projection, rotation, culling and layout invariants.

use proptest::prelude::*;

use claw_geometry::{
    resolve_anchors, rotate, separate_points, Cuboid, FaceKind, GlyphTransform, IsoProjection,
    LayoutParams, Projection, Vec3,
};
use claw_types::{AnchorPoint, CameraHint, Color, FaceColors, Point2, Point3, Pose};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_point() -> impl Strategy<Value = (f64, f64, f64)> {
    (-500.0f64..500.0, -500.0f64..500.0, -500.0f64..500.0)
}

/// Pose angles in degrees.
fn arb_pose() -> impl Strategy<Value = (f64, f64, f64)> {
    (-180.0f64..180.0, -180.0f64..180.0, -180.0f64..180.0)
}

fn arb_extent() -> impl Strategy<Value = f64> {
    1.0f64..200.0
}

/// Hints including values well outside the supported ranges.
fn arb_hint() -> impl Strategy<Value = (f64, f64)> {
    (-400.0f64..400.0, -400.0f64..400.0)
}

fn arb_percent() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..100.0, 0.0f64..100.0)
}

const TOL: f64 = 1e-6;

const COLORS: FaceColors = FaceColors {
    top: Color::rgb(0xaa, 0xaa, 0xaa),
    right: Color::rgb(0x77, 0x77, 0x77),
    front: Color::rgb(0x55, 0x55, 0x55),
};

fn diagram_projection() -> IsoProjection {
    IsoProjection::for_surface(440.0, 320.0, 2.0, (0.5, 0.56))
}

// ---------------------------------------------------------------------------
// 1. Projection linearity: a uniform shift along (1,1,1) does not move the
//    screen point, since (t - t) and (-t + 2t * sin30) both vanish.
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn projection_uniform_shift_is_invisible(
        (x, y, z) in arb_point(),
        t in -500.0f64..500.0,
    ) {
        let proj = diagram_projection();
        let p = Point3::new(x, y, z);
        let a = proj.project(&p);
        let b = proj.project(&p.shifted(t));
        prop_assert!((a.x - b.x).abs() < TOL && (a.y - b.y).abs() < TOL,
            "shift {} moved {:?} to {:?}", t, a, b);
    }
}

// ---------------------------------------------------------------------------
// 2. Projection is affine: project(p + q) - project(q) == project(p) - origin
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn projection_is_affine(
        (px, py, pz) in arb_point(),
        (qx, qy, qz) in arb_point(),
    ) {
        let proj = diagram_projection();
        let p = Point3::new(px, py, pz);
        let q = Point3::new(qx, qy, qz);
        let lhs = proj.project(&(p + q)) - proj.project(&q);
        let rhs = proj.project(&p) - proj.origin;
        prop_assert!((lhs.x - rhs.x).abs() < TOL);
        prop_assert!((lhs.y - rhs.y).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// 3. Rotation preserves distance from the pivot
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn rotation_preserves_length(
        (x, y, z) in arb_point(),
        (rx, ry, rz) in arb_pose(),
    ) {
        let p = Point3::new(x, y, z);
        let r = rotate(&p, &Pose::new(rx, ry, rz));
        let before = p.distance_to(&Point3::ORIGIN);
        let after = r.distance_to(&Point3::ORIGIN);
        prop_assert!((before - after).abs() < TOL * before.max(1.0));
    }
}

// ---------------------------------------------------------------------------
// 4. Culling: 1 to 3 faces survive, never an opposite pair, sorted ascending
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn culling_keeps_a_consistent_subset(
        (rx, ry, rz) in arb_pose(),
        w in arb_extent(),
        h in arb_extent(),
        d in arb_extent(),
    ) {
        let cuboid = Cuboid::new(Point3::ORIGIN, Point3::new(w, h, d), COLORS)
            .with_pose(Pose::new(rx, ry, rz));
        let pc = cuboid.project(&diagram_projection(), &Vec3::DIAGRAM_VIEW);

        prop_assert!(pc.faces.len() <= 3);
        let opposite = [
            (FaceKind::Top, FaceKind::Bottom),
            (FaceKind::Left, FaceKind::Right),
            (FaceKind::Front, FaceKind::Back),
        ];
        for (a, b) in opposite {
            prop_assert!(!(pc.is_visible(a) && pc.is_visible(b)));
        }
        for pair in pc.faces.windows(2) {
            prop_assert!(pair[0].depth <= pair[1].depth);
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Glyph transform stays in bounds for any hint, in range or not
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn glyph_transform_bounds(
        (h, v) in arb_hint(),
    ) {
        let t = GlyphTransform::from_hint(Some(&CameraHint::new(h, v)));
        prop_assert!((0.4..=1.0).contains(&t.scale_y), "scale_y {}", t.scale_y);
        prop_assert!((-0.5..=0.5).contains(&t.skew_x), "skew_x {}", t.skew_x);
        prop_assert!((1.0..=1.5).contains(&t.arm_spread));
    }
}

// ---------------------------------------------------------------------------
// 6. Layout: output stays inside the surface and no pair coincides
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn layout_keeps_points_on_surface(
        anchors in proptest::collection::vec(arb_percent(), 1..6),
    ) {
        let anchors: Vec<AnchorPoint> =
            anchors.into_iter().map(|(x, y)| AnchorPoint::new(x, y)).collect();
        let params = LayoutParams::for_surface(500.0, 500.0, 0.08, 0.04);
        let pts = resolve_anchors(&anchors, 500.0, 500.0, &params);

        prop_assert_eq!(pts.len(), anchors.len());
        for p in &pts {
            prop_assert!(p.is_finite());
            prop_assert!((0.0..=500.0).contains(&p.x) && (0.0..=500.0).contains(&p.y));
        }
    }
}

proptest! {
    #[test]
    fn layout_separates_any_coincident_pair(
        (x, y) in (100.0f64..400.0, 100.0f64..400.0),
    ) {
        let mut pts = vec![Point2::new(x, y), Point2::new(x, y)];
        separate_points(&mut pts, 500.0, 500.0, &LayoutParams::new(40.0, 20.0));
        prop_assert!(pts[0].distance_to(&pts[1]) >= 40.0 - TOL);
    }
}
