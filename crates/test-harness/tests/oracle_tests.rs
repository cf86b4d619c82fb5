//! Tests for verification oracles.

use claw_canvas::{Canvas, RecordingCanvas};
use claw_geometry::{Camera, Cuboid, GlyphTransform};
use claw_render::palette;
use claw_types::{CameraHint, Point2, Point3, Pose};
use test_harness::oracle::*;

fn prize(pose: Pose) -> Cuboid {
    Cuboid::new(Point3::new(10.0, 17.0, -5.0), Point3::new(55.0, 28.0, 40.0), palette::PRIZE).with_pose(pose)
}

// ── Projection Oracle Tests ─────────────────────────────────────────────

#[test]
fn diagonal_shift_is_invisible() {
    let cam = Camera::diagram(440.0, 320.0);
    for t in [-80.0, 0.5, 33.0] {
        let verdict = check_diagonal_shift_invisible(&cam, &prize(Pose::about_y(30.0)), t);
        assert!(verdict.passed, "{}", verdict.detail);
    }
}

#[test]
fn culling_holds_for_tilted_poses() {
    let cam = Camera::diagram(440.0, 320.0);
    for pose in [Pose::default(), Pose::about_x(-12.0), Pose::new(90.0, 45.0, 0.0), Pose::about_z(-60.0)] {
        let projected = prize(pose).project(&cam.projection, &cam.view_dir);
        let verdict = check_face_culling(&projected);
        assert!(verdict.passed, "{pose:?}: {}", verdict.detail);
    }
}

// ── Layout Oracle Tests ─────────────────────────────────────────────────

#[test]
fn separation_reports_the_closest_pair() {
    let pts = [Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), Point2::new(103.0, 4.0)];
    let verdict = check_min_separation(&pts, 40.0);
    assert!(!verdict.passed);
    assert_eq!(verdict.value, Some(5.0));
    assert!(verdict.detail.contains("(1, 2)"));
}

#[test]
fn off_surface_point_fails() {
    let verdict = check_on_surface(&[Point2::new(10.0, 10.0), Point2::new(10.0, 230.0)], 320.0, 200.0);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("point 1"));
}

// ── Glyph and Trace Oracle Tests ────────────────────────────────────────

#[test]
fn glyph_bounds_hold_for_wild_hints() {
    for (h, v) in [(-400.0, 400.0), (90.0, -90.0), (f64::NAN, 45.0)] {
        let t = GlyphTransform::from_hint(Some(&CameraHint::new(h, v)));
        let verdict = check_glyph_bounds(&t);
        assert!(verdict.passed, "({h}, {v}): {}", verdict.detail);
    }
}

#[test]
fn empty_trace_fails_photo_first() {
    let canvas = RecordingCanvas::new(100.0, 100.0);
    assert!(!check_photo_first(&canvas).passed);
    assert!(check_finite_trace(&canvas).passed);
}

#[test]
fn clear_first_fails_photo_first() {
    let mut canvas = RecordingCanvas::new(100.0, 100.0);
    canvas.clear(palette::BACKGROUND);
    let verdict = check_photo_first(&canvas);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("Clear"));
}
