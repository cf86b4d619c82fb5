//! End-to-end scenarios: analysis JSON through the compositor.

use claw_render::{GripperRenderMode, OverlayConfig};
use claw_types::{BBox, Direction, Point2, TechniqueId};
use test_harness::assertions::*;
use test_harness::helpers::*;
use test_harness::OverlayBench;

// ── Scenario 1: Single move with the gripper in view ───────────────────

#[test]
fn test_single_move_crops_the_gripper() {
    let png = photo_with_block(400, 300, (160, 30, 80, 60)).unwrap();
    let mut bench = OverlayBench::with_photo(png).unwrap();
    let analysis = bench.load(SINGLE_MOVE_JSON).unwrap();
    assert_eq!(analysis.technique, Some(TechniqueId::UprightTip));

    bench.compose(0).unwrap();
    bench
        .assert_mode(Some(GripperRenderMode::PhotoCrop(BBox::new(40.0, 10.0, 20.0, 20.0))))
        .unwrap();
    bench.assert_oracles_pass().unwrap();

    let canvas = bench.canvas();
    assert_image_count(canvas, 2, "photo + crop").unwrap();
    // source outline and the move arrow
    assert_dashed_count(canvas, 2, "crop mode").unwrap();
    assert_text_drawn(canvas, "Move 2", "badge").unwrap();
    assert_point_near(bench.target(0).unwrap(), Point2::new(220.0, 195.0), 1e-9, "target").unwrap();
}

#[test]
fn test_single_move_rasterizes_a_red_target() {
    let png = photo_with_block(400, 300, (160, 30, 80, 60)).unwrap();
    let mut bench = OverlayBench::with_photo(png).unwrap();
    bench.load(SINGLE_MOVE_JSON).unwrap();

    let snap = bench.rasterize(0).unwrap();
    assert_eq!((snap.width, snap.height), (400, 300));
    let photo = snap.decode().unwrap();
    let px = photo.as_rgba().get_pixel(220, 195).0;
    assert!(px[0] > 200 && px[1] < 120, "target pixel {px:?}");
}

// ── Scenario 2: Schematic glyph when the gripper is not visible ─────────

#[test]
fn test_schematic_without_bbox() {
    let mut bench = OverlayBench::new(640, 480).unwrap();
    bench
        .step(30.0, 60.0, "grab the left corner")
        .direction(Direction::Left);
    bench.hint(25.0, 60.0);
    bench.compose(0).unwrap();

    bench.assert_mode(Some(GripperRenderMode::Schematic)).unwrap();
    bench.assert_oracles_pass().unwrap();
    let canvas = bench.canvas();
    assert_image_count(canvas, 1, "photo only").unwrap();
    // glyph cable and the direction arrow
    assert_dashed_count(canvas, 2, "schematic with direction").unwrap();
    assert_text_drawn(canvas, "Move 1", "badge").unwrap();
}

#[test]
fn test_center_direction_has_no_arrow() {
    let mut bench = OverlayBench::new(640, 480).unwrap();
    bench.step(50.0, 50.0, "lift");
    bench.compose(0).unwrap();
    assert_dashed_count(bench.canvas(), 1, "glyph cable only").unwrap();
}

#[test]
fn test_degenerate_bbox_falls_back_to_schematic() {
    let mut bench = OverlayBench::new(320, 240).unwrap();
    bench.step(50.0, 50.0, "grab").source_bbox(10.0, 10.0, 0.0, 5.0);
    bench.compose(0).unwrap();
    bench.assert_mode(Some(GripperRenderMode::Schematic)).unwrap();
}

// ── Scenario 3: Layout guarantees ───────────────────────────────────────

#[test]
fn test_coincident_targets_are_pushed_apart() {
    let mut bench = OverlayBench::new(500, 500).unwrap();
    bench.step(50.0, 50.0, "first").step(50.0, 50.0, "second");
    bench.compose(0).unwrap();

    let targets = bench.plan().unwrap().targets.clone();
    assert_separated(&targets, 40.0, "coincident pair").unwrap();
    let d = targets[0].distance_to(&targets[1]);
    assert!((d - 50.0).abs() < 1e-9, "pair ended {d} apart");
}

#[test]
fn test_targets_stay_inside_margin() {
    let mut bench = OverlayBench::new(500, 400).unwrap();
    bench
        .step(0.0, 0.0, "corner")
        .step(100.0, 100.0, "far corner")
        .step(150.0, -20.0, "off the photo");
    bench.compose(2).unwrap();
    let targets = bench.plan().unwrap().targets.clone();
    assert_within_margin(&targets, 500.0, 400.0, 0.0, "clamped to the photo").unwrap();
    assert_point_near(targets[2], Point2::new(500.0, 0.0), 1e-9, "off-photo anchor").unwrap();
}

#[test]
fn test_out_of_range_active_step_draws_no_marker() {
    let mut bench = OverlayBench::new(300, 200).unwrap();
    bench.step(50.0, 50.0, "only");
    let plan = bench.compose(3).unwrap();
    assert!(plan.mode.is_none());
    assert_text_absent(bench.canvas(), "Move", "no badge").unwrap();
    bench.assert_oracles_pass().unwrap();
}

// ── Scenario 4: Overview ────────────────────────────────────────────────

#[test]
fn test_overview_links_steps_in_order() {
    let json = multi_step_json(
        "zurashi",
        &[(20.0, 30.0, "left"), (50.0, 50.0, "forward"), (80.0, 70.0, "sideways")],
    );
    let mut bench = OverlayBench::new(600, 400).unwrap();
    let analysis = bench.load(&json).unwrap();
    assert_eq!(analysis.technique, Some(TechniqueId::EdgeNudge));
    assert_eq!(analysis.steps[2].direction, Direction::Center);

    bench.compose_overview().unwrap();
    let canvas = bench.canvas();
    assert_dashed_count(canvas, 2, "links between three targets").unwrap();
    for n in ["1", "2", "3"] {
        assert_text_drawn(canvas, n, "number tag").unwrap();
    }
    assert_text_absent(canvas, "Move", "overview has no move badge").unwrap();
}

// ── Scenario 5: Config overrides ────────────────────────────────────────

#[test]
fn test_no_darkening_when_disabled() {
    let config = OverlayConfig {
        darken_alpha: 0.0,
        ..OverlayConfig::default()
    };
    let png = solid_photo_png(200, 200, [30, 120, 200, 255]).unwrap();
    let mut bench = OverlayBench::with_photo(png).unwrap().with_config(config);
    bench.step(90.0, 90.0, "grab");
    let snap = bench.rasterize(0).unwrap();
    let px = snap.decode().unwrap().as_rgba().get_pixel(2, 2).0;
    for (got, want) in px[..3].iter().zip([30u8, 120, 200]) {
        assert!(got.abs_diff(want) <= 2, "pixel {px:?}");
    }
}

// ── Scenario 6: Diagrams ────────────────────────────────────────────────

#[test]
fn test_every_technique_has_three_cleared_frames() {
    for id in TechniqueId::ALL {
        let frames = diagram_trace(id).unwrap();
        assert_eq!(frames.len(), 3, "{id}");
        for frame in &frames {
            assert!(matches!(frame.first(), Some(claw_canvas::DrawCall::Clear(_))), "{id}");
        }
    }
}
