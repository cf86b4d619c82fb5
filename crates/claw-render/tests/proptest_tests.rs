//! Property-based tests for primitives, glyphs and the photo compositor.

use approx::assert_relative_eq;
use proptest::prelude::*;

use claw_canvas::{Photo, RecordingCanvas};
use claw_geometry::GlyphTransform;
use claw_render::gripper::draw_schematic_glyph;
use claw_render::primitives::{arrow, ArrowStyle};
use claw_render::{palette, OverlayConfig, PhotoCompositor};
use claw_types::{AnchorPoint, CameraHint, Direction, Point2, Step};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_screen_point() -> impl Strategy<Value = Point2> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point2::new(x, y))
}

/// Percent anchors, deliberately including values off the photo.
fn arb_anchor() -> impl Strategy<Value = AnchorPoint> {
    (-50.0f64..150.0, -50.0f64..150.0).prop_map(|(x, y)| AnchorPoint::new(x, y))
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Forward),
        Just(Direction::Back),
        Just(Direction::Center),
    ]
}

fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec((arb_anchor(), arb_direction()), 1..6).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (a, d))| Step::new(i + 1, "move", a).with_direction(d))
            .collect()
    })
}

fn blank_photo(w: u32, h: u32) -> Photo {
    Photo::from_rgba(image::RgbaImage::from_pixel(w, h, image::Rgba([80, 80, 80, 255])))
}

// ---------------------------------------------------------------------------
// 1. Arrows: a zero-length arrow draws nothing; any other draws a shaft and a
//    head whose tip is the destination.
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn arrow_draws_iff_endpoints_differ(from in arb_screen_point(), to in arb_screen_point()) {
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        let drawn = arrow(&mut canvas, from, to, &ArrowStyle::diagram(palette::GREEN));
        prop_assert_eq!(drawn, from.distance_to(&to) >= 1e-9);
        prop_assert_eq!(canvas.calls().len(), if drawn { 2 } else { 0 });
    }

    #[test]
    fn arrow_to_itself_is_skipped(p in arb_screen_point()) {
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        prop_assert!(!arrow(&mut canvas, p, p, &ArrowStyle::diagram(palette::GREEN)));
        prop_assert!(canvas.calls().is_empty());
    }
}

// ---------------------------------------------------------------------------
// 2. Schematic glyph: the prong tips stay on the anchor's row for any hint.
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn glyph_tips_stay_on_anchor_row(
        h in -400.0f64..400.0,
        v in -400.0f64..400.0,
        anchor in arb_screen_point(),
    ) {
        let t = GlyphTransform::from_hint(Some(&CameraHint::new(h, v)));
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        draw_schematic_glyph(&mut canvas, anchor, &t, 60.0, None);

        let tips: Vec<Point2> = canvas
            .strokes()
            .filter(|(_, s)| !s.is_dashed())
            .filter_map(|(p, _)| p.points().last())
            .collect();
        prop_assert_eq!(tips.len(), 2);
        for tip in tips {
            assert_relative_eq!(tip.y, anchor.y, epsilon = 1e-6);
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Compositor: whatever the analysis says, targets land on the photo and
//    nothing non-finite reaches the canvas.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn overlay_targets_stay_on_photo(
        steps in arb_steps(),
        active in 0usize..6,
        (h, v) in (-400.0f64..400.0, -400.0f64..400.0),
        (w, ht) in (40u32..900, 40u32..700),
    ) {
        let photo = blank_photo(w, ht);
        let mut canvas = RecordingCanvas::new(w as f64, ht as f64);
        let hint = CameraHint::new(h, v);
        let plan = PhotoCompositor::default().compose_on(&mut canvas, &photo, &steps, active, Some(&hint));

        prop_assert_eq!(plan.targets.len(), steps.len());
        prop_assert_eq!(plan.mode.is_some(), active < steps.len());
        for t in &plan.targets {
            prop_assert!(t.x >= 0.0 && t.x <= w as f64, "x {}", t.x);
            prop_assert!(t.y >= 0.0 && t.y <= ht as f64, "y {}", t.y);
        }
        prop_assert!(canvas.all_points().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn marker_scale_follows_shorter_side(w in 1.0f64..4000.0, h in 1.0f64..4000.0) {
        let scale = OverlayConfig::default().marker_scale(w, h);
        assert_relative_eq!(scale, w.min(h) / 500.0, max_relative = 1e-12);
    }
}
