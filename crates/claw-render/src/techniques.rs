//! Fixed pose table: three frames per technique.
//!
//! Every frame is data. Dimensions are shared so captions that compare box
//! size against the rail gap are derived from the same numbers the frames
//! are drawn with.

use claw_geometry::Cuboid;
use claw_types::{Point2, Point3, Pose, Side, TechniqueId};

use crate::cuboid::Solid;
use crate::palette::{self, DIM, GOLD, GREEN, ORANGE, RED};
use crate::scene::{Annotation, Caption, LabelPos, Rig, StepScene};

/// Distance between the two support rails.
pub const RAIL_GAP: f64 = 32.0;
/// Prize box: long side (x), height (y), short side (z).
pub const BOX_LONG: f64 = 55.0;
pub const BOX_HEIGHT: f64 = 28.0;
pub const BOX_SHORT: f64 = 40.0;
pub const RAIL_LEN: f64 = 110.0;
/// Height of the rails' top surface.
pub const RAIL_Y: f64 = 0.0;
/// Center height of a box resting on the rails.
pub const REST_Y: f64 = RAIL_Y + 3.0 + BOX_HEIGHT / 2.0;

/// Screen-space rows for free labels on the 440 x 320 diagram.
const UPPER_ROW: f64 = 80.0;
const SURFACE_MID_X: f64 = 220.0;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn prize(center: Point3, pose: Pose) -> Cuboid {
    Cuboid::new(center, p(BOX_LONG, BOX_HEIGHT, BOX_SHORT), palette::PRIZE).with_pose(pose)
}

fn slim_prize(center: Point3, depth_factor: f64) -> Cuboid {
    Cuboid::new(
        center,
        p(BOX_LONG, BOX_HEIGHT, BOX_SHORT * depth_factor),
        palette::PRIZE,
    )
}

fn frame(
    title: &str,
    caption: Caption,
    headline: Option<Caption>,
    rig: Rig,
    solids: Vec<Solid>,
    annotations: Vec<Annotation>,
) -> StepScene {
    StepScene {
        title: title.to_string(),
        caption,
        headline,
        rig,
        solids,
        annotations,
    }
}

fn rails() -> Rig {
    Rig::two_rails(RAIL_GAP, RAIL_LEN)
}

fn gap_dimension(text: impl Into<String>) -> Annotation {
    Annotation::dimension(
        p(0.0, RAIL_Y, -RAIL_GAP / 2.0),
        p(0.0, RAIL_Y, RAIL_GAP / 2.0),
        text,
        -14.0,
    )
}

/// Across the top of a resting box, along z.
fn width_dimension() -> Annotation {
    let top = REST_Y + BOX_HEIGHT / 2.0;
    Annotation::dimension(
        p(-BOX_LONG / 2.0, top, -BOX_SHORT / 2.0),
        p(-BOX_LONG / 2.0, top, BOX_SHORT / 2.0),
        "box width",
        14.0,
    )
}

/// The three frames for `id`.
pub fn scenes(id: TechniqueId) -> [StepScene; 3] {
    match id {
        TechniqueId::UprightTip => upright_tip(),
        TechniqueId::LengthwiseSlip => lengthwise_slip(),
        TechniqueId::BridgeShift => bridge_shift(),
        TechniqueId::CornerDrag => corner_drag(),
        TechniqueId::EdgeNudge => edge_nudge(),
        TechniqueId::LeverFlip => lever_flip(),
        TechniqueId::ZigZagWalk => zig_zag_walk(),
    }
}

fn upright_tip() -> [StepScene; 3] {
    let y = REST_Y;
    let tilt_from = p(25.0, y, 0.0);
    let tilt_to = p(25.0, y + 18.0, 12.0);
    [
        frame(
            "Too wide to drop",
            Caption::new(
                format!("box's short side ({BOX_SHORT}) exceeds rail gap ({RAIL_GAP}), so it rests on the rails"),
                GOLD,
            ),
            Some(Caption::new(
                format!("height ({BOX_HEIGHT}) < gap ({RAIL_GAP}): stand it up and it drops"),
                GREEN,
            )),
            rails(),
            vec![Solid::opaque(prize(p(0.0, y, 0.0), Pose::IDENTITY))],
            vec![
                gap_dimension("rail gap"),
                width_dimension(),
                Annotation::dimension(
                    p(-BOX_LONG / 2.0, y - BOX_HEIGHT / 2.0, BOX_SHORT / 2.0 + 2.0),
                    p(-BOX_LONG / 2.0, y + BOX_HEIGHT / 2.0, BOX_SHORT / 2.0 + 2.0),
                    "height",
                    14.0,
                ),
                Annotation::gripper(p(15.0, y + 30.0, 0.0), 20.0, Some(Side::Right)),
                Annotation::arrow(p(18.0, y + 10.0, -8.0), p(18.0, y - 5.0, -8.0), GREEN),
            ],
        ),
        frame(
            "Push one end to tilt",
            Caption::new("Push the raised edge to deepen the tilt", GOLD),
            None,
            rails(),
            vec![Solid::opaque(prize(p(3.0, y + 2.0, 2.0), Pose::about_x(-30.0)))],
            vec![
                Annotation::gripper(p(-10.0, y + 32.0, -8.0), 20.0, Some(Side::Left)),
                Annotation::arrow(p(-10.0, y + 18.0, -8.0), p(-5.0, y + 3.0, 0.0), GREEN),
                Annotation::curve(tilt_from, tilt_to, (15.0, -5.0), ORANGE),
                Annotation::label("30-45°", LabelPos::near(tilt_to, 10.0, -5.0), ORANGE, 10.0),
            ],
        ),
        frame(
            "Drops upright!",
            Caption::new(
                format!("box height ({BOX_HEIGHT}) is less than rail gap ({RAIL_GAP}), so it passes once upright"),
                GREEN,
            ),
            Some(Caption::new(format!("height {BOX_HEIGHT} < gap {RAIL_GAP}"), GREEN)),
            rails(),
            vec![Solid::with_alpha(prize(p(0.0, y - 5.0, 0.0), Pose::about_x(-80.0)), 0.75)],
            vec![
                Annotation::arrow(p(0.0, y - 20.0, 0.0), p(0.0, -25.0, 0.0), RED),
                gap_dimension(format!("gap {RAIL_GAP}")),
            ],
        ),
    ]
}

fn lengthwise_slip() -> [StepScene; 3] {
    let y = REST_Y;
    let turn_from = p(25.0, y + 5.0, 15.0);
    let top = y + BOX_HEIGHT / 2.0;
    [
        frame(
            "Read the current position",
            Caption::new("With a wide gap, turn the box so it slips through lengthwise", GOLD),
            Some(Caption::new(
                format!("box width ({BOX_SHORT}) > rail gap ({RAIL_GAP}): it will not drop as is"),
                GOLD,
            )),
            rails(),
            vec![Solid::opaque(prize(p(0.0, y, 0.0), Pose::IDENTITY))],
            vec![
                gap_dimension("rail gap"),
                Annotation::dimension(
                    p(-BOX_LONG / 2.0, top, -BOX_SHORT / 2.0),
                    p(BOX_LONG / 2.0, top, -BOX_SHORT / 2.0),
                    "long side",
                    14.0,
                ),
                Annotation::gripper(p(15.0, y + 30.0, 0.0), 20.0, None),
            ],
        ),
        frame(
            "Push to rotate",
            Caption::new("Rotate 10-15° per push until the long side runs along the rails", GOLD),
            None,
            rails(),
            vec![Solid::opaque(prize(p(3.0, y + 3.0, 2.0), Pose::new(-25.0, 30.0, 0.0)))],
            vec![
                Annotation::gripper(p(-15.0, y + 30.0, -5.0), 20.0, None),
                Annotation::curve(turn_from, p(10.0, y + 12.0, -10.0), (20.0, -15.0), ORANGE),
                Annotation::label("rotate", LabelPos::near(turn_from, 15.0, -8.0), ORANGE, 10.0),
            ],
        ),
        frame(
            "Lengthwise drop!",
            Caption::new("Drops lengthwise between the rails!", GREEN),
            Some(Caption::new(
                "Long side along the rails: only the narrow face meets the gap",
                GREEN,
            )),
            rails(),
            vec![Solid::with_alpha(prize(p(0.0, y - 5.0, 0.0), Pose::new(-30.0, 60.0, 0.0)), 0.75)],
            vec![Annotation::arrow(p(0.0, y - 18.0, 0.0), p(0.0, -25.0, 0.0), RED)],
        ),
    ]
}

fn bridge_shift() -> [StepScene; 3] {
    let y = REST_Y;
    let start = p(-5.0, y, 0.0);
    [
        frame(
            "Rail gap vs box size",
            Caption::new("Compare rail gap with box size to choose upright or lengthwise", GOLD),
            None,
            rails(),
            vec![Solid::opaque(prize(p(0.0, y, 0.0), Pose::IDENTITY))],
            vec![
                gap_dimension("rail gap"),
                width_dimension(),
                Annotation::label("measure", LabelPos::near(p(0.0, y + 20.0, 0.0), 70.0, -20.0), palette::WHITE, 12.0),
            ],
        ),
        frame(
            "Push one side",
            Caption::new("Push the end away from the exit to walk it across", GOLD),
            None,
            rails(),
            vec![Solid::opaque(prize(p(8.0, y, 3.0), Pose::about_z(-6.0)))],
            vec![
                Annotation::gripper(p(-20.0, y + 30.0, -5.0), 20.0, Some(Side::Left)),
                Annotation::arrow(p(-18.0, y + 5.0, -5.0), p(10.0, y, 3.0), GREEN),
            ],
        ),
        frame(
            "Repeat, then drop",
            Caption::new("Once the center of mass crosses between the rails it drops!", GREEN),
            None,
            rails(),
            vec![
                Solid::ghost(prize(p(0.0, y, 0.0), Pose::IDENTITY)),
                Solid::with_alpha(prize(p(15.0, y - 3.0, 5.0), Pose::about_x(-12.0)), 0.7),
            ],
            vec![
                Annotation::arrow(p(15.0, y - 15.0, 5.0), p(15.0, -25.0, 5.0), RED),
                Annotation::curve(start, p(15.0, y, 5.0), (10.0, -20.0), ORANGE),
                Annotation::label("x2-4 times", LabelPos::near(start, -30.0, -10.0), ORANGE, 10.0),
            ],
        ),
    ]
}

fn corner_drag() -> [StepScene; 3] {
    let y = REST_Y;
    let rig = || Rig::offset_rails(0.0, RAIL_GAP, RAIL_LEN, RAIL_GAP + 20.0);
    let mid = RAIL_GAP / 2.0;
    let resting = p(10.0, y, mid + 8.0);
    let hook = p(10.0, y + 5.0, mid + 15.0);
    [
        frame(
            "Box at the rail edge",
            Caption::new("Place the claw just outside the box's edge", GOLD),
            None,
            rig(),
            vec![Solid::opaque(slim_prize(resting, 0.8))],
            vec![Annotation::gripper(p(10.0, y + 32.0, mid + 15.0), 20.0, None)],
        ),
        frame(
            "Hook one prong",
            Caption::new("Hook a single prong; with both it just lifts", GOLD),
            None,
            rig(),
            vec![Solid::opaque(slim_prize(resting, 0.8))],
            vec![
                Annotation::gripper(p(10.0, y + 22.0, mid + 12.0), 20.0, Some(Side::Left)),
                Annotation::Ring {
                    at: hook,
                    radius: 8.0,
                    color: palette::CLAW_ACTIVE,
                    dashed: false,
                },
                Annotation::label("one prong only!", LabelPos::near(hook, 25.0, -8.0), palette::CLAW_ACTIVE, 10.0),
            ],
        ),
        frame(
            "Drag and drop",
            Caption::new("Dragging it 1-2 cm is enough to drop!", GREEN),
            None,
            rig(),
            vec![
                Solid::ghost(slim_prize(resting, 0.8)),
                Solid::opaque(slim_prize(p(10.0, y, mid - 5.0), 0.8)),
            ],
            vec![
                Annotation::arrow(p(10.0, y, mid + 6.0), p(10.0, y, mid - 5.0), GREEN),
                Annotation::arrow(p(10.0, y - 8.0, mid - 10.0), p(10.0, -25.0, mid - 10.0), RED),
            ],
        ),
    ]
}

fn edge_nudge() -> [StepScene; 3] {
    let y = REST_Y;
    let sweep_from = p(-15.0, y + 15.0, -20.0);
    [
        frame(
            "Pick the push direction",
            Caption::new("Find the exit first, then pick the push direction", GOLD),
            None,
            rails(),
            vec![Solid::opaque(prize(p(-15.0, y, 0.0), Pose::IDENTITY))],
            vec![
                Annotation::arrow(p(10.0, y + 5.0, 0.0), p(45.0, y + 5.0, 0.0), GREEN),
                Annotation::label("toward exit", LabelPos::near(Point3::ORIGIN, 80.0, -30.0), GREEN, 11.0),
            ],
        ),
        frame(
            "Push from the edge",
            Caption::new("Push from the far end toward the exit", GOLD),
            None,
            rails(),
            vec![Solid::opaque(prize(p(-15.0, y, 0.0), Pose::IDENTITY))],
            vec![
                Annotation::gripper(p(-35.0, y + 30.0, 0.0), 20.0, Some(Side::Right)),
                Annotation::arrow(p(-30.0, y + 5.0, 0.0), p(-10.0, y, 0.0), GREEN),
            ],
        ),
        frame(
            "Repeat and drop",
            Caption::new("Keep pushing the same spot until it drops!", GREEN),
            None,
            rails(),
            vec![
                Solid::ghost(prize(p(-15.0, y, 0.0), Pose::IDENTITY)),
                Solid::with_alpha(prize(p(5.0, y, 0.0), Pose::IDENTITY), 0.5),
                Solid::with_alpha(prize(p(25.0, y - 3.0, 0.0), Pose::about_z(-5.0)), 0.8),
            ],
            vec![
                Annotation::arrow(p(30.0, y - 15.0, 0.0), p(30.0, -25.0, 0.0), RED),
                Annotation::curve(sweep_from, p(25.0, y + 15.0, -20.0), (0.0, -15.0), ORANGE),
                Annotation::label("x2-4", LabelPos::near(sweep_from, -15.0, -5.0), ORANGE, 10.0),
            ],
        ),
    ]
}

fn lever_flip() -> [StepScene; 3] {
    let y = REST_Y;
    let bar_z = -8.0;
    let rig = || Rig::single_rail(bar_z, RAIL_LEN, 50.0);
    let pivot = p(0.0, RAIL_Y + 5.0, bar_z);
    [
        frame(
            "Find the pivot",
            Caption::new("The rail contact is the lever's pivot, like a seesaw", GOLD),
            None,
            rig(),
            vec![Solid::opaque(prize(p(15.0, y, bar_z + 10.0), Pose::IDENTITY))],
            vec![
                Annotation::Ring {
                    at: pivot,
                    radius: 10.0,
                    color: palette::CLAW_ACTIVE,
                    dashed: true,
                },
                Annotation::label("pivot", LabelPos::near(pivot, -25.0, 15.0), palette::CLAW_ACTIVE, 10.0),
                Annotation::label("< inside", LabelPos::near(pivot, -55.0, -10.0), DIM, 10.0),
                Annotation::label("outside >", LabelPos::near(pivot, 65.0, -10.0), DIM, 10.0),
            ],
        ),
        frame(
            "Press the inner end",
            Caption::new("Press the inner end hard and the outer end lifts!", GOLD),
            None,
            rig(),
            vec![Solid::opaque(prize(p(15.0, y + 2.0, bar_z + 10.0), Pose::about_z(12.0)))],
            vec![
                Annotation::gripper(p(-15.0, y + 28.0, bar_z), 20.0, Some(Side::Right)),
                Annotation::arrow(p(-12.0, y + 12.0, bar_z), p(-8.0, y - 5.0, bar_z + 3.0), GREEN),
                Annotation::arrow(p(35.0, y + 5.0, bar_z + 18.0), p(35.0, y + 18.0, bar_z + 18.0), ORANGE),
                Annotation::label(
                    "press",
                    LabelPos::Surface(Point2::new(SURFACE_MID_X - 80.0, UPPER_ROW)),
                    GREEN,
                    10.0,
                ),
                Annotation::label(
                    "lifts",
                    LabelPos::Surface(Point2::new(SURFACE_MID_X + 80.0, UPPER_ROW)),
                    ORANGE,
                    10.0,
                ),
            ],
        ),
        frame(
            "Flipped!",
            Caption::new("It flips over the rail and drops!", GREEN),
            None,
            rig(),
            vec![Solid::with_alpha(prize(p(20.0, y - 5.0, bar_z + 15.0), Pose::about_z(50.0)), 0.7)],
            vec![
                Annotation::curve(
                    p(15.0, y + 10.0, bar_z + 5.0),
                    p(25.0, y - 10.0, bar_z + 25.0),
                    (30.0, -25.0),
                    RED,
                ),
                Annotation::arrow(p(22.0, y - 18.0, bar_z + 20.0), p(22.0, -25.0, bar_z + 20.0), RED),
            ],
        ),
    ]
}

fn zig_zag_walk() -> [StepScene; 3] {
    let y = REST_Y;
    let half = RAIL_GAP / 2.0;
    let swing = p(0.0, y + 18.0, -10.0);
    let path_from = p(-3.0, y + 12.0, -10.0);
    [
        frame(
            "Pull right rear",
            Caption::new("Pull the right rear corner backward", GOLD),
            None,
            rails(),
            vec![Solid::opaque(prize(p(0.0, y, 0.0), Pose::IDENTITY))],
            vec![
                Annotation::gripper(p(18.0, y + 28.0, -half - 5.0), 18.0, Some(Side::Right)),
                Annotation::arrow(p(18.0, y + 5.0, -half), p(18.0, y + 5.0, -half - 12.0), GREEN),
                Annotation::label("exit >", LabelPos::near(p(RAIL_LEN / 2.0 + 5.0, y, 0.0), 0.0, -5.0), palette::EXIT_TEXT, 10.0),
            ],
        ),
        frame(
            "Pull left rear",
            Caption::new("Now pull the left rear corner (alternate!)", GOLD),
            None,
            rails(),
            vec![Solid::opaque(prize(p(3.0, y, 1.0), Pose::about_y(5.0)))],
            vec![
                Annotation::gripper(p(-18.0, y + 28.0, half + 5.0), 18.0, Some(Side::Left)),
                Annotation::arrow(p(-18.0, y + 5.0, half), p(-18.0, y + 5.0, half + 12.0), GREEN),
                Annotation::curve(swing, p(5.0, y + 18.0, 5.0), (15.0, -8.0), ORANGE),
                Annotation::label("left/right", LabelPos::near(swing, -20.0, -5.0), ORANGE, 10.0),
            ],
        ),
        frame(
            "Forward drop!",
            Caption::new("Zig-zag forward toward the exit and it drops!", GREEN),
            None,
            rails(),
            vec![
                Solid::ghost(prize(p(0.0, y, 0.0), Pose::IDENTITY)),
                Solid::with_alpha(prize(p(18.0, y - 3.0, 0.0), Pose::about_x(-8.0)), 0.75),
            ],
            vec![
                Annotation::arrow(p(20.0, y - 12.0, 0.0), p(45.0, -25.0, 0.0), RED),
                Annotation::curve(path_from, p(18.0, y + 12.0, -10.0), (5.0, -10.0), ORANGE),
                Annotation::label("2-3 alternating sets", LabelPos::near(path_from, -20.0, -5.0), ORANGE, 10.0),
            ],
        ),
    ]
}
