//! Technique diagrams and photo overlays.
//!
//! [`SceneComposer`] renders the three-frame diagram for a technique from a
//! fixed pose table. [`PhotoCompositor`] marks up a player's photograph with
//! where to move the gripper next.

pub mod compositor;
pub mod composer;
pub mod config;
pub mod cuboid;
pub mod errors;
pub mod gripper;
pub mod palette;
pub mod primitives;
pub mod scene;
pub mod techniques;

pub use compositor::{OverlayPlan, PhotoCompositor};
pub use composer::SceneComposer;
pub use config::{DiagramConfig, OverlayConfig, RenderConfig};
pub use cuboid::{draw_cuboid, draw_solids, Solid};
pub use errors::RenderError;
pub use gripper::GripperRenderMode;
pub use scene::{Annotation, Caption, LabelPos, Rig, StepScene};
