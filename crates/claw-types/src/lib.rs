//! Value types shared by every claw-guide crate.
//!
//! Everything here is a plain value: constructed fresh for each render call,
//! never mutated after construction, and serde-serializable so that analysis
//! results and pose tables can be inspected as JSON.

pub mod color;
pub mod point;
pub mod pose;
pub mod step;
pub mod technique;

pub use color::*;
pub use point::*;
pub use pose::*;
pub use step::*;
pub use technique::*;
