//! Drawing surfaces for diagrams and photo overlays.
//!
//! [`Canvas`] is the object-safe set of drawing operations every renderer
//! targets. [`Surface`] adds snapshotting. Two implementations ship:
//! [`PixmapCanvas`] rasterizes with tiny-skia, [`RecordingCanvas`] keeps an
//! ordered trace of calls for tests.

pub mod canvas;
pub mod errors;
pub mod path;
pub mod photo;
pub mod pixmap;
pub mod recording;
pub mod snapshot;
pub mod style;

pub use canvas::{Canvas, Surface};
pub use errors::CanvasError;
pub use path::{Path2, PathCmd};
pub use photo::Photo;
pub use pixmap::{FontSource, PixmapCanvas};
pub use recording::{DrawCall, RecordingCanvas};
pub use snapshot::Snapshot;
pub use style::{Rect, StrokeStyle, TextAlign, TextBaseline, TextStyle};
