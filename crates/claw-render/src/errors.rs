use claw_canvas::CanvasError;

/// Errors raised while producing a raster.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("photo could not be decoded: {0}")]
    Decode(String),

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
