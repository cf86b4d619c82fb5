/// Errors raised by drawing surfaces and image I/O.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    #[error("cannot allocate a {width}x{height} surface")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to load font: {0}")]
    Font(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
