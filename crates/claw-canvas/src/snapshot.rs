use std::path::Path;

use base64::Engine;

use crate::errors::CanvasError;
use crate::photo::Photo;

/// One finished raster frame, PNG-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl Snapshot {
    /// `data:image/png;base64,...`
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }

    /// Decode the frame back into pixels.
    pub fn decode(&self) -> Result<Photo, CanvasError> {
        Photo::decode(&self.png)
    }
}
