use image::RgbaImage;

use crate::errors::CanvasError;
use crate::style::Rect;

/// A decoded host photograph in straight RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    image: RgbaImage,
}

impl Photo {
    /// Decode PNG or JPEG bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, CanvasError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| CanvasError::Decode(e.to_string()))?
            .to_rgba8();
        if image.width() == 0 || image.height() == 0 {
            return Err(CanvasError::Decode("image has no pixels".into()));
        }
        Ok(Self { image })
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() as f64, self.height() as f64)
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Integer pixel window covering `rect`, clipped to the photo.
    /// `None` when nothing of `rect` lies inside.
    pub fn pixel_window(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        if rect.is_empty() {
            return None;
        }
        let x0 = rect.x.floor().max(0.0);
        let y0 = rect.y.floor().max(0.0);
        let x1 = (rect.x + rect.w).ceil().min(self.width() as f64);
        let y1 = (rect.y + rect.h).ceil().min(self.height() as f64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}
