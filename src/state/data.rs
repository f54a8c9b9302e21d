/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the codec layer and the UI layer.

use image::{GrayImage, ImageFormat, ImageResult};
use std::path::Path;

/// A QR code rendered in memory: black modules on a white background
///
/// Always 8-bit greyscale and always written out as PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pixels: GrayImage,
}

impl GeneratedImage {
    pub fn new(pixels: GrayImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Raw greyscale buffer
    pub fn pixels(&self) -> &GrayImage {
        &self.pixels
    }

    /// Expand to RGBA8 bytes (row-major) for display
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .pixels()
            .flat_map(|p| [p[0], p[0], p[0], 255])
            .collect()
    }

    /// Write the image to `path` as PNG, whatever the file extension says
    pub fn write_png(&self, path: &Path) -> ImageResult<()> {
        self.pixels.save_with_format(path, ImageFormat::Png)
    }
}
