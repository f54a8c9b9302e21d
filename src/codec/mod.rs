/// QR encode/decode capabilities
///
/// The UI only talks to the two traits below:
/// - `Encoder` turns text into a black-on-white raster (encoder.rs, `qrcode`)
/// - `Decoder` pulls a payload back out of a raster (decoder.rs, `rqrr`)
///
/// Swapping a library means writing a new impl, nothing in `ui` changes.

pub mod encoder;
pub mod decoder;

pub use decoder::RqrrDecoder;
pub use encoder::QrcodeEncoder;

use image::DynamicImage;

use crate::error::QrError;
use crate::state::data::GeneratedImage;

/// Pixel size of one QR module in the generated image
pub const DEFAULT_BOX_SIZE: u32 = 5;

/// Quiet zone width, in modules, around the generated code
pub const DEFAULT_BORDER: u32 = 2;

/// Error-correction level, independent of any particular QR library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// ~7% of modules recoverable
    Low,
    /// ~15%
    Medium,
    /// ~25%
    Quartile,
    /// ~30%, the most resilient and the least capacity
    High,
}

/// Parameters for rendering a QR code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub correction: Correction,
    /// Pixels per module (clamped to at least 1)
    pub box_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            correction: Correction::High,
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
        }
    }
}

/// Text to QR raster
pub trait Encoder {
    /// Encode `text` using the smallest QR version that fits.
    /// Fails with `QrError::Encode` when the text exceeds the maximum capacity.
    fn encode(&self, text: &str, options: &EncodeOptions) -> Result<GeneratedImage, QrError>;
}

/// QR raster to text
pub trait Decoder {
    /// Detect and decode in one step. `None` covers both "no code found" and
    /// "code found but unreadable".
    fn decode(&self, image: &DynamicImage) -> Option<String>;
}
