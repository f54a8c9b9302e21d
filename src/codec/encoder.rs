use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

use super::{Correction, EncodeOptions, Encoder};
use crate::error::QrError;
use crate::state::data::GeneratedImage;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// `Encoder` backed by the `qrcode` crate
///
/// The crate's own renderer only supports a fixed 4-module quiet zone, so the
/// module matrix is painted by hand to honour `EncodeOptions::border`.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeEncoder;

impl QrcodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for QrcodeEncoder {
    fn encode(&self, text: &str, options: &EncodeOptions) -> Result<GeneratedImage, QrError> {
        // Version is left to the crate: it picks the smallest one that fits
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(options.correction))?;

        let modules = code.width() as u32;
        let colors = code.to_colors();
        let box_size = options.box_size.max(1);
        let border = options.border;
        let side = (modules + 2 * border) * box_size;

        let pixels = GrayImage::from_fn(side, side, |x, y| {
            let mx = x / box_size;
            let my = y / box_size;

            // Quiet zone
            if mx < border || my < border || mx >= border + modules || my >= border + modules {
                return LIGHT;
            }

            let index = ((my - border) * modules + (mx - border)) as usize;
            match colors[index] {
                Color::Dark => DARK,
                Color::Light => LIGHT,
            }
        });

        log::debug!(
            "Encoded {} bytes as {}x{} modules ({}px)",
            text.len(),
            modules,
            modules,
            side
        );

        Ok(GeneratedImage::new(pixels))
    }
}

fn ec_level(correction: Correction) -> EcLevel {
    match correction {
        Correction::Low => EcLevel::L,
        Correction::Medium => EcLevel::M,
        Correction::Quartile => EcLevel::Q,
        Correction::High => EcLevel::H,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_includes_border() {
        let options = EncodeOptions::default();
        let image = QrcodeEncoder::new().encode("https://example.com", &options).unwrap();

        let modules = QrCode::with_error_correction_level("https://example.com", EcLevel::H)
            .unwrap()
            .width() as u32;
        let expected = (modules + 2 * options.border) * options.box_size;
        assert_eq!(image.width(), expected);
        assert_eq!(image.height(), expected);
    }

    #[test]
    fn test_quiet_zone_is_white_and_finder_is_dark() {
        let options = EncodeOptions::default();
        let image = QrcodeEncoder::new().encode("hello", &options).unwrap();
        let pixels = image.pixels();

        let start = options.border * options.box_size;
        assert_eq!(*pixels.get_pixel(0, 0), LIGHT);
        assert_eq!(*pixels.get_pixel(start - 1, start - 1), LIGHT);
        // Top-left corner of the top-left finder pattern
        assert_eq!(*pixels.get_pixel(start, start), DARK);
    }

    #[test]
    fn test_lower_correction_fits_in_smaller_version() {
        let text = "https://example.com/some/longer/path?with=query&and=more";
        let high = QrcodeEncoder::new().encode(text, &EncodeOptions::default()).unwrap();
        let low = QrcodeEncoder::new()
            .encode(
                text,
                &EncodeOptions {
                    correction: Correction::Low,
                    ..EncodeOptions::default()
                },
            )
            .unwrap();

        assert!(low.width() < high.width());
    }

    #[test]
    fn test_oversized_input_fails() {
        // Level H tops out at 1273 bytes
        let text = "x".repeat(3000);
        let result = QrcodeEncoder::new().encode(&text, &EncodeOptions::default());

        assert!(matches!(result, Err(QrError::Encode(_))));
    }

    #[test]
    fn test_zero_box_size_is_clamped() {
        let options = EncodeOptions {
            box_size: 0,
            border: 0,
            ..EncodeOptions::default()
        };
        let image = QrcodeEncoder::new().encode("a", &options).unwrap();

        // Version 1 is 21 modules wide
        assert_eq!(image.width(), 21);
    }
}
