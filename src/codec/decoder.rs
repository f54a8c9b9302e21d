use image::{DynamicImage, GrayImage, Luma};

use super::Decoder;

/// White margin (px) added around the input before detection
const DEFAULT_PADDING: u32 = 16;

/// `Decoder` backed by the `rqrr` crate
#[derive(Debug, Clone, Copy)]
pub struct RqrrDecoder {
    /// Extra white margin so codes drawn to the image edge still have a quiet zone
    padding: u32,
}

impl Default for RqrrDecoder {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

impl RqrrDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for RqrrDecoder {
    fn decode(&self, image: &DynamicImage) -> Option<String> {
        let luma = flatten_to_luma(image);
        let (width, height) = luma.dimensions();
        let pad = self.padding;

        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            (width + 2 * pad) as usize,
            (height + 2 * pad) as usize,
            |x, y| {
                let (x, y) = (x as u32, y as u32);
                if x < pad || y < pad || x >= width + pad || y >= height + pad {
                    255
                } else {
                    luma.get_pixel(x - pad, y - pad)[0]
                }
            },
        );

        let grids = prepared.detect_grids();
        log::debug!("Found {} candidate QR grid(s)", grids.len());

        // First grid that decodes to something wins
        grids
            .into_iter()
            .find_map(|grid| match grid.decode() {
                Ok((_meta, content)) if !content.is_empty() => Some(content),
                Ok(_) => None,
                Err(e) => {
                    log::debug!("Grid failed to decode: {:?}", e);
                    None
                }
            })
    }
}

/// Greyscale copy of `image` with any transparency composited onto white
fn flatten_to_luma(image: &DynamicImage) -> GrayImage {
    if !image.color().has_alpha() {
        return image.to_luma8();
    }

    let rgba = image.to_rgba8();
    GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        // Rec. 601 luma, then blend over white
        let luma = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
        let alpha = a as u32;
        Luma([((luma * alpha + 255 * (255 - alpha)) / 255) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{EncodeOptions, Encoder, QrcodeEncoder};
    use image::{Rgba, RgbaImage};

    fn encode(text: &str, options: &EncodeOptions) -> DynamicImage {
        let generated = QrcodeEncoder::new().encode(text, options).unwrap();
        DynamicImage::ImageLuma8(generated.pixels().clone())
    }

    #[test]
    fn test_round_trip_example_url() {
        let image = encode("https://example.com", &EncodeOptions::default());
        let decoded = RqrrDecoder::new().decode(&image);

        assert_eq!(decoded.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_round_trip_preserves_arbitrary_text() {
        let decoder = RqrrDecoder::new();
        for text in ["not a url at all", "héllo wörld", "a", "mailto:someone@example.com?subject=Hi"] {
            let image = encode(text, &EncodeOptions::default());
            assert_eq!(decoder.decode(&image).as_deref(), Some(text), "input: {text:?}");
        }
    }

    #[test]
    fn test_code_without_quiet_zone_is_padded() {
        let options = EncodeOptions {
            border: 0,
            ..EncodeOptions::default()
        };
        let image = encode("edge to edge", &options);

        assert_eq!(RqrrDecoder::new().decode(&image).as_deref(), Some("edge to edge"));
    }

    #[test]
    fn test_blank_image_has_no_code() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(200, 200, Luma([255])));
        assert_eq!(RqrrDecoder::new().decode(&image), None);
    }

    #[test]
    fn test_transparent_background_is_treated_as_white() {
        let code = encode("transparent", &EncodeOptions::default()).to_luma8();

        // Dark modules opaque black, everything else fully transparent black
        let rgba = RgbaImage::from_fn(code.width(), code.height(), |x, y| {
            if code.get_pixel(x, y)[0] == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        let decoded = RqrrDecoder::new().decode(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(decoded.as_deref(), Some("transparent"));
    }
}
