/// Conversion of generated codes into something iced can draw
use iced::widget::image::Handle;

use crate::state::data::GeneratedImage;

/// Build an RGBA image handle for the preview widget
///
/// iced has no greyscale upload path, so each pixel is expanded to RGBA8.
pub fn to_handle(image: &GeneratedImage) -> Handle {
    Handle::from_rgba(image.width(), image.height(), image.to_rgba_bytes())
}
