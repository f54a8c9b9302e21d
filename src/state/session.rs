use super::data::GeneratedImage;

/// Per-run application state
///
/// Holds the most recently generated QR code so the download action can
/// save it later. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct Session {
    generated: Option<GeneratedImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the retained image wholesale
    pub fn set_generated(&mut self, image: GeneratedImage) {
        self.generated = Some(image);
    }

    /// The last generated image, if any
    pub fn generated(&self) -> Option<&GeneratedImage> {
        self.generated.as_ref()
    }

    pub fn has_generated(&self) -> bool {
        self.generated.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(!session.has_generated());
        assert!(session.generated().is_none());
    }

    #[test]
    fn test_set_generated_replaces_previous() {
        let mut session = Session::new();
        session.set_generated(GeneratedImage::new(GrayImage::from_pixel(1, 1, Luma([0]))));
        session.set_generated(GeneratedImage::new(GrayImage::from_pixel(3, 3, Luma([255]))));

        assert_eq!(session.generated().map(|image| image.width()), Some(3));
    }
}
