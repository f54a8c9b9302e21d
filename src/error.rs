/// Error types for the QR utility
///
/// Every failure here is recovered at the UI layer: it becomes a `Notice`
/// shown to the user and the application stays ready for the next action.
/// A decode that finds no code is not an error (see `ReadOutcome::NoCode`).

use std::path::PathBuf;
use thiserror::Error;

use crate::ui::dialogs::{Notice, NoticeLevel};

/// Failures of the generate, save and read actions
#[derive(Debug, Error)]
pub enum QrError {
    /// Generate was pressed with an empty text field
    #[error("Please enter a valid URL.")]
    EmptyInput,

    /// The encoder rejected the input (usually: too long for any QR version)
    #[error("Failed to generate QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// Download was pressed before anything was generated
    #[error("No QR code to download.")]
    NoImage,

    /// Writing the PNG to the chosen destination failed
    #[error("Failed to save QR code: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The chosen file could not be read or decoded as an image
    #[error("Failed to load the image.")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl QrError {
    /// Build the user-facing notice for this error
    pub fn notice(&self) -> Notice {
        let (level, title) = match self {
            QrError::EmptyInput | QrError::Encode(_) | QrError::Save { .. } => {
                (NoticeLevel::Error, "Error")
            }
            QrError::NoImage => (NoticeLevel::Warning, "Warning"),
            // Warning level, but titled like the other failures
            QrError::ImageLoad { .. } => (NoticeLevel::Warning, "Error"),
        };

        Notice::new(level, title, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_empty_input_is_blocking_error() {
        let notice = QrError::EmptyInput.notice();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.body, "Please enter a valid URL.");
    }

    #[test]
    fn test_no_image_is_warning() {
        let notice = QrError::NoImage.notice();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Warning");
    }

    #[test]
    fn test_save_error_includes_cause() {
        let err = QrError::Save {
            path: PathBuf::from("/nope/qrcode.png"),
            source: image::ImageError::IoError(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            )),
        };

        let notice = err.notice();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.body.starts_with("Failed to save QR code: "));
        assert!(notice.body.contains("permission denied"));
    }
}
