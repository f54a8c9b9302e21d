use iced::widget::image::Handle;
use image::{DynamicImage, ImageError, ImageReader};
use std::path::{Path, PathBuf};

use super::dialogs::{Dialogs, Notice, DEFAULT_SAVE_NAME};
use super::preview;
use crate::codec::{Decoder, EncodeOptions, Encoder, QrcodeEncoder, RqrrDecoder};
use crate::error::QrError;
use crate::state::session::Session;

const GENERATED_STATUS: &str = "✅ QR code generated successfully!";
const DETECTED_STATUS: &str = "🔍 QR Code detected:";
const NO_CODE_STATUS: &str = "⚠️ No valid QR code detected.";

/// Result of the download action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user closed the save dialog
    Cancelled,
}

/// Result of the upload-and-read action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Decoded(String),
    /// Image loaded but no payload could be extracted
    NoCode,
    /// The user closed the open dialog
    Cancelled,
}

/// Drives the generate / download / read actions and owns what the window shows
///
/// Every action runs synchronously on the caller's thread. Failures are
/// returned to the caller, which passes them to `report` for display.
pub struct Controller<D: Dialogs> {
    encoder: Box<dyn Encoder>,
    decoder: Box<dyn Decoder>,
    dialogs: D,
    options: EncodeOptions,
    session: Session,

    // View state
    preview: Option<Handle>,
    generate_status: String,
    decode_status: String,
    decoded: Option<String>,
}

impl<D: Dialogs> Controller<D> {
    /// Controller with the default `qrcode` / `rqrr` backends
    pub fn new(dialogs: D) -> Self {
        Self::with_codecs(
            Box::new(QrcodeEncoder::new()),
            Box::new(RqrrDecoder::new()),
            dialogs,
        )
    }

    pub fn with_codecs(encoder: Box<dyn Encoder>, decoder: Box<dyn Decoder>, dialogs: D) -> Self {
        Self {
            encoder,
            decoder,
            dialogs,
            options: EncodeOptions::default(),
            session: Session::new(),
            preview: None,
            generate_status: String::new(),
            decode_status: String::new(),
            decoded: None,
        }
    }

    /// Encode `text`, show it and keep it for a later download.
    ///
    /// Any non-empty text is accepted; it is not checked to be a URL.
    /// On failure the previous code, preview and status stay as they were.
    pub fn generate(&mut self, text: &str) -> Result<(), QrError> {
        if text.is_empty() {
            return Err(QrError::EmptyInput);
        }

        let image = self.encoder.encode(text, &self.options)?;

        self.preview = Some(preview::to_handle(&image));
        log::info!("Generated {}x{} QR code for {:?}", image.width(), image.height(), text);
        self.session.set_generated(image);
        self.generate_status = GENERATED_STATUS.to_string();

        Ok(())
    }

    /// Write the last generated code to a user-chosen path
    ///
    /// Without a generated code no dialog is opened at all.
    pub fn save(&self) -> Result<SaveOutcome, QrError> {
        let image = self.session.generated().ok_or(QrError::NoImage)?;

        let Some(path) = self.dialogs.pick_save_path(DEFAULT_SAVE_NAME) else {
            log::debug!("Save cancelled");
            return Ok(SaveOutcome::Cancelled);
        };

        image.write_png(&path).map_err(|source| QrError::Save {
            path: path.clone(),
            source,
        })?;

        log::info!("💾 Saved QR code to {}", path.display());
        self.dialogs
            .notify(&Notice::info("Saved", "QR code saved successfully."));

        Ok(SaveOutcome::Saved(path))
    }

    /// Ask for an image and try to read a QR code from it
    pub fn read_from_image(&mut self) -> Result<ReadOutcome, QrError> {
        let Some(path) = self.dialogs.pick_source_image() else {
            log::debug!("Read cancelled");
            return Ok(ReadOutcome::Cancelled);
        };

        let image = load_image(&path)?;

        match self.decoder.decode(&image) {
            Some(text) => {
                log::info!("🔍 Decoded QR code from {}", path.display());
                self.decode_status = DETECTED_STATUS.to_string();
                self.decoded = Some(text.clone());
                Ok(ReadOutcome::Decoded(text))
            }
            None => {
                log::info!("No QR code found in {}", path.display());
                self.decode_status = NO_CODE_STATUS.to_string();
                self.decoded = None;
                Ok(ReadOutcome::NoCode)
            }
        }
    }

    /// Show a failed action to the user
    pub fn report(&self, err: &QrError) {
        log::warn!("⚠️  {}", err);
        self.dialogs.notify(&err.notice());
    }

    pub fn preview(&self) -> Option<&Handle> {
        self.preview.as_ref()
    }

    pub fn generate_status(&self) -> &str {
        &self.generate_status
    }

    /// The download button is only offered once something was generated
    pub fn download_visible(&self) -> bool {
        self.session.has_generated()
    }

    pub fn decode_status(&self) -> &str {
        &self.decode_status
    }

    /// Payload from the last successful read, if the last read found one
    pub fn decoded_text(&self) -> Option<&str> {
        self.decoded.as_deref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }
}

/// Open `path` as an image, sniffing the format from its content
fn load_image(path: &Path) -> Result<DynamicImage, QrError> {
    let load = || -> Result<DynamicImage, ImageError> {
        ImageReader::open(path)?.with_guessed_format()?.decode()
    };

    load().map_err(|source| QrError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}
