use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

/// Default file name offered by the save dialog
pub const DEFAULT_SAVE_NAME: &str = "qrcode.png";

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A blocking message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, body)
    }
}

/// Modal interactions the controller needs from the desktop
///
/// `None` from a picker means the user cancelled.
pub trait Dialogs {
    /// Ask where to save a PNG, suggesting `default_name`
    fn pick_save_path(&self, default_name: &str) -> Option<PathBuf>;

    /// Ask for a PNG to read a QR code from
    fn pick_source_image(&self) -> Option<PathBuf>;

    /// Show a message box and wait for it to be dismissed
    fn notify(&self, notice: &Notice);
}

/// Native dialogs via `rfd`
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl NativeDialogs {
    /// Directory the pickers open in: ~/Pictures when it exists, else home
    fn start_dir() -> Option<PathBuf> {
        dirs::picture_dir()
            .filter(|dir| dir.is_dir())
            .or_else(dirs::home_dir)
    }

    fn png_dialog(title: &str) -> FileDialog {
        let dialog = FileDialog::new()
            .set_title(title)
            .add_filter("PNG Files", &["png"]);

        match Self::start_dir() {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }
}

impl Dialogs for NativeDialogs {
    fn pick_save_path(&self, default_name: &str) -> Option<PathBuf> {
        Self::png_dialog("Save QR Code")
            .set_file_name(default_name)
            .save_file()
    }

    fn pick_source_image(&self) -> Option<PathBuf> {
        Self::png_dialog("Select a PNG image").pick_file()
    }

    fn notify(&self, notice: &Notice) {
        let level = match notice.level {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Warning => MessageLevel::Warning,
            NoticeLevel::Error => MessageLevel::Error,
        };

        MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.body.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
