/// User interface layer
///
/// - `controller.rs` - the three user actions and the view state they update
/// - `dialogs.rs` - file pickers and message boxes (rfd)
/// - `preview.rs` - generated image to iced image handle

pub mod controller;
pub mod dialogs;
pub mod preview;

pub use controller::{Controller, ReadOutcome};
pub use dialogs::NativeDialogs;
