use iced::widget::image::Handle;
use iced::widget::{button, column, container, text, text_editor, text_input, Column, Image};
use iced::{Alignment, Element, Length, Task, Theme};

mod codec;
mod error;
mod state;
mod ui;

use ui::{Controller, NativeDialogs, ReadOutcome};

/// Initial window size (width, height)
const WINDOW_SIZE: (f32, f32) = (450.0, 580.0);

/// Main application state
struct QrUtility {
    /// Actions and the state they update
    controller: Controller<NativeDialogs>,
    /// Current contents of the URL field
    input: String,
    /// Read-only, selectable copy of the last decoded payload
    decoded: text_editor::Content,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// URL field edited
    InputChanged(String),
    /// "Generate QR Code" pressed (or Enter in the URL field)
    Generate,
    /// "Download QR Code" pressed
    Download,
    /// "Upload Image and Read QR" pressed
    ReadFromImage,
    /// Selection / cursor movement inside the decoded text region
    DecodedAction(text_editor::Action),
}

impl QrUtility {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        log::info!("🔧 QR Code Utility started");

        (
            QrUtility {
                controller: Controller::new(NativeDialogs),
                input: String::new(),
                decoded: text_editor::Content::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    ///
    /// Every action completes synchronously; no background tasks are spawned.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
            }
            Message::Generate => {
                if let Err(e) = self.controller.generate(&self.input) {
                    self.controller.report(&e);
                }
            }
            Message::Download => {
                if let Err(e) = self.controller.save() {
                    self.controller.report(&e);
                }
            }
            Message::ReadFromImage => match self.controller.read_from_image() {
                Ok(ReadOutcome::Decoded(payload)) => {
                    self.decoded = text_editor::Content::with_text(&payload);
                }
                Ok(ReadOutcome::NoCode) => {
                    self.decoded = text_editor::Content::new();
                }
                Ok(ReadOutcome::Cancelled) => {}
                Err(e) => self.controller.report(&e),
            },
            Message::DecodedAction(action) => {
                // Read-only: allow selecting and copying, drop edits
                if !action.is_edit() {
                    self.decoded.perform(action);
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let reader = column![
            text("Upload a PNG image with a QR code").size(16),
            button("Upload Image and Read QR")
                .on_press(Message::ReadFromImage)
                .style(button::success)
                .padding(6),
            text(self.controller.decode_status()).size(14),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .push_maybe(self.controller.decoded_text().map(|_| {
            text_editor(&self.decoded).on_action(Message::DecodedAction)
        }));

        let generator = column![
            text("Enter a URL to generate a QR code").size(16),
            text_input("https://example.com", &self.input)
                .on_input(Message::InputChanged)
                .on_submit(Message::Generate)
                .size(16)
                .padding(6),
            button("Generate QR Code")
                .on_press(Message::Generate)
                .style(button::primary)
                .padding(6),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .push_maybe(self.controller.preview().map(|handle| Image::<Handle>::new(handle.clone())))
        .push(text(self.controller.generate_status()).size(16))
        .push_maybe(self.controller.download_visible().then(|| {
            button("⬇️ Download QR Code")
                .on_press(Message::Download)
                .style(button::secondary)
                .padding(5)
        }));

        let content: Column<Message> = column![
            text("🔧 QR Code Reader and Generator").size(22),
            reader,
            generator,
        ]
        .spacing(24)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    // Log to stderr; RUST_LOG=qr_utility=debug for codec details
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("qr_utility=info"))
        .init();

    iced::application(
        "QR Code Utility",
        QrUtility::update,
        QrUtility::view,
    )
    .theme(QrUtility::theme)
    .window_size(WINDOW_SIZE)
    .centered()
    .run_with(QrUtility::new)
}
