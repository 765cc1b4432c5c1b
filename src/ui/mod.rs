mod quality_dialog;

pub use quality_dialog::{DialogMessage, QualityDialog};

use iced::{
    mouse,
    widget::{button, center, column, container, mouse_area, opaque, row, stack, text, text_input, Space},
    Alignment, Color, Element, Length,
};

use crate::domain::DownloadPhase;

/// Main view state
pub struct DownloadView {
    pub youtube_url: String,
    pub phase: DownloadPhase,
    pub quality_dialog: Option<QualityDialog>,
    /// A message box is showing and the window waits for it to be dismissed
    pub message_open: bool,
}

impl Default for DownloadView {
    fn default() -> Self {
        Self {
            youtube_url: String::new(),
            phase: DownloadPhase::Idle,
            quality_dialog: None,
            message_open: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    UrlChanged(String),
    VideoPressed,
    AudioPressed,
    Dialog(DialogMessage),
}

impl DownloadView {
    pub fn is_busy(&self) -> bool {
        self.phase == DownloadPhase::Busy
    }

    /// Cursor forced over the whole window, if any.
    pub fn cursor(&self) -> Option<mouse::Interaction> {
        self.is_busy().then_some(mouse::Interaction::Wait)
    }

    pub fn update(&mut self, message: &DownloadMessage) {
        match message {
            DownloadMessage::UrlChanged(url) => {
                self.youtube_url = url.clone();
            }
            DownloadMessage::Dialog(dialog_msg) => {
                if let Some(dialog) = self.quality_dialog.as_mut() {
                    dialog.update(dialog_msg);
                }
            }
            DownloadMessage::VideoPressed | DownloadMessage::AudioPressed => {
                // Will be handled by the app
            }
        }
    }

    pub fn view(&self) -> Element<'_, DownloadMessage> {
        let busy = self.is_busy();
        let idle = !busy && !self.message_open && self.quality_dialog.is_none();

        let url_input = text_input("Enter YouTube Link", &self.youtube_url)
            .on_input_maybe(idle.then_some(DownloadMessage::UrlChanged))
            .padding(12)
            .size(14);

        let video_button = button(text("Download as Video").size(16))
            .style(button::primary)
            .padding([15, 30])
            .width(Length::Fixed(220.0))
            .on_press_maybe(idle.then_some(DownloadMessage::VideoPressed));

        let audio_button = button(text("Download as Audio").size(16))
            .style(button::success)
            .padding([15, 30])
            .width(Length::Fixed(220.0))
            .on_press_maybe(idle.then_some(DownloadMessage::AudioPressed));

        let main = column![
            Space::new().height(Length::Fill),
            url_input,
            row![video_button, audio_button].spacing(20),
            Space::new().height(Length::Fill),
        ]
        .padding(50)
        .spacing(30)
        .align_x(Alignment::Center);

        let content: Element<'_, DownloadMessage> = match &self.quality_dialog {
            Some(dialog) => modal(
                main,
                dialog
                    .view(busy || self.message_open)
                    .map(DownloadMessage::Dialog),
            ),
            None => main.into(),
        };

        match self.cursor() {
            Some(cursor) => stack![content, blocker(cursor)].into(),
            None => content,
        }
    }
}

/// Topmost layer that swallows input and shows `cursor` everywhere, the
/// quality picker included.
fn blocker<'a, Message: 'a + Clone>(cursor: mouse::Interaction) -> Element<'a, Message> {
    opaque(
        mouse_area(Space::new().width(Length::Fill).height(Length::Fill)).interaction(cursor),
    )
}

/// Lays `content` over a dimmed `base` and swallows input aimed at the base.
fn modal<'a, Message: 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(center(opaque(content)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.6,
                    ..Color::BLACK
                }
                .into()
            ),
            ..container::Style::default()
        }))
    ]
    .into()
}
