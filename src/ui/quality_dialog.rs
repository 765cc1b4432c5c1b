use iced::{
    widget::{button, column, container, pick_list, row, text, Space},
    Alignment, Element, Length,
};

use crate::domain::VideoQuality;

/// State of the modal quality picker while it is open
#[derive(Debug, Clone, Default)]
pub struct QualityDialog {
    pub selected: VideoQuality,
}

#[derive(Debug, Clone)]
pub enum DialogMessage {
    QualitySelected(VideoQuality),
    Confirm,
    Cancel,
}

impl QualityDialog {
    pub fn update(&mut self, message: &DialogMessage) {
        if let DialogMessage::QualitySelected(quality) = message {
            self.selected = *quality;
        }
    }

    pub fn view(&self, busy: bool) -> Element<'_, DialogMessage> {
        let cancel = button("Cancel")
            .style(button::secondary)
            .padding([8, 16])
            .on_press_maybe((!busy).then_some(DialogMessage::Cancel));
        let download = button("Download")
            .style(button::primary)
            .padding([8, 16])
            .on_press_maybe((!busy).then_some(DialogMessage::Confirm));

        container(
            column![
                text("Select Video Quality").size(20),
                text("Choose video quality:").size(14),
                pick_list(
                    VideoQuality::ALL,
                    Some(self.selected),
                    DialogMessage::QualitySelected
                )
                .width(Length::Fill),
                Space::new().height(Length::Fixed(5.0)),
                row![cancel, download].spacing(10),
            ]
            .spacing(15)
            .align_x(Alignment::Center),
        )
        .width(Length::Fixed(300.0))
        .padding(20)
        .style(container::rounded_box)
        .into()
    }
}
