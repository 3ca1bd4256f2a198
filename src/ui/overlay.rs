/// Busy overlay shown while a network call is pending

use iced::widget::{center, column, container, opaque, text};
use iced::{Alignment, Color, Element, Length};

use crate::Message;

/// Full-window overlay with a status message.
///
/// `opaque` swallows pointer input so nothing underneath can be clicked
/// while a request is in flight.
pub fn busy_overlay(status: &str) -> Element<'_, Message> {
    let content = column![text("⏳").size(40), text(status).size(18)]
        .spacing(12)
        .align_x(Alignment::Center);

    opaque(
        center(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
                ..container::Style::default()
            }),
    )
}
