/// Classification result card

use iced::widget::{column, container, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::api::Classification;
use crate::Message;

/// Render the result card for a classification outcome.
///
/// A tumor gets the warning presentation, everything else (including the
/// "Unknown" fallback) gets the reassuring one.
pub fn result_card(classification: Classification) -> Element<'static, Message> {
    let card = column![
        text(classification.icon()).size(40),
        text(classification.title()).size(24),
        text(classification.description()).size(14),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(card)
        .width(Length::Fixed(520.0))
        .padding(24)
        .style(move |theme: &Theme| card_style(theme, classification.is_tumor()))
        .into()
}

fn card_style(theme: &Theme, is_tumor: bool) -> container::Style {
    let palette = theme.extended_palette();

    let (background, border_color) = if is_tumor {
        (
            Color::from_rgba(0.55, 0.15, 0.15, 0.35),
            palette.danger.strong.color,
        )
    } else {
        (
            Color::from_rgba(0.13, 0.42, 0.22, 0.35),
            palette.success.strong.color,
        )
    };

    container::Style {
        background: Some(background.into()),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}
