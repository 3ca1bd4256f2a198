/// Upload area and preview panel widgets

use iced::widget::{button, column, container, image, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::state::session::SelectedScan;
use crate::Message;

/// The drop zone shown while no scan is selected.
///
/// `drop_active` drives the purely visual highlight while a file is hovered
/// over the window; it has no other effect.
pub fn upload_area(drop_active: bool) -> Element<'static, Message> {
    let prompt = column![
        text("🩻").size(48),
        text("Drag & drop a CT scan here").size(18),
        text("JPG, JPEG or PNG").size(14),
        button("Browse Files")
            .on_press(Message::BrowseScan)
            .padding([10.0, 20.0]),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(prompt)
        .width(Length::Fixed(420.0))
        .padding(40)
        .style(move |theme: &Theme| drop_zone_style(theme, drop_active))
        .into()
}

/// The preview panel shown once a scan has been loaded.
pub fn preview_panel(scan: &SelectedScan, handle: image::Handle) -> Element<'static, Message> {
    let caption = format!("{} · {}×{}", scan.filename, scan.width, scan.height);

    let panel = column![
        image(handle).height(Length::Fixed(320.0)),
        text(caption).size(14),
        button("Remove")
            .on_press(Message::RemoveScan)
            .style(button::danger)
            .padding([8.0, 18.0]),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(panel)
        .width(Length::Fixed(420.0))
        .padding(20)
        .style(panel_style)
        .into()
}

fn drop_zone_style(theme: &Theme, active: bool) -> container::Style {
    let palette = theme.extended_palette();

    let border_color = if active {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: border_color,
            width: if active { 3.0 } else { 1.0 },
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}
