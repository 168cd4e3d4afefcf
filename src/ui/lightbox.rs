use iced::widget::{button, column, container, horizontal_space, mouse_area, opaque, row, text};
use iced::{Color, ContentFit, Element, Length};

use super::images::ImageCache;
use super::photo_image;
use crate::state::Photo;
use crate::Message;

/// Full-window viewer for the selected photo.
///
/// Clicking the dimmed backdrop or the close button clears the selection;
/// clicks on the photo itself are swallowed.
pub fn view<'a>(photo: &'a Photo, cache: &'a ImageCache) -> Element<'a, Message> {
    let close = button(text("✕").size(20))
        .on_press(Message::CloseLightbox)
        .style(button::secondary)
        .padding(8);

    let caption = column![
        text(&photo.title).size(30).color(Color::WHITE),
        row![
            text("Today").size(14),
            text(format!("Photo #{}", photo.id)).size(14),
        ]
        .spacing(16),
    ]
    .spacing(6);

    let content = column![
        row![horizontal_space(), close],
        photo_image(cache, photo, Length::Fill, Length::FillPortion(6), ContentFit::Contain),
        caption,
    ]
    .spacing(12)
    .padding(24)
    .max_width(1100.0);

    let backdrop = container(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.95).into()),
            text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.6)),
            ..Default::default()
        });

    opaque(mouse_area(backdrop).on_press(Message::CloseLightbox))
}
