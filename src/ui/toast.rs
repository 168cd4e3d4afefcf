use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text, Column};
use iced::{Border, Color, Element, Length};

use crate::notify::{Notification, Severity, Toasts};
use crate::Message;

const NORMAL: Color = Color::from_rgb(0.18, 0.55, 0.34);
const DESTRUCTIVE: Color = Color::from_rgb(0.78, 0.2, 0.2);

/// Visible toasts stacked in the bottom-right corner
pub fn view(toasts: &Toasts) -> Element<'_, Message> {
    let cards = toasts
        .visible()
        .fold(Column::new().spacing(10), |col, n| col.push(card(n)));

    container(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}

fn card(notification: &Notification) -> Element<'_, Message> {
    let accent = match notification.severity {
        Severity::Normal => NORMAL,
        Severity::Destructive => DESTRUCTIVE,
    };

    let body = column![
        text(&notification.title).size(16),
        text(&notification.description).size(14),
    ]
    .spacing(4)
    .width(Length::Fixed(300.0));

    let dismiss = button(text("✕").size(12))
        .on_press(Message::DismissToast(notification.id()))
        .style(button::text);

    container(row![body, dismiss].spacing(8))
        .padding(12)
        .style(move |_theme| container::Style {
            background: Some(Color::from_rgb(0.12, 0.12, 0.14).into()),
            text_color: Some(Color::WHITE),
            border: Border {
                color: accent,
                width: 2.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
