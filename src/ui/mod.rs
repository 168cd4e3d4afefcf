/// UI module
///
/// Views are plain functions over application state:
/// - `grid.rs` - the photo tiles
/// - `lightbox.rs` - the full-window viewer for the selected photo
/// - `toast.rs` - notification cards
/// - `images.rs` - url to image handle resolution and caching

pub mod grid;
pub mod images;
pub mod lightbox;
pub mod toast;

use iced::widget::{container, text, Container};
use iced::{Color, Element, Length};

use crate::state::Photo;

/// Shown while an image is loading or when it could not be loaded
pub fn placeholder<'a, Message: 'a>(
    label: &'a str,
    width: Length,
    height: Length,
) -> Container<'a, Message> {
    container(text(label).size(14).color(Color::from_rgb(0.6, 0.6, 0.65)))
        .width(width)
        .height(height)
        .center_x(width)
        .center_y(height)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb(0.15, 0.15, 0.18).into()),
            ..Default::default()
        })
}

/// Image for `photo`, or a placeholder describing its state
pub fn photo_image<'a, Message: 'a>(
    cache: &'a images::ImageCache,
    photo: &Photo,
    width: Length,
    height: Length,
    fit: iced::ContentFit,
) -> Element<'a, Message> {
    match cache.get(photo) {
        Some(images::ImageState::Ready(handle)) => iced::widget::image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
        Some(images::ImageState::Failed(_)) => {
            placeholder("Image unavailable", width, height).into()
        }
        _ => placeholder("Loading…", width, height).into(),
    }
}
