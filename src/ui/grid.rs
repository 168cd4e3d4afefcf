use iced::widget::{column, container, mouse_area, text};
use iced::{Color, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::images::ImageCache;
use super::photo_image;
use crate::state::Photo;
use crate::Message;

/// Wrapped grid of square tiles. Clicking a tile opens it in the lightbox;
/// tiles report their position in `photos`.
pub fn view<'a>(
    photos: &'a [Photo],
    cache: &'a ImageCache,
    tile_size: f32,
    spacing: f32,
) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = photos
        .iter()
        .enumerate()
        .map(|(index, photo)| tile(index, photo, cache, tile_size))
        .collect();

    Wrap::with_elements(tiles)
        .spacing(spacing)
        .line_spacing(spacing)
        .into()
}

fn tile<'a>(
    index: usize,
    photo: &'a Photo,
    cache: &'a ImageCache,
    size: f32,
) -> Element<'a, Message> {
    let image = photo_image(
        cache,
        photo,
        Length::Fixed(size),
        Length::Fixed(size),
        ContentFit::Cover,
    );

    let card = column![
        image,
        text(&photo.title).size(18),
        text("Open").size(13).color(Color::from_rgb(0.7, 0.7, 0.75)),
    ]
    .spacing(6)
    .width(Length::Fixed(size));

    mouse_area(container(card).padding(8).style(container::rounded_box))
        .on_press(Message::SelectPhoto(index))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}
