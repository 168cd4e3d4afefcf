use super::data::{sample_photos, Photo};

/// The gallery owns the ordered photo list and the lightbox selection.
///
/// Photos are only ever added, newest batch first. Nothing checks that
/// `selected` is still in `photos`, since photos are never removed.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    photos: Vec<Photo>,
    selected: Option<Photo>,
}

impl GalleryState {
    /// Create an empty gallery
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gallery seeded with the sample photos
    pub fn with_samples() -> Self {
        Self {
            photos: sample_photos(),
            selected: None,
        }
    }

    /// Open the lightbox on `photo`
    pub fn select_photo(&mut self, photo: Photo) {
        self.selected = Some(photo);
    }

    /// Close the lightbox
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Insert a batch at the head of the list, keeping the batch's own order.
    /// No deduplication by url or title.
    pub fn prepend_photos(&mut self, new_photos: Vec<Photo>) {
        if new_photos.is_empty() {
            return;
        }
        self.photos.splice(0..0, new_photos);
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn selected(&self) -> Option<&Photo> {
        self.selected.as_ref()
    }

    /// Open the lightbox on the photo at `index`. Ids are not guaranteed to
    /// be unique, positions are. Out-of-range indexes are ignored.
    pub fn select_index(&mut self, index: usize) {
        if let Some(photo) = self.photos.get(index).cloned() {
            self.select_photo(photo);
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
