/// Turns photos into something iced can draw.
///
/// Uploaded photos carry their bytes in a data url. Those are decoded once,
/// when the photo first shows up, and stored under the photo's id so redraws
/// never touch the url again. Remote urls are fetched once in the background
/// and stored under the url, so the six samples (which share three urls)
/// cost three requests.
use iced::widget::image::Handle;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::GalleryError;
use crate::ingest::data_url;
use crate::state::Photo;

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Data,
    Remote,
    Unsupported,
}

pub fn classify(url: &str) -> UrlKind {
    if data_url::is_data_url(url) {
        UrlKind::Data
    } else if url.starts_with("https://") || url.starts_with("http://") {
        UrlKind::Remote
    } else {
        UrlKind::Unsupported
    }
}

#[derive(Debug, Default)]
pub struct ImageCache {
    /// Decoded uploads, by photo id
    embedded: HashMap<i64, ImageState>,
    /// Remote and unsupported urls
    by_url: HashMap<String, ImageState>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `photo` is known to the cache.
    ///
    /// Returns `true` when the caller has to fetch its url and report back
    /// through [`ImageCache::finish`].
    pub fn load(&mut self, photo: &Photo) -> bool {
        match classify(&photo.url) {
            UrlKind::Data => {
                self.embedded
                    .entry(photo.id)
                    .or_insert_with(|| decode(&photo.url));
                false
            }
            UrlKind::Remote => {
                if self.by_url.contains_key(&photo.url) {
                    return false;
                }
                self.by_url.insert(photo.url.clone(), ImageState::Loading);
                true
            }
            UrlKind::Unsupported => {
                self.by_url
                    .entry(photo.url.clone())
                    .or_insert_with(|| ImageState::Failed("unsupported url".to_string()));
                false
            }
        }
    }

    /// Store the outcome of a fetch started by [`ImageCache::load`]
    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let state = match result {
            Ok(bytes) => ImageState::Ready(Handle::from_bytes(bytes)),
            Err(reason) => {
                log::warn!("⚠️  {reason}");
                ImageState::Failed(reason)
            }
        };
        self.by_url.insert(url, state);
    }

    pub fn get(&self, photo: &Photo) -> Option<&ImageState> {
        if data_url::is_data_url(&photo.url) {
            self.embedded.get(&photo.id)
        } else {
            self.by_url.get(&photo.url)
        }
    }
}

fn decode(url: &str) -> ImageState {
    match data_url::decode(url) {
        Ok((_, bytes)) => ImageState::Ready(Handle::from_bytes(bytes)),
        Err(e) => {
            log::warn!("⚠️  {e}");
            ImageState::Failed(e.to_string())
        }
    }
}

/// Download a remote image. Errors are flattened to a message since the
/// result travels through the UI's message queue.
pub async fn fetch(
    client: reqwest::Client,
    url: String,
    timeout: Duration,
) -> Result<Vec<u8>, String> {
    log::debug!("🌐 Fetching {url}");

    let fail = |reason: String| {
        GalleryError::Fetch {
            url: url.clone(),
            reason,
        }
        .to_string()
    };

    let response = client
        .get(&url)
        .timeout(timeout)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| fail(e.to_string()))?;

    let bytes = response.bytes().await.map_err(|e| fail(e.to_string()))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: i64, url: &str) -> Photo {
        Photo::new(id, url, format!("photo {id}"))
    }

    fn is_ready(cache: &ImageCache, photo: &Photo) -> bool {
        matches!(cache.get(photo), Some(ImageState::Ready(_)))
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("data:image/png;base64,AA=="), UrlKind::Data);
        assert_eq!(classify("https://example.com/a.jpg"), UrlKind::Remote);
        assert_eq!(classify("http://example.com/a.jpg"), UrlKind::Remote);
        assert_eq!(classify("/home/me/a.jpg"), UrlKind::Unsupported);
    }

    #[test]
    fn test_data_urls_are_ready_immediately() {
        let mut cache = ImageCache::new();
        let upload = photo(1_700_000_000_000, "data:image/png;base64,YWJj");

        assert!(!cache.load(&upload));
        assert!(is_ready(&cache, &upload));
    }

    #[test]
    fn test_uploads_are_stored_by_id_not_by_url() {
        let mut cache = ImageCache::new();
        let upload = photo(10, "data:image/png;base64,YWJj");
        cache.load(&upload);

        assert!(cache.by_url.is_empty());
        assert_eq!(cache.embedded.len(), 1);

        // Decoded once: loading again keeps the existing entry
        cache.load(&upload);
        assert_eq!(cache.embedded.len(), 1);

        // Same bytes under another id is another photo
        let twin = photo(11, "data:image/png;base64,YWJj");
        assert!(cache.get(&twin).is_none());
        cache.load(&twin);
        assert_eq!(cache.embedded.len(), 2);
    }

    #[test]
    fn test_broken_data_url_fails() {
        let mut cache = ImageCache::new();
        let broken = photo(3, "data:image/png,plain");
        cache.load(&broken);
        assert!(matches!(cache.get(&broken), Some(ImageState::Failed(_))));
    }

    #[test]
    fn test_remote_urls_are_fetched_once() {
        let mut cache = ImageCache::new();
        let url = "https://example.com/a.jpg";
        let first = photo(1, url);
        let second = photo(4, url);

        assert!(cache.load(&first));
        assert!(matches!(cache.get(&first), Some(ImageState::Loading)));
        assert!(!cache.load(&second));

        cache.finish(url.to_string(), Ok(vec![1, 2, 3]));
        assert!(is_ready(&cache, &first));
        assert!(is_ready(&cache, &second));
    }

    #[test]
    fn test_failed_fetch_is_remembered() {
        let mut cache = ImageCache::new();
        let missing = photo(2, "https://example.com/missing.jpg");
        cache.load(&missing);
        cache.finish(missing.url.clone(), Err("404".to_string()));

        assert!(matches!(cache.get(&missing), Some(ImageState::Failed(reason)) if reason == "404"));
        assert!(!cache.load(&missing));
    }

    #[test]
    fn test_unsupported_url() {
        let mut cache = ImageCache::new();
        let ftp = photo(5, "ftp://example.com/a.jpg");
        assert!(!cache.load(&ftp));
        assert!(matches!(cache.get(&ftp), Some(ImageState::Failed(_))));
    }
}
