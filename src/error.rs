/// Error types for the gallery
///
/// None of these are fatal: every failure is scoped to a single file,
/// a single image url, or the optional settings file.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// The file's declared content type is not `image/*`
    #[error("File {name} is not an image ({content_type})")]
    NotAnImage { name: String, content_type: String },

    /// The file looked like an image but its bytes could not be read
    #[error("Could not read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but could not be read or parsed
    #[error("Invalid settings file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A `data:` url that does not carry base64 content
    #[error("Malformed data url: {0}")]
    DataUrl(String),

    /// A remote image could not be fetched
    #[error("Could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_file() {
        let err = GalleryError::NotAnImage {
            name: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
        };
        assert!(err.to_string().contains("notes.txt"));

        let err = GalleryError::Read {
            name: "a.png".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Could not read a.png: gone");
    }

    #[test]
    fn test_config_error_keeps_its_cause() {
        let cause = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = GalleryError::Config {
            path: PathBuf::from("/etc/gallery.json"),
            source: Box::new(cause),
        };

        let source = std::error::Error::source(&err).expect("config errors carry a source");
        assert!(source.is::<serde_json::Error>());
        assert!(err.to_string().starts_with("Invalid settings file /etc/gallery.json: "));
    }
}
