/// `data:` url helpers
///
/// Only the base64 form is produced or understood:
/// `data:<mime>;base64,<payload>`
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{GalleryError, Result};

const PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Embed `bytes` in a self-contained url
pub fn encode(content_type: &str, bytes: &[u8]) -> String {
    format!("{PREFIX}{content_type}{BASE64_MARKER}{}", STANDARD.encode(bytes))
}

pub fn is_data_url(url: &str) -> bool {
    url.starts_with(PREFIX)
}

/// Split a data url back into its MIME type and raw bytes
pub fn decode(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix(PREFIX)
        .ok_or_else(|| GalleryError::DataUrl("missing data: prefix".to_string()))?;

    let (content_type, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or_else(|| GalleryError::DataUrl("not base64 encoded".to_string()))?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| GalleryError::DataUrl(e.to_string()))?;

    Ok((content_type.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format() {
        assert_eq!(encode("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(encode("image/gif", &[]), "data:image/gif;base64,");
    }

    #[test]
    fn test_decode() {
        let (mime, bytes) = decode("data:image/png;base64,YWJj").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, b"abc");
    }

    #[test]
    fn test_decode_rejects_other_urls() {
        assert!(decode("https://example.com/a.png").is_err());
        assert!(decode("data:text/plain,hello").is_err());
        assert!(decode("data:image/png;base64,***").is_err());
    }

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url("data:image/png;base64,"));
        assert!(!is_data_url("https://example.com"));
    }
}
