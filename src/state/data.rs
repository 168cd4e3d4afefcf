/// Shared data structures for the application state
/// 
/// These structs represent the data model that flows between
/// the ingestion routine and the UI layer.

/// Represents a single photo in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Identifier derived from the import time (samples use 1..=6)
    pub id: i64,
    /// Remote http(s) url or an embedded `data:` url
    pub url: String,
    /// Display label
    pub title: String,
}

impl Photo {
    pub fn new(id: i64, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            title: title.into(),
        }
    }
}

const SAMPLE_BASE: &str =
    "https://cdn.poehali.dev/projects/0f47e069-ef9e-4d86-be95-8d460956e300/files";

/// The photos a fresh gallery starts with
pub fn sample_photos() -> Vec<Photo> {
    let sunset = format!("{SAMPLE_BASE}/66ec1048-a94a-4cff-b88b-ff4f95832f22.jpg");
    let abstraction = format!("{SAMPLE_BASE}/679bb280-eb77-426b-a905-0de063e0946e.jpg");
    let architecture = format!("{SAMPLE_BASE}/a4447602-3b45-418f-a979-60750f4ffd5c.jpg");

    vec![
        Photo::new(1, sunset.clone(), "Mountain Sunset"),
        Photo::new(2, abstraction.clone(), "Abstraction"),
        Photo::new(3, architecture.clone(), "Architecture"),
        Photo::new(4, sunset, "Nature"),
        Photo::new(5, abstraction, "Geometry"),
        Photo::new(6, architecture, "City"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples() {
        let samples = sample_photos();
        assert_eq!(samples.len(), 6);

        let ids: Vec<i64> = samples.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(samples.iter().all(|p| p.url.starts_with("https://")));
    }
}
