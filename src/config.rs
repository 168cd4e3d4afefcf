/// Gallery settings
///
/// Settings are read once at startup from an optional JSON file:
/// - Linux: ~/.config/photo-gallery/config.json
/// - macOS: ~/Library/Application Support/photo-gallery/config.json
/// - Windows: %APPDATA%\photo-gallery\config.json
///
/// The file is never written. Missing keys fall back to their defaults.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{GalleryError, Result};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Edge length of a grid tile in logical pixels
    pub tile_size: f32,
    /// Gap between grid tiles
    pub grid_spacing: f32,
    /// Emit the "N photos added" summary even when a batch added nothing
    pub announce_empty_batches: bool,
    /// Start with the six sample photos
    pub seed_samples: bool,
    /// Lifetime of a normal toast, in seconds
    pub toast_seconds: u64,
    /// Lifetime of a destructive toast, in seconds
    pub destructive_toast_seconds: u64,
    /// Timeout for fetching remote images, in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tile_size: 280.0,
            grid_spacing: 24.0,
            announce_empty_batches: true,
            seed_samples: true,
            toast_seconds: 3,
            destructive_toast_seconds: 6,
            fetch_timeout_secs: 20,
        }
    }
}

impl Config {
    /// Load settings from the user's config directory.
    ///
    /// A missing file yields the defaults silently; a broken one yields the
    /// defaults and a warning in the log.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("⚙️  Loaded settings from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("⚠️  {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Read settings from `path`. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(GalleryError::Config {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                })
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| GalleryError::Config {
                path: path.to_path_buf(),
                source: Box::new(e),
            })
    }

    /// Get the path where the settings file is looked up
    fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("photo-gallery");
        path.push("config.json");
        Some(path)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }

    pub fn destructive_toast_duration(&self) -> Duration {
        Duration::from_secs(self.destructive_toast_seconds)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tile_size": 200.0, "announce_empty_batches": false }}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap().unwrap();

        assert_eq!(config.tile_size, 200.0);
        assert!(!config.announce_empty_batches);
        assert_eq!(config.grid_spacing, Config::default().grid_spacing);
        assert!(config.seed_samples);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        match err {
            GalleryError::Config { path, source } => {
                assert_eq!(path, file.path());
                assert!(source.is::<serde_json::Error>());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.toast_duration(), Duration::from_secs(3));
        assert!(config.destructive_toast_duration() > config.toast_duration());
    }
}
