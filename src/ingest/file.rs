use std::path::{Path, PathBuf};

/// Declared type for extensions with no known MIME type
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extensions offered by the picker's "Images" filter
pub const IMAGE_EXTENSIONS: [&str; 10] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff", "ico", "svg",
];

/// A file handed over by the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name only (e.g., "DSC_0001.jpg")
    pub name: String,
    pub path: PathBuf,
    /// MIME type declared for the file, e.g. "image/png"
    pub content_type: String,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content_type: content_type.into(),
        }
    }

    /// Describe a file on disk, declaring its type from the extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content_type = content_type_for(&path);

        Self {
            name,
            path,
            content_type,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Display title: the name without its final extension
    pub fn title(&self) -> String {
        strip_extension(&self.name).to_string()
    }
}

/// MIME type implied by the path's extension, as a browser file input would
/// declare it. Formats that cannot be decoded still declare `image/*`; the
/// grid shows a placeholder for them.
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Strip only the last `.suffix`. A bare trailing dot is not an extension.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_strips_final_extension_only() {
        assert_eq!(strip_extension("sunset.photo.jpg"), "sunset.photo");
        assert_eq!(strip_extension("a.png"), "a");
        assert_eq!(strip_extension("README"), "README");
        assert_eq!(strip_extension("trailing."), "trailing.");
        assert_eq!(strip_extension(".hidden"), "");
    }

    #[test]
    fn test_from_path_declares_content_type() {
        let png = SelectedFile::from_path("/tmp/pictures/a.png");
        assert_eq!(png.name, "a.png");
        assert_eq!(png.content_type, "image/png");
        assert!(png.is_image());
        assert_eq!(png.title(), "a");

        let jpeg = SelectedFile::from_path("holiday.JPG");
        assert_eq!(jpeg.content_type, "image/jpeg");

        let text = SelectedFile::from_path("/tmp/b.txt");
        assert_eq!(text.content_type, "text/plain");
        assert!(!text.is_image());

        let unknown = SelectedFile::from_path("/tmp/data.zzunknown");
        assert_eq!(unknown.content_type, OCTET_STREAM);
        assert!(!unknown.is_image());
    }

    #[test]
    fn test_undecodable_formats_are_still_images() {
        let svg = SelectedFile::from_path("logo.svg");
        assert_eq!(svg.content_type, "image/svg+xml");
        assert!(svg.is_image());

        let upper = SelectedFile::from_path("LOGO.SVG");
        assert!(upper.is_image());
    }

    #[test]
    fn test_picker_extensions_are_images() {
        for ext in IMAGE_EXTENSIONS {
            let file = SelectedFile::from_path(format!("photo.{ext}"));
            assert!(file.is_image(), "{ext} should be an image");
        }
    }

    #[test]
    fn test_declared_type_is_trusted() {
        let file = SelectedFile::new("scan.bin", "/tmp/scan.bin", "image/webp");
        assert!(file.is_image());
    }
}
