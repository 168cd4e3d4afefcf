/// Reading picked files
///
/// The batch only ever sees the `FileReader` trait, so tests can feed it
/// bytes (and failures) without touching the disk.
use async_trait::async_trait;

use super::file::SelectedFile;

#[async_trait]
pub trait FileReader: Send + Sync {
    /// Read the whole file. A read either completes with all bytes or fails.
    async fn read(&self, file: &SelectedFile) -> std::io::Result<Vec<u8>>;
}

/// Reads from the local filesystem on the tokio runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskReader;

#[async_trait]
impl FileReader for DiskReader {
    async fn read(&self, file: &SelectedFile) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&file.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_disk_reader_reads_whole_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let selected = SelectedFile::from_path(file.path());
        let bytes = DiskReader.read(&selected).await.unwrap();

        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_disk_reader_missing_file() {
        let selected = SelectedFile::from_path("/nonexistent/path.png");
        assert!(DiskReader.read(&selected).await.is_err());
    }
}
