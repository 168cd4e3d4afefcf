/// Photo ingestion module
///
/// This module turns files picked by the user into gallery photos:
/// - Declared content types and display titles (file.rs)
/// - Data url encoding and decoding (data_url.rs)
/// - Reading file contents (reader.rs)
/// - Screening, concurrent reads and the single commit per batch (batch.rs)

pub mod batch;
pub mod data_url;
pub mod file;
pub mod reader;

pub use batch::{Batch, BatchReport, IdClock, Rejection};
pub use file::{SelectedFile, IMAGE_EXTENSIONS};
pub use reader::{DiskReader, FileReader};
