/// One upload interaction, from picked files to a single gallery commit.
///
/// A batch moves through three steps:
/// 1. `Batch::screen` - files whose declared type is not `image/*` are dropped
///    and reported right away, one warning each
/// 2. `Batch::read_all` - the remaining files are read concurrently and the
///    future resolves once every read has finished, successfully or not
/// 3. `BatchReport::commit` - the photos are handed to the commit callback in
///    the order their reads completed, read failures are reported, and one
///    summary is emitted
use futures_util::stream::{FuturesUnordered, StreamExt};

use super::data_url;
use super::file::SelectedFile;
use super::reader::FileReader;
use crate::error::GalleryError;
use crate::notify::{Notification, Notifier};
use crate::state::Photo;

/// A file that did not become a photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NotAnImage { name: String },
    Unreadable { name: String, reason: String },
}

impl Rejection {
    fn notification(&self) -> Notification {
        match self {
            Rejection::NotAnImage { name } => {
                Notification::destructive("Error", format!("File {name} is not an image"))
            }
            Rejection::Unreadable { reason, .. } => {
                Notification::destructive("Upload failed", reason.clone())
            }
        }
    }
}

/// Hands out batch start times so that ids of overlapping batches never
/// meet: a batch starts no earlier than the end of the previous one.
#[derive(Debug, Clone, Default)]
pub struct IdClock {
    next: i64,
}

impl IdClock {
    /// Start value for a batch of `files` files picked at `now_ms`
    pub fn batch_start(&mut self, now_ms: i64, files: usize) -> i64 {
        let start = now_ms.max(self.next);
        self.next = start + files as i64;
        start
    }
}

/// Files that passed screening and are waiting to be read
#[derive(Debug, Clone)]
pub struct Batch {
    pending: Vec<SelectedFile>,
    submitted: usize,
    skipped: Vec<Rejection>,
    started_ms: i64,
}

impl Batch {
    /// Screen the picked files and report each non-image to `notifier`.
    ///
    /// `started_ms` is the batch's wall-clock start in milliseconds; photo ids
    /// are derived from it.
    pub fn screen(
        files: Vec<SelectedFile>,
        started_ms: i64,
        notifier: &mut impl Notifier,
    ) -> Self {
        let submitted = files.len();
        let mut pending = Vec::with_capacity(submitted);
        let mut skipped = Vec::new();

        for file in files {
            if file.is_image() {
                pending.push(file);
                continue;
            }

            let rejection = Rejection::NotAnImage {
                name: file.name.clone(),
            };
            let err = GalleryError::NotAnImage {
                name: file.name,
                content_type: file.content_type,
            };
            log::debug!("🚫 {err}");
            notifier.notify(rejection.notification());
            skipped.push(rejection);
        }

        log::debug!(
            "📥 Batch of {} file(s): {} to read, {} skipped",
            submitted,
            pending.len(),
            skipped.len()
        );

        Self {
            pending,
            submitted,
            skipped,
            started_ms,
        }
    }

    /// Read every pending file concurrently and wait for all of them.
    ///
    /// Photos come back in completion order. A photo's id is the batch start
    /// plus the number of files of this batch that finished before it, which
    /// keeps ids distinct within the batch.
    pub async fn read_all<R>(self, reader: &R) -> BatchReport
    where
        R: FileReader + ?Sized,
    {
        let Batch {
            pending,
            submitted,
            skipped,
            started_ms,
        } = self;

        let mut reads: FuturesUnordered<_> = pending
            .into_iter()
            .map(|file| async move {
                let result = reader.read(&file).await;
                (file, result)
            })
            .collect();

        // Screened-out files have already finished
        let mut finished = skipped.len();
        let mut photos = Vec::new();
        let mut rejections = skipped;

        while let Some((file, result)) = reads.next().await {
            match result {
                Ok(bytes) => {
                    let id = started_ms + finished as i64;
                    let url = data_url::encode(&file.content_type, &bytes);
                    log::debug!("📸 Read {} ({} bytes) as photo #{}", file.name, bytes.len(), id);
                    photos.push(Photo::new(id, url, file.title()));
                }
                Err(source) => {
                    let name = file.name.clone();
                    let err = GalleryError::Read {
                        name: file.name,
                        source,
                    };
                    log::warn!("⚠️  {err}");
                    rejections.push(Rejection::Unreadable {
                        name,
                        reason: err.to_string(),
                    });
                }
            }
            finished += 1;
        }

        BatchReport {
            submitted,
            photos,
            rejections,
        }
    }
}

/// Outcome of a fully read batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// How many files were picked
    pub submitted: usize,
    /// Converted photos, in read-completion order
    pub photos: Vec<Photo>,
    /// Screened-out files first, then failed reads in completion order
    pub rejections: Vec<Rejection>,
}

impl BatchReport {
    /// Apply the batch: report read failures, hand the photos to `commit` and
    /// emit one summary.
    ///
    /// An empty selection does nothing. When no file made it through,
    /// `announce_empty` decides whether `commit` and the summary still run.
    /// Returns the number of photos added.
    pub fn commit(
        self,
        commit: impl FnOnce(Vec<Photo>),
        notifier: &mut impl Notifier,
        announce_empty: bool,
    ) -> usize {
        if self.submitted == 0 {
            return 0;
        }

        // Screened-out files were reported when the batch was screened
        for rejection in &self.rejections {
            if matches!(rejection, Rejection::Unreadable { .. }) {
                notifier.notify(rejection.notification());
            }
        }

        let added = self.photos.len();
        if added == 0 && !announce_empty {
            return 0;
        }

        commit(self.photos);
        notifier.notify(Notification::normal(
            "Success!",
            format!("Photos uploaded: {added}"),
        ));

        log::info!(
            "✅ Batch complete: {} added, {} rejected",
            added,
            self.rejections.len()
        );

        added
    }
}
