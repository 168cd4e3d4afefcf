use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Stack};
use iced::{keyboard, time, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use chrono::Utc;
use std::time::Duration;

mod config;
mod error;
mod ingest;
mod notify;
mod state;
mod ui;

use config::Config;
use ingest::{Batch, BatchReport, DiskReader, IdClock, SelectedFile, IMAGE_EXTENSIONS};
use notify::{NotificationId, Toasts};
use state::GalleryState;
use ui::images::{self, ImageCache};

/// Main application state
struct Gallery {
    /// Photos and the lightbox selection
    gallery: GalleryState,
    /// Decoded uploads and downloaded samples
    images: ImageCache,
    /// On-screen notifications
    toasts: Toasts,
    /// Keeps photo ids of overlapping batches apart
    ids: IdClock,
    config: Config,
    http: reqwest::Client,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Upload" button
    Upload,
    /// The picker closed (empty if it was cancelled)
    FilesPicked(Vec<SelectedFile>),
    /// Every file of a batch has been read
    BatchRead(BatchReport),
    /// A remote image finished downloading
    ImageFetched(String, Result<Vec<u8>, String>),
    /// User clicked a tile (position in the grid)
    SelectPhoto(usize),
    /// Backdrop click, close button or Escape
    CloseLightbox,
    DismissToast(NotificationId),
    /// Periodic check for expired toasts
    Tick,
}

impl Gallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();

        let gallery = if config.seed_samples {
            GalleryState::with_samples()
        } else {
            GalleryState::new()
        };

        log::info!("🎨 Photo Gallery initialized with {} photos", gallery.len());

        let mut app = Gallery {
            gallery,
            images: ImageCache::new(),
            toasts: Toasts::new(config.toast_duration(), config.destructive_toast_duration()),
            ids: IdClock::default(),
            config,
            http: reqwest::Client::new(),
        };

        let task = app.load_images();
        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload => Task::perform(pick_files(), Message::FilesPicked),
            Message::FilesPicked(files) => {
                // Cancelled picker or nothing chosen: nothing to do
                if files.is_empty() {
                    return Task::none();
                }

                let started_ms = self
                    .ids
                    .batch_start(Utc::now().timestamp_millis(), files.len());
                let batch = Batch::screen(files, started_ms, &mut self.toasts);

                Task::perform(
                    async move { batch.read_all(&DiskReader).await },
                    Message::BatchRead,
                )
            }
            Message::BatchRead(report) => {
                let gallery = &mut self.gallery;
                report.commit(
                    |photos| gallery.prepend_photos(photos),
                    &mut self.toasts,
                    self.config.announce_empty_batches,
                );

                self.load_images()
            }
            Message::ImageFetched(url, result) => {
                self.images.finish(url, result);
                Task::none()
            }
            Message::SelectPhoto(index) => {
                self.gallery.select_index(index);
                Task::none()
            }
            Message::CloseLightbox => {
                self.gallery.clear_selection();
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::Tick => {
                self.toasts.tick();
                Task::none()
            }
        }
    }

    /// Resolve every photo the cache has not seen yet, fetching remote urls
    fn load_images(&mut self) -> Task<Message> {
        let mut fetches = Vec::new();

        for photo in self.gallery.photos() {
            if self.images.load(photo) {
                let url = photo.url.clone();
                fetches.push(Task::perform(
                    images::fetch(self.http.clone(), url.clone(), self.config.fetch_timeout()),
                    move |result| Message::ImageFetched(url.clone(), result),
                ));
            }
        }

        Task::batch(fetches)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("Photo Gallery").size(40),
            horizontal_space(),
            button(text("Upload").size(16))
                .on_press(Message::Upload)
                .padding([8, 16]),
        ]
        .align_y(Alignment::Center);

        let subtitle = column![
            text("Albums").size(28),
            text(format!(
                "A collection of my best photos • {} photos",
                self.gallery.len()
            ))
            .size(16),
        ]
        .spacing(8);

        let grid: Element<Message> = if self.gallery.is_empty() {
            text("No photos yet. Upload some to get started.").size(18).into()
        } else {
            ui::grid::view(
                self.gallery.photos(),
                &self.images,
                self.config.tile_size,
                self.config.grid_spacing,
            )
        };

        let page = scrollable(
            column![header, subtitle, grid]
                .spacing(32)
                .padding(40)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers: Vec<Element<Message>> = vec![page.into()];

        if let Some(photo) = self.gallery.selected() {
            layers.push(ui::lightbox::view(photo, &self.images));
        }

        if !self.toasts.is_empty() {
            layers.push(ui::toast::view(&self.toasts));
        }

        container(Stack::with_children(layers).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let escape = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseLightbox),
            _ => None,
        });

        if self.toasts.is_empty() {
            escape
        } else {
            Subscription::batch([
                escape,
                time::every(Duration::from_millis(250)).map(|_| Message::Tick),
            ])
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Show the native multi-file picker. The image filter is only a suggestion:
/// "All files" lets anything through, and screening happens afterwards.
async fn pick_files() -> Vec<SelectedFile> {
    let picked = AsyncFileDialog::new()
        .set_title("Select photos to upload")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_files()
        .await;

    picked
        .unwrap_or_default()
        .iter()
        .map(|handle| SelectedFile::from_path(handle.path()))
        .collect()
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application("Photo Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}
