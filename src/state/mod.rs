/// State management module
/// 
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The photo list and lightbox selection (gallery.rs)

pub mod data;
pub mod gallery;

pub use data::Photo;
pub use gallery::GalleryState;
