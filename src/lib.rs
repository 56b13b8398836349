//! video-gallery library
//!
//! A browsable video catalog with search, a one-step back navigation, like and
//! watch-later flags, and a bounded watch history persisted in a key-value store.

pub mod core;
pub mod error;
pub mod storage;
pub mod types;
pub mod ui;
pub mod utils;

pub use crate::core::controller::{GalleryController, GallerySnapshot};
pub use crate::error::{GalleryError, Result};
pub use crate::storage::history::HistoryStore;
pub use crate::storage::persistence::{FileStore, MemoryStore, PersistenceProvider};
pub use crate::types::{HistoryEntry, Screen, Video, ViewState};
