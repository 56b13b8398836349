//! Type definitions for video-gallery
//!
//! Source of truth for all data structures.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Video Types
// ============================================

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub uploader: String,
    /// Display string, e.g. "2024-03-15"
    pub upload_date: String,
    #[serde(default)]
    pub view_count: u64,
    /// Duration formatted as "3:45" or "1:23:45"
    pub duration: String,
    /// URL to thumbnail image
    pub thumbnail: String,
    /// URL handed to the media player
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Signed so that an out-of-sync unlike shows up instead of being hidden
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_watch_later: bool,
}

impl Video {
    /// Minimal video with the given id and title; remaining fields empty
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            uploader: String::new(),
            upload_date: String::new(),
            view_count: 0,
            duration: String::new(),
            thumbnail: String::new(),
            video_url: String::new(),
            description: None,
            tags: Vec::new(),
            likes: 0,
            is_liked: false,
            is_watch_later: false,
        }
    }

    pub fn with_uploader(mut self, uploader: impl Into<String>) -> Self {
        self.uploader = uploader.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_likes(mut self, likes: i64) -> Self {
        self.likes = likes;
        self
    }
}

/// A single watch event. Holds a copy of the video as it was when watched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub video: Video,
    pub watched_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Local calendar date of the watch, e.g. "2024-03-15"
    pub fn watched_on(&self) -> String {
        self.watched_at
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string()
    }
}

// ============================================
// View Types
// ============================================

/// What the gallery is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Home / grid view, nothing selected
    Browsing,
    /// A video is selected and playing
    Watching(String),
}

/// Transient view state, never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_video_id: Option<String>,
    /// Single-slot back memory, not a stack
    pub previous_video_id: Option<String>,
    pub search_query: String,
}

impl ViewState {
    pub fn screen(&self) -> Screen {
        match &self.selected_video_id {
            Some(id) => Screen::Watching(id.clone()),
            None => Screen::Browsing,
        }
    }
}

// ============================================
// Config Types
// ============================================

/// Video player type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    #[default]
    Mpv,
    Vlc,
}

impl PlayerType {
    pub fn command(&self) -> &'static str {
        match self {
            Self::Mpv => "mpv",
            Self::Vlc => "vlc",
        }
    }
}

/// Menu selector type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectorType {
    #[default]
    Fzf,
    Dialoguer,
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Max history entries (default: 15)
    pub max_history_entries: usize,
    /// Storage key the history list is persisted under
    pub history_key: String,
    /// Catalog JSON path (empty = catalog.json in the config dir)
    pub catalog_path: String,
    /// Video player
    pub player: PlayerType,
    /// Menu selector
    pub selector: SelectorType,
    /// Editor command (default: "nvim")
    pub editor: String,
    /// Start playback muted
    pub start_muted: bool,
    /// Start playback fullscreen
    pub fullscreen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_history_entries: crate::storage::history::MAX_HISTORY,
            history_key: crate::storage::history::HISTORY_KEY.into(),
            catalog_path: String::new(),
            player: PlayerType::default(),
            selector: SelectorType::default(),
            editor: "nvim".into(),
            start_muted: false,
            fullscreen: false,
        }
    }
}

// ============================================
// Playback Types
// ============================================

/// Options forwarded to the media player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayOptions {
    pub muted: bool,
    pub fullscreen: bool,
    /// Start position in seconds
    pub start_at: Option<f64>,
}

// ============================================
// Selector Types
// ============================================

/// Item displayed in selector menu
#[derive(Debug, Clone)]
pub struct MenuItem<T> {
    /// Display text
    pub label: String,
    /// Underlying value
    pub value: T,
}
