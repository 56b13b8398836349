//! Watch history management

use crate::error::GalleryError;
use crate::storage::persistence::PersistenceProvider;
use crate::types::{HistoryEntry, Video};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::collections::HashSet;

/// Storage key the history list lives under
pub const HISTORY_KEY: &str = "video-gallery-history";

/// Default cap on the number of remembered videos
pub const MAX_HISTORY: usize = 15;

/// Bounded, most-recent-first list of watched videos, one entry per video id.
///
/// The in-memory list is authoritative. Every mutation is written through to
/// the provider as a single serialized value; if that write fails the store
/// keeps working in memory and reports itself as degraded.
pub struct HistoryStore<P: PersistenceProvider> {
    provider: P,
    key: String,
    max_entries: usize,
    entries: Vec<HistoryEntry>,
    degraded: bool,
}

impl<P: PersistenceProvider> HistoryStore<P> {
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, HISTORY_KEY, MAX_HISTORY)
    }

    pub fn with_options(provider: P, key: impl Into<String>, max_entries: usize) -> Self {
        Self {
            provider,
            key: key.into(),
            max_entries,
            entries: Vec::new(),
            degraded: false,
        }
    }

    /// Load history from the provider. Absent or unreadable data is an empty history.
    pub fn load(&mut self) -> &[HistoryEntry] {
        self.entries = match self.provider.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => normalize(entries, self.max_entries),
                Err(e) => {
                    warn!("Ignoring malformed history under {:?}: {}", self.key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read history: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} history entries", self.entries.len());
        &self.entries
    }

    /// Record a watch of `video` now
    pub fn record(&mut self, video: &Video) -> &[HistoryEntry] {
        self.record_at(video, Utc::now())
    }

    /// Record a watch of `video` at `watched_at`.
    ///
    /// A timestamp older than the current most recent entry is moved up to
    /// it, so the list stays ordered newest first.
    pub fn record_at(&mut self, video: &Video, watched_at: DateTime<Utc>) -> &[HistoryEntry] {
        self.entries.retain(|e| e.video.id != video.id);

        let watched_at = match self.entries.first() {
            Some(front) if front.watched_at > watched_at => front.watched_at,
            _ => watched_at,
        };
        self.entries.insert(
            0,
            HistoryEntry {
                video: video.clone(),
                watched_at,
            },
        );
        self.entries.truncate(self.max_entries);

        self.persist();
        &self.entries
    }

    /// Remove a video from history. Unknown ids are ignored.
    pub fn remove(&mut self, video_id: &str) -> &[HistoryEntry] {
        let before = self.entries.len();
        self.entries.retain(|e| e.video.id != video_id);

        if self.entries.len() != before {
            self.persist();
        }
        &self.entries
    }

    /// Clear all history, erasing the persisted value
    pub fn clear(&mut self) -> &[HistoryEntry] {
        self.entries.clear();
        match self.provider.remove(&self.key) {
            Ok(()) => self.degraded = false,
            Err(e) => {
                warn!("Failed to erase persisted history, clearing in memory only: {}", e);
                self.degraded = true;
            }
        }
        &self.entries
    }

    /// Get all history entries, most recent first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, video_id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.video.id == video_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when the last write to the provider failed
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(GalleryError::from)
            .and_then(|content| self.provider.set(&self.key, &content));

        match result {
            Ok(()) => self.degraded = false,
            Err(e) => {
                warn!("Failed to persist history, keeping it in memory: {}", e);
                self.degraded = true;
            }
        }
    }
}

/// Newest first, one entry per video id, at most `max_entries` long
fn normalize(mut entries: Vec<HistoryEntry>, max_entries: usize) -> Vec<HistoryEntry> {
    entries.sort_by(|a, b| b.watched_at.cmp(&a.watched_at));

    let mut seen = HashSet::new();
    entries.retain(|e| seen.insert(e.video.id.clone()));
    entries.truncate(max_entries);
    entries
}
