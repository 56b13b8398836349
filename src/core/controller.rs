//! The gallery's single source of truth

use crate::core::filter;
use crate::core::view_state::ViewStateMachine;
use crate::storage::history::HistoryStore;
use crate::storage::persistence::PersistenceProvider;
use crate::types::{HistoryEntry, Screen, Video};
use log::info;

/// Read model handed to the presentation layer after each event
#[derive(Debug, Clone)]
pub struct GallerySnapshot<'a> {
    /// Bumped by every state-changing call
    pub version: u64,
    pub screen: Screen,
    /// Selected video: the catalog copy, or the copy taken when it was selected
    pub selected: Option<&'a Video>,
    /// Catalog filtered by the current query
    pub filtered: Vec<&'a Video>,
    /// `filtered` without the selected video
    pub grid: Vec<&'a Video>,
    pub history: &'a [HistoryEntry],
    pub query: &'a str,
    /// History could not be written and lives only in memory
    pub history_degraded: bool,
}

/// Routes UI events to the view state and the watch history
pub struct GalleryController<P: PersistenceProvider> {
    view: ViewStateMachine,
    history: HistoryStore<P>,
    /// Copies of the selected and back-target videos, so a selection stays
    /// resolvable after it leaves the history
    selected_copy: Option<Video>,
    previous_copy: Option<Video>,
    version: u64,
}

impl<P: PersistenceProvider> GalleryController<P> {
    /// Build a controller over `catalog`, loading persisted history from `history`
    pub fn new(catalog: Vec<Video>, mut history: HistoryStore<P>) -> Self {
        history.load();
        info!(
            "Gallery ready: {} videos, {} in history",
            catalog.len(),
            history.len()
        );

        Self {
            view: ViewStateMachine::new(catalog),
            history,
            selected_copy: None,
            previous_copy: None,
            version: 0,
        }
    }

    /// Select a video and record it in history, even if it was already selected
    pub fn select_video(&mut self, video: &Video) {
        self.view.select_video(&video.id);
        self.previous_copy = self.selected_copy.replace(video.clone());
        self.history.record(video);
        self.bump();
    }

    /// Select by id, looking in the catalog first and then in history.
    /// Returns false if the id is unknown to both.
    pub fn select_video_by_id(&mut self, id: &str) -> bool {
        let video = self
            .view
            .video(id)
            .or_else(|| self.history.get(id).map(|e| &e.video))
            .cloned();

        match video {
            Some(video) => {
                self.select_video(&video);
                true
            }
            None => false,
        }
    }

    pub fn go_back(&mut self) {
        self.view.go_back();
        self.selected_copy = self.previous_copy.take();
        self.bump();
    }

    pub fn go_home(&mut self) {
        self.view.go_home();
        self.selected_copy = None;
        self.previous_copy = None;
        self.bump();
    }

    pub fn set_query(&mut self, query: &str) {
        if self.view.query() != query {
            self.view.set_query(query);
            self.bump();
        }
    }

    pub fn toggle_like(&mut self, id: &str) -> bool {
        let found = self.view.toggle_like(id);
        if found {
            self.bump();
        }
        found
    }

    pub fn toggle_watch_later(&mut self, id: &str) -> bool {
        let found = self.view.toggle_watch_later(id);
        if found {
            self.bump();
        }
        found
    }

    /// Drop one entry from history. Returns false if it was not there.
    pub fn remove_from_history(&mut self, id: &str) -> bool {
        let before = self.history.len();
        let removed = self.history.remove(id).len() != before;
        if removed {
            self.bump();
        }
        removed
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.bump();
    }

    pub fn snapshot(&self) -> GallerySnapshot<'_> {
        let filtered = filter::filter(self.view.catalog(), self.view.query());
        let selected_id = self.view.selected_id();
        let grid = filtered
            .iter()
            .copied()
            .filter(|v| Some(v.id.as_str()) != selected_id)
            .collect();

        GallerySnapshot {
            version: self.version,
            screen: self.view.screen(),
            selected: self.selected_video(),
            filtered,
            grid,
            history: self.history.entries(),
            query: self.view.query(),
            history_degraded: self.history.is_degraded(),
        }
    }

    pub fn selected_video(&self) -> Option<&Video> {
        let id = self.view.selected_id()?;
        self.view
            .video(id)
            .or_else(|| self.selected_copy.as_ref().filter(|v| v.id == id))
    }

    pub fn view(&self) -> &ViewStateMachine {
        &self.view
    }

    pub fn history(&self) -> &HistoryStore<P> {
        &self.history
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn into_history(self) -> HistoryStore<P> {
        self.history
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}
