//! Selection, back navigation, search query, and per-video flags

use crate::types::{Screen, Video, ViewState};
use log::debug;

/// Owns the in-memory catalog and what is currently shown.
///
/// Back navigation remembers exactly one previous selection: going back
/// twice from a restored video always lands on the browsing screen.
#[derive(Debug, Clone, Default)]
pub struct ViewStateMachine {
    catalog: Vec<Video>,
    state: ViewState,
}

impl ViewStateMachine {
    pub fn new(catalog: Vec<Video>) -> Self {
        Self {
            catalog,
            state: ViewState::default(),
        }
    }

    /// Select a video. The current selection becomes the back target.
    pub fn select_video(&mut self, id: &str) {
        self.state.previous_video_id = self.state.selected_video_id.take();
        self.state.selected_video_id = Some(id.to_string());
    }

    /// Return to the remembered video, or to browsing when there is none
    pub fn go_back(&mut self) {
        self.state.selected_video_id = self.state.previous_video_id.take();
    }

    pub fn go_home(&mut self) {
        self.state = ViewState::default();
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.search_query = query.to_string();
    }

    pub fn clear_query(&mut self) {
        self.state.search_query.clear();
    }

    /// Flip the liked flag and move the like counter with it.
    /// Returns false if no catalog video has this id.
    pub fn toggle_like(&mut self, id: &str) -> bool {
        let Some(video) = self.video_mut(id) else {
            return false;
        };

        video.likes = if video.is_liked {
            video.likes.wrapping_sub(1)
        } else {
            video.likes.wrapping_add(1)
        };
        video.is_liked = !video.is_liked;
        debug!("{} liked={} likes={}", video.id, video.is_liked, video.likes);
        true
    }

    /// Flip the watch-later flag. Returns false if no catalog video has this id.
    pub fn toggle_watch_later(&mut self, id: &str) -> bool {
        let Some(video) = self.video_mut(id) else {
            return false;
        };

        video.is_watch_later = !video.is_watch_later;
        true
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn query(&self) -> &str {
        &self.state.search_query
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.state.selected_video_id.as_deref()
    }

    /// The selected video, if it is part of the catalog
    pub fn selected_video(&self) -> Option<&Video> {
        self.selected_id().and_then(|id| self.video(id))
    }

    pub fn catalog(&self) -> &[Video] {
        &self.catalog
    }

    pub fn video(&self, id: &str) -> Option<&Video> {
        self.catalog.iter().find(|v| v.id == id)
    }

    pub fn liked(&self) -> Vec<&Video> {
        self.catalog.iter().filter(|v| v.is_liked).collect()
    }

    pub fn watch_later(&self) -> Vec<&Video> {
        self.catalog.iter().filter(|v| v.is_watch_later).collect()
    }

    fn video_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.catalog.iter_mut().find(|v| v.id == id)
    }
}
