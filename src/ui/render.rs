//! Text rendering of gallery snapshots

use crate::core::controller::GallerySnapshot;
use crate::types::{HistoryEntry, Screen, Video};
use colored::Colorize;

/// One-line label for a video in a menu
pub fn video_label(video: &Video) -> String {
    let mut marks = String::new();
    if video.is_liked {
        marks.push_str(" ♥");
    }
    if video.is_watch_later {
        marks.push_str(" ⏱");
    }

    format!(
        "{} {} - {}{}",
        video.title,
        format!("[{}]", video.duration).dimmed(),
        video.uploader.cyan(),
        marks.red()
    )
}

/// Menu label for a history entry
pub fn history_label(entry: &HistoryEntry) -> String {
    format!(
        "{} {}",
        video_label(&entry.video),
        format!("(watched {})", entry.watched_on()).dimmed()
    )
}

/// Short status line shown above menus
pub fn status_line(snapshot: &GallerySnapshot<'_>) -> String {
    let mut line = match (&snapshot.screen, snapshot.selected) {
        (Screen::Watching(_), Some(video)) => format!("▶ {}", video.title),
        (Screen::Watching(id), None) => format!("▶ {}", id),
        (Screen::Browsing, _) => format!("{} videos available", snapshot.filtered.len()),
    };

    if !snapshot.query.trim().is_empty() {
        line.push_str(&format!("  search: {:?}", snapshot.query));
    }
    line.push_str(&format!("  history ({})", snapshot.history.len()));
    if snapshot.history_degraded {
        line.push_str("  [history not saved]");
    }
    line
}

/// Multi-line description of the selected video
pub fn video_details(video: &Video) -> String {
    let mut out = format!(
        "{}\n{} · {} · {} views · {} likes",
        video.title.bold(),
        video.uploader.cyan(),
        video.upload_date,
        video.view_count,
        video.likes
    );
    if let Some(description) = &video.description {
        out.push('\n');
        out.push_str(description);
    }
    if !video.tags.is_empty() {
        out.push('\n');
        out.push_str(
            &video
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ")
                .dimmed()
                .to_string(),
        );
    }
    out
}

/// Message for a search with no results
pub fn no_results(query: &str) -> String {
    format!("No videos found matching \"{}\"", query)
}
