//! Scenario tests for the gallery core.
//!
//! These drive the controller and history store the way a front end would,
//! using the in-memory store and a file store in a temp directory.

use chrono::{Duration, Utc};
use video_gallery::core::filter::filter;
use video_gallery::storage::history::{HISTORY_KEY, MAX_HISTORY};
use video_gallery::{
    FileStore, GalleryController, HistoryEntry, HistoryStore, MemoryStore, PersistenceProvider,
    Screen, Video,
};

fn video(n: usize) -> Video {
    Video::new(format!("v{}", n), format!("Video {}", n))
}

fn ids(entries: &[HistoryEntry]) -> Vec<String> {
    entries.iter().map(|e| e.video.id.clone()).collect()
}

fn cats_and_dogs() -> Vec<Video> {
    vec![
        Video::new("A", "Cats").with_likes(3),
        Video::new("B", "Dogs"),
    ]
}

fn gallery(catalog: Vec<Video>) -> GalleryController<MemoryStore> {
    GalleryController::new(catalog, HistoryStore::new(MemoryStore::new()))
}

#[test]
fn test_history_never_exceeds_cap() {
    let mut history = HistoryStore::new(MemoryStore::new());
    for round in 0..3 {
        for n in 0..40 {
            let len = history.record(&video((n * 7 + round) % 23)).len();
            assert!(len <= MAX_HISTORY);
        }
    }
    assert_eq!(history.len(), MAX_HISTORY);
}

#[test]
fn test_sixteen_videos_evict_the_first() {
    let mut history = HistoryStore::new(MemoryStore::new());
    for n in 1..=16 {
        history.record(&video(n));
    }

    let expected: Vec<String> = (2..=16).rev().map(|n| format!("v{}", n)).collect();
    assert_eq!(ids(history.entries()), expected);
    assert_eq!(history.len(), 15);
}

#[test]
fn test_rewatch_moves_entry_to_front() {
    let mut history = HistoryStore::new(MemoryStore::new());
    let t0 = Utc::now();
    history.record_at(&video(1), t0);
    history.record_at(&video(2), t0 + Duration::seconds(10));
    history.record_at(&video(1), t0 + Duration::seconds(20));

    let entries = history.entries();
    assert_eq!(entries.iter().filter(|e| e.video.id == "v1").count(), 1);
    assert_eq!(entries[0].video.id, "v1");
    assert_eq!(entries[0].watched_at, t0 + Duration::seconds(20));
}

#[test]
fn test_history_is_most_recent_first() {
    let mut history = HistoryStore::new(MemoryStore::new());
    for n in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
        history.record(&video(n));
    }

    let entries = history.entries();
    assert!(entries.windows(2).all(|w| w[0].watched_at >= w[1].watched_at));
    assert_eq!(ids(entries)[..3], ["v5", "v3", "v6"]);
}

#[test]
fn test_removed_entry_stays_removed_after_restart() {
    let mut history = HistoryStore::new(MemoryStore::new());
    history.record(&video(1));
    history.record(&video(2));
    history.remove("v1");

    let mut restarted = HistoryStore::new(history.into_provider());
    assert_eq!(ids(restarted.load()), vec!["v2"]);
}

#[test]
fn test_clear_survives_restart() {
    let mut history = HistoryStore::new(MemoryStore::new());
    history.record(&video(1));
    history.clear();

    let mut restarted = HistoryStore::new(history.into_provider());
    assert!(restarted.load().is_empty());
}

#[test]
fn test_corrupt_history_loads_empty() {
    let mut store = MemoryStore::new();
    store.set(HISTORY_KEY, r#"[{"video": {"id": 7}}]"#).unwrap();

    let c = GalleryController::new(cats_and_dogs(), HistoryStore::new(store));
    assert!(c.snapshot().history.is_empty());
}

#[test]
fn test_quota_exceeded_keeps_session_history() {
    let store = MemoryStore::with_quota(100);
    let mut c = GalleryController::new(cats_and_dogs(), HistoryStore::new(store));

    c.select_video(&Video::new("A", "Cats"));
    let snap = c.snapshot();
    assert_eq!(ids(snap.history), vec!["A"]);
    assert!(snap.history_degraded);
}

#[test]
fn test_filter_identity_and_idempotence() {
    let videos = vec![
        Video::new("1", "Cats at Play").with_uploader("Pet World"),
        Video::new("2", "Mountain Drive").with_tags(["cars", "scenic"]),
        Video::new("3", "Catamaran Sailing").with_uploader("Sea Life"),
    ];

    let all: Vec<Video> = filter(&videos, "").into_iter().cloned().collect();
    assert_eq!(all, videos);

    for q in ["cat", "CAR", "pet", "sea", "zzz", " "] {
        let once: Vec<Video> = filter(&videos, q).into_iter().cloned().collect();
        let twice: Vec<Video> = filter(&once, q).into_iter().cloned().collect();
        assert_eq!(once, twice, "query {:?}", q);
    }
}

#[test]
fn test_search_scenario() {
    let mut c = gallery(cats_and_dogs());

    c.set_query("cat");
    let found: Vec<&str> = c.snapshot().filtered.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(found, vec!["A"]);

    c.set_query("");
    let found: Vec<&str> = c.snapshot().filtered.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(found, vec!["A", "B"]);
}

#[test]
fn test_back_navigation_scenario() {
    let mut c = gallery(cats_and_dogs());
    let (a, b) = (cats_and_dogs()[0].clone(), cats_and_dogs()[1].clone());

    c.select_video(&a);
    c.select_video(&b);
    c.go_back();
    assert_eq!(c.snapshot().screen, Screen::Watching("A".into()));

    c.go_back();
    let snap = c.snapshot();
    assert_eq!(snap.screen, Screen::Browsing);
    assert!(snap.selected.is_none());
    // Going back does not touch history
    assert_eq!(ids(snap.history), vec!["B", "A"]);
}

#[test]
fn test_like_scenario() {
    let mut c = gallery(cats_and_dogs());

    assert!(c.toggle_like("A"));
    let a = c.view().video("A").unwrap();
    assert!(a.is_liked);
    assert_eq!(a.likes, 4);

    assert!(c.toggle_like("A"));
    let a = c.view().video("A").unwrap();
    assert!(!a.is_liked);
    assert_eq!(a.likes, 3);
}

#[test]
fn test_selecting_current_video_still_records() {
    let mut c = gallery(cats_and_dogs());
    let a = cats_and_dogs()[0].clone();

    c.select_video(&a);
    let first = c.snapshot().history[0].watched_at;
    c.select_video(&a);

    let snap = c.snapshot();
    assert_eq!(snap.history.len(), 1);
    assert!(snap.history[0].watched_at >= first);
    assert_eq!(snap.version, 2);
}

#[test]
fn test_home_clears_selection_and_search() {
    let mut c = gallery(cats_and_dogs());
    c.set_query("dog");
    c.select_video(&cats_and_dogs()[1]);
    c.go_home();

    let snap = c.snapshot();
    assert_eq!(snap.screen, Screen::Browsing);
    assert_eq!(snap.query, "");
    assert_eq!(snap.grid.len(), 2);
    assert_eq!(snap.history.len(), 1);
}

#[test]
fn test_history_and_watch_later_actions() {
    let mut c = gallery(cats_and_dogs());
    c.select_video(&cats_and_dogs()[0]);
    c.select_video(&cats_and_dogs()[1]);

    assert!(c.toggle_watch_later("B"));
    assert!(!c.toggle_watch_later("Z"));
    assert_eq!(c.view().watch_later().len(), 1);

    assert!(c.remove_from_history("A"));
    assert_eq!(ids(c.snapshot().history), vec!["B"]);

    c.clear_history();
    assert!(c.snapshot().history.is_empty());
}

#[test]
fn test_file_store_history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut c = GalleryController::new(
        cats_and_dogs(),
        HistoryStore::new(FileStore::new(dir.path())),
    );
    c.select_video(&cats_and_dogs()[0]);
    c.select_video(&cats_and_dogs()[1]);
    drop(c);

    let c = GalleryController::new(
        cats_and_dogs(),
        HistoryStore::new(FileStore::new(dir.path())),
    );
    assert_eq!(ids(c.snapshot().history), vec!["B", "A"]);

    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", HISTORY_KEY))).unwrap();
    assert!(raw.contains("\"watchedAt\""));
    assert!(raw.contains("\"videoUrl\""));
}
