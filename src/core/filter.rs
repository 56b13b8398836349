//! Catalog search filtering

use crate::types::Video;

/// Videos matching `query`, in catalog order.
///
/// A blank query returns every video. Otherwise a video matches when the
/// lowercased query occurs in its title, its uploader, or any of its tags.
pub fn filter<'a>(videos: &'a [Video], query: &str) -> Vec<&'a Video> {
    if query.trim().is_empty() {
        return videos.iter().collect();
    }

    let needle = query.to_lowercase();
    videos.iter().filter(|v| matches_lowercase(v, &needle)).collect()
}

/// Whether a single video matches `query`
pub fn matches(video: &Video, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    matches_lowercase(video, &query.to_lowercase())
}

fn matches_lowercase(video: &Video, needle: &str) -> bool {
    video.title.to_lowercase().contains(needle)
        || video.uploader.to_lowercase().contains(needle)
        || video.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Video> {
        vec![
            Video::new("a", "Cats at Play").with_uploader("Pet World"),
            Video::new("b", "Mountain Drive").with_uploader("Road Trips").with_tags(["Scenic", "cars"]),
            Video::new("c", "Dogs in the Park").with_uploader("pet world"),
        ]
    }

    fn ids(videos: &[&Video]) -> Vec<String> {
        videos.iter().map(|v| v.id.clone()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let videos = catalog();
        assert_eq!(ids(&filter(&videos, "")), vec!["a", "b", "c"]);
        assert_eq!(ids(&filter(&videos, "   ")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        let videos = catalog();
        assert_eq!(ids(&filter(&videos, "CAT")), vec!["a"]);
    }

    #[test]
    fn test_matches_uploader_preserving_order() {
        let videos = catalog();
        assert_eq!(ids(&filter(&videos, "Pet World")), vec!["a", "c"]);
    }

    #[test]
    fn test_matches_any_tag() {
        let videos = catalog();
        assert_eq!(ids(&filter(&videos, "scen")), vec!["b"]);
        assert_eq!(ids(&filter(&videos, "car")), vec!["b"]);
    }

    #[test]
    fn test_no_match() {
        let videos = catalog();
        assert!(filter(&videos, "submarine").is_empty());
    }

    #[test]
    fn test_inner_whitespace_is_significant() {
        let videos = catalog();
        assert_eq!(ids(&filter(&videos, "at play")), vec!["a"]);
        assert!(filter(&videos, "cats  at").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let videos = catalog();
        let once: Vec<Video> = filter(&videos, "pet").into_iter().cloned().collect();
        let twice: Vec<Video> = filter(&once, "pet").into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_matches_single_video() {
        let video = Video::new("x", "Ocean Waves").with_tags(["Relax"]);
        assert!(matches(&video, "relax"));
        assert!(matches(&video, ""));
        assert!(!matches(&video, "forest"));
    }
}
