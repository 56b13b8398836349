//! Catalog loading

use crate::error::{GalleryError, Result};
use crate::types::Video;
use log::{debug, warn};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

const SAMPLE_BASE: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

/// Load the catalog from a JSON array of videos.
///
/// A missing file falls back to the built-in sample catalog. Videos whose id
/// was already seen are dropped.
pub async fn load_catalog(path: &str) -> Result<Vec<Video>> {
    if !Path::new(path).exists() {
        debug!("No catalog at {}, using sample catalog", path);
        return Ok(sample_catalog());
    }

    let content = fs::read_to_string(path).await?;
    parse_catalog(&content)
}

/// Parse a catalog JSON document
pub fn parse_catalog(content: &str) -> Result<Vec<Video>> {
    let videos: Vec<Video> = serde_json::from_str(content)
        .map_err(|e| GalleryError::CatalogParse(e.to_string()))?;
    Ok(dedup_by_id(videos))
}

fn dedup_by_id(videos: Vec<Video>) -> Vec<Video> {
    let mut seen = HashSet::new();
    videos
        .into_iter()
        .filter(|v| {
            let first = seen.insert(v.id.clone());
            if !first {
                warn!("Dropping duplicate catalog entry {}", v.id);
            }
            first
        })
        .collect()
}

fn sample(
    id: &str,
    title: &str,
    uploader: &str,
    upload_date: &str,
    duration: &str,
    file: &str,
    tags: &[&str],
) -> Video {
    Video {
        id: id.into(),
        title: title.into(),
        uploader: uploader.into(),
        upload_date: upload_date.into(),
        view_count: 0,
        duration: duration.into(),
        thumbnail: format!("{}/images/{}.jpg", SAMPLE_BASE, file),
        video_url: format!("{}/{}.mp4", SAMPLE_BASE, file),
        description: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        likes: 0,
        is_liked: false,
        is_watch_later: false,
    }
}

/// Built-in catalog of freely available sample films
pub fn sample_catalog() -> Vec<Video> {
    vec![
        Video {
            view_count: 1_204_331,
            likes: 1_542,
            description: Some("A giant rabbit takes on three bullying rodents.".into()),
            ..sample(
                "big-buck-bunny",
                "Big Buck Bunny",
                "Blender Foundation",
                "2008-05-20",
                "9:56",
                "BigBuckBunny",
                &["animation", "comedy", "blender"],
            )
        },
        Video {
            view_count: 874_002,
            likes: 998,
            description: Some("A girl and her baby dragon.".into()),
            ..sample(
                "sintel",
                "Sintel",
                "Blender Foundation",
                "2010-09-27",
                "14:48",
                "Sintel",
                &["animation", "fantasy", "blender"],
            )
        },
        Video {
            view_count: 652_118,
            likes: 731,
            ..sample(
                "tears-of-steel",
                "Tears of Steel",
                "Blender Foundation",
                "2012-09-26",
                "12:14",
                "TearsOfSteel",
                &["sci-fi", "live action", "blender"],
            )
        },
        Video {
            view_count: 501_877,
            likes: 604,
            ..sample(
                "elephants-dream",
                "Elephants Dream",
                "Orange Open Movie Project",
                "2006-03-24",
                "10:53",
                "ElephantsDream",
                &["animation", "surreal"],
            )
        },
        Video {
            view_count: 98_420,
            likes: 120,
            ..sample(
                "for-bigger-blazes",
                "For Bigger Blazes",
                "Google",
                "2013-07-24",
                "0:15",
                "ForBiggerBlazes",
                &["ad", "chromecast"],
            )
        },
        Video {
            view_count: 87_310,
            likes: 95,
            ..sample(
                "for-bigger-escapes",
                "For Bigger Escapes",
                "Google",
                "2013-07-24",
                "0:15",
                "ForBiggerEscapes",
                &["ad", "chromecast"],
            )
        },
        Video {
            view_count: 40_112,
            likes: 48,
            ..sample(
                "subaru-outback",
                "Subaru Outback On Street And Dirt",
                "Garage419",
                "2014-01-15",
                "9:54",
                "SubaruOutbackOnStreetAndDirt",
                &["cars", "review"],
            )
        },
        Video {
            view_count: 35_640,
            likes: 41,
            ..sample(
                "we-are-going-on-bullrun",
                "We Are Going On Bullrun",
                "Garage419",
                "2014-02-03",
                "0:47",
                "WeAreGoingOnBullrun",
                &["cars", "rally"],
            )
        },
    ]
}
