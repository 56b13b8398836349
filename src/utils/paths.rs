//! Path utilities for video-gallery
//!
//! Respects XDG Base Directory Specification

use crate::error::Result;
use std::env;
use tokio::fs;

const APP_NAME: &str = "video-gallery";

/// Get config directory path
/// Respects XDG_CONFIG_HOME, defaults to ~/.config/video-gallery
pub fn get_config_dir() -> String {
    let base = env::var("XDG_CONFIG_HOME")
        .unwrap_or_else(|_| {
            dirs::config_dir()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| format!("{}/.config", env::var("HOME").unwrap_or_default()))
        });

    format!("{}/{}", base, APP_NAME)
}

/// Get cache directory path
/// Respects XDG_CACHE_HOME, defaults to ~/.cache/video-gallery
pub fn get_cache_dir() -> String {
    let base = env::var("XDG_CACHE_HOME")
        .unwrap_or_else(|_| {
            dirs::cache_dir()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| format!("{}/.cache", env::var("HOME").unwrap_or_default()))
        });

    format!("{}/{}", base, APP_NAME)
}

/// Directory the history key-value store writes into
pub fn get_store_dir() -> String {
    get_cache_dir()
}

/// Get config file path
pub fn get_config_path() -> String {
    format!("{}/config.json", get_config_dir())
}

/// Get catalog file path, honoring a configured override
pub fn get_catalog_path(configured: &str) -> String {
    if configured.is_empty() {
        format!("{}/catalog.json", get_config_dir())
    } else {
        configured.to_string()
    }
}

/// Ensure a directory exists
pub async fn ensure_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path).await?;
    Ok(())
}

/// Ensure all required app directories exist
pub async fn ensure_app_dirs() -> Result<()> {
    ensure_dir(&get_config_dir()).await?;
    ensure_dir(&get_cache_dir()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_path_override() {
        assert_eq!(get_catalog_path("/tmp/videos.json"), "/tmp/videos.json");
        assert!(get_catalog_path("").ends_with("video-gallery/catalog.json"));
    }
}
