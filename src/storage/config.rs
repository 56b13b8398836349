//! Configuration management

use crate::error::{GalleryError, Result};
use crate::storage::persistence::is_valid_key;
use crate::types::Config;
use crate::utils::paths::{ensure_dir, get_config_dir, get_config_path};
use log::debug;
use std::path::Path;
use tokio::fs;
use tokio::process::Command;

/// Load configuration from the default config file
pub async fn load_config() -> Result<Config> {
    load_config_from(&get_config_path()).await
}

/// Load configuration from `path`, filling missing fields with defaults
pub async fn load_config_from(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        debug!("No config at {}, using defaults", path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).await?;
    let config: Config = serde_json::from_str(&content)
        .map_err(|e| GalleryError::InvalidConfig(format!("{}: {}", path, e)))?;

    validate(&config)?;
    Ok(config)
}

/// Reject settings the history store cannot work with
pub fn validate(config: &Config) -> Result<()> {
    if config.max_history_entries == 0 {
        return Err(GalleryError::InvalidConfig(
            "max_history_entries must be at least 1".into(),
        ));
    }

    if !is_valid_key(&config.history_key) {
        return Err(GalleryError::InvalidConfig(format!(
            "history_key {:?} may only contain letters, digits, '-', '_' and '.'",
            config.history_key
        )));
    }

    Ok(())
}

/// Save configuration to file
pub async fn save_config(config: &Config) -> Result<()> {
    ensure_dir(&get_config_dir()).await?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(get_config_path(), content).await?;
    Ok(())
}

/// Open config file in editor
pub async fn edit_config(editor: &str) -> Result<()> {
    let config_path = get_config_path();

    // Ensure config file exists
    if !Path::new(&config_path).exists() {
        save_config(&Config::default()).await?;
    }

    Command::new(editor)
        .arg(&config_path)
        .status()
        .await
        .map_err(|e| GalleryError::Spawn(format!("Failed to start {}: {}", editor, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::types::PlayerType;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = tokio_test::block_on(load_config_from(&path.to_string_lossy())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_merges_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_history_entries": 5, "player": "vlc"}"#).unwrap();

        let config = tokio_test::block_on(load_config_from(&path.to_string_lossy())).unwrap();
        assert_eq!(config.max_history_entries, 5);
        assert_eq!(config.player, PlayerType::Vlc);
        assert_eq!(config.history_key, "video-gallery-history");
    }

    #[test]
    fn test_zero_cap_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_history_entries": 0}"#).unwrap();

        let err = tokio_test::block_on(load_config_from(&path.to_string_lossy())).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_malformed_file_is_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "player = mpv").unwrap();

        let err = tokio_test::block_on(load_config_from(&path.to_string_lossy())).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_history_key_must_be_safe() {
        for key in ["../history", "", "..", "a/b"] {
            let config = Config {
                history_key: key.into(),
                ..Config::default()
            };
            assert!(validate(&config).is_err(), "key {:?}", key);
        }
    }

    #[test]
    fn test_history_key_accepted_by_config_is_usable_by_store() {
        use crate::storage::persistence::{FileStore, PersistenceProvider};

        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        for key in ["history.v2", "my_history", "video-gallery-history"] {
            let config = Config {
                history_key: key.into(),
                ..Config::default()
            };
            assert!(validate(&config).is_ok(), "key {:?}", key);
            store.set(key, "[]").unwrap();
        }
    }
}
