//! Error types for video-gallery

use thiserror::Error;

/// Coarse classification of errors, used by the front end to pick a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Storage errors
    PersistenceRead,
    PersistenceWrite,
    QuotaExceeded,
    InvalidKey,

    // Catalog errors
    CatalogParse,

    // Dependency errors
    MissingDependency,

    // User errors
    InvalidConfig,

    // System errors
    FileError,
    SpawnError,
}

/// Main error type for video-gallery
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Failed to read persisted value: {0}")]
    PersistenceRead(String),

    #[error("Failed to persist value: {0}")]
    PersistenceWrite(String),

    #[error("Storage quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(String),

    #[error("Missing dependency: {0}. Please install it.")]
    MissingDependency(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Failed to spawn process: {0}")]
    Spawn(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GalleryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::PersistenceRead(_) => ErrorCode::PersistenceRead,
            Self::PersistenceWrite(_) => ErrorCode::PersistenceWrite,
            Self::QuotaExceeded { .. } => ErrorCode::QuotaExceeded,
            Self::InvalidKey(_) => ErrorCode::InvalidKey,
            Self::CatalogParse(_) => ErrorCode::CatalogParse,
            Self::MissingDependency(_) => ErrorCode::MissingDependency,
            Self::InvalidConfig(_) => ErrorCode::InvalidConfig,
            Self::File(_) => ErrorCode::FileError,
            Self::Spawn(_) => ErrorCode::SpawnError,
            Self::Json(_) => ErrorCode::CatalogParse,
        }
    }

    /// Whether the error came from the key-value store backing the history
    pub fn is_persistence(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::PersistenceRead
                | ErrorCode::PersistenceWrite
                | ErrorCode::QuotaExceeded
                | ErrorCode::InvalidKey
        )
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
