//! Error types for the theme store.
//!
//! Mutations on [`ThemeStore`](crate::ThemeStore) never fail; these errors only
//! surface at the edges: parsing user-supplied strings, touching the storage
//! slot, loading configuration, and reading a session that was never started.

use thiserror::Error;

/// Error raised when a session is used outside its lifetime.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeError {
    /// The session has no store: `init` was never called or `teardown` already ran.
    #[error("theme store accessed before the session was initialized")]
    Uninitialized,
}

/// Error parsing one of the closed theme enumerations from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown color mode: {0:?} (expected light, dark or system)")]
    UnknownMode(String),
    #[error("unknown component: {0:?} (expected header, sidebar or player)")]
    UnknownComponent(String),
    #[error("unknown skin: {0:?}")]
    UnknownSkin(String),
}

/// Error reading or writing the persisted color mode slot.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Error loading a [`ThemeConfig`](crate::ThemeConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
