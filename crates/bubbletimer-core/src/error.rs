//! Core error types for bubbletimer-core.
//!
//! Errors are grouped per subsystem with thiserror. Note that history
//! persistence deliberately does not surface errors across the engine
//! boundary -- reads fail soft to an empty history and writes are dropped.
//! The types here cover the paths that do report: storage setup, config
//! handling, and custom-duration validation.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for bubbletimer-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Read or write against the key-value store failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema setup failed
    #[error("Schema migration failed: {0}")]
    MigrationFailed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Missing required configuration key
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for user-entered durations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Negative minutes or seconds
    #[error("Time values cannot be negative")]
    NegativeValue,

    /// Seconds outside 0..=59
    #[error("Seconds must be between 0 and 59")]
    SecondsOutOfRange,

    /// Both minutes and seconds are zero
    #[error("Time cannot be zero")]
    ZeroDuration,

    /// Preset name not recognized
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
