//! Error types for the fitstats_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitstats_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Calendar date parsing error
    #[error("Date error: {0}")]
    Date(#[from] chrono::ParseError),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile data error
    #[error("Profile error: {0}")]
    Profile(String),
}
