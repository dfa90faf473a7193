// src/error.rs

//! Unified error handling for the affair tracker.
//!
//! Run-fatal conditions (`ListFile`, `Config`) and per-affair conditions
//! (`Fetch`, `CacheMiss`, `CacheRead`, `CacheWrite`, `MalformedTimestamp`)
//! share one type. Per-affair errors never leave `pipeline::check`; they are
//! recorded in the `Report`.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Result type alias for tracker operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// A list line is neither short form nor canonical form
    #[error("Invalid entry: '{0}'")]
    InvalidIdentifier(String),

    /// A list line repeats an identifier already loaded
    #[error("Duplicate: {0}")]
    DuplicateIdentifier(String),

    /// A list file could not be opened or read
    #[error("Could not read list file {path}: {message}")]
    ListFile { path: String, message: String },

    /// Network transport failure, non-200 response or unusable body
    #[error("{id}: Could not retrieve affair data ({message}). Invalid affair number?")]
    Fetch { id: String, message: String },

    /// Cache mode requested an affair that was never cached
    #[error("No cache entry for {0}. Use --create-cache to populate the cache first.")]
    CacheMiss(String),

    /// Cache entry exists but could not be read or parsed
    #[error("Could not read cache for {id}: {message}")]
    CacheRead { id: String, message: String },

    /// Persisting a fetched payload failed
    #[error("Could not write cache for {id}: {message}")]
    CacheWrite { id: String, message: String },

    /// The record's `updated` field is not a date-time
    #[error("{id}: Malformed update timestamp '{value}'")]
    MalformedTimestamp { id: String, value: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a list file error for the given path.
    pub fn list_file(path: &Path, message: impl fmt::Display) -> Self {
        Self::ListFile {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a fetch error scoped to one affair.
    pub fn fetch(id: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            id: id.into(),
            message: message.to_string(),
        }
    }

    /// Create a cache read error scoped to one affair.
    pub fn cache_read(id: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::CacheRead {
            id: id.into(),
            message: message.to_string(),
        }
    }

    /// Create a cache write error scoped to one affair.
    pub fn cache_write(id: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::CacheWrite {
            id: id.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_miss_message_names_affair() {
        let err = AppError::CacheMiss("20212355".into());
        let msg = err.to_string();
        assert!(msg.contains("20212355"));
        assert!(msg.contains("--create-cache"));
    }
}
