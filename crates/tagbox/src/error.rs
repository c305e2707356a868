//! Error types for tagbox.

use std::path::PathBuf;

use tagbox_core::PropertyError;

/// Result type alias for tagbox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the fallible widget and options APIs.
///
/// Ordinary UI events never fail; these cover malformed host input and
/// options files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A badge carried a key that is not a positional index.
    #[error("Invalid badge key '{key}': expected a non-negative integer")]
    InvalidBadgeKey { key: String },

    /// Property access by name failed.
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// TOML options could not be parsed.
    #[error("Failed to parse TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON options could not be parsed.
    #[error("Failed to parse JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// The options file extension is neither `.toml` nor `.json`.
    #[error("Unsupported options format for '{path}': expected .toml or .json")]
    UnsupportedFormat { path: PathBuf },

    /// File I/O error.
    #[error("Failed to read options '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid badge key error.
    pub fn invalid_badge_key(key: impl Into<String>) -> Self {
        Self::InvalidBadgeKey { key: key.into() }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
