//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a purge run.
///
/// Anything that goes wrong with a single cache entry is recorded in the
/// run's report instead; only conditions that make the whole run meaningless
/// end up here.
#[derive(Debug, Error)]
pub enum PurgeError {
    /// The cache root is missing or cannot be accessed
    #[error("Cachedir {} does not exist!", .path.display())]
    CacheRootMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cache root exists but is not a directory
    #[error("Cachedir {} is not a directory!", .path.display())]
    CacheRootNotDirectory { path: PathBuf },

    /// A size setting could not be parsed
    #[error("Invalid size '{0}': expected bytes, a K/M/G suffix, or 'unlimited'")]
    InvalidSize(String),

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", .path.display())]
    Configuration { path: PathBuf, message: String },
}

impl PurgeError {
    /// Create a configuration error for a file
    pub fn configuration(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error stems from the cache root itself
    pub fn is_cache_root_error(&self) -> bool {
        matches!(
            self,
            Self::CacheRootMissing { .. } | Self::CacheRootNotDirectory { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, PurgeError>;
