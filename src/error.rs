//! Error types for configuration and the packing pipeline

use std::path::PathBuf;
use thiserror::Error;

use crate::fetcher::FetchError;
use crate::inline_assets::InlineError;

/// Result type alias for pipeline operations
pub type PackResult<T> = Result<T, PackError>;

/// Errors raised while loading or validating `PackConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error types for a packing run. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum PackError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Remote resource could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A substitution stage could not be applied
    #[error(transparent)]
    Inline(#[from] InlineError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackError {
    /// URL of the failed resource, when the run died on a fetch
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            PackError::Fetch(e) => Some(e.url()),
            _ => None,
        }
    }
}
