//! Error type for remote resource fetches

use thiserror::Error;

/// Error type for download failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} -> {status}")]
    Status { url: String, status: u16 },

    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} timed out")]
    Timeout { url: String },

    #[error("GET {url}: response of {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { url: String, size: u64, limit: usize },

    #[error("GET {url}: response body is not valid UTF-8")]
    InvalidUtf8 { url: String },
}

impl FetchError {
    /// URL the failed request was made for
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Timeout { url }
            | FetchError::TooLarge { url, .. }
            | FetchError::InvalidUtf8 { url } => url,
        }
    }

    /// HTTP status of the failed response, if the server answered
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if error is transient and should be retried
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Status { status, .. } => *status == 429 || (500..600).contains(status),
            FetchError::Transport { .. } | FetchError::Timeout { .. } => true,
            FetchError::TooLarge { .. } | FetchError::InvalidUtf8 { .. } => false,
        }
    }
}
