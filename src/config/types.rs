//! Core configuration types for packing
//!
//! This module contains the main `PackConfig` struct and its associated types
//! that define which files are read, which anchors are rewritten and how
//! remote resources are fetched.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::{
    DEFAULT_FETCH_ATTEMPTS, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_FONT_FETCH_CONCURRENCY,
    DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_MAX_RETRY_BACKOFF_MS, DEFAULT_OUTPUT_HTML,
    DEFAULT_PAYLOADS, DEFAULT_RETRY_BACKOFF_MS, DEFAULT_SCRIPT_URL, DEFAULT_SOURCE_HTML,
};

/// Main configuration struct for a packing run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackConfig {
    /// Directory every relative path below is resolved against.
    ///
    /// Never read from the config file; it is the directory the file was found in.
    #[serde(skip)]
    pub(crate) project_root: PathBuf,
    pub(crate) source_html: PathBuf,
    pub(crate) output_html: PathBuf,

    /// `src` of the external script tag to embed
    pub(crate) script_url: String,

    /// Placeholder elements filled from local files, in injection order
    pub(crate) payloads: Vec<PayloadSource>,

    pub(crate) fetch: FetchConfig,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_html: PathBuf::from(DEFAULT_SOURCE_HTML),
            output_html: PathBuf::from(DEFAULT_OUTPUT_HTML),
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            payloads: DEFAULT_PAYLOADS
                .iter()
                .map(|(id, path)| PayloadSource::new(*id, *path))
                .collect(),
            fetch: FetchConfig::default(),
        }
    }
}

/// A `<script id="..." type="application/json"></script>` placeholder and
/// the local file whose text fills it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayloadSource {
    pub id: String,
    pub path: PathBuf,
}

impl PayloadSource {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}

/// Configuration for remote fetch timeouts, retries and size limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Timeout for a single request, in seconds
    pub timeout_secs: u64,

    /// Attempts per resource, including the first one. Must be at least 1.
    pub max_attempts: u32,

    /// Backoff before the first retry, in milliseconds. Doubles per attempt.
    pub retry_backoff_ms: u64,

    /// Ceiling for the doubled backoff, in milliseconds
    pub max_retry_backoff_ms: u64,

    /// Maximum size of a response body (bytes)
    pub max_response_bytes: usize,

    /// Font files fetched concurrently by the font bundle resolver
    pub font_fetch_concurrency: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_attempts: DEFAULT_FETCH_ATTEMPTS,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
            max_retry_backoff_ms: DEFAULT_MAX_RETRY_BACKOFF_MS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            font_fetch_concurrency: DEFAULT_FONT_FETCH_CONCURRENCY,
        }
    }
}
