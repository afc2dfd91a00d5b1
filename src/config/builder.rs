//! Fluent builder for `PackConfig`
//!
//! Every field starts at its default; `build()` runs the same validation as
//! a config loaded from `pack.config.json`.

use std::path::PathBuf;
use std::time::Duration;

use super::types::{FetchConfig, PackConfig, PayloadSource};
use crate::error::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct PackConfigBuilder {
    config: PackConfig,
    custom_payloads: bool,
}

impl PackConfig {
    #[must_use]
    pub fn builder() -> PackConfigBuilder {
        PackConfigBuilder::default()
    }
}

impl PackConfigBuilder {
    #[must_use]
    pub fn project_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.project_root = dir.into();
        self
    }

    #[must_use]
    pub fn source_html(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source_html = path.into();
        self
    }

    #[must_use]
    pub fn output_html(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_html = path.into();
        self
    }

    #[must_use]
    pub fn script_url(mut self, url: impl Into<String>) -> Self {
        self.config.script_url = url.into();
        self
    }

    /// Add a payload slot.
    ///
    /// The first call replaces the default `sim-data`/`ts-data` slots.
    #[must_use]
    pub fn payload(mut self, id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        if !self.custom_payloads {
            self.config.payloads.clear();
            self.custom_payloads = true;
        }
        self.config.payloads.push(PayloadSource::new(id, path));
        self
    }

    #[must_use]
    pub fn fetch_config(mut self, fetch: FetchConfig) -> Self {
        self.config.fetch = fetch;
        self
    }

    #[must_use]
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch.timeout_secs = timeout.as_secs();
        self
    }

    #[must_use]
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.fetch.max_attempts = attempts;
        self
    }

    #[must_use]
    pub fn retry_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.config.fetch.retry_backoff_ms = u64::try_from(initial.as_millis()).unwrap_or(u64::MAX);
        self.config.fetch.max_retry_backoff_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn max_response_bytes(mut self, bytes: usize) -> Self {
        self.config.fetch.max_response_bytes = bytes;
        self
    }

    #[must_use]
    pub fn font_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.config.fetch.font_fetch_concurrency = concurrency;
        self
    }

    pub fn build(self) -> Result<PackConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
