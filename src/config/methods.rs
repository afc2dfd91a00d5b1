//! Loading and validation for `PackConfig`

use std::collections::HashSet;
use std::path::Path;

use super::types::PackConfig;
use crate::error::ConfigError;
use crate::utils::{CONFIG_FILE_NAME, is_valid_url};

impl PackConfig {
    /// Load the configuration for a project.
    ///
    /// Reads `pack.config.json` from `project_root` when it exists; any field
    /// it omits keeps its default. Without the file the defaults are used.
    pub async fn load(project_root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let project_root = project_root.as_ref();
        let path = project_root.join(CONFIG_FILE_NAME);

        let mut config = match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                log::debug!("Loading configuration from {}", path.display());
                serde_json::from_str::<PackConfig>(&text)
                    .map_err(|source| ConfigError::Parse { path: path.clone(), source })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {CONFIG_FILE_NAME} in {}, using defaults", project_root.display());
                PackConfig::default()
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        config.project_root = project_root.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the pipeline relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_url(&self.script_url) {
            return Err(ConfigError::Invalid(format!(
                "script_url must be an http(s) URL, got '{}'",
                self.script_url
            )));
        }

        if self.payloads.is_empty() {
            return Err(ConfigError::Invalid("at least one payload slot is required".into()));
        }

        let mut seen = HashSet::new();
        for payload in &self.payloads {
            if payload.id.is_empty() || payload.id.contains('"') {
                return Err(ConfigError::Invalid(format!(
                    "payload id '{}' is not a usable element id",
                    payload.id
                )));
            }
            if !seen.insert(payload.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "payload id '{}' is configured more than once",
                    payload.id
                )));
            }
        }

        let fetch = &self.fetch;
        if fetch.max_attempts == 0 {
            return Err(ConfigError::Invalid("fetch.max_attempts must be at least 1".into()));
        }
        if fetch.font_fetch_concurrency == 0 {
            return Err(ConfigError::Invalid(
                "fetch.font_fetch_concurrency must be at least 1".into(),
            ));
        }
        if fetch.max_response_bytes == 0 {
            return Err(ConfigError::Invalid("fetch.max_response_bytes must be positive".into()));
        }

        Ok(())
    }
}
