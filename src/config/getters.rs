//! Getter methods for `PackConfig`

use std::path::{Path, PathBuf};

use super::types::{FetchConfig, PackConfig, PayloadSource};
use crate::utils::resolve_project_path;

impl PackConfig {
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    #[must_use]
    pub fn script_url(&self) -> &str {
        &self.script_url
    }

    #[must_use]
    pub fn payloads(&self) -> &[PayloadSource] {
        &self.payloads
    }

    #[must_use]
    pub fn fetch(&self) -> &FetchConfig {
        &self.fetch
    }

    /// Source document path, resolved against the project root
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        resolve_project_path(&self.project_root, &self.source_html)
    }

    /// Output document path, resolved against the project root
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        resolve_project_path(&self.project_root, &self.output_html)
    }

    /// Payload slots with their paths resolved against the project root
    #[must_use]
    pub fn resolved_payloads(&self) -> Vec<PayloadSource> {
        self.payloads
            .iter()
            .map(|p| PayloadSource::new(p.id.clone(), resolve_project_path(&self.project_root, &p.path)))
            .collect()
    }
}
