//! Type definitions for resource inlining

use thiserror::Error;

/// Outcome of a best-effort substitution stage
///
/// Both variants carry the document; `NotFound` returns it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Inlined {
    /// The anchor matched and `resources` remote resources were embedded
    Found { html: String, resources: usize },
    /// The anchor was absent
    NotFound(String),
}

impl Inlined {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Inlined::Found { .. })
    }

    /// Number of remote resources embedded by the stage
    #[must_use]
    pub fn resources(&self) -> usize {
        match self {
            Inlined::Found { resources, .. } => *resources,
            Inlined::NotFound(_) => 0,
        }
    }

    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Inlined::Found { html, .. } | Inlined::NotFound(html) => html,
        }
    }

    #[must_use]
    pub fn into_html(self) -> String {
        match self {
            Inlined::Found { html, .. } | Inlined::NotFound(html) => html,
        }
    }
}

/// Error types for mandatory substitutions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    #[error(r#"placeholder <script id="{id}" type="application/json"></script> not found"#)]
    MissingPlaceholder { id: String },

    /// The element exists but is no longer empty
    #[error(r#"placeholder "{id}" already holds a payload; refusing to inject twice"#)]
    AlreadyInjected { id: String },
}

/// Result of a complete in-memory inlining pass
#[derive(Debug, Clone)]
pub struct InliningResult {
    pub html: String,
    pub script_inlined: bool,
    /// Stylesheet plus font files embedded by the font stage
    pub font_resources: usize,
    pub payloads_injected: usize,
}
