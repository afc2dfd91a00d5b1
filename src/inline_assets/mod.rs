//! Resource inlining functionality
//!
//! This module turns external references in an HTML document (a CDN script,
//! a web-font stylesheet and its font files, empty JSON placeholders) into
//! embedded content, producing a self-contained document.

// Sub-modules
pub mod data_url;
pub mod fonts;
pub mod orchestrator;
pub mod payload;
pub mod script;
pub mod types;

// Re-exports for public API
pub use data_url::{decode_data_url, encode_data_url, font_media_type};
pub use fonts::{inline_font_bundle, resolve_font_stylesheet};
pub use orchestrator::inline_all_resources;
pub use payload::{Payload, inject_payload, inject_payloads};
pub use script::{embed_script, inline_script};
pub use types::{InlineError, Inlined, InliningResult};
