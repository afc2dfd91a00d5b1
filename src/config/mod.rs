//! Configuration module for packing
//!
//! This module provides the `PackConfig` struct, its builder and the loader
//! for the optional `pack.config.json` project file.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::PackConfigBuilder;
pub use types::{FetchConfig, PackConfig, PayloadSource};
