//! Shared configuration constants for the single-file packer
//!
//! This module contains default values and anchor patterns used throughout
//! the codebase to ensure consistency and avoid magic strings.

/// Script tag source that gets replaced by an embedded data reference
pub const DEFAULT_SCRIPT_URL: &str = "https://d3js.org/d3.v7.min.js";

/// Prefix identifying the web-font stylesheet `<link>` in the document head
pub const FONT_STYLESHEET_PREFIX: &str = "https://fonts.googleapis.com/";

/// Host prefix of the binary font files referenced from the stylesheet
pub const FONT_FILE_PREFIX: &str = "https://fonts.gstatic.com/";

/// Literal marker after which the inlined font style block is placed
pub const HEAD_MARKER: &str = "<head>";

/// Default source document, relative to the project root
pub const DEFAULT_SOURCE_HTML: &str = "examples/sim-force/index.html";

/// Default packed output, relative to the project root
pub const DEFAULT_OUTPUT_HTML: &str = "examples/sim-force/index.single.html";

/// Optional configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "pack.config.json";

/// Default JSON payload slots: (placeholder id, asset path relative to the project root)
pub const DEFAULT_PAYLOADS: [(&str, &str); 2] = [
    ("sim-data", "assets/similarities.json"),
    ("ts-data", "assets/ts-2009-2010-3m.json"),
];

/// Per-request timeout: 30 seconds
///
/// The CDN script is the largest resource (~280KB), well within this
/// window on any working connection.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Attempts per resource, including the first one
pub const DEFAULT_FETCH_ATTEMPTS: u32 = 3;

/// Backoff before the first retry, doubled after every failed attempt
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;

/// Upper bound for a single backoff interval
pub const DEFAULT_MAX_RETRY_BACKOFF_MS: u64 = 5_000;

/// Maximum response body size: 32MB
///
/// Typical: d3 bundle ~280KB, woff2 subsets 10-100KB.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 32 * 1024 * 1024;

/// Number of font files fetched at the same time
pub const DEFAULT_FONT_FETCH_CONCURRENCY: usize = 4;

/// Chrome user agent string
///
/// Google Fonts serves woff2 sources only to user agents it recognises as
/// modern browsers; a bare client string gets a TTF-only stylesheet.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
