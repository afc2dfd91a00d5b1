//! Test utilities and helper functions for the packer test suite

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use kodegen_tools_singlefile::{FetchError, FetchFuture, ResourceFetcher};
use tempfile::TempDir;

#[allow(dead_code)]
pub const D3_URL: &str = "https://d3js.org/d3.v7.min.js";
#[allow(dead_code)]
pub const FONT_CSS_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;600&display=swap";

enum Response {
    Body(Vec<u8>),
    Status(u16),
}

/// In-memory fetcher that serves canned responses and counts requests per URL
#[allow(dead_code)]
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Response>,
    hits: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, url: &str, body: &str) -> Self {
        self.with_bytes(url, body.as_bytes().to_vec())
    }

    pub fn with_bytes(mut self, url: &str, body: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), Response::Body(body));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Response::Status(status));
        self
    }

    /// Number of requests made for `url`
    pub fn hits(&self, url: &str) -> usize {
        self.hits.lock().expect("hits lock").get(url).copied().unwrap_or(0)
    }

    /// Number of requests made for any URL
    pub fn total_hits(&self) -> usize {
        self.hits.lock().expect("hits lock").values().sum()
    }

    fn respond(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        *self
            .hits
            .lock()
            .expect("hits lock")
            .entry(url.to_string())
            .or_default() += 1;

        match self.responses.get(url) {
            Some(Response::Body(body)) => Ok(body.clone()),
            Some(Response::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

impl ResourceFetcher for StaticFetcher {
    fn fetch_text<'a>(&'a self, url: &'a str) -> FetchFuture<'a, String> {
        Box::pin(async move {
            let bytes = self.respond(url)?;
            String::from_utf8(bytes).map_err(|_| FetchError::InvalidUtf8 {
                url: url.to_string(),
            })
        })
    }

    fn fetch_bytes<'a>(&'a self, url: &'a str) -> FetchFuture<'a, Vec<u8>> {
        Box::pin(async move { self.respond(url) })
    }
}

/// A page shaped like the one the packer is built for
#[allow(dead_code)]
pub fn sample_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="{}" rel="stylesheet">
  <title>Similarity Force Graph</title>
</head>
<body>
  <svg id="graph"></svg>
  <script id="sim-data" type="application/json"></script>
  <script id="ts-data" type="application/json"></script>
  <script src="{D3_URL}"></script>
  <script src="main.js"></script>
</body>
</html>
"#,
        FONT_CSS_URL.replace('&', "&amp;")
    )
}

/// Deterministic pseudo-binary content of the given length
#[allow(dead_code)]
pub fn binary_blob(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}

/// Creates a temporary project directory with the default layout
#[allow(dead_code)]
pub fn create_test_project(html: &str, sim_json: &str, ts_json: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "examples/sim-force/index.html", html)?;
    write_file(dir.path(), "assets/similarities.json", sim_json)?;
    write_file(dir.path(), "assets/ts-2009-2010-3m.json", ts_json)?;
    Ok(dir)
}

#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, contents: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
