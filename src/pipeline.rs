//! End-to-end packing: read inputs, inline, write the single-file output
//!
//! The output is only written once every stage has succeeded, through a
//! temporary sibling file that is renamed into place. A failed run leaves no
//! output behind.

use std::path::{Path, PathBuf};

use futures::future::try_join_all;

use crate::config::PackConfig;
use crate::error::{PackError, PackResult};
use crate::fetcher::{HttpFetcher, ResourceFetcher};
use crate::inline_assets::{Payload, inline_all_resources};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    pub output_path: PathBuf,
    pub script_inlined: bool,
    /// Stylesheet plus font files embedded; 0 when the document links no fonts
    pub font_resources: usize,
    pub payloads_injected: usize,
    pub bytes_written: usize,
}

/// Pack the project described by `config`, fetching over HTTP
pub async fn pack(config: &PackConfig) -> PackResult<PackSummary> {
    let fetcher = HttpFetcher::new(config.fetch()).map_err(PackError::HttpClient)?;
    pack_with_fetcher(config, &fetcher).await
}

/// Pack the project described by `config` using `fetcher` for remote resources
pub async fn pack_with_fetcher(
    config: &PackConfig,
    fetcher: &dyn ResourceFetcher,
) -> PackResult<PackSummary> {
    let source_path = config.source_path();
    let html = read_text(&source_path).await?;
    log::info!("Packing {}", source_path.display());

    let payloads = read_payloads(config).await?;

    let result =
        inline_all_resources(html, config.script_url(), &payloads, fetcher, config.fetch())
            .await?;

    let output_path = config.output_path();
    write_atomically(&output_path, &result.html).await?;

    Ok(PackSummary {
        bytes_written: result.html.len(),
        output_path,
        script_inlined: result.script_inlined,
        font_resources: result.font_resources,
        payloads_injected: result.payloads_injected,
    })
}

/// Read every payload file concurrently
async fn read_payloads(config: &PackConfig) -> PackResult<Vec<Payload>> {
    let reads = config.resolved_payloads().into_iter().map(|source| async move {
        let text = read_text(&source.path).await?;
        Ok::<_, PackError>(Payload::new(source.id, text))
    });
    try_join_all(reads).await
}

async fn read_text(path: &Path) -> PackResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PackError::Read {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_atomically(path: &Path, contents: &str) -> PackResult<()> {
    let write_error = |source| PackError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);

    tokio::fs::write(&partial, contents)
        .await
        .map_err(write_error)?;
    if let Err(e) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(write_error(e));
    }
    Ok(())
}
