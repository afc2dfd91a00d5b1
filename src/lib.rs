pub mod config;
pub mod error;
pub mod fetcher;
pub mod inline_assets;
pub mod pipeline;
pub mod utils;

pub use config::{FetchConfig, PackConfig, PayloadSource};
pub use error::{ConfigError, PackError, PackResult};
pub use fetcher::{FetchError, FetchFuture, HttpFetcher, ResourceFetcher, RetryPolicy};
pub use inline_assets::{
    InlineError, Inlined, InliningResult, Payload, decode_data_url, encode_data_url,
    inline_all_resources, inline_font_bundle, inline_script, inject_payloads,
};
pub use pipeline::{PackSummary, pack, pack_with_fetcher};

/// Load the configuration for `project_root` and pack it
pub async fn pack_project(project_root: impl AsRef<std::path::Path>) -> PackResult<PackSummary> {
    let config = PackConfig::load(project_root).await?;
    pack(&config).await
}
