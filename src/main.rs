// Single-file packer
//
// Inlines the CDN script, the web-font stylesheet with its font files and the
// JSON payloads of the page under the current directory, then writes one
// self-contained HTML file. Exits non-zero on the first failure.

use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let project_root = std::env::current_dir().context("Failed to determine current directory")?;

    let summary = kodegen_tools_singlefile::pack_project(&project_root)
        .await
        .with_context(|| format!("Packing {} failed", project_root.display()))?;

    log::debug!(
        "script inlined: {}, font resources: {}, payloads: {}, {} bytes",
        summary.script_inlined,
        summary.font_resources,
        summary.payloads_injected,
        summary.bytes_written
    );
    println!("Packed single file: {}", summary.output_path.display());
    Ok(())
}
