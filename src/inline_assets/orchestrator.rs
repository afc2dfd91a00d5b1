//! Resource inlining orchestration
//!
//! Runs the stages over one document in fixed order: script, font bundle,
//! JSON payloads. Each stage consumes the previous stage's output; the first
//! error aborts the pass.

use super::fonts::inline_font_bundle;
use super::payload::{Payload, inject_payloads};
use super::script::inline_script;
use super::types::InliningResult;
use crate::config::FetchConfig;
use crate::error::PackResult;
use crate::fetcher::ResourceFetcher;

/// Inline every external resource of `html`
///
/// The script and font stages are best-effort and pass the document through
/// when their anchor is absent. Payload injection is mandatory for every
/// entry in `payloads`.
pub async fn inline_all_resources(
    html: String,
    script_url: &str,
    payloads: &[Payload],
    fetcher: &dyn ResourceFetcher,
    fetch_config: &FetchConfig,
) -> PackResult<InliningResult> {
    let script = inline_script(html, script_url, fetcher).await?;
    let script_inlined = script.is_found();
    if script_inlined {
        log::info!("Inlined script {script_url}");
    }

    let fonts = inline_font_bundle(
        script.into_html(),
        fetcher,
        fetch_config.font_fetch_concurrency,
    )
    .await?;
    let font_resources = fonts.resources();
    if fonts.is_found() {
        log::info!(
            "Inlined font stylesheet with {} font files",
            font_resources.saturating_sub(1)
        );
    }

    let html = inject_payloads(&fonts.into_html(), payloads)?;
    log::info!("Injected {} JSON payloads", payloads.len());

    Ok(InliningResult {
        html,
        script_inlined,
        font_resources,
        payloads_injected: payloads.len(),
    })
}
