//! External script inlining
//!
//! `<script src="URL"></script>` becomes `<script src="data:text/javascript;base64,...">`.
//! Embedding as a data URL instead of inline text means a `</script>` inside
//! the library source can never close the element early.

use std::ops::Range;

use super::data_url::{JAVASCRIPT_MEDIA_TYPE, encode_data_url};
use super::types::Inlined;
use crate::fetcher::{FetchError, ResourceFetcher};

/// Byte range of the first `<script src="{url}"></script>` tag
///
/// Any run of whitespace is accepted between `<script` and `src`; the rest
/// of the tag must match exactly.
#[must_use]
pub fn find_script_tag(html: &str, url: &str) -> Option<Range<usize>> {
    let tail = format!("src=\"{url}\"></script>");

    html.match_indices("<script").find_map(|(start, open)| {
        let after_open = &html[start + open.len()..];
        let attrs = after_open.trim_start();
        let gap = after_open.len() - attrs.len();
        (gap > 0 && attrs.starts_with(&tail)).then(|| start..start + open.len() + gap + tail.len())
    })
}

/// Replace the script tag for `url` with one that embeds `script`
pub fn embed_script(html: String, url: &str, script: &str) -> Inlined {
    let Some(range) = find_script_tag(&html, url) else {
        return Inlined::NotFound(html);
    };

    let data_src = encode_data_url(JAVASCRIPT_MEDIA_TYPE, script.as_bytes());
    let mut html = html;
    html.replace_range(range, &format!("<script src=\"{data_src}\"></script>"));

    Inlined::Found { html, resources: 1 }
}

/// Fetch the script at `url` and embed it in place of its tag.
///
/// Nothing is fetched when the tag is absent.
pub async fn inline_script(
    html: String,
    url: &str,
    fetcher: &dyn ResourceFetcher,
) -> Result<Inlined, FetchError> {
    if find_script_tag(&html, url).is_none() {
        log::warn!("No <script src=\"{url}\"> tag found, leaving document unchanged");
        return Ok(Inlined::NotFound(html));
    }

    let script = fetcher.fetch_text(url).await?;
    log::debug!("Fetched script {url}: {} bytes", script.len());

    Ok(embed_script(html, url, &script))
}
