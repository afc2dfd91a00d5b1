//! Web-font stylesheet inlining
//!
//! The first `<link>` pointing at the font provider is replaced by a
//! `<style>` block at the top of `<head>`. Every font file the stylesheet
//! references is fetched once and embedded as a `data:` URL.

use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::sync::LazyLock;

use futures::{StreamExt, TryStreamExt, stream};
use regex::Regex;

use super::data_url::{encode_data_url, font_media_type};
use super::types::Inlined;
use crate::fetcher::{FetchError, ResourceFetcher};
use crate::utils::constants::{FONT_FILE_PREFIX, FONT_STYLESHEET_PREFIX, HEAD_MARKER};

/// Stylesheet `<link>` plus surrounding whitespace and one trailing newline
static FONT_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"\s*<link[^>]+href="({}[^"]+)"[^>]*>\n?"#,
        regex::escape(FONT_STYLESHEET_PREFIX)
    ))
    .expect("FONT_LINK_RE: hardcoded regex is valid")
});

static FONT_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"url\(({}[A-Za-z0-9_\-/\.@%?=&]+)\)",
        regex::escape(FONT_FILE_PREFIX)
    ))
    .expect("FONT_URL_RE: hardcoded regex is valid")
});

/// Location of the font stylesheet link in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontLink {
    /// Bytes removed when the link is dropped (tag plus surrounding whitespace)
    pub range: Range<usize>,
    /// Stylesheet URL as a browser would request it
    pub href: String,
}

/// Find the first font-provider stylesheet `<link>`
#[must_use]
pub fn find_font_link(html: &str) -> Option<FontLink> {
    let captures = FONT_LINK_RE.captures(html)?;
    let whole = captures.get(0)?;
    let href = captures.get(1)?.as_str();

    Some(FontLink {
        range: whole.range(),
        // Attribute values are HTML-escaped; the query string usually carries `&amp;`
        href: href.replace("&amp;", "&"),
    })
}

/// Distinct font file URLs referenced by `url(...)`, in order of first use
#[must_use]
pub fn font_urls(css: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    FONT_URL_RE
        .captures_iter(css)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

/// Replace every occurrence of each fetched URL with its `data:` URL
///
/// Longer URLs are substituted first so a URL that happens to prefix
/// another cannot clobber it; the result does not depend on fetch order.
#[must_use]
pub fn embed_fonts(css: &str, fonts: &HashMap<String, Vec<u8>>) -> String {
    let mut urls: Vec<&String> = fonts.keys().collect();
    urls.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut css = css.to_string();
    for url in urls {
        let data_url = encode_data_url(font_media_type(url), &fonts[url]);
        css = css.replace(url.as_str(), &data_url);
    }
    css
}

/// Wrap stylesheet text in a `<style>` element
#[must_use]
pub fn style_block(css: &str) -> String {
    format!("<style>\n{css}\n</style>")
}

/// Drop the link and put `style` directly after the first `<head>`
///
/// Returns `None` when the document has no `<head>` marker.
#[must_use]
pub fn splice_style_block(html: &str, link: &FontLink, style: &str) -> Option<String> {
    let mut html = html.to_string();
    html.replace_range(link.range.clone(), "\n");

    let insert_at = html.find(HEAD_MARKER)? + HEAD_MARKER.len();
    html.insert_str(insert_at, style);
    Some(html)
}

/// Fetch the stylesheet and embed every font file it references.
///
/// Returns the rewritten stylesheet and the number of font files embedded.
/// Each distinct URL is fetched exactly once, at most `concurrency` at a time.
pub async fn resolve_font_stylesheet(
    css_url: &str,
    fetcher: &dyn ResourceFetcher,
    concurrency: usize,
) -> Result<(String, usize), FetchError> {
    let css = fetcher.fetch_text(css_url).await?;
    let urls = font_urls(&css);
    log::debug!("Stylesheet {css_url} references {} font files", urls.len());

    let fonts: HashMap<String, Vec<u8>> = stream::iter(urls)
        .map(|url| async move {
            let bytes = fetcher.fetch_bytes(&url).await?;
            log::debug!("Fetched font {url}: {} bytes", bytes.len());
            Ok::<_, FetchError>((url, bytes))
        })
        .buffer_unordered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok((embed_fonts(&css, &fonts), fonts.len()))
}

/// Replace the font stylesheet link with an inline, self-contained style block.
///
/// Nothing is fetched when the document has no font link or no `<head>`.
pub async fn inline_font_bundle(
    html: String,
    fetcher: &dyn ResourceFetcher,
    concurrency: usize,
) -> Result<Inlined, FetchError> {
    let Some(link) = find_font_link(&html) else {
        log::warn!("No {FONT_STYLESHEET_PREFIX} stylesheet link found, leaving document unchanged");
        return Ok(Inlined::NotFound(html));
    };
    if !html.contains(HEAD_MARKER) {
        log::warn!("Document has no {HEAD_MARKER} marker, cannot place inlined fonts");
        return Ok(Inlined::NotFound(html));
    }

    let (css, font_count) = resolve_font_stylesheet(&link.href, fetcher, concurrency).await?;

    match splice_style_block(&html, &link, &style_block(&css)) {
        Some(html) => Ok(Inlined::Found {
            html,
            resources: 1 + font_count,
        }),
        None => Ok(Inlined::NotFound(html)),
    }
}
