//! JSON payload injection into placeholder elements
//!
//! Each `<script id="ID" type="application/json"></script>` placeholder
//! receives the text of a local file, verbatim, between its tags. Every
//! placeholder is mandatory: a missing one fails the whole injection and
//! the document is left untouched.

use super::types::InlineError;

/// Payload text destined for one placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub id: String,
    pub text: String,
}

impl Payload {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

fn open_tag(id: &str) -> String {
    format!(r#"<script id="{id}" type="application/json">"#)
}

/// The exact empty element the injector looks for
#[must_use]
pub fn placeholder(id: &str) -> String {
    format!("{}</script>", open_tag(id))
}

/// Check that the placeholder for `id` is present and still empty
pub fn check_placeholder(html: &str, id: &str) -> Result<(), InlineError> {
    if html.contains(&placeholder(id)) {
        Ok(())
    } else if html.contains(&open_tag(id)) {
        Err(InlineError::AlreadyInjected { id: id.to_string() })
    } else {
        Err(InlineError::MissingPlaceholder { id: id.to_string() })
    }
}

/// Fill the first placeholder for `payload.id` with `payload.text`
pub fn inject_payload(html: &str, payload: &Payload) -> Result<String, InlineError> {
    check_placeholder(html, &payload.id)?;

    if contains_script_close(&payload.text) {
        log::warn!(
            "Payload for #{} contains \"</script\"; the element will end early",
            payload.id
        );
    }

    let filled = format!("{}\n{}\n</script>", open_tag(&payload.id), payload.text);
    Ok(html.replacen(&placeholder(&payload.id), &filled, 1))
}

/// Fill every placeholder, validating all of them before touching the document
pub fn inject_payloads(html: &str, payloads: &[Payload]) -> Result<String, InlineError> {
    for payload in payloads {
        check_placeholder(html, &payload.id)?;
    }

    let mut html = html.to_string();
    for payload in payloads {
        html = inject_payload(&html, payload)?;
        log::debug!("Injected {} bytes into #{}", payload.text.len(), payload.id);
    }
    Ok(html)
}

fn contains_script_close(text: &str) -> bool {
    text.to_ascii_lowercase().contains("</script")
}
