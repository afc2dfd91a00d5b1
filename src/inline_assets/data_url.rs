//! `data:` URL encoding for embedded resources
//!
//! Everything the packer embeds becomes `data:<media type>;base64,<payload>`.
//! Standard base64 with padding is used throughout so browsers and the
//! decoder below agree on the alphabet.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::utils::url_path_extension;

pub const JAVASCRIPT_MEDIA_TYPE: &str = "text/javascript";
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("not a data URL")]
    NotDataUrl,

    #[error("data URL is not base64 encoded")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Encode `data` as a base64 `data:` URL with the given media type
#[must_use]
pub fn encode_data_url(media_type: &str, data: &[u8]) -> String {
    let encoded_capacity = base64::encoded_len(data.len(), true).unwrap_or(0);
    let mut encoded = String::with_capacity(encoded_capacity + 13 + media_type.len());

    encoded.push_str("data:");
    encoded.push_str(media_type);
    encoded.push_str(";base64,");
    STANDARD.encode_string(data, &mut encoded);

    encoded
}

/// Decode a base64 `data:` URL back into (media type, bytes)
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), DataUrlError> {
    let rest = data_url.strip_prefix("data:").ok_or(DataUrlError::NotDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::NotDataUrl)?;
    let media_type = header.strip_suffix(";base64").ok_or(DataUrlError::NotBase64)?;

    Ok((media_type.to_string(), STANDARD.decode(payload)?))
}

/// Media type for a font file, chosen by the extension of its URL path
#[must_use]
pub fn font_media_type(url: &str) -> &'static str {
    match url_path_extension(url).as_deref() {
        Some("woff2") => "font/woff2",
        Some("woff") => "font/woff",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        _ => FALLBACK_MEDIA_TYPE,
    }
}
