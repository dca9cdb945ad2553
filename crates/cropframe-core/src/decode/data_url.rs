//! `data:` URL handling.
//!
//! File pickers in the browser hand images over as `data:image/...;base64,...`
//! strings. Only base64 payloads are accepted; percent-encoded payloads never
//! carry binary image data in practice.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{decode_image, DecodeError, DecodedImage};

/// Extract the binary payload of a base64 `data:` URL.
pub fn data_url_bytes(url: &str) -> Result<Vec<u8>, DecodeError> {
    let rest = url
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| DecodeError::InvalidDataUrl("missing data: scheme".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| DecodeError::InvalidDataUrl("missing comma".to_string()))?;

    let is_base64 = header.split(';').any(|p| p.eq_ignore_ascii_case("base64"));
    if !is_base64 {
        return Err(DecodeError::InvalidDataUrl(
            "expected a base64 payload".to_string(),
        ));
    }

    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

/// Decode an image delivered as a base64 `data:` URL.
pub fn decode_data_url(url: &str) -> Result<DecodedImage, DecodeError> {
    let bytes = data_url_bytes(url)?;
    decode_image(&bytes)
}
