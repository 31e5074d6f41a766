//! Compact URL-safe share encoding for configurations
//!
//! The JSON document is encoded with unpadded URL-safe base64 so it can ride
//! inside a single query parameter. Decoding reverses the encoding and then
//! applies the same acceptance gate as a file import, so a tampered or
//! truncated link rejects cleanly without touching existing state.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::io::error::{Result, invalid_format};
use crate::io::persistence::parse_config;
use crate::model::config::FractalConfig;

/// Encode a configuration as a URL-safe share string
///
/// Uses the compact JSON form so the payload stays short enough for a
/// query parameter.
///
/// # Errors
///
/// Returns an error if the configuration fails JSON serialization.
pub fn encode_share(config: &FractalConfig) -> Result<String> {
    let json = serde_json::to_string(config)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Decode a share string back into a configuration
///
/// # Errors
///
/// Returns an invalid-format error if the string is not valid URL-safe
/// base64, is not UTF-8, or does not decode to an acceptable configuration
/// document.
pub fn decode_share(share: &str) -> Result<FractalConfig> {
    let bytes = URL_SAFE_NO_PAD.decode(share.trim())?;
    let json = String::from_utf8(bytes)
        .map_err(|e| invalid_format(&format!("share payload is not valid UTF-8: {e}")))?;
    parse_config(&json)
}
