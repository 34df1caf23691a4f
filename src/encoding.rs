//! Base64 helpers and slice membership.

use base64::{Engine as _, engine::general_purpose};

use crate::error::Result;

/// Encode the UTF-8 bytes of `text` as standard, padded Base64.
pub fn encode_base64(text: &str) -> String {
    general_purpose::STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64, returning the raw bytes.
pub fn try_decode_base64(text: &str) -> Result<Vec<u8>> {
    Ok(general_purpose::STANDARD.decode(text)?)
}

/// Decode standard Base64 into a string.
///
/// Returns an empty string when `text` is not valid Base64. Bytes that are
/// not UTF-8 are replaced with U+FFFD.
pub fn decode_base64(text: &str) -> String {
    match try_decode_base64(text) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::debug!("Base64 decode failed: {e}");
            String::new()
        }
    }
}

/// Whether `item` occurs in `slice`.
pub fn item_exists<T: PartialEq>(slice: &[T], item: &T) -> bool {
    slice.iter().any(|element| element == item)
}
