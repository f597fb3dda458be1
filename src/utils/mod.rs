//! Shared helpers.

pub mod trace;

use base64::Engine;

/// Encode raw image bytes the way the server expects them (plain base64,
/// no data-URL prefix).
pub fn encode_image(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Data URL for an <img> src. The server stores raw bytes; the original
/// front-end always rendered them as PNG, so we do too.
pub fn image_data_url(payload: &str) -> String {
    format!("data:image/png;base64,{}", payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_image_is_plain_base64() {
        assert_eq!(encode_image(b"shoe"), "c2hvZQ==");
        assert_eq!(encode_image(&[]), "");
    }

    #[test]
    fn data_url_carries_the_payload() {
        assert_eq!(image_data_url("c2hvZQ=="), "data:image/png;base64,c2hvZQ==");
    }
}
