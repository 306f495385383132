//! Request image handling.
//!
//! Bodies carry the image as base64; the inference API wants raw bytes
//! plus a mime type on its inline data, so the bytes are sniffed from
//! their magic numbers before the outbound call.

use base64::{engine::general_purpose::STANDARD, Engine};
use image::ImageFormat;

/// Decode the base64 `image` field of a request body.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded.trim())
}

/// Sniff the media type from magic bytes.
///
/// Restricted to the formats the inference API accepts as inline image
/// data; anything else is treated as not-an-image.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Bmp => Some("image/bmp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine};

    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn test_decode_round_trip() {
        let encoded = STANDARD.encode(PNG_MAGIC);
        assert_eq!(decode_image(&encoded).unwrap(), PNG_MAGIC);
    }

    #[test]
    fn test_decode_tolerates_surrounding_whitespace() {
        let encoded = format!("  {}\n", STANDARD.encode(JPEG_MAGIC));
        assert_eq!(decode_image(&encoded).unwrap(), JPEG_MAGIC);
    }

    #[test]
    fn test_decode_rejects_non_base64() {
        assert!(decode_image("!!!not-base64!!!").is_err());
    }

    #[test]
    fn test_sniff_png() {
        assert_eq!(sniff_mime(PNG_MAGIC), Some("image/png"));
    }

    #[test]
    fn test_sniff_jpeg() {
        assert_eq!(sniff_mime(JPEG_MAGIC), Some("image/jpeg"));
    }

    #[test]
    fn test_sniff_rejects_arbitrary_bytes() {
        assert_eq!(sniff_mime(b"definitely not an image"), None);
        assert_eq!(sniff_mime(&[]), None);
    }
}
