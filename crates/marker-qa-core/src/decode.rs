//! Decoding raw image bytes into marker images.

use thiserror::Error;
use tracing::debug;

use crate::domain::MarkerImage;

/// Image data could not be parsed into a pixel grid.
#[derive(Debug, Error)]
#[error("could not decode image {label}")]
pub struct DecodeError {
    label: String,
    #[source]
    source: image::ImageError,
}

impl DecodeError {
    /// Returns the path or label of the image that failed to decode.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Decodes raw image bytes, guessing the format from their content.
///
/// # Errors
///
/// Returns [`DecodeError`] for corrupt data or an unsupported format.
pub fn decode_marker(label: impl Into<String>, bytes: &[u8]) -> Result<MarkerImage, DecodeError> {
    let label = label.into();
    match image::load_from_memory(bytes) {
        Ok(image) => {
            let marker = MarkerImage::new(label, image);
            debug!(
                "Decoded {} ({}x{})",
                marker.path, marker.width, marker.height
            );
            Ok(marker)
        }
        Err(source) => Err(DecodeError { label, source }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::new_rgb8(width, height);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png)
            .expect("encode png");
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let marker = decode_marker("marker.png", &png_bytes(300, 200)).expect("decode");
        assert_eq!(marker.width, 300);
        assert_eq!(marker.height, 200);
        assert_eq!(marker.path, "marker.png");
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode_marker("notes.txt", b"definitely not an image").unwrap_err();
        assert_eq!(err.label(), "notes.txt");
        assert!(err.to_string().contains("notes.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let bytes = png_bytes(64, 64);
        let truncated = &bytes[..bytes.len() / 2];
        assert!(decode_marker("cut.png", truncated).is_err());
    }

    #[test]
    fn test_empty_input_is_decode_error() {
        assert!(decode_marker("empty", &[]).is_err());
    }
}
