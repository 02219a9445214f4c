//! Decoded marker image.

use image::{DynamicImage, GenericImageView, RgbImage};

/// A decoded candidate marker image.
#[derive(Debug, Clone)]
pub struct MarkerImage {
    /// Path or label identifying the image.
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Decoded pixel data.
    pub image: DynamicImage,
}

impl MarkerImage {
    /// Wraps a decoded image, reading its dimensions.
    #[must_use]
    pub fn new(path: impl Into<String>, image: DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            width,
            height,
            image,
        }
    }

    /// Converts the pixel data to 8-bit RGB, dropping any alpha channel.
    #[must_use]
    pub fn to_rgb8(&self) -> RgbImage {
        self.image.to_rgb8()
    }
}
