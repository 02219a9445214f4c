//! Synthetic marker builders for testing.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use marker_qa_core::MarkerImage;

/// Builder for synthetic candidate markers with known contrast properties.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    // === Flat Images ===

    /// Creates a single-colour image (zero vertical contrast).
    #[must_use]
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> MarkerImage {
        let img = RgbImage::from_fn(width, height, |_, _| Rgb(rgb));
        MarkerImage::new("synthetic://solid", DynamicImage::ImageRgb8(img))
    }

    /// Creates a uniform gray image.
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> MarkerImage {
        let img = GrayImage::from_fn(width, height, |_, _| Luma([value]));
        MarkerImage::new("synthetic://uniform_gray", DynamicImage::ImageLuma8(img))
    }

    // === Striped Images ===

    /// Creates one-pixel black and white rows, starting with black.
    ///
    /// Every pixel below the first row differs by 255 from the pixel above.
    #[must_use]
    pub fn alternating_rows(width: u32, height: u32) -> MarkerImage {
        Self::horizontal_bars(width, height, 1)
    }

    /// Creates black and white horizontal bars of the given height.
    #[must_use]
    pub fn horizontal_bars(width: u32, height: u32, bar_height: u32) -> MarkerImage {
        let bar_height = bar_height.max(1);
        let img = GrayImage::from_fn(width, height, |_, y| {
            if (y / bar_height) % 2 == 0 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });
        MarkerImage::new("synthetic://horizontal_bars", DynamicImage::ImageLuma8(img))
    }

    /// Creates black and white vertical bars (no vertical contrast at all).
    #[must_use]
    pub fn vertical_bars(width: u32, height: u32, bar_width: u32) -> MarkerImage {
        let bar_width = bar_width.max(1);
        let img = GrayImage::from_fn(width, height, |x, _| {
            if (x / bar_width) % 2 == 0 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });
        MarkerImage::new("synthetic://vertical_bars", DynamicImage::ImageLuma8(img))
    }

    /// Creates a black and white checkerboard with square cells.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell_size: u32) -> MarkerImage {
        let cell_size = cell_size.max(1);
        let img = GrayImage::from_fn(width, height, |x, y| {
            if (x / cell_size + y / cell_size) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        MarkerImage::new("synthetic://checkerboard", DynamicImage::ImageLuma8(img))
    }

    /// Creates a smooth top-to-bottom gradient from black to white.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn vertical_gradient(width: u32, height: u32) -> MarkerImage {
        let img = GrayImage::from_fn(width, height, |_, y| {
            let val = ((u32::from(u8::MAX) * y) / height.max(1)) as u8;
            Luma([val])
        });
        MarkerImage::new("synthetic://vertical_gradient", DynamicImage::ImageLuma8(img))
    }

    // === Standard Markers ===

    /// Returns a marker expected to pass every check (512x512 stripes).
    #[must_use]
    pub fn good_marker() -> MarkerImage {
        Self::horizontal_bars(512, 512, 4)
    }

    /// Returns a marker expected to fail only the contrast check.
    #[must_use]
    pub fn flat_marker() -> MarkerImage {
        Self::uniform_gray(512, 512, 128)
    }
}

/// Encodes a marker image into the given container format.
///
/// # Panics
///
/// Panics if encoding fails, which only happens for formats the `image`
/// crate cannot write.
#[must_use]
#[allow(clippy::expect_used)]
pub fn encode(marker: &MarkerImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    marker
        .image
        .write_to(&mut buf, format)
        .expect("synthetic image should encode");
    buf.into_inner()
}
