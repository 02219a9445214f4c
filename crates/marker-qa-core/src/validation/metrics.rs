//! Brightness and vertical contrast statistics.

use image::RgbImage;

use crate::domain::MarkerMetrics;

/// Mean of the red, green and blue channels.
fn brightness(pixel: &image::Rgb<u8>) -> f64 {
    let [r, g, b] = pixel.0;
    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
}

impl MarkerMetrics {
    /// Computes contrast statistics for an RGB image.
    ///
    /// Each pixel is compared only with the pixel one row above it. First-row
    /// pixels contribute no contrast but still count toward the averages.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_rgb(image: &RgbImage, edge_threshold: f64) -> Self {
        let (width, height) = image.dimensions();
        let row = width as usize;

        let values: Vec<f64> = image.pixels().map(brightness).collect();
        let pixel_count = values.len() as u64;

        let mut total_contrast = 0.0;
        let mut edge_count = 0u64;
        let below_first_row = values.get(row..).unwrap_or(&[]);
        for (current, above) in below_first_row.iter().zip(&values) {
            let contrast = (current - above).abs();
            total_contrast += contrast;
            if contrast > edge_threshold {
                edge_count += 1;
            }
        }

        let (avg_contrast, edge_density) = if pixel_count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_contrast / pixel_count as f64,
                edge_count as f64 / pixel_count as f64,
            )
        };

        let aspect_ratio = if height == 0 {
            0.0
        } else {
            f64::from(width) / f64::from(height)
        };

        Self {
            width,
            height,
            pixel_count,
            total_contrast,
            edge_count,
            avg_contrast,
            edge_density,
            aspect_ratio,
        }
    }
}
