//! Image source port for loading candidate markers.

use crate::domain::MarkerImage;

/// Port for loading marker images from a source.
pub trait ImageSource: Send + Sync {
    /// Returns an iterator over images from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if an image fails to load or decode.
    fn images(&self) -> Box<dyn Iterator<Item = anyhow::Result<MarkerImage>> + Send + '_>;

    /// Returns the total number of images, if known.
    fn count_hint(&self) -> Option<usize>;
}
