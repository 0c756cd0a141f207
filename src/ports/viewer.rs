//! Image viewer port.

use image::DynamicImage;

use crate::error::BannerError;

/// Displays a rendered image to the user. Side effect only.
pub trait ImageViewer {
    /// Show `image`.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::Display`] if the image can't be shown.
    fn display(&self, image: &DynamicImage) -> Result<(), BannerError>;
}
