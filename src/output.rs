//! Writing rendered banners to disk.

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::BannerError;

/// Save `image` to `path`, creating any missing parent directories.
///
/// Without an explicit `format`, the format is inferred from the file
/// extension.
///
/// # Errors
///
/// Returns an error if the directories or the file cannot be written, the
/// extension is not a known image format, or encoding fails.
pub fn save_image(image: &DynamicImage, path: &Path, format: Option<ImageFormat>) -> Result<(), BannerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let format = match format {
        Some(format) => format,
        None => ImageFormat::from_path(path).map_err(|_| {
            BannerError::InvalidArgument(format!(
                "Cannot infer image format from '{}'; use a known extension or pass a format",
                path.display()
            ))
        })?,
    };
    log::debug!("Writing {} as {format:?}", path.display());

    image.save_with_format(path, format)?;
    Ok(())
}
