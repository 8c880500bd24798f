//! Image file loading and saving

use std::path::Path;

use image::DynamicImage;

use crate::io::error::{RearrangeError, Result};

/// Load and decode an image, inferring the format from its content
///
/// # Errors
///
/// Returns [`RearrangeError::ImageLoad`] if the file cannot be opened or
/// decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| RearrangeError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode an image to the format implied by the path's extension
///
/// This is the single write side effect of a rearrangement; it only runs
/// after validation and reassembly have succeeded.
///
/// # Errors
///
/// Returns [`RearrangeError::ImageExport`] if the image cannot be encoded
/// or the file cannot be written.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|source| RearrangeError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
