//! Utility functions for loading and decoding input images.

use crate::core::DiffResult;
use crate::domain::ImageInput;
use image::DynamicImage;
use std::path::Path;

/// Loads an image file into an [`ImageInput`] handle.
///
/// The bytes are not decoded here; decoding (and decode failure) happens
/// during preprocessing.
pub fn load_image(path: impl AsRef<Path>) -> DiffResult<ImageInput> {
    ImageInput::from_path(path)
}

/// Decodes an input handle into pixel data.
///
/// # Errors
///
/// Returns [`crate::core::OcrDiffError::Decode`] if the bytes are not a
/// supported image format.
pub fn decode_image(input: &ImageInput) -> DiffResult<DynamicImage> {
    input.decode()
}
