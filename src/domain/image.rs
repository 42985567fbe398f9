//! Image handle types used at the pipeline boundary.

use crate::core::{DiffResult, OcrDiffError};
use image::DynamicImage;
use std::path::Path;
use std::sync::Arc;

/// An opaque, immutable handle to raw encoded image data (PNG, JPEG, ...).
///
/// The handle is cheap to clone and is never mutated by the pipeline;
/// decoding happens during preprocessing, so a handle over bytes that are
/// not a valid image only fails once it is actually processed.
#[derive(Debug, Clone)]
pub struct ImageInput {
    bytes: Arc<[u8]>,
}

impl ImageInput {
    /// Wraps encoded image bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            bytes: Arc::from(bytes),
        }
    }

    /// Reads encoded image bytes from a file.
    pub fn from_path(path: impl AsRef<Path>) -> DiffResult<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns the raw encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decodes the bytes into pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`OcrDiffError::Decode`] if the bytes are not a supported
    /// image format.
    pub fn decode(&self) -> DiffResult<DynamicImage> {
        image::load_from_memory(&self.bytes).map_err(OcrDiffError::Decode)
    }
}

/// A transient grayscale derivative of one input image.
///
/// Created per preprocessing call and consumed immediately by extraction;
/// no identity persists beyond one pipeline run. The empty placeholder
/// stands for "nothing to process" when no input image was supplied.
#[derive(Debug)]
pub struct PreprocessedImage {
    image: Option<DynamicImage>,
}

impl PreprocessedImage {
    /// The placeholder produced when there is no input image.
    pub fn empty() -> Self {
        Self { image: None }
    }

    /// Wraps a grayscale-converted image.
    pub fn new(image: DynamicImage) -> Self {
        Self { image: Some(image) }
    }

    /// Returns true if this is the no-input placeholder.
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }

    /// Returns the underlying image, if any.
    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    /// Returns (width, height), if an image is present.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| (img.width(), img.height()))
    }
}
