//! Core trait for pluggable text recognition engines.

use crate::core::DiffResult;
use crate::domain::{LanguageCode, PreprocessedImage};

/// The external text recognition capability consumed by the pipeline.
///
/// Implementations wrap a concrete OCR engine. The pipeline hands them a
/// preprocessed (grayscale) image and the language to recognize, and expects
/// the raw recognized text back. Engines are free to impose their own
/// timeouts or internal retries; the pipeline itself never retries.
///
/// Implementations must be thread safe: when parallel extraction is enabled
/// the same recognizer serves both images concurrently.
pub trait TextRecognizer: Send + Sync {
    /// Returns the engine identifier (e.g., "ocrs").
    fn name(&self) -> &str;

    /// Recognizes text in the given preprocessed image.
    ///
    /// The returned string is used as-is apart from whitespace trimming,
    /// which the extractor applies. Returning an empty string is the normal
    /// way to report "no text found".
    fn recognize(&self, image: &PreprocessedImage, language: &LanguageCode) -> DiffResult<String>;
}
