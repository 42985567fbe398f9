//! # ocr-diff
//!
//! A Rust library that compares the text content of two images. Each image
//! is preprocessed (unweighted grayscale), handed to a pluggable OCR
//! engine, and the two extracted texts are diffed word by word into a
//! table of per-word membership flags plus aggregate counts.
//!
//! ## Components
//!
//! - **Preprocessor**: decodes an input image and converts it to grayscale
//! - **Extractor**: runs one recognition call per image and trims the output
//! - **Differ**: tokenizes both texts and emits the comparison rows
//!
//! The OCR engine itself is an external collaborator behind the
//! [`core::TextRecognizer`] trait; an adapter for the pure-Rust `ocrs`
//! engine ships behind the `ocrs` feature.
//!
//! ## Modules
//!
//! * [`backends`] - Recognition engine adapters
//! * [`core`] - Error types and the recognizer trait
//! * [`domain`] - Value types (inputs, texts, comparison results)
//! * [`pipeline`] - Orchestration, configuration, scanning state
//! * [`processors`] - Grayscale, tokenization, and the diff itself
//! * [`utils`] - Image loading helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use ocr_diff::prelude::*;
//!
//! struct FixedText(&'static str);
//!
//! impl TextRecognizer for FixedText {
//!     fn name(&self) -> &str {
//!         "fixed"
//!     }
//!
//!     fn recognize(
//!         &self,
//!         _image: &PreprocessedImage,
//!         _language: &LanguageCode,
//!     ) -> DiffResult<String> {
//!         Ok(self.0.to_string())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = OcrDiff::builder(FixedText("hola mundo"))
//!     .language("spa")
//!     .build();
//!
//! // No images chosen yet: a valid, empty comparison.
//! let result = pipeline.compare_images(None, None)?;
//! assert_eq!(result.total_distinct_words, 0);
//!
//! // The differ can also be used directly on already-extracted text.
//! let diff = ocr_diff::processors::compare_texts("cat dog bird", "dog bird fish");
//! assert_eq!(diff.reference_word_count, 3);
//! assert_eq!(diff.common_word_count(), 2);
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod core;
pub mod domain;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use ocr_diff::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{DiffResult, OcrDiffError, TextRecognizer};
    pub use crate::domain::{
        ComparisonResult, ComparisonRow, ExtractedText, ImageInput, LanguageCode,
        PreprocessedImage,
    };
    pub use crate::pipeline::{ConfigLoader, OcrDiff, OcrDiffBuilder, OcrDiffConfig};
    pub use crate::utils::load_image;
}
