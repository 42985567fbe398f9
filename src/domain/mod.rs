//! Domain value types shared across the pipeline.
//!
//! # Modules
//!
//! * `comparison` - Word-level comparison rows and aggregate counts
//! * `image` - Input image handles and preprocessed derivatives
//! * `text` - Language codes and extraction results

pub mod comparison;
pub mod image;
pub mod text;

pub use comparison::{ComparisonResult, ComparisonRow};
pub use image::{ImageInput, PreprocessedImage};
pub use text::{ExtractedText, LanguageCode};
