//! Core error handling and the recognition engine trait.

pub mod errors;
pub mod traits;

pub use errors::{DiffResult, OcrDiffError};
pub use traits::TextRecognizer;
