//! Data transforms of the comparison pipeline.
//!
//! Pure functions with no shared state: grayscale conversion, input
//! preprocessing, tokenization, and the word-level diff.
//!
//! # Modules
//!
//! * `diff` - Word-level comparison of two texts
//! * `grayscale` - Unweighted grayscale conversion
//! * `preprocess` - Decode + grayscale of one input image
//! * `tokenize` - Whitespace tokenization and word sets

pub mod diff;
pub mod grayscale;
pub mod preprocess;
pub mod tokenize;

pub use diff::compare_texts;
pub use grayscale::to_unweighted_gray;
pub use preprocess::preprocess;
pub use tokenize::{WordSet, tokenize};
