//! The image-comparison pipeline.
//!
//! Orchestrates preprocessing, text extraction, and the word-level diff:
//! caller supplies two optional images, the pipeline extracts text from
//! each (concurrently when configured) and returns a structured
//! [`crate::domain::ComparisonResult`].

mod compare;
pub mod config;
mod extract;
pub mod scan;

pub use compare::{OcrDiff, OcrDiffBuilder};
pub use config::{ConfigFormat, ConfigLoader, OcrDiffConfig};
pub use extract::TextExtractor;
pub use scan::{ScanGuard, ScanState};
