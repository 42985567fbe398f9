//! Text-related domain types: language codes and extraction results.

use serde::{Deserialize, Serialize};

/// Language code passed to the recognition engine (e.g., "spa", "eng").
///
/// The pipeline treats the code as opaque; it is forwarded to the engine
/// untouched. The default is Spanish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Creates a language code from any string-like value.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self("spa".to_string())
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// The outcome of one text extraction attempt.
///
/// Distinguishes "no image was supplied" from "the engine found no text";
/// both map to an empty string for comparison purposes, but callers that
/// drive partial states (only one image chosen yet) can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractedText {
    /// No input image was supplied; extraction was not attempted.
    NoInput,
    /// Extraction ran but recognized no text.
    Empty,
    /// Trimmed recognized text.
    Text(String),
}

impl ExtractedText {
    /// Classifies raw engine output, trimming surrounding whitespace.
    pub fn from_recognized(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    /// Returns the text for comparison; `NoInput` and `Empty` both read as "".
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoInput | Self::Empty => "",
            Self::Text(text) => text,
        }
    }

    /// Returns true if no input image was supplied.
    pub fn is_no_input(&self) -> bool {
        matches!(self, Self::NoInput)
    }
}
