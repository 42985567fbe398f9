//! Error types for the comparison pipeline.
//!
//! This module defines the error types that can occur while preparing an
//! image, running text recognition, or loading configuration. Helper
//! constructors keep error creation consistent across the pipeline.

use thiserror::Error;

/// Errors raised by the comparison pipeline.
///
/// A missing input image is deliberately not represented here: supplying no
/// image is a valid state that yields empty extracted text, so only decode,
/// recognition, and configuration problems surface as errors.
#[derive(Error, Debug)]
pub enum OcrDiffError {
    /// The raw image bytes could not be interpreted as an image.
    #[error("image decode")]
    Decode(#[source] image::ImageError),

    /// Text recognition failed.
    #[error("text extraction failed ({engine}): {context}")]
    Extraction {
        /// Name of the recognition engine that failed.
        engine: String,
        /// What the engine was doing when it failed.
        context: String,
        /// The underlying engine error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A recognition engine could not be constructed.
    #[error("engine initialization failed ({engine})")]
    EngineInit {
        /// Name of the engine that failed to initialize.
        engine: String,
        /// The underlying initialization error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl OcrDiffError {
    /// Creates an extraction error with engine name and context.
    pub fn extraction(
        engine: impl Into<String>,
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Extraction {
            engine: engine.into(),
            context: context.into(),
            source: source.into(),
        }
    }

    /// Creates an engine initialization error.
    pub fn engine_init(
        engine: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::EngineInit {
            engine: engine.into(),
            source: source.into(),
        }
    }

    /// Creates a configuration error from a message.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

/// Convenient result alias for pipeline operations.
pub type DiffResult<T> = Result<T, OcrDiffError>;
