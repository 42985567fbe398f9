//! Recognition engine adapters.
//!
//! Each backend implements [`crate::core::TextRecognizer`]. The pipeline
//! itself only depends on the trait, so applications can plug in any
//! engine.

#[cfg(feature = "ocrs")]
pub mod ocrs;

#[cfg(feature = "ocrs")]
pub use ocrs::OcrsRecognizer;
