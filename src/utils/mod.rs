//! Utility functions for images and logging setup.

pub mod image;

pub use image::{decode_image, load_image};

/// Initializes the tracing subscriber for logging.
///
/// Sets up the tracing subscriber with environment filter and formatting
/// layer. Typically called at the start of an application to enable
/// logging; the library itself never installs a subscriber.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
