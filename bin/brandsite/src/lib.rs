//! Brandsite CLI Library
//!
//! Command implementations for the `brandsite` binary, exposed as a library
//! so they can be tested and reused.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, render, check, serve)
//! - [`server`] - Static preview server
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use brandsite::cmd;
//!
//! // Build every configured brand site
//! cmd::build::run(Path::new("site.toml"), None, &[]).unwrap();
//! ```

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use brandsite_core::{BrandId, Config, Route};
pub use brandsite_generator::{BrandComposition, BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// brandsite::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
