//! Error types for the brandsite core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for brandsite.
///
/// Every variant except `Io`, `Toml` and `ConfigCrate` is a configuration
/// defect: it is raised while a brand composition or the site configuration is
/// being constructed, never while rendering.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Two navigation links of one brand share the same target.
    #[error("Duplicate route in {brand}: {target} is linked more than once")]
    DuplicateRoute { brand: String, target: String },

    /// A navigation link points at a section no page of the brand renders.
    #[error("Unknown route in {brand}: {target} does not match any page section")]
    UnknownRoute { brand: String, target: String },

    /// The not-found recovery action does not lead back to the site root.
    #[error("Invalid recovery link in {brand}: expected \"/\", found {href:?}")]
    InvalidRecovery { brand: String, href: String },

    /// Brand identifier that is not one of the known brand sites.
    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a duplicate route error.
    pub fn duplicate_route(brand: impl Into<String>, target: impl Into<String>) -> Self {
        Self::DuplicateRoute {
            brand: brand.into(),
            target: target.into(),
        }
    }

    /// Create an unknown route error.
    pub fn unknown_route(brand: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnknownRoute {
            brand: brand.into(),
            target: target.into(),
        }
    }

    /// Create an invalid recovery error.
    pub fn invalid_recovery(brand: impl Into<String>, href: impl Into<String>) -> Self {
        Self::InvalidRecovery {
            brand: brand.into(),
            href: href.into(),
        }
    }

    /// Whether this error is a configuration defect rather than an I/O or
    /// parsing failure.
    #[must_use]
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::DuplicateRoute { .. }
                | Self::UnknownRoute { .. }
                | Self::InvalidRecovery { .. }
                | Self::UnknownBrand(_)
        )
    }
}
