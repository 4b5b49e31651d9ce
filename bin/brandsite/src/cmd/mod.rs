//! Command implementations.

use std::path::Path;

use brandsite_core::Config;
use color_eyre::eyre::{Result, WrapErr};

pub mod build;
pub mod check;
pub mod render;
pub mod serve;

/// Load the site configuration, falling back to defaults when the file does
/// not exist.
pub fn load_config(config_path: &Path) -> Result<Config> {
    Config::load_or_default(config_path)
        .wrap_err_with(|| format!("Failed to load configuration from {}", config_path.display()))
}
