//! Site configuration management.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    brand::BrandId,
    error::{CoreError, Result},
};

/// Main configuration structure for brandsite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Per-brand site settings, keyed by brand slug (`[sites.damayan]`).
    #[serde(default)]
    pub sites: BTreeMap<String, BrandSiteConfig>,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of a brand site that sets none of its own
    /// (e.g., "https://example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Settings of one brand site.
///
/// Every brand is built into its own directory, which is published as the
/// root of the brand's host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSiteConfig {
    /// Base URL the brand's directory is served at.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated sites.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Brands to build.
    #[serde(default = "default_brands")]
    pub brands: Vec<BrandId>,

    /// Whether to write a sitemap.xml per brand.
    #[serde(default = "default_true")]
    pub sitemap: bool,

    /// Whether to write a robots.txt per brand.
    #[serde(default = "default_true")]
    pub robots: bool,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_brands() -> Vec<BrandId> {
    BrandId::ALL.to_vec()
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            brands: default_brands(),
            sitemap: true,
            robots: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, layering `BRANDSITE__*`
    /// environment variables over the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("BRANDSITE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` (with environment overrides) when it exists,
    /// otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_with_env(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.build.brands.is_empty() {
            return Err(CoreError::config("build.brands cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        for (slug, site) in &self.sites {
            if !BrandId::ALL.iter().any(|brand| brand.slug() == slug) {
                return Err(CoreError::UnknownBrand(format!("sites.{slug}")));
            }

            if let Some(base_url) = &site.base_url {
                if base_url.is_empty() {
                    return Err(CoreError::config(format!(
                        "sites.{slug}.base_url cannot be empty"
                    )));
                }
                if base_url.ends_with('/') {
                    tracing::warn!(brand = %slug, "sites.{slug}.base_url should not have a trailing slash");
                }
            }
        }

        Ok(())
    }

    /// Base URL `brand`'s site is served at, falling back to `site.base_url`.
    #[must_use]
    pub fn base_url_for(&self, brand: BrandId) -> &str {
        self.sites
            .get(brand.slug())
            .and_then(|site| site.base_url.as_deref())
            .unwrap_or(&self.site.base_url)
    }

    /// Get the full URL of `path` on `brand`'s site.
    #[must_use]
    pub fn url_for(&self, brand: BrandId, path: &str) -> String {
        let base = self.base_url_for(brand).trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
