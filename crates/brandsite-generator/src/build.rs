//! Build orchestration.
//!
//! Coordinates the full static build of every configured brand site.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use brandsite_core::{BrandId, Config, CoreError, Route};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{brands, html::HtmlGenerator, robots::RobotsGenerator, sitemap::SitemapGenerator};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Brand composition or configuration error.
    #[error("{0}")]
    Core(#[from] CoreError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of brand sites built.
    pub brands: usize,

    /// Number of HTML pages written.
    pub pages: usize,

    /// Number of sitemaps written.
    pub sitemaps: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

impl BuildStats {
    fn merge(mut self, other: Self) -> Self {
        self.brands += other.brands;
        self.pages += other.pages;
        self.sitemaps += other.sitemaps;
        self
    }
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    output_dir: PathBuf,
    html: HtmlGenerator,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
            html: HtmlGenerator::new(),
        }
    }

    /// Use a custom HTML generator.
    #[must_use]
    pub fn with_html_generator(mut self, html: HtmlGenerator) -> Self {
        self.html = html;
        self
    }

    /// Output directory of the build.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Directory a brand site is written to.
    #[must_use]
    pub fn brand_dir(&self, brand: BrandId) -> PathBuf {
        self.output_dir.join(brand.slug())
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            output = %self.output_dir.display(),
            brands = self.config.build.brands.len(),
            "starting build"
        );

        self.clean_output()?;

        let mut stats = self
            .config
            .build
            .brands
            .par_iter()
            .map(|brand| self.build_brand(*brand))
            .try_reduce(BuildStats::default, |a, b| Ok(a.merge(b)))?;

        stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            brands = stats.brands,
            pages = stats.pages,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Rebuild one brand site from scratch.
    ///
    /// Only the brand's own directory is cleaned; other brand sites in the
    /// output directory are left as they are.
    pub fn rebuild_brand(&self, brand: BrandId) -> Result<BuildStats> {
        let start = Instant::now();
        let brand_dir = self.brand_dir(brand);

        if brand_dir.exists() {
            debug!(dir = %brand_dir.display(), "cleaning brand directory");
            fs::remove_dir_all(&brand_dir)?;
        }

        let mut stats = self.build_brand(brand)?;
        stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        Ok(stats)
    }

    /// Build a single brand site into its directory.
    ///
    /// The directory is a self-contained site root: pages link to `/`, and
    /// the sitemap and robots.txt use the brand's own base URL.
    pub fn build_brand(&self, brand: BrandId) -> Result<BuildStats> {
        let composition = brands::composition(brand)?;
        let brand_dir = self.brand_dir(brand);
        fs::create_dir_all(&brand_dir)?;

        let mut stats = BuildStats {
            brands: 1,
            ..BuildStats::default()
        };

        for route in Route::ALL {
            let document = composition.document(route);
            let html = self.html.generate_document(&document);
            let path = output_path(&brand_dir, route);

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html)?;
            debug!(brand = %brand, route = %route, path = %path.display(), "wrote page");
            stats.pages += 1;
        }

        if self.config.build.sitemap {
            let xml = SitemapGenerator::new(&self.config).generate(brand);
            fs::write(brand_dir.join("sitemap.xml"), xml)?;
            stats.sitemaps += 1;
        }

        if self.config.build.robots {
            let robots = RobotsGenerator::new(&self.config).generate(brand);
            fs::write(brand_dir.join("robots.txt"), robots)?;
        }

        info!(brand = %brand, pages = stats.pages, "brand site built");
        Ok(stats)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

/// File a route is written to inside a brand directory.
#[must_use]
pub fn output_path(brand_dir: &Path, route: Route) -> PathBuf {
    let relative = route.path().trim_start_matches('/');

    if relative.is_empty() {
        brand_dir.join("index.html")
    } else if relative.ends_with('/') {
        brand_dir.join(relative).join("index.html")
    } else {
        brand_dir.join(relative)
    }
}
