//! Robots.txt generation.

use brandsite_core::{BrandId, Config};

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator<'a> {
    config: &'a Config,
}

impl<'a> RobotsGenerator<'a> {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generate robots.txt for `brand`, pointing crawlers at its sitemap
    /// when one is built. The file sits at the root of the brand's host.
    #[must_use]
    pub fn generate(&self, brand: BrandId) -> String {
        let mut out = String::from("User-agent: *\nAllow: /\n");

        if self.config.build.sitemap {
            let sitemap_url = self.config.url_for(brand, "sitemap.xml");
            out.push_str(&format!("Sitemap: {sitemap_url}\n"));
        }

        out
    }
}
