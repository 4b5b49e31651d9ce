//! Sitemap generation.
//!
//! Generates one XML sitemap per brand site. Each brand directory is the
//! root of its own host, so page paths go directly under the brand's base URL.

use brandsite_core::{BrandId, Config, Route};
use tracing::debug;

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    /// URL location.
    pub loc: String,

    /// Change frequency.
    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator<'a> {
    config: &'a Config,
}

impl<'a> SitemapGenerator<'a> {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Sitemap entries for every addressable page of `brand`.
    ///
    /// The not-found page is never listed.
    #[must_use]
    pub fn urls(&self, brand: BrandId) -> Vec<SitemapUrl> {
        Route::ALL
            .into_iter()
            .filter_map(|route| {
                let (changefreq, priority) = match route {
                    Route::Home => (ChangeFreq::Weekly, 1.0),
                    Route::About => (ChangeFreq::Yearly, 0.5),
                    Route::NotFound => return None,
                };
                Some(SitemapUrl {
                    loc: self.brand_url(brand, route),
                    changefreq,
                    priority,
                })
            })
            .collect()
    }

    /// Public URL of `route` on `brand`'s site.
    #[must_use]
    pub fn brand_url(&self, brand: BrandId, route: Route) -> String {
        self.config.url_for(brand, route.path())
    }

    /// Generate sitemap XML for `brand`.
    #[must_use]
    pub fn generate(&self, brand: BrandId) -> String {
        let urls = self.urls(brand);
        debug!(brand = %brand, count = urls.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for url in &urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                url.changefreq.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use brandsite_core::config::{BrandSiteConfig, SiteConfig};

    use super::*;

    fn config() -> Config {
        Config {
            site: SiteConfig {
                base_url: "https://sites.example.ph".to_string(),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_urls_skip_not_found() {
        let config = config();
        let urls = SitemapGenerator::new(&config).urls(BrandId::Damayan);
        let locs: Vec<_> = urls.iter().map(|u| u.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://sites.example.ph/",
                "https://sites.example.ph/about/"
            ]
        );
    }

    #[test]
    fn test_urls_use_brand_base_url() {
        let mut config = config();
        config.sites.insert(
            "damayan".to_string(),
            BrandSiteConfig {
                base_url: Some("https://damayan.example.ph".to_string()),
            },
        );

        let generator = SitemapGenerator::new(&config);
        assert_eq!(
            generator.brand_url(BrandId::Damayan, Route::About),
            "https://damayan.example.ph/about/"
        );
        assert_eq!(
            generator.brand_url(BrandId::HopeCard, Route::Home),
            "https://sites.example.ph/"
        );
    }

    #[test]
    fn test_generate_xml() {
        let config = config();
        let xml = SitemapGenerator::new(&config).generate(BrandId::HopeCard);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<loc>https://sites.example.ph/</loc>"));
        assert!(xml.contains("<loc>https://sites.example.ph/about/</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>yearly</changefreq>"));
        assert!(!xml.contains("404"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
