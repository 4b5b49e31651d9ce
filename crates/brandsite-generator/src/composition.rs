//! Brand composition: header, routed pages, footer and metadata.
//!
//! A [`BrandComposition`] is validated once when it is built. After that every
//! render is infallible.

use brandsite_core::{BrandId, CoreError, PageAnchors, PageMetadata, Result, Route, validate_targets};
use tracing::debug;

use crate::{
    components::{Document, DocumentShell, Footer, Header},
    markup::{Node, Tree},
    pages::{AboutPage, ContentPage, HomePage, NotFoundPage},
};

/// The routed pages of one brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePages {
    pub home: HomePage,
    pub about: AboutPage,
    pub not_found: NotFoundPage,
}

/// Everything one brand site is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandComposition {
    brand: BrandId,
    metadata: PageMetadata,
    header: Header,
    pages: SitePages,
    footer: Footer,
}

impl BrandComposition {
    /// Assemble and validate a brand composition.
    ///
    /// # Errors
    ///
    /// Returns a configuration defect when a header or footer link target is
    /// duplicated or does not resolve from every published page, or when the
    /// not-found recovery action does not lead to the site root.
    pub fn new(
        brand: BrandId,
        metadata: PageMetadata,
        header: Header,
        pages: SitePages,
        footer: Footer,
    ) -> Result<Self> {
        let composition = Self {
            brand,
            metadata,
            header,
            pages,
            footer,
        };
        composition.validate()?;

        debug!(brand = %brand, "brand composition assembled");
        Ok(composition)
    }

    fn validate(&self) -> Result<()> {
        let name = self.brand.display_name();
        let anchors = self.page_anchors();

        // Header and footer appear on every page, so each link must resolve
        // from each of them.
        for route in Route::ALL {
            validate_targets(name, self.header.links(), route, &anchors)?;
            validate_targets(name, self.footer.links(), route, &anchors)?;
        }

        let recovery = &self.pages.not_found.recovery;
        if !recovery.leads_home() {
            return Err(CoreError::invalid_recovery(name, recovery.href));
        }

        Ok(())
    }

    /// Anchor ids rendered in each published page, header and footer
    /// included.
    #[must_use]
    pub fn page_anchors(&self) -> PageAnchors {
        Route::ALL
            .into_iter()
            .map(|route| {
                let tree = self.compose_page(route);
                let ids = tree.ids().into_iter().map(str::to_string).collect();
                (route, ids)
            })
            .collect()
    }

    /// Brand identifier.
    #[must_use]
    pub fn brand(&self) -> BrandId {
        self.brand
    }

    /// Document metadata.
    #[must_use]
    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    /// Page header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Page footer.
    #[must_use]
    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Routed pages.
    #[must_use]
    pub fn pages(&self) -> &SitePages {
        &self.pages
    }

    /// The page published under `route`.
    #[must_use]
    pub fn page(&self, route: Route) -> &dyn ContentPage {
        match route {
            Route::Home => &self.pages.home,
            Route::About => &self.pages.about,
            Route::NotFound => &self.pages.not_found,
        }
    }

    /// Header, home page and footer as one tree.
    #[must_use]
    pub fn compose(&self) -> Tree {
        self.compose_page(Route::Home)
    }

    /// Header, the page `key` resolves to, and footer as one tree.
    ///
    /// Keys that match no page render the not-found page.
    #[must_use]
    pub fn compose_route(&self, key: &str) -> Tree {
        let route = Route::resolve(key);
        debug!(brand = %self.brand, key, route = %route, "dispatching route");
        self.compose_page(route)
    }

    /// Header, the page for `route`, and footer as one tree.
    #[must_use]
    pub fn compose_page(&self, route: Route) -> Tree {
        Node::fragment([
            self.header.render(),
            self.page(route).render(),
            self.footer.render(),
        ])
    }

    /// Document shell carrying this brand's metadata.
    #[must_use]
    pub fn shell(&self) -> DocumentShell {
        DocumentShell::new(self.metadata.clone())
    }

    /// Full document for `route`.
    #[must_use]
    pub fn document(&self, route: Route) -> Document {
        self.shell().wrap(self.compose_page(route))
    }
}
