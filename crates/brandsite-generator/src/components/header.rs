//! Page header with brand logo and navigation.

use brandsite_core::NavLink;

use crate::markup::{Element, Tree};

/// Render a single navigation link.
///
/// The `href` is the configured target, unchanged.
#[must_use]
pub fn nav_link(link: &NavLink, class: &str) -> Tree {
    Element::new("a")
        .attr("href", link.target.as_str())
        .class(class)
        .text(link.label.as_str())
        .into()
}

/// Page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    brand: String,
    links: Vec<NavLink>,
}

impl Header {
    /// Create a header for `brand` with links in display order.
    pub fn new(brand: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            brand: brand.into(),
            links,
        }
    }

    /// Brand name shown in the logo.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Navigation links in display order.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Render the header.
    #[must_use]
    pub fn render(&self) -> Tree {
        let nav = Element::new("nav")
            .class("header__nav")
            .attr("aria-label", "Main navigation")
            .children(self.links.iter().map(|link| nav_link(link, "header__link")));

        Element::new("header")
            .class("header")
            .child(
                Element::new("div")
                    .class("header__inner")
                    .child(Element::new("div").class("header__logo").text(self.brand.as_str()))
                    .child(nav),
            )
            .into()
    }
}
