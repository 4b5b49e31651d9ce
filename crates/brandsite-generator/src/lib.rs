//! Brandsite Generator Library
//!
//! Renders the brand sites and writes them out as static files.
//!
//! # Modules
//!
//! - [`markup`] - Immutable markup tree with queries and HTML serialization
//! - [`components`] - Header, footer and document shell
//! - [`pages`] - Home, about and not-found pages
//! - [`composition`] - Brand composition and route dispatch
//! - [`brands`] - The brand site definitions
//! - [`html`] - Full HTML documents with metadata in the head
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - robots.txt generation
//! - [`build`] - Build orchestration

pub mod brands;
pub mod build;
pub mod components;
pub mod composition;
pub mod html;
pub mod markup;
pub mod pages;
pub mod robots;
pub mod sitemap;

pub use build::{BuildError, BuildStats, Builder};
pub use components::{Document, DocumentShell, Footer, Header};
pub use composition::{BrandComposition, SitePages};
pub use html::HtmlGenerator;
pub use markup::{Element, Node, Tree};
pub use pages::{AboutPage, ContentPage, HomePage, NotFoundPage};
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
