//! Routed content pages.
//!
//! Every page is a plain props struct implementing [`ContentPage`]. Rendering
//! has no inputs beyond the props and no side effects.

use std::fmt;

use brandsite_core::Route;

use crate::markup::{Element, Tree};

pub mod about;
pub mod home;
pub mod not_found;

pub use about::AboutPage;
pub use home::{CallToAction, FeatureSection, Hero, HomePage, Showcase, Stat};
pub use not_found::{NotFoundPage, RecoveryAction};

/// A page addressable by a [`Route`].
pub trait ContentPage: fmt::Debug + Send + Sync {
    /// Route this page is published under.
    fn route(&self) -> Route;

    /// Render the page section.
    fn render(&self) -> Tree;
}

/// Icon, title and description block used by Home features and About values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    /// Decorative icon.
    pub icon: &'static str,
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
    /// Anchor id navigation can target.
    pub anchor: Option<&'static str>,
}

impl FeatureCard {
    /// Create a card without an anchor.
    #[must_use]
    pub const fn new(icon: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
            anchor: None,
        }
    }

    /// Give the card an anchor id.
    #[must_use]
    pub const fn anchored(mut self, anchor: &'static str) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Render the card.
    #[must_use]
    pub fn render(&self) -> Tree {
        Element::new("div")
            .class("feature-card")
            .maybe_id(self.anchor)
            .child(
                Element::new("div")
                    .class("feature-card__icon")
                    .attr("aria-hidden", "true")
                    .text(self.icon),
            )
            .child(Element::new("h3").class("feature-card__title").text(self.title))
            .child(
                Element::new("p")
                    .class("feature-card__description")
                    .text(self.description),
            )
            .into()
    }
}

/// Append an optional heading and a grid of cards to `container`.
pub(crate) fn card_grid(
    container: Element,
    heading: Option<&str>,
    cards: &[FeatureCard],
) -> Element {
    let mut container = container;
    if let Some(heading) = heading {
        container = container.child(Element::new("h2").class("features__title").text(heading));
    }
    container.child(
        Element::new("div")
            .class("features__grid")
            .children(cards.iter().map(FeatureCard::render)),
    )
}
