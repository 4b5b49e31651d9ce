//! Mission and values page.

use brandsite_core::Route;
use tracing::debug;

use super::{ContentPage, FeatureCard, card_grid};
use crate::markup::{Element, Tree};

/// About page props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutPage {
    /// Anchor id of the page section.
    pub anchor: &'static str,
    pub title: &'static str,
    /// Mission copy, one entry per paragraph.
    pub intro: Vec<&'static str>,
    /// Heading above the value blocks.
    pub blocks_heading: Option<&'static str>,
    /// Labeled value blocks.
    pub blocks: Vec<FeatureCard>,
}

impl AboutPage {
    /// Labels of the value blocks, in order.
    #[must_use]
    pub fn block_labels(&self) -> Vec<&'static str> {
        self.blocks.iter().map(|block| block.title).collect()
    }
}

impl ContentPage for AboutPage {
    fn route(&self) -> Route {
        Route::About
    }

    fn render(&self) -> Tree {
        debug!(title = self.title, "rendering about page");

        let mut section = Element::new("section")
            .class("about")
            .id(self.anchor)
            .child(Element::new("h1").class("about__title").text(self.title))
            .children(
                self.intro
                    .iter()
                    .map(|paragraph| Element::new("p").class("about__text").text(*paragraph)),
            );

        if !self.blocks.is_empty() {
            section = section.child(card_grid(
                Element::new("div").class("about__values"),
                self.blocks_heading,
                &self.blocks,
            ));
        }

        section.into()
    }
}
