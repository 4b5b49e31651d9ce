//! Landing page.

use brandsite_core::Route;
use tracing::debug;

use super::{ContentPage, FeatureCard, card_grid};
use crate::markup::{Element, Tree};

/// Primary hero block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub anchor: Option<&'static str>,
    /// Label of the hero call-to-action button.
    pub cta: Option<&'static str>,
}

/// Feature descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSection {
    pub heading: Option<&'static str>,
    pub anchor: Option<&'static str>,
    pub cards: Vec<FeatureCard>,
}

/// A headline number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

impl Stat {
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// A preview of a sample artifact, such as an aid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    pub heading: &'static str,
    pub anchor: Option<&'static str>,
    pub card_title: &'static str,
    pub lines: Vec<&'static str>,
}

/// Closing call-to-action section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub heading: &'static str,
    pub text: Option<&'static str>,
    pub button: &'static str,
    pub anchor: Option<&'static str>,
}

/// Landing page props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    /// Anchor id on the page wrapper.
    pub anchor: Option<&'static str>,
    /// Status banner shown above the hero.
    pub banner: Option<&'static str>,
    pub hero: Hero,
    pub features: FeatureSection,
    pub stats: Vec<Stat>,
    pub showcase: Option<Showcase>,
    pub cta: CallToAction,
}

impl HomePage {
    /// Declared feature titles, in order.
    #[must_use]
    pub fn feature_titles(&self) -> Vec<&'static str> {
        self.features.cards.iter().map(|card| card.title).collect()
    }

    /// Declared call-to-action triggers, in order.
    #[must_use]
    pub fn cta_triggers(&self) -> Vec<&'static str> {
        self.hero.cta.into_iter().chain([self.cta.button]).collect()
    }

    fn render_hero(&self) -> Element {
        let hero = &self.hero;
        let mut section = Element::new("section")
            .class("hero")
            .maybe_id(hero.anchor)
            .child(Element::new("h1").class("hero__title").text(hero.title))
            .child(Element::new("p").class("hero__subtitle").text(hero.subtitle));

        if let Some(label) = hero.cta {
            section = section.child(
                Element::new("button")
                    .class("hero__cta")
                    .attr("type", "button")
                    .text(label),
            );
        }
        section
    }

    fn render_stats(&self) -> Element {
        let stats = self.stats.iter().map(|stat| {
            Element::new("div")
                .class("stat")
                .child(Element::new("h3").class("stat__value").text(stat.value))
                .child(Element::new("p").class("stat__label").text(stat.label))
        });

        Element::new("section")
            .class("stats")
            .child(Element::new("div").class("stats__grid").children(stats))
    }

    fn render_cta(&self) -> Element {
        let cta = &self.cta;
        let mut section = Element::new("section")
            .class("cta-section")
            .maybe_id(cta.anchor)
            .child(Element::new("h2").class("cta-section__title").text(cta.heading));

        if let Some(text) = cta.text {
            section = section.child(Element::new("p").class("cta-section__text").text(text));
        }

        section.child(
            Element::new("button")
                .class("cta-section__button")
                .attr("type", "button")
                .text(cta.button),
        )
    }
}

fn render_showcase(showcase: &Showcase) -> Element {
    let card = Element::new("div")
        .class("sample-card")
        .child(Element::new("h3").class("sample-card__title").text(showcase.card_title))
        .children(
            showcase
                .lines
                .iter()
                .map(|line| Element::new("p").class("sample-card__line").text(*line)),
        );

    Element::new("section")
        .class("showcase")
        .maybe_id(showcase.anchor)
        .child(Element::new("h2").class("showcase__title").text(showcase.heading))
        .child(card)
}

impl ContentPage for HomePage {
    fn route(&self) -> Route {
        Route::Home
    }

    fn render(&self) -> Tree {
        debug!(hero = self.hero.title, "rendering home page");

        let mut page = Element::new("div").class("home").maybe_id(self.anchor);

        if let Some(banner) = self.banner {
            page = page.child(
                Element::new("div")
                    .class("status-banner")
                    .attr("role", "status")
                    .text(banner),
            );
        }

        page = page.child(self.render_hero());

        page = page.child(card_grid(
            Element::new("section")
                .class("features")
                .maybe_id(self.features.anchor),
            self.features.heading,
            &self.features.cards,
        ));

        if !self.stats.is_empty() {
            page = page.child(self.render_stats());
        }

        if let Some(showcase) = &self.showcase {
            page = page.child(render_showcase(showcase));
        }

        page.child(self.render_cta()).into()
    }
}
