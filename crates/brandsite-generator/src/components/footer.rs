//! Page footer.

use brandsite_core::NavLink;

use super::header::nav_link;
use crate::markup::{Element, Tree};

/// Page footer with a closing statement and an optional notice line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    closing: String,
    links: Vec<NavLink>,
    notice: Option<String>,
}

impl Footer {
    /// Create a footer with only a closing statement.
    pub fn new(closing: impl Into<String>) -> Self {
        Self {
            closing: closing.into(),
            links: Vec::new(),
            notice: None,
        }
    }

    /// Add footer navigation links.
    #[must_use]
    pub fn with_links(mut self, links: Vec<NavLink>) -> Self {
        self.links = links;
        self
    }

    /// Add an informational notice, rendered verbatim once.
    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    /// Closing statement.
    #[must_use]
    pub fn closing(&self) -> &str {
        &self.closing
    }

    /// Footer navigation links.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Informational notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Render the footer.
    #[must_use]
    pub fn render(&self) -> Tree {
        let mut inner = Element::new("div").class("footer__inner");

        if !self.links.is_empty() {
            inner = inner.child(
                Element::new("nav")
                    .class("footer__links")
                    .children(self.links.iter().map(|link| nav_link(link, "footer__link"))),
            );
        }

        inner = inner.child(
            Element::new("p")
                .class("footer__copyright")
                .text(self.closing.as_str()),
        );

        if let Some(notice) = &self.notice {
            inner = inner.child(Element::new("p").class("footer__notice").text(notice.as_str()));
        }

        Element::new("footer").class("footer").child(inner).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_only() {
        let tree = Footer::new("© 2026 HopeCard.").render();
        assert_eq!(tree.count_exact_text("© 2026 HopeCard."), 1);
        assert!(tree.find_by_class("footer__notice").is_empty());
        assert!(tree.links().is_empty());
    }

    #[test]
    fn test_notice_rendered_once() {
        let tree = Footer::new("© 2026 DAMAYAN.")
            .with_notice("Emergency Hotline: 911 | DAMAYAN Helpline: 1-800-DAMAYAN")
            .render();
        assert_eq!(tree.count_text("DAMAYAN Helpline: 1-800-DAMAYAN"), 1);
        assert_eq!(tree.find_by_class("footer__notice").len(), 1);
    }

    #[test]
    fn test_links_keep_targets() {
        let tree = Footer::new("© 2026 BayaniHub.")
            .with_links(vec![NavLink::new("Services", "#services")])
            .render();
        assert_eq!(tree.links(), vec![("Services".to_string(), "#services".to_string())]);
    }
}
