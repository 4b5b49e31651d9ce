//! Fallback page for unmatched routes.

use brandsite_core::Route;
use tracing::debug;

use super::ContentPage;
use crate::markup::{Element, Tree};

/// Destination every recovery action must use.
pub const ROOT_HREF: &str = "/";

/// The single way out of the not-found page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryAction {
    /// Visible label. Without one the page message becomes the link text.
    pub label: Option<&'static str>,
    pub href: &'static str,
}

impl RecoveryAction {
    /// Recovery action leading to the site root.
    #[must_use]
    pub const fn home(label: Option<&'static str>) -> Self {
        Self {
            label,
            href: ROOT_HREF,
        }
    }

    /// Whether the action resolves to the site root.
    #[must_use]
    pub fn leads_home(&self) -> bool {
        self.href == ROOT_HREF
    }
}

/// Not-found page props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundPage {
    /// Status indicator.
    pub code: &'static str,
    pub message: &'static str,
    pub recovery: RecoveryAction,
}

impl NotFoundPage {
    /// A `404` page with the given message and recovery action.
    #[must_use]
    pub const fn new(message: &'static str, recovery: RecoveryAction) -> Self {
        Self {
            code: "404",
            message,
            recovery,
        }
    }
}

impl ContentPage for NotFoundPage {
    fn route(&self) -> Route {
        Route::NotFound
    }

    fn render(&self) -> Tree {
        debug!(code = self.code, "rendering not-found page");

        let link = Element::new("a")
            .class("not-found__action")
            .attr("href", self.recovery.href);

        let page = Element::new("div")
            .class("not-found")
            .child(Element::new("h1").class("not-found__code").text(self.code));

        let page = match self.recovery.label {
            Some(label) => page
                .child(Element::new("p").class("not-found__message").text(self.message))
                .child(link.text(label)),
            None => page.child(
                Element::new("p")
                    .class("not-found__message")
                    .child(link.text(self.message)),
            ),
        };

        page.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_recovery() {
        let page = NotFoundPage::new(
            "Page not found. The resource you are looking for does not exist.",
            RecoveryAction::home(Some("Go Home")),
        );
        let tree = page.render();
        assert_eq!(tree.links(), vec![("Go Home".to_string(), "/".to_string())]);
        assert_eq!(tree.count_exact_text("404"), 1);
    }

    #[test]
    fn test_unlabeled_recovery_wraps_message() {
        let message = "Sorry, the page you are looking for does not exist.";
        let page = NotFoundPage::new(message, RecoveryAction::home(None));
        let tree = page.render();
        assert_eq!(tree.links(), vec![(message.to_string(), "/".to_string())]);
        assert_eq!(tree.count_text(message), 1);
    }

    #[test]
    fn test_leads_home() {
        assert!(RecoveryAction::home(None).leads_home());
        let elsewhere = RecoveryAction {
            label: Some("Back"),
            href: "#home",
        };
        assert!(!elsewhere.leads_home());
    }
}
