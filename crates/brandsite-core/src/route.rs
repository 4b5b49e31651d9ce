//! Route keys, navigation links and page routes.
//!
//! A [`RouteKey`] is the raw destination a link emits (`#home`, `/`,
//! `/#services`). A [`Route`] is one of the routed pages a brand site can
//! render.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Opaque identifier of a navigable section, in fragment or path form.
///
/// The string is stored and emitted exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteKey(String);

impl RouteKey {
    /// Create a route key from its raw destination string.
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    /// Route key for the site root.
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// The destination string as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into the page path and the anchor id.
    ///
    /// `/#support` gives `("/", Some("support"))`, `#about` gives
    /// `("", Some("about"))` and `/about/` gives `("/about/", None)`.
    #[must_use]
    pub fn split(&self) -> (&str, Option<&str>) {
        match self.0.split_once('#') {
            Some((path, id)) => (path, Some(id).filter(|id| !id.is_empty())),
            None => (self.0.as_str(), None),
        }
    }

    /// The anchor id, if the key has one (`/#about` gives `about`).
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.split().1
    }

    /// Whether the key addresses the site root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteKey {
    fn from(target: &str) -> Self {
        Self::new(target)
    }
}

/// A single labeled anchor reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible link text.
    pub label: String,

    /// Destination, emitted verbatim as the `href`.
    pub target: RouteKey,
}

impl NavLink {
    /// Create a navigation link.
    pub fn new(label: impl Into<String>, target: impl Into<RouteKey>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// The closed set of routed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Landing page.
    Home,
    /// Mission and values page.
    About,
    /// Fallback for every unmatched key.
    NotFound,
}

impl Route {
    /// Every route, in output order.
    pub const ALL: [Route; 3] = [Route::Home, Route::About, Route::NotFound];

    /// Stable key naming the route.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::NotFound => "not-found",
        }
    }

    /// Path the page is published under, relative to the brand root.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about/",
            Self::NotFound => "/404.html",
        }
    }

    /// Match a page path exactly. Only addressable pages match.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/about" | "/about/" => Some(Self::About),
            _ => None,
        }
    }

    /// Resolve any route key form to a page, falling back to
    /// [`Route::NotFound`] when nothing matches.
    ///
    /// A key with a path resolves by its path (`/#services` is Home). A bare
    /// fragment is read as a hash route (`#about` is About).
    #[must_use]
    pub fn resolve(key: &str) -> Self {
        let key = key.trim();
        let name = match key.split_once('#') {
            Some(("", fragment)) => fragment,
            Some((path, _)) => path,
            None => key,
        }
        .trim_matches('/');

        match name {
            "" | "home" => Self::Home,
            "about" => Self::About,
            _ => Self::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Anchor ids rendered in each published page of a brand.
pub type PageAnchors = HashMap<Route, HashSet<String>>;

/// Check one navigation set of a brand as it appears on the `current` page.
///
/// Each target must be unique within `links`. A bare fragment (`#id`) must
/// name an anchor rendered on `current` itself. Any other target must be the
/// path of an addressable page, optionally followed by an anchor rendered on
/// that page (`/#services`).
pub fn validate_targets(
    brand: &str,
    links: &[NavLink],
    current: Route,
    anchors: &PageAnchors,
) -> Result<()> {
    let mut seen = HashSet::with_capacity(links.len());

    for link in links {
        let target = link.target.as_str();
        if !seen.insert(target) {
            return Err(CoreError::duplicate_route(brand, target));
        }

        let (path, fragment) = link.target.split();
        let page = if path.is_empty() {
            Some(current)
        } else {
            Route::from_path(path)
        };

        let known = match (page, fragment) {
            (Some(page), Some(id)) => anchors.get(&page).is_some_and(|ids| ids.contains(id)),
            (Some(_), None) => !path.is_empty(),
            (None, _) => false,
        };
        if !known {
            return Err(CoreError::unknown_route(brand, target));
        }
    }

    tracing::trace!(brand, %current, links = links.len(), "navigation targets validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors(home: &[&str], about: &[&str]) -> PageAnchors {
        let ids = |list: &[&str]| list.iter().map(|id| (*id).to_string()).collect();
        PageAnchors::from([
            (Route::Home, ids(home)),
            (Route::About, ids(about)),
            (Route::NotFound, HashSet::new()),
        ])
    }

    #[test]
    fn test_route_key_fragment() {
        assert_eq!(RouteKey::new("#my-card").fragment(), Some("my-card"));
        assert_eq!(RouteKey::new("/#support").fragment(), Some("support"));
        assert_eq!(RouteKey::new("#").fragment(), None);
        assert_eq!(RouteKey::new("/").fragment(), None);
        assert!(RouteKey::root().is_root());
    }

    #[test]
    fn test_route_key_split() {
        assert_eq!(RouteKey::new("/#services").split(), ("/", Some("services")));
        assert_eq!(RouteKey::new("#about").split(), ("", Some("about")));
        assert_eq!(RouteKey::new("/about/").split(), ("/about/", None));
    }

    #[test]
    fn test_resolve_known_keys() {
        for key in ["", "/", "home", "#home", "/home"] {
            assert_eq!(Route::resolve(key), Route::Home, "key {key:?}");
        }
        for key in ["/#services", "/#home"] {
            assert_eq!(Route::resolve(key), Route::Home, "key {key:?}");
        }
        for key in ["about", "#about", "/about", "/about/", "/about/#values"] {
            assert_eq!(Route::resolve(key), Route::About, "key {key:?}");
        }
    }

    #[test]
    fn test_resolve_falls_back_to_not_found() {
        for key in ["report", "#volunteer", "/missing", "about/team"] {
            assert_eq!(Route::resolve(key), Route::NotFound, "key {key:?}");
        }
    }

    #[test]
    fn test_from_path_only_matches_pages() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/about/"), Some(Route::About));
        assert_eq!(Route::from_path("/404.html"), None);
        assert_eq!(Route::from_path("about"), None);
    }

    #[test]
    fn test_validate_accepts_known_targets() {
        let links = vec![
            NavLink::new("Home", "#home"),
            NavLink::new("About", "/about/"),
            NavLink::new("Root", "/"),
            NavLink::new("Support", "/#support"),
            NavLink::new("Values", "/about/#values"),
        ];
        let anchors = anchors(&["home", "support"], &["values"]);
        validate_targets("HopeCard", &links, Route::Home, &anchors).unwrap();
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let links = vec![NavLink::new("Home", "#home"), NavLink::new("Start", "#home")];
        let err = validate_targets("HopeCard", &links, Route::Home, &anchors(&["home"], &[]))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateRoute { ref target, .. } if target == "#home"));
    }

    #[test]
    fn test_validate_rejects_unknown_anchor() {
        let links = vec![NavLink::new("Support", "#support")];
        let err = validate_targets("HopeCard", &links, Route::Home, &anchors(&["home"], &[]))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownRoute { ref target, .. } if target == "#support"));
    }

    #[test]
    fn test_validate_bare_fragment_needs_anchor_on_current_page() {
        let links = vec![NavLink::new("Programs", "#programs")];
        let anchors = anchors(&["programs"], &[]);

        validate_targets("HopeCard", &links, Route::Home, &anchors).unwrap();
        for page in [Route::About, Route::NotFound] {
            let err = validate_targets("HopeCard", &links, page, &anchors).unwrap_err();
            assert!(matches!(err, CoreError::UnknownRoute { .. }), "{page}");
        }

        let qualified = vec![NavLink::new("Programs", "/#programs")];
        for page in Route::ALL {
            validate_targets("HopeCard", &qualified, page, &anchors).unwrap();
        }
    }

    #[test]
    fn test_validate_rejects_unknown_page_path() {
        let links = vec![NavLink::new("Missing", "/404.html")];
        let err = validate_targets("HopeCard", &links, Route::Home, &anchors(&[], &[]))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownRoute { .. }));

        let anchorless = vec![NavLink::new("Hash", "#")];
        assert!(validate_targets("HopeCard", &anchorless, Route::Home, &anchors(&[], &[])).is_err());
    }
}
