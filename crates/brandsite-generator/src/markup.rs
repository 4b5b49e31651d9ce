//! Immutable markup tree.
//!
//! Components build [`Node`] values and hand them around as [`Tree`]
//! (`Arc<Node>`). Wrapping a subtree only clones the `Arc`, so the embedded
//! subtree keeps its identity and can be checked with [`Arc::ptr_eq`].

use std::{fmt, sync::Arc};

/// Shared handle to a markup node.
pub type Tree = Arc<Node>;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Literal text. Escaped on serialization.
    Text(String),
    /// A sequence of nodes without a wrapping element.
    Fragment(Vec<Tree>),
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Tree>,
}

impl Element {
    /// Create an element with no attributes or children.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `id` attribute when one is given.
    #[must_use]
    pub fn maybe_id(self, id: Option<&str>) -> Self {
        match id {
            Some(id) => self.id(id),
            None => self,
        }
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Tree>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tree>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Element tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Attribute value by name.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the whitespace-separated `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(&'static str, String)] {
        &self.attrs
    }

    /// Direct children.
    #[must_use]
    pub fn child_nodes(&self) -> &[Tree] {
        &self.children
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.push_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Element> for Tree {
    fn from(element: Element) -> Self {
        Arc::new(Node::Element(element))
    }
}

impl Node {
    /// Text node.
    pub fn text(text: impl Into<String>) -> Tree {
        Arc::new(Node::Text(text.into()))
    }

    /// Fragment holding `children` in order.
    pub fn fragment<I>(children: I) -> Tree
    where
        I: IntoIterator,
        I::Item: Into<Tree>,
    {
        Arc::new(Node::Fragment(children.into_iter().map(Into::into).collect()))
    }

    /// Empty fragment.
    #[must_use]
    pub fn empty() -> Tree {
        Arc::new(Node::Fragment(Vec::new()))
    }

    /// The element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Direct children of an element or fragment.
    #[must_use]
    pub fn child_nodes(&self) -> &[Tree] {
        match self {
            Node::Element(element) => &element.children,
            Node::Fragment(children) => children,
            Node::Text(_) => &[],
        }
    }

    /// Visit every node in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.child_nodes() {
            child.walk(visit);
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            _ => {
                for child in self.child_nodes() {
                    child.push_text(out);
                }
            }
        }
    }

    /// Number of times `needle` occurs inside text nodes.
    #[must_use]
    pub fn count_text(&self, needle: &str) -> usize {
        let mut count = 0;
        self.walk(&mut |node| {
            if let Node::Text(text) = node {
                count += text.matches(needle).count();
            }
        });
        count
    }

    /// Number of text nodes whose trimmed content equals `text`.
    #[must_use]
    pub fn count_exact_text(&self, text: &str) -> usize {
        let mut count = 0;
        self.walk(&mut |node| {
            if matches!(node, Node::Text(t) if t.trim() == text) {
                count += 1;
            }
        });
        count
    }

    /// Every element matching `predicate`, in document order.
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let Node::Element(element) = node {
                if predicate(element) {
                    found.push(element);
                }
            }
        });
        found
    }

    /// Elements with the given tag name.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|e| e.tag == tag)
    }

    /// Elements carrying the given class.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|e| e.has_class(class))
    }

    /// First element with the given `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find_all(|e| e.get_attr("id") == Some(id)).into_iter().next()
    }

    /// Every `id` attribute in the tree.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.find_all(|e| e.get_attr("id").is_some())
            .into_iter()
            .filter_map(|e| e.get_attr("id"))
            .collect()
    }

    /// `(label, href)` for every anchor, label trimmed.
    #[must_use]
    pub fn links(&self) -> Vec<(String, String)> {
        self.find_by_tag("a")
            .into_iter()
            .map(|a| {
                (
                    a.text_content().trim().to_string(),
                    a.get_attr("href").unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    /// Labels of every button.
    #[must_use]
    pub fn buttons(&self) -> Vec<String> {
        self.find_by_tag("button")
            .into_iter()
            .map(|b| b.text_content().trim().to_string())
            .collect()
    }

    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
            Node::Element(element) => {
                write_open_tag(element, out);
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

pub(crate) fn write_open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');
}

/// Escape text content.
#[must_use]
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for use inside double quotes.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        Element::new("section")
            .class("hero")
            .id("home")
            .child(Element::new("h1").text("Welcome"))
            .child(
                Element::new("p")
                    .text("Fish & rice ")
                    .child(Element::new("a").attr("href", "/?a=1&b=\"2\"").text(" Go ")),
            )
            .child(Element::new("button").text("Start"))
            .into()
    }

    #[test]
    fn test_to_html_escapes_text_and_attributes() {
        let html = sample().to_html();
        assert_eq!(
            html,
            "<section class=\"hero\" id=\"home\"><h1>Welcome</h1>\
             <p>Fish &amp; rice <a href=\"/?a=1&amp;b=&quot;2&quot;\"> Go </a></p>\
             <button>Start</button></section>"
        );
    }

    #[test]
    fn test_fragment_has_no_wrapper() {
        let tree = Node::fragment([Node::text("a"), Node::text("b")]);
        assert_eq!(tree.to_html(), "ab");
        assert_eq!(Node::empty().to_html(), "");
    }

    #[test]
    fn test_attr_replaces_existing_value() {
        let el = Element::new("a").attr("href", "#one").attr("href", "#two");
        assert_eq!(el.attrs().len(), 1);
        assert_eq!(el.get_attr("href"), Some("#two"));
    }

    #[test]
    fn test_queries() {
        let tree = sample();
        assert_eq!(tree.links(), vec![("Go".to_string(), "/?a=1&b=\"2\"".to_string())]);
        assert_eq!(tree.buttons(), vec!["Start"]);
        assert_eq!(tree.ids(), vec!["home"]);
        assert!(tree.find_by_id("home").is_some_and(|e| e.has_class("hero")));
        assert_eq!(tree.find_by_tag("h1").len(), 1);
        assert_eq!(tree.text_content(), "WelcomeFish & rice  Go Start");
    }

    #[test]
    fn test_text_counts() {
        let tree = Node::fragment([
            Node::text("Hotline: 911 | Helpline: 1-800"),
            Element::new("p").text(" Helpline: 1-800 ").into(),
        ]);
        assert_eq!(tree.count_text("Helpline: 1-800"), 2);
        assert_eq!(tree.count_exact_text("Helpline: 1-800"), 1);
    }

    #[test]
    fn test_has_class_splits_on_whitespace() {
        let el = Element::new("div").class("feature-card feature-card--wide");
        assert!(el.has_class("feature-card"));
        assert!(!el.has_class("feature"));
    }
}
