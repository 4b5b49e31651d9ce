//! HTML document generation.
//!
//! Serializes a [`Document`] and writes its out-of-band metadata into the
//! document head.

use tracing::debug;

use crate::{
    components::Document,
    markup::{Node, escape_attr, escape_text, write_open_tag},
};

/// Serializes wrapped documents to complete HTML pages.
#[derive(Debug, Clone, Default)]
pub struct HtmlGenerator {
    extra_head: Vec<String>,
}

impl HtmlGenerator {
    /// Create a generator that writes only the standard head tags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw snippet to every generated head, such as a stylesheet link.
    #[must_use]
    pub fn with_head_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.extra_head.push(snippet.into());
        self
    }

    /// Generate the full HTML page for `document`.
    #[must_use]
    pub fn generate_document(&self, document: &Document) -> String {
        let metadata = document.metadata();
        debug!(title = %metadata.title, "generating HTML document");

        let mut out = String::from("<!DOCTYPE html>\n");
        match &**document.root() {
            Node::Element(root) => {
                write_open_tag(root, &mut out);
                out.push_str(&self.head(document));
                for child in root.child_nodes() {
                    child.write_html(&mut out);
                }
                out.push_str("</");
                out.push_str(root.tag());
                out.push_str(">\n");
            }
            other => {
                out.push_str(&self.head(document));
                other.write_html(&mut out);
                out.push('\n');
            }
        }
        out
    }

    fn head(&self, document: &Document) -> String {
        let metadata = document.metadata();
        let mut head = String::from("<head>");
        head.push_str(r#"<meta charset="UTF-8">"#);
        head.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#);
        head.push_str(&format!("<title>{}</title>", escape_text(&metadata.title)));
        head.push_str(&format!(
            r#"<meta name="description" content="{}">"#,
            escape_attr(&metadata.description)
        ));
        for snippet in &self.extra_head {
            head.push_str(snippet);
        }
        head.push_str("</head>");
        head
    }
}
