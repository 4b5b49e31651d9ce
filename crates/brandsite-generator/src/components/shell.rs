//! Document envelope.

use std::sync::Arc;

use brandsite_core::PageMetadata;

use crate::markup::{Element, Tree};

/// Locale tag carried by every document root.
pub const DOCUMENT_LANG: &str = "en";

/// Wraps page content in the outer document envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentShell {
    metadata: PageMetadata,
}

impl DocumentShell {
    /// Create a shell carrying `metadata`.
    #[must_use]
    pub fn new(metadata: PageMetadata) -> Self {
        Self { metadata }
    }

    /// Metadata attached to every wrapped document.
    #[must_use]
    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    /// Wrap `children` as `<html lang> <body> children </body> </html>`.
    ///
    /// The body holds the given tree itself, not a copy.
    #[must_use]
    pub fn wrap(&self, children: Tree) -> Document {
        let body: Tree = Element::new("body").child(Arc::clone(&children)).into();
        let root: Tree = Element::new("html")
            .attr("lang", DOCUMENT_LANG)
            .child(Arc::clone(&body))
            .into();

        Document {
            root,
            body,
            children,
            metadata: self.metadata.clone(),
        }
    }
}

/// A wrapped document: the render tree plus its metadata.
#[derive(Debug, Clone)]
pub struct Document {
    root: Tree,
    body: Tree,
    children: Tree,
    metadata: PageMetadata,
}

impl Document {
    /// The `<html>` root.
    #[must_use]
    pub fn root(&self) -> &Tree {
        &self.root
    }

    /// The single `<body>` inside the root.
    #[must_use]
    pub fn body(&self) -> &Tree {
        &self.body
    }

    /// The tree that was wrapped.
    #[must_use]
    pub fn children(&self) -> &Tree {
        &self.children
    }

    /// Title and description for the document head.
    #[must_use]
    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }
}
