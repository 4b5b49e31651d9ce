//! Document-level page metadata.

use serde::{Deserialize, Serialize};

/// Title and description attached to a brand's documents.
///
/// Metadata is carried next to the render tree rather than inside it, so the
/// fields can be read without rendering anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Document title.
    pub title: String,

    /// Summary for the description meta tag.
    pub description: String,
}

impl PageMetadata {
    /// Create metadata from a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
