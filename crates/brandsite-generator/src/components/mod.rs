//! Structural components shared by every brand site.
//!
//! - [`Header`] - brand logo and primary navigation
//! - [`Footer`] - closing statement, footer links and an optional notice
//! - [`DocumentShell`] - document envelope with out-of-band metadata

pub mod footer;
pub mod header;
pub mod shell;

pub use footer::Footer;
pub use header::{Header, nav_link};
pub use shell::{DOCUMENT_LANG, Document, DocumentShell};
