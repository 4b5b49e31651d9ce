//! Brandsite Core Library
//!
//! Core types, configuration, and error handling shared by every brand site.

pub mod brand;
pub mod config;
pub mod error;
pub mod metadata;
pub mod route;

pub use brand::BrandId;
pub use config::Config;
pub use error::{CoreError, Result};
pub use metadata::PageMetadata;
pub use route::{NavLink, PageAnchors, Route, RouteKey, validate_targets};
