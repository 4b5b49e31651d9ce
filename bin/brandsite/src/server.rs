//! Static preview server for a built brand site

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Create the preview router for one brand site directory.
///
/// The site is served at `/` so root-relative links such as the not-found
/// recovery action resolve within the brand. Unknown paths get the brand's
/// `404.html`.
pub fn create_router(site_dir: &Path) -> Router {
    let not_found = ServeFile::new(site_dir.join("404.html"));

    Router::new().fallback_service(ServeDir::new(site_dir).not_found_service(not_found))
}
