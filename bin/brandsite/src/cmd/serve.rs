//! Serve command - builds one brand site and previews it locally

use std::path::{Path, PathBuf};

use brandsite_core::BrandId;
use brandsite_generator::Builder;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use super::load_config;
use crate::server::create_router;

/// Rebuild `brand` and return the directory to serve.
///
/// Only the brand's own directory is replaced.
pub fn prepare(config_path: &Path, brand: BrandId, output: Option<&Path>) -> Result<PathBuf> {
    let config = load_config(config_path)?;

    let output_dir = output.map_or_else(|| PathBuf::from(&config.build.output_dir), Path::to_path_buf);

    let builder = Builder::new(config, &output_dir);
    let stats = builder
        .rebuild_brand(brand)
        .wrap_err_with(|| format!("Failed to build {brand}"))?;

    println!(
        "  ✓ Built {} ({} pages) in {}ms",
        brand.display_name(),
        stats.pages,
        stats.duration_ms
    );

    Ok(builder.brand_dir(brand))
}

/// Run the serve command.
///
/// Rebuilds `brand` into `output` (or the configured output directory) and
/// serves its directory at the server root. Other brand sites already built
/// there are left untouched.
pub async fn run(
    config_path: &Path,
    brand: BrandId,
    port: u16,
    output: Option<&Path>,
) -> Result<()> {
    tracing::info!(?config_path, %brand, port, "Starting preview server");

    let site_dir = prepare(config_path, brand, output)?;

    let app = create_router(&site_dir);
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Previewing {} at http://{addr}", brand.display_name());
    println!("  Press Ctrl+C to stop");
    println!();

    tracing::info!(%addr, site_dir = %site_dir.display(), "Server listening");

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
