//! Build command - generates the static brand sites

use std::{path::Path, time::Instant};

use brandsite_core::BrandId;
use brandsite_generator::{BuildStats, Builder};
use color_eyre::eyre::{Result, WrapErr};

use super::load_config;

/// Run the build command.
///
/// Builds the configured brand sites, or only `brands` when any are given,
/// into `output` (or the configured output directory).
pub fn run(config_path: &Path, output: Option<&Path>, brands: &[BrandId]) -> Result<BuildStats> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?brands, "Starting build");

    let mut config = load_config(config_path)?;

    if let Some(output) = output {
        config.build.output_dir = output.to_string_lossy().to_string();
    }

    if !brands.is_empty() {
        config.build.brands = brands.to_vec();
    }

    tracing::debug!(?config, "Loaded configuration");

    let output_dir = Path::new(&config.build.output_dir).to_path_buf();
    let stats = Builder::new(config, &output_dir)
        .build()
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Brands:     {}", stats.brands);
    println!("  Pages:      {}", stats.pages);
    println!("  Sitemaps:   {}", stats.sitemaps);
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}
