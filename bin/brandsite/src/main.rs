//! Brandsite CLI
//!
//! Builds, checks and previews the BayaniHub, DAMAYAN and HopeCard sites.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use brandsite_core::BrandId;
use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Brandsite.
#[derive(Parser)]
#[command(
    name = "brandsite",
    version,
    about = "Static renderer for the humanitarian brand sites"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the static brand sites
    Build {
        /// Output directory (overrides build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Only build these brands (repeatable)
        #[arg(short, long)]
        brand: Vec<BrandId>,
    },
    /// Print the rendered markup of one brand page
    Render {
        /// Brand to render (bayanihub, damayan, hopecard)
        #[arg(short, long)]
        brand: BrandId,
        /// Route key, e.g. "/", "#about" or "home"
        #[arg(short, long, default_value = "home")]
        route: String,
        /// Wrap the page in the full HTML document
        #[arg(long)]
        document: bool,
    },
    /// Validate configuration and brand compositions
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Build one brand and preview it locally
    Serve {
        /// Brand to preview
        #[arg(short, long)]
        brand: BrandId,
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Output directory (overrides build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    brandsite::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output, brand } => {
            brandsite::cmd::build::run(&cli.config, output.as_deref(), &brand)?;
        }
        Commands::Render {
            brand,
            route,
            document,
        } => {
            brandsite::cmd::render::run(brand, &route, document)?;
        }
        Commands::Check { strict } => {
            brandsite::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Serve {
            brand,
            port,
            output,
        } => {
            brandsite::cmd::serve::run(&cli.config, brand, port, output.as_deref()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["brandsite", "build", "--output", "dist"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build { output, brand } => {
                assert_eq!(output, Some(std::path::PathBuf::from("dist")));
                assert!(brand.is_empty());
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_with_brands() {
        let args = ["brandsite", "build", "--brand", "damayan", "-b", "HopeCard"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build { brand, .. } => {
                assert_eq!(brand, vec![BrandId::Damayan, BrandId::HopeCard]);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_render_command_parsing() {
        let args = ["brandsite", "render", "--brand", "bayanihub", "--route", "#about"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Render {
                brand,
                route,
                document,
            } => {
                assert_eq!(brand, BrandId::BayaniHub);
                assert_eq!(route, "#about");
                assert!(!document);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_render_defaults_to_home() {
        let args = ["brandsite", "render", "-b", "hopecard", "--document"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Render {
                route, document, ..
            } => {
                assert_eq!(route, "home");
                assert!(document);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_brand() {
        let args = ["brandsite", "render", "--brand", "acme"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["brandsite", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["brandsite", "serve", "--brand", "damayan", "--port", "8080"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Serve {
                brand,
                port,
                output,
            } => {
                assert_eq!(brand, BrandId::Damayan);
                assert_eq!(port, 8080);
                assert!(output.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["brandsite", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["brandsite", "--config", "brands.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("brands.toml"));
    }
}
