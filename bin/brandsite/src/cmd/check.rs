//! Check command - validate configuration and brand compositions

use std::path::Path;

use brandsite_core::{BrandId, Config};
use brandsite_generator::brands;
use color_eyre::eyre::{Result, bail};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Collected errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Collected warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and every brand composition.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and brands");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate configuration and brand compositions without printing a summary.
///
/// The configuration is loaded the way `build` loads it, environment
/// overrides included.
pub fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = if config_path.exists() {
        match Config::load_with_env(config_path) {
            Ok(c) => {
                println!("  ✓ Configuration valid");
                Some(c)
            }
            Err(e) => {
                result.add_error(format!("Configuration error: {e}"));
                println!("  ✗ Configuration invalid: {e}");
                None
            }
        }
    } else {
        result.add_warning(format!(
            "Configuration file {} not found, using defaults",
            config_path.display()
        ));
        Some(Config::default())
    };

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);
    }

    println!("\nChecking brand compositions...");
    check_brands(&mut result);

    result
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    check_base_url("site.base_url", &config.site.base_url, result);

    for (slug, site) in &config.sites {
        if let Some(base_url) = &site.base_url {
            check_base_url(&format!("sites.{slug}.base_url"), base_url, result);
        }
    }

    for brand in BrandId::ALL {
        if !config.build.brands.contains(&brand) {
            result.add_warning(format!("{brand} is not listed in build.brands"));
        }
    }
}

fn check_base_url(key: &str, base_url: &str, result: &mut ValidationResult) {
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        result.add_warning(format!(
            "{key} should start with http:// or https:// (found {base_url:?})"
        ));
    }

    if base_url.ends_with('/') {
        result.add_warning(format!("{key} should not have a trailing slash"));
    }
}

/// Construct every brand composition, collecting configuration defects.
fn check_brands(result: &mut ValidationResult) {
    for brand in BrandId::ALL {
        match brands::composition(brand) {
            Ok(composition) => {
                println!(
                    "  ✓ {} ({} nav links, {} footer links)",
                    brand.display_name(),
                    composition.header().links().len(),
                    composition.footer().links().len()
                );
            }
            Err(e) => {
                let kind = if e.is_configuration_defect() {
                    "invalid composition"
                } else {
                    "composition failed"
                };
                println!("  ✗ {}: {kind}", brand.display_name());
                result.add_error(format!("{} {kind}: {e}", brand.display_name()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults() {
        let result = validate(Path::new("/nonexistent/site.toml"));
        assert!(result.errors().is_empty());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("not found"));
    }

    #[test]
    fn test_validate_config_warnings() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(
            &config_path,
            "[site]\nbase_url = \"example.org/\"\n\n[build]\nbrands = [\"damayan\"]\n",
        )
        .expect("write");

        let result = validate(&config_path);
        assert!(result.errors().is_empty());
        let warnings = result.warnings().join("\n");
        assert!(warnings.contains("should start with http"));
        assert!(warnings.contains("trailing slash"));
        assert!(warnings.contains("bayanihub is not listed"));
        assert!(warnings.contains("hopecard is not listed"));
    }

    #[test]
    fn test_validate_brand_base_urls() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(
            &config_path,
            "[site]\nbase_url = \"https://a.org\"\n\n[sites.hopecard]\nbase_url = \"hopecard.org/\"\n",
        )
        .expect("write");

        let result = validate(&config_path);
        assert!(result.errors().is_empty());
        let warnings = result.warnings().join("\n");
        assert!(warnings.contains("sites.hopecard.base_url should start with http"));
        assert!(warnings.contains("sites.hopecard.base_url should not have a trailing slash"));
        assert!(!warnings.contains("site.base_url"));
    }

    #[test]
    fn test_validate_invalid_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(&config_path, "[site]\nbase_url = \"\"\n").expect("write");

        let result = validate(&config_path);
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("base_url cannot be empty"));
    }

    #[test]
    fn test_run_strict_fails_on_warnings() {
        assert!(run(Path::new("/nonexistent/site.toml"), false).is_ok());
        assert!(run(Path::new("/nonexistent/site.toml"), true).is_err());
    }
}
