//! Render command - prints one composed page

use brandsite_core::{BrandId, Route};
use brandsite_generator::{HtmlGenerator, brands};
use color_eyre::eyre::{Result, WrapErr};

/// Render `brand`'s page for `route_key` to HTML.
///
/// Keys that match no page render the not-found page. With `document` set the
/// composed page is wrapped in the full document, head included.
pub fn render(brand: BrandId, route_key: &str, document: bool) -> Result<String> {
    let composition = brands::composition(brand)
        .wrap_err_with(|| format!("Invalid composition for {brand}"))?;

    let route = Route::resolve(route_key);
    tracing::info!(%brand, route_key, %route, document, "Rendering page");

    let html = if document {
        HtmlGenerator::new().generate_document(&composition.document(route))
    } else {
        composition.compose_page(route).to_html()
    };

    Ok(html)
}

/// Run the render command, writing the HTML to stdout.
pub fn run(brand: BrandId, route_key: &str, document: bool) -> Result<()> {
    let html = render(brand, route_key, document)?;
    println!("{html}");
    Ok(())
}
