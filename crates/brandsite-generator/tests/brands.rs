//! Composition properties that hold for every brand site.

use std::sync::Arc;

use brandsite_core::{BrandId, Route};
use brandsite_generator::{
    BrandComposition, ContentPage, Node, Tree, brands,
    components::DOCUMENT_LANG,
};

fn all() -> Vec<BrandComposition> {
    brands::all().expect("every brand composition is valid")
}

fn composition(brand: BrandId) -> BrandComposition {
    brands::composition(brand).expect("brand composition is valid")
}

#[test]
fn test_brand_name_once_in_header() {
    for site in all() {
        let header = site.header().render();
        let name = site.brand().display_name();
        assert_eq!(header.count_exact_text(name), 1, "{name} header");

        let page = site.compose();
        let header_regions = page.find_by_tag("header");
        assert_eq!(header_regions.len(), 1, "{name} has one header");
    }
}

#[test]
fn test_hero_heading_once() {
    for site in all() {
        let hero = site.pages().home.hero.title;
        assert_eq!(site.compose().count_exact_text(hero), 1, "{hero}");
    }
}

#[test]
fn test_footer_closing_once() {
    for site in all() {
        let closing = site.footer().closing();
        assert_eq!(site.compose().count_exact_text(closing), 1, "{closing}");
    }
}

#[test]
fn test_nav_destinations_are_verbatim() {
    for site in all() {
        let header = site.header().render();
        let rendered: Vec<_> = header.links().into_iter().map(|(_, href)| href).collect();
        let configured: Vec<_> = site
            .header()
            .links()
            .iter()
            .map(|link| link.target.as_str().to_string())
            .collect();
        assert_eq!(rendered, configured, "{}", site.brand());
    }
}

#[test]
fn test_not_found_recovery_leads_to_root() {
    for site in all() {
        let tree = site.pages().not_found.render();
        let links = tree.links();
        assert_eq!(links.len(), 1, "{} has one recovery action", site.brand());
        assert_eq!(links[0].1, "/");
        assert_eq!(tree.count_exact_text("404"), 1);
    }
}

#[test]
fn test_home_exposes_declared_features_and_triggers() {
    for site in all() {
        let home = &site.pages().home;
        let tree = home.render();

        let titles: Vec<_> = tree
            .find_by_class("feature-card__title")
            .into_iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(titles, home.feature_titles(), "{}", site.brand());
        assert_eq!(tree.buttons(), home.cta_triggers(), "{}", site.brand());
    }
}

#[test]
fn test_rendering_is_idempotent() {
    for site in all() {
        for route in Route::ALL {
            let page = site.page(route);
            assert_eq!(page.render(), page.render(), "{} {route}", site.brand());
        }
        assert_eq!(site.compose(), site.compose());
    }
}

#[test]
fn test_concurrent_rendering_matches_sequential() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BrandComposition>();

    let sequential: Vec<String> = all().iter().map(|site| site.compose().to_html()).collect();

    let shared = all();
    let concurrent: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = shared
            .iter()
            .map(|site| scope.spawn(move || site.compose().to_html()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("render thread"))
            .collect()
    });

    assert_eq!(concurrent, sequential);
}

#[test]
fn test_document_envelope() {
    for site in all() {
        for children in [site.compose(), Node::empty()] {
            let doc = site.shell().wrap(Arc::clone(&children));
            let root = doc.root().as_element().expect("root element");
            assert_eq!(root.tag(), "html");
            assert_eq!(root.get_attr("lang"), Some(DOCUMENT_LANG));
            assert_eq!(root.child_nodes().len(), 1);

            let body = root.child_nodes()[0].as_element().expect("body element");
            assert_eq!(body.tag(), "body");
            assert_eq!(body.child_nodes().len(), 1);
            assert!(Arc::ptr_eq(&body.child_nodes()[0], &children));
            assert_eq!(doc.root().find_by_tag("body").len(), 1);
        }
    }
}

#[test]
fn test_metadata_fields() {
    for site in all() {
        let meta = site.metadata();
        let name = site.brand().display_name();
        assert_eq!(meta.title, name);
        assert_eq!(meta.description, format!("{name} Web Platform"));

        let doc = site.document(Route::Home);
        assert_eq!(doc.metadata(), meta);
    }
}

#[test]
fn test_hopecard_home() {
    let site = composition(BrandId::HopeCard);
    let home = site.pages().home.render();

    for heading in ["Program Enrollment", "Digital Card", "Track Benefits"] {
        assert_eq!(
            home.find_all(|e| e.tag() == "h3" && e.text_content() == heading).len(),
            1,
            "{heading}"
        );
    }
    assert_eq!(home.count_exact_text("10,000+"), 1);
    assert_eq!(home.count_exact_text("100%"), 1);
}

#[test]
fn test_hopecard_not_found() {
    let site = composition(BrandId::HopeCard);
    let tree: Tree = site.pages().not_found.render();
    assert_eq!(tree.links(), vec![("Go Home".to_string(), "/".to_string())]);
}

#[test]
fn test_damayan_hotline_occurrences() {
    let hotline = "DAMAYAN Helpline: 1-800-DAMAYAN";
    let site = composition(BrandId::Damayan);

    assert_eq!(site.footer().render().count_text(hotline), 1);
    assert_eq!(site.compose().count_text(hotline), 2);
}

#[test]
fn test_route_dispatch() {
    let site = composition(BrandId::BayaniHub);

    let about = site.compose_route("#about");
    assert_eq!(about.count_exact_text("About BayaniHub"), 1);

    let missing = site.compose_route("#services/extra");
    assert_eq!(missing.count_exact_text("404"), 1);
    assert_eq!(missing.find_by_tag("header").len(), 1);
    assert_eq!(missing.find_by_tag("footer").len(), 1);

    assert_eq!(site.compose_route("/"), site.compose());
}
