//! DAMAYAN: mutual aid network for emergencies and natural disasters.

use brandsite_core::{BrandId, NavLink, PageMetadata, Result};

use crate::{
    components::{Footer, Header},
    composition::{BrandComposition, SitePages},
    pages::{
        AboutPage, CallToAction, FeatureCard, FeatureSection, Hero, HomePage, NotFoundPage,
        RecoveryAction, Stat,
    },
};

/// Hotline line shown in the status banner and in the footer notice.
pub const HOTLINE: &str = "Emergency Hotline: 911 | DAMAYAN Helpline: 1-800-DAMAYAN";

fn nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Report Emergency", "/#report"),
        NavLink::new("Volunteer", "/#volunteer"),
        NavLink::new("Resources", "/#resources"),
    ]
}

fn home() -> HomePage {
    HomePage {
        anchor: Some("home"),
        // Second copy of the hotline; the footer notice carries the other one.
        banner: Some(HOTLINE),
        hero: Hero {
            title: "DAMAYAN — Mutual Aid Network",
            subtitle: "Connecting communities during emergencies and natural disasters. \
                       Together, we provide disaster relief, coordinate volunteers, and deliver \
                       resources to those who need it most.",
            anchor: None,
            cta: None,
        },
        features: FeatureSection {
            heading: None,
            anchor: None,
            cards: vec![
                FeatureCard::new(
                    "🚨",
                    "Report Emergency",
                    "Report disasters and request help in your area. Our network responds \
                     quickly to connect you with immediate assistance.",
                )
                .anchored("report"),
                FeatureCard::new(
                    "🤝",
                    "Volunteer Hub",
                    "Sign up to help your community. Whether on the ground or remote, every \
                     hand makes a difference during times of crisis.",
                )
                .anchored("volunteer"),
                FeatureCard::new(
                    "📦",
                    "Resource Center",
                    "Find shelters, food banks, medical aid, and essential supplies near you. \
                     Access up-to-date information when it matters most.",
                )
                .anchored("resources"),
            ],
        },
        stats: vec![
            Stat::new("500+", "Volunteers"),
            Stat::new("50+", "Communities"),
            Stat::new("24/7", "Response"),
        ],
        showcase: None,
        cta: CallToAction {
            heading: "Need Help? Report Now",
            text: None,
            button: "Report an Emergency",
            anchor: None,
        },
    }
}

fn about() -> AboutPage {
    AboutPage {
        anchor: "about",
        title: "About DAMAYAN",
        intro: vec![
            "Rooted in the Filipino spirit of bayanihan, the tradition of communal \
             unity and cooperation, DAMAYAN is a mutual aid network dedicated to \
             disaster preparedness, relief, and recovery.",
        ],
        blocks_heading: None,
        blocks: vec![
            FeatureCard::new(
                "💛",
                "Mutual Aid",
                "We believe in communities helping communities. DAMAYAN facilitates \
                 mutual aid by connecting those who need help with those who can give it, \
                 ensuring no one faces disaster alone.",
            ),
            FeatureCard::new(
                "🇵🇭",
                "Bayanihan Spirit",
                "Inspired by the Filipino value of bayanihan, we carry forward the \
                 tradition of neighbors coming together to lift each other up in times \
                 of need.",
            ),
            FeatureCard::new(
                "🛡️",
                "Disaster Preparedness",
                "Beyond relief, DAMAYAN empowers communities with resources, training, \
                 and planning tools to prepare for emergencies before they happen.",
            ),
        ],
    }
}

/// Build the DAMAYAN composition.
///
/// # Errors
///
/// Returns the configuration defect found while validating the brand.
pub fn composition() -> Result<BrandComposition> {
    let brand = BrandId::Damayan;

    BrandComposition::new(
        brand,
        PageMetadata::new("DAMAYAN", "DAMAYAN Web Platform"),
        Header::new(brand.display_name(), nav()),
        SitePages {
            home: home(),
            about: about(),
            not_found: NotFoundPage::new(
                "Page not found. If you need urgent help, call the hotline below.",
                RecoveryAction::home(Some("Go Home")),
            ),
        },
        Footer::new("© 2026 DAMAYAN. Bayanihan in action — together we rise.").with_notice(HOTLINE),
    )
}
