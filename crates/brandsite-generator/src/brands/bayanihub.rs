//! BayaniHub: barangay civic engagement platform.

use brandsite_core::{BrandId, NavLink, PageMetadata, Result};

use crate::{
    components::{Footer, Header},
    composition::{BrandComposition, SitePages},
    pages::{
        AboutPage, CallToAction, FeatureCard, FeatureSection, Hero, HomePage, NotFoundPage,
        RecoveryAction,
    },
};

fn nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Services", "/#services"),
        NavLink::new("About", "/about/"),
        NavLink::new("Contact", "/#contact"),
    ]
}

fn home() -> HomePage {
    HomePage {
        anchor: None,
        banner: None,
        hero: Hero {
            title: "Welcome to BayaniHub",
            subtitle: "Your community engagement platform for barangay civic participation. \
                       Connect with your neighbors, stay informed, and make a difference.",
            anchor: Some("home"),
            cta: Some("Get Started"),
        },
        features: FeatureSection {
            heading: Some("What We Offer"),
            anchor: Some("services"),
            cards: vec![
                FeatureCard::new(
                    "📋",
                    "Community Board",
                    "Post and view announcements, updates, and important notices from \
                     your barangay officials and fellow community members.",
                ),
                FeatureCard::new(
                    "🛠️",
                    "Service Requests",
                    "Report issues, request repairs, and track the status of service \
                     requests in your neighborhood.",
                ),
                FeatureCard::new(
                    "📅",
                    "Events",
                    "Stay up-to-date with community events, meetings, clean-up drives, \
                     and other barangay activities through our events calendar.",
                ),
            ],
        },
        stats: Vec::new(),
        showcase: None,
        cta: CallToAction {
            heading: "Ready to Join Your Community?",
            text: Some("Be part of a more connected, informed, and engaged barangay."),
            button: "Join BayaniHub",
            anchor: Some("contact"),
        },
    }
}

fn about() -> AboutPage {
    AboutPage {
        anchor: "about",
        title: "About BayaniHub",
        intro: vec![
            "BayaniHub is a community-driven platform designed to strengthen barangay \
             civic engagement across the Philippines. Our mission is to bridge the gap \
             between local government and residents by providing accessible digital \
             tools for communication, collaboration, and community building.",
            "We believe that every Filipino deserves a voice in their community. \
             Through BayaniHub, residents can stay informed about barangay \
             announcements, participate in local decision-making, report issues that \
             need attention, and connect with their neighbors for a stronger, more \
             united community.",
            "The word \u{201c}Bayani\u{201d} means hero in Filipino, because every \
             community member who takes part in civic engagement is a hero in their \
             own right.",
        ],
        blocks_heading: None,
        blocks: Vec::new(),
    }
}

/// Build the BayaniHub composition.
///
/// # Errors
///
/// Returns the configuration defect found while validating the brand.
pub fn composition() -> Result<BrandComposition> {
    let brand = BrandId::BayaniHub;

    BrandComposition::new(
        brand,
        PageMetadata::new("BayaniHub", "BayaniHub Web Platform"),
        Header::new(brand.display_name(), nav()),
        SitePages {
            home: home(),
            about: about(),
            not_found: NotFoundPage::new(
                "Sorry, the page you are looking for does not exist.",
                RecoveryAction::home(None),
            ),
        },
        Footer::new("© 2026 BayaniHub. Empowering communities together.").with_links(nav()),
    )
}
