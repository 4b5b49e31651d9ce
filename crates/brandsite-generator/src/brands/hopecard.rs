//! HopeCard: digital assistance card for transparent aid distribution.

use brandsite_core::{BrandId, NavLink, PageMetadata, Result};

use crate::{
    components::{Footer, Header},
    composition::{BrandComposition, SitePages},
    pages::{
        AboutPage, CallToAction, FeatureCard, FeatureSection, Hero, HomePage, NotFoundPage,
        RecoveryAction, Showcase, Stat,
    },
};

fn nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Programs", "/#programs"),
        NavLink::new("My Card", "/#my-card"),
        NavLink::new("Support", "/#support"),
    ]
}

fn home() -> HomePage {
    HomePage {
        anchor: None,
        banner: None,
        hero: Hero {
            title: "HopeCard — Digital Aid, Real Impact",
            subtitle: "A transparent digital assistance card system that connects beneficiaries \
                       to government and NGO welfare programs, securely and efficiently.",
            anchor: Some("home"),
            cta: Some("Get Started"),
        },
        features: FeatureSection {
            heading: Some("How It Works"),
            anchor: Some("programs"),
            cards: vec![
                FeatureCard::new(
                    "📋",
                    "Program Enrollment",
                    "Register for government and NGO assistance programs quickly and easily.",
                ),
                FeatureCard::new(
                    "💳",
                    "Digital Card",
                    "Receive your HopeCard, your key to claiming aid securely.",
                ),
                FeatureCard::new(
                    "📊",
                    "Track Benefits",
                    "Monitor your aid history and upcoming distributions in real time.",
                ),
            ],
        },
        stats: vec![
            Stat::new("10,000+", "Beneficiaries"),
            Stat::new("50+", "Programs"),
            Stat::new("100%", "Transparent"),
        ],
        showcase: Some(Showcase {
            heading: "Your Digital Assistance Card",
            anchor: Some("my-card"),
            card_title: "HopeCard",
            lines: vec!["Beneficiary Name", "ID: HOPE-XXXX-XXXX", "Status: Active"],
        }),
        cta: CallToAction {
            heading: "Check Your Eligibility",
            text: Some("Find out which assistance programs you qualify for today."),
            button: "Check Your Eligibility",
            anchor: Some("support"),
        },
    }
}

fn about() -> AboutPage {
    AboutPage {
        anchor: "about",
        title: "About HopeCard",
        intro: vec![
            "Dignified aid distribution through technology, ensuring transparency, \
             accountability, and efficiency for the most vulnerable communities.",
        ],
        blocks_heading: Some("Our Mission"),
        blocks: vec![
            FeatureCard::new(
                "🤝",
                "Dignified Aid",
                "Every beneficiary deserves to receive assistance with dignity. \
                 HopeCard replaces outdated paper-based systems with a secure digital \
                 platform.",
            ),
            FeatureCard::new(
                "🔍",
                "Transparency",
                "Full visibility into how aid is distributed, from funding sources \
                 to the hands of those who need it most.",
            ),
            FeatureCard::new(
                "📈",
                "Accountability",
                "Real-time tracking and reporting ensure that every resource reaches \
                 its intended recipient without leakage.",
            ),
        ],
    }
}

/// Build the HopeCard composition.
///
/// # Errors
///
/// Returns the configuration defect found while validating the brand.
pub fn composition() -> Result<BrandComposition> {
    let brand = BrandId::HopeCard;

    BrandComposition::new(
        brand,
        PageMetadata::new("HopeCard", "HopeCard Web Platform"),
        Header::new(brand.display_name(), nav()),
        SitePages {
            home: home(),
            about: about(),
            not_found: NotFoundPage::new(
                "Page not found. The resource you are looking for does not exist.",
                RecoveryAction::home(Some("Go Home")),
            ),
        },
        Footer::new("© 2026 HopeCard. Digital aid, delivered with dignity."),
    )
}
