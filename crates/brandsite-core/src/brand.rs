//! Brand identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the brand sites built from the shared components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandId {
    /// Barangay civic engagement platform.
    BayaniHub,
    /// Mutual aid and emergency response network.
    Damayan,
    /// Digital assistance card for aid distribution.
    HopeCard,
}

impl BrandId {
    /// Every known brand, in build order.
    pub const ALL: [BrandId; 3] = [BrandId::BayaniHub, BrandId::Damayan, BrandId::HopeCard];

    /// Stable identifier used in config files, CLI flags and output paths.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::BayaniHub => "bayanihub",
            Self::Damayan => "damayan",
            Self::HopeCard => "hopecard",
        }
    }

    /// Name shown in the header logo.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::BayaniHub => "BayaniHub",
            Self::Damayan => "DAMAYAN",
            Self::HopeCard => "HopeCard",
        }
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for BrandId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|brand| {
                brand.slug().eq_ignore_ascii_case(needle)
                    || brand.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CoreError::UnknownBrand(s.to_string()))
    }
}
