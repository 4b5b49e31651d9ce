//! Brand site definitions.
//!
//! Each brand module builds a fresh [`BrandComposition`] on every call, so no
//! two compositions ever share state.

use brandsite_core::{BrandId, Result};

use crate::composition::BrandComposition;

pub mod bayanihub;
pub mod damayan;
pub mod hopecard;

/// Build the composition for `brand`.
///
/// # Errors
///
/// Returns the configuration defect found while validating the brand.
pub fn composition(brand: BrandId) -> Result<BrandComposition> {
    match brand {
        BrandId::BayaniHub => bayanihub::composition(),
        BrandId::Damayan => damayan::composition(),
        BrandId::HopeCard => hopecard::composition(),
    }
}

/// Build every known brand composition.
///
/// # Errors
///
/// Returns the first configuration defect found.
pub fn all() -> Result<Vec<BrandComposition>> {
    BrandId::ALL.into_iter().map(composition).collect()
}
