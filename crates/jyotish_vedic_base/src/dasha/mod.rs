//! Dasha (planetary period) timelines.
//!
//! Supported systems: Vimshottari (120 years, 9 lords) and Yogini (36 years,
//! 8 yoginis). Both are nakshatra based: the Moon's birth nakshatra picks
//! the first mahadasha and the fraction already traversed sets the birth
//! balance. Periods nest three levels deep (maha, antara, pratyantara).

pub mod balance;
pub mod scheme;
pub mod snapshot;
pub mod tree;
pub mod types;

pub use balance::birth_balance;
pub use scheme::{DashaScheme, Vimshottari, Yogini, scheme_for};
pub use snapshot::{ActivePeriod, DashaSnapshot, active_periods};
pub use tree::{build_dasha_tree, verify_dasha_tree};
pub use types::{
    BirthBalance, DashaLevel, DashaNode, DashaSystem, DashaTree, MAX_DASHA_DEPTH, YEAR_MS,
};

use chrono::{DateTime, Utc};

use crate::error::VedicError;

/// Build and verify a tree for `system` in one step.
pub fn compute_dasha(
    system: DashaSystem,
    moon_sidereal_lon: f64,
    birth: DateTime<Utc>,
    depth: u8,
) -> Result<DashaTree, VedicError> {
    let scheme = scheme_for(system);
    let tree = build_dasha_tree(scheme, moon_sidereal_lon, birth, depth)?;
    verify_dasha_tree(&tree, scheme)?;
    Ok(tree)
}
