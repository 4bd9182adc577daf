//! Reference-frame quantities used by sidereal chart computation.
//!
//! Provides IAU 2006 general precession (the basis of every ayanamsha),
//! the mean obliquity of the ecliptic of date, the Delaunay fundamental
//! arguments, and ecliptic → equatorial conversion.
//!
//! All functions take `t`, Julian centuries since J2000.0.

pub mod equatorial;
pub mod fundamental;
pub mod obliquity;
pub mod precession;

pub use equatorial::{EquatorialCoords, ecliptic_to_equatorial};
pub use fundamental::{DelaunayArgs, fundamental_arguments};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
