//! Tropical to sidereal conversion.

use crate::ayanamsha::Ayanamsha;
use crate::util::normalize_360;

/// `tropical − ayanamsha`, normalized to [0, 360).
pub fn tropical_to_sidereal(tropical_lon: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_lon - ayanamsha_deg)
}

pub fn sidereal_to_tropical(sidereal_lon: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(sidereal_lon + ayanamsha_deg)
}

/// Sidereal longitude using any [`Ayanamsha`] evaluated at `jd`.
pub fn sidereal_longitude(tropical_lon: f64, ayanamsha: &dyn Ayanamsha, jd: f64) -> f64 {
    tropical_to_sidereal(tropical_lon, ayanamsha.offset_deg(jd))
}
