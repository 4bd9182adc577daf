//! Earth Rotation Angle, Greenwich Mean Sidereal Time and local sidereal time.
//!
//! Inputs are Julian Dates in UT1; callers pass UTC, which differs from UT1
//! by less than 0.9 s.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

fn wrap_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Earth Rotation Angle in degrees [0, 360).
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0.
pub fn earth_rotation_angle_deg(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    // Split the integer day to keep the fractional turn precise.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    wrap_deg(turns.rem_euclid(1.0) * 360.0)
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
pub fn gmst_deg(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * -0.0000000368))));
    wrap_deg(earth_rotation_angle_deg(jd_ut1) + poly_arcsec / 3600.0)
}

/// Local sidereal time in degrees [0, 360) for an east-positive longitude.
pub fn local_sidereal_time_deg(jd_ut1: f64, east_longitude_deg: f64) -> f64 {
    wrap_deg(gmst_deg(jd_ut1) + east_longitude_deg)
}
