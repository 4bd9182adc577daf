//! Mean obliquity of the ecliptic (IAU 2006).

/// Mean obliquity at J2000.0: 84381.406″.
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// Mean obliquity of the ecliptic of date, in degrees.
///
/// ε_A = 84381.406″ − 46.836769″T − 0.0001831″T² + 0.00200340″T³
///       − 0.000000576″T⁴ − 0.0000000434″T⁵
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.406
        + t * (-46.836769
            + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 + t * -0.0000000434))));
    arcsec / 3600.0
}
