//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated westward motion of the equinox along the ecliptic
//! since J2000.0; every ayanamsha is a J2000 reference value plus p_A.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).

/// General precession in longitude, arcseconds.
///
/// Dominant term ≈ 5028.80″ per century (≈ 50.29″ per year).
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    t * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))))
}

/// General precession in longitude, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}
