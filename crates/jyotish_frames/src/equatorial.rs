//! Ecliptic → equatorial coordinate conversion.

/// Right ascension and declination, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in [0, 360).
    pub right_ascension_deg: f64,
    /// Declination in [−90, 90].
    pub declination_deg: f64,
}

/// Rotate ecliptic (λ, β) about the equinox by obliquity ε.
///
/// Meeus, *Astronomical Algorithms*, Eq. 13.3–13.4.
pub fn ecliptic_to_equatorial(
    longitude_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> EquatorialCoords {
    let (lam, beta, eps) = (
        longitude_deg.to_radians(),
        latitude_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let ra = f64::atan2(
        lam.sin() * eps.cos() - beta.tan() * eps.sin(),
        lam.cos(),
    );
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin())
        .clamp(-1.0, 1.0)
        .asin();
    EquatorialCoords {
        right_ascension_deg: ra.to_degrees().rem_euclid(360.0),
        declination_deg: dec.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn equinox_maps_to_origin() {
        let c = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(c.right_ascension_deg.abs() < EPS);
        assert!(c.declination_deg.abs() < EPS);
    }

    #[test]
    fn solstice_declination_equals_obliquity() {
        let c = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((c.right_ascension_deg - 90.0).abs() < EPS);
        assert!((c.declination_deg - 23.44).abs() < EPS);
        let w = ecliptic_to_equatorial(270.0, 0.0, 23.44);
        assert!((w.declination_deg + 23.44).abs() < EPS);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        // → α = 116.328942°, δ = 28.026183°
        let c = ecliptic_to_equatorial(113.215630, 6.684170, 23.4392911);
        assert!((c.right_ascension_deg - 116.328942).abs() < 1e-5);
        assert!((c.declination_deg - 28.026183).abs() < 1e-5);
    }
}
