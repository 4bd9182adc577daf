//! Delaunay fundamental arguments of lunar theory.
//!
//! Polynomials from IERS Conventions 2010, Table 5.2e.

use std::f64::consts::TAU;

const ARCSEC_TO_RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay arguments, in radians (not reduced to one turn).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayArgs {
    /// Mean anomaly of the Moon.
    pub l: f64,
    /// Mean anomaly of the Sun.
    pub l_prime: f64,
    /// Mean argument of latitude of the Moon.
    pub f: f64,
    /// Mean elongation of the Moon from the Sun.
    pub d: f64,
    /// Mean longitude of the Moon's ascending node.
    pub omega: f64,
}

fn poly(t: f64, c: [f64; 5]) -> f64 {
    (c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))) * ARCSEC_TO_RAD
}

/// Compute the Delaunay arguments at `t` centuries since J2000.0.
pub fn fundamental_arguments(t: f64) -> DelaunayArgs {
    DelaunayArgs {
        l: poly(t, [485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470]),
        l_prime: poly(t, [1287104.79305, 129596581.0481, -0.5532, 0.000136, -0.00001149]),
        f: poly(t, [335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417]),
        d: poly(t, [1072260.70369, 1602961601.2090, -6.3706, 0.006593, -0.00003169]),
        omega: poly(t, [450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        let a = fundamental_arguments(0.0);
        let om = a.omega.to_degrees().rem_euclid(360.0);
        assert!((om - 125.0445).abs() < 1e-3, "Ω = {om}");
    }

    #[test]
    fn node_regresses() {
        let a0 = fundamental_arguments(0.0).omega;
        let a1 = fundamental_arguments(0.01).omega;
        // About −19.34° per year.
        let d = (a1 - a0).to_degrees();
        assert!((d + 19.34).abs() < 0.01, "dΩ = {d}");
    }
}
