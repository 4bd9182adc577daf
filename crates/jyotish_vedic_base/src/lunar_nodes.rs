//! Lunar nodes: Rahu (ascending) and Ketu (descending, Rahu + 180°).
//!
//! Mean node is the fifth Delaunay argument (IERS 2010, Table 5.2e). True
//! node adds the five periodic terms of Meeus, *Astronomical Algorithms*
//! (2nd ed.), Chapter 47.

use serde::{Deserialize, Serialize};

use jyotish_frames::{DelaunayArgs, fundamental_arguments};
use jyotish_time::DAYS_PER_JULIAN_CENTURY;

use crate::util::normalize_360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean node plus short-period perturbations.
    True,
}

/// Mean Rahu, tropical degrees [0, 360). `t` in centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(fundamental_arguments(t).omega.to_degrees())
}

fn node_perturbation_deg(a: &DelaunayArgs) -> f64 {
    -1.4979 * (2.0 * (a.d - a.f)).sin() - 0.1500 * a.l_prime.sin()
        + 0.1226 * (2.0 * a.d).sin()
        + 0.1176 * (2.0 * a.f).sin()
        - 0.0801 * (2.0 * (a.l - a.f)).sin()
}

/// True Rahu, tropical degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_360(args.omega.to_degrees() + node_perturbation_deg(&args))
}

pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}

pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

/// Mean nodal rate in degrees per day (negative: the nodes regress).
pub fn node_speed_deg_per_day(t: f64) -> f64 {
    // dΩ/dT of the Table 5.2e polynomial, arcsec per century
    let arcsec_per_cy = -6_962_890.5431 + t * (2.0 * 7.4722 + t * (3.0 * 0.007702));
    arcsec_per_cy / 3600.0 / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_node_j2000() {
        assert!((mean_rahu_deg(0.0) - 125.0445).abs() < 1e-3);
    }

    #[test]
    fn true_node_near_mean() {
        for i in -20..20 {
            let t = i as f64 * 0.05;
            let d = normalize_360(true_rahu_deg(t) - mean_rahu_deg(t) + 180.0) - 180.0;
            assert!(d.abs() < 2.1, "true-mean = {d} at t={t}");
        }
    }

    #[test]
    fn meeus_example_true_node() {
        // Epoch of Meeus example 47.a, 1992-04-12 0h: mean 274.4007°
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        assert!((mean_rahu_deg(t) - 274.4007).abs() < 1e-3);
        assert!((true_rahu_deg(t) - 273.5562).abs() < 1e-3, "{}", true_rahu_deg(t));
    }

    #[test]
    fn ketu_opposite() {
        for r in [0.0, 10.0, 179.9, 180.0, 359.5] {
            let k = ketu_from_rahu(r);
            assert!(((k - r).rem_euclid(360.0) - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn nodes_regress() {
        let v = node_speed_deg_per_day(0.0);
        assert!((v + 0.052_95).abs() < 1e-4, "rate = {v}");
    }
}
