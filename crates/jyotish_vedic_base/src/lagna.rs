//! Lagna (Ascendant) and MC from local sidereal time.
//!
//! With θ the local sidereal time, φ the geographic latitude and ε the mean
//! obliquity of date, the rising point of the ecliptic is
//!
//! `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`
//!
//! which is the half-turn of the textbook expression
//! `atan2(−cos θ, sin θ·cos ε + tan φ·sin ε)`; taken literally the latter
//! yields the setting point. MC is `atan2(sin θ, cos θ·cos ε)`.

use serde::Serialize;

use jyotish_frames::mean_obliquity_deg;
use jyotish_time::{jd_to_centuries, local_sidereal_time_deg};

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Tropical ecliptic longitude of the Ascendant in degrees [0, 360).
pub fn ascendant_from_lst(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Tropical ecliptic longitude of the MC in degrees [0, 360).
pub fn mc_from_lst(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees())
}

/// Tropical Ascendant for a Julian Date (UT) and location (east-positive).
pub fn tropical_ascendant_deg(jd: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let lst = local_sidereal_time_deg(jd, longitude_deg);
    let eps = mean_obliquity_deg(jd_to_centuries(jd));
    ascendant_from_lst(lst, latitude_deg, eps)
}

pub fn tropical_mc_deg(jd: f64, longitude_deg: f64) -> f64 {
    let lst = local_sidereal_time_deg(jd, longitude_deg);
    mc_from_lst(lst, mean_obliquity_deg(jd_to_centuries(jd)))
}

/// The natal Ascendant in the sidereal zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ascendant {
    pub tropical_longitude: f64,
    pub longitude: f64,
    pub rashi: Rashi,
    pub degree_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

impl Ascendant {
    pub fn from_longitudes(tropical_longitude: f64, sidereal_longitude: f64) -> Self {
        let r = rashi_from_longitude(sidereal_longitude);
        let n = nakshatra_from_longitude(sidereal_longitude);
        Self {
            tropical_longitude,
            longitude: normalize_360(sidereal_longitude),
            rashi: r.rashi,
            degree_in_rashi: r.degrees_in_rashi,
            nakshatra: n.nakshatra,
            pada: n.pada,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_frames::OBLIQUITY_J2000_DEG;

    const EPS: f64 = 1e-9;

    #[test]
    fn equator_lst_zero_rises_cancer() {
        let asc = ascendant_from_lst(0.0, 0.0, OBLIQUITY_J2000_DEG);
        assert!((asc - 90.0).abs() < EPS, "asc = {asc}");
    }

    #[test]
    fn equator_lst_ninety_rises_libra() {
        let asc = ascendant_from_lst(90.0, 0.0, OBLIQUITY_J2000_DEG);
        assert!((asc - 180.0).abs() < EPS, "asc = {asc}");
    }

    #[test]
    fn mc_tracks_lst_at_cardinal_points() {
        for lst in [0.0, 90.0, 180.0, 270.0] {
            let mc = mc_from_lst(lst, OBLIQUITY_J2000_DEG);
            assert!((normalize_360(mc - lst + 180.0) - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn ascendant_leads_mc() {
        for lat in [-50.0, -20.0, 0.0, 28.6, 51.5] {
            for i in 0..24 {
                let lst = i as f64 * 15.0 + 3.0;
                let asc = ascendant_from_lst(lst, lat, OBLIQUITY_J2000_DEG);
                let mc = mc_from_lst(lst, OBLIQUITY_J2000_DEG);
                let d = normalize_360(asc - mc);
                assert!(d > 0.0 && d < 180.0, "lat {lat} lst {lst}: asc-mc = {d}");
            }
        }
    }

    #[test]
    fn ascendant_advances_with_time() {
        let a = tropical_ascendant_deg(2_451_545.0, 28.6, 77.2);
        let b = tropical_ascendant_deg(2_451_545.0 + 0.01, 28.6, 77.2);
        let d = normalize_360(b - a);
        assert!(d > 0.0 && d < 10.0, "advance = {d}");
    }

    #[test]
    fn ascendant_record_fields() {
        let asc = Ascendant::from_longitudes(124.0, 100.0);
        assert_eq!(asc.rashi, Rashi::Cancer);
        assert!((asc.degree_in_rashi - 10.0).abs() < 1e-9);
        assert_eq!(asc.nakshatra, Nakshatra::Pushya);
    }
}
