//! Sidereal planetary position record.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::sidereal::tropical_to_sidereal;
use crate::util::normalize_360;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    pub tropical_longitude: f64,
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    pub latitude: f64,
    /// Signed degrees per day.
    pub speed: f64,
    pub rashi: Rashi,
    pub degree_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index, [0, 27).
    pub nakshatra_index: u8,
    /// 1..=4.
    pub pada: u8,
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Build from a tropical sample and the ayanamsha in effect.
    ///
    /// Nodes are always flagged retrograde.
    pub fn from_tropical(
        graha: Graha,
        tropical_longitude: f64,
        ayanamsha_deg: f64,
        latitude: f64,
        speed: f64,
    ) -> Self {
        let longitude = tropical_to_sidereal(tropical_longitude, ayanamsha_deg);
        let r = rashi_from_longitude(longitude);
        let n = nakshatra_from_longitude(longitude);
        Self {
            graha,
            tropical_longitude: normalize_360(tropical_longitude),
            longitude,
            latitude,
            speed,
            rashi: r.rashi,
            degree_in_rashi: r.degrees_in_rashi,
            nakshatra: n.nakshatra,
            nakshatra_index: n.nakshatra.index() as u8,
            pada: n.pada,
            retrograde: graha.is_node() || speed < 0.0,
        }
    }
}
