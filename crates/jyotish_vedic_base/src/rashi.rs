//! Rashi (zodiac sign) lookup, sign classifications and DMS formatting.
//!
//! Twelve signs of exactly 30°, Aries at 0° sidereal. Intervals are
//! half-open: a longitude of exactly 30k lies in sign k.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::{circle_division, normalize_360};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Aries,
    Rashi::Taurus,
    Rashi::Gemini,
    Rashi::Cancer,
    Rashi::Leo,
    Rashi::Virgo,
    Rashi::Libra,
    Rashi::Scorpio,
    Rashi::Sagittarius,
    Rashi::Capricorn,
    Rashi::Aquarius,
    Rashi::Pisces,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Movable (chara), fixed (sthira) or dual (dvisvabhava).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrischika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// 0-based index (Aries = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index` modulo 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_RASHIS[index % 12]
    }

    /// Sign containing a sidereal longitude.
    pub fn from_longitude(sidereal_lon: f64) -> Self {
        Self::from_index(circle_division(sidereal_lon, 12).0)
    }

    /// Planetary lord of the sign.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Aries | Self::Scorpio => Graha::Mars,
            Self::Taurus | Self::Libra => Graha::Venus,
            Self::Gemini | Self::Virgo => Graha::Mercury,
            Self::Cancer => Graha::Moon,
            Self::Leo => Graha::Sun,
            Self::Sagittarius | Self::Pisces => Graha::Jupiter,
            Self::Capricorn | Self::Aquarius => Graha::Saturn,
        }
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// Odd signs in 1-based counting: Aries, Gemini, Leo, ...
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    /// The `n`-th sign counting from this one inclusively (1 = this sign).
    pub const fn nth(self, n: usize) -> Self {
        Self::from_index(self.index() + (n + 11) % 12)
    }

    /// Inclusive count from this sign to `other`, in 1..=12.
    pub const fn count_to(self, other: Rashi) -> u8 {
        ((other.index() + 12 - self.index()) % 12 + 1) as u8
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Decimal degrees to DMS. Negative input is taken by magnitude.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let rem = (d - degrees) * 60.0;
    let minutes = rem.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (rem - minutes) * 60.0,
    }
}

pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Sign and in-sign position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

pub fn rashi_from_longitude(sidereal_lon: f64) -> RashiInfo {
    let (idx, frac) = circle_division(sidereal_lon, 12);
    let degrees_in_rashi = frac * 30.0;
    RashiInfo {
        rashi: Rashi::from_index(idx),
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}

/// `"Leo 12°03'07.20\""` style label for a sidereal longitude.
pub fn format_longitude(sidereal_lon: f64) -> String {
    let info = rashi_from_longitude(normalize_360(sidereal_lon));
    format!("{} {}", info.rashi, info.dms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lordship_pairs() {
        assert_eq!(Rashi::Aries.lord(), Graha::Mars);
        assert_eq!(Rashi::Scorpio.lord(), Graha::Mars);
        assert_eq!(Rashi::Leo.lord(), Graha::Sun);
        assert_eq!(Rashi::Cancer.lord(), Graha::Moon);
        assert_eq!(Rashi::Pisces.lord(), Graha::Jupiter);
        assert_eq!(Rashi::Aquarius.lord(), Graha::Saturn);
    }

    #[test]
    fn elements_and_modalities() {
        assert_eq!(Rashi::Sagittarius.element(), Element::Fire);
        assert_eq!(Rashi::Capricorn.element(), Element::Earth);
        assert_eq!(Rashi::Aquarius.element(), Element::Air);
        assert_eq!(Rashi::Scorpio.element(), Element::Water);
        assert_eq!(Rashi::Cancer.modality(), Modality::Movable);
        assert_eq!(Rashi::Scorpio.modality(), Modality::Fixed);
        assert_eq!(Rashi::Pisces.modality(), Modality::Dual);
    }

    #[test]
    fn nth_and_count() {
        assert_eq!(Rashi::Aries.nth(1), Rashi::Aries);
        assert_eq!(Rashi::Aries.nth(7), Rashi::Libra);
        assert_eq!(Rashi::Pisces.nth(2), Rashi::Aries);
        assert_eq!(Rashi::Aries.nth(12), Rashi::Pisces);
        assert_eq!(Rashi::Aries.count_to(Rashi::Aries), 1);
        assert_eq!(Rashi::Libra.count_to(Rashi::Aries), 7);
        assert_eq!(Rashi::Taurus.count_to(Rashi::Aries), 12);
    }

    #[test]
    fn boundary_belongs_to_later_sign() {
        assert_eq!(Rashi::from_longitude(30.0), Rashi::Taurus);
        assert_eq!(Rashi::from_longitude(29.999_999), Rashi::Aries);
        assert_eq!(Rashi::from_longitude(360.0), Rashi::Aries);
    }

    #[test]
    fn rashi_info_degrees() {
        let info = rashi_from_longitude(123.5);
        assert_eq!(info.rashi, Rashi::Leo);
        assert!((info.degrees_in_rashi - 3.5).abs() < 1e-9);
        assert_eq!(info.dms.degrees, 3);
        assert_eq!(info.dms.minutes, 30);
    }

    #[test]
    fn dms_round_trip() {
        let d = 17.257_5;
        let back = dms_to_deg(&deg_to_dms(d));
        assert!((back - d).abs() < 1e-10);
    }

    #[test]
    fn format_label() {
        assert_eq!(format_longitude(45.0), "Taurus 15°00'00.00\"");
    }
}
