//! Divisional (varga) charts.
//!
//! Every supported varga is one row of [`VARGA_TABLE`]. A row either splits
//! the sign into equal parts mapped from a starting sign by a fixed step, or
//! lists unequal degree segments per sign parity. The varga longitude keeps
//! the fractional position within the part: `target_sign·30 + frac·30`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bhava::HousePlacement;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::position::PlanetPosition;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{circle_division, span_division};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// The sixteen Shodashavarga charts in order.
pub const SHODASHAVARGA: [Varga; 16] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D30,
    Varga::D40,
    Varga::D45,
    Varga::D60,
];

/// The seven vargas scored by saptavargaja bala.
pub const SAPTAVARGA: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

impl Varga {
    /// Number of divisions per sign.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D27 => "Bhamsha",
            Self::D30 => "Trimshamsha",
            Self::D40 => "Khavedamsha",
            Self::D45 => "Akshavedamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        SHODASHAVARGA.into_iter().find(|v| v.divisions() == code)
    }
}

impl Display for Varga {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", self.divisions())
    }
}

impl FromStr for Varga {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let digits = t.strip_prefix(['D', 'd']).unwrap_or(t);
        digits
            .parse::<u16>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| VedicError::UnknownName {
                kind: "varga",
                name: s.to_string(),
            })
    }
}

/// Where the first part of a sign maps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartRule {
    /// The natal sign itself.
    Natal,
    /// Natal sign plus an offset chosen by sign parity.
    NatalOffset { odd: u8, even: u8 },
    Fixed(Rashi),
    ByParity { odd: Rashi, even: Rashi },
    /// Indexed fire, earth, air, water.
    ByElement([Rashi; 4]),
    /// Indexed movable, fixed, dual.
    ByModality([Rashi; 3]),
}

impl StartRule {
    fn start(&self, natal: Rashi) -> Rashi {
        match *self {
            Self::Natal => natal,
            Self::NatalOffset { odd, even } => {
                let off = if natal.is_odd() { odd } else { even };
                Rashi::from_index(natal.index() + off as usize)
            }
            Self::Fixed(r) => r,
            Self::ByParity { odd, even } => {
                if natal.is_odd() {
                    odd
                } else {
                    even
                }
            }
            Self::ByElement(table) => table[natal.element() as usize],
            Self::ByModality(table) => table[natal.modality() as usize],
        }
    }
}

/// Subdivision rule of one varga.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VargaRule {
    /// `parts` equal segments; segment i maps to `start + i·step`.
    Uniform { parts: u16, start: StartRule, step: u8 },
    /// Unequal segments as `(upper bound in degrees, sign)`, ascending.
    Segments {
        odd: &'static [(f64, Rashi)],
        even: &'static [(f64, Rashi)],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VargaRow {
    pub varga: Varga,
    pub rule: VargaRule,
}

use Rashi::*;

const fn uniform(varga: Varga, start: StartRule, step: u8) -> VargaRow {
    VargaRow {
        varga,
        rule: VargaRule::Uniform {
            parts: varga.divisions(),
            start,
            step,
        },
    }
}

/// Parashari hora: Sun's half is Leo, Moon's half is Cancer.
const HORA_ODD: [(f64, Rashi); 2] = [(15.0, Leo), (30.0, Cancer)];
const HORA_EVEN: [(f64, Rashi); 2] = [(15.0, Cancer), (30.0, Leo)];

/// Parashari trimshamsha: Mars 5, Saturn 5, Jupiter 8, Mercury 7, Venus 5
/// in odd signs, reversed in even signs.
const TRIMSHAMSHA_ODD: [(f64, Rashi); 5] = [
    (5.0, Aries),
    (10.0, Aquarius),
    (18.0, Sagittarius),
    (25.0, Gemini),
    (30.0, Libra),
];
const TRIMSHAMSHA_EVEN: [(f64, Rashi); 5] = [
    (5.0, Taurus),
    (12.0, Virgo),
    (20.0, Pisces),
    (25.0, Capricorn),
    (30.0, Scorpio),
];

pub static VARGA_TABLE: [VargaRow; 16] = [
    uniform(Varga::D1, StartRule::Natal, 0),
    VargaRow {
        varga: Varga::D2,
        rule: VargaRule::Segments {
            odd: &HORA_ODD,
            even: &HORA_EVEN,
        },
    },
    uniform(Varga::D3, StartRule::Natal, 4),
    uniform(Varga::D4, StartRule::Natal, 3),
    uniform(Varga::D7, StartRule::NatalOffset { odd: 0, even: 6 }, 1),
    uniform(Varga::D9, StartRule::ByElement([Aries, Capricorn, Libra, Cancer]), 1),
    uniform(Varga::D10, StartRule::NatalOffset { odd: 0, even: 8 }, 1),
    uniform(Varga::D12, StartRule::Natal, 1),
    uniform(Varga::D16, StartRule::ByModality([Aries, Leo, Sagittarius]), 1),
    uniform(Varga::D20, StartRule::ByModality([Aries, Sagittarius, Leo]), 1),
    uniform(Varga::D24, StartRule::ByParity { odd: Leo, even: Cancer }, 1),
    uniform(Varga::D27, StartRule::ByElement([Aries, Cancer, Libra, Capricorn]), 1),
    VargaRow {
        varga: Varga::D30,
        rule: VargaRule::Segments {
            odd: &TRIMSHAMSHA_ODD,
            even: &TRIMSHAMSHA_EVEN,
        },
    },
    uniform(Varga::D40, StartRule::ByParity { odd: Aries, even: Libra }, 1),
    uniform(Varga::D45, StartRule::ByModality([Aries, Leo, Sagittarius]), 1),
    uniform(Varga::D60, StartRule::Natal, 1),
];

pub fn rule_in(table: &[VargaRow], varga: Varga) -> Option<&VargaRule> {
    table.iter().find(|row| row.varga == varga).map(|row| &row.rule)
}

/// Target sign and fraction within the part for a position in `natal`.
fn apply_rule(rule: &VargaRule, natal: Rashi, deg_in_sign: f64) -> (Rashi, f64) {
    match rule {
        VargaRule::Uniform { parts, start, step } => {
            let (idx, frac) = span_division(deg_in_sign, 30.0, *parts as usize);
            let first = start.start(natal);
            (Rashi::from_index(first.index() + idx * *step as usize), frac)
        }
        VargaRule::Segments { odd, even } => {
            let segs = if natal.is_odd() { odd } else { even };
            let mut lower = 0.0;
            for (i, &(upper, sign)) in segs.iter().enumerate() {
                let last = i + 1 == segs.len();
                if last || deg_in_sign + 1e-9 < upper {
                    let frac = ((deg_in_sign - lower) / (upper - lower))
                        .clamp(0.0, 1.0 - f64::EPSILON);
                    return (sign, frac);
                }
                lower = upper;
            }
            // Rows always carry at least one segment.
            (natal, deg_in_sign / 30.0)
        }
    }
}

/// Varga longitude using a caller-supplied rule table.
pub fn varga_longitude_in(
    table: &[VargaRow],
    sidereal_lon: f64,
    varga: Varga,
) -> Result<f64, VedicError> {
    let rule = rule_in(table, varga).ok_or(VedicError::MissingVargaRule(varga))?;
    let (sign_idx, frac) = circle_division(sidereal_lon, 12);
    let (target, part_frac) = apply_rule(rule, Rashi::from_index(sign_idx), frac * 30.0);
    Ok(target.index() as f64 * 30.0 + part_frac * 30.0)
}

/// Varga longitude in [0, 360) from the built-in table.
pub fn varga_longitude(sidereal_lon: f64, varga: Varga) -> Result<f64, VedicError> {
    varga_longitude_in(&VARGA_TABLE, sidereal_lon, varga)
}

pub fn varga_rashi(sidereal_lon: f64, varga: Varga) -> Result<Rashi, VedicError> {
    Ok(Rashi::from_longitude(varga_longitude(sidereal_lon, varga)?))
}

/// A point placed in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaPoint {
    pub longitude: f64,
    pub rashi: Rashi,
    pub degree_in_rashi: f64,
}

impl VargaPoint {
    fn new(sidereal_lon: f64, varga: Varga) -> Result<Self, VedicError> {
        let longitude = varga_longitude(sidereal_lon, varga)?;
        let info = rashi_from_longitude(longitude);
        Ok(Self {
            longitude,
            rashi: info.rashi,
            degree_in_rashi: info.degrees_in_rashi,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaPosition {
    pub graha: Graha,
    #[serde(flatten)]
    pub point: VargaPoint,
}

/// Positions (and, with a known Ascendant, houses) in one varga.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub varga: Varga,
    pub positions: Vec<VargaPosition>,
    pub ascendant: Option<VargaPoint>,
    pub houses: Option<HousePlacement>,
}

impl DivisionalChart {
    pub fn build(
        varga: Varga,
        positions: &[PlanetPosition],
        ascendant_lon: Option<f64>,
    ) -> Result<Self, VedicError> {
        let positions = positions
            .iter()
            .map(|p| {
                Ok(VargaPosition {
                    graha: p.graha,
                    point: VargaPoint::new(p.longitude, varga)?,
                })
            })
            .collect::<Result<Vec<_>, VedicError>>()?;
        let ascendant = ascendant_lon.map(|lon| VargaPoint::new(lon, varga)).transpose()?;
        let houses = ascendant.map(|asc| {
            HousePlacement::whole_sign(
                asc.rashi,
                positions.iter().map(|p| (p.graha, p.point.longitude)),
            )
        });
        Ok(Self {
            varga,
            positions,
            ascendant,
            houses,
        })
    }

    pub fn rashi_of(&self, graha: Graha) -> Option<Rashi> {
        self.positions
            .iter()
            .find(|p| p.graha == graha)
            .map(|p| p.point.rashi)
    }
}
