//! Gochara: transits read from the natal Moon sign.

use serde::Serialize;

use crate::graha::Graha;
use crate::position::PlanetPosition;
use crate::rashi::Rashi;

/// Favourable houses from the natal Moon, indexed by [`Graha::index`].
pub const FAVORABLE_HOUSES: [&[u8]; 9] = [
    &[3, 6, 10, 11],
    &[1, 3, 6, 7, 10, 11],
    &[3, 6, 11],
    &[2, 4, 6, 8, 10, 11],
    &[2, 5, 7, 9, 11],
    &[1, 2, 3, 4, 5, 8, 9, 11, 12],
    &[3, 6, 11],
    &[3, 6, 11],
    &[3, 6, 11],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Favorability {
    Favorable,
    Unfavorable,
}

pub fn favorability(graha: Graha, house_from_moon: u8) -> Favorability {
    if FAVORABLE_HOUSES[graha.index()].contains(&house_from_moon) {
        Favorability::Favorable
    } else {
        Favorability::Unfavorable
    }
}

/// Phase of Saturn's 7.5-year passage over the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SadeSatiPhase {
    /// Saturn in the 12th from the Moon.
    Rising,
    /// Saturn over the Moon sign.
    Peak,
    /// Saturn in the 2nd from the Moon.
    Setting,
}

pub fn sade_sati_phase(house_from_moon: u8) -> Option<SadeSatiPhase> {
    match house_from_moon {
        12 => Some(SadeSatiPhase::Rising),
        1 => Some(SadeSatiPhase::Peak),
        2 => Some(SadeSatiPhase::Setting),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitPosition {
    pub graha: Graha,
    pub longitude: f64,
    pub rashi: Rashi,
    /// 1..=12, counted from the natal Moon sign.
    pub house_from_moon: u8,
    pub favorability: Favorability,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GocharaReport {
    pub natal_moon_rashi: Rashi,
    pub positions: Vec<TransitPosition>,
    pub sade_sati: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sade_sati_phase: Option<SadeSatiPhase>,
}

impl GocharaReport {
    pub fn position(&self, graha: Graha) -> Option<&TransitPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }

    pub fn favorable(&self) -> impl Iterator<Item = &TransitPosition> {
        self.positions
            .iter()
            .filter(|p| p.favorability == Favorability::Favorable)
    }
}

pub fn gochara(natal_moon_rashi: Rashi, transits: &[PlanetPosition]) -> GocharaReport {
    let positions: Vec<TransitPosition> = transits
        .iter()
        .map(|p| {
            let house = natal_moon_rashi.count_to(p.rashi);
            TransitPosition {
                graha: p.graha,
                longitude: p.longitude,
                rashi: p.rashi,
                house_from_moon: house,
                favorability: favorability(p.graha, house),
                retrograde: p.retrograde,
            }
        })
        .collect();
    let phase = positions
        .iter()
        .find(|p| p.graha == Graha::Saturn)
        .and_then(|s| sade_sati_phase(s.house_from_moon));
    GocharaReport {
        natal_moon_rashi,
        positions,
        sade_sati: phase.is_some(),
        sade_sati_phase: phase,
    }
}
