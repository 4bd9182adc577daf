//! Ashtakavarga: eight-fold benefic points.
//!
//! For each of the seven planets, eight contributors (the seven planets and
//! the lagna) each give a point to the signs at fixed offsets from
//! themselves. The per-planet totals are chart-independent constants
//! (Sun 48, Moon 49, Mars 39, Mercury 54, Jupiter 56, Venus 52, Saturn 39;
//! 337 overall), which the calculation checks.

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::rashi::Rashi;

/// Bitmask with bit `n` set for each 1-based offset `n`.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// `RULES[target][contributor]`, contributors Sun..Saturn then lagna.
/// Offset 1 is the contributor's own sign.
#[rustfmt::skip]
const RULES: [[u16; 8]; 7] = [
    // Sun
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 6, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 5, 6, 9, 10, 11, 12]),
        bits(&[5, 6, 9, 11]),
        bits(&[6, 7, 12]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 4, 6, 10, 11, 12]),
    ],
    // Moon
    [
        bits(&[3, 6, 7, 8, 10, 11]),
        bits(&[1, 3, 6, 7, 10, 11]),
        bits(&[2, 3, 5, 6, 9, 10, 11]),
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),
        bits(&[1, 4, 7, 8, 10, 11, 12]),
        bits(&[3, 4, 5, 7, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[3, 6, 10, 11]),
    ],
    // Mars
    [
        bits(&[3, 5, 6, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[6, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 6, 10, 11]),
    ],
    // Mercury
    [
        bits(&[5, 6, 9, 11, 12]),
        bits(&[2, 4, 6, 8, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 2, 4, 6, 8, 10, 11]),
    ],
    // Jupiter
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),
        bits(&[2, 5, 7, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),
        bits(&[2, 5, 6, 9, 10, 11]),
        bits(&[3, 5, 6, 12]),
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),
    ],
    // Venus
    [
        bits(&[8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
        bits(&[3, 4, 6, 9, 11, 12]),
        bits(&[3, 5, 6, 9, 11]),
        bits(&[5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),
        bits(&[3, 4, 5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
    ],
    // Saturn
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[3, 5, 6, 10, 11, 12]),
        bits(&[6, 8, 9, 10, 11, 12]),
        bits(&[5, 6, 11, 12]),
        bits(&[6, 11, 12]),
        bits(&[3, 5, 6, 11]),
        bits(&[1, 3, 4, 6, 10, 11]),
    ],
];

/// Expected bhinna totals, Sun..Saturn.
pub const BAV_TOTALS: [u16; 7] = [48, 49, 39, 54, 56, 52, 39];

pub const SAV_TOTAL: u16 = 337;

/// Bhinna (individual) ashtakavarga of one planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bhinna {
    pub graha: Graha,
    /// Points per sign, Aries first.
    pub points: [u8; 12],
    pub total: u16,
}

/// Full ashtakavarga grid with the sarva sums and their reductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AshtakavargaGrid {
    pub lagna: Rashi,
    pub bhinna: Vec<Bhinna>,
    /// Sarvashtakavarga per sign, Aries first.
    pub sarva: [u8; 12],
    pub sarva_total: u16,
    pub after_trikona: [u8; 12],
    pub after_ekadhipatya: [u8; 12],
}

impl AshtakavargaGrid {
    /// Sarva points of house `n` (1..=12) counted from the lagna.
    pub fn sarva_in_house(&self, n: u8) -> u8 {
        self.sarva[self.lagna.nth(n as usize).index()]
    }

    pub fn bhinna_of(&self, graha: Graha) -> Option<&Bhinna> {
        self.bhinna.iter().find(|b| b.graha == graha)
    }
}

fn bhinna(target: usize, signs: &[Rashi; 7], lagna: Rashi) -> [u8; 12] {
    let rules = &RULES[target];
    let mut points = [0u8; 12];
    for (sign, slot) in points.iter_mut().enumerate() {
        for (contributor, mask) in rules.iter().enumerate() {
            let from = if contributor < 7 {
                signs[contributor]
            } else {
                lagna
            };
            let offset = from.count_to(Rashi::from_index(sign));
            if (mask >> offset) & 1 == 1 {
                *slot += 1;
            }
        }
    }
    points
}

const TRIKONA_GROUPS: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Subtract the least value of each trine from its three signs.
pub fn trikona_sodhana(totals: &[u8; 12]) -> [u8; 12] {
    let mut out = *totals;
    for group in &TRIKONA_GROUPS {
        let min = group.iter().map(|&i| out[i]).min().unwrap_or(0);
        for &i in group {
            out[i] -= min;
        }
    }
    out
}

// Only Mercury's and Jupiter's sign pairs share a lord across trines.
const EKADHIPATYA_PAIRS: [[usize; 2]; 2] = [[2, 5], [8, 11]];

pub fn ekadhipatya_sodhana(after_trikona: &[u8; 12]) -> [u8; 12] {
    let mut out = *after_trikona;
    for [a, b] in EKADHIPATYA_PAIRS {
        let min = out[a].min(out[b]);
        out[a] -= min;
        out[b] -= min;
    }
    out
}

/// Compute the grid from the signs of Sun..Saturn and the lagna sign.
pub fn ashtakavarga(signs: &[Rashi; 7], lagna: Rashi) -> Result<AshtakavargaGrid, VedicError> {
    let mut bhinna_rows = Vec::with_capacity(7);
    let mut sarva = [0u8; 12];
    for (i, graha) in SAPTA_GRAHAS.iter().enumerate() {
        let points = bhinna(i, signs, lagna);
        let total: u16 = points.iter().map(|&p| p as u16).sum();
        if total != BAV_TOTALS[i] {
            return Err(VedicError::invariant(
                "ashtakavarga",
                format!("{graha} total {total}, expected {}", BAV_TOTALS[i]),
            ));
        }
        for (s, p) in sarva.iter_mut().zip(points) {
            *s += p;
        }
        bhinna_rows.push(Bhinna {
            graha: *graha,
            points,
            total,
        });
    }
    let sarva_total: u16 = sarva.iter().map(|&p| p as u16).sum();
    if sarva_total != SAV_TOTAL {
        return Err(VedicError::invariant(
            "ashtakavarga",
            format!("sarva total {sarva_total}, expected {SAV_TOTAL}"),
        ));
    }
    let after_trikona = trikona_sodhana(&sarva);
    let after_ekadhipatya = ekadhipatya_sodhana(&after_trikona);
    log::trace!("ashtakavarga: lagna {lagna}, sarva {sarva:?}");
    Ok(AshtakavargaGrid {
        lagna,
        bhinna: bhinna_rows,
        sarva,
        sarva_total,
        after_trikona,
        after_ekadhipatya,
    })
}
