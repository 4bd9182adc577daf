//! Nakshatra-based dasha schemes.
//!
//! A scheme is a cyclic sequence of (lord, years) entries plus the map from
//! the Moon's nakshatra to the first entry. Sub-periods are proportional
//! and rotate from the parent's entry.

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

use super::types::{DashaSystem, YEAR_MS};

/// A dasha system expressible as a cyclic, proportionally subdivided
/// sequence.
pub trait DashaScheme: Send + Sync {
    fn system(&self) -> DashaSystem;

    /// Number of entries in one cycle.
    fn len(&self) -> usize;

    fn lord(&self, idx: usize) -> Graha;

    fn label(&self, idx: usize) -> &'static str;

    /// Whole years of entry `idx`.
    fn years(&self, idx: usize) -> i64;

    /// Entry that rules the given birth nakshatra.
    fn starting_index(&self, nakshatra: Nakshatra) -> usize;

    /// How many full cycles the mahadasha sequence spans.
    fn cycle_count(&self) -> usize {
        1
    }

    fn total_years(&self) -> i64 {
        (0..self.len()).map(|i| self.years(i)).sum()
    }

    /// Smallest period quantum, `year / total²`. Every pratyantara is an
    /// integer multiple of it.
    fn unit_ms(&self) -> i64 {
        let t = self.total_years();
        YEAR_MS / (t * t)
    }

    fn period_ms(&self, idx: usize) -> i64 {
        self.years(idx) * YEAR_MS
    }
}

const VIMSHOTTARI: [(Graha, i64); 9] = [
    (Graha::Ketu, 7),
    (Graha::Venus, 20),
    (Graha::Sun, 6),
    (Graha::Moon, 10),
    (Graha::Mars, 7),
    (Graha::Rahu, 18),
    (Graha::Jupiter, 16),
    (Graha::Saturn, 19),
    (Graha::Mercury, 17),
];

/// 120-year Vimshottari cycle; Ashwini starts with Ketu.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vimshottari;

impl DashaScheme for Vimshottari {
    fn system(&self) -> DashaSystem {
        DashaSystem::Vimshottari
    }

    fn len(&self) -> usize {
        VIMSHOTTARI.len()
    }

    fn lord(&self, idx: usize) -> Graha {
        VIMSHOTTARI[idx % 9].0
    }

    fn label(&self, idx: usize) -> &'static str {
        self.lord(idx).name()
    }

    fn years(&self, idx: usize) -> i64 {
        VIMSHOTTARI[idx % 9].1
    }

    fn starting_index(&self, nakshatra: Nakshatra) -> usize {
        nakshatra.index() % 9
    }
}

const YOGINIS: [(&str, Graha, i64); 8] = [
    ("Mangala", Graha::Moon, 1),
    ("Pingala", Graha::Sun, 2),
    ("Dhanya", Graha::Jupiter, 3),
    ("Bhramari", Graha::Mars, 4),
    ("Bhadrika", Graha::Mercury, 5),
    ("Ulka", Graha::Saturn, 6),
    ("Siddha", Graha::Venus, 7),
    ("Sankata", Graha::Rahu, 8),
];

/// 36-year Yogini cycle, laid out three times to cover a lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yogini;

impl DashaScheme for Yogini {
    fn system(&self) -> DashaSystem {
        DashaSystem::Yogini
    }

    fn len(&self) -> usize {
        YOGINIS.len()
    }

    fn lord(&self, idx: usize) -> Graha {
        YOGINIS[idx % 8].1
    }

    fn label(&self, idx: usize) -> &'static str {
        YOGINIS[idx % 8].0
    }

    fn years(&self, idx: usize) -> i64 {
        YOGINIS[idx % 8].2
    }

    // 1-based nakshatra + 3, mod 8, where remainder 0 is Sankata.
    fn starting_index(&self, nakshatra: Nakshatra) -> usize {
        (nakshatra.index() + 3) % 8
    }

    fn cycle_count(&self) -> usize {
        3
    }
}

/// Scheme implementation for a configured system.
pub fn scheme_for(system: DashaSystem) -> &'static dyn DashaScheme {
    match system {
        DashaSystem::Vimshottari => &Vimshottari,
        DashaSystem::Yogini => &Yogini,
    }
}
