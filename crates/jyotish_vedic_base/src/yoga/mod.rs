//! Yoga detection.
//!
//! Each yoga is one row in [`YOGA_RULES`]: a name, a category, and a plain
//! predicate over [`YogaFacts`] that returns the facts satisfying it. Rules
//! are evaluated independently; one rule never sees another's result.
//!
//! Whether a yoga is present depends only on the natal chart. The running
//! dasha marks a match as active but never decides whether it fires.

pub mod rules;

use serde::Serialize;

use crate::ashtakavarga::AshtakavargaGrid;
use crate::bhava::HousePlacement;
use crate::dasha::DashaSnapshot;
use crate::drishti::AspectSet;
use crate::graha::{Graha, Nature, functional_nature};
use crate::position::PlanetPosition;
use crate::rashi::Rashi;
use crate::relationships::{Dignity, FriendshipRelation, Panchadha, SignPositions, dignity};
use crate::shadbala::ShadbalaScore;
use crate::util::normalize_360;

pub use rules::YOGA_RULES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaCategory {
    Raja,
    Dhana,
    Planetary,
    Malefic,
}

/// A concrete chart fact that contributed to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fact {
    Body {
        graha: Graha,
        rashi: Rashi,
        #[serde(skip_serializing_if = "Option::is_none")]
        house: Option<u8>,
    },
    House {
        number: u8,
        rashi: Rashi,
    },
    Dignity {
        graha: Graha,
        dignity: Dignity,
    },
    /// Compound relationship: how `graha` regards `other`.
    Friendship {
        graha: Graha,
        other: Graha,
        composite: Panchadha,
    },
    /// Sarvashtakavarga points of a house from the lagna.
    Bindus {
        house: u8,
        points: u8,
    },
}

pub type Predicate = fn(&YogaFacts<'_>) -> Option<Vec<Fact>>;

pub struct YogaRule {
    pub name: &'static str,
    pub category: YogaCategory,
    /// Rule reads houses counted from the lagna and cannot run without it.
    pub needs_ascendant: bool,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaMatch {
    pub name: &'static str,
    pub category: YogaCategory,
    pub facts: Vec<Fact>,
    /// A body in the facts rules the running maha- or antardasha.
    pub dasha_active: bool,
}

/// Composed chart state the rules read from.
pub struct YogaFacts<'a> {
    /// Sun..Ketu, indexed by [`Graha::index`].
    pub positions: &'a [PlanetPosition],
    pub houses: Option<&'a HousePlacement>,
    pub aspects: &'a AspectSet,
    pub relationships: &'a [FriendshipRelation],
    pub shadbala: Option<&'a [ShadbalaScore]>,
    pub ashtakavarga: Option<&'a AshtakavargaGrid>,
    pub dasha: Option<&'a DashaSnapshot>,
    signs: SignPositions,
    dignities: [Dignity; 9],
}

impl<'a> YogaFacts<'a> {
    pub fn new(
        positions: &'a [PlanetPosition],
        houses: Option<&'a HousePlacement>,
        aspects: &'a AspectSet,
        relationships: &'a [FriendshipRelation],
    ) -> Self {
        let lons: Vec<(Graha, f64)> = positions.iter().map(|p| (p.graha, p.longitude)).collect();
        let signs = SignPositions::from_longitudes(&lons);
        let mut dignities = [Dignity::Neutral; 9];
        for p in positions {
            dignities[p.graha.index()] = dignity(p.graha, p.longitude, &signs);
        }
        Self {
            positions,
            houses,
            aspects,
            relationships,
            shadbala: None,
            ashtakavarga: None,
            dasha: None,
            signs,
            dignities,
        }
    }

    pub fn with_shadbala(mut self, scores: &'a [ShadbalaScore]) -> Self {
        self.shadbala = Some(scores);
        self
    }

    pub fn with_ashtakavarga(mut self, grid: &'a AshtakavargaGrid) -> Self {
        self.ashtakavarga = Some(grid);
        self
    }

    pub fn with_dasha(mut self, snapshot: &'a DashaSnapshot) -> Self {
        self.dasha = Some(snapshot);
        self
    }

    pub fn sign(&self, graha: Graha) -> Rashi {
        self.signs.sign_of(graha)
    }

    pub fn dignity(&self, graha: Graha) -> Dignity {
        self.dignities[graha.index()]
    }

    pub fn longitude(&self, graha: Graha) -> f64 {
        self.positions
            .iter()
            .find(|p| p.graha == graha)
            .map_or(0.0, |p| p.longitude)
    }

    /// House from the lagna, when the lagna is known.
    pub fn house(&self, graha: Graha) -> Option<u8> {
        self.houses.map(|h| h.ascendant_rashi.count_to(self.sign(graha)))
    }

    /// Sign count from the Moon (Moon's own sign is 1).
    pub fn from_moon(&self, graha: Graha) -> u8 {
        self.sign(Graha::Moon).count_to(self.sign(graha))
    }

    pub fn lord_of_house(&self, n: u8) -> Option<Graha> {
        self.houses.map(|h| h.lord_of_house(n))
    }

    /// Compound relationship of `graha` towards `other`, when the chart's
    /// relationship matrix holds the pair.
    pub fn composite(&self, graha: Graha, other: Graha) -> Option<Panchadha> {
        self.relationships
            .iter()
            .find(|r| r.from == graha && r.to == other)
            .map(|r| r.composite)
    }

    pub fn friendship(&self, graha: Graha, other: Graha) -> Option<Fact> {
        self.composite(graha, other).map(|composite| Fact::Friendship {
            graha,
            other,
            composite,
        })
    }

    /// Either side regards the other as a great enemy.
    pub fn hostile(&self, a: Graha, b: Graha) -> bool {
        self.composite(a, b) == Some(Panchadha::GreatEnemy)
            || self.composite(b, a) == Some(Panchadha::GreatEnemy)
    }

    /// Sarva points of house `n`, when the grid is known.
    pub fn bindus(&self, n: u8) -> Option<u8> {
        self.ashtakavarga.map(|g| g.sarva_in_house(n))
    }

    pub fn conjunct(&self, a: Graha, b: Graha) -> bool {
        self.sign(a) == self.sign(b)
    }

    /// Chart-specific nature; the Moon by phase.
    pub fn nature(&self, graha: Graha) -> Nature {
        let elong = normalize_360(self.longitude(Graha::Moon) - self.longitude(Graha::Sun));
        functional_nature(graha, elong)
    }

    pub fn is_strong(&self, graha: Graha) -> bool {
        let by_dignity = matches!(
            self.dignity(graha),
            Dignity::Exalted | Dignity::Moolatrikona | Dignity::OwnSign
        );
        let by_bala = self
            .shadbala
            .and_then(|s| s.iter().find(|b| b.graha == graha))
            .is_some_and(|b| b.is_strong);
        by_dignity || by_bala
    }

    pub fn body(&self, graha: Graha) -> Fact {
        Fact::Body {
            graha,
            rashi: self.sign(graha),
            house: self.house(graha),
        }
    }

    pub fn house_fact(&self, n: u8) -> Option<Fact> {
        self.houses.map(|h| Fact::House {
            number: n,
            rashi: h.rashi_of_house(n),
        })
    }

    fn touches_dasha(&self, facts: &[Fact]) -> bool {
        let Some(snap) = self.dasha else {
            return false;
        };
        let lords = [snap.maha_lord(), snap.antara_lord()];
        facts.iter().any(|f| match f {
            Fact::Body { graha, .. } | Fact::Dignity { graha, .. } => lords.contains(&Some(*graha)),
            Fact::Friendship { graha, other, .. } => {
                lords.contains(&Some(*graha)) || lords.contains(&Some(*other))
            }
            Fact::House { .. } | Fact::Bindus { .. } => false,
        })
    }
}

/// Run every rule in `rules` against `facts`.
pub fn detect_in(rules: &[YogaRule], facts: &YogaFacts<'_>) -> Vec<YogaMatch> {
    let mut out = Vec::new();
    for rule in rules {
        if rule.needs_ascendant && facts.houses.is_none() {
            log::trace!("yoga {} skipped: lagna unknown", rule.name);
            continue;
        }
        if let Some(found) = (rule.predicate)(facts) {
            out.push(YogaMatch {
                name: rule.name,
                category: rule.category,
                dasha_active: facts.touches_dasha(&found),
                facts: found,
            });
        }
    }
    log::debug!("{} of {} yogas matched", out.len(), rules.len());
    out
}

/// Run the built-in rule table.
pub fn detect_yogas(facts: &YogaFacts<'_>) -> Vec<YogaMatch> {
    detect_in(&YOGA_RULES, facts)
}
