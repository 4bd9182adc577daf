//! Built-in yoga rules.

use crate::graha::{Graha, Nature, SAPTA_GRAHAS};
use crate::relationships::{Dignity, exaltation_sign};

use super::{Fact, Predicate, YogaCategory, YogaFacts, YogaRule};

const KENDRAS: [u8; 4] = [1, 4, 7, 10];
const TRIKONAS: [u8; 3] = [1, 5, 9];
const DUSTHANAS: [u8; 3] = [6, 8, 12];
const NATURAL_BENEFICS: [Graha; 3] = [Graha::Mercury, Graha::Jupiter, Graha::Venus];
const MALEFICS: [Graha; 5] = [Graha::Sun, Graha::Mars, Graha::Saturn, Graha::Rahu, Graha::Ketu];
/// Sarvashtakavarga points from which a house counts as well supported.
pub const STRONG_HOUSE_BINDUS: u8 = 28;

pub static YOGA_RULES: [YogaRule; 20] = [
    rule("Raja", YogaCategory::Raja, true, raja),
    rule("Gajakesari", YogaCategory::Raja, false, gajakesari),
    rule("Ruchaka", YogaCategory::Raja, true, ruchaka),
    rule("Bhadra", YogaCategory::Raja, true, bhadra),
    rule("Hamsa", YogaCategory::Raja, true, hamsa),
    rule("Malavya", YogaCategory::Raja, true, malavya),
    rule("Shasha", YogaCategory::Raja, true, shasha),
    rule("Neecha Bhanga Raja", YogaCategory::Raja, false, neecha_bhanga),
    rule("Viparita Raja", YogaCategory::Raja, true, viparita),
    rule("Dhana", YogaCategory::Dhana, true, dhana),
    rule("Lakshmi", YogaCategory::Dhana, true, lakshmi),
    rule("Budha-Aditya", YogaCategory::Planetary, false, budha_aditya),
    rule("Chandra-Mangala", YogaCategory::Planetary, false, chandra_mangala),
    rule("Adhi", YogaCategory::Planetary, false, adhi),
    rule("Amala", YogaCategory::Planetary, false, amala),
    rule("Shubha Kartari", YogaCategory::Planetary, true, shubha_kartari),
    rule("Kemadruma", YogaCategory::Malefic, false, kemadruma),
    rule("Papa Kartari", YogaCategory::Malefic, true, papa_kartari),
    rule("Grahana", YogaCategory::Malefic, false, grahana),
    rule("Shakata", YogaCategory::Malefic, false, shakata),
];

const fn rule(
    name: &'static str,
    category: YogaCategory,
    needs_ascendant: bool,
    predicate: Predicate,
) -> YogaRule {
    YogaRule {
        name,
        category,
        needs_ascendant,
        predicate,
    }
}

fn non_empty(facts: Vec<Fact>) -> Option<Vec<Fact>> {
    if facts.is_empty() { None } else { Some(facts) }
}

fn push_unique(facts: &mut Vec<Fact>, f: Fact) {
    if !facts.contains(&f) {
        facts.push(f);
    }
}

/// Lords of `a`-houses linked to lords of `b`-houses by conjunction or
/// mutual aspect. A planet ruling both sides does not pair with itself, and
/// lords that are great enemies by compound relationship do not combine.
fn lord_links(f: &YogaFacts<'_>, a: &[u8], b: &[u8]) -> Vec<Fact> {
    let mut out = Vec::new();
    for &ha in a {
        for &hb in b {
            let (Some(la), Some(lb)) = (f.lord_of_house(ha), f.lord_of_house(hb)) else {
                continue;
            };
            let linked = f.conjunct(la, lb) || f.aspects.mutual(la, lb);
            if la == lb || !linked || f.hostile(la, lb) {
                continue;
            }
            push_unique(&mut out, f.body(la));
            push_unique(&mut out, f.body(lb));
            for rel in [f.friendship(la, lb), f.friendship(lb, la)].into_iter().flatten() {
                push_unique(&mut out, rel);
            }
        }
    }
    out
}

pub fn raja(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    non_empty(lord_links(f, &[1, 4, 7, 10], &[1, 5, 9]))
}

pub fn gajakesari(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    KENDRAS
        .contains(&f.from_moon(Graha::Jupiter))
        .then(|| vec![f.body(Graha::Moon), f.body(Graha::Jupiter)])
}

fn mahapurusha(f: &YogaFacts<'_>, graha: Graha) -> Option<Vec<Fact>> {
    let dignity = f.dignity(graha);
    let dignified = matches!(
        dignity,
        Dignity::Exalted | Dignity::Moolatrikona | Dignity::OwnSign
    );
    let in_kendra = f.house(graha).is_some_and(|h| KENDRAS.contains(&h));
    (dignified && in_kendra).then(|| vec![f.body(graha), Fact::Dignity { graha, dignity }])
}

pub fn ruchaka(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    mahapurusha(f, Graha::Mars)
}

pub fn bhadra(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    mahapurusha(f, Graha::Mercury)
}

pub fn hamsa(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    mahapurusha(f, Graha::Jupiter)
}

pub fn malavya(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    mahapurusha(f, Graha::Venus)
}

pub fn shasha(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    mahapurusha(f, Graha::Saturn)
}

/// A debilitated planet whose sign lord, or the planet exalted in that
/// sign, stands in a kendra from the Moon or from the lagna.
pub fn neecha_bhanga(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    let in_kendra = |g: Graha| {
        KENDRAS.contains(&f.from_moon(g)) || f.house(g).is_some_and(|h| KENDRAS.contains(&h))
    };
    let mut out = Vec::new();
    for g in SAPTA_GRAHAS {
        if f.dignity(g) != Dignity::Debilitated {
            continue;
        }
        let sign = f.sign(g);
        let exalted_here = SAPTA_GRAHAS
            .into_iter()
            .find(|&o| exaltation_sign(o) == Some(sign));
        let cancellers = [Some(sign.lord()), exalted_here];
        for c in cancellers.into_iter().flatten() {
            if c != g && in_kendra(c) {
                push_unique(&mut out, Fact::Dignity { graha: g, dignity: Dignity::Debilitated });
                push_unique(&mut out, f.body(g));
                push_unique(&mut out, f.body(c));
            }
        }
    }
    non_empty(out)
}

/// Lord of the 6th, 8th or 12th placed in one of those houses.
pub fn viparita(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    let mut out = Vec::new();
    for n in DUSTHANAS {
        let Some(lord) = f.lord_of_house(n) else {
            continue;
        };
        if f.house(lord).is_some_and(|h| DUSTHANAS.contains(&h)) {
            if let Some(h) = f.house_fact(n) {
                push_unique(&mut out, h);
            }
            push_unique(&mut out, f.body(lord));
        }
    }
    non_empty(out)
}

pub fn dhana(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    non_empty(lord_links(f, &[2, 11], &[5, 9]))
}

/// Ninth lord dignified in a kendra or trikona, with a strong lagna lord
/// and a 9th house holding at least [`STRONG_HOUSE_BINDUS`] sarva points.
pub fn lakshmi(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    let ninth = f.lord_of_house(9)?;
    let lagna_lord = f.lord_of_house(1)?;
    let points = f.bindus(9)?;
    if points < STRONG_HOUSE_BINDUS {
        return None;
    }
    let placed = f
        .house(ninth)
        .is_some_and(|h| KENDRAS.contains(&h) || TRIKONAS.contains(&h));
    let dignity = f.dignity(ninth);
    let dignified = matches!(
        dignity,
        Dignity::Exalted | Dignity::Moolatrikona | Dignity::OwnSign
    );
    (placed && dignified && f.is_strong(lagna_lord)).then(|| {
        vec![
            f.body(ninth),
            Fact::Dignity { graha: ninth, dignity },
            f.body(lagna_lord),
            Fact::Bindus { house: 9, points },
        ]
    })
}

pub fn budha_aditya(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    f.conjunct(Graha::Sun, Graha::Mercury)
        .then(|| vec![f.body(Graha::Sun), f.body(Graha::Mercury)])
}

pub fn chandra_mangala(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    (f.conjunct(Graha::Moon, Graha::Mars) || f.aspects.mutual(Graha::Moon, Graha::Mars))
        .then(|| vec![f.body(Graha::Moon), f.body(Graha::Mars)])
}

/// At least two natural benefics in the 6th, 7th or 8th from the Moon.
pub fn adhi(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    let found: Vec<Fact> = NATURAL_BENEFICS
        .into_iter()
        .filter(|&g| (6..=8).contains(&f.from_moon(g)))
        .map(|g| f.body(g))
        .collect();
    (found.len() >= 2).then_some(found)
}

/// Only benefics in the 10th from the lagna or from the Moon.
pub fn amala(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    let benefic = |g: Graha| f.nature(g) == Nature::Benefic;
    let tenth_from_moon: Vec<Graha> = SAPTA_GRAHAS
        .into_iter()
        .chain([Graha::Rahu, Graha::Ketu])
        .filter(|&g| g != Graha::Moon && f.from_moon(g) == 10)
        .collect();
    let tenth_from_lagna: Vec<Graha> = f
        .houses
        .map(|h| h.occupants(10).to_vec())
        .unwrap_or_default();
    for group in [tenth_from_lagna, tenth_from_moon] {
        if !group.is_empty() && group.iter().all(|&g| benefic(g)) {
            return Some(group.into_iter().map(|g| f.body(g)).collect());
        }
    }
    None
}

/// No planet other than the Sun and the nodes beside or with the Moon.
pub fn kemadruma(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    let flanked = [Graha::Mars, Graha::Mercury, Graha::Jupiter, Graha::Venus, Graha::Saturn]
        .into_iter()
        .any(|g| matches!(f.from_moon(g), 1 | 2 | 12));
    (!flanked).then(|| vec![f.body(Graha::Moon)])
}

fn kartari(f: &YogaFacts<'_>, group: &[Graha]) -> Option<Vec<Fact>> {
    let houses = f.houses?;
    let second: Vec<Graha> = houses.occupants(2).iter().copied().filter(|g| group.contains(g)).collect();
    let twelfth: Vec<Graha> = houses.occupants(12).iter().copied().filter(|g| group.contains(g)).collect();
    if second.is_empty() || twelfth.is_empty() {
        return None;
    }
    let mut out = vec![Fact::House {
        number: 1,
        rashi: houses.ascendant_rashi,
    }];
    out.extend(twelfth.into_iter().chain(second).map(|g| f.body(g)));
    Some(out)
}

pub fn papa_kartari(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    kartari(f, &MALEFICS)
}

pub fn shubha_kartari(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    kartari(f, &NATURAL_BENEFICS)
}

pub fn grahana(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    let mut out = Vec::new();
    for luminary in [Graha::Sun, Graha::Moon] {
        for node in [Graha::Rahu, Graha::Ketu] {
            if f.conjunct(luminary, node) {
                out.push(f.body(luminary));
                out.push(f.body(node));
            }
        }
    }
    non_empty(out)
}

/// Moon in the 6th, 8th or 12th from Jupiter.
pub fn shakata(f: &YogaFacts<'_>) -> Option<Vec<Fact>> {
    let count = f.sign(Graha::Jupiter).count_to(f.sign(Graha::Moon));
    DUSTHANAS
        .contains(&count)
        .then(|| vec![f.body(Graha::Jupiter), f.body(Graha::Moon)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bhava::HousePlacement;
    use crate::drishti::AspectSet;
    use crate::graha::ALL_GRAHAS;
    use crate::ashtakavarga::AshtakavargaGrid;
    use crate::position::PlanetPosition;
    use crate::rashi::Rashi;
    use crate::relationships::{FriendshipRelation, Panchadha, SignPositions, relationship_matrix};
    use crate::yoga::detect_in;

    /// Positions from sidereal longitudes in Sun..Ketu order.
    fn positions(lons: [f64; 9]) -> Vec<PlanetPosition> {
        ALL_GRAHAS
            .iter()
            .zip(lons)
            .map(|(&g, lon)| PlanetPosition::from_tropical(g, lon, 0.0, 0.0, 1.0))
            .collect()
    }

    struct Chart {
        pos: Vec<PlanetPosition>,
        houses: Option<HousePlacement>,
        aspects: AspectSet,
        relations: Vec<FriendshipRelation>,
    }

    fn chart(lons: [f64; 9], lagna: Option<Rashi>) -> Chart {
        let pos = positions(lons);
        let pairs: Vec<(Graha, f64)> = pos.iter().map(|p| (p.graha, p.longitude)).collect();
        let houses = lagna.map(|l| HousePlacement::whole_sign(l, pairs.iter().copied()));
        let aspects = AspectSet::build(&pairs, lagna);
        let relations = relationship_matrix(&SignPositions::from_longitudes(&pairs).pairs());
        Chart {
            pos,
            houses,
            aspects,
            relations,
        }
    }

    fn facts(c: &Chart) -> YogaFacts<'_> {
        YogaFacts::new(&c.pos, c.houses.as_ref(), &c.aspects, &c.relations)
    }

    /// Same chart with the relationship matrix left out.
    fn facts_without_relations(c: &Chart) -> YogaFacts<'_> {
        YogaFacts::new(&c.pos, c.houses.as_ref(), &c.aspects, &[])
    }

    /// Grid with the same sarva count in every house.
    fn flat_grid(lagna: Rashi, points: u8) -> AshtakavargaGrid {
        AshtakavargaGrid {
            lagna,
            bhinna: Vec::new(),
            sarva: [points; 12],
            sarva_total: u16::from(points) * 12,
            after_trikona: [0; 12],
            after_ekadhipatya: [0; 12],
        }
    }

    fn has_body(found: &[Fact], graha: Graha) -> bool {
        found.iter().any(|f| matches!(f, Fact::Body { graha: g, .. } if *g == graha))
    }

    // Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu
    const BASE: [f64; 9] = [15.0, 100.0, 200.0, 20.0, 190.0, 50.0, 280.0, 130.0, 310.0];

    #[test]
    fn gajakesari_jupiter_seventh_from_moon() {
        // Moon in Cancer, Jupiter in Capricorn.
        let mut lons = BASE;
        lons[4] = 285.0;
        let c = chart(lons, None);
        assert!(gajakesari(&facts(&c)).is_some());
        lons[4] = 130.0;
        let c = chart(lons, None);
        assert!(gajakesari(&facts(&c)).is_none());
    }

    #[test]
    fn budha_aditya_same_sign() {
        let c = chart(BASE, None);
        let found = budha_aditya(&facts(&c)).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn ruchaka_mars_exalted_in_kendra() {
        // Mars at 298° (Capricorn, exalted); lagna Aries puts it in the 10th.
        let mut lons = BASE;
        lons[2] = 298.0;
        let c = chart(lons, Some(Rashi::Aries));
        let found = ruchaka(&facts(&c)).unwrap();
        assert!(found.contains(&Fact::Dignity { graha: Graha::Mars, dignity: Dignity::Exalted }));
        // Lagna Taurus: Capricorn is the 9th, not a kendra.
        let c = chart(lons, Some(Rashi::Taurus));
        assert!(ruchaka(&facts(&c)).is_none());
    }

    #[test]
    fn grahana_moon_with_rahu() {
        let mut lons = BASE;
        lons[1] = 135.0;
        let c = chart(lons, None);
        assert!(grahana(&facts(&c)).is_some());
        let c = chart(BASE, None);
        assert!(grahana(&facts(&c)).is_none());
    }

    #[test]
    fn kemadruma_isolated_moon() {
        // Moon alone in Cancer; nothing in Gemini, Cancer or Leo except Rahu.
        let c = chart(BASE, None);
        assert!(kemadruma(&facts(&c)).is_some());
        let mut lons = BASE;
        lons[5] = 70.0; // Venus in Gemini
        let c = chart(lons, None);
        assert!(kemadruma(&facts(&c)).is_none());
    }

    #[test]
    fn shakata_moon_sixth_from_jupiter() {
        // Jupiter Libra, Moon Pisces: 6th.
        let mut lons = BASE;
        lons[1] = 340.0;
        let c = chart(lons, None);
        assert!(shakata(&facts(&c)).is_some());
    }

    #[test]
    fn neecha_bhanga_sun_in_libra() {
        // Sun debilitated in Libra; Venus (lord of Libra) in Capricorn,
        // 10th from the Moon in Aries.
        let mut lons = BASE;
        lons[0] = 195.0;
        lons[1] = 10.0;
        lons[5] = 290.0;
        let c = chart(lons, None);
        let found = neecha_bhanga(&facts(&c)).unwrap();
        assert!(found.contains(&Fact::Dignity { graha: Graha::Sun, dignity: Dignity::Debilitated }));
    }

    #[test]
    fn papa_kartari_hems_lagna() {
        // Lagna Leo; Mars in Cancer (12th), Saturn in Virgo (2nd).
        let mut lons = BASE;
        lons[2] = 95.0;
        lons[6] = 160.0;
        let c = chart(lons, Some(Rashi::Leo));
        assert!(papa_kartari(&facts(&c)).is_some());
        assert!(shubha_kartari(&facts(&c)).is_none());
    }

    #[test]
    fn raja_kendra_trikona_lords_conjunct() {
        // Lagna Aries: Saturn rules the 10th, Jupiter the 9th. Put both in Aquarius.
        let mut lons = BASE;
        lons[4] = 305.0;
        lons[6] = 310.0;
        lons[8] = 220.0;
        let c = chart(lons, Some(Rashi::Aries));
        let found = raja(&facts(&c)).unwrap();
        assert!(found.iter().any(|f| matches!(f, Fact::Body { graha: Graha::Jupiter, .. })));
        assert!(found.iter().any(|f| matches!(f, Fact::Body { graha: Graha::Saturn, .. })));
    }

    #[test]
    fn raja_spoiled_by_great_enmity() {
        // Lagna Aries: Saturn (10th lord) conjoins the Sun (5th lord) in
        // Capricorn. Saturn and the Sun are natural enemies, and sharing a
        // sign makes them temporal enemies too.
        let lons = [280.0, 40.0, 10.0, 260.0, 160.0, 310.0, 285.0, 130.0, 310.0];
        let c = chart(lons, Some(Rashi::Aries));
        let loose = raja(&facts_without_relations(&c)).unwrap();
        assert!(has_body(&loose, Graha::Saturn) && has_body(&loose, Graha::Sun));
        assert_eq!(facts(&c).composite(Graha::Saturn, Graha::Sun), Some(Panchadha::GreatEnemy));
        assert!(raja(&facts(&c)).is_none());
    }

    #[test]
    fn dhana_second_or_eleventh_lord_with_trikona_lord() {
        // Lagna Aries: Saturn (11th lord) and Jupiter (9th lord) in Aquarius.
        let mut lons = BASE;
        lons[4] = 305.0;
        lons[6] = 310.0;
        let c = chart(lons, Some(Rashi::Aries));
        let found = dhana(&facts(&c)).unwrap();
        assert!(has_body(&found, Graha::Saturn) && has_body(&found, Graha::Jupiter));
        assert!(found.contains(&Fact::Friendship {
            graha: Graha::Jupiter,
            other: Graha::Saturn,
            composite: Panchadha::Enemy,
        }));
        // BASE with lagna Aries links none of those lords.
        let c = chart(BASE, Some(Rashi::Aries));
        assert!(dhana(&facts(&c)).is_none());
    }

    #[test]
    fn dhana_needs_lords_that_are_not_great_enemies() {
        // Venus (2nd lord) with Jupiter (9th lord) in Pisces; Jupiter holds
        // Venus a natural and temporal enemy.
        let lons = [130.0, 100.0, 200.0, 20.0, 345.0, 340.0, 40.0, 250.0, 70.0];
        let c = chart(lons, Some(Rashi::Aries));
        assert!(dhana(&facts_without_relations(&c)).is_some());
        assert!(dhana(&facts(&c)).is_none());
    }

    #[test]
    fn viparita_dusthana_lord_in_dusthana() {
        // Lagna Aries: Mercury rules the 6th and sits in Scorpio, the 8th.
        let mut lons = BASE;
        lons[3] = 215.0;
        let c = chart(lons, Some(Rashi::Aries));
        let found = viparita(&facts(&c)).unwrap();
        assert!(found.contains(&Fact::House { number: 6, rashi: Rashi::Virgo }));
        assert!(has_body(&found, Graha::Mercury));
        let c = chart(BASE, Some(Rashi::Aries));
        assert!(viparita(&facts(&c)).is_none());
    }

    #[test]
    fn lakshmi_needs_dignified_ninth_lord_and_bindus() {
        // Lagna Aries: Jupiter in moolatrikona Sagittarius (9th), Mars exalted.
        let lons = [15.0, 100.0, 298.0, 20.0, 245.0, 50.0, 280.0, 130.0, 310.0];
        let c = chart(lons, Some(Rashi::Aries));
        let rich = flat_grid(Rashi::Aries, 30);
        let found = lakshmi(&facts(&c).with_ashtakavarga(&rich)).unwrap();
        assert!(found.contains(&Fact::Dignity { graha: Graha::Jupiter, dignity: Dignity::Moolatrikona }));
        assert!(found.contains(&Fact::Bindus { house: 9, points: 30 }));
        assert!(has_body(&found, Graha::Mars));

        let poor = flat_grid(Rashi::Aries, 25);
        assert!(lakshmi(&facts(&c).with_ashtakavarga(&poor)).is_none());
        assert!(lakshmi(&facts(&c)).is_none());
    }

    #[test]
    fn chandra_mangala_opposition_or_conjunction() {
        let mut lons = BASE;
        lons[2] = 280.0; // Mars in Capricorn opposite the Moon
        let c = chart(lons, None);
        assert!(chandra_mangala(&facts(&c)).is_some());
        lons[2] = 110.0;
        let c = chart(lons, None);
        assert!(chandra_mangala(&facts(&c)).is_some());
        // Mars in Libra aspects Capricorn, Aries and Taurus only.
        let c = chart(BASE, None);
        assert!(chandra_mangala(&facts(&c)).is_none());
    }

    #[test]
    fn adhi_two_benefics_sixth_to_eighth_from_moon() {
        // Moon in Cancer; Mercury in Sagittarius (6th), Venus in Capricorn (7th).
        let mut lons = BASE;
        lons[3] = 250.0;
        lons[5] = 290.0;
        let c = chart(lons, None);
        let found = adhi(&facts(&c)).unwrap();
        assert_eq!(found.len(), 2);
        assert!(has_body(&found, Graha::Mercury) && has_body(&found, Graha::Venus));
        lons[5] = 50.0;
        let c = chart(lons, None);
        assert!(adhi(&facts(&c)).is_none());
    }

    #[test]
    fn amala_only_benefics_in_tenth_from_moon() {
        // Moon in Cancer; Jupiter alone in Aries.
        let mut lons = [50.0, 100.0, 200.0, 60.0, 5.0, 50.0, 280.0, 130.0, 310.0];
        let c = chart(lons, None);
        let found = amala(&facts(&c)).unwrap();
        assert_eq!(found.len(), 1);
        assert!(has_body(&found, Graha::Jupiter));
        lons[6] = 10.0; // Saturn joins Jupiter
        let c = chart(lons, None);
        assert!(amala(&facts(&c)).is_none());
    }

    #[test]
    fn each_mahapurusha_needs_dignity_and_kendra() {
        // (graha slot, longitude, lagna that makes a kendra, lagna that does not)
        let cases: [(usize, f64, Rashi, Rashi, Predicate); 4] = [
            (3, 165.0, Rashi::Gemini, Rashi::Aries, bhadra),
            (4, 95.0, Rashi::Aries, Rashi::Taurus, hamsa),
            (5, 190.0, Rashi::Aries, Rashi::Leo, malavya),
            (6, 305.0, Rashi::Taurus, Rashi::Aries, shasha),
        ];
        for (slot, lon, kendra, other, predicate) in cases {
            let mut lons = BASE;
            lons[slot] = lon;
            let graha = ALL_GRAHAS[slot];
            let c = chart(lons, Some(kendra));
            let found = predicate(&facts(&c)).unwrap_or_else(|| panic!("{graha} in kendra"));
            assert!(has_body(&found, graha));
            assert!(found.iter().any(|f| matches!(f, Fact::Dignity { graha: g, .. } if *g == graha)));
            let c = chart(lons, Some(other));
            assert!(predicate(&facts(&c)).is_none(), "{graha} outside kendra");
        }
    }

    #[test]
    fn shubha_kartari_benefics_hem_lagna() {
        // Lagna Leo; Jupiter in Cancer (12th), Venus in Virgo (2nd).
        let mut lons = BASE;
        lons[4] = 95.0;
        lons[5] = 160.0;
        let c = chart(lons, Some(Rashi::Leo));
        let found = shubha_kartari(&facts(&c)).unwrap();
        assert_eq!(found[0], Fact::House { number: 1, rashi: Rashi::Leo });
        assert!(has_body(&found, Graha::Jupiter) && has_body(&found, Graha::Venus));
        lons[5] = 50.0;
        let c = chart(lons, Some(Rashi::Leo));
        assert!(shubha_kartari(&facts(&c)).is_none());
    }

    #[test]
    fn kartari_categories() {
        let category = |name: &str| YOGA_RULES.iter().find(|r| r.name == name).map(|r| r.category);
        assert_eq!(category("Papa Kartari"), Some(YogaCategory::Malefic));
        assert_eq!(category("Shubha Kartari"), Some(YogaCategory::Planetary));
    }

    #[test]
    fn lagna_rules_skipped_without_time() {
        let mut lons = BASE;
        lons[2] = 298.0;
        let c = chart(lons, None);
        let names: Vec<&str> = detect_in(&YOGA_RULES, &facts(&c)).iter().map(|m| m.name).collect();
        assert!(!names.contains(&"Ruchaka"));
        assert!(!names.contains(&"Raja"));
        assert!(names.contains(&"Budha-Aditya"));
    }

    #[test]
    fn rules_are_order_independent() {
        let c = chart(BASE, Some(Rashi::Cancer));
        let f = facts(&c);
        let forward: Vec<&str> = detect_in(&YOGA_RULES, &f).iter().map(|m| m.name).collect();
        let mut reversed: Vec<&str> = YOGA_RULES
            .iter()
            .rev()
            .filter(|r| (r.predicate)(&f).is_some())
            .map(|r| r.name)
            .collect();
        reversed.reverse();
        assert_eq!(forward, reversed);
    }
}
