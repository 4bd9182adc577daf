//! Planetary friendship and dignity (BPHS).
//!
//! Three friendship layers: naisargika (permanent, a static directional
//! table), tatkalika (temporal, from sign positions) and panchadha
//! (compound, a lookup over the other two). Dignity ranks a planet in a
//! sign: exalted > debilitated > moolatrikona > own sign > compound
//! friendship with the sign lord.

use serde::Serialize;

use crate::graha::{ALL_GRAHAS, Graha};
use crate::rashi::Rashi;
use crate::util::circle_division;

/// Deep exaltation point, sidereal degrees.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Sun => Some(10.0),
        Graha::Moon => Some(33.0),
        Graha::Mars => Some(298.0),
        Graha::Mercury => Some(165.0),
        Graha::Jupiter => Some(95.0),
        Graha::Venus => Some(357.0),
        Graha::Saturn => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

pub fn debilitation_degree(graha: Graha) -> Option<f64> {
    exaltation_degree(graha).map(|e| (e + 180.0) % 360.0)
}

pub fn exaltation_sign(graha: Graha) -> Option<Rashi> {
    exaltation_degree(graha).map(Rashi::from_longitude)
}

pub fn debilitation_sign(graha: Graha) -> Option<Rashi> {
    debilitation_degree(graha).map(Rashi::from_longitude)
}

/// Moolatrikona sign and degree range `[start, end)` within it.
pub const fn moolatrikona(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Sun => Some((Rashi::Leo, 0.0, 20.0)),
        Graha::Moon => Some((Rashi::Taurus, 4.0, 20.0)),
        Graha::Mars => Some((Rashi::Aries, 0.0, 12.0)),
        Graha::Mercury => Some((Rashi::Virgo, 16.0, 20.0)),
        Graha::Jupiter => Some((Rashi::Sagittarius, 0.0, 10.0)),
        Graha::Venus => Some((Rashi::Libra, 0.0, 15.0)),
        Graha::Saturn => Some((Rashi::Aquarius, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    use Rashi::*;
    match graha {
        Graha::Sun => &[Leo],
        Graha::Moon => &[Cancer],
        Graha::Mars => &[Aries, Scorpio],
        Graha::Mercury => &[Gemini, Virgo],
        Graha::Jupiter => &[Sagittarius, Pisces],
        Graha::Venus => &[Taurus, Libra],
        Graha::Saturn => &[Capricorn, Aquarius],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Naisargika {
    Friend,
    Neutral,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tatkalika {
    Friend,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panchadha {
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
}

/// How `graha` regards `other` by nature. Any pair with a node is neutral.
pub const fn naisargika(graha: Graha, other: Graha) -> Naisargika {
    use Graha::*;
    use Naisargika::*;
    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,
        (Sun, Moon | Mars | Jupiter) => Friend,
        (Sun, Venus | Saturn) => Enemy,
        (Moon, Sun | Mercury) => Friend,
        (Mars, Sun | Moon | Jupiter) => Friend,
        (Mars, Mercury) => Enemy,
        (Mercury, Sun | Venus) => Friend,
        (Mercury, Moon) => Enemy,
        (Jupiter, Sun | Moon | Mars) => Friend,
        (Jupiter, Mercury | Venus) => Enemy,
        (Venus, Mercury | Saturn) => Friend,
        (Venus, Sun | Moon) => Enemy,
        (Saturn, Mercury | Venus) => Friend,
        (Saturn, Sun | Moon | Mars) => Enemy,
        _ => Neutral,
    }
}

/// Friend when `other_sign` is 2nd, 3rd, 4th, 10th, 11th or 12th from `sign`.
pub const fn tatkalika(sign: Rashi, other_sign: Rashi) -> Tatkalika {
    match sign.count_to(other_sign) {
        2 | 3 | 4 | 10 | 11 | 12 => Tatkalika::Friend,
        _ => Tatkalika::Enemy,
    }
}

pub const fn panchadha(n: Naisargika, t: Tatkalika) -> Panchadha {
    match (n, t) {
        (Naisargika::Friend, Tatkalika::Friend) => Panchadha::GreatFriend,
        (Naisargika::Friend, Tatkalika::Enemy) => Panchadha::Neutral,
        (Naisargika::Neutral, Tatkalika::Friend) => Panchadha::Friend,
        (Naisargika::Neutral, Tatkalika::Enemy) => Panchadha::Enemy,
        (Naisargika::Enemy, Tatkalika::Friend) => Panchadha::Neutral,
        (Naisargika::Enemy, Tatkalika::Enemy) => Panchadha::GreatEnemy,
    }
}

/// The three classifications for one ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FriendshipRelation {
    pub from: Graha,
    pub to: Graha,
    pub permanent: Naisargika,
    pub temporal: Tatkalika,
    pub composite: Panchadha,
}

/// Relations over every ordered pair of distinct grahas in `signs`.
pub fn relationship_matrix(signs: &[(Graha, Rashi)]) -> Vec<FriendshipRelation> {
    let mut out = Vec::with_capacity(signs.len() * signs.len().saturating_sub(1));
    for &(from, from_sign) in signs {
        for &(to, to_sign) in signs {
            if from == to {
                continue;
            }
            let permanent = naisargika(from, to);
            let temporal = tatkalika(from_sign, to_sign);
            out.push(FriendshipRelation {
                from,
                to,
                permanent,
                temporal,
                composite: panchadha(permanent, temporal),
            });
        }
    }
    out
}

/// Sign of each of the nine grahas, indexed by [`Graha::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignPositions(pub [Rashi; 9]);

impl SignPositions {
    pub fn from_longitudes(lons: &[(Graha, f64)]) -> Self {
        let mut signs = [Rashi::Aries; 9];
        for &(g, lon) in lons {
            signs[g.index()] = Rashi::from_longitude(lon);
        }
        Self(signs)
    }

    pub fn sign_of(&self, graha: Graha) -> Rashi {
        self.0[graha.index()]
    }

    pub fn pairs(&self) -> Vec<(Graha, Rashi)> {
        ALL_GRAHAS.iter().map(|&g| (g, self.sign_of(g))).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
    Debilitated,
}

impl From<Panchadha> for Dignity {
    fn from(p: Panchadha) -> Self {
        match p {
            Panchadha::GreatFriend => Self::GreatFriend,
            Panchadha::Friend => Self::Friend,
            Panchadha::Neutral => Self::Neutral,
            Panchadha::Enemy => Self::Enemy,
            Panchadha::GreatEnemy => Self::GreatEnemy,
        }
    }
}

/// Dignity of `graha` at `longitude`, with compound friendship taken from
/// the sign positions of the same chart. Nodes are always neutral.
pub fn dignity(graha: Graha, longitude: f64, positions: &SignPositions) -> Dignity {
    if graha.is_node() {
        return Dignity::Neutral;
    }
    let (idx, frac) = circle_division(longitude, 12);
    let sign = Rashi::from_index(idx);
    let deg = frac * 30.0;

    if exaltation_sign(graha) == Some(sign) {
        return Dignity::Exalted;
    }
    if debilitation_sign(graha) == Some(sign) {
        return Dignity::Debilitated;
    }
    if let Some((mt, start, end)) = moolatrikona(graha) {
        if mt == sign && deg >= start && deg < end {
            return Dignity::Moolatrikona;
        }
    }
    let lord = sign.lord();
    if lord == graha || own_signs(graha).contains(&sign) {
        return Dignity::OwnSign;
    }
    let t = tatkalika(positions.sign_of(graha), positions.sign_of(lord));
    panchadha(naisargika(graha, lord), t).into()
}
