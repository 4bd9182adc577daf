//! Graha drishti (planetary aspects).
//!
//! Sign-based aspects form an explicit edge set: every graha aspects the
//! 7th sign from itself, Mars also the 4th and 8th, Jupiter the 5th and
//! 9th, Saturn the 3rd and 10th. Body-to-body edges carry the classical
//! virupa strength computed from the exact longitudes.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::Rashi;
use crate::util::normalize_360;

/// Piecewise base virupa for an angular distance `target − source`.
///
/// - `[0, 30)`: 0
/// - `[30, 90)`: `(A − 30)·0.75`
/// - `[90, 150)`: `45 − (A − 90)·0.75`
/// - `[150, 180)`: `(A − 150)·2`
/// - `[180, 300)`: `60 − (A − 180)·0.5`
/// - `[300, 360)`: 0
pub fn base_virupa(angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    if a < 30.0 {
        0.0
    } else if a < 90.0 {
        (a - 30.0) * 0.75
    } else if a < 150.0 {
        45.0 - (a - 90.0) * 0.75
    } else if a < 180.0 {
        (a - 150.0) * 2.0
    } else if a < 300.0 {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Bonus for the special aspects of Mars, Jupiter and Saturn.
pub fn special_virupa(graha: Graha, angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    let within = |r1: (f64, f64), r2: (f64, f64)| {
        (r1.0..r1.1).contains(&a) || (r2.0..r2.1).contains(&a)
    };
    match graha {
        Graha::Mars if within((90.0, 120.0), (210.0, 240.0)) => 15.0,
        Graha::Jupiter if within((120.0, 150.0), (240.0, 270.0)) => 30.0,
        Graha::Saturn if within((60.0, 90.0), (270.0, 300.0)) => 45.0,
        _ => 0.0,
    }
}

/// Total virupa cast by `graha` at `source_lon` onto `target_lon`.
pub fn virupa(graha: Graha, source_lon: f64, target_lon: f64) -> f64 {
    let a = normalize_360(target_lon - source_lon);
    base_virupa(a) + special_virupa(graha, a)
}

/// Houses aspected, counted inclusively from the graha's own sign.
pub const fn aspect_offsets(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mars => &[4, 7, 8],
        Graha::Jupiter => &[5, 7, 9],
        Graha::Saturn => &[3, 7, 10],
        _ => &[7],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Full7th,
    /// Special aspect to the n-th sign.
    Special(u8),
}

impl AspectKind {
    fn for_offset(n: u8) -> Self {
        if n == 7 { Self::Full7th } else { Self::Special(n) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectTarget {
    House(u8),
    Body(Graha),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectRelation {
    pub source: Graha,
    pub target: AspectTarget,
    pub kind: AspectKind,
    /// Virupa strength for body targets.
    pub virupa: Option<f64>,
}

/// All aspect edges of one chart. Duplicates are kept; cycles are normal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AspectSet {
    pub edges: Vec<AspectRelation>,
}

impl AspectSet {
    /// Build from `(graha, sidereal longitude)` pairs. House edges need the
    /// lagna sign and are skipped when it is unknown.
    pub fn build(bodies: &[(Graha, f64)], lagna: Option<Rashi>) -> Self {
        let mut edges = Vec::new();
        for &(source, src_lon) in bodies {
            let src_sign = Rashi::from_longitude(src_lon);
            for &n in aspect_offsets(source) {
                let kind = AspectKind::for_offset(n);
                let aspected = src_sign.nth(n as usize);
                if let Some(lagna) = lagna {
                    edges.push(AspectRelation {
                        source,
                        target: AspectTarget::House(lagna.count_to(aspected)),
                        kind,
                        virupa: None,
                    });
                }
                for &(target, tgt_lon) in bodies {
                    if target != source && Rashi::from_longitude(tgt_lon) == aspected {
                        edges.push(AspectRelation {
                            source,
                            target: AspectTarget::Body(target),
                            kind,
                            virupa: Some(virupa(source, src_lon, tgt_lon)),
                        });
                    }
                }
            }
        }
        Self { edges }
    }

    pub fn aspects_on_house(&self, house: u8) -> impl Iterator<Item = &AspectRelation> {
        self.edges
            .iter()
            .filter(move |e| e.target == AspectTarget::House(house))
    }

    pub fn aspects_on_body(&self, graha: Graha) -> impl Iterator<Item = &AspectRelation> {
        self.edges
            .iter()
            .filter(move |e| e.target == AspectTarget::Body(graha))
    }

    pub fn aspects_from(&self, graha: Graha) -> impl Iterator<Item = &AspectRelation> {
        self.edges.iter().filter(move |e| e.source == graha)
    }

    /// Whether `source` casts a sign aspect on `target`.
    pub fn aspects(&self, source: Graha, target: Graha) -> bool {
        self.aspects_from(source)
            .any(|e| e.target == AspectTarget::Body(target))
    }

    pub fn mutual(&self, a: Graha, b: Graha) -> bool {
        self.aspects(a, b) && self.aspects(b, a)
    }

    /// Whether `source` aspects house `house`.
    pub fn aspects_house(&self, source: Graha, house: u8) -> bool {
        self.aspects_on_house(house).any(|e| e.source == source)
    }
}
