//! The nine grahas and their fixed classifications.

use std::fmt::{Display, Formatter};

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

/// The nine grahas: seven planets plus the lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine grahas in chart order (Sun..Ketu).
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
    Graha::Rahu,
    Graha::Ketu,
];

/// The seven classical planets, excluding the nodes.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
];

/// Natural benefic/malefic nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Benefic,
    Malefic,
}

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangala",
            Self::Mercury => "Budha",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// The ephemeris body behind this graha; `None` for the nodes.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Moon => Some(Body::Moon),
            Self::Mars => Some(Body::Mars),
            Self::Mercury => Some(Body::Mercury),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Venus => Some(Body::Venus),
            Self::Saturn => Some(Body::Saturn),
            Self::Rahu | Self::Ketu => None,
        }
    }

    pub const fn from_body(body: Body) -> Self {
        match body {
            Body::Sun => Self::Sun,
            Body::Moon => Self::Moon,
            Body::Mars => Self::Mars,
            Body::Mercury => Self::Mercury,
            Body::Jupiter => Self::Jupiter,
            Body::Venus => Self::Venus,
            Body::Saturn => Self::Saturn,
        }
    }

    /// Fixed natural nature. The Moon is listed benefic here; use
    /// [`moon_nature`] when the lunar phase is known.
    pub const fn natural_nature(self) -> Nature {
        match self {
            Self::Moon | Self::Mercury | Self::Jupiter | Self::Venus => Nature::Benefic,
            Self::Sun | Self::Mars | Self::Saturn | Self::Rahu | Self::Ketu => Nature::Malefic,
        }
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase-dependent nature of the Moon: benefic when at least 72° from the
/// Sun on either side (elongation in [72, 288]), malefic near new moon.
pub fn moon_nature(moon_sun_elongation: f64) -> Nature {
    let elong = crate::util::normalize_360(moon_sun_elongation);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    if phase >= 72.0 { Nature::Benefic } else { Nature::Malefic }
}

/// Chart-specific nature: the Moon by phase, everything else by nature.
pub fn functional_nature(graha: Graha, moon_sun_elongation: f64) -> Nature {
    match graha {
        Graha::Moon => moon_nature(moon_sun_elongation),
        other => other.natural_nature(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index(), i);
        }
    }

    #[test]
    fn body_round_trip() {
        for g in SAPTA_GRAHAS {
            let body = g.body().unwrap();
            assert_eq!(Graha::from_body(body), g);
            assert_eq!(body.index(), g.index());
        }
        assert!(Graha::Rahu.body().is_none());
    }

    #[test]
    fn nodes_are_malefic() {
        assert_eq!(Graha::Rahu.natural_nature(), Nature::Malefic);
        assert_eq!(Graha::Ketu.natural_nature(), Nature::Malefic);
    }

    #[test]
    fn moon_phase_nature() {
        assert_eq!(moon_nature(10.0), Nature::Malefic);
        assert_eq!(moon_nature(180.0), Nature::Benefic);
        assert_eq!(moon_nature(300.0), Nature::Malefic);
        assert_eq!(moon_nature(72.0), Nature::Benefic);
    }
}
