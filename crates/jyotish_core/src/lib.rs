//! Ephemeris boundary for chart computation.
//!
//! The engine never computes raw planetary positions itself. It asks an
//! [`Ephemeris`] for a tropical [`EphemerisSample`] per [`Body`] per instant.
//! Two providers ship with this crate:
//!
//! - [`KeplerianEphemeris`]: analytic, low precision (arcminute level),
//!   valid 1800-2050. Needs no data files.
//! - [`FixedEphemeris`]: replays samples recorded elsewhere. Used for tests
//!   and for adapters that pre-fetch from an external service.

pub mod error;
pub mod fixed;
pub mod kepler;
mod lunar;

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use error::EphemerisError;
pub use fixed::FixedEphemeris;
pub use kepler::KeplerianEphemeris;

/// Physical bodies an ephemeris provider is asked for.
///
/// The lunar nodes are not here: they are computed points, derived
/// downstream from the lunar node formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

impl Body {
    /// All bodies in weekday-lord order (Sun..Saturn).
    pub const ALL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }

    /// 0-based index into [`Body::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geocentric tropical position of one body at one instant.
///
/// Longitude and latitude are ecliptic, referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSample {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    /// Signed daily motion in longitude; negative means retrograde.
    pub speed_deg_per_day: f64,
}

impl EphemerisSample {
    pub fn is_finite(&self) -> bool {
        self.longitude_deg.is_finite()
            && self.latitude_deg.is_finite()
            && self.distance_au.is_finite()
            && self.speed_deg_per_day.is_finite()
    }
}

/// The ephemeris collaborator.
///
/// Implementations must be shareable across threads: the engine samples
/// bodies concurrently. Timeouts and retries are the implementation's
/// business; errors are propagated unchanged.
pub trait Ephemeris: Send + Sync {
    /// Short backend name, used in logs.
    fn name(&self) -> &str {
        "ephemeris"
    }

    fn sample(&self, body: Body, instant: DateTime<Utc>) -> Result<EphemerisSample, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn sample(&self, body: Body, instant: DateTime<Utc>) -> Result<EphemerisSample, EphemerisError> {
        (**self).sample(body, instant)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn sample(&self, body: Body, instant: DateTime<Utc>) -> Result<EphemerisSample, EphemerisError> {
        (**self).sample(body, instant)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Arc<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn sample(&self, body: Body, instant: DateTime<Utc>) -> Result<EphemerisSample, EphemerisError> {
        (**self).sample(body, instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_index_matches_all_order() {
        for (i, body) in Body::ALL.iter().enumerate() {
            assert_eq!(body.index(), i);
        }
    }

    #[test]
    fn body_display_is_name() {
        assert_eq!(Body::Jupiter.to_string(), "Jupiter");
    }

    #[test]
    fn non_finite_sample_detected() {
        let sample = EphemerisSample {
            longitude_deg: f64::NAN,
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: 1.0,
        };
        assert!(!sample.is_finite());
    }
}
