//! Replay provider backed by a table of recorded samples.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{Body, Ephemeris, EphemerisError, EphemerisSample};

/// Returns exactly the samples it was given, keyed by (instant, body).
///
/// Asking for anything else is a [`EphemerisError::MissingSample`]; there is
/// no interpolation and no default substitution.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    samples: BTreeMap<(DateTime<Utc>, Body), EphemerisSample>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) one sample.
    pub fn insert(&mut self, instant: DateTime<Utc>, body: Body, sample: EphemerisSample) {
        self.samples.insert((instant, body), sample);
    }

    /// Builder form of [`FixedEphemeris::insert`].
    pub fn with_sample(mut self, instant: DateTime<Utc>, body: Body, sample: EphemerisSample) -> Self {
        self.insert(instant, body, sample);
        self
    }

    /// Record longitude and speed for every body at one instant.
    ///
    /// `rows` is indexed like [`Body::ALL`]: `(longitude_deg, speed_deg_per_day)`.
    /// Latitude is zero and distance one AU.
    pub fn with_snapshot(mut self, instant: DateTime<Utc>, rows: [(f64, f64); 7]) -> Self {
        for (body, (longitude_deg, speed_deg_per_day)) in Body::ALL.into_iter().zip(rows) {
            self.insert(
                instant,
                body,
                EphemerisSample {
                    longitude_deg,
                    latitude_deg: 0.0,
                    distance_au: 1.0,
                    speed_deg_per_day,
                },
            );
        }
        self
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Ephemeris for FixedEphemeris {
    fn name(&self) -> &str {
        "fixed"
    }

    fn sample(&self, body: Body, instant: DateTime<Utc>) -> Result<EphemerisSample, EphemerisError> {
        let sample = self
            .samples
            .get(&(instant, body))
            .copied()
            .ok_or(EphemerisError::MissingSample { body, instant })?;
        if !sample.is_finite() {
            return Err(EphemerisError::NonFinite { body, instant });
        }
        Ok(sample)
    }
}
