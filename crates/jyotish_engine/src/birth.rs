//! The birth event a chart is computed for.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use serde::Serialize;

use jyotish_time::{CivilDateTime, utc_to_jd};

use crate::error::ChartError;

/// Wall-clock time of birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Validated birth date, time and place.
///
/// Fields are fixed at construction. When the time is unknown the resolved
/// instant is local noon of the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthSpecification {
    year: i32,
    month: u32,
    day: u32,
    time: Option<ClockTime>,
    latitude_deg: f64,
    longitude_deg: f64,
    utc_offset_minutes: i32,
    instant: DateTime<Utc>,
}

fn check_coordinates(latitude_deg: f64, longitude_deg: f64) -> Result<(), ChartError> {
    if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(ChartError::invalid(
            "latitude",
            format!("{latitude_deg} is outside [-90, 90]"),
        ));
    }
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(ChartError::invalid(
            "longitude",
            format!("{longitude_deg} is outside [-180, 180]"),
        ));
    }
    Ok(())
}

impl BirthSpecification {
    /// `time` is `(hour, minute, second)`; `None` means the time is unknown.
    /// Longitude is east-positive and the offset is minutes east of UTC.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        time: Option<(u32, u32, f64)>,
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_minutes: i32,
    ) -> Result<Self, ChartError> {
        check_coordinates(latitude_deg, longitude_deg)?;
        let civil = match time {
            Some((h, m, s)) => CivilDateTime::new(year, month, day, h, m, s)?,
            None => CivilDateTime::date_at_noon(year, month, day)?,
        };
        let instant = civil.to_utc(utc_offset_minutes)?;
        Ok(Self {
            year,
            month,
            day,
            time: time.map(|(hour, minute, second)| ClockTime {
                hour,
                minute,
                second,
            }),
            latitude_deg,
            longitude_deg,
            utc_offset_minutes,
            instant,
        })
    }

    /// From a zoned timestamp; the time is known.
    pub fn from_datetime(
        local: DateTime<FixedOffset>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ChartError> {
        let second = f64::from(local.second()) + f64::from(local.nanosecond()) * 1e-9;
        Self::new(
            local.year(),
            local.month(),
            local.day(),
            Some((local.hour(), local.minute(), second)),
            latitude_deg,
            longitude_deg,
            local.offset().local_minus_utc() / 60,
        )
    }

    /// A known-time specification at a UTC instant, as used for transits.
    pub fn at_instant(
        instant: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ChartError> {
        Self::from_datetime(instant.fixed_offset(), latitude_deg, longitude_deg)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Julian Date (UT) of [`Self::instant`].
    pub fn jd(&self) -> f64 {
        utc_to_jd(self.instant)
    }

    pub fn time_known(&self) -> bool {
        self.time.is_some()
    }

    pub fn time(&self) -> Option<ClockTime> {
        self.time
    }

    pub fn date(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }
}

impl Display for BirthSpecification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02} ", self.year, self.month, self.day)?;
        match self.time {
            Some(t) => write!(f, "{:02}:{:02}:{:06.3}", t.hour, t.minute, t.second)?,
            None => f.write_str("(time unknown)")?,
        }
        write!(
            f,
            " UTC{:+} min at {:.4}, {:.4}",
            self.utc_offset_minutes, self.latitude_deg, self.longitude_deg
        )
    }
}
