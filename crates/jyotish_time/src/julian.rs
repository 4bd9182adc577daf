//! Julian Date ↔ UTC instant conversions.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::TimeError;

/// Julian Date of J2000.0 (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Milliseconds in a civil day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Date of a UTC instant, at millisecond resolution.
pub fn utc_to_jd(instant: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + instant.timestamp_millis() as f64 / MS_PER_DAY as f64
}

/// UTC instant for a Julian Date, rounded to the nearest millisecond.
pub fn jd_to_utc(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    let ms = ((jd - UNIX_EPOCH_JD) * MS_PER_DAY as f64).round();
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange { jd });
    }
    Utc.timestamp_millis_opt(ms as i64)
        .single()
        .ok_or(TimeError::OutOfRange { jd })
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian centuries since J2000.0 for a UTC instant.
pub fn utc_to_centuries(instant: DateTime<Utc>) -> f64 {
    jd_to_centuries(utc_to_jd(instant))
}

/// Julian Date from a proleptic Gregorian calendar date with fractional day.
///
/// Meeus, *Astronomical Algorithms*, ch. 7.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}
