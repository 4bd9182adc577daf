//! Civil (wall-clock) date-time with a fixed UTC offset.
//!
//! `CivilDateTime` is validated at construction: the calendar date must
//! exist and the clock fields must be in range. Conversion to a UTC instant
//! takes the offset already resolved by the caller's timezone lookup.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::TimeError;

/// Largest accepted UTC offset, in minutes (±18h, the chrono limit).
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Civil calendar date and clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    /// Validated constructor.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let value = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        value.to_naive()?;
        Ok(value)
    }

    /// The calendar date only, at local noon.
    ///
    /// Used for charts whose birth time is unknown.
    pub fn date_at_noon(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 12, 0, 0.0)
    }

    fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )?;
        let invalid_time = TimeError::InvalidTime {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        };
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(invalid_time);
        }
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        let time = NaiveTime::from_hms_nano_opt(self.hour, self.minute, whole as u32, nanos)
            .ok_or(invalid_time)?;
        Ok(date.and_time(time))
    }

    /// Convert to a UTC instant given the offset east of UTC in minutes.
    pub fn to_utc(&self, utc_offset_minutes: i32) -> Result<DateTime<Utc>, TimeError> {
        let offset = fixed_offset(utc_offset_minutes)?;
        let naive = self.to_naive()?;
        offset
            .from_local_datetime(&naive)
            .single()
            .map(|local| local.with_timezone(&Utc))
            .ok_or(TimeError::InvalidOffset {
                minutes: utc_offset_minutes,
            })
    }
}

/// A chrono `FixedOffset` from minutes east of UTC.
pub fn fixed_offset(utc_offset_minutes: i32) -> Result<FixedOffset, TimeError> {
    if utc_offset_minutes.abs() >= MAX_OFFSET_MINUTES {
        return Err(TimeError::InvalidOffset {
            minutes: utc_offset_minutes,
        });
    }
    FixedOffset::east_opt(utc_offset_minutes * 60).ok_or(TimeError::InvalidOffset {
        minutes: utc_offset_minutes,
    })
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn rejects_february_30() {
        assert!(matches!(
            CivilDateTime::new(2024, 2, 30, 0, 0, 0.0),
            Err(TimeError::InvalidDate { .. })
        ));
    }

    #[test]
    fn accepts_leap_day() {
        assert!(CivilDateTime::new(2024, 2, 29, 23, 59, 59.5).is_ok());
        assert!(CivilDateTime::new(2023, 2, 29, 0, 0, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_clock() {
        assert!(CivilDateTime::new(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 0, 0, 60.0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 0, 0, f64::NAN).is_err());
    }

    #[test]
    fn ist_to_utc() {
        let t = CivilDateTime::new(1990, 5, 17, 5, 30, 0.0).unwrap();
        let utc = t.to_utc(330).unwrap();
        assert_eq!(utc.hour(), 0);
        assert_eq!(utc.minute(), 0);
    }

    #[test]
    fn offset_crossing_midnight() {
        let t = CivilDateTime::new(2024, 3, 1, 1, 0, 0.0).unwrap();
        let utc = t.to_utc(5 * 60).unwrap();
        assert_eq!(utc.to_rfc3339(), "2024-02-29T20:00:00+00:00");
    }

    #[test]
    fn offset_out_of_range() {
        let t = CivilDateTime::new(2024, 3, 1, 1, 0, 0.0).unwrap();
        assert!(matches!(
            t.to_utc(19 * 60),
            Err(TimeError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn display_whole_seconds() {
        let t = CivilDateTime::new(2024, 1, 15, 0, 0, 0.0).unwrap();
        assert_eq!(t.to_string(), "2024-01-15T00:00:00");
    }
}
