//! Error types for civil time validation and Julian Date conversion.

use thiserror::Error;

/// Errors from civil time validation or instant conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The calendar date does not exist (e.g. 2023-02-29).
    #[error("non-existent calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute or second outside the civil clock range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// UTC offset outside ±18 hours.
    #[error("UTC offset of {minutes} minutes is out of range")]
    InvalidOffset { minutes: i32 },
    /// Julian Date not representable as a UTC instant.
    #[error("Julian Date {jd} is outside the representable instant range")]
    OutOfRange { jd: f64 },
}
