//! Time handling for chart computation.
//!
//! This crate provides:
//! - Validated civil date-times with a fixed UTC offset
//! - UTC instant ↔ Julian Date conversions
//! - Earth Rotation Angle, GMST and local sidereal time
//!
//! Instants are `chrono::DateTime<Utc>`. UT1 is approximated by UTC, which
//! is well inside the accuracy needed for whole-sign houses.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, MS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_centuries,
    jd_to_utc, utc_to_centuries, utc_to_jd,
};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg};
