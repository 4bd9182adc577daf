//! Chart orchestration: birth specification in, complete sidereal chart
//! out.
//!
//! The engine samples an [`Ephemeris`](jyotish_core::Ephemeris) once per
//! body per instant and hands the resulting base chart to the pure
//! calculators in `jyotish_vedic_base`.

pub mod base_chart;
pub mod birth;
pub mod chart;
pub mod error;
pub mod kala;
pub mod transit;

pub use base_chart::{AyanamshaValue, BaseChart};
pub use birth::{BirthSpecification, ClockTime};
pub use chart::{ChartRequest, ChartResult, Section, compute_chart};
pub use error::ChartError;
pub use kala::kala_inputs;
pub use transit::{TransitReport, transit_report};
