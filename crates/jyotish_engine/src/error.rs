//! Errors surfaced by chart computation.

use chrono::{DateTime, Utc};
use thiserror::Error;

use jyotish_config::ConfigError;
use jyotish_core::{Body, EphemerisError};
use jyotish_time::TimeError;
use jyotish_vedic_base::VedicError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Rejected before any ephemeris call.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    /// The ephemeris collaborator could not supply a sample.
    #[error("ephemeris unavailable for {body} at {instant}")]
    UpstreamUnavailable {
        body: Body,
        instant: DateTime<Utc>,
        #[source]
        source: EphemerisError,
    },
    /// A computed structure broke one of its guarantees. No partial result
    /// is returned.
    #[error("invariant violated in {context}: {detail}")]
    CalculationInvariantViolation { context: &'static str, detail: String },
}

impl ChartError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(context: &'static str, detail: impl Into<String>) -> Self {
        Self::CalculationInvariantViolation {
            context,
            detail: detail.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<EphemerisError> for ChartError {
    fn from(source: EphemerisError) -> Self {
        Self::UpstreamUnavailable {
            body: source.body(),
            instant: source.instant(),
            source,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        let field = match e {
            TimeError::InvalidDate { .. } => "date",
            TimeError::InvalidTime { .. } => "time",
            TimeError::InvalidOffset { .. } => "utc_offset_minutes",
            _ => "instant",
        };
        Self::invalid(field, e.to_string())
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvalidInput { field, reason } => Self::InvalidInput { field, reason },
            VedicError::UnknownName { kind, name } => {
                Self::invalid(kind, format!("unknown name '{name}'"))
            }
            VedicError::Invariant { context, detail } => {
                Self::CalculationInvariantViolation { context, detail }
            }
            other => Self::invariant("vedic", other.to_string()),
        }
    }
}

impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Invalid { field, reason } => Self::InvalidInput { field, reason },
            other => Self::invalid("settings", other.to_string()),
        }
    }
}
