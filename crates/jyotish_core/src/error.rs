//! Errors raised by ephemeris providers.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::Body;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("{body} at {instant}: instant outside the provider's supported range")]
    OutOfRange { body: Body, instant: DateTime<Utc> },
    #[error("{body} at {instant}: no sample available")]
    MissingSample { body: Body, instant: DateTime<Utc> },
    #[error("{body} at {instant}: provider returned a non-finite sample")]
    NonFinite { body: Body, instant: DateTime<Utc> },
    #[error("{body} at {instant}: backend failure: {message}")]
    Backend {
        body: Body,
        instant: DateTime<Utc>,
        message: String,
    },
}

impl EphemerisError {
    pub fn body(&self) -> Body {
        match self {
            Self::OutOfRange { body, .. }
            | Self::MissingSample { body, .. }
            | Self::NonFinite { body, .. }
            | Self::Backend { body, .. } => *body,
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Self::OutOfRange { instant, .. }
            | Self::MissingSample { instant, .. }
            | Self::NonFinite { instant, .. }
            | Self::Backend { instant, .. } => *instant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accessors_return_context() {
        let instant = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let err = EphemerisError::Backend {
            body: Body::Mars,
            instant,
            message: "timeout".into(),
        };
        assert_eq!(err.body(), Body::Mars);
        assert_eq!(err.instant(), instant);
        assert!(err.to_string().contains("timeout"));
    }
}
