//! Error types for Vedic calculations.

use thiserror::Error;

use crate::varga::Varga;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A caller-supplied value is out of its domain.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    /// A name did not match any known variant.
    #[error("unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },
    /// No subdivision rule is registered for a varga.
    #[error("no rule registered for varga {0}")]
    MissingVargaRule(Varga),
    /// A computed structure broke one of its own guarantees.
    #[error("{context}: {detail}")]
    Invariant { context: &'static str, detail: String },
}

impl VedicError {
    pub(crate) fn invariant(context: &'static str, detail: impl Into<String>) -> Self {
        Self::Invariant {
            context,
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
