//! Core types for the dasha timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Julian year in milliseconds (365.25 days).
pub const YEAR_MS: i64 = 31_557_600_000;

/// Deepest level the tree builder produces.
pub const MAX_DASHA_DEPTH: u8 = 3;

/// Hierarchical level of a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashaLevel {
    Maha,
    Antara,
    Pratyantara,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Mahadasha",
            Self::Antara => "Antardasha",
            Self::Pratyantara => "Pratyantardasha",
        }
    }

    /// 1-based depth (Maha = 1).
    pub const fn depth(self) -> u8 {
        match self {
            Self::Maha => 1,
            Self::Antara => 2,
            Self::Pratyantara => 3,
        }
    }

    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Maha => Some(Self::Antara),
            Self::Antara => Some(Self::Pratyantara),
            Self::Pratyantara => None,
        }
    }
}

/// Closed set of supported dasha systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashaSystem {
    #[default]
    Vimshottari,
    Yogini,
}

impl DashaSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Yogini => "Yogini",
        }
    }
}

impl std::fmt::Display for DashaSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DashaSystem {
    type Err = crate::error::VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vimshottari" | "vimsottari" => Ok(Self::Vimshottari),
            "yogini" => Ok(Self::Yogini),
            _ => Err(crate::error::VedicError::UnknownName {
                kind: "dasha system",
                name: s.to_string(),
            }),
        }
    }
}

/// One period in the tree. Children are ordered by start and tile the
/// parent exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashaNode {
    pub lord: Graha,
    /// Display label: the lord's name for Vimshottari, the yogini's name
    /// for Yogini.
    pub label: &'static str,
    pub level: DashaLevel,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaNode>,
}

impl DashaNode {
    pub fn duration_ms(&self) -> i64 {
        self.end.timestamp_millis() - self.start.timestamp_millis()
    }

    /// Half-open containment: `start <= t < end`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Remaining portion of the first mahadasha at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    pub lord: Graha,
    pub label: &'static str,
    /// Fraction of the first mahadasha already elapsed at birth, [0, 1).
    pub elapsed_fraction: f64,
    pub elapsed_ms: i64,
    pub remaining_ms: i64,
}

impl BirthBalance {
    pub fn remaining_years(&self) -> f64 {
        self.remaining_ms as f64 / YEAR_MS as f64
    }
}

/// A full dasha timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTree {
    pub system: DashaSystem,
    pub depth: u8,
    pub birth: DateTime<Utc>,
    /// Start of the first mahadasha; at or before birth.
    pub cycle_start: DateTime<Utc>,
    pub cycle_end: DateTime<Utc>,
    pub balance: BirthBalance,
    pub periods: Vec<DashaNode>,
}
