//! Chart settings loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) gives Lahiri
//! ayanamsha, mean nodes, Vimshottari to pratyantara depth, D1/D9/D10 and
//! all sections enabled. Command-line flags are applied on top by the
//! caller.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use jyotish_vedic_base::dasha::{DashaSystem, MAX_DASHA_DEPTH};
use jyotish_vedic_base::{AyanamshaSystem, NodeMode, Varga};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashaSettings {
    pub system: DashaSystem,
    /// 1 = mahadasha only, 3 = through pratyantardasha.
    pub depth: u8,
}

impl Default for DashaSettings {
    fn default() -> Self {
        Self {
            system: DashaSystem::Vimshottari,
            depth: MAX_DASHA_DEPTH,
        }
    }
}

/// Which optional sections a chart computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncludeFlags {
    pub shadbala: bool,
    pub ashtakavarga: bool,
    pub drishti: bool,
    pub relationships: bool,
    pub yogas: bool,
    pub transit: bool,
}

impl Default for IncludeFlags {
    fn default() -> Self {
        Self {
            shadbala: true,
            ashtakavarga: true,
            drishti: true,
            relationships: true,
            yogas: true,
            transit: true,
        }
    }
}

fn default_vargas() -> Vec<Varga> {
    vec![Varga::D1, Varga::D9, Varga::D10]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    #[serde(default = "default_vargas")]
    pub vargas: Vec<Varga>,
    pub dasha: DashaSettings,
    pub include: IncludeFlags,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default(),
            node_mode: NodeMode::default(),
            vargas: default_vargas(),
            dasha: DashaSettings::default(),
            include: IncludeFlags::default(),
        }
    }
}

impl ChartSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        log::debug!("loaded chart settings from {}", path.display());
        Ok(settings)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DASHA_DEPTH).contains(&self.dasha.depth) {
            return Err(ConfigError::Invalid {
                field: "dasha.depth",
                reason: format!("{} is outside 1..={MAX_DASHA_DEPTH}", self.dasha.depth),
            });
        }
        let mut seen = HashSet::new();
        for v in &self.vargas {
            if !seen.insert(*v) {
                return Err(ConfigError::Invalid {
                    field: "vargas",
                    reason: format!("{v} listed twice"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let s = ChartSettings::from_toml_str("").unwrap();
        assert_eq!(s, ChartSettings::default());
        assert_eq!(s.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(s.dasha.depth, 3);
        assert_eq!(s.vargas, vec![Varga::D1, Varga::D9, Varga::D10]);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let s = ChartSettings::from_toml_str(
            r#"
ayanamsha = "krishnamurti"
node_mode = "true"

[dasha]
system = "yogini"

[include]
transit = false
"#,
        )
        .unwrap();
        assert_eq!(s.ayanamsha, AyanamshaSystem::Krishnamurti);
        assert_eq!(s.node_mode, NodeMode::True);
        assert_eq!(s.dasha.system, DashaSystem::Yogini);
        assert_eq!(s.dasha.depth, 3);
        assert!(!s.include.transit);
        assert!(s.include.shadbala);
    }

    #[test]
    fn bad_depth_rejected() {
        let err = ChartSettings::from_toml_str("[dasha]\ndepth = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "dasha.depth", .. }));
    }

    #[test]
    fn duplicate_varga_rejected() {
        let err = ChartSettings::from_toml_str("vargas = [\"D9\", \"D9\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "vargas", .. }));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let err = ChartSettings::from_toml_str("ayanamsa = \"lahiri\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let mut s = ChartSettings::default();
        s.vargas = vec![Varga::D2, Varga::D60];
        s.dasha.depth = 2;
        let text = s.to_toml_string().unwrap();
        assert_eq!(ChartSettings::from_toml_str(&text).unwrap(), s);
    }
}
