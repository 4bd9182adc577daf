//! Sidereal chart mathematics.
//!
//! This crate provides:
//! - Ayanamsha systems and tropical → sidereal conversion
//! - Rashi, nakshatra and pada lookup; lunar nodes; the lagna
//! - Whole-sign houses and the sixteen divisional charts
//! - Vimshottari and Yogini dasha timelines
//! - Shadbala, ashtakavarga, drishti and planetary relationships
//! - Rule-table yoga detection and gochara (transits from the Moon)
//!
//! Everything here is a pure function of its inputs. Ephemeris access and
//! orchestration live in `jyotish_engine`.

pub mod ashtakavarga;
pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod drishti;
pub mod error;
pub mod gochara;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod position;
pub mod rashi;
pub mod relationships;
pub mod shadbala;
pub mod sidereal;
pub mod util;
pub mod varga;
pub mod yoga;

pub use ashtakavarga::{AshtakavargaGrid, BAV_TOTALS, Bhinna, SAV_TOTAL, ashtakavarga};
pub use ayanamsha::{
    ALL_AYANAMSHAS, Ayanamsha, AyanamshaSystem, FixedAyanamsha, ayanamsha_mean_deg,
};
pub use bhava::{House, HousePlacement, house_number};
pub use dasha::{
    ActivePeriod, BirthBalance, DashaLevel, DashaNode, DashaScheme, DashaSnapshot, DashaSystem,
    DashaTree, active_periods, compute_dasha,
};
pub use drishti::{AspectKind, AspectRelation, AspectSet, AspectTarget};
pub use error::VedicError;
pub use gochara::{Favorability, GocharaReport, SadeSatiPhase, TransitPosition, gochara};
pub use graha::{ALL_GRAHAS, Graha, Nature, SAPTA_GRAHAS};
pub use lagna::{Ascendant, tropical_ascendant_deg, tropical_mc_deg};
pub use lunar_nodes::{NodeMode, ketu_from_rahu, node_speed_deg_per_day, rahu_deg};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use position::PlanetPosition;
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, format_longitude, rashi_from_longitude};
pub use relationships::{
    Dignity, FriendshipRelation, Naisargika, Panchadha, SignPositions, Tatkalika, dignity,
    relationship_matrix,
};
pub use shadbala::{KalaBalaInputs, ShadbalaInputs, ShadbalaScore, all_shadbalas};
pub use sidereal::{sidereal_longitude, tropical_to_sidereal};
pub use util::normalize_360;
pub use varga::{DivisionalChart, SHODASHAVARGA, Varga, varga_longitude, varga_rashi};
pub use yoga::{Fact, YogaCategory, YogaFacts, YogaMatch, YogaRule, detect_yogas};
