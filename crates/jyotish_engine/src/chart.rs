//! Full chart pipeline.
//!
//! The base chart and the requested vargas are built first. Dasha,
//! shadbala, ashtakavarga, drishti, relationships and transit then run on
//! scoped threads that borrow the base chart; yogas run once all of them
//! have joined. Every stage is a pure function of its inputs, so two runs
//! over the same request produce identical results.

use std::any::Any;
use std::thread::{self, ScopedJoinHandle};

use chrono::{DateTime, Utc};
use serde::Serialize;

use jyotish_config::ChartSettings;
use jyotish_core::Ephemeris;
use jyotish_vedic_base::dasha::{DashaSnapshot, DashaTree, active_periods, compute_dasha};
use jyotish_vedic_base::shadbala::{sapta_signs, saptavarga_longitudes};
use jyotish_vedic_base::{
    AshtakavargaGrid, AspectSet, Ayanamsha, DivisionalChart, FixedAyanamsha, FriendshipRelation,
    HousePlacement, SAPTA_GRAHAS, ShadbalaInputs, ShadbalaScore, YogaFacts, YogaMatch,
    all_shadbalas, ashtakavarga, detect_yogas, relationship_matrix,
};

use crate::base_chart::BaseChart;
use crate::birth::BirthSpecification;
use crate::error::ChartError;
use crate::kala::kala_inputs;
use crate::transit::{TransitReport, transit_report};

/// Parts of a chart that need the birth time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Ascendant,
    Houses,
    VargaAscendants,
    Shadbala,
    Ashtakavarga,
    HouseAspects,
    AscendantYogas,
}

/// What to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub birth: BirthSpecification,
    pub settings: ChartSettings,
    /// Instant for the transit report and the running dasha. `None` skips
    /// both.
    pub evaluate_at: Option<DateTime<Utc>>,
    fixed_ayanamsha: Option<FixedAyanamsha>,
}

impl ChartRequest {
    pub fn new(birth: BirthSpecification, settings: ChartSettings) -> Self {
        Self {
            birth,
            settings,
            evaluate_at: None,
            fixed_ayanamsha: None,
        }
    }

    pub fn evaluated_at(mut self, instant: DateTime<Utc>) -> Self {
        self.evaluate_at = Some(instant);
        self
    }

    /// Use a constant ayanamsha instead of the configured system.
    pub fn with_fixed_ayanamsha(mut self, degrees: f64) -> Self {
        self.fixed_ayanamsha = Some(FixedAyanamsha(degrees));
        self
    }

    pub fn ayanamsha(&self) -> &dyn Ayanamsha {
        match &self.fixed_ayanamsha {
            Some(fixed) => fixed,
            None => &self.settings.ayanamsha,
        }
    }

    fn validate(&self) -> Result<(), ChartError> {
        self.settings.validate()?;
        if let Some(FixedAyanamsha(deg)) = self.fixed_ayanamsha {
            if !deg.is_finite() {
                return Err(ChartError::invalid("ayanamsha", format!("{deg} is not finite")));
            }
        }
        Ok(())
    }
}

/// Everything computed for one request.
///
/// Optional sections are `None` when switched off in the settings or, for
/// time-dependent ones, when the birth time is unknown; the latter are
/// named in `unavailable`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub base: BaseChart,
    pub vargas: Vec<DivisionalChart>,
    pub dasha: DashaTree,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_dasha: Option<DashaSnapshot>,
    pub shadbala: Option<Vec<ShadbalaScore>>,
    pub ashtakavarga: Option<AshtakavargaGrid>,
    pub aspects: Option<AspectSet>,
    pub relationships: Option<Vec<FriendshipRelation>>,
    pub yogas: Option<Vec<YogaMatch>>,
    pub transit: Option<TransitReport>,
    pub unavailable: Vec<Section>,
}

impl ChartResult {
    pub fn is_complete(&self) -> bool {
        self.unavailable.is_empty()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panicked".to_string()
    }
}

fn join<T>(
    handle: ScopedJoinHandle<'_, Result<T, ChartError>>,
    stage: &'static str,
) -> Result<T, ChartError> {
    handle
        .join()
        .map_err(|payload| ChartError::invariant(stage, panic_message(payload)))?
}

fn shadbala_for(base: &BaseChart, houses: &HousePlacement) -> Result<Vec<ShadbalaScore>, ChartError> {
    let longitudes = base.longitudes();
    let mut house_of = [1u8; 7];
    let mut speeds = [0.0; 7];
    for g in SAPTA_GRAHAS {
        house_of[g.index()] = houses
            .house_of(g)
            .ok_or_else(|| ChartError::invariant("shadbala", format!("{g} has no house")))?;
        speeds[g.index()] = base.position(g).speed;
    }
    let inputs = ShadbalaInputs {
        longitudes,
        houses: house_of,
        speeds,
        kala: kala_inputs(&base.birth, &base.positions),
        saptavarga: saptavarga_longitudes(&longitudes)?,
    };
    Ok(all_shadbalas(&inputs)?)
}

fn unavailable_sections(settings: &ChartSettings) -> Vec<Section> {
    let inc = settings.include;
    let mut out = vec![Section::Ascendant, Section::Houses];
    if !settings.vargas.is_empty() {
        out.push(Section::VargaAscendants);
    }
    if inc.shadbala {
        out.push(Section::Shadbala);
    }
    if inc.ashtakavarga {
        out.push(Section::Ashtakavarga);
    }
    if inc.drishti {
        out.push(Section::HouseAspects);
    }
    if inc.yogas {
        out.push(Section::AscendantYogas);
    }
    out
}

struct Joined {
    dasha: DashaTree,
    shadbala: Option<Vec<ShadbalaScore>>,
    ashtakavarga: Option<AshtakavargaGrid>,
    aspects: Option<AspectSet>,
    relationships: Option<Vec<FriendshipRelation>>,
    transit: Option<TransitReport>,
}

fn run(ephemeris: &dyn Ephemeris, request: &ChartRequest) -> Result<ChartResult, ChartError> {
    request.validate()?;
    let settings = &request.settings;
    let inc = settings.include;
    let ayanamsha = request.ayanamsha();

    let base = BaseChart::compute(ephemeris, &request.birth, ayanamsha, settings.node_mode)?;
    let asc_lon = base.ascendant.map(|a| a.longitude);
    let vargas = settings
        .vargas
        .iter()
        .map(|&v| DivisionalChart::build(v, &base.positions, asc_lon))
        .collect::<Result<Vec<_>, _>>()?;

    let base_ref = &base;
    let need_aspects = inc.drishti || inc.yogas;
    let need_relationships = inc.relationships || inc.yogas;
    let need_ashtakavarga = inc.ashtakavarga || inc.yogas;
    let joined = thread::scope(|s| -> Result<Joined, ChartError> {
        let dasha = s.spawn(move || {
            compute_dasha(
                settings.dasha.system,
                base_ref.moon().longitude,
                base_ref.birth.instant(),
                settings.dasha.depth,
            )
            .map_err(ChartError::from)
        });
        let shadbala = match (&base_ref.houses, inc.shadbala) {
            (Some(houses), true) => Some(s.spawn(move || shadbala_for(base_ref, houses))),
            _ => None,
        };
        let grid = match (base_ref.ascendant, need_ashtakavarga) {
            (Some(asc), true) => Some(s.spawn(move || {
                ashtakavarga(&sapta_signs(&base_ref.longitudes()), asc.rashi)
                    .map_err(ChartError::from)
            })),
            _ => None,
        };
        let aspects = need_aspects.then(|| {
            s.spawn(move || {
                Ok(AspectSet::build(
                    &base_ref.longitude_pairs(),
                    base_ref.ascendant.map(|a| a.rashi),
                ))
            })
        });
        let relationships = need_relationships.then(|| {
            s.spawn(move || Ok(relationship_matrix(&base_ref.sign_positions().pairs())))
        });
        let transit = match (request.evaluate_at, inc.transit) {
            (Some(at), true) => Some(s.spawn(move || {
                transit_report(ephemeris, base_ref, at, ayanamsha, settings.node_mode)
            })),
            _ => None,
        };

        // join everything before reporting the first failure
        let dasha = join(dasha, "dasha");
        let shadbala = shadbala.map(|h| join(h, "shadbala")).transpose();
        let grid = grid.map(|h| join(h, "ashtakavarga")).transpose();
        let aspects = aspects.map(|h| join(h, "drishti")).transpose();
        let relationships = relationships.map(|h| join(h, "relationships")).transpose();
        let transit = transit.map(|h| join(h, "transit")).transpose();
        Ok(Joined {
            dasha: dasha?,
            shadbala: shadbala?,
            ashtakavarga: grid?,
            aspects: aspects?,
            relationships: relationships?,
            transit: transit?,
        })
    })?;

    let current_dasha = request.evaluate_at.map(|at| active_periods(&joined.dasha, at));

    let yogas = match (&joined.aspects, &joined.relationships, inc.yogas) {
        (Some(aspects), Some(relationships), true) => {
            let mut facts =
                YogaFacts::new(&base.positions, base.houses.as_ref(), aspects, relationships);
            if let Some(scores) = &joined.shadbala {
                facts = facts.with_shadbala(scores);
            }
            if let Some(grid) = &joined.ashtakavarga {
                facts = facts.with_ashtakavarga(grid);
            }
            if let Some(snapshot) = &current_dasha {
                facts = facts.with_dasha(snapshot);
            }
            Some(detect_yogas(&facts))
        }
        _ => None,
    };

    let unavailable = if base.birth.time_known() {
        Vec::new()
    } else {
        unavailable_sections(settings)
    };

    Ok(ChartResult {
        vargas,
        dasha: joined.dasha,
        current_dasha,
        shadbala: joined.shadbala,
        ashtakavarga: joined.ashtakavarga.filter(|_| inc.ashtakavarga),
        aspects: joined.aspects.filter(|_| inc.drishti),
        relationships: joined.relationships.filter(|_| inc.relationships),
        yogas,
        transit: joined.transit,
        unavailable,
        base,
    })
}

/// Compute a complete chart for `request`.
pub fn compute_chart(
    ephemeris: &dyn Ephemeris,
    request: &ChartRequest,
) -> Result<ChartResult, ChartError> {
    log::debug!("computing chart for {} via {}", request.birth, ephemeris.name());
    let result = run(ephemeris, request);
    match &result {
        Err(e @ ChartError::CalculationInvariantViolation { .. }) => {
            log::error!(
                "chart for {} ({:?}, ayanamsha {}): {e}",
                request.birth,
                request.settings,
                request.ayanamsha().name()
            );
        }
        Err(e) => log::warn!("chart for {} failed: {e}", request.birth),
        Ok(r) => log::info!(
            "chart for {}: {} vargas, {} yogas, {} sections unavailable",
            request.birth,
            r.vargas.len(),
            r.yogas.as_ref().map_or(0, Vec::len),
            r.unavailable.len()
        ),
    }
    result
}
