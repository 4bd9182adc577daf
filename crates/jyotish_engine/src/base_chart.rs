//! Sampling the ephemeris and building the sidereal base chart.

use serde::Serialize;

use jyotish_core::{Body, Ephemeris, EphemerisError};
use jyotish_time::jd_to_centuries;
use jyotish_vedic_base::lagna::tropical_ascendant_deg;
use jyotish_vedic_base::sidereal::tropical_to_sidereal;
use jyotish_vedic_base::{
    Ascendant, Ayanamsha, Graha, HousePlacement, NodeMode, PlanetPosition, SignPositions,
    ketu_from_rahu, node_speed_deg_per_day, rahu_deg,
};

use crate::birth::BirthSpecification;
use crate::error::ChartError;

/// The ayanamsha used for a chart, by name and value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AyanamshaValue {
    pub name: String,
    pub degrees: f64,
}

/// Positions, Ascendant and houses for one instant and place.
///
/// `ascendant` and `houses` are `None` when the birth time is unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseChart {
    pub birth: BirthSpecification,
    pub ayanamsha: AyanamshaValue,
    pub node_mode: NodeMode,
    /// Sun..Ketu, indexed by [`Graha::index`].
    pub positions: Vec<PlanetPosition>,
    pub ascendant: Option<Ascendant>,
    pub houses: Option<HousePlacement>,
}

fn sample_body(
    ephemeris: &dyn Ephemeris,
    body: Body,
    birth: &BirthSpecification,
    ayanamsha_deg: f64,
) -> Result<PlanetPosition, ChartError> {
    let instant = birth.instant();
    let s = ephemeris.sample(body, instant)?;
    if !s.is_finite() {
        return Err(EphemerisError::NonFinite { body, instant }.into());
    }
    Ok(PlanetPosition::from_tropical(
        Graha::from_body(body),
        s.longitude_deg,
        ayanamsha_deg,
        s.latitude_deg,
        s.speed_deg_per_day,
    ))
}

impl BaseChart {
    /// Sample the seven bodies, derive the nodes, and place the Ascendant
    /// and whole-sign houses when the time is known.
    pub fn compute(
        ephemeris: &dyn Ephemeris,
        birth: &BirthSpecification,
        ayanamsha: &dyn Ayanamsha,
        node_mode: NodeMode,
    ) -> Result<Self, ChartError> {
        let jd = birth.jd();
        let ayanamsha_deg = ayanamsha.offset_deg(jd);
        if !ayanamsha_deg.is_finite() {
            return Err(ChartError::invariant(
                "ayanamsha",
                format!("{} gave {ayanamsha_deg} at JD {jd}", ayanamsha.name()),
            ));
        }

        let mut positions = Body::ALL
            .into_iter()
            .map(|body| sample_body(ephemeris, body, birth, ayanamsha_deg))
            .collect::<Result<Vec<_>, _>>()?;

        let t = jd_to_centuries(jd);
        let rahu = rahu_deg(t, node_mode);
        let node_speed = node_speed_deg_per_day(t);
        positions.push(PlanetPosition::from_tropical(
            Graha::Rahu,
            rahu,
            ayanamsha_deg,
            0.0,
            node_speed,
        ));
        positions.push(PlanetPosition::from_tropical(
            Graha::Ketu,
            ketu_from_rahu(rahu),
            ayanamsha_deg,
            0.0,
            node_speed,
        ));

        let ascendant = birth.time_known().then(|| {
            let tropical = tropical_ascendant_deg(jd, birth.latitude_deg(), birth.longitude_deg());
            Ascendant::from_longitudes(tropical, tropical_to_sidereal(tropical, ayanamsha_deg))
        });
        let houses = ascendant.map(|asc| {
            HousePlacement::whole_sign(
                asc.rashi,
                positions.iter().map(|p| (p.graha, p.longitude)),
            )
        });

        let chart = Self {
            birth: *birth,
            ayanamsha: AyanamshaValue {
                name: ayanamsha.name().to_string(),
                degrees: ayanamsha_deg,
            },
            node_mode,
            positions,
            ascendant,
            houses,
        };
        chart.check()?;
        log::debug!(
            "base chart for {birth}: ayanamsha {} = {:.6}°, lagna {}",
            chart.ayanamsha.name,
            ayanamsha_deg,
            chart
                .ascendant
                .map_or_else(|| "unknown".to_string(), |a| a.rashi.to_string()),
        );
        Ok(chart)
    }

    fn check(&self) -> Result<(), ChartError> {
        for (i, p) in self.positions.iter().enumerate() {
            if p.graha.index() != i {
                return Err(ChartError::invariant(
                    "base chart",
                    format!("{} stored at slot {i}", p.graha),
                ));
            }
            if !(0.0..360.0).contains(&p.longitude) {
                return Err(ChartError::invariant(
                    "base chart",
                    format!("{} longitude {} outside [0, 360)", p.graha, p.longitude),
                ));
            }
        }
        Ok(())
    }

    pub fn position(&self, graha: Graha) -> &PlanetPosition {
        &self.positions[graha.index()]
    }

    pub fn moon(&self) -> &PlanetPosition {
        self.position(Graha::Moon)
    }

    /// Sidereal longitudes, Sun..Ketu.
    pub fn longitudes(&self) -> [f64; 9] {
        let mut out = [0.0; 9];
        for (slot, p) in out.iter_mut().zip(&self.positions) {
            *slot = p.longitude;
        }
        out
    }

    pub fn longitude_pairs(&self) -> Vec<(Graha, f64)> {
        self.positions.iter().map(|p| (p.graha, p.longitude)).collect()
    }

    pub fn sign_positions(&self) -> SignPositions {
        SignPositions::from_longitudes(&self.longitude_pairs())
    }
}
