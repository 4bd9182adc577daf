//! Gochara: a fresh chart for the transit instant read against the natal
//! Moon.

use chrono::{DateTime, Utc};
use serde::Serialize;

use jyotish_core::Ephemeris;
use jyotish_vedic_base::{Ayanamsha, GocharaReport, NodeMode, gochara};

use crate::base_chart::BaseChart;
use crate::birth::BirthSpecification;
use crate::error::ChartError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitReport {
    pub instant: DateTime<Utc>,
    #[serde(flatten)]
    pub gochara: GocharaReport,
}

/// Sample the sky at `instant` from the natal place and compare it with
/// the natal Moon sign.
pub fn transit_report(
    ephemeris: &dyn Ephemeris,
    natal: &BaseChart,
    instant: DateTime<Utc>,
    ayanamsha: &dyn Ayanamsha,
    node_mode: NodeMode,
) -> Result<TransitReport, ChartError> {
    let at = BirthSpecification::at_instant(
        instant,
        natal.birth.latitude_deg(),
        natal.birth.longitude_deg(),
    )?;
    let sky = BaseChart::compute(ephemeris, &at, ayanamsha, node_mode)?;
    let report = gochara(natal.moon().rashi, &sky.positions);
    if report.sade_sati {
        log::info!(
            "sade sati ({:?}) at {instant} for natal Moon in {}",
            report.sade_sati_phase,
            report.natal_moon_rashi
        );
    }
    Ok(TransitReport {
        instant,
        gochara: report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jyotish_core::FixedEphemeris;
    use jyotish_vedic_base::{Favorability, FixedAyanamsha, Graha, Rashi, SadeSatiPhase};

    #[test]
    fn saturn_over_natal_moon() {
        let birth = BirthSpecification::new(1990, 5, 5, Some((10, 0, 0.0)), 19.0, 72.8, 330).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        // natal Moon at tropical 130 → sidereal Cancer 16° with a 24° offset
        let eph = FixedEphemeris::new()
            .with_snapshot(
                birth.instant(),
                [
                    (45.0, 1.0),
                    (130.0, 13.0),
                    (200.0, 0.6),
                    (30.0, 1.2),
                    (70.0, 0.2),
                    (80.0, 1.1),
                    (290.0, 0.05),
                ],
            )
            .with_snapshot(
                now,
                [
                    (280.0, 1.0),
                    (10.0, 13.0),
                    (270.0, 0.7),
                    (300.0, 1.4),
                    (60.0, -0.05),
                    (250.0, 1.2),
                    (130.0, 0.05),
                ],
            );
        let ayan = FixedAyanamsha(24.0);
        let natal = BaseChart::compute(&eph, &birth, &ayan, NodeMode::Mean).unwrap();
        assert_eq!(natal.moon().rashi, Rashi::Cancer);

        let t = transit_report(&eph, &natal, now, &ayan, NodeMode::Mean).unwrap();
        assert_eq!(t.instant, now);
        assert_eq!(t.gochara.positions.len(), 9);
        assert!(t.gochara.sade_sati);
        assert_eq!(t.gochara.sade_sati_phase, Some(SadeSatiPhase::Peak));
        // transit Jupiter at sidereal 36° (Taurus) is the 11th from Cancer
        let jupiter = t.gochara.position(Graha::Jupiter).unwrap();
        assert_eq!(jupiter.house_from_moon, 11);
        assert_eq!(jupiter.favorability, Favorability::Favorable);
        assert!(jupiter.retrograde);
    }
}
