//! Analytic low-precision ephemeris.
//!
//! Planets come from the JPL "Approximate Positions of the Planets"
//! Keplerian elements (Standish, table 1, valid 1800-2050). The Sun is the
//! reflection of the Earth-Moon barycenter. The Moon uses the truncated
//! lunar series in [`crate::lunar`].
//!
//! Heliocentric positions are computed in the J2000 ecliptic and then
//! carried to the equinox of date by adding general precession in
//! longitude. Light time and aberration are ignored. Expect errors of a
//! few arcminutes for the planets.

use chrono::{DateTime, Utc};
use jyotish_frames::general_precession_longitude_deg;
use jyotish_time::{calendar_to_jd, utc_to_jd};

use crate::lunar::moon_position;
use crate::{Body, Ephemeris, EphemerisError, EphemerisSample};

/// Half-width of the central difference used for daily speed (days).
const SPEED_STEP_DAYS: f64 = 0.5;

/// Osculating elements at J2000 and their rates per Julian century.
///
/// Order: a (AU), e, I (deg), L (deg), long. perihelion (deg), long. node (deg).
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    base: [f64; 6],
    rate: [f64; 6],
}

const MERCURY: OrbitalElements = OrbitalElements {
    base: [0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93],
    rate: [0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
};

const VENUS: OrbitalElements = OrbitalElements {
    base: [0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55],
    rate: [0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
};

const EARTH_MOON_BARY: OrbitalElements = OrbitalElements {
    base: [1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0],
    rate: [0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0],
};

const MARS: OrbitalElements = OrbitalElements {
    base: [1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91],
    rate: [0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
};

const JUPITER: OrbitalElements = OrbitalElements {
    base: [5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09],
    rate: [-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06],
};

const SATURN: OrbitalElements = OrbitalElements {
    base: [9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48],
    rate: [-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94],
};

impl OrbitalElements {
    /// Heliocentric J2000 ecliptic position in AU at `t` centuries.
    fn heliocentric(&self, t: f64) -> [f64; 3] {
        let el: [f64; 6] = std::array::from_fn(|i| self.base[i] + self.rate[i] * t);
        let [a, e, incl, mean_lon, peri_lon, node_lon] = el;

        let mean_anomaly = normalize_signed_deg(mean_lon - peri_lon).to_radians();
        let ecc_anomaly = solve_kepler(mean_anomaly, e);

        let xp = a * (ecc_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let (sw, cw) = (peri_lon - node_lon).to_radians().sin_cos();
        let (sn, cn) = node_lon.to_radians().sin_cos();
        let (si, ci) = incl.to_radians().sin_cos();

        [
            (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp,
            (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp,
            (sw * si) * xp + (cw * si) * yp,
        ]
    }
}

/// Newton iteration on `E - e sin E = M` (radians).
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

fn normalize_signed_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Analytic provider for dates 1800-01-01 through 2050-12-31.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerianEphemeris;

impl KeplerianEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Supported Julian Date range (inclusive start, exclusive end).
    pub fn valid_range_jd() -> (f64, f64) {
        (calendar_to_jd(1800, 1, 1.0), calendar_to_jd(2051, 1, 1.0))
    }

    /// Longitude (not normalized), latitude and distance at a Julian Date.
    fn position(body: Body, jd: f64) -> (f64, f64, f64) {
        let t = (jd - jyotish_time::J2000_JD) / jyotish_time::DAYS_PER_JULIAN_CENTURY;
        if body == Body::Moon {
            return moon_position(t);
        }

        let earth = EARTH_MOON_BARY.heliocentric(t);
        let [x, y, z] = match body {
            Body::Sun => [-earth[0], -earth[1], -earth[2]],
            other => {
                let planet = planet_elements(other).heliocentric(t);
                [planet[0] - earth[0], planet[1] - earth[1], planet[2] - earth[2]]
            }
        };

        let lon_j2000 = y.atan2(x).to_degrees();
        let lat = z.atan2(x.hypot(y)).to_degrees();
        let dist = (x * x + y * y + z * z).sqrt();
        (lon_j2000 + general_precession_longitude_deg(t), lat, dist)
    }
}

fn planet_elements(body: Body) -> &'static OrbitalElements {
    match body {
        Body::Mercury => &MERCURY,
        Body::Venus => &VENUS,
        Body::Mars => &MARS,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        Body::Sun | Body::Moon => &EARTH_MOON_BARY,
    }
}

impl Ephemeris for KeplerianEphemeris {
    fn name(&self) -> &str {
        "keplerian"
    }

    fn sample(&self, body: Body, instant: DateTime<Utc>) -> Result<EphemerisSample, EphemerisError> {
        let jd = utc_to_jd(instant);
        let (start, end) = Self::valid_range_jd();
        if !(start..end).contains(&jd) {
            return Err(EphemerisError::OutOfRange { body, instant });
        }

        let (lon, lat, dist) = Self::position(body, jd);
        let (lon_before, _, _) = Self::position(body, jd - SPEED_STEP_DAYS);
        let (lon_after, _, _) = Self::position(body, jd + SPEED_STEP_DAYS);
        let speed = normalize_signed_deg(lon_after - lon_before) / (2.0 * SPEED_STEP_DAYS);

        let sample = EphemerisSample {
            longitude_deg: lon.rem_euclid(360.0),
            latitude_deg: lat,
            distance_au: dist,
            speed_deg_per_day: speed,
        };
        log::trace!("keplerian {body} @ {instant}: {sample:?}");
        if !sample.is_finite() {
            return Err(EphemerisError::NonFinite { body, instant });
        }
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn kepler_solver_converges() {
        let m = 1.0_f64;
        let e = 0.2;
        let ecc = solve_kepler(m, e);
        assert!((ecc - e * ecc.sin() - m).abs() < 1e-12);
    }

    #[test]
    fn sun_at_j2000() {
        let s = KeplerianEphemeris.sample(Body::Sun, at(2000, 1, 1, 12)).unwrap();
        assert!((s.longitude_deg - 280.38).abs() < 0.05, "sun = {}", s.longitude_deg);
        assert!((s.distance_au - 0.9833).abs() < 0.001);
        assert!((s.speed_deg_per_day - 1.019).abs() < 0.01);
    }

    #[test]
    fn sun_meeus_25a() {
        // 1992 Oct 13 0h: true geometric longitude 199.907.
        let s = KeplerianEphemeris.sample(Body::Sun, at(1992, 10, 13, 0)).unwrap();
        assert!((s.longitude_deg - 199.907).abs() < 0.02, "sun = {}", s.longitude_deg);
    }

    #[test]
    fn planets_at_j2000_in_expected_signs() {
        let instant = at(2000, 1, 1, 12);
        let expected = [
            (Body::Mercury, 271.9),
            (Body::Venus, 241.6),
            (Body::Mars, 328.0),
            (Body::Jupiter, 25.4),
            (Body::Saturn, 40.2),
        ];
        for (body, lon) in expected {
            let s = KeplerianEphemeris.sample(body, instant).unwrap();
            assert!((s.longitude_deg - lon).abs() < 0.1, "{body}: {}", s.longitude_deg);
        }
    }

    #[test]
    fn moon_moves_about_thirteen_degrees_per_day() {
        let s = KeplerianEphemeris.sample(Body::Moon, at(2010, 6, 1, 0)).unwrap();
        assert!(s.speed_deg_per_day > 11.5 && s.speed_deg_per_day < 15.5);
        assert!(s.distance_au > 0.0023 && s.distance_au < 0.0028);
    }

    #[test]
    fn out_of_range_rejected() {
        let err = KeplerianEphemeris.sample(Body::Mars, at(2100, 1, 1, 0)).unwrap_err();
        assert!(matches!(err, EphemerisError::OutOfRange { body: Body::Mars, .. }));
    }

    #[test]
    fn longitudes_normalized() {
        for body in Body::ALL {
            let s = KeplerianEphemeris.sample(body, at(1975, 3, 20, 6)).unwrap();
            assert!((0.0..360.0).contains(&s.longitude_deg));
        }
    }
}
