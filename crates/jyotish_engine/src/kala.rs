//! Time-of-birth facts for kala bala: day or night, elapsed fraction,
//! weekday, hora and the year/month lords.
//!
//! Sunrise and sunset are geometric (Sun's centre on the horizon, no
//! refraction). The Vedic day runs sunrise to sunrise; the year and month
//! lords are the weekday lords at the Sun's most recent Mesha and sign
//! ingress, found by stepping back at the Sun's mean daily motion.

use jyotish_frames::{ecliptic_to_equatorial, mean_obliquity_deg};
use jyotish_time::{jd_to_centuries, local_sidereal_time_deg};
use jyotish_vedic_base::shadbala::KalaBalaInputs;
use jyotish_vedic_base::{Graha, PlanetPosition, SAPTA_GRAHAS, normalize_360};

use crate::birth::BirthSpecification;

/// Mean sidereal motion of the Sun, degrees per day.
const SUN_MEAN_MOTION: f64 = 0.985_647_36;

/// Planetary hours run in descending orbital period.
const CHALDEAN: [Graha; 7] = [
    Graha::Saturn,
    Graha::Jupiter,
    Graha::Mars,
    Graha::Sun,
    Graha::Venus,
    Graha::Mercury,
    Graha::Moon,
];

/// Where the Sun is in its diurnal circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub is_daytime: bool,
    /// Fraction of the current day (or night) elapsed, [0, 1).
    pub fraction: f64,
    /// Days since the most recent sunrise, [0, 1).
    pub since_sunrise: f64,
}

fn signed_angle(deg: f64) -> f64 {
    let a = normalize_360(deg);
    if a > 180.0 { a - 360.0 } else { a }
}

fn fraction(num: f64, den: f64) -> f64 {
    if den <= 0.0 {
        return 0.0;
    }
    (num / den).clamp(0.0, 1.0 - f64::EPSILON)
}

/// Day/night state from the Sun's local hour angle and declination.
pub fn solar_day(hour_angle_deg: f64, declination_deg: f64, latitude_deg: f64) -> SolarDay {
    let cos_h0 = -latitude_deg.to_radians().tan() * declination_deg.to_radians().tan();
    // semi-diurnal arc; 0 in polar night, 180 in polar day
    let h0 = cos_h0.clamp(-1.0, 1.0).acos().to_degrees();
    let h = signed_angle(hour_angle_deg);
    let is_daytime = h0 > 0.0 && h.abs() <= h0;
    let frac = if is_daytime {
        fraction(h + h0, 2.0 * h0)
    } else {
        fraction(normalize_360(h - h0), 360.0 - 2.0 * h0)
    };
    SolarDay {
        is_daytime,
        fraction: frac,
        since_sunrise: normalize_360(h + h0) / 360.0,
    }
}

/// Lord of the civil weekday at a Julian Date, reckoned in local mean time.
pub fn weekday_lord(jd: f64, east_longitude_deg: f64) -> Graha {
    // JD day 0 began on a Monday
    let day = (jd + 0.5 + east_longitude_deg / 360.0).floor() as i64;
    SAPTA_GRAHAS[(day + 1).rem_euclid(7) as usize]
}

/// Lord of hora `index` (0..24) of a day ruled by `day_lord`.
pub fn hora_lord(day_lord: Graha, index: usize) -> Graha {
    let start = CHALDEAN.iter().position(|&g| g == day_lord).unwrap_or(0);
    CHALDEAN[(start + index) % 7]
}

/// Kala bala inputs for a birth, from positions already sampled for it.
///
/// `positions` holds Sun..Saturn at least, indexed by [`Graha::index`].
pub fn kala_inputs(birth: &BirthSpecification, positions: &[PlanetPosition]) -> KalaBalaInputs {
    let jd = birth.jd();
    let eps = mean_obliquity_deg(jd_to_centuries(jd));
    let east = birth.longitude_deg();

    let mut declinations = [0.0; 7];
    for (slot, p) in declinations.iter_mut().zip(positions) {
        *slot = ecliptic_to_equatorial(p.tropical_longitude, p.latitude, eps).declination_deg;
    }

    let sun = &positions[Graha::Sun.index()];
    let moon = &positions[Graha::Moon.index()];
    let sun_eq = ecliptic_to_equatorial(sun.tropical_longitude, sun.latitude, eps);
    let hour_angle = local_sidereal_time_deg(jd, east) - sun_eq.right_ascension_deg;
    let day = solar_day(hour_angle, sun_eq.declination_deg, birth.latitude_deg());

    let sunrise_jd = jd - day.since_sunrise;
    let weekday = weekday_lord(sunrise_jd, east);
    let hora_index = ((day.since_sunrise * 24.0).floor() as usize).min(23);

    let month_ingress = jd - sun.degree_in_rashi / SUN_MEAN_MOTION;
    let year_ingress = jd - sun.longitude / SUN_MEAN_MOTION;

    let inputs = KalaBalaInputs {
        is_daytime: day.is_daytime,
        day_night_fraction: day.fraction,
        moon_sun_elongation: normalize_360(moon.longitude - sun.longitude),
        year_lord: weekday_lord(year_ingress, east),
        month_lord: weekday_lord(month_ingress, east),
        weekday_lord: weekday,
        hora_lord: hora_lord(weekday, hora_index),
        declinations,
    };
    log::trace!("kala inputs for {birth}: {inputs:?}");
    inputs
}
