//! Truncated lunar theory (ELP-2000/82 main terms).
//!
//! Geocentric ecliptic longitude, latitude and distance of the Moon,
//! referred to the mean equinox of date. The largest 34 longitude terms,
//! 20 latitude terms and 4 distance terms are kept, giving roughly
//! 0.01° in longitude.
//!
//! Source: Meeus, Astronomical Algorithms (2nd ed.), chapter 47.

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// Longitude terms. Row: `[D, M, M', F, coefficient in 1e-6 deg]`.
const LONGITUDE_TERMS: [[f64; 5]; 34] = [
    [0.0, 0.0, 1.0, 0.0, 6_288_774.0],
    [2.0, 0.0, -1.0, 0.0, 1_274_027.0],
    [2.0, 0.0, 0.0, 0.0, 658_314.0],
    [0.0, 0.0, 2.0, 0.0, 213_618.0],
    [0.0, 1.0, 0.0, 0.0, -185_116.0],
    [0.0, 0.0, 0.0, 2.0, -114_332.0],
    [2.0, 0.0, -2.0, 0.0, 58_793.0],
    [2.0, -1.0, -1.0, 0.0, 57_066.0],
    [2.0, 0.0, 1.0, 0.0, 53_322.0],
    [2.0, -1.0, 0.0, 0.0, 45_758.0],
    [0.0, 1.0, -1.0, 0.0, -40_923.0],
    [1.0, 0.0, 0.0, 0.0, -34_720.0],
    [0.0, 1.0, 1.0, 0.0, -30_383.0],
    [2.0, 0.0, 0.0, -2.0, 15_327.0],
    [0.0, 0.0, 1.0, 2.0, -12_528.0],
    [0.0, 0.0, 1.0, -2.0, 10_980.0],
    [4.0, 0.0, -1.0, 0.0, 10_675.0],
    [0.0, 0.0, 3.0, 0.0, 10_034.0],
    [4.0, 0.0, -2.0, 0.0, 8_548.0],
    [2.0, 1.0, -1.0, 0.0, -7_888.0],
    [2.0, 1.0, 0.0, 0.0, -6_766.0],
    [1.0, 0.0, -1.0, 0.0, -5_163.0],
    [1.0, 1.0, 0.0, 0.0, 4_987.0],
    [2.0, -1.0, 1.0, 0.0, 4_036.0],
    [2.0, 0.0, 2.0, 0.0, 3_994.0],
    [4.0, 0.0, 0.0, 0.0, 3_861.0],
    [2.0, 0.0, -3.0, 0.0, 3_665.0],
    [0.0, 1.0, -2.0, 0.0, -2_689.0],
    [2.0, 0.0, -1.0, 2.0, -2_602.0],
    [2.0, -1.0, -2.0, 0.0, 2_390.0],
    [1.0, 0.0, 1.0, 0.0, -2_348.0],
    [2.0, -2.0, 0.0, 0.0, 2_236.0],
    [0.0, 1.0, 2.0, 0.0, -2_120.0],
    [0.0, 2.0, 0.0, 0.0, -2_069.0],
];

/// Latitude terms. Row: `[D, M, M', F, coefficient in 1e-6 deg]`.
const LATITUDE_TERMS: [[f64; 5]; 20] = [
    [0.0, 0.0, 0.0, 1.0, 5_128_122.0],
    [0.0, 0.0, 1.0, 1.0, 280_602.0],
    [0.0, 0.0, 1.0, -1.0, 277_693.0],
    [2.0, 0.0, 0.0, -1.0, 173_237.0],
    [2.0, 0.0, -1.0, 1.0, 55_413.0],
    [2.0, 0.0, -1.0, -1.0, 46_271.0],
    [2.0, 0.0, 0.0, 1.0, 32_573.0],
    [0.0, 0.0, 2.0, 1.0, 17_198.0],
    [2.0, 0.0, 1.0, -1.0, 9_266.0],
    [0.0, 0.0, 2.0, -1.0, 8_822.0],
    [2.0, -1.0, 0.0, -1.0, 8_216.0],
    [2.0, 0.0, -2.0, -1.0, 4_324.0],
    [2.0, 0.0, 1.0, 1.0, 4_200.0],
    [2.0, 1.0, 0.0, -1.0, -3_359.0],
    [2.0, -1.0, -1.0, 1.0, 2_463.0],
    [2.0, -1.0, 0.0, 1.0, 2_211.0],
    [2.0, -1.0, -1.0, -1.0, 2_065.0],
    [0.0, 1.0, -1.0, -1.0, -1_870.0],
    [4.0, 0.0, -1.0, -1.0, 1_828.0],
    [0.0, 1.0, 0.0, 1.0, -1_794.0],
];

/// Distance terms. Row: `[D, M, M', F, coefficient in 1e-3 km]` (cosine series).
const DISTANCE_TERMS: [[f64; 5]; 4] = [
    [0.0, 0.0, 1.0, 0.0, -20_905_355.0],
    [2.0, 0.0, -1.0, 0.0, -3_699_111.0],
    [2.0, 0.0, 0.0, 0.0, -2_955_968.0],
    [0.0, 0.0, 2.0, 0.0, -569_925.0],
];

/// Geocentric Moon position: (longitude deg, latitude deg, distance AU).
///
/// `t` = Julian centuries since J2000.0. Longitude is not normalized.
pub(crate) fn moon_position(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l_mean = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let m_moon = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    // Eccentricity of Earth's orbit, scales terms containing M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let a3 = 313.45 + 481_266.484 * t;

    let series = |terms: &[[f64; 5]], trig: fn(f64) -> f64| -> f64 {
        terms
            .iter()
            .map(|row| {
                let arg = (row[0] * d + row[1] * m + row[2] * m_moon + row[3] * f).to_radians();
                let scale = e.powi(row[1].abs() as i32);
                row[4] * scale * trig(arg)
            })
            .sum()
    };

    let sin_deg = |x: f64| x.to_radians().sin();

    let sigma_l = series(&LONGITUDE_TERMS, f64::sin)
        + 3958.0 * sin_deg(a1)
        + 1962.0 * sin_deg(l_mean - f)
        + 318.0 * sin_deg(a2);
    let sigma_b = series(&LATITUDE_TERMS, f64::sin) - 2235.0 * sin_deg(l_mean)
        + 382.0 * sin_deg(a3)
        + 175.0 * sin_deg(a1 - f)
        + 175.0 * sin_deg(a1 + f)
        + 127.0 * sin_deg(l_mean - m_moon)
        - 115.0 * sin_deg(l_mean + m_moon);
    let sigma_r = series(&DISTANCE_TERMS, f64::cos);

    let longitude = l_mean + sigma_l / 1e6;
    let latitude = sigma_b / 1e6;
    let distance_km = 385_000.56 + sigma_r / 1000.0;
    (longitude, latitude, distance_km / KM_PER_AU)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 47.a: 1992 April 12, 0h TD.
    const T_47A: f64 = (2_448_724.5 - 2_451_545.0) / 36_525.0;

    #[test]
    fn meeus_47a_longitude() {
        let (lon, _, _) = moon_position(T_47A);
        let lon = lon.rem_euclid(360.0);
        assert!((lon - 133.162_655).abs() < 0.01, "lon = {lon}");
    }

    #[test]
    fn meeus_47a_latitude() {
        let (_, lat, _) = moon_position(T_47A);
        assert!((lat - (-3.229_126)).abs() < 0.01, "lat = {lat}");
    }

    #[test]
    fn meeus_47a_distance() {
        let (_, _, dist_au) = moon_position(T_47A);
        let km = dist_au * KM_PER_AU;
        assert!((km - 368_409.7).abs() < 200.0, "dist = {km}");
    }
}
