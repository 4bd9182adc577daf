//! Birth balance: how much of the first mahadasha is left at birth.

use crate::nakshatra::nakshatra_from_longitude;

use super::scheme::DashaScheme;
use super::types::BirthBalance;

/// Entry index of the first mahadasha and the birth balance for a Moon at
/// `moon_sidereal_lon`.
///
/// The elapsed portion equals the Moon's fraction through its nakshatra,
/// rounded to the millisecond. A Moon exactly on a boundary belongs to the
/// later nakshatra with nothing elapsed.
pub fn birth_balance(scheme: &dyn DashaScheme, moon_sidereal_lon: f64) -> (usize, BirthBalance) {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let idx = scheme.starting_index(info.nakshatra);
    let period = scheme.period_ms(idx);
    let elapsed = ((info.fraction_elapsed * period as f64).round() as i64).clamp(0, period - 1);
    (
        idx,
        BirthBalance {
            lord: scheme.lord(idx),
            label: scheme.label(idx),
            elapsed_fraction: info.fraction_elapsed,
            elapsed_ms: elapsed,
            remaining_ms: period - elapsed,
        },
    )
}
