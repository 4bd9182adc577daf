//! Shared angle helpers.

/// Points closer than this (in division units) to the next division
/// boundary are counted in the later division. Keeps boundaries computed as
/// `k * span` on the side they were meant to land.
const BOUNDARY_EPS: f64 = 1e-9;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn arc_distance(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Split the circle into `parts` equal divisions and locate `lon`.
///
/// Returns the 0-based division index and the fraction already traversed
/// within it, in [0, 1). Divisions are half-open: a point exactly on a
/// boundary belongs to the later division.
pub fn circle_division(lon: f64, parts: usize) -> (usize, f64) {
    let x = normalize_360(lon) * parts as f64 / 360.0;
    let idx = ((x + BOUNDARY_EPS).floor() as usize).min(parts - 1);
    let frac = (x - idx as f64).clamp(0.0, 1.0 - f64::EPSILON);
    (idx, frac)
}

/// Same as [`circle_division`] for a span `[0, width)` split into `parts`.
pub fn span_division(pos: f64, width: f64, parts: usize) -> (usize, f64) {
    let x = (pos / width * parts as f64).max(0.0);
    let idx = ((x + BOUNDARY_EPS).floor() as usize).min(parts - 1);
    let frac = (x - idx as f64).clamp(0.0, 1.0 - f64::EPSILON);
    (idx, frac)
}
