//! Dasha tree construction and verification.
//!
//! All arithmetic is in integer milliseconds since the Unix epoch. A child
//! lasts `parent × years(child) / total`; with the year a multiple of
//! `total²` this division is exact down to the pratyantara level, so the
//! children of every node sum exactly to the node.

use chrono::{DateTime, Utc};

use crate::error::VedicError;

use super::balance::birth_balance;
use super::scheme::DashaScheme;
use super::types::{DashaLevel, DashaNode, DashaTree, MAX_DASHA_DEPTH, YEAR_MS};

fn instant(ms: i64) -> Result<DateTime<Utc>, VedicError> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .ok_or_else(|| VedicError::invalid("instant", format!("{ms} ms is out of range")))
}

/// Build the timeline for a Moon at `moon_sidereal_lon` and a native born
/// at `birth`, down to `depth` levels (1 = mahadashas only, 3 = through
/// pratyantaras).
pub fn build_dasha_tree(
    scheme: &dyn DashaScheme,
    moon_sidereal_lon: f64,
    birth: DateTime<Utc>,
    depth: u8,
) -> Result<DashaTree, VedicError> {
    if !(1..=MAX_DASHA_DEPTH).contains(&depth) {
        return Err(VedicError::invalid(
            "dasha depth",
            format!("{depth} is outside 1..={MAX_DASHA_DEPTH}"),
        ));
    }
    if !moon_sidereal_lon.is_finite() {
        return Err(VedicError::invalid("moon longitude", "not finite"));
    }

    let (first, balance) = birth_balance(scheme, moon_sidereal_lon);
    let birth_ms = birth.timestamp_millis();
    let cycle_start_ms = birth_ms - balance.elapsed_ms;

    let n = scheme.len();
    let mahas = n * scheme.cycle_count();
    let mut periods = Vec::with_capacity(mahas);
    let mut cursor = cycle_start_ms;
    for k in 0..mahas {
        let idx = (first + k) % n;
        let len = scheme.period_ms(idx);
        periods.push(node(scheme, idx, DashaLevel::Maha, cursor, len, depth)?);
        cursor += len;
    }

    let tree = DashaTree {
        system: scheme.system(),
        depth,
        birth,
        cycle_start: instant(cycle_start_ms)?,
        cycle_end: instant(cursor)?,
        balance,
        periods,
    };
    log::debug!(
        "{} dasha: first lord {} with {:.4} years remaining, {} mahadashas",
        tree.system,
        balance.lord,
        balance.remaining_years(),
        tree.periods.len()
    );
    Ok(tree)
}

fn node(
    scheme: &dyn DashaScheme,
    idx: usize,
    level: DashaLevel,
    start_ms: i64,
    len_ms: i64,
    depth: u8,
) -> Result<DashaNode, VedicError> {
    let children = match level.child_level() {
        Some(child) if child.depth() <= depth => subdivide(scheme, idx, child, start_ms, len_ms, depth)?,
        _ => Vec::new(),
    };
    Ok(DashaNode {
        lord: scheme.lord(idx),
        label: scheme.label(idx),
        level,
        start: instant(start_ms)?,
        end: instant(start_ms + len_ms)?,
        children,
    })
}

fn subdivide(
    scheme: &dyn DashaScheme,
    parent_idx: usize,
    level: DashaLevel,
    start_ms: i64,
    parent_ms: i64,
    depth: u8,
) -> Result<Vec<DashaNode>, VedicError> {
    let n = scheme.len();
    let total = scheme.total_years();
    let mut out = Vec::with_capacity(n);
    let mut cursor = start_ms;
    for k in 0..n {
        let idx = (parent_idx + k) % n;
        let scaled = parent_ms * scheme.years(idx);
        if scaled % total != 0 {
            return Err(VedicError::invariant(
                "dasha subdivision",
                format!("{parent_ms} ms × {} / {total} is not exact", scheme.years(idx)),
            ));
        }
        let len = scaled / total;
        out.push(node(scheme, idx, level, cursor, len, depth)?);
        cursor += len;
    }
    Ok(out)
}

/// Walk a tree and confirm it tiles its cycle exactly: no gaps, no
/// overlaps, children summing to parents, and a span of exactly
/// `cycle_count × total` years.
pub fn verify_dasha_tree(tree: &DashaTree, scheme: &dyn DashaScheme) -> Result<(), VedicError> {
    let span = tree.cycle_end.timestamp_millis() - tree.cycle_start.timestamp_millis();
    let expected = scheme.total_years() * scheme.cycle_count() as i64 * YEAR_MS;
    if span != expected {
        return Err(VedicError::invariant(
            "dasha cycle span",
            format!("{span} ms, expected {expected} ms"),
        ));
    }
    if tree.birth < tree.cycle_start || tree.birth >= tree.cycle_end {
        return Err(VedicError::invariant("dasha cycle", "birth lies outside the cycle"));
    }
    check_siblings(&tree.periods, tree.cycle_start, tree.cycle_end, DashaLevel::Maha, "mahadasha")?;
    for maha in &tree.periods {
        check_node(maha, tree.depth, scheme.len())?;
    }
    Ok(())
}

fn check_node(node: &DashaNode, depth: u8, n: usize) -> Result<(), VedicError> {
    if node.duration_ms() <= 0 {
        return Err(VedicError::invariant(
            "dasha period",
            format!("{} {} has non-positive length", node.level.name(), node.label),
        ));
    }
    let Some(child) = node.level.child_level().filter(|c| c.depth() <= depth) else {
        if !node.children.is_empty() {
            return Err(VedicError::invariant(
                "dasha depth",
                format!("{} {} has children below depth {depth}", node.level.name(), node.label),
            ));
        }
        return Ok(());
    };
    if node.children.len() != n {
        return Err(VedicError::invariant(
            "dasha subdivision",
            format!("{} {} has {} children, expected {n}", node.level.name(), node.label, node.children.len()),
        ));
    }
    if node.children[0].lord != node.lord {
        return Err(VedicError::invariant(
            "dasha subdivision",
            format!("{} {} does not start with its own lord", node.level.name(), node.label),
        ));
    }
    check_siblings(&node.children, node.start, node.end, child, node.label)?;
    node.children.iter().try_for_each(|c| check_node(c, depth, n))
}

fn check_siblings(
    nodes: &[DashaNode],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    level: DashaLevel,
    parent: &str,
) -> Result<(), VedicError> {
    let mut cursor = start;
    for node in nodes {
        if node.level != level {
            return Err(VedicError::invariant(
                "dasha level",
                format!("{} under {parent} is not a {}", node.label, level.name()),
            ));
        }
        if node.start != cursor {
            return Err(VedicError::invariant(
                "dasha contiguity",
                format!("{} under {parent} starts at {}, expected {cursor}", node.label, node.start),
            ));
        }
        cursor = node.end;
    }
    if cursor != end {
        return Err(VedicError::invariant(
            "dasha sum",
            format!("children of {parent} end at {cursor}, parent ends at {end}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::scheme::{Vimshottari, Yogini};
    use crate::graha::Graha;
    use chrono::TimeZone;

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 5, 17, 4, 30, 0).unwrap()
    }

    #[test]
    fn vimshottari_full_depth_verifies() {
        let tree = build_dasha_tree(&Vimshottari, 123.456, birth(), 3).unwrap();
        verify_dasha_tree(&tree, &Vimshottari).unwrap();
        assert_eq!(tree.periods.len(), 9);
        assert_eq!(tree.periods[0].children.len(), 9);
        assert_eq!(tree.periods[0].children[0].children.len(), 9);
    }

    #[test]
    fn span_is_exactly_120_years() {
        let tree = build_dasha_tree(&Vimshottari, 200.0, birth(), 2).unwrap();
        let span = tree.cycle_end.timestamp_millis() - tree.cycle_start.timestamp_millis();
        assert_eq!(span, 120 * YEAR_MS);
    }

    #[test]
    fn antara_rotation_starts_with_parent() {
        let tree = build_dasha_tree(&Vimshottari, 10.0, birth(), 2).unwrap();
        let ketu = &tree.periods[0];
        assert_eq!(ketu.lord, Graha::Ketu);
        let lords: Vec<Graha> = ketu.children.iter().map(|c| c.lord).collect();
        assert_eq!(lords[0], Graha::Ketu);
        assert_eq!(lords[1], Graha::Venus);
        assert_eq!(lords[8], Graha::Moon);
        // Ketu/Ketu antara = 7 × 7 / 120 years.
        assert_eq!(ketu.children[0].duration_ms(), 7 * 7 * 120 * 2_191_500);
    }

    #[test]
    fn birth_on_boundary_starts_the_mahadasha() {
        let tree = build_dasha_tree(&Vimshottari, 40.0, birth(), 1).unwrap();
        assert_eq!(tree.cycle_start, birth());
        assert_eq!(tree.periods[0].lord, Graha::Moon);
        assert_eq!(tree.periods[0].start, birth());
    }

    #[test]
    fn yogini_three_cycles() {
        let tree = build_dasha_tree(&Yogini, 300.0, birth(), 3).unwrap();
        verify_dasha_tree(&tree, &Yogini).unwrap();
        assert_eq!(tree.periods.len(), 24);
        let span = tree.cycle_end.timestamp_millis() - tree.cycle_start.timestamp_millis();
        assert_eq!(span, 108 * YEAR_MS);
    }

    #[test]
    fn depth_out_of_range() {
        assert!(build_dasha_tree(&Vimshottari, 0.0, birth(), 0).is_err());
        assert!(build_dasha_tree(&Vimshottari, 0.0, birth(), 4).is_err());
        assert!(build_dasha_tree(&Vimshottari, f64::NAN, birth(), 1).is_err());
    }

    #[test]
    fn tampered_tree_is_rejected() {
        let mut tree = build_dasha_tree(&Vimshottari, 77.0, birth(), 2).unwrap();
        let child = &mut tree.periods[2].children[4];
        child.end += chrono::Duration::milliseconds(1);
        let err = verify_dasha_tree(&tree, &Vimshottari).unwrap_err();
        assert!(matches!(err, VedicError::Invariant { .. }));
    }
}
