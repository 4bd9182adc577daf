//! Active-period lookup.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::graha::Graha;

use super::types::{DashaLevel, DashaNode, DashaSystem, DashaTree};

/// One active period, without its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivePeriod {
    pub level: DashaLevel,
    pub lord: Graha,
    pub label: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<&DashaNode> for ActivePeriod {
    fn from(n: &DashaNode) -> Self {
        Self {
            level: n.level,
            lord: n.lord,
            label: n.label,
            start: n.start,
            end: n.end,
        }
    }
}

/// The Maha → Antara → Pratyantara chain running at an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashaSnapshot {
    pub system: DashaSystem,
    pub instant: DateTime<Utc>,
    /// periods[0] is the mahadasha; deeper levels follow.
    pub periods: Vec<ActivePeriod>,
}

impl DashaSnapshot {
    pub fn at(&self, level: DashaLevel) -> Option<&ActivePeriod> {
        self.periods.iter().find(|p| p.level == level)
    }

    pub fn maha_lord(&self) -> Option<Graha> {
        self.at(DashaLevel::Maha).map(|p| p.lord)
    }

    pub fn antara_lord(&self) -> Option<Graha> {
        self.at(DashaLevel::Antara).map(|p| p.lord)
    }
}

fn find_active(nodes: &[DashaNode], instant: DateTime<Utc>) -> Option<&DashaNode> {
    // Siblings are sorted and contiguous.
    let idx = nodes.partition_point(|n| n.end <= instant);
    nodes.get(idx).filter(|n| n.contains(instant))
}

/// Periods containing `instant`, outermost first. Empty when the instant
/// falls outside the tree.
pub fn active_periods(tree: &DashaTree, instant: DateTime<Utc>) -> DashaSnapshot {
    let mut periods = Vec::with_capacity(tree.depth as usize);
    let mut level = tree.periods.as_slice();
    while let Some(node) = find_active(level, instant) {
        periods.push(ActivePeriod::from(node));
        level = node.children.as_slice();
    }
    DashaSnapshot {
        system: tree.system,
        instant,
        periods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::scheme::Vimshottari;
    use crate::dasha::tree::build_dasha_tree;
    use chrono::{Duration, TimeZone};

    fn tree() -> DashaTree {
        let birth = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        build_dasha_tree(&Vimshottari, 0.0, birth, 3).unwrap()
    }

    #[test]
    fn birth_is_in_first_chain() {
        let t = tree();
        let snap = active_periods(&t, t.birth);
        assert_eq!(snap.periods.len(), 3);
        assert_eq!(snap.maha_lord(), Some(Graha::Ketu));
        assert_eq!(snap.antara_lord(), Some(Graha::Ketu));
        assert_eq!(snap.periods[2].lord, Graha::Ketu);
    }

    #[test]
    fn boundary_instant_belongs_to_next_period() {
        let t = tree();
        let venus_start = t.periods[1].start;
        let snap = active_periods(&t, venus_start);
        assert_eq!(snap.maha_lord(), Some(Graha::Venus));
        let before = active_periods(&t, venus_start - Duration::milliseconds(1));
        assert_eq!(before.maha_lord(), Some(Graha::Ketu));
        assert_eq!(before.antara_lord(), Some(Graha::Mercury));
    }

    #[test]
    fn outside_tree_is_empty() {
        let t = tree();
        assert!(active_periods(&t, t.cycle_end).periods.is_empty());
        assert!(active_periods(&t, t.cycle_start - Duration::days(1)).periods.is_empty());
    }
}
