use crate::models::group::PhaseGroup;
use crate::models::subphase::SubPhase;
use std::collections::BTreeMap;

/// Partition a project's sub-phases into phase groups, ordered by group
/// number ascending.
///
/// Within each group the real sub-phases are sorted by (start_date,
/// start_hour) ascending. The sort is display-only: `sub_number` is never
/// touched here (the renumbering pass owns that).
pub fn group_by(subphases: &[SubPhase]) -> Vec<PhaseGroup> {
    let mut buckets: BTreeMap<i32, Vec<SubPhase>> = BTreeMap::new();
    for sp in subphases {
        buckets.entry(sp.group_number).or_default().push(sp.clone());
    }

    let mut groups = Vec::new();

    for (number, members) in buckets {
        let placeholder = members.iter().find(|sp| sp.is_placeholder());

        let label = placeholder.map(|p| p.label.clone()).unwrap_or_default();
        let budget_hours = placeholder.and_then(|p| p.budget_hours);

        let mut real: Vec<SubPhase> = members
            .iter()
            .filter(|sp| !sp.is_placeholder())
            .cloned()
            .collect();
        real.sort_by_key(|sp| sp.start_key());

        groups.push(PhaseGroup {
            number,
            label,
            budget_hours,
            subphases: real,
        });
    }

    groups
}

/// Number to assign to the next sub-phase added to a group: 1 for an empty
/// group, otherwise max existing number + 1. Monotonic at creation time;
/// the chronological 1..N numbering is only restored on close.
pub fn next_sub_number(group: &PhaseGroup) -> i32 {
    group
        .subphases
        .iter()
        .map(|sp| sp.sub_number)
        .max()
        .map_or(1, |m| m + 1)
}
