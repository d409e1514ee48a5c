use crate::models::group::PhaseGroup;

/// Hours consumed by a group: the sum of its real sub-phase durations.
/// The placeholder never contributes (duration 0 by definition, and
/// `group_by` keeps it out of `subphases` anyway).
pub fn consumed_hours(group: &PhaseGroup) -> i32 {
    group
        .subphases
        .iter()
        .filter(|sp| sp.duration_hours > 0)
        .map(|sp| sp.duration_hours)
        .sum()
}
