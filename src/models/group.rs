use super::subphase::SubPhase;

/// A named collection of sub-phases sharing a group number.
///
/// Not persisted as its own entity: groups are derived by partitioning a
/// project's sub-phases, and `label`/`budget_hours` are lifted from the
/// zero-duration placeholder when the group has one.
#[derive(Debug, Clone, Default)]
pub struct PhaseGroup {
    pub number: i32,
    pub label: String,
    pub budget_hours: Option<i32>,
    /// Real sub-phases only, in display order (placeholder excluded).
    pub subphases: Vec<SubPhase>,
}
