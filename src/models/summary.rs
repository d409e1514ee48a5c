use super::group::PhaseGroup;
use crate::core::calculator::gauge::BudgetGauge;

#[derive(Debug, Clone)]
pub struct GroupSummary {
    pub group: PhaseGroup,
    pub consumed: i32,
    pub gauge: BudgetGauge,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectSummary {
    pub project: String,
    pub groups: Vec<GroupSummary>,
}
