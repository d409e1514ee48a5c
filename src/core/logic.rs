use crate::core::calculator::{consumed, gauge, grouping};
use crate::models::subphase::SubPhase;
use crate::models::summary::{GroupSummary, ProjectSummary};

pub struct Core;

impl Core {
    /// Assemble the display model for a project: groups in number order,
    /// each with its consumed hours and budget gauge.
    pub fn build_project_summary(project: &str, subphases: &[SubPhase]) -> ProjectSummary {
        let groups = grouping::group_by(subphases)
            .into_iter()
            .map(|g| {
                let consumed = consumed::consumed_hours(&g);
                let gauge = gauge::gauge(consumed, g.budget_hours.unwrap_or(0));
                GroupSummary {
                    group: g,
                    consumed,
                    gauge,
                }
            })
            .collect();

        ProjectSummary {
            project: project.to_string(),
            groups,
        }
    }
}
