use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SubPhase {
    pub id: i32,
    pub project: String,       // ⇔ phases.project (free-form code, e.g. "SITE-042")
    pub group_number: i32,     // ⇔ phases.group_number (plain grouping key, no FK)
    pub sub_number: i32,       // ⇔ phases.sub_number (0 reserved for the placeholder)
    pub label: String,         // ⇔ phases.label
    pub start_date: NaiveDate, // ⇔ phases.start_date (TEXT "YYYY-MM-DD")
    pub start_hour: u32,       // ⇔ phases.start_hour (INT 0-23)
    pub duration_hours: i32,   // ⇔ phases.duration_hours (0 = group placeholder)
    pub end_date: NaiveDate,   // ⇔ phases.end_date (derived at write time)
    pub end_hour: u32,         // ⇔ phases.end_hour
    pub worker: String,        // ⇔ phases.worker (empty = unassigned)
    pub budget_hours: Option<i32>, // ⇔ phases.budget_hours (meaningful on the placeholder)

    pub source: String,     // ⇔ phases.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ phases.created_at (TEXT, ISO8601)
}

impl SubPhase {
    /// High-level constructor for records created by the CLI.
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        project: &str,
        group_number: i32,
        sub_number: i32,
        label: &str,
        start_date: NaiveDate,
        start_hour: u32,
        duration_hours: i32,
        end_date: NaiveDate,
        end_hour: u32,
        worker: &str,
        budget_hours: Option<i32>,
    ) -> Self {
        Self {
            id,
            project: project.to_string(),
            group_number,
            sub_number,
            label: label.to_string(),
            start_date,
            start_hour,
            duration_hours,
            end_date,
            end_hour,
            worker: worker.to_string(),
            budget_hours,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// A zero-duration record carries the group's metadata instead of work.
    pub fn is_placeholder(&self) -> bool {
        self.duration_hours == 0
    }

    /// Chronological ordering key used by grouping and renumbering.
    pub fn start_key(&self) -> (NaiveDate, u32) {
        (self.start_date, self.start_hour)
    }

    pub fn start_date_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn end_date_str(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        format!("{} {:02}:00", self.start_date_str(), self.start_hour)
    }

    pub fn end_str(&self) -> String {
        format!("{} {:02}:00", self.end_date_str(), self.end_hour)
    }
}
