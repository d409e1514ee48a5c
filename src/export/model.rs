use serde::Serialize;

/// Flat row shape shared by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct SubPhaseExport {
    pub id: i32,
    pub project: String,
    pub group_number: i32,
    pub sub_number: i32,
    pub label: String,
    pub start_date: String,
    pub start_hour: u32,
    pub duration_hours: i32,
    pub end_date: String,
    pub end_hour: u32,
    pub worker: String,
    pub budget_hours: Option<i32>,
    pub source: String,
}
