use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::SubPhaseExport;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use rusqlite::Row;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export sub-phase records.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `project`: `None` exports the whole archive, `Some` a single project
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        project: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let rows = load_subphases(pool, project)?;

        if rows.is_empty() {
            warning("No sub-phases found for the selected project.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// Load export rows, optionally filtered by project.
fn load_subphases(pool: &mut DbPool, project: &Option<String>) -> AppResult<Vec<SubPhaseExport>> {
    let conn = &mut pool.conn;

    let mut out = Vec::new();

    match project {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, project, group_number, sub_number, label, start_date, start_hour,
                        duration_hours, end_date, end_hour, worker, budget_hours, source
                 FROM phases
                 ORDER BY project ASC, group_number ASC, sub_number ASC",
            )?;

            let rows = stmt.query_map([], map_row)?;

            for r in rows {
                out.push(r?);
            }
        }
        Some(p) => {
            let mut stmt = conn.prepare(
                "SELECT id, project, group_number, sub_number, label, start_date, start_hour,
                        duration_hours, end_date, end_hour, worker, budget_hours, source
                 FROM phases
                 WHERE project = ?1
                 ORDER BY group_number ASC, sub_number ASC",
            )?;

            let rows = stmt.query_map([p], map_row)?;

            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Mapping DB → SubPhaseExport (shared by both queries).
fn map_row(row: &Row<'_>) -> rusqlite::Result<SubPhaseExport> {
    Ok(SubPhaseExport {
        id: row.get(0)?,
        project: row.get(1)?,
        group_number: row.get(2)?,
        sub_number: row.get(3)?,
        label: row.get(4)?,
        start_date: row.get(5)?,
        start_hour: row.get(6)?,
        duration_hours: row.get(7)?,
        end_date: row.get(8)?,
        end_hour: row.get(9)?,
        worker: row.get(10)?,
        budget_hours: row.get(11)?,
        source: row.get(12)?,
    })
}
