use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::subphase::SubPhase;
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

/// Load every sub-phase of a project, in stored numbering order.
///
/// The renumbering pass relies on this (group_number, sub_number, id)
/// ordering: it is the "prior order" that breaks start-point ties.
pub fn load_subphases_by_project(pool: &mut DbPool, project: &str) -> AppResult<Vec<SubPhase>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM phases
         WHERE project = ?1
         ORDER BY group_number ASC, sub_number ASC, id ASC",
    )?;

    let rows = stmt.query_map([project], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load the members of a single phase group, placeholder included.
pub fn load_subphases_for_group(
    pool: &mut DbPool,
    project: &str,
    group_number: i32,
) -> AppResult<Vec<SubPhase>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM phases
         WHERE project = ?1 AND group_number = ?2
         ORDER BY sub_number ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![project, group_number], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_subphase_by_id(conn: &Connection, id: i32) -> AppResult<Option<SubPhase>> {
    let mut stmt = conn.prepare("SELECT * FROM phases WHERE id = ?1")?;
    let sp = stmt.query_row([id], map_row).optional()?;
    Ok(sp)
}

/// Find the zero-duration metadata carrier of a group, if any.
pub fn find_placeholder(
    conn: &Connection,
    project: &str,
    group_number: i32,
) -> AppResult<Option<SubPhase>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM phases
         WHERE project = ?1 AND group_number = ?2 AND duration_hours = 0
         ORDER BY id ASC
         LIMIT 1",
    )?;
    let sp = stmt
        .query_row(params![project, group_number], map_row)
        .optional()?;
    Ok(sp)
}

pub fn map_row(row: &Row) -> Result<SubPhase> {
    let start_str: String = row.get("start_date")?;
    let end_str: String = row.get("end_date")?;

    let start_date = NaiveDate::parse_from_str(&start_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(start_str.clone())),
        )
    })?;

    let end_date = NaiveDate::parse_from_str(&end_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(end_str.clone())),
        )
    })?;

    Ok(SubPhase {
        id: row.get("id")?,
        project: row.get("project")?,
        group_number: row.get("group_number")?,
        sub_number: row.get("sub_number")?,
        label: row.get("label")?,
        start_date,
        start_hour: row.get("start_hour")?,
        duration_hours: row.get("duration_hours")?,
        end_date,
        end_hour: row.get("end_hour")?,
        worker: row.get("worker")?,
        budget_hours: row.get("budget_hours")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a sub-phase and return its new row id.
pub fn insert_subphase(conn: &Connection, sp: &SubPhase) -> AppResult<i32> {
    conn.execute(
        "INSERT INTO phases (project, group_number, sub_number, label, start_date, start_hour,
                             duration_hours, end_date, end_hour, worker, budget_hours, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            sp.project,
            sp.group_number,
            sp.sub_number,
            sp.label,
            sp.start_date_str(),
            sp.start_hour,
            sp.duration_hours,
            sp.end_date_str(),
            sp.end_hour,
            sp.worker,
            sp.budget_hours,
            sp.source,
            sp.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid() as i32)
}

/// Update a sub-phase (all fields except id).
pub fn update_subphase(conn: &Connection, sp: &SubPhase) -> AppResult<()> {
    conn.execute(
        "UPDATE phases
         SET project = ?1, group_number = ?2, sub_number = ?3,
             label = ?4, start_date = ?5, start_hour = ?6,
             duration_hours = ?7, end_date = ?8, end_hour = ?9,
             worker = ?10, budget_hours = ?11, source = ?12, created_at = ?13
         WHERE id = ?14",
        params![
            sp.project,
            sp.group_number,
            sp.sub_number,
            sp.label,
            sp.start_date_str(),
            sp.start_hour,
            sp.duration_hours,
            sp.end_date_str(),
            sp.end_hour,
            sp.worker,
            sp.budget_hours,
            sp.source,
            sp.created_at,
            sp.id,
        ],
    )?;
    Ok(())
}

/// Single-field write used by the renumbering pass.
/// Returns the raw rusqlite error so callers can attach partial-write context.
pub fn update_sub_number(conn: &Connection, id: i32, sub_number: i32) -> Result<()> {
    conn.execute(
        "UPDATE phases SET sub_number = ?1 WHERE id = ?2",
        params![sub_number, id],
    )?;
    Ok(())
}

/// In-place metadata write on the group placeholder.
pub fn update_group_metadata(
    conn: &Connection,
    id: i32,
    label: &str,
    budget_hours: Option<i32>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE phases SET label = ?1, budget_hours = ?2 WHERE id = ?3",
        params![label, budget_hours, id],
    )?;
    Ok(())
}

pub fn delete_subphase(conn: &Connection, id: i32) -> Result<()> {
    conn.execute("DELETE FROM phases WHERE id = ?", [id])?;
    Ok(())
}
