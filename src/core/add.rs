use crate::core::calculator::grouping;
use crate::core::calendar::WorkCalendar;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    insert_subphase, load_subphase_by_id, load_subphases_for_group, update_subphase,
};
use crate::errors::{AppError, AppResult};
use crate::models::subphase::SubPhase;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Insert a new sub-phase.
    ///
    /// The end point is projected once, here, and stored: later edits to the
    /// holiday list never rewrite history. The new record takes the next free
    /// number in its group; chronological numbering is restored on `close`.
    #[allow(clippy::too_many_arguments)]
    pub fn insert(
        pool: &mut DbPool,
        calendar: &WorkCalendar,
        project: &str,
        group_number: i32,
        label: &str,
        start_date: NaiveDate,
        start_hour: u32,
        duration_hours: i32,
        worker: &str,
    ) -> AppResult<i32> {
        if duration_hours <= 0 {
            return Err(AppError::InvalidDuration(format!(
                "{} (a real sub-phase needs at least one hour; phase metadata goes through 'group')",
                duration_hours
            )));
        }

        let (end_date, end_hour) = calendar.project_end(start_date, start_hour, duration_hours)?;

        // Number the new sub-phase after the ones already in the group
        let existing = load_subphases_for_group(pool, project, group_number)?;
        let groups = grouping::group_by(&existing);
        let sub_number = groups.first().map_or(1, grouping::next_sub_number);

        let sp = SubPhase::new(
            0,
            project,
            group_number,
            sub_number,
            label,
            start_date,
            start_hour,
            duration_hours,
            end_date,
            end_hour,
            worker,
            None,
        );

        let id = insert_subphase(&pool.conn, &sp)?;

        ttlog(
            &pool.conn,
            "add",
            &format!("{}#{}.{}", project, group_number, sub_number),
            "Sub-phase added",
        )?;

        success(format!(
            "Added sub-phase {}.{} to {} ({} h, ends {}).",
            group_number,
            sub_number,
            project,
            duration_hours,
            sp.end_str()
        ));

        Ok(id)
    }

    /// Edit an existing sub-phase by id.
    ///
    /// Schedule fields are re-projected when any of them changes; numbering
    /// is left alone (the `close` pass restores it).
    #[allow(clippy::too_many_arguments)]
    pub fn edit(
        pool: &mut DbPool,
        calendar: &WorkCalendar,
        project: &str,
        id: i32,
        label: Option<&str>,
        start_date: Option<NaiveDate>,
        start_hour: Option<u32>,
        duration_hours: Option<i32>,
        worker: Option<&str>,
    ) -> AppResult<()> {
        let mut sp = load_subphase_by_id(&pool.conn, id)?.ok_or(AppError::SubPhaseNotFound(id))?;

        if sp.project != project {
            return Err(AppError::ProjectMismatch(id, project.to_string()));
        }

        if sp.is_placeholder() {
            return Err(AppError::PlaceholderEdit(format!(
                "id {} carries the metadata of phase {} (use 'group')",
                id, sp.group_number
            )));
        }

        if let Some(l) = label {
            sp.label = l.to_string();
        }
        if let Some(w) = worker {
            sp.worker = w.to_string();
        }

        let reschedule = start_date.is_some() || start_hour.is_some() || duration_hours.is_some();

        if let Some(d) = start_date {
            sp.start_date = d;
        }
        if let Some(h) = start_hour {
            sp.start_hour = h;
        }
        if let Some(dur) = duration_hours {
            if dur <= 0 {
                return Err(AppError::InvalidDuration(format!(
                    "{} (a real sub-phase needs at least one hour)",
                    dur
                )));
            }
            sp.duration_hours = dur;
        }

        if reschedule {
            let (end_date, end_hour) =
                calendar.project_end(sp.start_date, sp.start_hour, sp.duration_hours)?;
            sp.end_date = end_date;
            sp.end_hour = end_hour;
        }

        update_subphase(&pool.conn, &sp)?;

        ttlog(
            &pool.conn,
            "edit",
            &format!("{}#{}", project, id),
            "Sub-phase updated",
        )?;

        success(format!(
            "Updated sub-phase {} of {} (run 'close' to refresh numbering).",
            id, project
        ));

        Ok(())
    }
}
