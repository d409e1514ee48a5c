use crate::core::calculator::renumber::plan_renumber;
use crate::core::calendar::DayBlocks;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_subphase, find_placeholder, insert_subphase, load_subphases_by_project,
    load_subphases_for_group, update_group_metadata, update_sub_number,
};
use crate::errors::{AppError, AppResult};
use crate::models::subphase::SubPhase;
use crate::ui::messages::success;
use crate::utils::date;

/// Group-level operations: metadata upsert, close (renumber), bulk delete.
pub struct GroupLogic;

impl GroupLogic {
    /// Create or update the metadata carrier of a phase group.
    ///
    /// Exactly one write: an in-place update when the placeholder exists, an
    /// insert otherwise. A missing placeholder is not an error. Fields left
    /// as None keep their current value on update.
    pub fn upsert_metadata(
        pool: &mut DbPool,
        blocks: DayBlocks,
        project: &str,
        group_number: i32,
        label: Option<&str>,
        budget_hours: Option<i32>,
    ) -> AppResult<()> {
        if let Some(ph) = find_placeholder(&pool.conn, project, group_number)? {
            let new_label = label.unwrap_or(&ph.label);
            let new_budget = budget_hours.or(ph.budget_hours);

            update_group_metadata(&pool.conn, ph.id, new_label, new_budget)?;

            ttlog(
                &pool.conn,
                "group",
                &format!("{}#{}", project, group_number),
                "Phase metadata updated",
            )?;
            success(format!("Updated phase {} of {}.", group_number, project));
        } else {
            // No dedicated entity for a phase group: a zero-duration
            // sub-phase at number 0 carries the name and the budget.
            let today = date::today();
            let sp = SubPhase::new(
                0,
                project,
                group_number,
                0,
                label.unwrap_or(""),
                today,
                blocks.day_start,
                0,
                today,
                blocks.day_start,
                "",
                budget_hours,
            );

            insert_subphase(&pool.conn, &sp)?;

            ttlog(
                &pool.conn,
                "group",
                &format!("{}#{}", project, group_number),
                "Phase metadata created",
            )?;
            success(format!("Created phase {} of {}.", group_number, project));
        }

        Ok(())
    }

    /// Close editing on a project: re-read every sub-phase and restore
    /// canonical numbering. Returns the number of updates applied.
    ///
    /// Updates are applied one record at a time, in emission order. There is
    /// no transaction: a failure partway through leaves the earlier writes in
    /// place and reports the applied/total counts. Re-running the close
    /// completes the numbering, since the plan is idempotent.
    pub fn close(pool: &mut DbPool, project: &str) -> AppResult<usize> {
        let subphases = load_subphases_by_project(pool, project)?;

        if subphases.is_empty() {
            return Err(AppError::NoPhasesForProject(project.to_string()));
        }

        let updates = plan_renumber(&subphases);
        let total = updates.len();

        for (applied, u) in updates.iter().enumerate() {
            update_sub_number(&pool.conn, u.id, u.sub_number).map_err(|source| {
                AppError::Renumber {
                    applied,
                    total,
                    source,
                }
            })?;
        }

        ttlog(
            &pool.conn,
            "close",
            project,
            &format!("Numbering restored ({} update(s))", total),
        )?;

        Ok(total)
    }

    /// Delete every sub-phase of a group, placeholder included.
    /// Returns the number of records removed.
    ///
    /// Deletes run one record at a time; the same partial-failure contract
    /// as `close` applies (stop, report progress, safe to re-run).
    pub fn delete_group(pool: &mut DbPool, project: &str, group_number: i32) -> AppResult<usize> {
        let members = load_subphases_for_group(pool, project, group_number)?;

        if members.is_empty() {
            return Err(AppError::GroupNotFound(project.to_string(), group_number));
        }

        let total = members.len();

        for (deleted, sp) in members.iter().enumerate() {
            delete_subphase(&pool.conn, sp.id).map_err(|source| AppError::GroupDelete {
                deleted,
                total,
                source,
            })?;
        }

        ttlog(
            &pool.conn,
            "del",
            &format!("{}#{}", project, group_number),
            &format!("Phase deleted ({} record(s))", total),
        )?;

        Ok(total)
    }
}
