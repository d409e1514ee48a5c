use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_subphase, load_subphase_by_id};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single sub-phase by id (group deletion lives in GroupLogic).
    pub fn apply(pool: &mut DbPool, project: &str, id: i32) -> AppResult<()> {
        let sp = load_subphase_by_id(&pool.conn, id)?.ok_or(AppError::SubPhaseNotFound(id))?;

        if sp.project != project {
            return Err(AppError::ProjectMismatch(id, project.to_string()));
        }

        delete_subphase(&pool.conn, id)?;

        ttlog(
            &pool.conn,
            "del",
            &format!("{}#{}", project, id),
            "Sub-phase deleted",
        )?;

        info(format!(
            "Deleted sub-phase {} ({}.{}) of {}",
            id, sp.group_number, sp.sub_number, project
        ));
        Ok(())
    }
}
