use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::group::GroupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Close editing on a project: restore canonical numbering in every group.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Close { project } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let applied = GroupLogic::close(&mut pool, project)?;

        success(format!(
            "Phase numbering restored for {} ({} update(s) applied).",
            project, applied
        ));
    }

    Ok(())
}
