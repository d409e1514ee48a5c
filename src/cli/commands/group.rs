use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::WorkCalendar;
use crate::core::group::GroupLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Create or update a phase group's metadata (name + hour budget).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Group {
        project,
        group,
        label,
        budget,
    } = cmd
    {
        if *group <= 0 {
            return Err(AppError::InvalidGroup(group.to_string()));
        }

        if let Some(b) = budget
            && *b < 0
        {
            return Err(AppError::InvalidDuration(format!(
                "{} (a budget cannot be negative)",
                b
            )));
        }

        let calendar = WorkCalendar::from_config(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        GroupLogic::upsert_metadata(
            &mut pool,
            calendar.blocks(),
            project,
            *group,
            label.as_deref(),
            *budget,
        )?;
    }

    Ok(())
}
