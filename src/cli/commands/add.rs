use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::core::calendar::WorkCalendar;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Add a sub-phase to a project, or edit an existing one.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        project,
        group,
        label,
        start,
        hour,
        duration,
        worker,
        edit_id,
        edit,
    } = cmd
    {
        //
        // 1. Build the working calendar from config
        //
        let calendar = WorkCalendar::from_config(cfg)?;

        //
        // 2. Parse the start date when provided
        //
        let start_parsed: Option<NaiveDate> = match start {
            Some(s) => Some(
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            ),
            None => None,
        };

        //
        // 3. Open DB
        //
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 4. EDIT MODE
        //
        if *edit {
            let id = edit_id
                .ok_or_else(|| AppError::Other("Missing --id when using --edit.".into()))?;

            AddLogic::edit(
                &mut pool,
                &calendar,
                project,
                id,
                label.as_deref(),
                start_parsed,
                *hour,
                *duration,
                worker.as_deref(),
            )?;

            return Ok(());
        }

        //
        // 5. INSERT MODE
        //
        let group_number = group.ok_or_else(|| {
            AppError::InvalidGroup("missing --group (every sub-phase belongs to a phase)".into())
        })?;
        if group_number <= 0 {
            return Err(AppError::InvalidGroup(group_number.to_string()));
        }

        let start_date = start_parsed.ok_or_else(|| {
            AppError::InvalidDate("missing --start (YYYY-MM-DD)".to_string())
        })?;

        let duration_hours = duration.ok_or_else(|| {
            AppError::InvalidDuration("missing --duration (working hours)".to_string())
        })?;

        // Default start hour: the calendar's opening hour
        let start_hour = hour.unwrap_or(calendar.blocks().day_start);

        AddLogic::insert(
            &mut pool,
            &calendar,
            project,
            group_number,
            label.as_deref().unwrap_or(""),
            start_date,
            start_hour,
            duration_hours,
            worker.as_deref().unwrap_or(""),
        )?;
    }

    Ok(())
}
