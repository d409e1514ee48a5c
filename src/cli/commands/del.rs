use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::group::GroupLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { project, id, group } = cmd {
        //
        // Confirmation prompt
        //
        let prompt = match (id, group) {
            (Some(i), _) => format!(
                "Delete sub-phase {} of {}? This action is irreversible.",
                i, project
            ),
            (None, Some(g)) => format!(
                "Delete phase {} of {} with ALL its sub-phases? This action is irreversible.",
                g, project
            ),
            (None, None) => {
                return Err(AppError::Other(
                    "Nothing to do: specify --id or --group.".into(),
                ));
            }
        };

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;

        match (id, group) {
            (Some(i), _) => {
                DeleteLogic::apply(&mut pool, project, *i)?;
                success(format!("Sub-phase {} of {} has been deleted.", i, project));
            }
            (None, Some(g)) => {
                let removed = GroupLogic::delete_group(&mut pool, project, *g)?;
                success(format!(
                    "Phase {} of {} has been deleted ({} record(s) removed).",
                    g, project, removed
                ));
            }
            (None, None) => unreachable!(),
        }
    }

    Ok(())
}
