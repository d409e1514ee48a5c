use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_subphases_by_project;
use crate::errors::AppResult;
use crate::models::summary::GroupSummary;
use crate::utils::formatting::{gauge_bar, hours2readable};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { project, details } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let subphases = load_subphases_by_project(&mut pool, project)?;

        if subphases.is_empty() {
            println!("No phases for project {}", project);
            return Ok(());
        }

        if *details {
            println!("RECORDS:");
            for sp in &subphases {
                println!(
                    "- id={} {}.{} '{}' | {} → {} | {} h | worker='{}' | budget={:?}",
                    sp.id,
                    sp.group_number,
                    sp.sub_number,
                    sp.label,
                    sp.start_str(),
                    sp.end_str(),
                    sp.duration_hours,
                    sp.worker,
                    sp.budget_hours,
                );
            }
            return Ok(());
        }

        let summary = Core::build_project_summary(project, &subphases);

        for gs in &summary.groups {
            print_group(&summary.project, gs, &cfg.separator_char);
        }
    }

    Ok(())
}

fn print_group(project: &str, gs: &GroupSummary, sep: &str) {
    let title = if gs.group.label.is_empty() {
        format!("Phase {}", gs.group.number)
    } else {
        format!("Phase {} — {}", gs.group.number, gs.group.label)
    };

    println!("\n=== {} · {} ===", project, title);

    let budget_str = match gs.group.budget_hours {
        Some(b) => hours2readable(b),
        None => "--".to_string(),
    };
    println!(
        "Budget: {} | Consumed: {} | {}",
        budget_str,
        hours2readable(gs.consumed),
        gauge_bar(gs.gauge)
    );

    if gs.group.subphases.is_empty() {
        println!("(no sub-phases yet)");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("LABEL", 24),
        Column::new("START", 16),
        Column::new("END", 16),
        Column::new("WORKER", 12),
        Column::new("HOURS", 5),
    ]);

    for sp in &gs.group.subphases {
        table.add_row(vec![
            sp.sub_number.to_string(),
            sp.label.clone(),
            sp.start_str(),
            sp.end_str(),
            if sp.worker.is_empty() {
                "--".to_string()
            } else {
                sp.worker.clone()
            },
            sp.duration_hours.to_string(),
        ]);
    }

    print!("{}", table.render(sep));
}
