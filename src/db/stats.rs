use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL SUB-PHASES / PLACEHOLDERS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM phases", [], |row| row.get(0))?;
    let placeholders: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM phases WHERE duration_hours = 0",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Sub-phases:{} {}{}{} ({} group placeholder(s))",
        CYAN, RESET, GREEN, count, RESET, placeholders
    );

    //
    // 3) PROJECTS
    //
    let projects: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT project) FROM phases", [], |row| {
            row.get(0)
        })?;
    println!("{}• Projects:{} {}", CYAN, RESET, projects);

    //
    // 4) SCHEDULE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_date FROM phases WHERE duration_hours > 0 ORDER BY start_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT end_date FROM phases WHERE duration_hours > 0 ORDER BY end_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Schedule range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
