use crate::config::migrate::migrate_add_holidays;
use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `phases` table exists.
fn phases_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='phases'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `phases` table has a `budget_hours` column.
fn phases_has_budget_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('phases')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "budget_hours" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `phases` table with the modern schema (including `budget_hours`).
fn create_phases_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS phases (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            project        TEXT NOT NULL,
            group_number   INTEGER NOT NULL,
            sub_number     INTEGER NOT NULL DEFAULT 0,
            label          TEXT NOT NULL DEFAULT '',
            start_date     TEXT NOT NULL,
            start_hour     INTEGER NOT NULL,
            duration_hours INTEGER NOT NULL DEFAULT 0,
            end_date       TEXT NOT NULL,
            end_hour       INTEGER NOT NULL,
            worker         TEXT NOT NULL DEFAULT '',
            budget_hours   INTEGER,
            source         TEXT NOT NULL DEFAULT 'cli',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_phases_project_group ON phases(project, group_number);
        CREATE INDEX IF NOT EXISTS idx_phases_project_start ON phases(project, start_date, start_hour);
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-0.4 `phases` table to include the `budget_hours` column.
/// Phase budgets used to live in a side file; since 0.4 they ride on the
/// group placeholder record.
fn migrate_add_budget_column(conn: &Connection) -> Result<(), Error> {
    let version = "20260122_0004_add_budget_hours";

    // 1) Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Run the migration
    conn.execute("ALTER TABLE phases ADD COLUMN budget_hours INTEGER;", [])
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'budget_hours' column: {}", e)),
            )
        })?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added budget_hours to phases')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'budget_hours' to phases table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure phases table exists, with indexes
    if !phases_table_exists(conn)? {
        create_phases_table(conn)?;
        success("Created phases table (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_phases_project_group ON phases(project, group_number);
            CREATE INDEX IF NOT EXISTS idx_phases_project_start ON phases(project, start_date, start_hour);
            "#,
        )?;

        if !phases_has_budget_column(conn)? {
            migrate_add_budget_column(conn)?;
        }
    }

    // 3) Config-side migrations (tracked in the same log table)
    migrate_add_holidays(conn)?;

    Ok(())
}
