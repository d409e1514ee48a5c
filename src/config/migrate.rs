//! Configuration file migrations. Applied versions are tracked in the
//! database `log` table, like the schema migrations.

use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension};
use serde_yaml::Value;
use std::fs;

/// Migration that adds the `holidays` list to YAML configs written before
/// the working-calendar support, if missing, and marks the migration as
/// applied in the `log` table.
pub fn migrate_add_holidays(conn: &Connection) -> Result<(), Error> {
    let version = "20260109_0003_add_holidays_list";

    // Ensure log table exists (this migration can run before init)
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            operation TEXT NOT NULL,
            target TEXT DEFAULT '',
            message TEXT NOT NULL
        );",
    )?;

    // Check if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    let conf_file = super::Config::config_file();
    let mut changed = false;

    if conf_file.exists() {
        let content = fs::read_to_string(&conf_file).map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to read config {:?}: {}", conf_file, e)),
            )
        })?;

        if let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content)
            && let Some(map) = yaml.as_mapping_mut()
        {
            let key = Value::String("holidays".to_string());

            if !map.contains_key(&key) {
                map.insert(key.clone(), Value::Sequence(Vec::new()));

                // Serialize updated YAML
                let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to serialize updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;

                // Inject documentation comment right after the `holidays` line
                let mut new_content = String::new();

                for line in serialized.lines() {
                    new_content.push_str(line);
                    new_content.push('\n');

                    if line.starts_with("holidays:") {
                        new_content.push_str(
                            "# holidays: explicit non-working dates (YYYY-MM-DD), e.g.\n\
                             #   - 2026-01-01\n\
                             #   - 2026-12-25\n",
                        );
                    }
                }

                fs::write(&conf_file, new_content).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to write updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;

                changed = true;
            }
        }
    }

    // Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added holidays list to config')",
        [version],
    )?;

    if changed {
        success(format!(
            "Migration applied: {} — added holidays list to config.",
            version
        ));
    }

    Ok(())
}
