use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use std::process::Command;

/// Fields every complete configuration file carries.
const EXPECTED_KEYS: [&str; 7] = [
    "database",
    "day_start",
    "lunch_start",
    "lunch_end",
    "day_end",
    "holidays",
    "separator_char",
];

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        // Path of the configuration file
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg)
                    .map_err(|e| crate::errors::AppError::Config(e.to_string()))?
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config(&path)?;
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            let conn = rusqlite::Connection::open(&cfg.database)?;
            crate::config::migrate::migrate_add_holidays(&conn)?;
            println!("✅ Configuration migrations completed.");
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            // User-requested editor (e.g. --editor vim)
            let requested_editor = editor.clone();

            // Platform default editor
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            // First attempt: requested editor
            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    // Fallback
                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using fallback '{}'",
                                default_editor
                            );
                        }
                        Ok(_) | Err(_) => {
                            eprintln!(
                                "❌ Failed to edit configuration file using fallback '{}'",
                                default_editor
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Report which expected keys are present in the config file.
fn check_config(path: &std::path::Path) -> AppResult<()> {
    if !path.exists() {
        println!("⚠️  No configuration file at {} (defaults in use).", path.display());
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|e| crate::errors::AppError::Config(e.to_string()))?;

    println!("🔍 Checking {}:", path.display());

    let mut missing = 0;
    for key in EXPECTED_KEYS {
        if yaml.get(key).is_some() {
            println!("  ✅ {}", key);
        } else {
            println!("  ⚠️  {} (missing, default applies)", key);
            missing += 1;
        }
    }

    if missing == 0 {
        println!("✅ Configuration file is complete.");
    } else {
        println!(
            "⚠️  {} field(s) missing — run 'config --migrate' to update the file.",
            missing
        );
    }

    Ok(())
}
