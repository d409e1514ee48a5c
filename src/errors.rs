//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid hour of day: {0}")]
    InvalidHour(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid group number: {0}")]
    InvalidGroup(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No sub-phases found for project {0}")]
    NoPhasesForProject(String),

    #[error("No phase {1} found for project {0}")]
    GroupNotFound(String, i32),

    #[error("Sub-phase not found: id {0}")]
    SubPhaseNotFound(i32),

    #[error("Sub-phase {0} does not belong to project {1}")]
    ProjectMismatch(i32, String),

    #[error("Cannot edit a group placeholder through 'add': {0}")]
    PlaceholderEdit(String),

    #[error("Working calendar error: {0}")]
    Calendar(String),

    #[error("Renumbering interrupted: {applied}/{total} updates applied ({source})")]
    Renumber {
        applied: usize,
        total: usize,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Group delete interrupted: {deleted}/{total} records removed ({source})")]
    GroupDelete {
        deleted: usize,
        total: usize,
        #[source]
        source: rusqlite::Error,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
