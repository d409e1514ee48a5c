use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPhaseTracker
/// CLI application to plan project phases with SQLite
#[derive(Parser)]
#[command(
    name = "rphasetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple phase planning CLI: schedule sub-phases on a working-hours calendar and track phase budgets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a sub-phase to a project, or edit an existing one
    Add {
        /// Project code (e.g. SITE-042)
        project: String,

        /// Phase group number the sub-phase belongs to
        #[arg(long = "group", help = "Phase group number (positive integer)")]
        group: Option<i32>,

        /// Sub-phase label
        #[arg(long = "label", help = "Sub-phase label")]
        label: Option<String>,

        /// Requested start date (YYYY-MM-DD)
        #[arg(long = "start", help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        /// Requested start hour of day
        #[arg(long = "hour", help = "Start hour of day, 0-23 (default: opening hour)")]
        hour: Option<u32>,

        /// Duration in working hours
        #[arg(long = "duration", help = "Duration in working hours (> 0)")]
        duration: Option<i32>,

        /// Assigned worker
        #[arg(long = "worker", help = "Assigned worker (lookup only)")]
        worker: Option<String>,

        /// Sub-phase id to edit (used with --edit)
        #[arg(long = "id", help = "Sub-phase id to edit (used with --edit)")]
        edit_id: Option<i32>,

        /// Enable edit mode (requires --id)
        #[arg(
            long = "edit",
            requires = "edit_id",
            help = "Edit an existing sub-phase instead of creating a new one"
        )]
        edit: bool,
    },

    /// Create or update a phase group's name and hour budget
    Group {
        /// Project code
        project: String,

        #[arg(long = "group", help = "Phase group number (positive integer)")]
        group: i32,

        #[arg(long = "label", help = "Phase display name")]
        label: Option<String>,

        #[arg(long = "budget", help = "Allocated hour budget for the phase")]
        budget: Option<i32>,
    },

    /// Close editing on a project: restore chronological, gap-free numbering
    Close {
        /// Project code
        project: String,
    },

    /// Delete a sub-phase by id, or a whole phase group
    Del {
        /// Project code
        project: String,

        #[arg(long = "id", conflicts_with = "group", help = "Sub-phase id to delete")]
        id: Option<i32>,

        #[arg(
            long = "group",
            help = "Delete every sub-phase of this phase group, placeholder included"
        )]
        group: Option<i32>,
    },

    /// List a project's phases with budget gauges
    List {
        /// Project code
        project: String,

        #[arg(long = "details", help = "Show raw sub-phase records (debug view)")]
        details: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export phase data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Limit the export to one project")]
        project: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
