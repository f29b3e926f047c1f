//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;
use vimlink_core::{PathMode, PreferenceField};

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List editor installations found on this machine
    Discover,
    /// Make an editor executable the active one
    Use {
        /// Path to the editor executable
        path: PathBuf,
    },
    /// Show which discovered installation an executable path belongs to
    Which {
        /// Path to the editor executable
        path: PathBuf,
    },
    /// View or change preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommand,
    },
    /// Open a file in the editor at a line and column
    Open {
        /// File to open
        file: PathBuf,
        /// 1-based line; 0 lets the editor decide
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        line: i32,
        /// 1-based column; 0 or negative keeps the current column
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        column: i32,
        /// Block until the editor exits (legacy behaviour)
        #[arg(long)]
        wait: bool,
    },
    /// Print the editor arguments `open` would use, without launching
    Args {
        /// File to open
        file: PathBuf,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        line: i32,
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        column: i32,
    },
    /// Regenerate IDE project files
    Sync {
        #[command(subcommand)]
        command: SyncCommand,
    },
}

/// Preference command variants.
#[derive(Subcommand)]
pub enum PrefsCommand {
    /// Show all preferences and any warnings
    Show,
    /// Update one or more preferences
    Set {
        /// Editor executable to launch
        #[arg(long)]
        editor_path: Option<PathBuf>,
        /// Name passed to --servername
        #[arg(long)]
        server_name: Option<String>,
        /// Ask the editor to raise its window after opening (true/false)
        #[arg(long)]
        force_foreground: Option<bool>,
        /// Regenerate IDE project files on sync (true/false)
        #[arg(long)]
        generate_project: Option<bool>,
        /// Augment vim's 'path': none, project or scripts
        #[arg(long)]
        path_mode: Option<PathMode>,
        /// Extra +commands placed before the file name
        #[arg(long, allow_hyphen_values = true)]
        extra_commands: Option<String>,
        /// Comma-separated file extensions to open (empty = all files)
        #[arg(long)]
        extensions: Option<String>,
    },
    /// Reset one preference, or all of them, to the default
    Reset {
        /// Preference key to reset (e.g. code_extensions); omit for all
        #[arg(value_parser = parse_field)]
        field: Option<PreferenceField>,
    },
}

/// Sync command variants.
#[derive(Subcommand)]
pub enum SyncCommand {
    /// Full sync, as done when the host starts
    All,
    /// Incremental sync after asset changes
    Changed {
        #[arg(long)]
        added: Vec<PathBuf>,
        #[arg(long)]
        deleted: Vec<PathBuf>,
        #[arg(long)]
        moved: Vec<PathBuf>,
        #[arg(long)]
        moved_from: Vec<PathBuf>,
        #[arg(long)]
        imported: Vec<PathBuf>,
    },
}

fn parse_field(key: &str) -> Result<PreferenceField, String> {
    PreferenceField::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = PreferenceField::ALL.iter().map(|f| f.key()).collect();
        format!("unknown preference '{key}' (expected one of: {})", known.join(", "))
    })
}
