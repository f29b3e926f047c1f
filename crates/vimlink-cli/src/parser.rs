//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Open files in a running GUI Vim from another tool.
///
/// Discovers Vim installations, stores editor preferences, and launches the
/// editor through its remote-server protocol.
#[derive(Parser)]
#[command(name = "vimlink")]
#[command(about = "Open files in a running GUI Vim via its remote-server protocol")]
#[command(version)]
pub struct Cli {
    /// Project root; path augmentation uses `<root>/Assets`
    #[arg(long = "project-root", env = "VIMLINK_PROJECT_ROOT", global = true)]
    pub project_root: Option<PathBuf>,

    /// Preference file to use instead of the default location
    #[arg(long = "prefs-file", env = "VIMLINK_PREFS_FILE", global = true)]
    pub prefs_file: Option<PathBuf>,

    /// Command that regenerates IDE project files
    #[arg(long = "sync-command", env = "VIMLINK_SYNC_COMMAND", global = true)]
    pub sync_command: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{PrefsCommand, SyncCommand};
    use clap::CommandFactory;
    use vimlink_core::PathMode;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "vimlink",
            "--verbose",
            "--project-root",
            "/work/game",
            "discover",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.project_root, Some(PathBuf::from("/work/game")));
        assert!(matches!(cli.command, Some(Commands::Discover)));
    }

    #[test]
    fn test_open_accepts_negative_column() {
        let cli = Cli::parse_from(["vimlink", "open", "Assets/Foo.cs", "--line", "10", "--column", "-1"]);
        match cli.command {
            Some(Commands::Open {
                file,
                line,
                column,
                wait,
            }) => {
                assert_eq!(file, PathBuf::from("Assets/Foo.cs"));
                assert_eq!(line, 10);
                assert_eq!(column, -1);
                assert!(!wait);
            }
            _ => panic!("expected open"),
        }
    }

    #[test]
    fn test_open_defaults() {
        let cli = Cli::parse_from(["vimlink", "open", "Foo.cs", "--wait"]);
        match cli.command {
            Some(Commands::Open {
                line, column, wait, ..
            }) => {
                assert_eq!(line, 0);
                assert_eq!(column, -1);
                assert!(wait);
            }
            _ => panic!("expected open"),
        }
    }

    #[test]
    fn test_prefs_set_parses_typed_values() {
        let cli = Cli::parse_from([
            "vimlink",
            "prefs",
            "set",
            "--path-mode",
            "scripts",
            "--force-foreground",
            "true",
            "--extra-commands",
            "+\"runtime unity.vim\"",
        ]);
        match cli.command {
            Some(Commands::Prefs {
                command:
                    PrefsCommand::Set {
                        path_mode,
                        force_foreground,
                        extra_commands,
                        ..
                    },
            }) => {
                assert_eq!(path_mode, Some(PathMode::ScriptPath));
                assert_eq!(force_foreground, Some(true));
                assert_eq!(extra_commands.as_deref(), Some("+\"runtime unity.vim\""));
            }
            _ => panic!("expected prefs set"),
        }
    }

    #[test]
    fn test_sync_changed_collects_lists() {
        let cli = Cli::parse_from([
            "vimlink",
            "sync",
            "changed",
            "--added",
            "Assets/A.cs",
            "--added",
            "Assets/B.cs",
            "--imported",
            "Assets/C.cs",
        ]);
        match cli.command {
            Some(Commands::Sync {
                command: SyncCommand::Changed { added, imported, moved, .. },
            }) => {
                assert_eq!(added.len(), 2);
                assert_eq!(imported.len(), 1);
                assert!(moved.is_empty());
            }
            _ => panic!("expected sync changed"),
        }
    }
}
