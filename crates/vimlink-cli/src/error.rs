//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use std::path::PathBuf;

use thiserror::Error;
use vimlink_core::{CoreError, SyncError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The file is filtered out by the extension list.
    #[error("not handled: {} is not in the configured file extensions", .0.display())]
    Ineligible(PathBuf),

    /// The editor could not be started.
    #[error("{0}")]
    Launch(String),

    /// Preference storage error.
    #[error("Preference storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,   // EX_USAGE
            Self::Ineligible(_) => 65, // EX_DATAERR
            Self::Launch(_) => 71,     // EX_OSERR
            Self::Storage(_) => 74,    // EX_IOERR
            Self::Config(_) => 78,     // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Storage(repo_err.to_string()),
            CoreError::Launch(launch_err) => Self::Launch(launch_err.to_string()),
            CoreError::Sync(SyncError::NotConfigured) => Self::Config(
                "no project sync command configured (use --sync-command or VIMLINK_SYNC_COMMAND)"
                    .to_string(),
            ),
            CoreError::Sync(sync_err) => Self::Core(sync_err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vimlink_core::{LaunchError, RepositoryError};

    #[test]
    fn test_launch_failure_exit_code() {
        let err = CliError::from(CoreError::Launch(LaunchError::ExecutableNotFound {
            path: PathBuf::from("/usr/bin/gvim"),
        }));
        assert_eq!(err.exit_code(), 71);
        assert!(
            err.to_string()
                .starts_with("could not open file in external editor")
        );
    }

    #[test]
    fn test_storage_and_config_exit_codes() {
        let storage = CliError::from(CoreError::Repository(RepositoryError::Storage(
            "disk full".to_string(),
        )));
        assert_eq!(storage.exit_code(), 74);

        let config = CliError::from(CoreError::Sync(SyncError::NotConfigured));
        assert_eq!(config.exit_code(), 78);
    }

    #[test]
    fn test_ineligible_message() {
        let err = CliError::Ineligible(PathBuf::from("Assets/Readme.unknownext"));
        assert_eq!(err.exit_code(), 65);
        assert!(err.to_string().starts_with("not handled"));
    }
}
