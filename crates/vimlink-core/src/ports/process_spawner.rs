//! Process spawner trait definition.
//!
//! This port starts external programs. It knows nothing about Vim; the
//! launcher service decides what to run and how.

use std::path::Path;

use super::ProcessError;

/// Handle to a process started by a [`ProcessSpawner`].
///
/// Only identifies the process; its lifetime is independent of the handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessHandle {
    /// OS process id, if the platform reports one.
    pub pid: Option<u32>,
    /// Exit code, when the process was waited on.
    pub exit_code: Option<i32>,
}

impl ProcessHandle {
    /// Handle for a process that is still running.
    pub const fn running(pid: u32) -> Self {
        Self {
            pid: Some(pid),
            exit_code: None,
        }
    }

    /// Handle for a process that ran to completion.
    pub const fn exited(pid: Option<u32>, exit_code: Option<i32>) -> Self {
        Self { pid, exit_code }
    }
}

/// Starts external processes.
///
/// # Design Rules
///
/// - Arguments are passed as an already-tokenised argv
/// - No retries: a failed start is reported once
#[cfg_attr(test, mockall::automock)]
pub trait ProcessSpawner: Send + Sync {
    /// Start `program` and return immediately without waiting.
    fn spawn_detached(&self, program: &Path, args: &[String])
    -> Result<ProcessHandle, ProcessError>;

    /// Start `program` and block until it exits.
    ///
    /// A non-zero exit is reported as [`ProcessError::Exited`].
    fn run_to_completion(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<ProcessHandle, ProcessError>;
}
