//! `std::process` implementation of the process spawner port.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;
use vimlink_core::{ProcessError, ProcessHandle, ProcessSpawner};

/// Spawns real OS processes.
///
/// Detached children are not waited on; their lifetime is independent of
/// this process. There is no cancellation or timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl SystemSpawner {
    pub const fn new() -> Self {
        Self
    }

    fn command(program: &Path, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        cmd
    }
}

fn map_spawn_error(program: &Path, err: &io::Error) -> ProcessError {
    let program = program.display().to_string();
    match err.kind() {
        io::ErrorKind::NotFound => ProcessError::NotFound(program),
        io::ErrorKind::PermissionDenied => ProcessError::PermissionDenied(program),
        _ => ProcessError::StartFailed(format!("{program}: {err}")),
    }
}

impl ProcessSpawner for SystemSpawner {
    fn spawn_detached(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<ProcessHandle, ProcessError> {
        let child = Self::command(program, args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| map_spawn_error(program, &e))?;

        let pid = child.id();
        debug!("Started {} (pid {})", program.display(), pid);
        Ok(ProcessHandle::running(pid))
    }

    fn run_to_completion(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<ProcessHandle, ProcessError> {
        let mut child = Self::command(program, args)
            .spawn()
            .map_err(|e| map_spawn_error(program, &e))?;
        let pid = child.id();
        let status = child
            .wait()
            .map_err(|e| ProcessError::StartFailed(format!("{}: {e}", program.display())))?;

        if status.success() {
            Ok(ProcessHandle::exited(Some(pid), status.code()))
        } else {
            Err(ProcessError::Exited(status.to_string()))
        }
    }
}
