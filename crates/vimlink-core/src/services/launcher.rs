//! Editor launcher - turns an open request into process starts.
//!
//! The primary launch is detached by default: the first invocation of a
//! GUI Vim may become the long-lived editor session and only return when
//! the user quits, so waiting on it would stall the caller indefinitely.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::arguments::{ProjectPaths, build_arguments, build_foreground_arguments};
use crate::domain::OpenRequest;
use crate::ports::{ProcessError, ProcessHandle, ProcessSpawner};
use crate::preferences::Preferences;

/// Whether the primary launch waits for the editor to exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    /// Start the editor and return immediately.
    #[default]
    Detached,
    /// Block until the editor process exits (legacy behaviour).
    WaitForExit,
}

/// Errors that prevent the editor from opening a file.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("could not open file in external editor: {path} not found")]
    ExecutableNotFound { path: PathBuf },

    #[error("could not open file in external editor: permission denied for {path}")]
    PermissionDenied { path: PathBuf },

    #[error("could not open file in external editor: failed to start {path}: {reason}")]
    SpawnFailed { path: PathBuf, reason: String },

    #[error("could not open file in external editor: {path} exited with {status}")]
    EditorExited { path: PathBuf, status: String },

    #[error("could not open file in external editor: unbalanced quotes in arguments for {path}")]
    MalformedArguments { path: PathBuf },
}

impl LaunchError {
    fn from_process(path: &Path, err: ProcessError) -> Self {
        let path = path.to_path_buf();
        match err {
            ProcessError::NotFound(_) => Self::ExecutableNotFound { path },
            ProcessError::PermissionDenied(_) => Self::PermissionDenied { path },
            ProcessError::StartFailed(reason) => Self::SpawnFailed { path, reason },
            ProcessError::Exited(status) => Self::EditorExited { path, status },
        }
    }
}

/// Launches the configured editor for open requests.
#[derive(Clone)]
pub struct EditorLauncher {
    spawner: Arc<dyn ProcessSpawner>,
    mode: LaunchMode,
}

impl EditorLauncher {
    /// Create a detached launcher.
    pub fn new(spawner: Arc<dyn ProcessSpawner>) -> Self {
        Self {
            spawner,
            mode: LaunchMode::Detached,
        }
    }

    /// Set the launch mode for the primary process.
    #[must_use]
    pub fn with_mode(mut self, mode: LaunchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start the editor on `request`.
    ///
    /// When `force_foreground` is set and the launch is detached, a second
    /// helper invocation asks the server to raise itself. That helper is
    /// best-effort: its failure is logged and never fails the launch. A
    /// waited-on editor has already exited, so there is nothing to raise.
    pub fn launch(
        &self,
        request: &OpenRequest,
        prefs: &Preferences,
        project: &ProjectPaths,
    ) -> Result<ProcessHandle, LaunchError> {
        let arguments = build_arguments(
            &request.file_path,
            request.line,
            request.column,
            prefs,
            project,
        );
        debug!(
            "Launching {} {}",
            prefs.editor_path.display(),
            arguments
        );

        let argv = shlex::split(&arguments).ok_or_else(|| LaunchError::MalformedArguments {
            path: prefs.editor_path.clone(),
        })?;
        let result = match self.mode {
            LaunchMode::Detached => self.spawner.spawn_detached(&prefs.editor_path, &argv),
            LaunchMode::WaitForExit => self.spawner.run_to_completion(&prefs.editor_path, &argv),
        };
        let handle = result.map_err(|e| LaunchError::from_process(&prefs.editor_path, e))?;

        if prefs.force_foreground && self.mode == LaunchMode::Detached {
            self.request_foreground(prefs);
        }
        Ok(handle)
    }

    /// Ask the running server to bring its window to the front.
    pub fn request_foreground(&self, prefs: &Preferences) {
        let Some(argv) = shlex::split(&build_foreground_arguments(&prefs.server_name)) else {
            warn!(
                "Foreground request skipped: server name '{}' does not tokenise",
                prefs.server_name
            );
            return;
        };
        if let Err(e) = self.spawner.run_to_completion(&prefs.editor_path, &argv) {
            warn!(
                "Foreground request to server '{}' failed: {}",
                prefs.server_name, e
            );
        }
    }
}
