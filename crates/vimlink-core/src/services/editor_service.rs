//! Editor service - the facade a host adapter calls into.
//!
//! Owns the discovered installations, the preference service, the launcher,
//! and the project-sync collaborator. The host constructs it once at startup
//! and routes every request through it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::launcher::EditorLauncher;
use super::preferences_service::PreferencesService;
use crate::arguments::{ProjectPaths, build_arguments};
use crate::domain::{Installation, OpenRequest};
use crate::filter;
use crate::ports::{CoreError, PreferenceStore, ProcessHandle, ProjectSync};
use crate::preferences::{PreferenceNotice, PreferenceRow};

/// Asset changes reported by the host since the last sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetChanges {
    pub added: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
    pub moved: Vec<PathBuf>,
    pub moved_from: Vec<PathBuf>,
    pub imported: Vec<PathBuf>,
}

impl AssetChanges {
    /// Whether the changes alter project structure.
    ///
    /// Additions and moves do. Deletions and content-only imports do not;
    /// imports in particular fire many times after every compile.
    pub fn affects_structure(&self) -> bool {
        !self.added.is_empty() || !self.moved.is_empty()
    }
}

/// Everything needed to render a preferences view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesView {
    pub rows: Vec<PreferenceRow>,
    pub notices: Vec<PreferenceNotice>,
}

/// Host-facing entry point.
pub struct EditorService {
    installations: Vec<Installation>,
    preferences: PreferencesService,
    launcher: EditorLauncher,
    sync: Arc<dyn ProjectSync>,
    project: ProjectPaths,
}

impl EditorService {
    /// Create the service from its collaborators.
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        launcher: EditorLauncher,
        sync: Arc<dyn ProjectSync>,
        project: ProjectPaths,
    ) -> Self {
        Self {
            installations: Vec::new(),
            preferences: PreferencesService::new(store),
            launcher,
            sync,
            project,
        }
    }

    /// Attach the installation snapshot produced by discovery.
    #[must_use]
    pub fn with_installations(mut self, installations: Vec<Installation>) -> Self {
        self.installations = installations;
        self
    }

    pub fn installations(&self) -> &[Installation] {
        &self.installations
    }

    pub fn preferences(&self) -> &PreferencesService {
        &self.preferences
    }

    pub const fn project(&self) -> &ProjectPaths {
        &self.project
    }

    /// Record the editor the user picked.
    pub fn set_active_installation(&self, path: &Path) -> Result<(), CoreError> {
        if self.resolve_installation_for_path(path).is_none() {
            warn!(
                "{} is not a discovered installation; storing it anyway",
                path.display()
            );
        }
        self.preferences.set_editor_path(path)?;
        Ok(())
    }

    /// The discovered installation whose path equals `path`, if any.
    pub fn resolve_installation_for_path(&self, path: &Path) -> Option<&Installation> {
        self.installations
            .iter()
            .find(|install| install.matches_path(path))
    }

    /// Current preferences as rows plus any advisory notices.
    pub fn preferences_ui_render(&self) -> PreferencesView {
        let prefs = self.preferences.load();
        PreferencesView {
            rows: prefs.rows(),
            notices: prefs.notices(),
        }
    }

    /// Whether `file_path` passes the configured extension filter.
    pub fn is_eligible(&self, file_path: &Path) -> bool {
        filter::is_eligible(file_path, &self.preferences.code_extensions())
    }

    /// The argument string `open` would pass for this request.
    pub fn arguments_for(&self, file_path: &Path, line: i32, column: i32) -> String {
        let prefs = self.preferences.load();
        build_arguments(file_path, line, column, &prefs, &self.project)
    }

    /// Open `file_path` at `line`/`column` in the external editor.
    ///
    /// Returns `Ok(false)` when the file is not eligible (nothing is
    /// spawned) and an error when the editor could not be started.
    pub fn open(&self, file_path: &Path, line: i32, column: i32) -> Result<bool, CoreError> {
        self.open_request(&OpenRequest::new(file_path, line, column))
            .map(|handle| handle.is_some())
    }

    /// Like [`Self::open`], returning the process handle on success.
    pub fn open_request(&self, request: &OpenRequest) -> Result<Option<ProcessHandle>, CoreError> {
        if !self.is_eligible(&request.file_path) {
            debug!(
                "Not handling {}: extension not in list",
                request.file_path.display()
            );
            return Ok(None);
        }
        let prefs = self.preferences.load();
        let handle = self.launcher.launch(request, &prefs, &self.project)?;
        Ok(Some(handle))
    }

    /// Initial full sync. Returns whether project files were regenerated.
    pub fn resync_all(&self) -> Result<bool, CoreError> {
        if !self.preferences.generate_aux_project() {
            return Ok(false);
        }
        self.sync.regenerate_project_files()?;
        info!("Regenerated project files");
        Ok(true)
    }

    /// Incremental sync after asset changes. Returns whether project files
    /// were regenerated.
    pub fn resync_changed(&self, changes: &AssetChanges) -> Result<bool, CoreError> {
        if !changes.affects_structure() || !self.preferences.generate_aux_project() {
            return Ok(false);
        }
        self.sync.regenerate_project_files()?;
        info!(
            "Regenerated project files for {} new files, {} moved files",
            changes.added.len(),
            changes.moved.len()
        );
        Ok(true)
    }
}
