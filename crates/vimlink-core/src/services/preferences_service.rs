//! Preferences service - typed access over the key/value store.
//!
//! Every getter reads the store on each call; nothing is cached, so a
//! change written by another tool is picked up by the next request.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;

use crate::ports::{PreferenceStore, RepositoryError};
use crate::preferences::{
    DEFAULT_CODE_EXTENSIONS, DEFAULT_SERVER_NAME, PathMode, PreferenceField, Preferences,
    default_editor_path,
};

/// Service for preference operations.
#[derive(Clone)]
pub struct PreferencesService {
    store: Arc<dyn PreferenceStore>,
}

impl PreferencesService {
    /// Create a new preferences service.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Read every field into a snapshot.
    pub fn load(&self) -> Preferences {
        Preferences {
            editor_path: self.editor_path(),
            server_name: self.server_name(),
            force_foreground: self.force_foreground(),
            generate_aux_project: self.generate_aux_project(),
            path_mode: self.path_mode(),
            extra_commands: self.extra_commands(),
            code_extensions: self.code_extensions(),
        }
    }

    pub fn editor_path(&self) -> PathBuf {
        let default = default_editor_path();
        PathBuf::from(
            self.store
                .get_string(PreferenceField::EditorPath.key(), &default.to_string_lossy()),
        )
    }

    pub fn set_editor_path(&self, path: &Path) -> Result<(), RepositoryError> {
        self.store
            .set_string(PreferenceField::EditorPath.key(), &path.to_string_lossy())
    }

    pub fn server_name(&self) -> String {
        self.store
            .get_string(PreferenceField::ServerName.key(), DEFAULT_SERVER_NAME)
    }

    pub fn set_server_name(&self, name: &str) -> Result<(), RepositoryError> {
        self.store.set_string(PreferenceField::ServerName.key(), name)
    }

    pub fn force_foreground(&self) -> bool {
        self.store
            .get_bool(PreferenceField::ForceForeground.key(), false)
    }

    pub fn set_force_foreground(&self, enabled: bool) -> Result<(), RepositoryError> {
        self.store
            .set_bool(PreferenceField::ForceForeground.key(), enabled)
    }

    pub fn generate_aux_project(&self) -> bool {
        self.store
            .get_bool(PreferenceField::GenerateAuxProject.key(), true)
    }

    pub fn set_generate_aux_project(&self, enabled: bool) -> Result<(), RepositoryError> {
        self.store
            .set_bool(PreferenceField::GenerateAuxProject.key(), enabled)
    }

    /// Stored mode; an unknown stored integer falls back to the default.
    pub fn path_mode(&self) -> PathMode {
        let default = PathMode::default();
        let raw = self
            .store
            .get_int(PreferenceField::PathMode.key(), default.as_int());
        PathMode::from_int(raw).unwrap_or_else(|| {
            warn!("Ignoring unknown stored path mode {raw}, using {default:?}");
            default
        })
    }

    pub fn set_path_mode(&self, mode: PathMode) -> Result<(), RepositoryError> {
        self.store
            .set_int(PreferenceField::PathMode.key(), mode.as_int())
    }

    pub fn extra_commands(&self) -> String {
        self.store
            .get_string(PreferenceField::ExtraCommands.key(), "")
    }

    pub fn set_extra_commands(&self, commands: &str) -> Result<(), RepositoryError> {
        self.store
            .set_string(PreferenceField::ExtraCommands.key(), commands)
    }

    pub fn code_extensions(&self) -> String {
        self.store
            .get_string(PreferenceField::CodeExtensions.key(), DEFAULT_CODE_EXTENSIONS)
    }

    /// Store the extension list with surrounding whitespace trimmed.
    pub fn set_code_extensions(&self, extensions: &str) -> Result<(), RepositoryError> {
        self.store
            .set_string(PreferenceField::CodeExtensions.key(), extensions.trim())
    }

    /// Forget the stored value for `field`.
    pub fn reset(&self, field: PreferenceField) -> Result<(), RepositoryError> {
        self.store.delete_key(field.key())
    }

    /// Forget every stored value.
    pub fn reset_all(&self) -> Result<(), RepositoryError> {
        for field in PreferenceField::ALL {
            self.reset(field)?;
        }
        Ok(())
    }
}
