//! Core domain for vimlink.
//!
//! This crate owns everything that is pure: the editor installation and
//! open-request types, the persisted preference record and its defaults,
//! the remote-server argument synthesizer, the code-file filter, and the
//! port traits through which the outside world (preference persistence,
//! process spawning, project-file regeneration) is reached.
//!
//! Concrete adapters live in `vimlink-runtime`; the CLI composes them.
#![deny(unused_crate_dependencies)]

pub mod arguments;
pub mod domain;
pub mod filter;
pub mod paths;
pub mod ports;
pub mod preferences;
pub mod services;

// Re-export commonly used types for convenience
pub use arguments::{ProjectPaths, build_arguments, build_foreground_arguments, path_fragment};
pub use domain::{Installation, OpenRequest};
pub use filter::{is_eligible, parse_extensions};
pub use ports::{
    CoreError, MemoryPreferenceStore, NoopProjectSync, PreferenceMap, PreferenceStore,
    ProcessError, ProcessHandle, ProcessSpawner, ProjectSync, RepositoryError, SyncError,
};
pub use preferences::{
    DEFAULT_CODE_EXTENSIONS, DEFAULT_SERVER_NAME, NoticeLevel, PathMode, PreferenceField,
    PreferenceNotice, PreferenceRow, Preferences, default_editor_path,
};
pub use services::{
    AssetChanges, EditorLauncher, EditorService, LaunchError, LaunchMode, PreferencesService,
    PreferencesView,
};

// Re-export path utilities
pub use paths::{DATA_DIR_ENV, PathError, data_root, preferences_path};

#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tempfile as _;
