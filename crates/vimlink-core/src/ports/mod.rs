//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from the host
//! and the operating system. They contain no implementation details and
//! use only domain types.
//!
//! # Design Rules
//!
//! - No `std::process` types in any signature
//! - Preference access is key/value with caller-supplied defaults
//! - Project regeneration is a single intent-based call

pub mod preference_store;
pub mod process_spawner;
pub mod project_sync;

use thiserror::Error;

pub use preference_store::{MemoryPreferenceStore, PreferenceMap, PreferenceStore};
pub use process_spawner::{ProcessHandle, ProcessSpawner};
pub use project_sync::{NoopProjectSync, ProjectSync};

#[cfg(test)]
pub use process_spawner::MockProcessSpawner;
#[cfg(test)]
pub use project_sync::MockProjectSync;

/// Errors for preference persistence.
///
/// Abstracts away the storage backend (JSON file, host key/value store).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (filesystem, host store, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors for starting or running an external process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The executable does not exist or is not on the search path.
    #[error("Executable not found: {0}")]
    NotFound(String),

    /// The executable exists but may not be run.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Any other failure to start the process.
    #[error("Failed to start: {0}")]
    StartFailed(String),

    /// The process ran but exited unsuccessfully.
    #[error("Process exited with {0}")]
    Exited(String),
}

/// Errors from regenerating auxiliary IDE project files.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No regeneration mechanism is configured.
    #[error("Project file regeneration is not configured")]
    NotConfigured,

    /// The regeneration step failed.
    #[error("Project file regeneration failed: {0}")]
    Failed(String),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, host
/// notifications).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Preference persistence failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The editor could not be launched.
    #[error(transparent)]
    Launch(#[from] crate::services::LaunchError),

    /// Project file regeneration failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
}
