//! Project sync trait definition.
//!
//! The host owns the logic that writes solution/project files for a
//! separate IDE. vimlink only decides *when* to ask for it.

use super::SyncError;

/// Regenerates auxiliary IDE project files.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectSync: Send + Sync {
    fn regenerate_project_files(&self) -> Result<(), SyncError>;
}

/// Sync implementation for hosts without project files.
///
/// Always succeeds without doing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProjectSync;

impl ProjectSync for NoopProjectSync {
    fn regenerate_project_files(&self) -> Result<(), SyncError> {
        Ok(())
    }
}
