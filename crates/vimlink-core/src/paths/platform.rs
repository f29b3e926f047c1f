//! Platform-specific data directory resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "VIMLINK_DATA_DIR";

const PREFERENCES_FILE: &str = "preferences.json";

/// Get the root directory for vimlink data.
///
/// Resolution order:
/// 1. `VIMLINK_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/vimlink`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    let root = data_dir.join("vimlink");
    ensure_dir(&root)?;
    Ok(root)
}

/// Location of the preference file under the data root.
pub fn preferences_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(PREFERENCES_FILE))
}

fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
