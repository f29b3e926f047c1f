//! Discovered editor installations.

use std::path::{Path, PathBuf};

/// One usable copy of the external editor found on disk.
///
/// Installations are produced once by discovery and never mutated
/// afterwards. Duplicates (same path reached twice) are tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    /// Display name shown to the user, e.g. `Vim (gvim)`.
    pub name: String,
    /// Absolute path to the editor executable.
    pub path: PathBuf,
}

impl Installation {
    /// Create a new installation entry.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build an installation found by scanning a directory, named after
    /// the executable's file name.
    pub fn from_scanned(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name: format!("Vim ({file_name})"),
            path,
        }
    }

    /// Whether this installation points at `path` (exact comparison).
    pub fn matches_path(&self, path: &Path) -> bool {
        self.path == path
    }
}

impl std::fmt::Display for Installation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}
