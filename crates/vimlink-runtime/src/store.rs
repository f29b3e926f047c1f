//! JSON-file preference store.
//!
//! The whole preference set lives in one flat JSON object. Every read goes
//! to disk, so edits made by another process are seen on the next request;
//! every write is a read-modify-write of the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use vimlink_core::{PathError, PreferenceMap, PreferenceStore, RepositoryError, preferences_path};

/// Preference store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// Store preferences at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store preferences in the default location under the data root.
    pub fn open_default() -> Result<Self, PathError> {
        Ok(Self::new(preferences_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file; a missing file is an empty map.
    pub fn read(&self) -> Result<PreferenceMap, RepositoryError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PreferenceMap::new()),
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "{}: {e}",
                    self.path.display()
                )));
            }
        };
        if contents.trim().is_empty() {
            return Ok(PreferenceMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            RepositoryError::Serialization(format!("{}: {e}", self.path.display()))
        })
    }

    fn read_or_default(&self) -> PreferenceMap {
        self.read().unwrap_or_else(|e| {
            warn!("Preferences unavailable, using defaults: {e}");
            PreferenceMap::new()
        })
    }

    fn write(&self, map: &PreferenceMap) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                RepositoryError::Storage(format!("{}: {e}", parent.display()))
            })?;
        }
        let mut json = serde_json::to_string_pretty(map)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        json.push('\n');
        fs::write(&self.path, json)
            .map_err(|e| RepositoryError::Storage(format!("{}: {e}", self.path.display())))
    }

    /// Apply `change` to the current contents and persist the result.
    ///
    /// A file that exists but cannot be parsed is left untouched.
    fn update(&self, change: impl FnOnce(&mut PreferenceMap)) -> Result<(), RepositoryError> {
        let mut map = self.read()?;
        change(&mut map);
        self.write(&map)
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.read_or_default()
            .get_string(key)
            .unwrap_or_else(|| default.to_string())
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.update(|map| map.set(key, value))
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.read_or_default().get_bool(key).unwrap_or(default)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), RepositoryError> {
        self.update(|map| map.set(key, value))
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.read_or_default().get_int(key).unwrap_or(default)
    }

    fn set_int(&self, key: &str, value: i64) -> Result<(), RepositoryError> {
        self.update(|map| map.set(key, value))
    }

    fn delete_key(&self, key: &str) -> Result<(), RepositoryError> {
        let mut map = self.read()?;
        if map.remove(key) {
            self.write(&map)?;
        }
        Ok(())
    }
}
