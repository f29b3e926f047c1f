//! Preference store trait definition.
//!
//! The host persists preferences as flat key/value pairs. Every read takes
//! the default to return when the key is unset, so callers never see a
//! "missing" state.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RepositoryError;

/// Key/value persistence for preferences.
///
/// # Design Rules
///
/// - Reads never fail: an unset key, a value of the wrong type, or an
///   unavailable backend all yield `default`
/// - Writes persist immediately; there is no batching or transaction
/// - Keys are independent; no cross-key validation
pub trait PreferenceStore: Send + Sync {
    fn get_string(&self, key: &str, default: &str) -> String;
    fn set_string(&self, key: &str, value: &str) -> Result<(), RepositoryError>;

    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn set_bool(&self, key: &str, value: bool) -> Result<(), RepositoryError>;

    fn get_int(&self, key: &str, default: i64) -> i64;
    fn set_int(&self, key: &str, value: i64) -> Result<(), RepositoryError>;

    /// Remove `key` so subsequent reads return their default.
    fn delete_key(&self, key: &str) -> Result<(), RepositoryError>;
}

/// Typed view over a flat JSON object of preference values.
///
/// Shared by the in-memory store and file-backed stores so both agree on
/// how values are encoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceMap(BTreeMap<String, Value>);

impl PreferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key)?.as_str().map(str::to_string)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key)?.as_bool()
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.0.get(key)?.as_i64()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Remove `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Process-local preference store.
///
/// Used in tests and as the degraded fallback when no persistent backend is
/// available; values last for the lifetime of the store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<PreferenceMap>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything currently stored.
    pub fn snapshot(&self) -> PreferenceMap {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PreferenceMap> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.lock()
            .get_string(key)
            .unwrap_or_else(|| default.to_string())
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.lock().set(key, value);
        Ok(())
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.lock().get_bool(key).unwrap_or(default)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), RepositoryError> {
        self.lock().set(key, value);
        Ok(())
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.lock().get_int(key).unwrap_or(default)
    }

    fn set_int(&self, key: &str, value: i64) -> Result<(), RepositoryError> {
        self.lock().set(key, value);
        Ok(())
    }

    fn delete_key(&self, key: &str) -> Result<(), RepositoryError> {
        self.lock().remove(key);
        Ok(())
    }
}
