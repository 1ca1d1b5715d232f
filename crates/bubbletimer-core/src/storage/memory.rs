//! In-memory storage doubles.

use std::collections::HashMap;
use std::sync::Mutex;

use super::Storage;
use crate::error::StorageError;

/// HashMap-backed [`Storage`] with no durability. Used by tests and by any
/// embedder that wants a throwaway history.
#[derive(Default)]
pub struct MemoryStorage {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. a history blob for load tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        let _ = storage.set(key, value);
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .map
            .lock()
            .map_err(|_| StorageError::QueryFailed("poisoned lock".into()))?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map
            .lock()
            .map_err(|_| StorageError::QueryFailed("poisoned lock".into()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.map
            .lock()
            .map_err(|_| StorageError::QueryFailed("poisoned lock".into()))?
            .remove(key);
        Ok(())
    }
}

/// Storage that fails every operation. Exercises the fail-soft paths.
#[cfg(test)]
pub struct FailingStorage;

#[cfg(test)]
impl Storage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::QueryFailed("unavailable".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::QueryFailed("unavailable".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::QueryFailed("unavailable".into()))
    }
}
