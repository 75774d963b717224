//! Cache Store Module
//!
//! Process-wide key-value map guarded by a single reader/writer lock.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// == Cache Store ==
/// In-memory key-value storage shared by every request.
///
/// Reads take the lock in shared mode and may run in parallel; writes take it
/// exclusively. All keys share one lock. Values handed out are owned copies.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: RwLock<HashMap<String, String>>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Size limits are the caller's concern; the store accepts any string.
    pub fn set(&self, key: String, value: String) {
        self.write().insert(key, value);
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panicking holder cannot leave a half-applied insert behind, so a
    // poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
