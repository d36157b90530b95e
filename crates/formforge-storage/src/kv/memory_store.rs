//! MemoryKeyValueStore: process-local IKeyValueStore.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use formforge_core::errors::{FormResult, StorageError};
use formforge_core::traits::IKeyValueStore;

/// Key-value store held in memory. Can be switched offline to exercise
/// storage-failure paths.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    unavailable: AtomicBool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `key` → `value`.
    pub fn with_entry(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.into());
        }
        store
    }

    /// While unavailable, every operation fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn entries(&self) -> FormResult<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable {
                reason: "store is offline".to_string(),
            }
            .into());
        }
        self.entries.lock().map_err(|_| {
            StorageError::Unavailable {
                reason: "store lock poisoned".to_string(),
            }
            .into()
        })
    }
}

impl IKeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> FormResult<Option<Vec<u8>>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> FormResult<()> {
        self.entries()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> FormResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
