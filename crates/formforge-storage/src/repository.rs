//! FormRepository: implements IFormRepository over any IKeyValueStore.
//!
//! The whole saved collection is one JSON array under one key and is
//! rewritten in full on every save.

use formforge_core::config::StorageConfig;
use formforge_core::constants::STORAGE_KEY;
use formforge_core::errors::FormResult;
use formforge_core::models::FormSchema;
use formforge_core::traits::{IFormRepository, IKeyValueStore};
use tracing::{debug, warn};

use crate::kv::SqliteKeyValueStore;

/// Reads and writes the saved-schema collection.
pub struct FormRepository<S: IKeyValueStore> {
    store: S,
    key: String,
}

impl<S: IKeyValueStore> FormRepository<S> {
    /// Repository under the default storage key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load, surfacing why the collection could not be read.
    ///
    /// An absent key is an empty collection, not an error.
    pub fn try_load(&self) -> FormResult<Vec<FormSchema>> {
        match self.store.get(&self.key)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    /// Save, surfacing why the collection could not be written.
    pub fn try_save(&self, forms: &[FormSchema]) -> FormResult<()> {
        let bytes = serde_json::to_vec(forms)?;
        self.store.set(&self.key, &bytes)
    }
}

impl FormRepository<SqliteKeyValueStore> {
    /// Open the SQLite-backed repository described by `config`.
    pub fn open(config: &StorageConfig) -> FormResult<Self> {
        let store = SqliteKeyValueStore::open_from_config(config)?;
        Ok(Self::with_key(store, config.storage_key.clone()))
    }
}

impl<S: IKeyValueStore> IFormRepository for FormRepository<S> {
    fn load(&self) -> Vec<FormSchema> {
        match self.try_load() {
            Ok(forms) => {
                debug!(key = %self.key, count = forms.len(), "loaded saved forms");
                forms
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to load saved forms");
                Vec::new()
            }
        }
    }

    fn save(&self, forms: &[FormSchema]) -> bool {
        match self.try_save(forms) {
            Ok(()) => {
                debug!(key = %self.key, count = forms.len(), "saved forms");
                true
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to save forms");
                false
            }
        }
    }

    fn clear(&self) -> bool {
        match self.store.remove(&self.key) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to clear saved forms");
                false
            }
        }
    }
}
