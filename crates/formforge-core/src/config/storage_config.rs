use serde::{Deserialize, Serialize};

use super::defaults;

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file backing the key-value store.
    pub db_path: String,
    /// Key under which the saved-schema array is written.
    pub storage_key: String,
    /// SQLite busy timeout (milliseconds).
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_PATH.to_string(),
            storage_key: defaults::default_storage_key(),
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
