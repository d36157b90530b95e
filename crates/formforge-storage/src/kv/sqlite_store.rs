//! SqliteKeyValueStore: IKeyValueStore over a single `kv_store` table.

use std::path::Path;
use std::time::Duration;

use formforge_core::config::StorageConfig;
use formforge_core::errors::FormResult;
use formforge_core::traits::IKeyValueStore;
use rusqlite::{params, OptionalExtension};

use crate::connection::WriteConnection;
use crate::migrations;
use crate::to_storage_err;

/// Durable key-value store in one SQLite file.
pub struct SqliteKeyValueStore {
    writer: WriteConnection,
}

impl SqliteKeyValueStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> FormResult<Self> {
        Self::open_with_timeout(path, Duration::from_millis(5_000))
    }

    /// Open the file named by the storage config.
    pub fn open_from_config(config: &StorageConfig) -> FormResult<Self> {
        Self::open_with_timeout(
            Path::new(&config.db_path),
            Duration::from_millis(config.busy_timeout_ms),
        )
    }

    fn open_with_timeout(path: &Path, busy_timeout: Duration) -> FormResult<Self> {
        let store = Self {
            writer: WriteConnection::open(path, busy_timeout)?,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> FormResult<Self> {
        let store = Self {
            writer: WriteConnection::open_in_memory()?,
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> FormResult<()> {
        self.writer.with_conn_sync(migrations::run_migrations)
    }

    /// The underlying connection (for maintenance and tests).
    pub fn connection(&self) -> &WriteConnection {
        &self.writer
    }

    /// Number of stored keys.
    pub fn len(&self) -> FormResult<usize> {
        self.writer.with_conn_sync(|conn| {
            conn.query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get::<_, i64>(0))
                .map(|n| n as usize)
                .map_err(|e| to_storage_err(e.to_string()))
        })
    }

    pub fn is_empty(&self) -> FormResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl IKeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> FormResult<Option<Vec<u8>>> {
        self.writer.with_conn_sync(|conn| {
            conn.query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()
            .map_err(|e| to_storage_err(e.to_string()))
        })
    }

    fn set(&self, key: &str, value: &[u8]) -> FormResult<()> {
        self.writer.with_conn_sync(|conn| {
            conn.execute(
                "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                params![key, value],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> FormResult<()> {
        self.writer.with_conn_sync(|conn| {
            conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
                .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(())
        })
    }
}
