//! The single SQLite connection, serialised behind a mutex.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use formforge_core::errors::{FormResult, StorageError};
use rusqlite::Connection;

use crate::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Owns the connection every read and write goes through.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open (or create) a database file.
    pub fn open(path: &Path, busy_timeout: Duration) -> FormResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        conn.busy_timeout(busy_timeout)
            .map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> FormResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> FormResult<T>
    where
        F: FnOnce(&Connection) -> FormResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::Unavailable {
            reason: "connection lock poisoned".to_string(),
        })?;
        f(&guard)
    }
}
