//! Schema migrations, tracked through `PRAGMA user_version`.

mod v001_key_value_table;

use formforge_core::errors::{FormResult, StorageError};
use rusqlite::Connection;
use tracing::info;

use crate::to_storage_err;

type Migration = fn(&Connection) -> FormResult<()>;

const MIGRATIONS: [(u32, Migration); 1] = [(1, v001_key_value_table::migrate)];

/// Latest schema version this build knows.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the database's current version.
pub fn run_migrations(conn: &Connection) -> FormResult<()> {
    let current = current_version(conn)?;
    for (version, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        info!(version, "applied storage migration");
    }
    Ok(())
}

pub fn current_version(conn: &Connection) -> FormResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
