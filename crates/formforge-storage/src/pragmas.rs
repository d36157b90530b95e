//! PRAGMA configuration applied to file-backed connections.
//!
//! WAL mode, NORMAL sync, foreign_keys ON.

use rusqlite::Connection;

use formforge_core::errors::FormResult;

use crate::to_storage_err;

/// Apply durability pragmas to a connection.
pub fn apply_pragmas(conn: &Connection) -> FormResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
