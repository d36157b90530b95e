/// Storage-layer errors for the key-value byte store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}
