//! # formforge-storage
//!
//! Persistence adapter for saved form schemas.
//!
//! The saved collection is one JSON array stored under a fixed key in a
//! key-value byte store. [`SqliteKeyValueStore`] keeps it durable on disk;
//! [`MemoryKeyValueStore`] backs tests and throwaway sessions.
//! [`FormRepository`] turns the raw bytes into schemas and never fails
//! outward: unreadable data loads as an empty collection.

pub mod connection;
pub mod kv;
pub mod migrations;
pub mod pragmas;
pub mod repository;

pub use connection::WriteConnection;
pub use kv::{MemoryKeyValueStore, SqliteKeyValueStore};
pub use repository::FormRepository;

use formforge_core::errors::{FormError, StorageError};

/// Wrap a SQLite failure message.
pub(crate) fn to_storage_err(message: String) -> FormError {
    FormError::Storage(StorageError::Sqlite { message })
}
