//! Error types for the license store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A license with this key already exists.
    #[error("license key already exists: {0}")]
    DuplicateKey(String),

    /// A previous holder of the connection panicked.
    #[error("store connection lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Maps a failed insert to [`StoreError::DuplicateKey`] when SQLite
    /// reports a unique-constraint violation.
    pub(crate) fn from_insert(err: rusqlite::Error, license_key: &str) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Self::DuplicateKey(license_key.to_string())
            }
            _ => Self::Database(err),
        }
    }
}
