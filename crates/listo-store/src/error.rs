//! Error types for listo store operations.

use thiserror::Error;

/// Errors that can occur while reading or writing the persisted collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key is empty or contains characters unsafe for a file name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Write rejected because the store is full.
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} bytes allowed")]
    QuotaExceeded {
        /// Total bytes the store would hold after the write.
        needed: usize,
        /// Configured capacity in bytes.
        quota: usize,
    },

    /// Stored value is not a valid collection.
    #[error("Failed to parse stored collection: {0}")]
    Parse(#[source] serde_json::Error),

    /// Collection could not be encoded.
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Atomic replace of the data file failed.
    #[error("Failed to replace data file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// A previous writer panicked while holding the store.
    #[error("Storage lock poisoned")]
    LockError,
}
