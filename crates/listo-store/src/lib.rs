//! Local persistence for listo: one JSON blob holding the whole collection.

pub mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use listo_core::Collection;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Well-known key the collection is stored under.
pub const DEFAULT_KEY: &str = "listo-data";

/// Minimal string key-value store, in the spirit of browser local storage.
pub trait BlobStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns a store-specific error when the value cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    /// Returns a store-specific error when the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: BlobStore + ?Sized> BlobStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Reads and writes the [`Collection`] atomically under a single key.
///
/// [`load`](Self::load) and [`save`](Self::save) never fail: read errors fall
/// back to an empty collection and write errors leave the in-memory state as
/// the source of truth. Both are logged.
#[derive(Debug)]
pub struct CollectionStore<S> {
    backend: S,
    key: String,
}

impl<S: BlobStore> CollectionStore<S> {
    /// Store the collection under [`DEFAULT_KEY`].
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_KEY)
    }

    /// Store the collection under a custom key.
    #[must_use]
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Key the collection is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying blob store.
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the last saved collection. A missing or blank value is an empty collection.
    ///
    /// # Errors
    /// Returns an error if the backend read fails or the stored value does not parse.
    pub fn try_load(&self) -> Result<Collection, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Collection::new());
        };
        if raw.trim().is_empty() {
            return Ok(Collection::new());
        }
        serde_json::from_str(&raw).map_err(StoreError::Parse)
    }

    /// Read the last saved collection, substituting an empty one on any failure.
    #[must_use]
    pub fn load(&self) -> Collection {
        match self.try_load() {
            Ok(collection) => {
                debug!(key = %self.key, lists = collection.len(), "Loaded collection");
                collection
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "Stored collection unreadable, starting empty");
                Collection::new()
            }
        }
    }

    /// Serialize and write the whole collection, replacing the previous value.
    ///
    /// # Errors
    /// Returns an error if serialization or the backend write fails.
    pub fn try_save(&self, collection: &Collection) -> Result<(), StoreError> {
        let body = serde_json::to_string(collection).map_err(StoreError::Serialize)?;
        self.backend.set(&self.key, &body)?;
        debug!(key = %self.key, lists = collection.len(), bytes = body.len(), "Saved collection");
        Ok(())
    }

    /// Write the whole collection, logging instead of propagating failures.
    ///
    /// Returns whether the write succeeded.
    pub fn save(&self, collection: &Collection) -> bool {
        match self.try_save(collection) {
            Ok(()) => true,
            Err(err) => {
                error!(key = %self.key, error = %err, "Failed to save collection; changes kept in memory");
                false
            }
        }
    }
}
