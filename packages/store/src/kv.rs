//! # Key-value persistence
//!
//! [`KeyValueStore`] is the storage seam for everything the client keeps across
//! page reloads. Keys and values are plain strings, matching the browser's
//! `localStorage` model; typed values go through [`crate::SessionStore`].
//!
//! Implementations: [`crate::MemoryStore`] (tests, fallback),
//! [`crate::FileStore`] (native) and `LocalStore` (web).

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`] backend or the JSON layer above it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
