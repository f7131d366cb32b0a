//! Typed JSON blob persisted under a single fixed key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::{KeyValueStore, StoreError};

/// Key under which the signed-in user record is kept.
pub const SESSION_USER_KEY: &str = "batistai.user";

/// One serde value stored as JSON under a fixed key of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Session blob stored under [`SESSION_USER_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, SESSION_USER_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and decode the stored value. `Ok(None)` when nothing is stored.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn save<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(&self.key, &raw)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        id: i64,
        email: String,
    }

    #[test]
    fn test_save_then_load_from_fresh_handle() {
        let backing = MemoryStore::new();
        let session = SessionStore::new(backing.clone());
        let profile = Profile {
            id: 7,
            email: "jane@example.com".to_string(),
        };
        session.save(&profile).unwrap();

        // A new handle over the same storage simulates a page reload.
        let reloaded = SessionStore::new(backing);
        assert_eq!(reloaded.load::<Profile>().unwrap(), Some(profile));
    }

    #[test]
    fn test_clear_removes_value() {
        let session = SessionStore::new(MemoryStore::new());
        session.save(&Profile { id: 1, email: "a@b.c".into() }).unwrap();
        session.clear().unwrap();
        assert_eq!(session.load::<Profile>().unwrap(), None);
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let backing = MemoryStore::new();
        backing.set(SESSION_USER_KEY, "not json").unwrap();
        let session = SessionStore::new(backing);
        assert!(matches!(
            session.load::<Profile>(),
            Err(StoreError::Serde(_))
        ));
    }

    #[test]
    fn test_custom_key() {
        let backing = MemoryStore::new();
        let session = SessionStore::with_key(&backing, "other");
        session.save(&1u32).unwrap();
        assert_eq!(session.key(), "other");
        assert_eq!(backing.get("other").unwrap().as_deref(), Some("1"));
        assert_eq!(backing.get(SESSION_USER_KEY).unwrap(), None);
    }
}
