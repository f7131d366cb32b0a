//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStore`
//! - **Native**: filesystem via [`store::FileStore`] under `<data_dir>/batistai/`
//! - **WASM without `web`**: an in-memory store that does not survive reloads

use store::{KeyValueStore, SessionStore};

/// Create the platform-appropriate store for the signed-in user record.
pub fn make_session() -> SessionStore<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("batistai");
        SessionStore::new(store::FileStore::new(base))
    }
}
