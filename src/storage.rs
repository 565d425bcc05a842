//! Browser Storage
//!
//! `localStorage` adapter for the session store.

use boscov_core::session::{KeyValueStorage, SessionStore};
use boscov_core::StorageError;

/// Handle to `window.localStorage`; `None` when storage is disabled
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("localStorage unavailable, session will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage.clear().map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Session store over `localStorage`
pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage::local())
}
