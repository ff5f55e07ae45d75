//! Browser `localStorage` backend

use linkup_session::{Storage, StorageError};

/// Token storage backed by `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::local_storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!(key, error = ?e, "Failed to remove localStorage entry");
        }
    }
}
