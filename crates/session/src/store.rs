//! Durable token storage

use crate::token::TokenPair;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Storage backend errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}

/// String key/value storage, e.g. browser `localStorage`
pub trait Storage {
    /// Raw value under `key`, `None` when missing or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str);
}

/// In-memory storage; clones share the same map
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Holds at most one [`TokenPair`] under a fixed key
///
/// Unparseable stored data reads as "no session".
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> TokenStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist `tokens`, overwriting the previous pair
    pub fn save(&self, tokens: &TokenPair) {
        let serialized = match serde_json::to_string(tokens) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize token pair");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &serialized) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist token pair");
        }
    }

    /// Last saved pair, or `None` when absent or malformed
    pub fn load(&self) -> Option<TokenPair> {
        let stored = self.storage.get(&self.key)?;
        match serde_json::from_str(&stored) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring malformed stored token pair");
                None
            }
        }
    }

    pub fn clear(&self) {
        self.storage.remove(&self.key);
    }
}
