//! Key-Value Storage
//!
//! Persistence boundary for the todo feature. The browser implementation wraps
//! `window.localStorage`; `MemoryStore` stands in outside a browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed to write key `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored value is not valid: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// String key-value store with interior mutability, like `localStorage`
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Shared handle used by the components
pub type SharedStore = Rc<dyn KeyValueStore>;

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> StorageResult<Self> {
        // JS imports panic when called off wasm
        if !cfg!(target_arch = "wasm32") {
            return Err(StorageError::Unavailable("not running in a browser".to_string()));
        }
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Fails with QuotaExceededError when the origin is out of space
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Local storage when the browser provides it, memory otherwise
pub fn open_default_store() -> SharedStore {
    match LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("[TODOS] {}; todos will not survive a reload", e);
            Rc::new(MemoryStore::new())
        }
    }
}
