// ============================================================================
// STORAGE - key/value port over browser localStorage
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};

/// Minimal key/value storage, shaped like `window.localStorage`
pub trait Storage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

pub fn save_to_storage<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value).map_err(|e| AppError::Serialization(e.to_string()))?;
    storage.set_item(key, &json)
}

/// `Ok(None)` when the key is absent; `Err(Parse)` when it holds garbage
pub fn load_from_storage<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> AppResult<Option<T>> {
    match storage.get_item(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn remove_from_storage(storage: &dyn Storage, key: &str) -> AppResult<()> {
    storage.remove_item(key)
}

/// In-memory storage. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::Storage;
    use crate::error::{AppError, AppResult};

    /// `window.localStorage`
    #[derive(Clone, Copy, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage(&self) -> AppResult<web_sys::Storage> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
                .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
        }
    }

    impl Storage for LocalStorage {
        fn get_item(&self, key: &str) -> AppResult<Option<String>> {
            self.storage()?
                .get_item(key)
                .map_err(|_| AppError::Storage(format!("could not read '{}'", key)))
        }

        fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
            self.storage()?
                .set_item(key, value)
                .map_err(|_| AppError::Storage(format!("could not write '{}'", key)))
        }

        fn remove_item(&self, key: &str) -> AppResult<()> {
            self.storage()?
                .remove_item(key)
                .map_err(|_| AppError::Storage(format!("could not remove '{}'", key)))
        }
    }
}
