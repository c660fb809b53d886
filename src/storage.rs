//! Local Key-Value Storage
//!
//! Safe JSON persistence over window.localStorage. Every failure is
//! logged and swallowed; callers always get a usable value back.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging::error;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// String-keyed, string-valued storage substrate
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
    fn delete(&self, key: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

/// window.localStorage backend
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "no window".to_string())?
            .local_storage()
            .map_err(|err| format!("{err:?}"))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        self.storage()?.get_item(key).map_err(|err| format!("{err:?}"))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| format!("{err:?}"))
    }

    fn delete(&self, key: &str) -> Result<(), String> {
        self.storage()?.remove_item(key).map_err(|err| format!("{err:?}"))
    }

    fn clear(&self) -> Result<(), String> {
        self.storage()?.clear().map_err(|err| format!("{err:?}"))
    }
}

/// In-memory backend, used by tests and when localStorage is disabled
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// JSON-encoding key-value store over a [`StorageBackend`]
#[derive(Clone)]
pub struct KvStore {
    backend: Rc<dyn StorageBackend>,
}

impl KvStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    /// Decode the stored JSON at `key`, or `default` if absent or undecodable
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.backend.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    error!("Failed to decode localStorage key \"{key}\": {err}");
                    default
                }
            },
            Ok(None) => default,
            Err(err) => {
                error!("Failed to get localStorage key \"{key}\": {err}");
                default
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                error!("Failed to encode localStorage key \"{key}\": {err}");
                return;
            }
        };
        if let Err(err) = self.backend.write(key, &raw) {
            error!("Failed to set localStorage key \"{key}\": {err}");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(err) = self.backend.delete(key) {
            error!("Failed to remove localStorage key \"{key}\": {err}");
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.backend.clear() {
            error!("Failed to clear localStorage: {err}");
        }
    }

    pub fn has(&self, key: &str) -> bool {
        match self.backend.read(key) {
            Ok(value) => value.is_some(),
            Err(err) => {
                error!("Failed to check localStorage key \"{key}\": {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Preferences {
        theme: String,
        page_size: u32,
        tags: Vec<String>,
    }

    #[test]
    fn test_round_trip() {
        let kv = KvStore::in_memory();
        let prefs = Preferences {
            theme: "dark".to_string(),
            page_size: 20,
            tags: vec!["a".to_string(), "b".to_string()],
        };

        kv.set("prefs", &prefs);
        let loaded: Preferences = kv.get(
            "prefs",
            Preferences {
                theme: String::new(),
                page_size: 0,
                tags: Vec::new(),
            },
        );
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_missing_key_returns_default() {
        let kv = KvStore::in_memory();
        let value: Vec<String> = kv.get("nothing-here", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
        assert!(!kv.has("nothing-here"));
    }

    #[test]
    fn test_corrupt_document_returns_default() {
        let backend = MemoryStorage::default();
        backend.write("count", "{not json").unwrap();
        let kv = KvStore::new(Rc::new(backend));

        let value: u32 = kv.get("count", 7);
        assert_eq!(value, 7);
        // the corrupt entry is still there; get never mutates
        assert!(kv.has("count"));
    }

    #[test]
    fn test_remove_and_clear() {
        let kv = KvStore::in_memory();
        kv.set("a", &1u32);
        kv.set("b", &2u32);
        assert!(kv.has("a"));

        kv.remove("a");
        assert!(!kv.has("a"));
        assert!(kv.has("b"));

        kv.clear();
        assert!(!kv.has("b"));
    }
}
