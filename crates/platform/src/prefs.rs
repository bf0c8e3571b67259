//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for lightweight preference values (one string value per key).
pub trait PrefsStore {
    /// Loads the raw string stored for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the read fails.
    fn load(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the write fails.
    fn save(&self, key: &str, value: &str) -> Result<(), String>;

    /// Deletes a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the delete fails.
    fn delete(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share one backing map, so a test can keep a handle while the store
/// under test owns another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`].
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub fn load_pref_typed<T: DeserializeOwned>(
    store: &dyn PrefsStore,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub fn save_pref_typed<T: Serialize>(
    store: &dyn PrefsStore,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save(key, &raw)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct PrefThing {
        dark: bool,
    }

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save("pref.key", "{\"k\":1}").expect("save");
        assert_eq!(
            store_obj.load("pref.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        store_obj.delete("pref.key").expect("delete");
        assert_eq!(store_obj.load("pref.key").expect("load"), None);
    }

    #[test]
    fn typed_pref_helpers_round_trip() {
        let store = MemoryPrefsStore::default();
        save_pref_typed(&store, "appearance", &PrefThing { dark: true }).expect("save typed pref");

        let loaded: Option<PrefThing> =
            load_pref_typed(&store, "appearance").expect("load typed pref");
        assert_eq!(loaded, Some(PrefThing { dark: true }));
    }

    #[test]
    fn clones_share_one_backing_map() {
        let store = MemoryPrefsStore::default();
        let observer = store.clone();
        store.save("k", "v").expect("save");
        assert_eq!(observer.load("k").expect("load"), Some("v".to_string()));
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load("k").expect("load"), None);
        store_obj.save("k", "{}").expect("save");
        store_obj.delete("k").expect("delete");
    }
}
