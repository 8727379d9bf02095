//! Persistent key-value preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page persists exactly one value, the theme. `PreferenceStore` keeps
//! the storage surface swappable: `BrowserStorage` talks to `localStorage`
//! under `hydrate`, `MemoryStore` backs tests.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::state::theme::Theme;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Unavailable storage reads as empty and drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Read the theme stored under `key`, defaulting to light.
pub fn read_theme(store: &impl PreferenceStore, key: &str) -> Theme {
    Theme::parse(store.get(key).as_deref())
}

pub fn write_theme(store: &impl PreferenceStore, key: &str, theme: Theme) {
    store.set(key, theme.as_str());
}
