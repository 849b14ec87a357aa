//! # `localStorage` key-value store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It reads and writes the window's `localStorage` through [`web_sys::Storage`].
//!
//! ## Connection management
//!
//! A zero-size handle that looks up `window.localStorage` on every call.
//! `Storage` is not `Send`, and the lookup is a cheap property read.
//!
//! ## Error handling
//!
//! A missing window or storage object (private browsing, sandboxed iframes)
//! degrades to "nothing stored". Write failures such as a full quota are
//! logged and dropped.

use web_sys::Storage;

use crate::repo::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable; value dropped");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, error = ?e, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
