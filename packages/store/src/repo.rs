//! # Repository: typed records over an abstract key-value store
//!
//! [`Repository`] is the single entry point for VibeCollab data. It owns a
//! [`KeyValueStore`] and a [`VibeConfig`], and every operation reads or writes
//! JSON strings through the store under the key names in
//! [`StorageConfig`](crate::config::StorageConfig). The same logic runs against
//! browser `localStorage` ([`crate::LocalStorageStore`]), a directory of files
//! (`FileStore`), or an in-memory map ([`crate::MemoryStore`]) in tests.
//!
//! ## [`KeyValueStore`] trait
//!
//! Three synchronous methods: `get`, `set`, `remove` over string keys and
//! string values. Implementations swallow backend failures (reads yield
//! `None`, writes do nothing) and log them.
//!
//! ## Operations
//!
//! The operations are split by concern across sibling modules, each adding an
//! `impl` block to [`Repository`]:
//!
//! | Module | Methods |
//! |--------|---------|
//! | [`crate::users`] | `signup`, `login`, `logout`, `current_user`, `refresh_session`, `get_user`, `get_user_data`, `update_user_data`, `login_with_google`, `reset_password` |
//! | [`crate::artists`] | `list_artists`, `get_artist`, `create_artist`, `seed_if_empty` |
//! | [`crate::feed`] | `feed_view` |
//! | [`crate::theme`] | `global_theme`, `set_global_theme`, `user_theme`, `set_user_theme`, `effective_theme`, `toggle_theme` |
//!
//! ## Decoding
//!
//! A stored value that fails to parse is treated as absent and logged at
//! `warn`. The next write under that key replaces it.
//!
//! The artist feed and the users table are decoded entry by entry. An entry
//! that does not fit the typed record is skipped on read but kept verbatim
//! when the collection is written back, so one odd record never takes its
//! neighbours with it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::VibeConfig;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// VibeCollab data backed by a KeyValueStore.
#[derive(Clone, Debug)]
pub struct Repository<S: KeyValueStore> {
    store: S,
    config: VibeConfig,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, VibeConfig::default())
    }

    /// Open `store` with the config kept inside it under
    /// [`VibeConfig::filename`], or the default config if there is none.
    pub fn open(store: S) -> Self {
        let text = store.get(VibeConfig::filename());
        let config = VibeConfig::from_toml_or_default(text.as_deref());
        Self::with_config(store, config)
    }

    pub fn with_config(store: S, config: VibeConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &VibeConfig {
        &self.config
    }

    /// The underlying store, for raw access in tests and migrations.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key of the per-user data blob for `username`.
    pub fn user_data_key(&self, username: &str) -> String {
        format!("{}{}", self.config.storage.user_data_prefix, username)
    }

    pub(crate) fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed stored value");
                None
            }
        }
    }

    pub(crate) fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set(key, &raw),
            Err(e) => tracing::warn!(key, error = %e, "failed to encode value"),
        }
    }

    /// Entries of a stored JSON array, undecoded.
    pub(crate) fn read_json_list(&self, key: &str) -> Vec<Value> {
        self.read_json(key).unwrap_or_default()
    }

    /// Entries of a stored JSON object, undecoded.
    pub(crate) fn read_json_map(&self, key: &str) -> Map<String, Value> {
        self.read_json(key).unwrap_or_default()
    }

    pub(crate) fn read_raw(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    pub(crate) fn write_raw(&self, key: &str, value: &str) {
        self.store.set(key, value);
    }

    pub(crate) fn remove_key(&self, key: &str) {
        self.store.remove(key);
    }
}

/// Decode one collection entry, logging and skipping it if it does not fit.
pub(crate) fn decode_entry<T: DeserializeOwned>(key: &str, entry: Value) -> Option<T> {
    match serde_json::from_value(entry) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "skipping undecodable entry");
            None
        }
    }
}

pub(crate) fn encode_entry<T: Serialize>(key: &str, value: &T) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to encode entry");
            None
        }
    }
}

/// Milliseconds since the Unix epoch.
pub(crate) fn current_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
