use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::repo::KeyValueStore;

/// In-memory KeyValueStore for testing and as a native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Values are replaced whole, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArtistDraft;
    use crate::repo::Repository;
    use crate::theme::Theme;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.remove("k");
        assert!(store.get("k").is_none());
        assert!(store.is_empty());

        // Removing a missing key is fine
        store.remove("k");
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("shared", "1");
        assert_eq!(other.get("shared").as_deref(), Some("1"));
    }

    #[test]
    fn test_persisted_layout() {
        let store = MemoryStore::new();
        let repo = Repository::new(store.clone());

        repo.signup("a", "p", "e@x.com").unwrap();
        repo.login("a", "p").unwrap();
        repo.set_global_theme(Theme::Light);
        repo.create_artist(ArtistDraft::new("Z", vec!["v".into()], vec!["s".into()]))
            .unwrap();

        // Every value lives under the documented key
        let users: serde_json::Value =
            serde_json::from_str(&store.get("users").unwrap()).unwrap();
        assert_eq!(users["a"]["password"], "p");
        assert_eq!(users["a"]["email"], "e@x.com");

        let session: serde_json::Value =
            serde_json::from_str(&store.get("vibe_current_user").unwrap()).unwrap();
        assert_eq!(session["username"], "a");
        assert!(session["artistId"].is_null());

        let data: serde_json::Value =
            serde_json::from_str(&store.get("vibe_db_a").unwrap()).unwrap();
        assert_eq!(data["settings"]["notifications"], true);
        assert!(data["artistId"].is_string());

        let artists: serde_json::Value =
            serde_json::from_str(&store.get("vibeArtists").unwrap()).unwrap();
        assert_eq!(artists[0]["name"], "Z");

        // The global theme is a bare string, not a JSON literal
        assert_eq!(store.get("vibe_theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_malformed_value_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("users", "{not json");
        store.set("vibeArtists", "42");
        let repo = Repository::new(store);

        assert!(repo.get_user("a").is_none());
        assert!(repo.list_artists().is_empty());

        // A fresh write replaces the garbage
        repo.signup("a", "p", "e@x.com").unwrap();
        assert!(repo.get_user("a").is_some());
    }
}
