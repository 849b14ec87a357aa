//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on native targets so the site
//! keeps its data across restarts. Each key is one file holding the raw value.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── users
//! ├── vibe_5fcurrent_5fuser
//! ├── vibe_5fdb_5falice
//! ├── vibe_41rtists
//! └── vibecollab.toml
//! ```
//!
//! Keys are file-name encoded: lowercase ASCII letters, digits and `-` are
//! kept, every other byte becomes `_` plus two lowercase hex digits. Encoded
//! names never contain uppercase letters or `.`, so they stay distinct on
//! case-insensitive filesystems, never collide with `vibecollab.toml`, and
//! usernames containing `/` or `..` stay inside the base directory.
//!
//! The UI crate uses `dirs::data_dir()` to obtain a platform-appropriate base.
//!
//! I/O errors are logged and otherwise ignored, like the browser backend.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::repo::KeyValueStore;

#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(encode_key(key))
    }

    /// Delete everything under the base directory.
    pub fn clear(&self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-' {
            out.push(byte as char);
        } else {
            let _ = write!(out, "_{byte:02x}");
        }
    }
    out
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!(base = %self.base.display(), error = %e, "cannot create store dir");
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!(key, error = %e, "failed to write value");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "failed to remove value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArtistDraft;
    use crate::repo::Repository;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "vibecollab_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_encode_key() {
        assert_eq!(encode_key("users"), "users");
        assert_eq!(encode_key("vibe_db_a"), "vibe_5fdb_5fa");
        assert_eq!(encode_key("../x"), "_2e_2e_2fx");
        assert_ne!(encode_key("a_2f"), encode_key("a/"));
        assert_eq!(encode_key("vibeArtists"), "vibe_41rtists");
    }

    #[test]
    fn test_keys_differing_in_case_get_distinct_files() {
        let upper = encode_key("vibe_db_Alice");
        let lower = encode_key("vibe_db_alice");
        assert!(!upper.eq_ignore_ascii_case(&lower));
        assert!(!upper.chars().any(|c| c.is_ascii_uppercase()));

        let dir = temp_dir("case");
        let store = FileStore::new(dir.clone());
        store.set("vibe_db_Alice", "upper");
        store.set("vibe_db_alice", "lower");
        assert_eq!(store.get("vibe_db_Alice").as_deref(), Some("upper"));
        assert_eq!(store.get("vibe_db_alice").as_deref(), Some("lower"));
        store.clear();
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let store = FileStore::new(dir.clone());
        let repo = Repository::new(store);
        repo.signup("a", "p", "e@x.com").unwrap();
        repo.login("a", "p").unwrap();
        repo.create_artist(ArtistDraft::new("Z", vec!["v".into()], vec!["s".into()]))
            .unwrap();

        // Re-open from same directory
        let repo2 = Repository::new(FileStore::new(dir.clone()));
        assert_eq!(repo2.current_user().unwrap().username, "a");
        assert_eq!(repo2.list_artists()[0].name, "Z");
        assert!(repo2.get_user_data().unwrap().artist_id.is_some());

        repo2.logout();
        assert!(repo2.current_user().is_none());
        // Removing twice is quiet
        repo2.logout();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_odd_usernames_stay_in_base() {
        let dir = temp_dir("odd");
        let store = FileStore::new(dir.clone());
        store.set("vibe_db_../../etc", "{}");

        let entries: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(store.get("vibe_db_../../etc").as_deref(), Some("{}"));

        store.clear();
        assert!(!dir.exists());
    }
}
