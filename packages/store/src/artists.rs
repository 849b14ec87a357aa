//! # Artist feed
//!
//! The feed is one JSON array under `artists_key`, newest first. New artists
//! are prepended; nothing is ever updated or removed, including entries that
//! [`Artist`] cannot decode.
//!
//! Creating an artist while logged in links it to the user: the id is merged
//! into the per-user blob and written to the users-table row. The session
//! snapshot is not touched.

use crate::error::VibeResult;
use crate::models::{Artist, ArtistDraft, UserDataPatch};
use crate::repo::{current_timestamp_millis, decode_entry, encode_entry, KeyValueStore, Repository};
use crate::seed::seed_artists;

const NEW_PROFILE_IMAGE: &str =
    "https://images.unsplash.com/photo-1520523839897-bd0b52f945a0?auto=format&fit=crop&w=500&q=80";

/// Image given to a new profile that did not bring its own.
pub fn new_profile_image(id: &str) -> String {
    format!("{NEW_PROFILE_IMAGE}&sig={id}")
}

impl<S: KeyValueStore> Repository<S> {
    /// All artists, most recently created first.
    pub fn list_artists(&self) -> Vec<Artist> {
        let key = &self.config().storage.artists_key;
        self.read_json_list(key)
            .into_iter()
            .filter_map(|entry| decode_entry(key, entry))
            .collect()
    }

    fn save_artists(&self, artists: &[Artist]) {
        self.write_json(&self.config().storage.artists_key, &artists);
    }

    /// First artist with this id.
    pub fn get_artist(&self, id: &str) -> Option<Artist> {
        self.list_artists().into_iter().find(|artist| artist.id == id)
    }

    /// Validate `draft`, store it at the head of the feed, and link it to the
    /// logged-in user if there is one.
    pub fn create_artist(&self, draft: ArtistDraft) -> VibeResult<Artist> {
        draft.validate()?;

        let id = current_timestamp_millis().to_string();
        let mut artist = draft.into_artist(id.clone());
        if artist.image.is_none() {
            artist.image = Some(new_profile_image(&id));
        }

        let key = &self.config().storage.artists_key;
        let mut entries = self.read_json_list(key);
        if let Some(entry) = encode_entry(key, &artist) {
            entries.insert(0, entry);
            self.write_json(key, &entries);
        }
        tracing::info!(id = %artist.id, name = %artist.name, "artist created");

        if let Some(user) = self.current_user() {
            self.update_user_data(UserDataPatch::artist_id(id.clone()))?;
            self.link_artist(&user.username, &id);
        }
        Ok(artist)
    }

    /// Write the seed feed if no feed has ever been stored. Returns whether it
    /// did.
    pub fn seed_if_empty(&self) -> bool {
        if self.read_raw(&self.config().storage.artists_key).is_some() {
            return false;
        }
        self.save_artists(&seed_artists());
        tracing::debug!("seeded artist feed");
        true
    }
}
