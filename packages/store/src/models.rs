//! # Domain records
//!
//! The typed shapes of everything [`crate::Repository`] persists. JSON field
//! names are camelCase so the stored layout matches what the site has always
//! written to `localStorage`.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A users-table row: username, plaintext password, email, optional linked artist id, join time. The session pointer stores a copy of one of these. |
//! | [`UserData`] | The private per-user blob: [`Settings`], saved artist ids, and the linked artist id. |
//! | [`UserDataPatch`] | A shallow update for [`UserData`]; present fields replace, absent fields keep. |
//! | [`Artist`] | One profile in the public feed, with optional contact/social/location sections and media lists. |
//! | [`ArtistDraft`] | Form input for a new artist, validated before it becomes an [`Artist`]. |
//!
//! Older feed entries sometimes stored `wants`/`skills` as a single
//! comma-separated string or `null`, and the id as a bare number; [`Artist`]
//! accepts those shapes on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{VibeError, VibeResult};
use crate::theme::Theme;

/// A registered user, or the session snapshot of one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    /// Plaintext, compared by exact equality.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub artist_id: Option<String>,
    /// Rows written before join times were recorded read as the Unix epoch.
    #[serde(default)]
    pub joined: DateTime<Utc>,
    /// Set only on mock Google sessions, which have no users-table row.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_google: bool,
}

impl User {
    pub fn new(username: &str, password: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            artist_id: None,
            joined: Utc::now(),
            is_google: false,
        }
    }
}

/// Per-user preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// `None` follows the global theme.
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_true")]
    pub public_profile: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: None,
            notifications: true,
            public_profile: true,
        }
    }
}

/// Private state keyed to one user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub saved_artists: Vec<String>,
    #[serde(default)]
    pub artist_id: Option<String>,
}

impl UserData {
    /// Shallow merge: each field present in `patch` replaces the current one.
    pub fn merge(&mut self, patch: UserDataPatch) {
        if let Some(settings) = patch.settings {
            self.settings = settings;
        }
        if let Some(saved) = patch.saved_artists {
            self.saved_artists = saved;
        }
        if let Some(artist_id) = patch.artist_id {
            self.artist_id = Some(artist_id);
        }
    }
}

/// Partial update for [`UserData`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDataPatch {
    pub settings: Option<Settings>,
    pub saved_artists: Option<Vec<String>>,
    pub artist_id: Option<String>,
}

impl UserDataPatch {
    pub fn settings(settings: Settings) -> Self {
        Self {
            settings: Some(settings),
            ..Self::default()
        }
    }

    pub fn saved_artists(saved: Vec<String>) -> Self {
        Self {
            saved_artists: Some(saved),
            ..Self::default()
        }
    }

    pub fn artist_id(id: impl Into<String>) -> Self {
        Self {
            artist_id: Some(id.into()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundcloud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// An artist profile in the public feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Creation time in milliseconds; not guaranteed unique.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Roles or skills the artist is looking for.
    #[serde(default, deserialize_with = "list_or_csv")]
    pub wants: Vec<String>,
    /// Roles or skills the artist offers.
    #[serde(default, deserialize_with = "list_or_csv")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<String>,
}

fn list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrCsv {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match Option::<ListOrCsv>::deserialize(deserializer)? {
        Some(ListOrCsv::List(items)) => items,
        Some(ListOrCsv::Csv(s)) => split_csv(&s),
        None => Vec::new(),
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Split a comma-separated field, trimming items and dropping empty ones.
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Input for a new [`Artist`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistDraft {
    pub name: String,
    pub wants: Vec<String>,
    pub skills: Vec<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub contact: Option<Contact>,
    pub social: Option<Social>,
    pub location: Option<Location>,
    pub tracks: Vec<String>,
    pub videos: Vec<String>,
}

impl ArtistDraft {
    pub fn new(name: impl Into<String>, wants: Vec<String>, skills: Vec<String>) -> Self {
        Self {
            name: name.into(),
            wants,
            skills,
            ..Self::default()
        }
    }

    /// Build a draft from the raw profile form fields.
    pub fn from_form(name: &str, wants: &str, skills: &str) -> Self {
        Self::new(name.trim(), split_csv(wants), split_csv(skills))
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Name must be non-blank and both lists non-empty.
    pub fn validate(&self) -> VibeResult<()> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.wants.is_empty() {
            missing.push("wants");
        }
        if self.skills.is_empty() {
            missing.push("skills");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(VibeError::ValidationFailed(missing.join(", ")))
        }
    }

    pub(crate) fn into_artist(self, id: String) -> Artist {
        Artist {
            id,
            name: self.name.trim().to_string(),
            wants: self.wants,
            skills: self.skills,
            image: self.image,
            bio: self.bio,
            contact: self.contact,
            social: self.social,
            location: self.location,
            tracks: self.tracks,
            videos: self.videos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_splits_and_trims() {
        let draft = ArtistDraft::from_form("  NEON  ", "Vocals, Bass,, ", " Synth ,Production");
        assert_eq!(draft.name, "NEON");
        assert_eq!(draft.wants, vec!["Vocals", "Bass"]);
        assert_eq!(draft.skills, vec!["Synth", "Production"]);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_names_missing_fields() {
        let draft = ArtistDraft::from_form("   ", "Vocals", " , ");
        assert_eq!(
            draft.validate(),
            Err(VibeError::ValidationFailed("name, skills".to_string()))
        );
    }

    #[test]
    fn test_artist_accepts_csv_lists() {
        let artist: Artist = serde_json::from_str(
            r#"{"id":"1","name":"OLD","wants":"Drums, Keys","skills":["Bass"]}"#,
        )
        .unwrap();
        assert_eq!(artist.wants, vec!["Drums", "Keys"]);
        assert_eq!(artist.skills, vec!["Bass"]);
        assert!(artist.image.is_none());
        assert!(artist.tracks.is_empty());
    }

    #[test]
    fn test_artist_accepts_numeric_id_and_null_lists() {
        let artist: Artist = serde_json::from_str(
            r#"{"id":1700000000000,"name":"OLD","wants":null,"skills":"Mixing"}"#,
        )
        .unwrap();
        assert_eq!(artist.id, "1700000000000");
        assert!(artist.wants.is_empty());
        assert_eq!(artist.skills, vec!["Mixing"]);

        // Written back as a string
        let json = serde_json::to_value(&artist).unwrap();
        assert_eq!(json["id"], "1700000000000");
    }

    #[test]
    fn test_artist_omits_absent_optionals() {
        let artist = ArtistDraft::new("X", vec!["a".into()], vec!["b".into()])
            .into_artist("7".to_string());
        let json = serde_json::to_value(&artist).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("bio"));
        assert!(!obj.contains_key("tracks"));
    }

    #[test]
    fn test_nested_sections_roundtrip_through_json() {
        let raw = r#"{
            "id": "9", "name": "LOC", "wants": ["a"], "skills": ["b"],
            "contact": {"email": "loc@x.com"},
            "social": {"instagram": "@loc"},
            "location": {"city": "Lagos", "country": "NG"},
            "tracks": ["t1"]
        }"#;
        let artist: Artist = serde_json::from_str(raw).unwrap();
        assert_eq!(artist.location.as_ref().unwrap().city.as_deref(), Some("Lagos"));
        assert_eq!(artist.social.as_ref().unwrap().instagram.as_deref(), Some("@loc"));
        assert!(artist.social.as_ref().unwrap().spotify.is_none());

        let back: Artist = serde_json::from_str(&serde_json::to_string(&artist).unwrap()).unwrap();
        assert_eq!(back, artist);
    }

    #[test]
    fn test_user_data_merge_is_shallow() {
        let mut data = UserData {
            saved_artists: vec!["m1".into()],
            ..UserData::default()
        };
        data.merge(UserDataPatch::artist_id("42"));
        assert_eq!(data.artist_id.as_deref(), Some("42"));
        assert_eq!(data.saved_artists, vec!["m1"]);

        data.merge(UserDataPatch::settings(Settings {
            theme: Some(Theme::Light),
            notifications: false,
            public_profile: true,
        }));
        assert_eq!(data.settings.theme, Some(Theme::Light));
        assert!(!data.settings.notifications);
        assert_eq!(data.artist_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_user_json_skips_is_google_when_false() {
        let user = User::new("a", "p", "e@x.com");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("isGoogle").is_none());
        assert!(json["artistId"].is_null());
        assert!(json["joined"].is_string());
    }
}
