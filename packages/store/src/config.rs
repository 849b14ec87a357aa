//! # Site configuration: `vibecollab.toml`
//!
//! Everything the [`crate::Repository`] needs to know that is not data: the
//! key names it persists under, the signup session policy, and a couple of UI
//! defaults.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! users_key = "users"
//! current_user_key = "vibe_current_user"
//! user_data_prefix = "vibe_db_"
//! artists_key = "vibeArtists"
//! theme_key = "vibe_theme"
//!
//! [session]
//! auto_login_on_signup = false
//!
//! [ui]
//! default_theme = "dark"
//! carousel_interval_secs = 5
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`VibeConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`StorageConfig`] | Key-value namespace layout. |
//! | [`SessionConfig`] | Whether a fresh signup also logs the user in. |
//! | [`UiConfig`] | Fallback theme and carousel tick interval. |
//!
//! Every field has a serde default, so a missing or empty file is equivalent
//! to [`VibeConfig::default`]. A file that fails to parse is logged and
//! replaced by the default as well (see [`VibeConfig::from_toml_or_default`]).
//!
//! ## Where it lives
//!
//! Native builds read `vibecollab.toml` next to the data files. In the
//! browser the same text is kept in `localStorage` under the key
//! `vibecollab.toml` and picked up by [`crate::Repository::open`].

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Top-level configuration stored in `vibecollab.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VibeConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Key names in the local key-value namespace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Map of username to user record.
    #[serde(default = "default_users_key")]
    pub users_key: String,
    /// Session snapshot of the logged-in user.
    #[serde(default = "default_current_user_key")]
    pub current_user_key: String,
    /// Prefix of the per-user data key; the username is appended.
    #[serde(default = "default_user_data_prefix")]
    pub user_data_prefix: String,
    /// Ordered artist feed.
    #[serde(default = "default_artists_key")]
    pub artists_key: String,
    /// Global `"light"` / `"dark"` preference.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_users_key() -> String {
    "users".to_string()
}

fn default_current_user_key() -> String {
    "vibe_current_user".to_string()
}

fn default_user_data_prefix() -> String {
    "vibe_db_".to_string()
}

fn default_artists_key() -> String {
    "vibeArtists".to_string()
}

fn default_theme_key() -> String {
    "vibe_theme".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_key: default_users_key(),
            current_user_key: default_current_user_key(),
            user_data_prefix: default_user_data_prefix(),
            artists_key: default_artists_key(),
            theme_key: default_theme_key(),
        }
    }
}

/// Session policy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Log the user in right after a successful signup.
    #[serde(default)]
    pub auto_login_on_signup: bool,
}

/// UI defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme used when neither the user nor the global key has one.
    #[serde(default)]
    pub default_theme: Theme,
    /// Carousel advance interval in seconds.
    #[serde(default = "default_carousel_interval")]
    pub carousel_interval_secs: u32,
}

fn default_carousel_interval() -> u32 {
    5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::default(),
            carousel_interval_secs: default_carousel_interval(),
        }
    }
}

impl VibeConfig {
    /// Builder method to turn on auto-login after signup.
    pub fn with_auto_login(mut self, enabled: bool) -> Self {
        self.session.auto_login_on_signup = enabled;
        self
    }

    /// Builder method to set the fallback theme.
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.ui.default_theme = theme;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "vibecollab.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse `text` if there is any, falling back to the default config when
    /// it is missing or malformed.
    pub fn from_toml_or_default(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::default();
        };
        Self::from_toml(text).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring malformed {}", Self::filename());
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = VibeConfig::from_toml("").unwrap();
        assert_eq!(config, VibeConfig::default());
        assert_eq!(config.storage.artists_key, "vibeArtists");
        assert_eq!(config.ui.default_theme, Theme::Dark);
        assert!(!config.session.auto_login_on_signup);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = VibeConfig::from_toml(
            r#"
            [storage]
            users_key = "accounts"

            [ui]
            default_theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.users_key, "accounts");
        assert_eq!(config.storage.theme_key, "vibe_theme");
        assert_eq!(config.ui.default_theme, Theme::Light);
        assert_eq!(config.ui.carousel_interval_secs, 5);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(VibeConfig::from_toml("[ui]\ndefault_theme = \"sepia\"").is_err());
    }

    #[test]
    fn test_malformed_or_missing_file_falls_back() {
        assert_eq!(VibeConfig::from_toml_or_default(None), VibeConfig::default());
        assert_eq!(
            VibeConfig::from_toml_or_default(Some("[ui\ndefault_theme = 3")),
            VibeConfig::default()
        );
        let config =
            VibeConfig::from_toml_or_default(Some("[session]\nauto_login_on_signup = true"));
        assert!(config.session.auto_login_on_signup);
    }

    #[test]
    fn test_repository_opens_with_stored_config() {
        use crate::repo::{KeyValueStore, Repository};
        use crate::MemoryStore;

        let store = MemoryStore::new();
        store.set(
            VibeConfig::filename(),
            "[storage]\nartists_key = \"feed\"\n\n[ui]\ncarousel_interval_secs = 9",
        );
        let repo = Repository::open(store);
        assert_eq!(repo.config().storage.artists_key, "feed");
        assert_eq!(repo.config().ui.carousel_interval_secs, 9);

        repo.seed_if_empty();
        assert!(repo.store().get("feed").is_some());
        assert!(repo.store().get("vibeArtists").is_none());

        assert_eq!(Repository::open(MemoryStore::new()).config(), &VibeConfig::default());
    }

    #[test]
    fn test_to_toml_parses_back() {
        let config = VibeConfig::default()
            .with_auto_login(true)
            .with_default_theme(Theme::Light);
        let text = config.to_toml().unwrap();
        assert!(text.contains("auto_login_on_signup = true"));
        assert_eq!(VibeConfig::from_toml(&text).unwrap(), config);
    }
}
