//! Light/dark theme preference.
//!
//! Resolution order for [`Repository::effective_theme`]: the logged-in user's
//! `settings.theme`, then the global theme key, then
//! [`UiConfig::default_theme`](crate::config::UiConfig::default_theme).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VibeResult;
use crate::models::{UserData, UserDataPatch};
use crate::repo::{KeyValueStore, Repository};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: it shows where a click takes you.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    /// Class set on `<body>`; dark is the unstyled base.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("light-mode"),
            Theme::Dark => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

impl<S: KeyValueStore> Repository<S> {
    /// The stored global preference, if any.
    pub fn global_theme(&self) -> Option<Theme> {
        let raw = self.read_raw(&self.config().storage.theme_key)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored global theme");
                None
            }
        }
    }

    pub fn set_global_theme(&self, theme: Theme) {
        self.write_raw(&self.config().storage.theme_key, theme.as_str());
    }

    /// The logged-in user's explicit preference, if any.
    pub fn user_theme(&self) -> Option<Theme> {
        self.get_user_data().ok()?.settings.theme
    }

    pub fn set_user_theme(&self, theme: Theme) -> VibeResult<UserData> {
        let mut settings = self.get_user_data()?.settings;
        settings.theme = Some(theme);
        self.update_user_data(UserDataPatch::settings(settings))
    }

    pub fn effective_theme(&self) -> Theme {
        self.user_theme()
            .or_else(|| self.global_theme())
            .unwrap_or(self.config().ui.default_theme)
    }

    /// Flip the effective theme, writing it globally and, when logged in, to
    /// the user's settings. Returns the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let theme = self.effective_theme().toggled();
        self.set_global_theme(theme);
        if self.current_user().is_some() {
            if let Err(e) = self.set_user_theme(theme) {
                tracing::warn!(error = %e, "could not save theme to user settings");
            }
        }
        tracing::debug!(%theme, "theme toggled");
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VibeConfig;
    use crate::MemoryStore;

    fn logged_in_repo() -> Repository<MemoryStore> {
        let repo = Repository::new(MemoryStore::new());
        repo.signup("a", "p", "e@x.com").unwrap();
        repo.login("a", "p").unwrap();
        repo
    }

    #[test]
    fn test_default_theme_is_dark() {
        let repo = Repository::new(MemoryStore::new());
        assert_eq!(repo.effective_theme(), Theme::Dark);
        assert!(repo.global_theme().is_none());
    }

    #[test]
    fn test_configured_default_applies() {
        let config = VibeConfig::default().with_default_theme(Theme::Light);
        let repo = Repository::with_config(MemoryStore::new(), config);
        assert_eq!(repo.effective_theme(), Theme::Light);
    }

    #[test]
    fn test_user_theme_overrides_global_until_logout() {
        let repo = logged_in_repo();
        repo.set_global_theme(Theme::Dark);
        repo.set_user_theme(Theme::Light).unwrap();
        assert_eq!(repo.effective_theme(), Theme::Light);

        repo.logout();
        assert_eq!(repo.effective_theme(), Theme::Dark);
    }

    #[test]
    fn test_unset_user_theme_follows_global() {
        let repo = logged_in_repo();
        repo.set_global_theme(Theme::Light);
        assert!(repo.user_theme().is_none());
        assert_eq!(repo.effective_theme(), Theme::Light);
    }

    #[test]
    fn test_set_user_theme_requires_session() {
        let repo = Repository::new(MemoryStore::new());
        assert_eq!(
            repo.set_user_theme(Theme::Light),
            Err(crate::VibeError::NotLoggedIn)
        );
    }

    #[test]
    fn test_toggle_writes_global_and_user() {
        let repo = logged_in_repo();
        assert_eq!(repo.toggle_theme(), Theme::Light);
        assert_eq!(repo.global_theme(), Some(Theme::Light));
        assert_eq!(repo.user_theme(), Some(Theme::Light));

        // Other settings survive the write
        let data = repo.get_user_data().unwrap();
        assert!(data.settings.notifications);

        assert_eq!(repo.toggle_theme(), Theme::Dark);
        assert_eq!(repo.global_theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_toggle_logged_out_only_touches_global() {
        let repo = Repository::new(MemoryStore::new());
        assert_eq!(repo.toggle_theme(), Theme::Light);
        assert_eq!(repo.global_theme(), Some(Theme::Light));
    }

    #[test]
    fn test_garbage_global_theme_is_ignored() {
        let store = MemoryStore::new();
        store.set("vibe_theme", "sepia");
        let repo = Repository::new(store);
        assert!(repo.global_theme().is_none());
        assert_eq!(repo.effective_theme(), Theme::Dark);
    }

    #[test]
    fn test_icons_and_classes() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀");
        assert_eq!(Theme::Light.toggle_icon(), "☾");
        assert_eq!(Theme::Light.body_class(), Some("light-mode"));
        assert_eq!(Theme::Dark.body_class(), None);
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    }
}
