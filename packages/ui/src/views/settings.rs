use dioxus::prelude::*;
use store::{Settings, Theme, UserData, UserDataPatch};

use crate::auth::{use_auth, use_repo};
use crate::theme::use_theme;

/// Per-user settings: theme, notification and visibility flags, and the
/// linked artist profile.
#[component]
pub fn SettingsView() -> Element {
    let repo = use_repo();
    let auth = use_auth();

    let load_repo = repo.clone();
    let mut data = use_signal(move || load_repo.get_user_data().ok());

    let Some(user) = auth().user else {
        return rsx! {
            div {
                class: "settings",
                p { "Log in to manage your settings." }
                a { href: "/login", "LOGIN" }
            }
        };
    };
    let Some(current) = data() else {
        return rsx! {
            div { class: "settings", p { "Loading settings..." } }
        };
    };

    let linked = current
        .artist_id
        .as_deref()
        .and_then(|id| repo.get_artist(id))
        .map(|artist| artist.name);

    let save_repo = repo.clone();
    let save_settings = move |settings: Settings| {
        match save_repo.update_user_data(UserDataPatch::settings(settings)) {
            Ok(updated) => data.set(Some(updated)),
            Err(e) => tracing::warn!("Failed to save settings: {}", e),
        }
    };

    let notifications = current.settings.notifications;
    let public_profile = current.settings.public_profile;
    let notify_settings = current.settings.clone();
    let public_settings = current.settings.clone();
    let mut save_notify = save_settings.clone();
    let mut save_public = save_settings;

    rsx! {
        div {
            class: "settings",
            h2 { "Settings for {user.username}" }
            p { class: "view-muted", "{user.email}" }

            h3 { "Theme" }
            ThemeSelector { data }

            h3 { "Preferences" }
            label {
                input {
                    r#type: "checkbox",
                    checked: notifications,
                    onchange: move |_| {
                        save_notify(Settings {
                            notifications: !notifications,
                            ..notify_settings.clone()
                        });
                    },
                }
                " Email notifications"
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: public_profile,
                    onchange: move |_| {
                        save_public(Settings {
                            public_profile: !public_profile,
                            ..public_settings.clone()
                        });
                    },
                }
                " Public profile"
            }

            h3 { "Artist profile" }
            if let Some(name) = linked {
                p { "Linked to {name}" }
            } else {
                p { class: "view-muted", "No profile yet. Create one from the home page." }
            }
        }
    }
}

#[component]
fn ThemeSelector(data: Signal<Option<UserData>>) -> Element {
    let repo = use_repo();
    let mut theme = use_theme();
    let mut data = data;

    let chosen = data().and_then(|d| d.settings.theme);
    let radio_class = |active: bool| {
        if active {
            "theme-card theme-card-active"
        } else {
            "theme-card"
        }
    };

    rsx! {
        div {
            class: "flex gap-3",
            {[Theme::Light, Theme::Dark].into_iter().map(|option| {
                let repo = repo.clone();
                rsx! {
                    label {
                        key: "{option}",
                        class: radio_class(chosen == Some(option)),
                        onclick: move |_| {
                            repo.set_global_theme(option);
                            match repo.set_user_theme(option) {
                                Ok(updated) => data.set(Some(updated)),
                                Err(e) => tracing::warn!("Failed to save theme: {}", e),
                            }
                            theme.set(repo.effective_theme());
                        },
                        span { "{option.toggle_icon()} " }
                        span { if option == Theme::Light { "Light" } else { "Dark" } }
                    }
                }
            })}
        }
        p {
            class: "view-muted mt-2",
            "Until you pick one, VibeCollab follows the site-wide theme."
        }
    }
}
