//! Theme context, the `<body>` class switch, and the header toggle.

use dioxus::prelude::*;
use store::Theme;

use crate::auth::use_repo;

/// The effective theme of the page.
pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Put the theme's class on `<body>` (no-op off the web).
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let classes = body.class_list();
        let result = match theme.body_class() {
            Some(class) => classes.add_1(class),
            None => Theme::Light
                .body_class()
                .map_or(Ok(()), |class| classes.remove_1(class)),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to apply theme: {:?}", e);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(%theme, "theme applied");
    }
}

/// Sun/moon icon that flips the theme for everyone and, when logged in, for
/// the user's settings too.
#[component]
pub fn ThemeToggle() -> Element {
    let repo = use_repo();
    let mut theme = use_theme();

    rsx! {
        span {
            class: "moon-icon",
            title: "Toggle theme",
            onclick: move |_| {
                theme.set(repo.toggle_theme());
            },
            "{theme().toggle_icon()}"
        }
    }
}
