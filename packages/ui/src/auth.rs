//! Session context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`VibeRepo`] of the page and puts it, the
//! session state, the theme, and the feed revision counter into context.

use dioxus::prelude::*;
use store::{Theme, User};

use crate::artist_feed::FeedRevision;
use crate::repo::{make_repo, VibeRepo};
use crate::theme::{apply_theme, ThemeSignal};

/// Who is logged in, as of the last login/logout on this page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The page's repository.
pub fn use_repo() -> VibeRepo {
    use_context::<VibeRepo>()
}

/// Re-read session and theme from the repository after a login or logout.
pub fn refresh_auth(repo: &VibeRepo, mut auth: Signal<AuthState>, mut theme: ThemeSignal) {
    auth.set(AuthState {
        user: repo.current_user(),
    });
    theme.set(repo.effective_theme());
}

/// Provider component that wires the repository into context.
/// Wrap your app with this component.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let repo = use_context_provider(|| {
        let repo = make_repo();
        repo.seed_if_empty();
        repo
    });

    let session_repo = repo.clone();
    use_context_provider(move || {
        Signal::new(AuthState {
            user: session_repo.current_user(),
        })
    });

    let theme_repo = repo.clone();
    let theme: ThemeSignal =
        use_context_provider(move || Signal::new(theme_repo.effective_theme()));

    use_context_provider(|| Signal::new(FeedRevision::default()));

    use_effect(move || {
        let current: Theme = theme();
        apply_theme(current);
    });

    rsx! {
        {children}
    }
}
