use dioxus::prelude::*;
use store::{NavItem, NavLinks};

use crate::auth::{refresh_auth, use_auth, use_repo};
use crate::theme::{use_theme, ThemeToggle};

/// Site header: logo, session-aware links, theme toggle.
#[component]
pub fn Navbar() -> Element {
    let repo = use_repo();
    let auth = use_auth();
    let theme = use_theme();
    let links = NavLinks::for_session(auth().user.as_ref());

    rsx! {
        nav {
            class: "navbar",
            a { class: "logo", href: "/", "VIBECOLLAB" }
            div {
                id: "auth-links",
                {links.0.into_iter().map(|item| match item {
                    NavItem::Link { label, href } => rsx! {
                        a { key: "{label}", href: href, "{label}" }
                    },
                    NavItem::Logout => {
                        let repo = repo.clone();
                        rsx! {
                            a {
                                key: "logout",
                                id: "logout-btn",
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    repo.logout();
                                    refresh_auth(&repo, auth, theme);
                                    #[cfg(target_arch = "wasm32")]
                                    {
                                        if let Some(window) = web_sys::window() {
                                            let _ = window.location().set_href("/");
                                        }
                                    }
                                },
                                "LOGOUT"
                            }
                        }
                    }
                })}
            }
            ThemeToggle {}
        }
    }
}
