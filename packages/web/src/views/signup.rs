//! Signup page view.

use dioxus::prelude::*;
use store::VibeError;
use ui::{refresh_auth, use_auth, use_repo, use_theme, Navbar};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let repo = use_repo();
    let auth = use_auth();
    let theme = use_theme();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // If already logged in, go home
    if auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let u = username().trim().to_string();
        let e = email().trim().to_string();
        let p = password();
        let cp = confirm_password();

        if u.is_empty() || e.is_empty() || p.is_empty() {
            error.set(Some("Please fill out all fields.".to_string()));
            return;
        }
        if !e.contains('@') {
            error.set(Some("Please enter a valid email".to_string()));
            return;
        }
        if p != cp {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        match repo.signup(&u, &p, &e) {
            Ok(()) => {
                refresh_auth(&repo, auth, theme);
                if repo.current_user().is_some() {
                    nav.push(Route::Home {});
                } else {
                    nav.push(Route::Login {});
                }
            }
            Err(VibeError::DuplicateUsername(_)) => {
                error.set(Some("Username already exists".to_string()));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        Navbar {}
        main {
            class: "auth-page",
            h1 { "JOIN US" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_signup,
                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button { r#type: "submit", "SIGN UP" }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
