//! Login page view with username/password form, mock Google sign-in, and a
//! password reset request.

use dioxus::prelude::*;
use ui::{refresh_auth, use_auth, use_repo, use_theme, Navbar};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let repo = use_repo();
    let auth = use_auth();
    let theme = use_theme();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut reset_email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    // If already logged in, go home
    if auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    let login_repo = repo.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let u = username().trim().to_string();
        let p = password();
        if u.is_empty() || p.is_empty() {
            error.set(Some("Please fill out all fields.".to_string()));
            return;
        }

        match login_repo.login(&u, &p) {
            Ok(_) => {
                refresh_auth(&login_repo, auth, theme);
                nav.push(Route::Home {});
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let google_repo = repo.clone();
    let handle_google = move |_: MouseEvent| {
        let user = google_repo.login_with_google();
        tracing::info!("Signed in as {}", user.username);
        refresh_auth(&google_repo, auth, theme);
        nav.push(Route::Home {});
    };

    let reset_repo = repo.clone();
    let handle_reset = move |evt: FormEvent| {
        evt.prevent_default();
        let email = reset_email().trim().to_string();
        if email.is_empty() {
            error.set(Some("Enter your email to reset your password.".to_string()));
            return;
        }
        notice.set(Some(reset_repo.reset_password(&email)));
    };

    rsx! {
        Navbar {}
        main {
            class: "auth-page",
            h1 { "LOGIN" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }
            if let Some(msg) = notice() {
                div { class: "form-notice", "{msg}" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_login,
                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button { r#type: "submit", "LOGIN" }
            }

            button {
                class: "google-btn",
                onclick: handle_google,
                "Continue with Google"
            }

            form {
                class: "auth-form reset-form",
                onsubmit: handle_reset,
                input {
                    r#type: "email",
                    placeholder: "Email for password reset",
                    value: reset_email(),
                    oninput: move |evt: FormEvent| reset_email.set(evt.value()),
                }
                button { r#type: "submit", "RESET PASSWORD" }
            }

            p {
                "No account yet? "
                Link { to: Route::Signup {}, "Join us" }
            }
        }
    }
}
