//! "Create profile" form. Lists are typed comma-separated.

use dioxus::prelude::*;
use store::ArtistDraft;

use crate::artist_feed::use_feed_revision;
use crate::auth::use_repo;

#[component]
pub fn ArtistForm() -> Element {
    let repo = use_repo();
    let mut revision = use_feed_revision();
    let mut name = use_signal(String::new);
    let mut wants = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let draft = ArtistDraft::from_form(&name(), &wants(), &skills());
        match repo.create_artist(draft) {
            Ok(artist) => {
                tracing::info!("Created profile {} ({})", artist.name, artist.id);
                name.set(String::new());
                wants.set(String::new());
                skills.set(String::new());
                revision.write().0 += 1;
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        form {
            id: "artist-form",
            class: "artist-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            input {
                r#type: "text",
                name: "name",
                placeholder: "Artist name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                r#type: "text",
                name: "wants",
                placeholder: "Looking for (comma separated)",
                value: wants(),
                oninput: move |evt: FormEvent| wants.set(evt.value()),
            }
            input {
                r#type: "text",
                name: "skills",
                placeholder: "Offering (comma separated)",
                value: skills(),
                oninput: move |evt: FormEvent| skills.set(evt.value()),
            }
            button { r#type: "submit", "CREATE PROFILE" }
        }
    }
}
