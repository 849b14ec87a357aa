use dioxus::prelude::*;
use ui::{ArtistFeed, ArtistForm, Carousel, Navbar};

/// Landing page: carousel, profile form, and the feed.
#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}
        main {
            section {
                class: "hero",
                h1 { "FIND YOUR NEXT COLLAB" }
                Carousel {}
            }
            section {
                class: "create-profile",
                h2 { "Create your profile" }
                ArtistForm {}
            }
            ArtistFeed {}
        }
    }
}
