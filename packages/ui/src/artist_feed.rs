//! The artist grid with its filter headline.

use dioxus::prelude::*;
use store::FilterMode;

use crate::auth::use_repo;

/// Bumped whenever the feed is written, so the grid re-reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedRevision(pub u64);

pub fn use_feed_revision() -> Signal<FeedRevision> {
    use_context::<Signal<FeedRevision>>()
}

#[component]
pub fn ArtistFeed() -> Element {
    let repo = use_repo();
    let revision = use_feed_revision();
    let mut filter = use_signal(FilterMode::default);

    // Subscribe to feed writes
    let _ = revision();
    let view = repo.feed_view(filter());

    rsx! {
        section {
            class: "feed",
            h2 { id: "feed-title", "{view.title}" }
            div {
                class: "filter-toggles",
                {FilterMode::ALL.into_iter().map(|mode| {
                    let class = if mode == view.filter { "active" } else { "" };
                    rsx! {
                        span {
                            key: "{mode.active_label()}",
                            class: "{class}",
                            onclick: move |_| filter.set(mode),
                            "{mode.active_label()}"
                        }
                    }
                })}
            }
            div {
                id: "artist-list",
                class: "artist-grid",
                {view.cards.iter().enumerate().map(|(index, card)| rsx! {
                    div {
                        key: "{index}",
                        class: "artist-card",
                        div {
                            class: "card-image-placeholder",
                            img { src: "{card.image_url}", alt: "{card.name}" }
                        }
                        div {
                            class: "card-details",
                            h3 { "{card.name}" }
                            p { strong { "NEEDS: " } "{card.needs}" }
                            p { strong { "OFFERS: " } "{card.offers}" }
                        }
                    }
                })}
            }
        }
    }
}
