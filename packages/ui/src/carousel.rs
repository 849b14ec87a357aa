//! Hero carousel over the newest profiles, advanced on a fixed timer.

use std::time::Duration;

use dioxus::prelude::*;
use store::FilterMode;

use crate::artist_feed::use_feed_revision;
use crate::auth::use_repo;

const MAX_SLIDES: usize = 5;

#[component]
pub fn Carousel() -> Element {
    let repo = use_repo();
    let revision = use_feed_revision();

    // Subscribe to feed writes
    let _ = revision();
    let slides: Vec<_> = repo
        .feed_view(FilterMode::All)
        .cards
        .into_iter()
        .take(MAX_SLIDES)
        .collect();
    let interval = Duration::from_secs(u64::from(repo.config().ui.carousel_interval_secs.max(1)));

    let len = slides.len();
    let mut carousel = use_signal(|| store::Carousel::new(len));

    // Keep the slide count in step with the feed
    use_effect(use_reactive!(|(len,)| {
        carousel.write().resize(len);
    }));

    // Advance on a fixed interval for the lifetime of the component
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(interval).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(interval).await;

                carousel.write().advance();
            }
        });
    });

    if slides.is_empty() {
        return rsx! {};
    }
    let active = carousel().index() % len;

    rsx! {
        div {
            class: "carousel",
            {slides.iter().enumerate().map(|(index, card)| {
                let class = if index == active { "slide active" } else { "slide" };
                rsx! {
                    div {
                        key: "{index}",
                        class: "{class}",
                        img { src: "{card.image_url}", alt: "{card.name}" }
                        h3 { "{card.name}" }
                    }
                }
            })}
        }
    }
}
