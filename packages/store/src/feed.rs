//! # Feed view model
//!
//! [`Repository::feed_view`] turns the stored feed into what the grid shows:
//! a headline, the active filter label, and one [`ArtistCard`] per artist.
//!
//! The filter mode only picks the headline and the highlighted toggle. Every
//! artist is listed in every mode; the "Seeking" and "Offering" views do not
//! look at `wants` or `skills`.

use crate::models::Artist;
use crate::repo::{KeyValueStore, Repository};

const CARD_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?auto=format&fit=crop&w=400&q=80";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    All,
    WantsSeeking,
    SkillsOffering,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [
        FilterMode::All,
        FilterMode::WantsSeeking,
        FilterMode::SkillsOffering,
    ];

    /// Accepts the labels the page has used over time; anything unknown is
    /// [`FilterMode::All`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "wants" | "needs" => FilterMode::WantsSeeking,
            "skills" | "offers" => FilterMode::SkillsOffering,
            _ => FilterMode::All,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FilterMode::All => "Latest Profiles",
            FilterMode::WantsSeeking => "Artists Looking for Talent",
            FilterMode::SkillsOffering => "Artists Offering Skills",
        }
    }

    /// Text of the toggle that is highlighted for this mode.
    pub fn active_label(self) -> &'static str {
        match self {
            FilterMode::All => "ALL",
            FilterMode::WantsSeeking => "SEEKING",
            FilterMode::SkillsOffering => "OFFERING",
        }
    }
}

/// One grid card.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistCard {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// `wants`, comma-joined.
    pub needs: String,
    /// `skills`, comma-joined.
    pub offers: String,
}

impl From<&Artist> for ArtistCard {
    fn from(artist: &Artist) -> Self {
        let image_url = match &artist.image {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("{CARD_FALLBACK_IMAGE}&sig={}", artist.id),
        };
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            image_url,
            needs: artist.wants.join(", "),
            offers: artist.skills.join(", "),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedView {
    pub filter: FilterMode,
    pub title: &'static str,
    pub active_label: &'static str,
    pub cards: Vec<ArtistCard>,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn feed_view(&self, filter: FilterMode) -> FeedView {
        FeedView {
            filter,
            title: filter.title(),
            active_label: filter.active_label(),
            cards: self.list_artists().iter().map(ArtistCard::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArtistDraft;
    use crate::MemoryStore;

    #[test]
    fn test_labels_parse() {
        assert_eq!(FilterMode::from_label("all"), FilterMode::All);
        assert_eq!(FilterMode::from_label("needs"), FilterMode::WantsSeeking);
        assert_eq!(FilterMode::from_label("wants"), FilterMode::WantsSeeking);
        assert_eq!(FilterMode::from_label("offers"), FilterMode::SkillsOffering);
        assert_eq!(FilterMode::from_label("skills"), FilterMode::SkillsOffering);
        assert_eq!(FilterMode::from_label("???"), FilterMode::All);
    }

    #[test]
    fn test_headlines() {
        let repo = Repository::new(MemoryStore::new());
        let view = repo.feed_view(FilterMode::WantsSeeking);
        assert_eq!(view.title, "Artists Looking for Talent");
        assert_eq!(view.active_label, "SEEKING");

        let view = repo.feed_view(FilterMode::SkillsOffering);
        assert_eq!(view.title, "Artists Offering Skills");
        assert_eq!(view.active_label, "OFFERING");

        let view = repo.feed_view(FilterMode::All);
        assert_eq!(view.title, "Latest Profiles");
        assert_eq!(view.active_label, "ALL");
    }

    #[test]
    fn test_filter_does_not_restrict_cards() {
        let repo = Repository::new(MemoryStore::new());
        repo.seed_if_empty();
        repo.create_artist(ArtistDraft::new("ONLY", vec!["Drums".into()], vec!["Bass".into()]))
            .unwrap();

        let all = repo.feed_view(FilterMode::All).cards;
        assert_eq!(all.len(), 7);
        for mode in FilterMode::ALL {
            assert_eq!(repo.feed_view(mode).cards, all);
        }
    }

    #[test]
    fn test_card_joins_lists() {
        let repo = Repository::new(MemoryStore::new());
        repo.seed_if_empty();
        let card = &repo.feed_view(FilterMode::All).cards[0];
        assert_eq!(card.name, "NEON WAVE");
        assert_eq!(card.needs, "Vocals, Bass");
        assert_eq!(card.offers, "Synth, Production");
        assert!(card.image_url.contains("photo-1542596594"));
    }

    #[test]
    fn test_card_image_fallback() {
        let artist: Artist =
            serde_json::from_str(r#"{"id":"77","name":"N","wants":["a"],"skills":["b"]}"#)
                .unwrap();
        let card = ArtistCard::from(&artist);
        assert!(card.image_url.starts_with(CARD_FALLBACK_IMAGE));
        assert!(card.image_url.ends_with("&sig=77"));

        let blank = Artist {
            image: Some(String::new()),
            ..artist
        };
        assert!(ArtistCard::from(&blank).image_url.ends_with("&sig=77"));
    }
}
