//! This crate contains all shared UI for the workspace.

mod repo;
pub use repo::{make_repo, PlatformStore, VibeRepo};

pub mod views;

mod auth;
pub use auth::{refresh_auth, use_auth, use_repo, AuthProvider, AuthState};

mod theme;
pub use theme::{apply_theme, use_theme, ThemeSignal, ThemeToggle};

mod navbar;
pub use navbar::Navbar;

mod artist_feed;
pub use artist_feed::{use_feed_revision, ArtistFeed, FeedRevision};

mod artist_form;
pub use artist_form::ArtistForm;

mod carousel;
pub use carousel::Carousel;
