pub mod artists;
pub mod carousel;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod nav;
pub mod repo;
pub mod seed;
pub mod theme;
pub mod users;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use carousel::Carousel;
pub use config::VibeConfig;
pub use error::{VibeError, VibeResult};
pub use feed::{ArtistCard, FeedView, FilterMode};
pub use models::{Artist, ArtistDraft, Settings, User, UserData, UserDataPatch};
pub use nav::{NavItem, NavLinks};
pub use repo::{KeyValueStore, Repository};
pub use theme::Theme;
