//! Named favorite-station lists, one JSON file per list, with the active
//! list tracked in a key-value preference store.

pub mod config;
pub mod error;
pub mod list_file;
pub mod platform;
pub mod prefs;
pub mod station;
pub mod store;

pub use config::Config;
pub use error::{FavoritesError, Result};
pub use prefs::{JsonPrefs, KeyValueStore, MemoryPrefs};
pub use station::FavoriteStation;
pub use store::{is_valid_name, FavoriteListStore, DEFAULT_LIST, KEY_CURRENT_LIST};
