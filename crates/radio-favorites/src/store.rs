//! Named favorites lists.
//!
//! Each list is a `<name>.json` file in one directory. The name of the list
//! the user is working with lives in a [`KeyValueStore`] under
//! [`KEY_CURRENT_LIST`]; its stations are kept in memory once loaded and
//! written back only on [`FavoriteListStore::save`].

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{FavoritesError, Result};
use crate::list_file;
use crate::prefs::{JsonPrefs, KeyValueStore};
use crate::station::FavoriteStation;

/// Preference key holding the current list name.
pub const KEY_CURRENT_LIST: &str = "favorites_list_current";

/// The list that always exists and cannot be removed.
pub const DEFAULT_LIST: &str = "default";

const JSON_EXT: &str = ".json";

fn name_pattern() -> &'static Regex {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("list name pattern is valid"))
}

/// True if `name` can be used as a list name (`[A-Za-z0-9_-]+`).
pub fn is_valid_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

pub struct FavoriteListStore<P: KeyValueStore> {
    dir: PathBuf,
    prefs: P,
    /// Stations of the current list; `None` until first loaded.
    stations: Option<Vec<FavoriteStation>>,
}

impl FavoriteListStore<JsonPrefs> {
    /// Store rooted at the configured favorites dir, with file-backed prefs.
    pub fn from_config(config: &Config) -> Result<Self> {
        let prefs = JsonPrefs::open(&config.paths.prefs_file);
        Self::open(config.favorites_dir(), prefs)
    }
}

impl<P: KeyValueStore> FavoriteListStore<P> {
    /// Open the store in `dir`, creating the directory and an empty
    /// default list if they are missing.
    pub fn open(dir: impl Into<PathBuf>, prefs: P) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;

        let store = Self {
            dir,
            prefs,
            stations: None,
        };
        if !store.exists(DEFAULT_LIST) {
            info!("[favorites] Creating default list in {}", store.dir.display());
            store.write_empty(DEFAULT_LIST)?;
        }
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    /// Path of the file backing list `name`.
    pub fn list_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}{}", name, JSON_EXT))
    }

    /// Names of all lists in the directory, sorted.
    ///
    /// Only regular files ending in `.json` are considered.
    pub fn list_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = file_name.strip_suffix(JSON_EXT) {
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn current_list_name(&self) -> String {
        self.prefs.get(KEY_CURRENT_LIST, DEFAULT_LIST)
    }

    /// Make `name` the current list and load its stations.
    ///
    /// Fails with `NotFound` if `name.json` does not exist, leaving the
    /// current list and the in-memory stations untouched.
    pub fn set_current_list_name(&mut self, name: &str) -> Result<()> {
        if !is_valid_name(name) {
            return Err(FavoritesError::InvalidName(name.to_string()));
        }
        let path = self.list_path(name);
        if !path.is_file() {
            return Err(FavoritesError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        self.prefs.set(KEY_CURRENT_LIST, name)?;
        debug!("[favorites] Current list is now {}", name);
        self.reload();
        Ok(())
    }

    /// Stations of the current list, loading them on first access.
    pub fn stations(&mut self) -> &[FavoriteStation] {
        self.stations_mut()
    }

    /// Mutable stations of the current list; changes hit disk on `save`.
    pub fn stations_mut(&mut self) -> &mut Vec<FavoriteStation> {
        if self.stations.is_none() {
            self.reload();
        }
        self.stations.get_or_insert_with(Vec::new)
    }

    pub fn add_station(&mut self, station: FavoriteStation) {
        self.stations_mut().push(station);
    }

    /// Remove the station at `index`, if there is one.
    pub fn remove_station(&mut self, index: usize) -> Option<FavoriteStation> {
        let stations = self.stations_mut();
        (index < stations.len()).then(|| stations.remove(index))
    }

    pub fn exists(&self, name: &str) -> bool {
        is_valid_name(name) && self.list_path(name).is_file()
    }

    /// Create an empty list. The current list does not change.
    pub fn add_list(&mut self, name: &str) -> Result<()> {
        if !is_valid_name(name) {
            return Err(FavoritesError::InvalidName(name.to_string()));
        }
        if self.exists(name) {
            return Err(FavoritesError::AlreadyExists(name.to_string()));
        }

        self.write_empty(name)?;
        info!("[favorites] Created list {}", name);
        Ok(())
    }

    /// Delete list `name`. Returns whether a file was removed.
    ///
    /// The default list is never removed. Removing the current list first
    /// switches to the default one, recreating it empty if it has gone
    /// missing.
    pub fn remove_list(&mut self, name: &str) -> bool {
        if name == DEFAULT_LIST || !is_valid_name(name) {
            return false;
        }

        if self.current_list_name() == name {
            if !self.exists(DEFAULT_LIST) {
                info!("[favorites] Recreating missing {} list", DEFAULT_LIST);
                if let Err(e) = self.write_empty(DEFAULT_LIST) {
                    warn!("[favorites] Could not recreate {}: {}", DEFAULT_LIST, e);
                }
            }
            if let Err(e) = self.set_current_list_name(DEFAULT_LIST) {
                warn!("[favorites] Could not switch to {}: {}", DEFAULT_LIST, e);
            }
        }

        let path = self.list_path(name);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!("[favorites] Removed list {}", name);
                true
            }
            Err(e) => {
                warn!("[favorites] Failed to remove {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Re-read the current list from disk.
    ///
    /// An unreadable or malformed file gives an empty list; see
    /// [`list_file`] for the decoding policy.
    pub fn reload(&mut self) {
        let name = self.current_list_name();
        let path = self.list_path(&name);
        let stations = match std::fs::read_to_string(&path) {
            Ok(content) => list_file::decode(&content),
            Err(e) => {
                warn!("[favorites] Cannot read {}: {}", path.display(), e);
                Vec::new()
            }
        };
        debug!("[favorites] Loaded {} stations from {}", stations.len(), name);
        self.stations = Some(stations);
    }

    /// Write the in-memory stations over the current list's file.
    ///
    /// Failures are logged, not returned; use [`Self::try_save`] to see them.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            error!("[favorites] Failed to save {}: {}", self.current_list_name(), e);
        }
    }

    /// Like [`Self::save`] but returns the failure. Does nothing if the
    /// stations were never loaded.
    pub fn try_save(&self) -> Result<()> {
        let Some(stations) = self.stations.as_ref() else {
            return Ok(());
        };
        let json = list_file::encode(stations)?;
        let path = self.list_path(&self.current_list_name());
        std::fs::write(&path, json)?;
        debug!("[favorites] Saved {} stations to {}", stations.len(), path.display());
        Ok(())
    }

    fn write_empty(&self, name: &str) -> Result<()> {
        std::fs::write(self.list_path(name), list_file::EMPTY_LIST)?;
        Ok(())
    }
}
