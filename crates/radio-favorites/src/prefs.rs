//! Key-value preference storage.
//!
//! The favorites store only needs string get/set, so this is a small trait
//! with an in-memory implementation and a JSON-file one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;

pub trait KeyValueStore {
    /// Value stored under `key`, or `default` when unset.
    fn get(&self, key: &str, default: &str) -> String;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryPrefs {
    fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in one file.
///
/// The file may be shared with other settings: entries of any JSON type are
/// kept and written back, but `get` only sees string values. Every `set`
/// rewrites the whole file.
#[derive(Debug)]
pub struct JsonPrefs {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonPrefs {
    /// Open `path`. A missing or unreadable file starts out empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::load_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_values(path: &Path) -> Map<String, Value> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                debug!("[prefs] No preferences at {}: {}", path.display(), e);
                return Map::new();
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(values)) => values,
            Ok(_) => {
                warn!("[prefs] Ignoring {}: not a JSON object", path.display());
                Map::new()
            }
            Err(e) => {
                warn!("[prefs] Ignoring malformed {}: {}", path.display(), e);
                Map::new()
            }
        }
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for JsonPrefs {
    fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        self.flush()
    }
}
