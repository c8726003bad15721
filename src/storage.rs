use crate::errors::StoreError;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{error, warn};

pub const PAGE_KEY: &str = "sales-app-page";
pub const LOCATION_KEY: &str = "sales-app-location";
pub const ENTRIES_KEY: &str = "sales-entries";

pub trait KeyValueStore: Send {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Returns the decoded value stored under `key`, or `default` when the key
/// is absent or its contents do not decode.
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    let Some(raw) = store.get_item(key) else {
        return default;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("discarding undecodable value for {key}: {err}");
            default
        }
    }
}

pub fn save<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StoreError::from)
        .and_then(|payload| store.set_item(key, payload));
    if let Err(err) = result {
        warn!("value for {key} kept in memory only: {err}");
    }
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/state.json")
}

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(err) = fs::create_dir_all(parent) {
                error!("failed to create data directory {}: {err}", parent.display());
            }
        }
        let items = read_items(&path);
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_items(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(err) => {
                error!("failed to parse data file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let previous = self.items.insert(key.to_string(), value);
        let written = serde_json::to_vec_pretty(&self.items)
            .map_err(StoreError::from)
            .and_then(|payload| fs::write(&self.path, payload).map_err(StoreError::from));
        if written.is_err() {
            // The file still holds the old value; keep the map in step with it.
            match previous {
                Some(old) => self.items.insert(key.to_string(), old),
                None => self.items.remove(key),
            };
        }
        written
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
    full: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: impl Into<String>) -> Self {
        self.items.insert(key.to_string(), value.into());
        self
    }

    /// Makes every later write fail as if the quota were exhausted.
    pub fn set_full(&mut self, full: bool) {
        self.full = full;
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if self.full {
            return Err(StoreError::Full);
        }
        self.items.insert(key.to_string(), value);
        Ok(())
    }
}
