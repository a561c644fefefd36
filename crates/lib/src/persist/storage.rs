use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::{MEAL_ALL, STORAGE_KEY_FAVORITES, STORAGE_KEY_FILTERS};
use crate::filter::{Favorites, FilterState};

/// Errors from a key-value store backend.
#[derive(Debug, Error)]
pub enum StorageError {
  /// Failed to create the storage directory.
  #[error("failed to create storage directory: {0}")]
  CreateDir(#[source] io::Error),

  /// Failed to read a stored value.
  #[error("failed to read stored value: {0}")]
  Read(#[source] io::Error),

  /// Failed to write a stored value.
  #[error("failed to write stored value: {0}")]
  Write(#[source] io::Error),

  /// Key contains characters that cannot be used as a file name.
  #[error("invalid storage key: {0}")]
  InvalidKey(String),

  /// The backend refuses writes (quota, permissions, read-only mode).
  #[error("storage is read-only")]
  ReadOnly,
}

/// String key-value storage that survives across sessions.
pub trait KeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as a file inside one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
  base_path: PathBuf,
}

impl FileStore {
  pub fn new(base_path: impl Into<PathBuf>) -> Self {
    Self {
      base_path: base_path.into(),
    }
  }

  pub fn base_path(&self) -> &Path {
    &self.base_path
  }

  fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
    let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
      return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(self.base_path.join(format!("{}.json", key)))
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    let path = self.key_path(key)?;
    match fs::read_to_string(&path) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(StorageError::Read(e)),
    }
  }

  /// Write atomically (temp file, then rename) so readers never see a torn value.
  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
    let path = self.key_path(key)?;
    fs::create_dir_all(&self.base_path).map_err(StorageError::CreateDir)?;

    let temp_path = self.base_path.join(format!("{}.json.tmp", key));
    fs::write(&temp_path, value).map_err(StorageError::Write)?;
    fs::rename(&temp_path, &path).map_err(StorageError::Write)?;
    Ok(())
  }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: HashMap<String, String>,
  read_only: bool,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// A store whose writes always fail.
  pub fn read_only() -> Self {
    Self {
      read_only: true,
      ..Self::default()
    }
  }

  pub fn with_entry(mut self, key: &str, value: &str) -> Self {
    self.entries.insert(key.to_string(), value.to_string());
    self
  }

  pub fn raw(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
    if self.read_only {
      return Err(StorageError::ReadOnly);
    }
    self.entries.insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Filter record kept in storage. No slug and no match mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFilters {
  pub meal: String,
  pub keywords: Vec<String>,
  pub q: String,
  #[serde(rename = "favOnly")]
  pub fav_only: bool,
}

impl Default for StoredFilters {
  fn default() -> Self {
    Self {
      meal: MEAL_ALL.to_string(),
      keywords: Vec::new(),
      q: String::new(),
      fav_only: false,
    }
  }
}

impl StoredFilters {
  pub fn from_filters(filters: &FilterState) -> Self {
    Self {
      meal: filters.meal.clone(),
      keywords: filters.keywords.iter().cloned().collect(),
      q: filters.search.clone(),
      fav_only: filters.favorites_only,
    }
  }

  /// Decode a stored record, field by field.
  ///
  /// Returns `None` unless the payload is a JSON object. Fields of the wrong
  /// type take their default.
  pub fn decode(raw: &str) -> Option<Self> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let obj = value.as_object()?;

    let meal = obj
      .get("meal")
      .and_then(Value::as_str)
      .filter(|m| !m.is_empty())
      .unwrap_or(MEAL_ALL)
      .to_string();
    let keywords = obj.get("keywords").map(string_array).unwrap_or_default();
    let q = obj.get("q").and_then(Value::as_str).unwrap_or_default().to_string();
    let fav_only = obj.get("favOnly").is_some_and(truthy);

    Some(Self {
      meal,
      keywords,
      q,
      fav_only,
    })
  }
}

fn string_array(value: &Value) -> Vec<String> {
  value
    .as_array()
    .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
    .unwrap_or_default()
}

/// Loose truthiness for hand-edited or foreign-written payloads.
fn truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

/// Read stored filters. Missing or unreadable records yield `None`.
pub fn read_filters(store: &dyn KeyValueStore) -> Option<StoredFilters> {
  match store.get(STORAGE_KEY_FILTERS) {
    Ok(Some(raw)) => {
      let decoded = StoredFilters::decode(&raw);
      if decoded.is_none() {
        debug!(key = STORAGE_KEY_FILTERS, "ignoring malformed stored filters");
      }
      decoded
    }
    Ok(None) => None,
    Err(e) => {
      debug!(key = STORAGE_KEY_FILTERS, error = %e, "failed to read stored filters");
      None
    }
  }
}

/// Persist filters. Failures are logged and otherwise ignored.
pub fn write_filters(store: &mut dyn KeyValueStore, filters: &FilterState) {
  let record = StoredFilters::from_filters(filters);
  write_json(store, STORAGE_KEY_FILTERS, &record);
}

/// Read the favourites set. Missing or malformed data yields an empty set.
pub fn read_favorites(store: &dyn KeyValueStore) -> Favorites {
  let raw = match store.get(STORAGE_KEY_FAVORITES) {
    Ok(Some(raw)) => raw,
    Ok(None) => return Favorites::new(),
    Err(e) => {
      debug!(key = STORAGE_KEY_FAVORITES, error = %e, "failed to read favourites");
      return Favorites::new();
    }
  };
  match serde_json::from_str::<Value>(&raw) {
    Ok(value) if value.is_array() => string_array(&value).into_iter().collect(),
    _ => {
      debug!(key = STORAGE_KEY_FAVORITES, "ignoring malformed favourites");
      BTreeSet::new()
    }
  }
}

/// Persist the favourites set. Failures are logged and otherwise ignored.
pub fn write_favorites(store: &mut dyn KeyValueStore, favorites: &Favorites) {
  let slugs: Vec<&String> = favorites.iter().collect();
  write_json(store, STORAGE_KEY_FAVORITES, &slugs);
}

fn write_json<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
  let content = match serde_json::to_string(value) {
    Ok(content) => content,
    Err(e) => {
      warn!(key, error = %e, "failed to serialize stored value");
      return;
    }
  };
  if let Err(e) = store.set(key, &content) {
    warn!(key, error = %e, "failed to persist value, keeping in-memory state");
  }
}
