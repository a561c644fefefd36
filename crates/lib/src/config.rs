//! Runtime configuration.
//!
//! Locations are resolved in order: explicit value (usually a CLI flag),
//! environment variable, platform default.

use std::path::PathBuf;

use crate::consts::STORAGE_DIR;
use crate::platform::paths;

/// Resolved locations for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryConfig {
  /// Recipe data file read by the provider.
  pub recipes_path: PathBuf,
  /// Base data directory.
  pub data_dir: PathBuf,
}

impl PantryConfig {
  /// Resolve configuration from optional overrides.
  pub fn resolve(recipes_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
    let data_dir = data_dir.unwrap_or_else(paths::data_dir);
    let recipes_path = recipes_path.unwrap_or_else(paths::recipes_path);
    Self { recipes_path, data_dir }
  }

  /// Directory backing the key-value storage.
  pub fn storage_dir(&self) -> PathBuf {
    self.data_dir.join(STORAGE_DIR)
  }
}

impl Default for PantryConfig {
  fn default() -> Self {
    Self::resolve(None, None)
  }
}

#[cfg(test)]
#[cfg(not(windows))]
mod tests {
  use super::*;
  use crate::consts::{ENV_DATA_DIR, ENV_RECIPES};
  use serial_test::serial;

  #[test]
  #[serial]
  fn explicit_values_win_over_environment() {
    temp_env::with_vars(
      [(ENV_DATA_DIR, Some("/env/data")), (ENV_RECIPES, Some("/env/recipes.json"))],
      || {
        let config = PantryConfig::resolve(Some("/flag/r.json".into()), Some("/flag/data".into()));
        assert_eq!(config.recipes_path, PathBuf::from("/flag/r.json"));
        assert_eq!(config.storage_dir(), PathBuf::from("/flag/data/storage"));
      },
    );
  }

  #[test]
  #[serial]
  fn environment_used_when_no_flags() {
    temp_env::with_vars(
      [(ENV_DATA_DIR, Some("/env/data")), (ENV_RECIPES, Some("/env/recipes.json"))],
      || {
        let config = PantryConfig::default();
        assert_eq!(config.recipes_path, PathBuf::from("/env/recipes.json"));
        assert_eq!(config.data_dir, PathBuf::from("/env/data"));
      },
    );
  }
}
