use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::types::{Recipe, RecipeCollection};

/// Errors raised by a recipe provider.
#[derive(Debug, Error)]
pub enum LoadError {
  /// The data file does not exist.
  #[error("recipe data not found: {0}")]
  NotFound(PathBuf),

  /// Failed to read the data file.
  #[error("failed to read recipe data: {0}")]
  Read(#[source] io::Error),

  /// Failed to parse the recipe JSON.
  #[error("failed to parse recipe data: {0}")]
  Parse(#[source] serde_json::Error),
}

/// Something that can hand the session its recipes.
pub trait RecipeSource {
  fn load(&self) -> Result<Vec<Recipe>, LoadError>;
}

/// Reads recipes from a JSON file containing an array of recipes.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
  path: PathBuf,
}

impl JsonFileSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl RecipeSource for JsonFileSource {
  fn load(&self) -> Result<Vec<Recipe>, LoadError> {
    let content = match fs::read_to_string(&self.path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(LoadError::NotFound(self.path.clone())),
      Err(e) => return Err(LoadError::Read(e)),
    };
    parse_recipes(&content)
  }
}

/// An in-memory source, mostly for tests and embedding.
impl RecipeSource for Vec<Recipe> {
  fn load(&self) -> Result<Vec<Recipe>, LoadError> {
    Ok(self.clone())
  }
}

/// Parse recipe JSON. A top-level value that is not an array yields no recipes.
pub fn parse_recipes(content: &str) -> Result<Vec<Recipe>, LoadError> {
  let value: serde_json::Value = serde_json::from_str(content).map_err(LoadError::Parse)?;
  if !value.is_array() {
    return Ok(Vec::new());
  }
  serde_json::from_value(value).map_err(LoadError::Parse)
}

/// Load the session's collection. Provider failures leave it empty.
pub fn load_collection(source: &dyn RecipeSource) -> RecipeCollection {
  match source.load() {
    Ok(recipes) => {
      info!(count = recipes.len(), "loaded recipes");
      RecipeCollection::new(recipes)
    }
    Err(e) => {
      warn!(error = %e, "failed to load recipes, continuing with an empty collection");
      RecipeCollection::empty()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;
  use tracing_test::traced_test;

  #[test]
  fn non_array_document_yields_nothing() {
    assert!(parse_recipes(r#"{"slug": "x"}"#).unwrap().is_empty());
  }

  #[test]
  fn reads_array_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("recipes.json");
    fs::write(&path, r#"[{"slug": "a", "title": "A"}, {"slug": "b", "title": "B"}]"#).unwrap();

    let collection = load_collection(&JsonFileSource::new(&path));
    let slugs: Vec<_> = collection.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["a", "b"]);
  }

  #[test]
  fn missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = JsonFileSource::new(temp.path().join("nope.json")).load().unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
  }

  #[test]
  #[traced_test]
  fn malformed_file_degrades_to_empty_collection() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("recipes.json");
    fs::write(&path, "[{ not json").unwrap();

    let collection = load_collection(&JsonFileSource::new(&path));
    assert!(collection.is_empty());
    assert!(logs_contain("failed to load recipes"));
  }
}
