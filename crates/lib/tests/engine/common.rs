//! Shared helpers for engine integration tests.

use std::path::PathBuf;

use pantry_lib::Session;
use pantry_lib::persist::{History, MemoryStore};
use pantry_lib::recipe::{JsonFileSource, RecipeCollection, load_collection};
use pantry_lib::render::NullViews;

pub type MemorySession = Session<MemoryStore, History, NullViews>;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// The four-recipe fixture collection.
pub fn fixture_collection() -> RecipeCollection {
  let collection = load_collection(&JsonFileSource::new(fixture_path("recipes.json")));
  assert_eq!(collection.len(), 4, "fixture failed to load");
  collection
}

/// Start a headless session at `query` over the fixture collection.
pub fn session_at(query: &str, store: MemoryStore) -> MemorySession {
  Session::start(fixture_collection(), store, History::new(query), NullViews)
}

pub fn visible(session: &MemorySession) -> Vec<String> {
  session.filtered_recipes().iter().map(|r| r.slug.clone()).collect()
}
