use pantry_lib::Session;
use pantry_lib::consts::{STORAGE_KEY_FAVORITES, STORAGE_KEY_FILTERS};
use pantry_lib::filter::{FilterPatch, KeywordMatchMode};
use pantry_lib::persist::{FileStore, History, KeyValueStore, MemoryStore, UrlSink, decode_query, read_filters};
use pantry_lib::render::NullViews;
use tempfile::TempDir;

use super::common::{fixture_collection, session_at};

#[test]
fn stored_filters_restore_a_new_session() {
  let temp = TempDir::new().unwrap();
  let storage = temp.path().join("storage");

  let mut first = Session::start(fixture_collection(), FileStore::new(&storage), History::default(), NullViews);
  first.apply_patch(&FilterPatch::new().meal("lunch").search("salad"));
  first.toggle_favorite("green-salad").unwrap();
  drop(first);

  let second = Session::start(fixture_collection(), FileStore::new(&storage), History::default(), NullViews);
  assert_eq!(second.filters().meal, "lunch");
  assert_eq!(second.filters().search, "salad");
  assert!(second.favorites().contains("green-salad"));
  assert_eq!(second.active_slug(), Some("green-salad"));
}

#[test]
fn blank_meal_agrees_across_state_url_and_storage() {
  let mut session = session_at("meal=dinner", MemoryStore::new());
  session.apply_patch(&FilterPatch::new().meal(" "));

  assert_eq!(session.filters().meal, "all");
  assert_eq!(session.filtered_recipes().len(), 4);

  let from_url = decode_query(&session.url().location()).to_filters();
  assert_eq!(from_url.meal, session.filters().meal);

  let stored = read_filters(session.store()).unwrap();
  assert_eq!(stored.meal, session.filters().meal);

  let reopened = session_at("", MemoryStore::new().with_entry(
    STORAGE_KEY_FILTERS,
    session.store().raw(STORAGE_KEY_FILTERS).unwrap(),
  ));
  assert_eq!(reopened.filtered_recipes().len(), session.filtered_recipes().len());
}

#[test]
fn url_filters_beat_stored_filters() {
  let store = MemoryStore::new().with_entry(
    STORAGE_KEY_FILTERS,
    r#"{"meal":"breakfast","keywords":["quick"],"q":"oats","favOnly":true}"#,
  );
  let session = session_at("q=taco", store);

  assert_eq!(session.filters().meal, "all");
  assert!(session.filters().keywords.is_empty());
  assert_eq!(session.filters().search, "taco");
  assert!(!session.filters().favorites_only);
}

#[test]
fn favourites_load_even_when_url_has_filters() {
  let store = MemoryStore::new().with_entry(STORAGE_KEY_FAVORITES, r#"["porridge"]"#);
  let session = session_at("fav=1", store);
  assert_eq!(session.active_slug(), Some("porridge"));
}

#[test]
fn malformed_storage_falls_back_to_defaults() {
  let store = MemoryStore::new()
    .with_entry(STORAGE_KEY_FILTERS, "{broken")
    .with_entry(STORAGE_KEY_FAVORITES, "42");
  let session = session_at("", store);
  assert!(!session.filters().has_filters());
  assert!(session.favorites().is_empty());
  assert_eq!(session.active_slug(), Some("bean-chili"));
}

#[test]
fn match_mode_is_never_persisted() {
  let mut session = session_at("", MemoryStore::new());
  session.apply_patch(&FilterPatch::new().keywords(["quick"]).match_mode(KeywordMatchMode::Any));

  let stored = session.store().get(STORAGE_KEY_FILTERS).unwrap().unwrap();
  assert!(!stored.contains("any"));
  assert!(!session.url().location().contains("any"));
}

#[test]
fn read_only_storage_keeps_session_working() {
  let mut session = session_at("", MemoryStore::read_only());
  session.apply_patch(&FilterPatch::new().meal("dinner"));
  assert_eq!(session.toggle_favorite("bean-chili"), Ok(true));
  assert_eq!(session.filters().meal, "dinner");
  assert!(session.favorites().contains("bean-chili"));
}
