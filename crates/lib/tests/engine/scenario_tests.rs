use pantry_lib::consts::STORAGE_KEY_FAVORITES;
use pantry_lib::filter::{FilterPatch, KeywordMatchMode};
use pantry_lib::persist::MemoryStore;

use super::common::{session_at, visible};

fn with_favourite_tacos() -> MemoryStore {
  MemoryStore::new().with_entry(STORAGE_KEY_FAVORITES, r#"["fish-tacos"]"#)
}

#[test]
fn meal_filter_matches_any_listed_meal() {
  let mut session = session_at("", MemoryStore::new());
  session.apply_patch(&FilterPatch::new().meal("dinner"));
  assert_eq!(visible(&session), vec!["bean-chili", "fish-tacos"]);
}

#[test]
fn favourites_only_shows_favourites() {
  let mut session = session_at("", with_favourite_tacos());
  session.apply_patch(&FilterPatch::new().favorites_only(true));
  assert_eq!(visible(&session), vec!["fish-tacos"]);
}

#[test]
fn keyword_modes() {
  let mut session = session_at("", MemoryStore::new());

  session.apply_patch(&FilterPatch::new().keywords(["spicy", "quick"]));
  assert_eq!(visible(&session), vec!["fish-tacos"]);

  session.apply_patch(&FilterPatch::new().match_mode(KeywordMatchMode::Any));
  assert_eq!(visible(&session), vec!["bean-chili", "fish-tacos", "green-salad"]);
}

#[test]
fn keyword_text_is_not_searchable() {
  let mut session = session_at("", MemoryStore::new());
  session.apply_patch(&FilterPatch::new().search("vegan"));
  assert!(visible(&session).is_empty());
  assert_eq!(session.active_slug(), None);
}

#[test]
fn search_covers_ingredients_and_steps() {
  let mut session = session_at("", MemoryStore::new());
  session.apply_patch(&FilterPatch::new().search("  CABBAGE"));
  assert_eq!(visible(&session), vec!["fish-tacos"]);
  session.apply_patch(&FilterPatch::new().search("whisk"));
  assert_eq!(visible(&session), vec!["green-salad"]);
}

#[test]
fn excluded_selection_is_repaired_to_first_visible() {
  let mut session = session_at("slug=porridge", MemoryStore::new());
  assert_eq!(session.active_slug(), Some("porridge"));

  session.apply_patch(&FilterPatch::new().meal("lunch"));
  assert_eq!(session.active_slug(), Some("fish-tacos"));

  session.apply_patch(&FilterPatch::new().meal("brunch"));
  assert_eq!(session.active_slug(), None);
}

#[test]
fn visible_selection_is_kept() {
  let mut session = session_at("slug=green-salad", MemoryStore::new());
  session.apply_patch(&FilterPatch::new().keywords(["quick"]));
  assert_eq!(session.active_slug(), Some("green-salad"));
}

#[test]
fn clearing_filters_restores_everything() {
  let mut session = session_at("meal=breakfast", MemoryStore::new());
  session.clear_filters();
  assert_eq!(visible(&session).len(), 4);
  assert_eq!(session.active_slug(), Some("porridge"));
  assert_eq!(session.query(), "slug=porridge");
}
