use pantry_lib::Action;
use pantry_lib::filter::FilterPatch;
use pantry_lib::persist::{MemoryStore, UrlSink};

use super::common::{session_at, visible};

#[test]
fn selection_pushes_history_without_touching_filters() {
  let mut session = session_at("", MemoryStore::new());
  session.select_recipe("porridge").unwrap();
  session.select_recipe("green-salad").unwrap();

  assert_eq!(
    session.url().entries(),
    ["slug=bean-chili", "slug=porridge", "slug=green-salad"]
  );

  assert!(session.back());
  assert_eq!(session.active_slug(), Some("porridge"));
  assert_eq!(visible(&session).len(), 4);
}

#[test]
fn back_restores_previous_filters() {
  let mut session = session_at("", MemoryStore::new());
  session.apply_patch(&FilterPatch::new().meal("breakfast"));
  session.apply_patch(&FilterPatch::new().meal("lunch"));

  assert!(session.back());
  assert_eq!(session.filters().meal, "breakfast");
  assert_eq!(session.active_slug(), Some("porridge"));

  assert!(session.back());
  assert_eq!(session.filters().meal, "all");
  assert!(!session.back());
}

#[test]
fn navigation_does_not_write_storage() {
  let mut session = session_at("", MemoryStore::new());
  session.apply_patch(&FilterPatch::new().meal("lunch"));
  let stored = session.store().raw("recipeFilters").map(str::to_string);

  session.back();
  assert_eq!(session.store().raw("recipeFilters").map(str::to_string), stored);
}

#[test]
fn navigate_action_rereads_the_url() {
  let mut session = session_at("meal=dinner", MemoryStore::new());
  session.dispatch(Action::Select("fish-tacos".into())).unwrap();
  session.dispatch(Action::Navigate).unwrap();
  assert_eq!(session.active_slug(), Some("fish-tacos"));
  assert_eq!(session.filters().meal, "dinner");
}
