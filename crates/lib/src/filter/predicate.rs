//! The filter predicate.
//!
//! Pure and cheap enough to run on every keystroke. The result preserves the
//! collection's order.

use crate::recipe::{Recipe, RecipeCollection};

use super::state::{Favorites, FilterState, KeywordMatchMode};

/// Returns `true` if `recipe` passes every active criterion in `state`.
pub fn matches(recipe: &Recipe, state: &FilterState, favorites: &Favorites) -> bool {
  matches_query(recipe, state, favorites, &state.search_query())
}

fn matches_query(recipe: &Recipe, state: &FilterState, favorites: &Favorites, query: &str) -> bool {
  if state.favorites_only && !favorites.contains(&recipe.slug) {
    return false;
  }

  if let Some(meal) = state.meal_filter() {
    if !recipe.has_meal(meal) {
      return false;
    }
  }

  if !state.keywords.is_empty() {
    let hit = match state.match_mode {
      KeywordMatchMode::All => state.keywords.iter().all(|kw| recipe.has_keyword(kw)),
      KeywordMatchMode::Any => state.keywords.iter().any(|kw| recipe.has_keyword(kw)),
    };
    if !hit {
      return false;
    }
  }

  query.is_empty() || recipe.search_haystack().contains(query)
}

/// Stable filter of `collection` under `state`.
pub fn filter_recipes<'a>(collection: &'a RecipeCollection, state: &FilterState, favorites: &Favorites) -> Vec<&'a Recipe> {
  let query = state.search_query();
  collection
    .iter()
    .filter(|recipe| matches_query(recipe, state, favorites, &query))
    .collect()
}
