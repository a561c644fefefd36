//! Active-filter chips.
//!
//! One chip per narrowing criterion, each carrying the patch that removes it.

use serde::Serialize;

use crate::consts::MEAL_ALL;

use super::state::{FilterPatch, FilterState, KeywordMatchMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipKind {
  Meal,
  Search,
  Favorites,
  Keyword,
  Mode,
}

/// A removable summary of one active criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
  pub kind: ChipKind,
  pub label: String,
  /// Patch that clears this criterion when applied.
  #[serde(skip)]
  pub remove: FilterPatch,
}

/// Chips for every active criterion in display order.
pub fn active_chips(state: &FilterState) -> Vec<FilterChip> {
  let mut chips = Vec::new();

  if let Some(meal) = state.meal_filter() {
    chips.push(FilterChip {
      kind: ChipKind::Meal,
      label: format!("Meal: {}", meal),
      remove: FilterPatch::new().meal(MEAL_ALL),
    });
  }

  let search = state.search.trim();
  if !search.is_empty() {
    chips.push(FilterChip {
      kind: ChipKind::Search,
      label: format!("Search: {}", search),
      remove: FilterPatch::new().search(""),
    });
  }

  if state.favorites_only {
    chips.push(FilterChip {
      kind: ChipKind::Favorites,
      label: "Favourites only".to_string(),
      remove: FilterPatch::new().favorites_only(false),
    });
  }

  if !state.keywords.is_empty() {
    for kw in &state.keywords {
      let rest = state.keywords.iter().filter(|k| *k != kw).cloned();
      chips.push(FilterChip {
        kind: ChipKind::Keyword,
        label: format!("KW: {}", kw),
        remove: FilterPatch::new().keywords(rest),
      });
    }
    chips.push(FilterChip {
      kind: ChipKind::Mode,
      label: format!("Mode: {}", state.match_mode.as_str().to_uppercase()),
      remove: FilterPatch::new().match_mode(KeywordMatchMode::All),
    });
  }

  chips
}
