//! Render orchestration.
//!
//! Views are external collaborators. The orchestrator decides which of them to
//! refresh after a state change and keeps the active selection inside the
//! visible subset.

mod views;

pub use views::*;

use serde::Serialize;
use tracing::debug;

use crate::filter::{Favorites, FilterState, filter_recipes};
use crate::recipe::RecipeCollection;

/// A selection change made by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repair {
  pub from: Option<String>,
  pub to: Option<String>,
}

/// What a full refresh produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutcome {
  /// Slugs of the visible recipes, in collection order.
  pub visible: Vec<String>,
  pub repaired: Option<Repair>,
}

/// Refresh after a filter change or a (re)load.
///
/// 1. recompute the visible subset
/// 2. refresh the keyword, list and chip views
/// 3. repair the selection if it is not visible
/// 4. refresh the detail view
///
/// An empty selection counts as not visible and is moved to the first visible
/// recipe when there is one. After a repair the list view is refreshed again so
/// it marks the same recipe the detail view shows.
pub fn refresh_filtered<V: Views + ?Sized>(
  collection: &RecipeCollection,
  filters: &FilterState,
  favorites: &Favorites,
  active: &mut Option<String>,
  views: &mut V,
) -> RenderOutcome {
  let visible = filter_recipes(collection, filters, favorites);

  {
    let ctx = ViewContext::new(collection, filters, favorites, &visible, active.as_deref());
    views.keywords(&ctx);
    views.list(&ctx);
    views.chips(&ctx);
  }

  let still_visible = active
    .as_deref()
    .is_some_and(|slug| visible.iter().any(|r| r.slug == slug));
  let repaired = if still_visible {
    None
  } else {
    let to = visible.first().map(|r| r.slug.clone());
    if to == *active {
      None
    } else {
      debug!(from = ?active, to = ?to, "repairing active selection");
      let from = std::mem::replace(active, to.clone());
      Some(Repair { from, to })
    }
  };

  let ctx = ViewContext::new(collection, filters, favorites, &visible, active.as_deref());
  if repaired.is_some() {
    views.list(&ctx);
  }
  views.detail(&ctx);

  RenderOutcome {
    visible: visible.iter().map(|r| r.slug.clone()).collect(),
    repaired,
  }
}

/// Refresh after a selection or favourite change: list and detail only.
pub fn refresh_selection<V: Views + ?Sized>(
  collection: &RecipeCollection,
  filters: &FilterState,
  favorites: &Favorites,
  active: Option<&str>,
  views: &mut V,
) {
  let visible = filter_recipes(collection, filters, favorites);
  let ctx = ViewContext::new(collection, filters, favorites, &visible, active);
  views.list(&ctx);
  views.detail(&ctx);
}
