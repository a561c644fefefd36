use crate::filter::{Favorites, FilterChip, FilterState, active_chips};
use crate::recipe::{Recipe, RecipeCollection};

/// Read-only state handed to every view.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
  pub collection: &'a RecipeCollection,
  pub filters: &'a FilterState,
  pub favorites: &'a Favorites,
  /// Visible recipes, in collection order.
  pub visible: &'a [&'a Recipe],
  pub active_slug: Option<&'a str>,
}

impl<'a> ViewContext<'a> {
  pub fn new(
    collection: &'a RecipeCollection,
    filters: &'a FilterState,
    favorites: &'a Favorites,
    visible: &'a [&'a Recipe],
    active_slug: Option<&'a str>,
  ) -> Self {
    Self {
      collection,
      filters,
      favorites,
      visible,
      active_slug,
    }
  }

  /// The active recipe, if any.
  pub fn active(&self) -> Option<&'a Recipe> {
    self.active_slug.and_then(|slug| self.collection.get(slug))
  }

  pub fn is_active(&self, slug: &str) -> bool {
    self.active_slug == Some(slug)
  }

  pub fn is_favorite(&self, slug: &str) -> bool {
    self.favorites.contains(slug)
  }

  pub fn is_keyword_selected(&self, keyword: &str) -> bool {
    self.filters.keywords.contains(keyword)
  }

  /// Every keyword in the collection, sorted.
  pub fn all_keywords(&self) -> Vec<String> {
    self.collection.all_keywords()
  }

  pub fn chips(&self) -> Vec<FilterChip> {
    active_chips(self.filters)
  }
}

/// The four views the orchestrator drives.
///
/// Views only read; user input goes back through the session's action
/// dispatch.
pub trait Views {
  /// Keyword picker.
  fn keywords(&mut self, ctx: &ViewContext<'_>);
  /// Visible recipe list, marking the active entry.
  fn list(&mut self, ctx: &ViewContext<'_>);
  /// Active-filter chips.
  fn chips(&mut self, ctx: &ViewContext<'_>);
  /// Detail of the active recipe, or an empty state.
  fn detail(&mut self, ctx: &ViewContext<'_>);
}

/// Views that render nothing, for headless sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullViews;

impl Views for NullViews {
  fn keywords(&mut self, _ctx: &ViewContext<'_>) {}
  fn list(&mut self, _ctx: &ViewContext<'_>) {}
  fn chips(&mut self, _ctx: &ViewContext<'_>) {}
  fn detail(&mut self, _ctx: &ViewContext<'_>) {}
}
