//! The session: owner of all mutable state and the only way to change it.
//!
//! Every user action runs to completion synchronously, in a fixed order:
//!
//! ```text
//! filter change:    merge patch -> render (with selection repair) -> URL push + storage
//! selection change: set slug    -> list + detail                  -> URL push
//! load / navigate:  derive state -> render (with selection repair) -> URL replace
//! ```

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::filter::{Favorites, FilterChip, FilterPatch, FilterState, active_chips, filter_recipes, matches};
use crate::persist::{
  History, InitialState, KeyValueStore, StateSource, UrlSink, UrlState, decode_query, encode_query,
  read_favorites, read_filters, resolve_startup, write_favorites, write_filters,
};
use crate::recipe::{Recipe, RecipeCollection, RecipeSource, load_collection};
use crate::render::{RenderOutcome, Views, refresh_filtered, refresh_selection};

/// Errors for actions that name a recipe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
  /// No recipe with this slug exists.
  #[error("unknown recipe: {0}")]
  UnknownRecipe(String),

  /// The recipe exists but the current filters hide it.
  #[error("recipe is hidden by the current filters: {0}")]
  NotVisible(String),
}

/// A user intent, independent of any UI toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Patch(FilterPatch),
  ClearFilters,
  Select(String),
  ToggleFavorite(String),
  Random,
  /// The URL changed underneath the session (back/forward).
  Navigate,
}

/// Serializable summary of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
  pub filters: FilterState,
  pub active_slug: Option<String>,
  pub favorites: Vec<String>,
  pub visible: Vec<String>,
  pub chips: Vec<FilterChip>,
  pub query: String,
}

/// One browsing session over a recipe collection.
pub struct Session<S, U, V> {
  collection: RecipeCollection,
  filters: FilterState,
  active: Option<String>,
  favorites: Favorites,
  store: S,
  url: U,
  views: V,
}

impl<S, U, V> Session<S, U, V>
where
  S: KeyValueStore,
  U: UrlSink,
  V: Views,
{
  /// Load recipes from `source` and start a session. Load failures give an
  /// empty collection.
  pub fn load(source: &dyn RecipeSource, store: S, url: U, views: V) -> Self {
    Self::start(load_collection(source), store, url, views)
  }

  /// Start a session over an already loaded collection.
  ///
  /// Favourites always come from storage. Filters come from the URL if it
  /// carries any, otherwise from storage, otherwise defaults.
  pub fn start(collection: RecipeCollection, store: S, url: U, views: V) -> Self {
    let favorites = read_favorites(&store);
    let url_state = decode_query(&url.location());
    let initial = resolve_startup(&url_state, read_filters(&store));

    info!(
      recipes = collection.len(),
      favorites = favorites.len(),
      source = ?initial.source,
      "starting session"
    );

    let mut session = Self {
      collection,
      filters: FilterState::default(),
      active: None,
      favorites,
      store,
      url,
      views,
    };
    session.reset_to(initial);
    session
  }

  /// Apply a sparse filter change.
  ///
  /// Always renders and persists, even when the patch changes nothing.
  pub fn apply_patch(&mut self, patch: &FilterPatch) -> RenderOutcome {
    debug!(?patch, "applying filter patch");
    self.filters.apply(patch);
    let outcome = self.render_filtered();
    self.sync_url_and_storage();
    outcome
  }

  /// Reset every filter.
  pub fn clear_filters(&mut self) -> RenderOutcome {
    self.apply_patch(&FilterPatch::cleared())
  }

  /// Make a visible recipe the active one.
  pub fn select_recipe(&mut self, slug: &str) -> Result<(), SessionError> {
    let Some(recipe) = self.collection.get(slug) else {
      return Err(SessionError::UnknownRecipe(slug.to_string()));
    };
    if !matches(recipe, &self.filters, &self.favorites) {
      return Err(SessionError::NotVisible(slug.to_string()));
    }

    debug!(slug, "selecting recipe");
    self.active = Some(slug.to_string());
    self.render_selection();
    self.sync_url_only();
    Ok(())
  }

  /// Add or remove a favourite. Returns whether `slug` is now a favourite.
  ///
  /// The in-memory set changes first; a failed storage write does not undo it.
  pub fn toggle_favorite(&mut self, slug: &str) -> Result<bool, SessionError> {
    if !self.collection.contains(slug) {
      return Err(SessionError::UnknownRecipe(slug.to_string()));
    }

    let now_favorite = if self.favorites.remove(slug) {
      false
    } else {
      self.favorites.insert(slug.to_string());
      true
    };
    debug!(slug, favorite = now_favorite, "toggled favourite");
    write_favorites(&mut self.store, &self.favorites);

    if self.filters.favorites_only {
      // Membership changed the visible set, so the selection may need repair.
      let outcome = self.render_filtered();
      if outcome.repaired.is_some() {
        self.url.replace(&self.query());
      }
    } else {
      self.render_selection();
    }

    Ok(now_favorite)
  }

  /// Select a random visible recipe. Returns `None` when nothing is visible.
  pub fn pick_random(&mut self) -> Option<String> {
    self.pick_random_with(&mut rand::thread_rng())
  }

  pub fn pick_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
    let slug = self.filtered_recipes().choose(rng).map(|r| r.slug.clone())?;
    self.active = Some(slug.clone());
    self.render_selection();
    self.sync_url_only();
    Some(slug)
  }

  /// Re-derive everything from the current URL, as after back/forward.
  ///
  /// Storage is neither read nor written.
  pub fn navigate(&mut self) {
    let url_state = decode_query(&self.url.location());
    debug!(?url_state, "navigating");
    self.reset_to(InitialState {
      filters: url_state.to_filters(),
      slug: url_state.slug,
      source: StateSource::Url,
    });
  }

  /// Run one user action through the matching pipeline.
  pub fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
    match action {
      Action::Patch(patch) => {
        self.apply_patch(&patch);
      }
      Action::ClearFilters => {
        self.clear_filters();
      }
      Action::Select(slug) => self.select_recipe(&slug)?,
      Action::ToggleFavorite(slug) => {
        self.toggle_favorite(&slug)?;
      }
      Action::Random => {
        self.pick_random();
      }
      Action::Navigate => self.navigate(),
    }
    Ok(())
  }

  /// Recipes visible under the current filters, in collection order.
  pub fn filtered_recipes(&self) -> Vec<&Recipe> {
    filter_recipes(&self.collection, &self.filters, &self.favorites)
  }

  pub fn active_recipe(&self) -> Option<&Recipe> {
    self.active.as_deref().and_then(|slug| self.collection.get(slug))
  }

  pub fn active_slug(&self) -> Option<&str> {
    self.active.as_deref()
  }

  pub fn filters(&self) -> &FilterState {
    &self.filters
  }

  pub fn favorites(&self) -> &Favorites {
    &self.favorites
  }

  pub fn collection(&self) -> &RecipeCollection {
    &self.collection
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn url(&self) -> &U {
    &self.url
  }

  pub fn views(&self) -> &V {
    &self.views
  }

  pub fn views_mut(&mut self) -> &mut V {
    &mut self.views
  }

  /// Query string for the current state, without the leading `?`.
  pub fn query(&self) -> String {
    encode_query(&UrlState::from_filters(&self.filters, self.active.as_deref()))
  }

  pub fn snapshot(&self) -> SessionSnapshot {
    SessionSnapshot {
      filters: self.filters.clone(),
      active_slug: self.active.clone(),
      favorites: self.favorites.iter().cloned().collect(),
      visible: self.filtered_recipes().iter().map(|r| r.slug.clone()).collect(),
      chips: active_chips(&self.filters),
      query: self.query(),
    }
  }

  fn reset_to(&mut self, initial: InitialState) {
    self.filters = initial.filters;
    self.active = initial.slug.filter(|slug| self.collection.contains(slug));
    self.render_filtered();
    self.url.replace(&self.query());
  }

  fn render_filtered(&mut self) -> RenderOutcome {
    refresh_filtered(
      &self.collection,
      &self.filters,
      &self.favorites,
      &mut self.active,
      &mut self.views,
    )
  }

  fn render_selection(&mut self) {
    refresh_selection(
      &self.collection,
      &self.filters,
      &self.favorites,
      self.active.as_deref(),
      &mut self.views,
    );
  }

  fn sync_url_only(&mut self) {
    let query = self.query();
    self.url.push(&query);
  }

  fn sync_url_and_storage(&mut self) {
    self.sync_url_only();
    write_filters(&mut self.store, &self.filters);
  }
}

impl<S, V> Session<S, History, V>
where
  S: KeyValueStore,
  V: Views,
{
  /// Go back one history entry. Returns `false` at the start of history.
  pub fn back(&mut self) -> bool {
    if !self.url.back() {
      return false;
    }
    self.navigate();
    true
  }

  /// Go forward one history entry. Returns `false` at the end of history.
  pub fn forward(&mut self) -> bool {
    if !self.url.forward() {
      return false;
    }
    self.navigate();
    true
  }
}
