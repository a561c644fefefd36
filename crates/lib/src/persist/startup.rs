use serde::Serialize;

use crate::filter::{FilterState, KeywordMatchMode};

use super::storage::StoredFilters;
use super::url::UrlState;

/// Where the initial filters came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateSource {
  Url,
  Storage,
  Defaults,
}

/// Filters and requested slug to start a session with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialState {
  pub filters: FilterState,
  /// Slug requested by the URL. Not validated against the collection yet.
  pub slug: Option<String>,
  pub source: StateSource,
}

/// Pick the starting filters.
///
/// A URL carrying any non-default filter wins outright and stored filters are
/// ignored. Otherwise stored filters apply, then defaults. The slug always
/// comes from the URL and the match mode always starts as `All`.
pub fn resolve_startup(url: &UrlState, stored: Option<StoredFilters>) -> InitialState {
  let slug = url.slug.clone();

  if url.has_filters() {
    return InitialState {
      filters: url.to_filters(),
      slug,
      source: StateSource::Url,
    };
  }

  match stored {
    Some(stored) => InitialState {
      filters: FilterState {
        meal: stored.meal,
        keywords: stored.keywords.into_iter().collect(),
        match_mode: KeywordMatchMode::All,
        search: stored.q,
        favorites_only: stored.fav_only,
      },
      slug,
      source: StateSource::Storage,
    },
    None => InitialState {
      filters: FilterState::default(),
      slug,
      source: StateSource::Defaults,
    },
  }
}
