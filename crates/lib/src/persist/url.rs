use url::form_urlencoded;

use crate::consts::{MEAL_ALL, query};
use crate::filter::{FilterState, KeywordMatchMode};

/// The session state carried in a URL query string.
///
/// The keyword match mode is not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlState {
  pub slug: Option<String>,
  /// `None` means every meal.
  pub meal: Option<String>,
  pub keywords: Vec<String>,
  pub q: String,
  pub fav_only: bool,
}

impl UrlState {
  /// Project filters and the active slug onto their URL form.
  pub fn from_filters(filters: &FilterState, slug: Option<&str>) -> Self {
    Self {
      slug: slug.map(str::to_string),
      meal: filters.meal_filter().map(str::to_string),
      keywords: filters.keywords.iter().cloned().collect(),
      q: filters.search.trim().to_string(),
      fav_only: filters.favorites_only,
    }
  }

  /// Whether the URL carries any non-default filter value.
  pub fn has_filters(&self) -> bool {
    self.meal.is_some() || !self.keywords.is_empty() || !self.q.trim().is_empty() || self.fav_only
  }

  /// Filter state described by this URL. The match mode is always `All`.
  pub fn to_filters(&self) -> FilterState {
    FilterState {
      meal: self.meal.clone().unwrap_or_else(|| MEAL_ALL.to_string()),
      keywords: self.keywords.iter().cloned().collect(),
      match_mode: KeywordMatchMode::All,
      search: self.q.clone(),
      favorites_only: self.fav_only,
    }
  }
}

/// Decode a query string, with or without the leading `?`.
///
/// Unknown keys are ignored and only the first occurrence of a key counts.
pub fn decode_query(input: &str) -> UrlState {
  let input = input.trim();
  let input = input.strip_prefix('?').unwrap_or(input);

  let mut slug = None;
  let mut meal = None;
  let mut keywords = None;
  let mut q = None;
  let mut fav = None;

  for (key, value) in form_urlencoded::parse(input.as_bytes()) {
    let slot = match &*key {
      query::SLUG => &mut slug,
      query::MEAL => &mut meal,
      query::KEYWORDS => &mut keywords,
      query::SEARCH => &mut q,
      query::FAVORITES => &mut fav,
      _ => continue,
    };
    if slot.is_none() {
      *slot = Some(value.into_owned());
    }
  }

  let keywords = keywords
    .unwrap_or_default()
    .split(',')
    .map(str::trim)
    .filter(|k| !k.is_empty())
    .map(str::to_string)
    .collect();

  UrlState {
    slug: slug.filter(|s| !s.is_empty()),
    meal: meal.filter(|m| !m.is_empty() && m != MEAL_ALL),
    keywords,
    q: q.unwrap_or_default(),
    fav_only: fav.as_deref() == Some("1"),
  }
}

/// Encode to a query string without the leading `?`.
///
/// Defaults are omitted, so the default state encodes to an empty string.
pub fn encode_query(state: &UrlState) -> String {
  let mut out = form_urlencoded::Serializer::new(String::new());

  if let Some(slug) = state.slug.as_deref().filter(|s| !s.is_empty()) {
    out.append_pair(query::SLUG, slug);
  }
  if let Some(meal) = state.meal.as_deref().filter(|m| !m.is_empty() && *m != MEAL_ALL) {
    out.append_pair(query::MEAL, meal);
  }
  if !state.keywords.is_empty() {
    out.append_pair(query::KEYWORDS, &state.keywords.join(","));
  }
  let q = state.q.trim();
  if !q.is_empty() {
    out.append_pair(query::SEARCH, q);
  }
  if state.fav_only {
    out.append_pair(query::FAVORITES, "1");
  }

  out.finish()
}
