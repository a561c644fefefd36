use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::MEAL_ALL;

/// Set of favourite recipe slugs.
pub type Favorites = BTreeSet<String>;

/// How selected keywords combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMatchMode {
  /// Every selected keyword must be present.
  #[default]
  All,
  /// At least one selected keyword must be present.
  Any,
}

impl KeywordMatchMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      KeywordMatchMode::All => "all",
      KeywordMatchMode::Any => "any",
    }
  }
}

impl fmt::Display for KeywordMatchMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for KeywordMatchMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "all" => Ok(KeywordMatchMode::All),
      "any" => Ok(KeywordMatchMode::Any),
      other => Err(format!("unknown keyword match mode: {}", other)),
    }
  }
}

/// Current narrowing criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
  /// Meal category, or [`MEAL_ALL`].
  pub meal: String,
  pub keywords: BTreeSet<String>,
  /// Only meaningful while `keywords` is non-empty, but kept either way.
  pub match_mode: KeywordMatchMode,
  /// Raw search text as typed. Matching trims and lower-cases it.
  pub search: String,
  pub favorites_only: bool,
}

impl Default for FilterState {
  fn default() -> Self {
    Self {
      meal: MEAL_ALL.to_string(),
      keywords: BTreeSet::new(),
      match_mode: KeywordMatchMode::All,
      search: String::new(),
      favorites_only: false,
    }
  }
}

impl FilterState {
  pub fn meal_filter(&self) -> Option<&str> {
    if self.meal == MEAL_ALL {
      None
    } else {
      Some(self.meal.as_str())
    }
  }

  /// Trimmed, lower-cased search text.
  pub fn search_query(&self) -> String {
    self.search.trim().to_lowercase()
  }

  /// Whether any criterion differs from its default.
  ///
  /// The match mode alone does not narrow anything and is not counted.
  pub fn has_filters(&self) -> bool {
    self.meal_filter().is_some() || !self.keywords.is_empty() || !self.search.trim().is_empty() || self.favorites_only
  }

  /// Merge every field present in `patch`, leaving the rest untouched.
  pub fn apply(&mut self, patch: &FilterPatch) {
    if let Some(meal) = &patch.meal {
      let meal = meal.trim();
      // A blank meal means no meal filter, matching what the URL and storage encode.
      self.meal = if meal.is_empty() { MEAL_ALL.to_string() } else { meal.to_string() };
    }
    if let Some(keywords) = &patch.keywords {
      self.keywords = keywords.clone();
    }
    if let Some(mode) = patch.match_mode {
      self.match_mode = mode;
    }
    if let Some(search) = &patch.search {
      self.search = search.clone();
    }
    if let Some(favorites_only) = patch.favorites_only {
      self.favorites_only = favorites_only;
    }
  }
}

/// A sparse change to [`FilterState`]. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
  pub meal: Option<String>,
  pub keywords: Option<BTreeSet<String>>,
  pub match_mode: Option<KeywordMatchMode>,
  pub search: Option<String>,
  pub favorites_only: Option<bool>,
}

impl FilterPatch {
  pub fn new() -> Self {
    Self::default()
  }

  /// Patch that resets every criterion, including the match mode.
  pub fn cleared() -> Self {
    Self {
      meal: Some(MEAL_ALL.to_string()),
      keywords: Some(BTreeSet::new()),
      match_mode: Some(KeywordMatchMode::All),
      search: Some(String::new()),
      favorites_only: Some(false),
    }
  }

  pub fn meal(mut self, meal: impl Into<String>) -> Self {
    self.meal = Some(meal.into());
    self
  }

  pub fn keywords<I, S>(mut self, keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.keywords = Some(keywords.into_iter().map(Into::into).collect());
    self
  }

  pub fn match_mode(mut self, mode: KeywordMatchMode) -> Self {
    self.match_mode = Some(mode);
    self
  }

  pub fn search(mut self, search: impl Into<String>) -> Self {
    self.search = Some(search.into());
    self
  }

  pub fn favorites_only(mut self, favorites_only: bool) -> Self {
    self.favorites_only = Some(favorites_only);
    self
  }

  pub fn is_empty(&self) -> bool {
    self == &Self::default()
  }
}
