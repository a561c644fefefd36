use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Macro nutrient record. Every value is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub calories: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub protein: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub carbs: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fat: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fiber: Option<f64>,
}

/// A single recipe as found in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
  /// Stable unique identifier, the only cross-component key.
  pub slug: String,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub ingredients: Vec<String>,
  #[serde(default)]
  pub steps: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub keywords: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub meals: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total_weight_grams: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub macros: Option<Macros>,
}

impl Recipe {
  /// Create a recipe with only a slug and title set.
  pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
    Self {
      slug: slug.into(),
      title: title.into(),
      description: String::new(),
      ingredients: Vec::new(),
      steps: Vec::new(),
      keywords: Vec::new(),
      meals: Vec::new(),
      total_weight_grams: None,
      macros: None,
    }
  }

  pub fn has_keyword(&self, keyword: &str) -> bool {
    self.keywords.iter().any(|k| k == keyword)
  }

  pub fn has_meal(&self, meal: &str) -> bool {
    self.meals.iter().any(|m| m == meal)
  }

  /// Lower-cased text searched by free-text queries.
  ///
  /// Covers title, description, ingredients and steps. Keywords and meals are
  /// not part of it.
  pub fn search_haystack(&self) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(2 + self.ingredients.len() + self.steps.len());
    parts.push(&self.title);
    parts.push(&self.description);
    parts.extend(self.ingredients.iter().map(String::as_str));
    parts.extend(self.steps.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
  }
}

/// Immutable, ordered set of recipes for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCollection {
  recipes: Vec<Recipe>,
}

impl RecipeCollection {
  pub fn new(recipes: Vec<Recipe>) -> Self {
    Self { recipes }
  }

  pub fn empty() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.recipes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.recipes.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
    self.recipes.iter()
  }

  /// Look up a recipe by slug.
  pub fn get(&self, slug: &str) -> Option<&Recipe> {
    self.recipes.iter().find(|r| r.slug == slug)
  }

  pub fn contains(&self, slug: &str) -> bool {
    self.get(slug).is_some()
  }

  /// Every keyword used by any recipe, deduplicated and sorted.
  pub fn all_keywords(&self) -> Vec<String> {
    let set: BTreeSet<&str> = self
      .recipes
      .iter()
      .flat_map(|r| r.keywords.iter().map(String::as_str))
      .collect();
    set.into_iter().map(str::to_string).collect()
  }

  /// Every meal category used by any recipe, deduplicated and sorted.
  pub fn all_meals(&self) -> Vec<String> {
    let set: BTreeSet<&str> = self
      .recipes
      .iter()
      .flat_map(|r| r.meals.iter().map(String::as_str))
      .collect();
    set.into_iter().map(str::to_string).collect()
  }
}

impl<'a> IntoIterator for &'a RecipeCollection {
  type Item = &'a Recipe;
  type IntoIter = std::slice::Iter<'a, Recipe>;

  fn into_iter(self) -> Self::IntoIter {
    self.recipes.iter()
  }
}

impl From<Vec<Recipe>> for RecipeCollection {
  fn from(recipes: Vec<Recipe>) -> Self {
    Self::new(recipes)
  }
}
