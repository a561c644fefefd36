//! Test fixtures for pantry-lib.
//!
//! The scenario collection has three recipes:
//!
//! | slug | meal      | keywords      | favourite |
//! |------|-----------|---------------|-----------|
//! | r1   | dinner    | spicy         | no        |
//! | r2   | lunch     | spicy, quick  | yes       |
//! | r3   | breakfast | -             | no        |

use crate::filter::Favorites;
use crate::recipe::{Recipe, RecipeCollection};
use crate::render::{ViewContext, Views};

fn recipe(slug: &str, title: &str, meal: &str, keywords: &[&str], ingredients: &[&str], steps: &[&str]) -> Recipe {
  let mut r = Recipe::new(slug, title);
  r.meals = vec![meal.to_string()];
  r.keywords = keywords.iter().map(|k| k.to_string()).collect();
  r.ingredients = ingredients.iter().map(|i| i.to_string()).collect();
  r.steps = steps.iter().map(|s| s.to_string()).collect();
  r
}

pub fn scenario_collection() -> RecipeCollection {
  let mut r1 = recipe(
    "r1",
    "Bean Chili",
    "dinner",
    &["spicy"],
    &["2 cans beans", "1 onion"],
    &["Simmer for an hour"],
  );
  r1.description = "Slow and smoky".to_string();

  let mut r2 = recipe(
    "r2",
    "Fish Tacos",
    "lunch",
    &["spicy", "quick"],
    &["4 tortillas", "white fish"],
    &["Fry the fish", "Assemble"],
  );
  r2.description = "Crispy".to_string();

  let r3 = recipe("r3", "Porridge", "breakfast", &[], &["oats", "milk"], &["Stir"]);

  RecipeCollection::new(vec![r1, r2, r3])
}

pub fn scenario_favorites() -> Favorites {
  ["r2".to_string()].into()
}

/// Records which views ran and what the detail view showed.
#[derive(Debug, Clone, Default)]
pub struct RecordingViews {
  calls: Vec<String>,
  lists: Vec<Option<String>>,
  details: Vec<Option<String>>,
}

impl RecordingViews {
  pub fn calls(&self) -> Vec<String> {
    self.calls.clone()
  }

  /// Active slug seen by the most recent detail refresh.
  pub fn last_detail(&self) -> Option<Option<String>> {
    self.details.last().cloned()
  }

  /// Active slug seen by the most recent list refresh.
  pub fn last_list(&self) -> Option<Option<String>> {
    self.lists.last().cloned()
  }

  pub fn clear(&mut self) {
    self.calls.clear();
    self.lists.clear();
    self.details.clear();
  }
}

impl Views for RecordingViews {
  fn keywords(&mut self, _ctx: &ViewContext<'_>) {
    self.calls.push("keywords".to_string());
  }

  fn list(&mut self, ctx: &ViewContext<'_>) {
    self.calls.push("list".to_string());
    self.lists.push(ctx.active_slug.map(str::to_string));
  }

  fn chips(&mut self, _ctx: &ViewContext<'_>) {
    self.calls.push("chips".to_string());
  }

  fn detail(&mut self, ctx: &ViewContext<'_>) {
    self.calls.push("detail".to_string());
    self.details.push(ctx.active_slug.map(str::to_string));
  }
}
