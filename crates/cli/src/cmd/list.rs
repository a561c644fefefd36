//! List command: apply filter flags as one patch and print the result.

use anyhow::Result;
use clap::Args;
use pantry_lib::filter::{FilterPatch, KeywordMatchMode};

use pantry_lib::consts::MEAL_ALL;
use pantry_lib::recipe::RecipeCollection;

use super::{CliContext, print_frame};
use crate::output::print_warning;

#[derive(Debug, Default, Args)]
pub struct ListArgs {
  /// Meal category to show ("all" for every meal)
  #[arg(long)]
  pub meal: Option<String>,

  /// Required keyword; repeat for several. Replaces the current selection
  #[arg(short, long = "keyword", value_name = "KEYWORD")]
  pub keywords: Vec<String>,

  /// Match recipes having any of the keywords
  #[arg(long, conflicts_with = "all")]
  pub any: bool,

  /// Match recipes having all of the keywords
  #[arg(long)]
  pub all: bool,

  /// Free-text search over title, description, ingredients and steps
  #[arg(short, long)]
  pub search: Option<String>,

  /// Only show favourites
  #[arg(long, conflicts_with = "no_favorites")]
  pub favorites: bool,

  /// Show every recipe, not just favourites
  #[arg(long)]
  pub no_favorites: bool,
}

impl ListArgs {
  pub fn to_patch(&self) -> FilterPatch {
    let mut patch = FilterPatch::new();
    if let Some(meal) = &self.meal {
      patch = patch.meal(meal.trim());
    }
    if !self.keywords.is_empty() {
      patch = patch.keywords(self.keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()));
    }
    if self.any {
      patch = patch.match_mode(KeywordMatchMode::Any);
    } else if self.all {
      patch = patch.match_mode(KeywordMatchMode::All);
    }
    if let Some(search) = &self.search {
      patch = patch.search(search.clone());
    }
    if self.favorites {
      patch = patch.favorites_only(true);
    } else if self.no_favorites {
      patch = patch.favorites_only(false);
    }
    patch
  }
}

/// A meal no recipe is tagged with, if `--meal` names one.
fn unknown_meal<'a>(args: &'a ListArgs, collection: &RecipeCollection) -> Option<&'a str> {
  let meal = args.meal.as_deref()?.trim();
  if meal.is_empty() || meal == MEAL_ALL || collection.all_meals().iter().any(|m| m == meal) {
    return None;
  }
  Some(meal)
}

pub fn cmd_list(ctx: &CliContext, args: &ListArgs) -> Result<()> {
  let mut session = ctx.open_session();
  if let Some(meal) = unknown_meal(args, session.collection()) {
    print_warning(&format!(
      "No recipe is tagged with meal '{}'. Known meals: {}",
      meal,
      session.collection().all_meals().join(", ")
    ));
  }
  let patch = args.to_patch();
  if !patch.is_empty() {
    session.apply_patch(&patch);
  }
  print_frame(&mut session, ctx.output)
}
