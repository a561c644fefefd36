//! Shared constants.

/// Application name, used for platform directories.
pub const APP_NAME: &str = "pantry";

/// Sentinel meal filter value meaning "no meal restriction".
pub const MEAL_ALL: &str = "all";

/// Storage key holding the persisted filter record.
pub const STORAGE_KEY_FILTERS: &str = "recipeFilters";

/// Storage key holding the JSON array of favourite slugs.
pub const STORAGE_KEY_FAVORITES: &str = "recipeFavorites";

/// Default recipe data file name inside the data directory.
pub const RECIPES_FILENAME: &str = "recipes.json";

/// Directory name for the key-value storage inside the data directory.
pub const STORAGE_DIR: &str = "storage";

/// Environment variable overriding the recipe data file.
pub const ENV_RECIPES: &str = "PANTRY_RECIPES";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "PANTRY_DATA_DIR";

/// URL query keys.
pub mod query {
  pub const SLUG: &str = "slug";
  pub const MEAL: &str = "meal";
  pub const KEYWORDS: &str = "keywords";
  pub const SEARCH: &str = "q";
  pub const FAVORITES: &str = "fav";
}
