//! Recipe data and the read-only collection it is loaded into.
//!
//! Recipes are loaded once per session from a [`RecipeSource`] and never
//! mutated afterwards. Every other component refers to a recipe by its slug.

mod load;
mod types;

pub use load::*;
pub use types::*;
