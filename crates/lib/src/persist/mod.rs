//! Persistence of filter state outside the session.
//!
//! Two independent sinks are kept in sync with the session:
//!
//! - the URL query string (shareable, carries the active slug)
//! - a key-value store (survives restarts, carries filters and favourites)
//!
//! # Formats
//!
//! ```text
//! ?slug=chili&meal=dinner&keywords=quick%2Cspicy&q=beans&fav=1
//!
//! recipeFilters   = {"meal":"dinner","keywords":["spicy"],"q":"","favOnly":false}
//! recipeFavorites = ["chili","tacos"]
//! ```
//!
//! Decoding never fails. Anything absent or malformed falls back to defaults.

mod history;
mod startup;
mod storage;
mod url;

pub use history::*;
pub use startup::*;
pub use storage::*;
pub use self::url::*;
