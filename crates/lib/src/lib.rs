//! pantry-lib: recipe browsing engine for pantry
//!
//! This crate owns the state behind a recipe browser and keeps it consistent:
//! - `recipe`: the read-only recipe collection and its data provider
//! - `filter`: filter state, the filter predicate and active-filter chips
//! - `persist`: URL and key-value storage encodings, startup precedence, history
//! - `render`: which views refresh after a change, and selection repair
//! - `session`: the single mutation path tying it all together

pub mod config;
pub mod consts;
pub mod filter;
pub mod persist;
pub mod platform;
pub mod recipe;
pub mod render;
pub mod session;
pub mod util;

pub use session::{Action, Session, SessionError, SessionSnapshot};
