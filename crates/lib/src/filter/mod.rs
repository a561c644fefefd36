//! Filter state, the filter predicate and the active-filter chips.

mod chips;
mod predicate;
mod state;

pub use chips::*;
pub use predicate::*;
pub use state::*;
