//! Filtering pipeline.
//!
//! A [`FilterState`] snapshot plus the immutable dataset is everything
//! needed to derive what the screen shows: [`visible_items`] produces
//! the ordered rows, [`highlight_spans`] decorates their text with the
//! same matcher that selected them.

mod engine;
mod highlight;
mod query;

pub use engine::{visible_items, FilterState};
pub use highlight::highlight_spans;
pub use query::QueryMatcher;
