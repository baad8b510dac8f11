//! # Filter/Sort Engine
//!
//! Pure functions that turn the collection plus the search and sort inputs
//! into the list the user sees.

pub mod derive;
pub mod sort;

pub use derive::{derive, matches_query};
pub use sort::{SortKey, SortOrder, SortState};
