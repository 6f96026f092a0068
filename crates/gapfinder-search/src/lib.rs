//! Searches that recover the single missing value of an ascending sequence.
//!
//! Every search implements [`Search`] and reports one of three outcomes:
//!
//! - `Ok(Some(x))`: `x` is the missing value.
//! - `Ok(None)`: the search found no gap it can see.
//! - `Err(SearchError::EmptySequence)`: there was nothing to search.
//!
//! # Examples
//!
//! ```
//! use gapfinder_search::{Search, search};
//!
//! let sequence = [1, 2, 3, 4, 6, 7, 8, 9, 10];
//! for search in search::all_searches() {
//!     assert_eq!(search.find_missing(&sequence), Ok(Some(5)));
//! }
//! ```

pub use self::{error::*, search::Search};

mod error;
pub mod search;

#[cfg(test)]
mod testing;
