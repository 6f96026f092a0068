//! Missing-value search algorithms.
//!
//! This module provides the three searches benchmarked by the harness. Each one
//! implements the [`Search`] trait and can be run against any ascending slice.

use std::fmt::Debug;

pub use self::{binary::BinarySearch, linear::LinearSearch, xor::XorSearch};
use crate::SearchError;

mod binary;
mod linear;
mod xor;

/// Returns all available searches.
///
/// The order is the order the harness reports them in: XOR, linear, binary.
///
/// # Examples
///
/// ```
/// use gapfinder_search::search;
///
/// let names = search::all_searches()
///     .iter()
///     .map(|search| search.name())
///     .collect::<Vec<_>>();
/// assert_eq!(names, ["xor", "linear", "binary"]);
/// ```
#[must_use]
pub fn all_searches() -> Vec<BoxedSearch> {
    vec![
        Box::new(XorSearch::new()),
        Box::new(LinearSearch::new()),
        Box::new(BinarySearch::new()),
    ]
}

/// A trait representing a missing-value search.
///
/// Implementations assume the input is strictly ascending with at most one
/// value missing from the range it spans.
pub trait Search: Debug + Send + Sync {
    /// Returns the name of the search.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the search.
    fn clone_box(&self) -> BoxedSearch;

    /// Looks for the missing value in `sequence`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(x))` - `x` is missing from the sequence
    /// * `Ok(None)` - No gap was detected
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptySequence`] if `sequence` is empty.
    fn find_missing(&self, sequence: &[i32]) -> Result<Option<i32>, SearchError>;
}

/// A boxed search.
pub type BoxedSearch = Box<dyn Search>;

impl Clone for BoxedSearch {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
