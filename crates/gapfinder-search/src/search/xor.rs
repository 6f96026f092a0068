use super::{BoxedSearch, Search};
use crate::SearchError;

const NAME: &str = "xor";

/// A search that cancels out every present value with XOR.
///
/// The XOR of every integer in `[first, last]` of the sequence is combined with
/// the XOR of every element actually present. Since `a ^ a == 0`, each present
/// value cancels and only the missing one survives.
///
/// Runs in O(n) time and O(1) extra space. Only the span between the first and
/// last element is considered, so a value missing from either end of the
/// original range is not seen and the result is `0`.
///
/// # Examples
///
/// ```
/// use gapfinder_search::{Search, search::XorSearch};
///
/// let search = XorSearch::new();
/// assert_eq!(search.find_missing(&[3, 4, 6, 7]), Ok(Some(5)));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct XorSearch;

impl XorSearch {
    /// Creates a new `XorSearch`.
    #[must_use]
    pub const fn new() -> Self {
        XorSearch
    }
}

impl Search for XorSearch {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedSearch {
        Box::new(*self)
    }

    fn find_missing(&self, sequence: &[i32]) -> Result<Option<i32>, SearchError> {
        let (Some(&first), Some(&last)) = (sequence.first(), sequence.last()) else {
            return Err(SearchError::EmptySequence);
        };

        let expected = (first..=last).fold(0, |acc, value| acc ^ value);
        let actual = sequence.iter().fold(0, |acc, &value| acc ^ value);
        Ok(Some(expected ^ actual))
    }
}
