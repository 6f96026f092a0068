use super::{BoxedSearch, Search};
use crate::SearchError;

const NAME: &str = "linear";

/// A search that scans forward for the first unexpected successor.
///
/// Starting from the first element, each element is compared with the value
/// one greater than its predecessor. The first mismatch means that expected
/// value is missing.
///
/// Runs in O(k) time where k is the position of the gap. A value missing from
/// the end of the range has no successor to mismatch, so it is never
/// detected.
///
/// # Examples
///
/// ```
/// use gapfinder_search::{Search, search::LinearSearch};
///
/// let search = LinearSearch::new();
/// assert_eq!(search.find_missing(&[1, 2, 4, 5]), Ok(Some(3)));
/// assert_eq!(search.find_missing(&[1, 2, 3, 4]), Ok(None));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearSearch;

impl LinearSearch {
    /// Creates a new `LinearSearch`.
    #[must_use]
    pub const fn new() -> Self {
        LinearSearch
    }
}

impl Search for LinearSearch {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedSearch {
        Box::new(*self)
    }

    fn find_missing(&self, sequence: &[i32]) -> Result<Option<i32>, SearchError> {
        let Some((&first, rest)) = sequence.split_first() else {
            return Err(SearchError::EmptySequence);
        };

        let mut current = first;
        for &value in rest {
            let expected = current + 1;
            if value != expected {
                return Ok(Some(expected));
            }
            current = value;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SearchTester;

    #[test]
    fn test_internal_gap() {
        SearchTester::new([1, 2, 3, 4, 6, 7, 8, 9, 10]).assert_found(&LinearSearch::new(), 5);
        SearchTester::from_range(1, 1000, 2).assert_found(&LinearSearch::new(), 2);
        SearchTester::from_range(1, 1000, 999).assert_found(&LinearSearch::new(), 999);
    }

    #[test]
    fn test_missing_last_is_not_detected() {
        SearchTester::from_range(1, 5, 5).assert_not_found(&LinearSearch::new());
    }

    #[test]
    fn test_missing_first_is_not_detected() {
        SearchTester::from_range(1, 5, 1).assert_not_found(&LinearSearch::new());
    }

    #[test]
    fn test_single_element() {
        SearchTester::new([i32::MAX]).assert_not_found(&LinearSearch::new());
    }

    #[test]
    fn test_empty() {
        SearchTester::new(Vec::<i32>::new()).assert_empty_error(&LinearSearch::new());
    }
}
