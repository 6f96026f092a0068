use super::{BoxedSearch, Search};
use crate::SearchError;

const NAME: &str = "binary";

/// A search that halves the sequence until it lands on the gap.
///
/// A sub-range `[first, last]` of indices contains the gap exactly when its
/// length differs from `sequence[last] - sequence[first] + 1`. Each call checks
/// that first, then looks at the boundary between the two halves, then recurses
/// into the left half and, if nothing turned up there, the right half.
///
/// Runs in O(log n) time with O(log n) recursion depth. A value missing from
/// either end of the original range leaves the full sequence contiguous, so
/// the first check already reports no gap.
///
/// # Examples
///
/// ```
/// use gapfinder_search::{Search, search::BinarySearch};
///
/// let search = BinarySearch::new();
/// assert_eq!(search.find_missing(&[1, 2, 3, 5]), Ok(Some(4)));
/// assert_eq!(search.find_missing(&[2, 3, 4, 5]), Ok(None));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySearch;

impl BinarySearch {
    /// Creates a new `BinarySearch`.
    #[must_use]
    pub const fn new() -> Self {
        BinarySearch
    }
}

impl Search for BinarySearch {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedSearch {
        Box::new(*self)
    }

    fn find_missing(&self, sequence: &[i32]) -> Result<Option<i32>, SearchError> {
        if sequence.is_empty() {
            return Err(SearchError::EmptySequence);
        }
        Ok(find_in(sequence, 0, sequence.len() - 1))
    }
}

// `first..=last` must be a valid, non-empty index range into `sequence`.
fn find_in(sequence: &[i32], first: usize, last: usize) -> Option<i32> {
    if is_contiguous(sequence, first, last) {
        return None;
    }

    // Not contiguous implies at least two elements, so `mid + 1 <= last`.
    let mid = first + (last - first) / 2;
    if sequence[mid] + 1 != sequence[mid + 1] {
        return Some(sequence[mid] + 1);
    }

    find_in(sequence, first, mid).or_else(|| find_in(sequence, mid + 1, last))
}

fn is_contiguous(sequence: &[i32], first: usize, last: usize) -> bool {
    let span = i64::from(sequence[last]) - i64::from(sequence[first]) + 1;
    i64::try_from(last - first + 1).is_ok_and(|count| count == span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SearchTester;

    #[test]
    fn test_internal_gap() {
        SearchTester::new([1, 2, 3, 4, 6, 7, 8, 9, 10]).assert_found(&BinarySearch::new(), 5);
        SearchTester::from_range(1, 3, 2).assert_found(&BinarySearch::new(), 2);
    }

    #[test]
    fn test_gap_at_every_interior_position() {
        for missing in 2..64 {
            SearchTester::from_range(1, 64, missing).assert_found(&BinarySearch::new(), missing);
        }
    }

    #[test]
    fn test_gap_next_to_endpoints() {
        SearchTester::from_range(1, 1_000_000, 2).assert_found(&BinarySearch::new(), 2);
        SearchTester::from_range(1, 1_000_000, 999_999)
            .assert_found(&BinarySearch::new(), 999_999);
    }

    #[test]
    fn test_endpoint_blind_spot() {
        SearchTester::from_range(1, 5, 5).assert_not_found(&BinarySearch::new());
        SearchTester::from_range(1, 5, 1).assert_not_found(&BinarySearch::new());
    }

    #[test]
    fn test_single_element() {
        SearchTester::new([42]).assert_not_found(&BinarySearch::new());
    }

    #[test]
    fn test_empty() {
        SearchTester::new(Vec::<i32>::new()).assert_empty_error(&BinarySearch::new());
    }

    #[test]
    fn test_contiguity_check() {
        let sequence = [1, 2, 3, 5, 6];
        assert!(is_contiguous(&sequence, 0, 2));
        assert!(is_contiguous(&sequence, 3, 4));
        assert!(is_contiguous(&sequence, 2, 2));
        assert!(!is_contiguous(&sequence, 0, 4));
        assert!(!is_contiguous(&sequence, 2, 3));
    }
}
