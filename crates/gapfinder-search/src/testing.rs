//! Test utilities for search implementations.
//!
//! This module provides [`SearchTester`], a small harness for checking what a
//! search returns for a given sequence.
//!
//! # Example
//!
//! ```ignore
//! SearchTester::from_range(1, 10, 5)
//!     .assert_found(&XorSearch::new(), 5)
//!     .assert_found(&LinearSearch::new(), 5);
//! ```

use gapfinder_generator::SequenceGenerator;

use crate::{Search, SearchError};

/// A test harness for verifying search implementations.
///
/// # Method Chaining
///
/// All assertion methods return `self`, so several searches can be checked
/// against the same sequence in one expression.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SearchTester {
    sequence: Vec<i32>,
}

impl SearchTester {
    /// Creates a new tester for an explicit sequence.
    pub fn new<T>(sequence: T) -> Self
    where
        T: Into<Vec<i32>>,
    {
        Self {
            sequence: sequence.into(),
        }
    }

    /// Creates a new tester for `[first, last]` with `missing` removed.
    pub fn from_range(first: i32, last: i32, missing: i32) -> Self {
        let fixture = SequenceGenerator::new(first, last).with_missing(missing);
        Self::new(fixture.sequence())
    }

    /// Asserts that the search reports `expected` as the missing value.
    #[track_caller]
    pub fn assert_found(self, search: &dyn Search, expected: i32) -> Self {
        self.assert_result(search, Ok(Some(expected)))
    }

    /// Asserts that the search reports no gap.
    #[track_caller]
    pub fn assert_not_found(self, search: &dyn Search) -> Self {
        self.assert_result(search, Ok(None))
    }

    /// Asserts that the search rejects the sequence as empty.
    #[track_caller]
    pub fn assert_empty_error(self, search: &dyn Search) -> Self {
        self.assert_result(search, Err(SearchError::EmptySequence))
    }

    #[track_caller]
    fn assert_result(self, search: &dyn Search, expected: Result<Option<i32>, SearchError>) -> Self {
        let actual = search.find_missing(&self.sequence);
        assert_eq!(
            actual,
            expected,
            "{} search returned {actual:?}, expected {expected:?}\n  sequence: {}",
            search.name(),
            self.summary(),
        );
        self
    }

    fn summary(&self) -> String {
        const SHOWN: usize = 16;
        let values = self
            .sequence
            .iter()
            .take(SHOWN)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        if self.sequence.len() > SHOWN {
            format!("{values} ... ({} values)", self.sequence.len())
        } else {
            values
        }
    }
}
