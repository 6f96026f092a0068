/// Errors reported by a [`Search`](crate::Search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The sequence has no elements, so there is no range to search.
    #[display("sequence is empty")]
    EmptySequence,
}
