/// Errors returned when a fixture cannot be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// Random mode needs at least one value strictly between the bounds.
    #[display("range [{first}, {last}] has no interior value to remove")]
    RangeTooNarrow {
        /// Lower bound of the range.
        first: i32,
        /// Upper bound of the range.
        last: i32,
    },
}

/// Errors returned when parsing a [`SequenceSeed`](crate::SequenceSeed) from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input does not have exactly 64 hex digits.
    #[display("seed must be {expected} hex digits, got {len}")]
    InvalidLength {
        /// Number of bytes in the input.
        len: usize,
        /// Number of hex digits required.
        expected: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex digit at position {position}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
    },
}
