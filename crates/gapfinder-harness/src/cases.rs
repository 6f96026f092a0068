/// Number of cases run when no limit is given: `[1, 10]` up to `[1, 10^8]`.
pub const DEFAULT_MAX_EXPONENT: u32 = 8;

/// Largest supported exponent. The `[1, 10^8]` fixture already holds about 400 MB.
pub const MAX_EXPONENT: u32 = 8;

/// Bounds of the range a test case is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseBounds {
    /// Lower bound, inclusive.
    pub first: i32,
    /// Upper bound, inclusive.
    pub last: i32,
}

impl CaseBounds {
    /// Creates bounds for `[first, last]`.
    #[must_use]
    pub const fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }
}

/// Returns the cases `[1, 10^k]` for `k` in `1..=max_exponent`.
///
/// `max_exponent` is clamped to [`MAX_EXPONENT`].
///
/// # Examples
///
/// ```
/// use gapfinder_harness::{CaseBounds, power_of_ten_cases};
///
/// assert_eq!(
///     power_of_ten_cases(3),
///     [CaseBounds::new(1, 10), CaseBounds::new(1, 100), CaseBounds::new(1, 1000)]
/// );
/// ```
#[must_use]
pub fn power_of_ten_cases(max_exponent: u32) -> Vec<CaseBounds> {
    (1..=max_exponent.min(MAX_EXPONENT))
        .map(|exponent| CaseBounds::new(1, 10_i32.pow(exponent)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cases() {
        let cases = power_of_ten_cases(DEFAULT_MAX_EXPONENT);
        assert_eq!(cases.len(), 8);
        assert_eq!(cases.first(), Some(&CaseBounds::new(1, 10)));
        assert_eq!(cases.last(), Some(&CaseBounds::new(1, 100_000_000)));
        assert!(cases.iter().all(|case| case.first == 1));
    }

    #[test]
    fn test_exponent_is_clamped() {
        for max_exponent in [MAX_EXPONENT + 1, u32::MAX] {
            let cases = power_of_ten_cases(max_exponent);
            assert_eq!(cases.len(), 8);
            assert_eq!(cases.last(), Some(&CaseBounds::new(1, 100_000_000)));
        }
    }

    #[test]
    fn test_zero_exponent_is_empty() {
        assert!(power_of_ten_cases(0).is_empty());
    }
}
