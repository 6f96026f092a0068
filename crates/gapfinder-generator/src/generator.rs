//! Fixture generation over a closed integer range.

use rand::{RngExt, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::{Fixture, GenerateError, SequenceSeed};

/// Generates fixtures covering the closed range `[first, last]`.
///
/// The generator itself is just a pair of bounds; every call produces a new,
/// independent [`Fixture`].
///
/// Two modes are available:
///
/// - **Explicit** ([`with_missing`](Self::with_missing)): the caller chooses the
///   missing value. No validation is done, so an endpoint or an out-of-range
///   value is accepted as-is.
/// - **Random** ([`generate`](Self::generate) and friends): the missing value
///   is drawn uniformly from the open interval `(first, last)`, so the result
///   always starts at `first`, ends at `last` and has an internal gap.
///
/// # Examples
///
/// ```
/// use gapfinder_generator::SequenceGenerator;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let generator = SequenceGenerator::new(1, 100);
/// let mut rng = Pcg64::seed_from_u64(7);
/// let fixture = generator.generate_with_rng(&mut rng)?;
///
/// let sequence = fixture.sequence();
/// assert_eq!(sequence.first(), Some(&1));
/// assert_eq!(sequence.last(), Some(&100));
/// assert!(!sequence.contains(&fixture.expected()));
/// # Ok::<(), gapfinder_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceGenerator {
    first: i32,
    last: i32,
}

impl SequenceGenerator {
    /// Creates a generator for the range `[first, last]`.
    #[must_use]
    pub const fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    /// Builds a fixture with `missing` removed from the range.
    #[must_use]
    pub fn with_missing(&self, missing: i32) -> Fixture {
        Fixture::new(self.first, self.last, missing, None)
    }

    /// Builds a fixture with a random interior value removed, using a fresh seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RangeTooNarrow`] if no value lies strictly
    /// between the bounds.
    pub fn generate(&self) -> Result<Fixture, GenerateError> {
        self.generate_with_seed(SequenceSeed::random())
    }

    /// Builds a fixture with a random interior value removed, drawn from `seed`.
    ///
    /// The same seed always produces the same fixture, and the fixture records
    /// the seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RangeTooNarrow`] if no value lies strictly
    /// between the bounds.
    pub fn generate_with_seed(&self, seed: SequenceSeed) -> Result<Fixture, GenerateError> {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let missing = self.pick_missing(&mut rng)?;
        Ok(Fixture::new(self.first, self.last, missing, Some(seed)))
    }

    /// Builds a fixture with a random interior value removed, drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RangeTooNarrow`] if no value lies strictly
    /// between the bounds.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<Fixture, GenerateError>
    where
        R: RngExt,
    {
        let missing = self.pick_missing(rng)?;
        Ok(Fixture::new(self.first, self.last, missing, None))
    }

    fn pick_missing<R>(&self, rng: &mut R) -> Result<i32, GenerateError>
    where
        R: RngExt,
    {
        if i64::from(self.last) - i64::from(self.first) < 2 {
            return Err(GenerateError::RangeTooNarrow {
                first: self.first,
                last: self.last,
            });
        }
        Ok(rng.random_range(self.first + 1..self.last))
    }
}
