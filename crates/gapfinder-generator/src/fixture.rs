//! Generated sequences paired with their expected answers.

use crate::SequenceSeed;

/// An ordered sequence covering `[first, last]` with one value removed.
///
/// A fixture is built by [`SequenceGenerator`](crate::SequenceGenerator) and is
/// read-only afterwards: searches see only [`sequence`](Self::sequence), and the
/// removed value is kept aside in [`expected`](Self::expected) for validation.
///
/// If the missing value lies outside `[first, last]` nothing is removed and the
/// sequence is the full range.
///
/// # Examples
///
/// ```
/// use gapfinder_generator::SequenceGenerator;
///
/// // Endpoint removed: the sequence is truncated rather than gapped.
/// let fixture = SequenceGenerator::new(1, 5).with_missing(5);
/// assert_eq!(fixture.sequence(), &[1, 2, 3, 4]);
///
/// // Value outside the range: nothing is removed.
/// let fixture = SequenceGenerator::new(1, 5).with_missing(42);
/// assert_eq!(fixture.sequence(), &[1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    first: i32,
    last: i32,
    missing: i32,
    seed: Option<SequenceSeed>,
    sequence: Vec<i32>,
    generated: bool,
}

impl Fixture {
    pub(crate) fn new(first: i32, last: i32, missing: i32, seed: Option<SequenceSeed>) -> Self {
        let mut fixture = Self {
            first,
            last,
            missing,
            seed,
            sequence: Vec::new(),
            generated: false,
        };
        fixture.generate();
        fixture
    }

    /// Builds the sequence if it has not been built yet.
    ///
    /// Fixtures returned by the generator are already built, so calling this
    /// again leaves the sequence untouched.
    pub fn generate(&mut self) {
        if self.generated {
            return;
        }

        let span = i64::from(self.last) - i64::from(self.first) + 1;
        let mut sequence = Vec::with_capacity(usize::try_from(span).unwrap_or(0));
        sequence.extend((self.first..=self.last).filter(|&value| value != self.missing));
        self.sequence = sequence;
        self.generated = true;

        log::debug!(
            "generated [{}, {}] without {} ({} values)",
            self.first,
            self.last,
            self.missing,
            self.sequence.len()
        );
    }

    /// Lower bound of the range the sequence was drawn from.
    #[must_use]
    pub fn first(&self) -> i32 {
        self.first
    }

    /// Upper bound of the range the sequence was drawn from.
    #[must_use]
    pub fn last(&self) -> i32 {
        self.last
    }

    /// The value removed from the range.
    #[must_use]
    pub fn expected(&self) -> i32 {
        self.missing
    }

    /// The seed the missing value was drawn with, if generated from a seed.
    #[must_use]
    pub fn seed(&self) -> Option<SequenceSeed> {
        self.seed
    }

    /// The generated sequence, strictly ascending.
    #[must_use]
    pub fn sequence(&self) -> &[i32] {
        &self.sequence
    }
}
