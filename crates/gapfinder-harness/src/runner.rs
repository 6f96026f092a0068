//! Running searches against generated fixtures.

use std::time::Instant;

use gapfinder_generator::{Fixture, GenerateError, SequenceGenerator, SequenceSeed};
use gapfinder_search::search::{self, BoxedSearch};

use crate::{CaseBounds, CaseReport, SearchReport};

/// A search selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchKind {
    /// XOR of the expected range against the present values.
    Xor,
    /// Forward scan for the first unexpected successor.
    Linear,
    /// Recursive halving on the length-versus-span check.
    Binary,
}

impl SearchKind {
    /// Name of the search this kind selects, as reported by
    /// [`Search::name`](gapfinder_search::Search::name).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Xor => "xor",
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }
}

/// Returns the searches selected by `kinds` in report order, or all of them if `kinds` is empty.
#[must_use]
pub fn select_searches(kinds: &[SearchKind]) -> Vec<BoxedSearch> {
    search::all_searches()
        .into_iter()
        .filter(|search| {
            kinds.is_empty() || kinds.iter().any(|kind| kind.name() == search.name())
        })
        .collect()
}

/// Runs a fixed set of searches against one fixture per case.
///
/// Each search call is bracketed by monotonic clock reads, and its result is
/// judged against the fixture's expected value. Nothing here aborts on a wrong
/// answer.
#[derive(Debug, Clone)]
pub struct Runner {
    searches: Vec<BoxedSearch>,
    base_seed: Option<SequenceSeed>,
}

impl Runner {
    /// Creates a runner for `searches`, drawing a fresh seed for every case.
    #[must_use]
    pub fn new(searches: Vec<BoxedSearch>) -> Self {
        Self {
            searches,
            base_seed: None,
        }
    }

    /// Derives every case's seed from `seed`, making the run reproducible.
    #[must_use]
    pub fn with_base_seed(mut self, seed: SequenceSeed) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// The searches this runner executes.
    #[must_use]
    pub fn searches(&self) -> &[BoxedSearch] {
        &self.searches
    }

    /// Returns the seed used for the `index`-th case.
    #[must_use]
    pub fn seed_for(&self, index: usize) -> SequenceSeed {
        match self.base_seed {
            Some(base) => base.derive(u64::try_from(index).unwrap_or(u64::MAX)),
            None => SequenceSeed::random(),
        }
    }

    /// Generates the fixture for a case and runs every search against it.
    ///
    /// The fixture is dropped before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the case's range has no interior value.
    pub fn run_case(&self, index: usize, bounds: CaseBounds) -> Result<CaseReport, GenerateError> {
        let generator = SequenceGenerator::new(bounds.first, bounds.last);
        let fixture = generator.generate_with_seed(self.seed_for(index))?;
        Ok(self.check_fixture(index, &fixture))
    }

    /// Runs every search against an existing fixture.
    #[must_use]
    pub fn check_fixture(&self, index: usize, fixture: &Fixture) -> CaseReport {
        let expected = fixture.expected();
        let mut report = CaseReport::new(
            index,
            fixture.first(),
            fixture.last(),
            expected,
            fixture.seed(),
        );

        for search in &self.searches {
            let start = Instant::now();
            let result = search.find_missing(fixture.sequence());
            let elapsed = start.elapsed();

            log::debug!(
                "test #{index}: {} returned {result:?} in {elapsed:?}",
                search.name()
            );
            report.push(SearchReport::new(search.name(), result, elapsed, expected));
        }
        report
    }
}
