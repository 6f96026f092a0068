//! Per-case reports and the run summary.

use std::{
    fmt::{self, Display},
    time::Duration,
};

use gapfinder_generator::SequenceSeed;
use gapfinder_search::SearchError;

const LABEL_WIDTH: usize = 26;
const BANNER: &str = "###################################";
const RULE: &str = "==========================";

/// Whether a search returned the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Verdict {
    /// The search returned exactly the removed value.
    Pass,
    /// The search returned something else, nothing, or an error.
    Fail,
}

impl Verdict {
    /// Judges a search result against the expected missing value.
    #[must_use]
    pub fn judge(result: Result<Option<i32>, SearchError>, expected: i32) -> Self {
        if result == Ok(Some(expected)) {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

/// The outcome of running one search against one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    name: &'static str,
    result: Result<Option<i32>, SearchError>,
    elapsed: Duration,
    verdict: Verdict,
}

impl SearchReport {
    /// Creates a report and judges `result` against `expected`.
    #[must_use]
    pub fn new(
        name: &'static str,
        result: Result<Option<i32>, SearchError>,
        elapsed: Duration,
        expected: i32,
    ) -> Self {
        Self {
            name,
            result,
            elapsed,
            verdict: Verdict::judge(result, expected),
        }
    }

    /// Name of the search.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// What the search returned.
    #[must_use]
    pub fn result(&self) -> Result<Option<i32>, SearchError> {
        self.result
    }

    /// Whether the search returned the expected value.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{} missing number:", self.name);
        match (self.verdict, self.result) {
            (Verdict::Pass, _) => write_line(f, &label, "PASS")?,
            (Verdict::Fail, Ok(Some(value))) => write_line(f, &label, format!("FAIL (got {value})"))?,
            (Verdict::Fail, Ok(None)) => write_line(f, &label, "FAIL (got nothing)")?,
            (Verdict::Fail, Err(e)) => write_line(f, &label, format!("FAIL (got error: {e})"))?,
        }
        write_line(
            f,
            "Execution time:",
            format!("{} µs", self.elapsed.as_micros()),
        )
    }
}

/// The report block for one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    index: usize,
    first: i32,
    last: i32,
    expected: i32,
    seed: Option<SequenceSeed>,
    searches: Vec<SearchReport>,
}

impl CaseReport {
    /// Creates an empty report for the `index`-th case (1-based).
    #[must_use]
    pub fn new(index: usize, first: i32, last: i32, expected: i32, seed: Option<SequenceSeed>) -> Self {
        Self {
            index,
            first,
            last,
            expected,
            seed,
            searches: Vec::new(),
        }
    }

    /// Appends the outcome of one search.
    pub fn push(&mut self, search: SearchReport) {
        self.searches.push(search);
    }

    /// Index of the case, starting at 1.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The value removed from the range.
    #[must_use]
    pub fn expected(&self) -> i32 {
        self.expected
    }

    /// Per-search outcomes, in the order they ran.
    #[must_use]
    pub fn searches(&self) -> &[SearchReport] {
        &self.searches
    }

    /// Number of searches that returned the expected value.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.searches
            .iter()
            .filter(|search| search.verdict.is_pass())
            .count()
    }
}

impl Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "# Test #{}", self.index)?;
        writeln!(f, "{BANNER}")?;
        write_line(f, "Range:", format!("[{}, {}]", self.first, self.last))?;
        if let Some(seed) = self.seed {
            write_line(f, "Seed:", seed)?;
        }
        write_line(f, "Expected:", self.expected)?;
        for search in &self.searches {
            writeln!(f, "{RULE}")?;
            write!(f, "{search}")?;
        }
        Ok(())
    }
}

/// Pass/fail totals over a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of checks that passed.
    pub passed: usize,
    /// Number of checks performed (cases run times searches per case).
    pub total: usize,
    /// Number of cases that could not be generated.
    pub skipped: usize,
}

impl RunSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the checks of one case.
    pub fn record(&mut self, report: &CaseReport) {
        self.passed += report.passed();
        self.total += report.searches().len();
    }

    /// Counts a case that was skipped.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passed {}/{} checks", self.passed, self.total)?;
        if self.skipped > 0 {
            write!(f, " ({} cases skipped)", self.skipped)?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, label: &str, value: impl Display) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CaseReport {
        let mut report = CaseReport::new(1, 1, 5, 5, None);
        report.push(SearchReport::new("xor", Ok(Some(5)), Duration::from_micros(3), 5));
        report.push(SearchReport::new("linear", Ok(None), Duration::from_micros(1), 5));
        report.push(SearchReport::new(
            "binary",
            Err(SearchError::EmptySequence),
            Duration::ZERO,
            5,
        ));
        report
    }

    #[test]
    fn test_judge() {
        assert!(Verdict::judge(Ok(Some(5)), 5).is_pass());
        assert!(Verdict::judge(Ok(Some(4)), 5).is_fail());
        assert!(Verdict::judge(Ok(None), 5).is_fail());
        assert!(Verdict::judge(Err(SearchError::EmptySequence), 5).is_fail());
    }

    #[test]
    fn test_case_report_render() {
        let rendered = report().to_string();
        let expected = "\
###################################
# Test #1
###################################
Range:                    [1, 5]
Expected:                 5
==========================
xor missing number:       PASS
Execution time:           3 µs
==========================
linear missing number:    FAIL (got nothing)
Execution time:           1 µs
==========================
binary missing number:    FAIL (got error: sequence is empty)
Execution time:           0 µs
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_seed_line_is_shown() {
        let seed = SequenceSeed::from_bytes([0xab; 32]);
        let rendered = CaseReport::new(2, 1, 10, 4, Some(seed)).to_string();
        assert!(rendered.contains(&format!("Seed:                     {seed}\n")));
    }

    #[test]
    fn test_wrong_value_is_shown() {
        let search = SearchReport::new("xor", Ok(Some(0)), Duration::ZERO, 5);
        assert!(search.to_string().starts_with("xor missing number:       FAIL (got 0)\n"));
    }

    #[test]
    fn test_summary() {
        let mut summary = RunSummary::new();
        summary.record(&report());
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.to_string(), "Passed 1/3 checks");

        summary.record_skipped();
        assert_eq!(summary.to_string(), "Passed 1/3 checks (1 cases skipped)");
    }
}
