//! Benchmark harness for the missing-value searches.
//!
//! The harness builds one fixture per configured range, runs every selected
//! search against it, times each call and checks the answer against the value
//! that was removed. Mismatches are reported, never fatal.
//!
//! # Examples
//!
//! ```
//! use gapfinder_generator::SequenceSeed;
//! use gapfinder_harness::{CaseBounds, Runner};
//! use gapfinder_search::search;
//!
//! let runner = Runner::new(search::all_searches()).with_base_seed(SequenceSeed::from_bytes([7; 32]));
//! let report = runner.run_case(1, CaseBounds::new(1, 100))?;
//! assert!(report.searches().iter().all(|search| search.verdict().is_pass()));
//! # Ok::<(), gapfinder_generator::GenerateError>(())
//! ```

pub use self::{cases::*, report::*, runner::*};

mod cases;
mod report;
mod runner;
