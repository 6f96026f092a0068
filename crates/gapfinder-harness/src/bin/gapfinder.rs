//! Gapfinder command-line harness.
//!
//! Generates one sequence per range `[1, 10^k]`, runs the selected searches
//! against it and prints a PASS/FAIL report with timings. Wrong answers are
//! reported but never change the exit status.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release
//! ```
//!
//! Reproduce a run and restrict it to the binary search on small cases:
//!
//! ```sh
//! cargo run --release -- --seed <HEX> --max-exponent 4 --search binary
//! ```
//!
//! Per-search timings are also logged at debug level:
//!
//! ```sh
//! RUST_LOG=debug cargo run --release
//! ```

use clap::Parser;
use gapfinder_generator::SequenceSeed;
use gapfinder_harness::{
    DEFAULT_MAX_EXPONENT, MAX_EXPONENT, RunSummary, Runner, SearchKind, power_of_ten_cases,
    select_searches,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Base seed as 64 hex digits. Every case seed is derived from it.
    #[arg(long, value_name = "HEX")]
    seed: Option<SequenceSeed>,

    /// Run cases [1, 10^1] through [1, 10^K]. At most 8; the last case holds about 400 MB.
    #[arg(
        long,
        value_name = "K",
        default_value_t = DEFAULT_MAX_EXPONENT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_EXPONENT)),
    )]
    max_exponent: u32,

    /// Search to run. Repeatable; all searches run when omitted.
    #[arg(long = "search", value_name = "KIND")]
    searches: Vec<SearchKind>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut runner = Runner::new(select_searches(&args.searches));
    if let Some(seed) = args.seed {
        runner = runner.with_base_seed(seed);
    }

    let cases = power_of_ten_cases(args.max_exponent);
    log::info!(
        "running {} cases with {} searches",
        cases.len(),
        runner.searches().len()
    );

    let mut summary = RunSummary::new();
    for (i, bounds) in cases.into_iter().enumerate() {
        let index = i + 1;
        println!("Generating test data for [{}, {}]...", bounds.first, bounds.last);
        match runner.run_case(index, bounds) {
            Ok(report) => {
                summary.record(&report);
                println!("{report}");
            }
            Err(e) => {
                log::warn!("skipping test #{index}: {e}");
                summary.record_skipped();
            }
        }
    }

    println!("{summary}");
    log::info!("finished: {summary}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_exponent_is_bounded() {
        assert!(Args::try_parse_from(["gapfinder", "--max-exponent", "8"]).is_ok());
        assert!(Args::try_parse_from(["gapfinder", "--max-exponent", "9"]).is_err());
        assert!(Args::try_parse_from(["gapfinder", "--max-exponent", "0"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gapfinder"]).unwrap();
        assert_eq!(args.max_exponent, DEFAULT_MAX_EXPONENT);
        assert!(args.seed.is_none());
        assert!(args.searches.is_empty());
    }
}
