//! Example demonstrating fixture generation.
//!
//! This example shows how to:
//! - Create a `SequenceGenerator` for a range
//! - Generate a fixture with a random or explicit missing value
//! - Display the fixture and the seed that reproduces it
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_sequence -- --last 20
//! ```
//!
//! Remove a specific value (endpoints and out-of-range values are accepted):
//!
//! ```sh
//! cargo run --example generate_sequence -- --last 20 --missing 20
//! ```
//!
//! Reproduce a previous random fixture:
//!
//! ```sh
//! cargo run --example generate_sequence -- --last 20 --seed <HEX>
//! ```

use std::process;

use clap::Parser;
use gapfinder_generator::{Fixture, SequenceGenerator, SequenceSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Lower bound of the range.
    #[arg(long, value_name = "M", default_value_t = 1, allow_negative_numbers = true)]
    first: i32,

    /// Upper bound of the range.
    #[arg(long, value_name = "N", default_value_t = 10, allow_negative_numbers = true)]
    last: i32,

    /// Value to remove. Drawn at random from (M, N) when omitted.
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    missing: Option<i32>,

    /// Seed for the random draw, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "missing")]
    seed: Option<SequenceSeed>,
}

fn main() {
    let args = Args::parse();
    let generator = SequenceGenerator::new(args.first, args.last);

    let fixture = match (args.missing, args.seed) {
        (Some(missing), _) => generator.with_missing(missing),
        (None, seed) => {
            match generator.generate_with_seed(seed.unwrap_or_else(SequenceSeed::random)) {
                Ok(fixture) => fixture,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            }
        }
    };

    print_fixture(&fixture);
}

fn print_fixture(fixture: &Fixture) {
    if let Some(seed) = fixture.seed() {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    println!("Range:");
    println!("  [{}, {}]", fixture.first(), fixture.last());
    println!();
    println!("Missing:");
    println!("  {}", fixture.expected());
    println!();

    let values = fixture
        .sequence()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    println!("Sequence ({} values):", values.len());
    println!("  {}", values.join(" "));
}
