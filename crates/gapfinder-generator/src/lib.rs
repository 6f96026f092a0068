//! Test fixtures for missing-number searches.
//!
//! This crate builds ordered integer sequences covering a closed range `[M, N]`
//! with exactly one value removed, and records the removed value so that a
//! search result can be validated against it.
//!
//! # Overview
//!
//! - [`SequenceGenerator`]: holds the bounds of a range and produces fixtures,
//!   either with an explicit missing value or with one chosen at random from
//!   the open interval `(M, N)`.
//! - [`Fixture`]: the generated sequence paired with its expected answer.
//! - [`SequenceSeed`]: a 32-byte seed that makes random generation reproducible.
//!
//! # Examples
//!
//! ```
//! use gapfinder_generator::SequenceGenerator;
//!
//! let generator = SequenceGenerator::new(1, 10);
//!
//! // Explicit missing value
//! let fixture = generator.with_missing(5);
//! assert_eq!(fixture.sequence(), &[1, 2, 3, 4, 6, 7, 8, 9, 10]);
//! assert_eq!(fixture.expected(), 5);
//!
//! // Random missing value, never an endpoint
//! let fixture = generator.generate()?;
//! assert!(1 < fixture.expected() && fixture.expected() < 10);
//! assert_eq!(fixture.sequence().len(), 9);
//! # Ok::<(), gapfinder_generator::GenerateError>(())
//! ```

pub use self::{error::*, fixture::*, generator::*, seed::*};

mod error;
mod fixture;
mod generator;
mod seed;
