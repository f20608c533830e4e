//! # prng_generators: Generator Engine
//!
//! ## Role
//!
//! Deterministic integer recurrences that turn natural-number seeds and
//! constants into a finite [`Sequence`] of raw integers and their normalised
//! values:
//!
//! | Algorithm | Recurrence | Divisor |
//! |-----------|------------|---------|
//! | MSM (mid-square) | `x[n+1] = middle(x[n]²)` | `10^L` |
//! | MPM (mid-product) | `x[n] = middle(x[n-1] x[n-2])` | `10^L` |
//! | CMM (constant multiplier) | `x[n] = middle(c x[n-1])` | `10^L` |
//! | LCG | `x[n+1] = (a x[n] + c) mod m` | `m - 1` |
//! | MCG | `x[n+1] = a x[n] mod m` | `m - 1` |
//! | ACG | `x[n] = (x[n-1] + x[n-k]) mod m` | `m - 1` |
//! | QCG | `x[n+1] = (a x[n]² + b x[n] + c) mod m` | `m - 1` or `1` |
//! | BBS | `x[n+1] = x[n]² mod pq` | `pq - 1` |
//!
//! ## Design
//!
//! - **Static dispatch**: the eight algorithms are variants of one state
//!   enum driven by a single loop (`driver`)
//! - **Explicit termination**: every run names its [`Termination`] policy,
//!   either "until the first repeated raw value" (bounded by an iteration
//!   cap) or a fixed count
//! - **No silent wrapping**: modular arithmetic runs on reduced `u128`
//!   operands; the digit-extraction family rejects widths whose products
//!   cannot be represented
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_generators::{generate, GeneratorParams, Termination};
//!
//! let params = GeneratorParams::Linear { seed: 7, multiplier: 5, increment: 3, modulus: 16 };
//! let sequence = generate(&params, Termination::Count(5)).unwrap();
//!
//! assert_eq!(sequence.raw(), &[6, 1, 8, 11, 10]);
//! assert!((sequence.values()[0] - 0.4).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod algorithm;
mod digits;
mod driver;
mod error;
mod params;
mod sequence;

pub use algorithm::{Bounds, Generator, Phase};
pub use digits::{digit_count, middle_digits, MAX_DIGIT_WIDTH};
pub use driver::{
    generate, generate_cancellable, CancellationToken, RunOutcome, Termination,
    DEFAULT_ITERATION_CAP,
};
pub use error::GeneratorError;
pub use params::{Algorithm, GeneratorParams, QcgNormalisation};
pub use sequence::{Sequence, StopReason};
