//! The generation loop.
//!
//! One loop drives every algorithm: ask the generator for a candidate, decide
//! against the [`Termination`] policy, then accept the candidate. Under
//! [`Termination::UntilCycle`] the first repeated raw value stops the run and
//! is not emitted; the iteration cap turns a run that never repeats into an
//! error instead of an unbounded loop.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use prng_core::types::ValidationError;
use tracing::{debug, warn};

use crate::algorithm::Generator;
use crate::error::GeneratorError;
use crate::params::GeneratorParams;
use crate::sequence::{Sequence, StopReason};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default iteration cap for cycle-terminated runs.
pub const DEFAULT_ITERATION_CAP: usize = 100_000;

/// When a run stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// Stop at the first repeated raw value; fail after `cap` values.
    UntilCycle {
        /// Maximum number of values before `DidNotTerminate`
        cap: usize,
    },
    /// Produce exactly this many values, repeats included.
    Count(usize),
}

impl Default for Termination {
    fn default() -> Self {
        Termination::UntilCycle {
            cap: DEFAULT_ITERATION_CAP,
        }
    }
}

impl Termination {
    fn validate(&self) -> Result<(), ValidationError> {
        let (name, value) = match self {
            Termination::UntilCycle { cap } => ("cap", *cap),
            Termination::Count(count) => ("count", *count),
        };
        if value == 0 {
            return Err(ValidationError::NotNatural {
                name,
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

/// Shared flag to stop a running generation from another thread.
///
/// # Examples
/// ```
/// use prng_generators::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Result of a cancellable run.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome<T> {
    /// The run finished under its termination policy.
    Completed(T),
    /// The token was cancelled; partial output is discarded.
    Cancelled {
        /// Values produced before cancellation was observed
        produced: usize,
    },
}

/// Runs one generation to completion.
///
/// # Errors
///
/// Initialisation errors from [`Generator::initialise`], a zero count or cap,
/// and `DidNotTerminate` when a cycle-terminated run reaches its cap.
///
/// # Examples
/// ```
/// use prng_generators::{generate, GeneratorParams, StopReason, Termination};
///
/// // 3^k mod 7 visits all six non-zero residues before repeating
/// let params = GeneratorParams::Multiplicative { seed: 1, multiplier: 3, modulus: 7 };
/// let sequence = generate(&params, Termination::default()).unwrap();
///
/// assert_eq!(sequence.raw(), &[3, 2, 6, 4, 5, 1]);
/// assert_eq!(sequence.stop_reason(), StopReason::CycleDetected { repeated: 3 });
/// ```
pub fn generate(params: &GeneratorParams, termination: Termination) -> Result<Sequence, GeneratorError> {
    match run(params, termination, None)? {
        RunOutcome::Completed(sequence) => Ok(sequence),
        // without a token the loop never observes cancellation
        RunOutcome::Cancelled { produced } => Err(GeneratorError::Cancelled { produced }),
    }
}

/// Runs one generation, checking `token` before every value.
///
/// # Errors
///
/// As [`generate`]. Cancellation is reported as `Ok(RunOutcome::Cancelled)`.
pub fn generate_cancellable(
    params: &GeneratorParams,
    termination: Termination,
    token: &CancellationToken,
) -> Result<RunOutcome<Sequence>, GeneratorError> {
    run(params, termination, Some(token))
}

fn run(
    params: &GeneratorParams,
    termination: Termination,
    token: Option<&CancellationToken>,
) -> Result<RunOutcome<Sequence>, GeneratorError> {
    termination.validate()?;
    let mut generator = Generator::initialise(params)?;

    let mut raw: Vec<u64> = Vec::new();
    let mut seen: HashSet<u64> = HashSet::new();

    let stop_reason = loop {
        if token.is_some_and(CancellationToken::is_cancelled) {
            generator.terminate();
            debug!(produced = raw.len(), "generation cancelled");
            return Ok(RunOutcome::Cancelled { produced: raw.len() });
        }

        if let Termination::Count(count) = termination {
            if raw.len() == count {
                break StopReason::CountReached;
            }
        }

        let candidate = generator.next_raw()?;

        if let Termination::UntilCycle { cap } = termination {
            if !seen.insert(candidate) {
                break StopReason::CycleDetected { repeated: candidate };
            }
            if raw.len() == cap {
                generator.terminate();
                warn!(
                    algorithm = generator.algorithm().code(),
                    cap, "generation reached iteration cap without repeating"
                );
                return Err(GeneratorError::DidNotTerminate { cap });
            }
        }

        raw.push(candidate);
        generator.update(candidate);
    };

    generator.terminate();
    debug!(
        algorithm = generator.algorithm().code(),
        length = raw.len(),
        ?stop_reason,
        "generation finished"
    );

    Ok(RunOutcome::Completed(Sequence::new(
        generator.algorithm(),
        raw,
        generator.divisor(),
        stop_reason,
    )))
}
