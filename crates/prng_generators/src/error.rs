//! Error types for the generator engine.
//!
//! All variants except `DidNotTerminate` and `Cancelled` are raised while
//! initialising a generator, before the first value is produced.

use prng_core::types::ValidationError;
use thiserror::Error;

/// Generator errors.
///
/// # Examples
/// ```
/// use prng_generators::GeneratorError;
///
/// let err = GeneratorError::DegenerateModulus { modulus: 1 };
/// assert!(err.to_string().contains("modulus > 1"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeneratorError {
    /// A parameter failed validation (non-natural value, empty seed list).
    #[error(transparent)]
    InvalidParameter(#[from] ValidationError),

    /// A structural constraint of the algorithm does not hold
    /// (e.g. Blum Blum Shub primes not congruent to 3 mod 4).
    #[error("Structural constraint violated: {0}")]
    StructuralConstraint(String),

    /// Modulus too small to normalise by `m - 1`.
    #[error("Degenerate modulus {modulus}: normalisation requires modulus > 1")]
    DegenerateModulus {
        /// The rejected modulus
        modulus: u64,
    },

    /// An intermediate value cannot be represented exactly.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// A cycle-terminated run hit its iteration cap without repeating.
    #[error("Generation did not terminate within {cap} iterations")]
    DidNotTerminate {
        /// The iteration cap that was reached
        cap: usize,
    },

    /// The run was cancelled through its cancellation token.
    #[error("Generation cancelled after {produced} values")]
    Cancelled {
        /// Number of values produced before cancellation
        produced: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let inner = ValidationError::NotNatural {
            name: "seed",
            value: "0".to_string(),
        };
        let err: GeneratorError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_did_not_terminate_display() {
        let err = GeneratorError::DidNotTerminate { cap: 100 };
        assert_eq!(
            err.to_string(),
            "Generation did not terminate within 100 iterations"
        );
    }

    #[test]
    fn test_structural_display() {
        let err = GeneratorError::StructuralConstraint("p = 5 is not congruent to 3 mod 4".into());
        assert!(err.to_string().starts_with("Structural constraint violated"));
    }
}
