//! Generated sequences.

use crate::params::Algorithm;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// The next candidate had already been produced.
    CycleDetected {
        /// The repeated raw value (not included in the sequence)
        repeated: u64,
    },
    /// The requested number of values was produced.
    CountReached,
}

/// Ordered output of one generation run.
///
/// `raw[i] / divisor == values[i]` for every index; raw values are kept so
/// callers can inspect the underlying integer recurrence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sequence {
    algorithm: Algorithm,
    raw: Vec<u64>,
    values: Vec<f64>,
    divisor: f64,
    stop_reason: StopReason,
}

impl Sequence {
    pub(crate) fn new(
        algorithm: Algorithm,
        raw: Vec<u64>,
        divisor: f64,
        stop_reason: StopReason,
    ) -> Self {
        let values = raw.iter().map(|&r| r as f64 / divisor).collect();
        Self {
            algorithm,
            raw,
            values,
            divisor,
            stop_reason,
        }
    }

    /// Algorithm that produced the sequence.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Normalised values in generation order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Raw integers in generation order.
    #[inline]
    pub fn raw(&self) -> &[u64] {
        &self.raw
    }

    /// Divisor applied to the raw values.
    #[inline]
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Why generation stopped.
    #[inline]
    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence holds no values (a seed that cycles at once).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the sequence, returning the normalised values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for Sequence {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
