//! Cursor over a uniform(0,1) sequence.

use prng_core::types::error::ensure_probability;

use crate::error::VariableError;

/// Exclusive, left-to-right cursor over a slice of uniforms.
///
/// The cursor is `Copy`: a draw that may need an unknown number of values
/// works on a copy and commits it only when the draw completes.
///
/// # Examples
/// ```
/// use prng_variables::UniformStream;
///
/// let values = [0.1, 0.2, 0.3];
/// let mut stream = UniformStream::new(&values).unwrap();
/// assert_eq!(stream.take_exact(2).unwrap(), &[0.1, 0.2]);
/// assert!(stream.take_exact(2).is_err());
/// assert_eq!(stream.remaining(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct UniformStream<'a> {
    values: &'a [f64],
    position: usize,
}

impl<'a> UniformStream<'a> {
    /// Wraps `values`, checking that each lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for the first value outside `[0, 1]` or NaN.
    pub fn new(values: &'a [f64]) -> Result<Self, VariableError> {
        for value in values {
            ensure_probability("uniform", *value)?;
        }
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Number of values consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of values not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.position
    }

    /// Whether every value has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Consumes exactly `n` values, or none.
    ///
    /// # Errors
    ///
    /// `StreamExhausted` when fewer than `n` values remain; the cursor does
    /// not move.
    pub fn take_exact(&mut self, n: usize) -> Result<&'a [f64], VariableError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(VariableError::StreamExhausted {
                needed: n,
                remaining,
            });
        }
        let start = self.position;
        self.position += n;
        Ok(&self.values[start..self.position])
    }

    /// Next value, advancing the cursor.
    #[inline]
    pub(crate) fn next_uniform(&mut self) -> Option<f64> {
        let value = self.values.get(self.position).copied()?;
        self.position += 1;
        Some(value)
    }

    /// Values not yet consumed.
    pub fn leftover(&self) -> &'a [f64] {
        &self.values[self.position..]
    }
}
