//! Generator state machines.
//!
//! A [`Generator`] only exists once its parameters have been validated, so
//! the "uninitialised" state is the absence of a value. After that it
//! alternates between computing a candidate ([`Generator::next_raw`]) and
//! accepting it ([`Generator::update`]) until the driver terminates it.
//!
//! Modular arithmetic reduces every operand modulo `m` first and works in
//! `u128`, so products never wrap and remainders are never negative.

use prng_core::types::error::ensure_natural;
use prng_core::types::ValidationError;
use std::collections::VecDeque;
use tracing::debug;

use crate::digits::{digit_count, digit_divisor, digit_limit, middle_digits, MAX_DIGIT_WIDTH};
use crate::error::GeneratorError;
use crate::params::{Algorithm, GeneratorParams, QcgNormalisation};

/// Lifecycle phase of a [`Generator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Producing values.
    Running,
    /// Terminated by the driver; no further values are produced.
    Terminated,
}

/// Range guaranteed for the normalised values of an algorithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    /// `[0, 1)`: digit extraction divided by `10^L`.
    HalfOpenUnit,
    /// `[0, 1]`: residues divided by `m - 1`.
    ClosedUnit,
    /// `[0, max]`: raw residues (quadratic generator with divisor 1).
    Raw {
        /// Largest attainable value, `m - 1`
        max: f64,
    },
}

impl Bounds {
    /// Whether `value` lies inside the bounds.
    ///
    /// # Examples
    /// ```
    /// use prng_generators::Bounds;
    ///
    /// assert!(Bounds::ClosedUnit.contains(1.0));
    /// assert!(!Bounds::HalfOpenUnit.contains(1.0));
    /// ```
    pub fn contains(&self, value: f64) -> bool {
        match self {
            Bounds::HalfOpenUnit => (0.0..1.0).contains(&value),
            Bounds::ClosedUnit => (0.0..=1.0).contains(&value),
            Bounds::Raw { max } => (0.0..=*max).contains(&value),
        }
    }
}

#[derive(Clone, Debug)]
enum State {
    MidSquare {
        current: u64,
        width: u32,
    },
    MidProduct {
        previous: u64,
        current: u64,
        width: u32,
    },
    ConstantMultiplier {
        current: u64,
        constant: u64,
        width: u32,
    },
    Linear {
        current: u64,
        multiplier: u64,
        increment: u64,
        modulus: u64,
    },
    Multiplicative {
        current: u64,
        multiplier: u64,
        modulus: u64,
    },
    Additive {
        window: VecDeque<u64>,
        modulus: u64,
    },
    Quadratic {
        current: u64,
        a: u64,
        b: u64,
        c: u64,
        modulus: u64,
    },
    BlumBlumShub {
        current: u64,
        modulus: u64,
    },
}

/// An initialised generator.
///
/// # Examples
/// ```
/// use prng_generators::{Generator, GeneratorParams};
///
/// let mut generator = Generator::initialise(&GeneratorParams::Multiplicative {
///     seed: 1,
///     multiplier: 3,
///     modulus: 7,
/// }).unwrap();
///
/// let raw = generator.next_raw().unwrap();
/// assert_eq!(raw, 3);
/// generator.update(raw);
/// assert_eq!(generator.next_raw().unwrap(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Generator {
    algorithm: Algorithm,
    state: State,
    divisor: f64,
    bounds: Bounds,
    phase: Phase,
}

impl Generator {
    /// Validates `params` and builds the initial state.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for a non-natural value or an empty seed list
    /// - `DegenerateModulus` for `m <= 1`
    /// - `StructuralConstraint` for Blum Blum Shub primes that are not
    ///   distinct primes congruent to 3 mod 4, or a seed sharing a factor
    ///   with `pq`; and for digit-family partners wider than the seed
    /// - `Overflow` when the seed is wider than 19 digits or `pq` does not
    ///   fit in 64 bits
    pub fn initialise(params: &GeneratorParams) -> Result<Self, GeneratorError> {
        let algorithm = params.algorithm();
        let (state, divisor, bounds) = match params {
            GeneratorParams::MidSquare { seed } => {
                let width = seed_width(*seed)?;
                (
                    State::MidSquare {
                        current: *seed,
                        width,
                    },
                    digit_divisor(width),
                    Bounds::HalfOpenUnit,
                )
            }
            GeneratorParams::MidProduct { seed1, seed2 } => {
                let width = seed_width(*seed1)?;
                ensure_natural("seed2", *seed2)?;
                ensure_fits_width("seed2", *seed2, width)?;
                (
                    State::MidProduct {
                        previous: *seed1,
                        current: *seed2,
                        width,
                    },
                    digit_divisor(width),
                    Bounds::HalfOpenUnit,
                )
            }
            GeneratorParams::ConstantMultiplier { seed, constant } => {
                let width = seed_width(*seed)?;
                ensure_natural("constant", *constant)?;
                ensure_fits_width("constant", *constant, width)?;
                (
                    State::ConstantMultiplier {
                        current: *seed,
                        constant: *constant,
                        width,
                    },
                    digit_divisor(width),
                    Bounds::HalfOpenUnit,
                )
            }
            GeneratorParams::Linear {
                seed,
                multiplier,
                increment,
                modulus,
            } => {
                ensure_natural("seed", *seed)?;
                ensure_natural("multiplier", *multiplier)?;
                ensure_natural("increment", *increment)?;
                let modulus = ensure_modulus(*modulus)?;
                (
                    State::Linear {
                        current: *seed,
                        multiplier: *multiplier,
                        increment: *increment,
                        modulus,
                    },
                    (modulus - 1) as f64,
                    Bounds::ClosedUnit,
                )
            }
            GeneratorParams::Multiplicative {
                seed,
                multiplier,
                modulus,
            } => {
                ensure_natural("seed", *seed)?;
                ensure_natural("multiplier", *multiplier)?;
                let modulus = ensure_modulus(*modulus)?;
                (
                    State::Multiplicative {
                        current: *seed,
                        multiplier: *multiplier,
                        modulus,
                    },
                    (modulus - 1) as f64,
                    Bounds::ClosedUnit,
                )
            }
            GeneratorParams::Additive { seeds, modulus } => {
                if seeds.is_empty() {
                    return Err(ValidationError::Empty { name: "seeds" }.into());
                }
                for seed in seeds {
                    ensure_natural("seeds", *seed)?;
                }
                let modulus = ensure_modulus(*modulus)?;
                (
                    State::Additive {
                        window: seeds.iter().copied().collect(),
                        modulus,
                    },
                    (modulus - 1) as f64,
                    Bounds::ClosedUnit,
                )
            }
            GeneratorParams::Quadratic {
                seed,
                a,
                b,
                c,
                modulus,
                normalisation,
            } => {
                ensure_natural("seed", *seed)?;
                ensure_natural("a", *a)?;
                ensure_natural("b", *b)?;
                ensure_natural("c", *c)?;
                let modulus = ensure_modulus(*modulus)?;
                let (divisor, bounds) = match normalisation {
                    QcgNormalisation::Unit => ((modulus - 1) as f64, Bounds::ClosedUnit),
                    QcgNormalisation::Raw => (
                        1.0,
                        Bounds::Raw {
                            max: (modulus - 1) as f64,
                        },
                    ),
                };
                (
                    State::Quadratic {
                        current: *seed,
                        a: *a,
                        b: *b,
                        c: *c,
                        modulus,
                    },
                    divisor,
                    bounds,
                )
            }
            GeneratorParams::BlumBlumShub { seed, p, q } => {
                ensure_natural("seed", *seed)?;
                ensure_natural("p", *p)?;
                ensure_natural("q", *q)?;
                let modulus = blum_modulus(*p, *q)?;
                if gcd(*seed, modulus) != 1 {
                    return Err(GeneratorError::StructuralConstraint(format!(
                        "seed {} is not coprime to p * q = {}",
                        seed, modulus
                    )));
                }
                (
                    State::BlumBlumShub {
                        current: *seed,
                        modulus,
                    },
                    (modulus - 1) as f64,
                    Bounds::ClosedUnit,
                )
            }
        };

        debug!(algorithm = algorithm.code(), divisor, "generator initialised");

        Ok(Self {
            algorithm,
            state,
            divisor,
            bounds,
            phase: Phase::Running,
        })
    }

    /// Algorithm of this generator.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Normalisation divisor.
    #[inline]
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Range guaranteed for normalised values.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current lifecycle phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Marks the generator as terminated.
    pub fn terminate(&mut self) {
        self.phase = Phase::Terminated;
    }

    /// Computes the next candidate raw value without accepting it.
    ///
    /// Calling this twice without [`update`](Self::update) returns the same
    /// candidate.
    ///
    /// # Errors
    ///
    /// `Overflow` if a digit-family product exceeds `2L` digits (prevented by
    /// validation, reported rather than wrapped).
    pub fn next_raw(&self) -> Result<u64, GeneratorError> {
        let raw = match &self.state {
            State::MidSquare { current, width } => {
                let x = u128::from(*current);
                middle_digits(x * x, *width)?
            }
            State::MidProduct {
                previous,
                current,
                width,
            } => middle_digits(u128::from(*previous) * u128::from(*current), *width)?,
            State::ConstantMultiplier {
                current,
                constant,
                width,
            } => middle_digits(u128::from(*constant) * u128::from(*current), *width)?,
            State::Linear {
                current,
                multiplier,
                increment,
                modulus,
            } => {
                let m = u128::from(*modulus);
                let ax = mul_mod(*multiplier, *current, *modulus);
                narrow((ax + u128::from(*increment) % m) % m)
            }
            State::Multiplicative {
                current,
                multiplier,
                modulus,
            } => narrow(mul_mod(*multiplier, *current, *modulus)),
            State::Additive { window, modulus } => {
                let m = u128::from(*modulus);
                let newest = window.back().copied().unwrap_or_default();
                let oldest = window.front().copied().unwrap_or_default();
                narrow((u128::from(newest) % m + u128::from(oldest) % m) % m)
            }
            State::Quadratic {
                current,
                a,
                b,
                c,
                modulus,
            } => {
                let m = u128::from(*modulus);
                let x_squared = mul_mod(*current, *current, *modulus);
                let ax2 = (u128::from(*a) % m) * x_squared % m;
                let bx = mul_mod(*b, *current, *modulus);
                narrow((ax2 + bx + u128::from(*c) % m) % m)
            }
            State::BlumBlumShub { current, modulus } => {
                narrow(mul_mod(*current, *current, *modulus))
            }
        };
        Ok(raw)
    }

    /// Accepts `raw` as the newest value of the sequence.
    pub fn update(&mut self, raw: u64) {
        match &mut self.state {
            State::MidSquare { current, .. }
            | State::ConstantMultiplier { current, .. }
            | State::Linear { current, .. }
            | State::Multiplicative { current, .. }
            | State::Quadratic { current, .. }
            | State::BlumBlumShub { current, .. } => *current = raw,
            State::MidProduct {
                previous, current, ..
            } => {
                *previous = *current;
                *current = raw;
            }
            State::Additive { window, .. } => {
                window.pop_front();
                window.push_back(raw);
            }
        }
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u128 {
    let m = u128::from(modulus);
    (u128::from(a) % m) * (u128::from(b) % m) % m
}

/// Residues are below a `u64` modulus.
#[inline]
fn narrow(residue: u128) -> u64 {
    residue as u64
}

fn seed_width(seed: u64) -> Result<u32, GeneratorError> {
    ensure_natural("seed", seed)?;
    let width = digit_count(seed);
    if width > MAX_DIGIT_WIDTH {
        return Err(GeneratorError::Overflow(format!(
            "seed {} has {} digits; at most {} are supported",
            seed, width, MAX_DIGIT_WIDTH
        )));
    }
    Ok(width)
}

fn ensure_fits_width(name: &str, value: u64, width: u32) -> Result<(), GeneratorError> {
    if u128::from(value) >= digit_limit(width) {
        return Err(GeneratorError::StructuralConstraint(format!(
            "{} = {} has more than {} digits",
            name, value, width
        )));
    }
    Ok(())
}

fn ensure_modulus(modulus: u64) -> Result<u64, GeneratorError> {
    ensure_natural("modulus", modulus)?;
    if modulus <= 1 {
        return Err(GeneratorError::DegenerateModulus { modulus });
    }
    Ok(modulus)
}

fn blum_modulus(p: u64, q: u64) -> Result<u64, GeneratorError> {
    for (name, value) in [("p", p), ("q", q)] {
        if !is_prime(value) {
            return Err(GeneratorError::StructuralConstraint(format!(
                "{} = {} is not prime",
                name, value
            )));
        }
        if value % 4 != 3 {
            return Err(GeneratorError::StructuralConstraint(format!(
                "{} = {} is not congruent to 3 mod 4",
                name, value
            )));
        }
    }
    if p == q {
        return Err(GeneratorError::StructuralConstraint(format!(
            "p and q must be distinct, both are {}",
            p
        )));
    }
    p.checked_mul(q)
        .ok_or_else(|| GeneratorError::Overflow(format!("p * q = {} * {} exceeds 64 bits", p, q)))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn pow_mod(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let mut result: u64 = 1 % modulus;
    let mut base = base % modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = narrow(mul_mod(result, base, modulus));
        }
        base = narrow(mul_mod(base, base, modulus));
        exponent >>= 1;
    }
    result
}

/// Deterministic Miller–Rabin for 64-bit integers.
pub(crate) fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = narrow(mul_mod(x, x, n));
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(generator: &mut Generator) -> u64 {
        let raw = generator.next_raw().unwrap();
        generator.update(raw);
        raw
    }

    #[test]
    fn test_primality() {
        let primes: Vec<u64> = (0..60).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(is_prime(18_446_744_073_709_551_557));
        // Carmichael number
        assert!(!is_prime(561));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
    }

    #[test]
    fn test_mid_square_step() {
        let mut generator = Generator::initialise(&GeneratorParams::MidSquare { seed: 5735 }).unwrap();
        assert_eq!(step(&mut generator), 8902);
        // 8902² = 79245604 -> 2456
        assert_eq!(step(&mut generator), 2456);
        assert_eq!(generator.divisor(), 10_000.0);
    }

    #[test]
    fn test_mid_product_shifts_pair() {
        let mut generator = Generator::initialise(&GeneratorParams::MidProduct {
            seed1: 1234,
            seed2: 5678,
        })
        .unwrap();
        // 1234 * 5678 = 07006652 -> 0066
        assert_eq!(step(&mut generator), 66);
        // 5678 * 66 = 00374748 -> 3747
        assert_eq!(step(&mut generator), 3747);
    }

    #[test]
    fn test_constant_multiplier_step() {
        let mut generator = Generator::initialise(&GeneratorParams::ConstantMultiplier {
            seed: 9803,
            constant: 6965,
        })
        .unwrap();
        // 6965 * 9803 = 68277895 -> 2778
        assert_eq!(step(&mut generator), 2778);
    }

    #[test]
    fn test_linear_recurrence() {
        let mut generator = Generator::initialise(&GeneratorParams::Linear {
            seed: 7,
            multiplier: 5,
            increment: 3,
            modulus: 16,
        })
        .unwrap();
        let raws: Vec<u64> = (0..5).map(|_| step(&mut generator)).collect();
        assert_eq!(raws, vec![6, 1, 8, 11, 10]);
        assert_eq!(generator.divisor(), 15.0);
    }

    #[test]
    fn test_additive_uses_first_and_last_of_window() {
        let mut generator = Generator::initialise(&GeneratorParams::Additive {
            seeds: vec![1, 2, 3],
            modulus: 10,
        })
        .unwrap();
        // 3 + 1, then 4 + 2, then 6 + 3
        let raws: Vec<u64> = (0..3).map(|_| step(&mut generator)).collect();
        assert_eq!(raws, vec![4, 6, 9]);
    }

    #[test]
    fn test_quadratic_recurrence_and_raw_mode() {
        let mut generator = Generator::initialise(&GeneratorParams::Quadratic {
            seed: 2,
            a: 1,
            b: 2,
            c: 3,
            modulus: 11,
            normalisation: QcgNormalisation::Raw,
        })
        .unwrap();
        // 4 + 4 + 3 = 11 mod 11 = 0, then 0 + 0 + 3 = 3
        assert_eq!(step(&mut generator), 0);
        assert_eq!(step(&mut generator), 3);
        assert_eq!(generator.divisor(), 1.0);
        assert_eq!(generator.bounds(), Bounds::Raw { max: 10.0 });
    }

    #[test]
    fn test_blum_blum_shub_step() {
        let mut generator = Generator::initialise(&GeneratorParams::BlumBlumShub {
            seed: 3,
            p: 7,
            q: 11,
        })
        .unwrap();
        assert_eq!(step(&mut generator), 9);
        assert_eq!(step(&mut generator), 4);
        assert_eq!(generator.divisor(), 76.0);
    }

    #[test]
    fn test_next_raw_is_idempotent() {
        let generator = Generator::initialise(&GeneratorParams::MidSquare { seed: 42 }).unwrap();
        assert_eq!(generator.next_raw().unwrap(), generator.next_raw().unwrap());
    }

    #[test]
    fn test_large_operands_do_not_wrap() {
        let modulus = u64::MAX;
        let mut generator = Generator::initialise(&GeneratorParams::Linear {
            seed: u64::MAX - 1,
            multiplier: u64::MAX - 1,
            increment: u64::MAX - 1,
            modulus,
        })
        .unwrap();
        // (-1)(-1) + (-1) = 0 mod m
        assert_eq!(step(&mut generator), 0);
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            Generator::initialise(&GeneratorParams::MidSquare { seed: 0 }),
            Err(GeneratorError::InvalidParameter(_))
        ));
        assert!(matches!(
            Generator::initialise(&GeneratorParams::MidSquare { seed: u64::MAX }),
            Err(GeneratorError::Overflow(_))
        ));
        assert!(matches!(
            Generator::initialise(&GeneratorParams::Multiplicative {
                seed: 1,
                multiplier: 2,
                modulus: 1
            }),
            Err(GeneratorError::DegenerateModulus { modulus: 1 })
        ));
        assert!(matches!(
            Generator::initialise(&GeneratorParams::Additive {
                seeds: vec![],
                modulus: 10
            }),
            Err(GeneratorError::InvalidParameter(ValidationError::Empty { .. }))
        ));
        assert!(matches!(
            Generator::initialise(&GeneratorParams::ConstantMultiplier {
                seed: 12,
                constant: 123
            }),
            Err(GeneratorError::StructuralConstraint(_))
        ));
    }

    #[test]
    fn test_blum_blum_shub_rejections() {
        let cases = [(3, 5, 11), (3, 7, 7), (3, 9, 11), (7, 7, 11)];
        for (seed, p, q) in cases {
            assert!(
                matches!(
                    Generator::initialise(&GeneratorParams::BlumBlumShub { seed, p, q }),
                    Err(GeneratorError::StructuralConstraint(_))
                ),
                "seed={} p={} q={}",
                seed,
                p,
                q
            );
        }
    }

    #[test]
    fn test_phase_transitions() {
        let mut generator = Generator::initialise(&GeneratorParams::MidSquare { seed: 42 }).unwrap();
        assert_eq!(generator.phase(), Phase::Running);
        generator.terminate();
        assert_eq!(generator.phase(), Phase::Terminated);
    }
}
