//! Generator parameter sets.
//!
//! [`GeneratorParams`] is a closed enum with one variant per algorithm, so a
//! parameter set can only describe the fields its algorithm actually uses.
//! Values are checked when a [`Generator`](crate::Generator) is initialised,
//! not on construction.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generator family identifier.
///
/// Parsed case-insensitively from either the short code (`"lcg"`) or the
/// long name (`"linear"`).
///
/// # Examples
/// ```
/// use prng_generators::Algorithm;
///
/// let algorithm: Algorithm = "BBS".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::BlumBlumShub);
/// assert_eq!(algorithm.code(), "bbs");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Von Neumann mid-square method.
    MidSquare,
    /// Mid-product method.
    MidProduct,
    /// Constant multiplier method.
    ConstantMultiplier,
    /// Linear congruential generator.
    Linear,
    /// Multiplicative congruential generator.
    Multiplicative,
    /// Additive (lagged Fibonacci) congruential generator.
    Additive,
    /// Quadratic congruential generator.
    Quadratic,
    /// Blum Blum Shub generator.
    BlumBlumShub,
}

impl Algorithm {
    /// All algorithms in display order.
    pub const ALL: [Algorithm; 8] = [
        Algorithm::MidSquare,
        Algorithm::MidProduct,
        Algorithm::ConstantMultiplier,
        Algorithm::Linear,
        Algorithm::Multiplicative,
        Algorithm::Additive,
        Algorithm::Quadratic,
        Algorithm::BlumBlumShub,
    ];

    /// Short lower-case code.
    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::MidSquare => "msm",
            Algorithm::MidProduct => "mpm",
            Algorithm::ConstantMultiplier => "cmm",
            Algorithm::Linear => "lcg",
            Algorithm::Multiplicative => "mcg",
            Algorithm::Additive => "acg",
            Algorithm::Quadratic => "qcg",
            Algorithm::BlumBlumShub => "bbs",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::MidSquare => "Mid-square",
            Algorithm::MidProduct => "Mid-product",
            Algorithm::ConstantMultiplier => "Constant multiplier",
            Algorithm::Linear => "Linear congruential",
            Algorithm::Multiplicative => "Multiplicative congruential",
            Algorithm::Additive => "Additive congruential",
            Algorithm::Quadratic => "Quadratic congruential",
            Algorithm::BlumBlumShub => "Blum Blum Shub",
        }
    }

    /// Whether the algorithm extracts middle digits (normalised by `10^L`).
    pub fn is_digit_extraction(&self) -> bool {
        matches!(
            self,
            Algorithm::MidSquare | Algorithm::MidProduct | Algorithm::ConstantMultiplier
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "msm" | "mid_square" => Ok(Algorithm::MidSquare),
            "mpm" | "mid_product" => Ok(Algorithm::MidProduct),
            "cmm" | "constant_multiplier" => Ok(Algorithm::ConstantMultiplier),
            "lcg" | "linear" => Ok(Algorithm::Linear),
            "mcg" | "multiplicative" => Ok(Algorithm::Multiplicative),
            "acg" | "additive" => Ok(Algorithm::Additive),
            "qcg" | "quadratic" => Ok(Algorithm::Quadratic),
            "bbs" | "blum_blum_shub" => Ok(Algorithm::BlumBlumShub),
            other => Err(format!(
                "Unknown algorithm '{}'. Valid options: msm, mpm, cmm, lcg, mcg, acg, qcg, bbs",
                other
            )),
        }
    }
}

/// Normalisation mode of the quadratic congruential generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QcgNormalisation {
    /// Divide by `m - 1`, mapping raw values into `[0, 1]`.
    #[default]
    Unit,
    /// Divisor 1: values are the raw residues in `[0, m - 1]`.
    Raw,
}

/// Parameters of one generation run.
///
/// Every numeric field must be a natural number (≥ 1).
///
/// # Examples
/// ```
/// use prng_generators::{Algorithm, GeneratorParams};
///
/// let params = GeneratorParams::MidSquare { seed: 5735 };
/// assert_eq!(params.algorithm(), Algorithm::MidSquare);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "algorithm", rename_all = "snake_case"))]
pub enum GeneratorParams {
    /// Mid-square: `x[n+1]` is the middle `L` digits of `x[n]²`.
    MidSquare {
        /// Initial value; its digit count fixes `L`
        seed: u64,
    },
    /// Mid-product: `x[n]` is the middle `L` digits of `x[n-1] x[n-2]`.
    MidProduct {
        /// First seed; its digit count fixes `L`
        seed1: u64,
        /// Second seed, at most `L` digits
        seed2: u64,
    },
    /// Constant multiplier: `x[n]` is the middle `L` digits of `c x[n-1]`.
    ConstantMultiplier {
        /// Initial value; its digit count fixes `L`
        seed: u64,
        /// Multiplier `c`, at most `L` digits
        constant: u64,
    },
    /// Linear congruential: `x[n+1] = (a x[n] + c) mod m`.
    Linear {
        /// Initial value
        seed: u64,
        /// Multiplier `a`
        multiplier: u64,
        /// Increment `c`
        increment: u64,
        /// Modulus `m`
        modulus: u64,
    },
    /// Multiplicative congruential: `x[n+1] = a x[n] mod m`.
    Multiplicative {
        /// Initial value
        seed: u64,
        /// Multiplier `a`
        multiplier: u64,
        /// Modulus `m`
        modulus: u64,
    },
    /// Additive congruential: `x[n] = (x[n-1] + x[n-k]) mod m` with `k`
    /// the number of seeds.
    Additive {
        /// Initial window, oldest first
        seeds: Vec<u64>,
        /// Modulus `m`
        modulus: u64,
    },
    /// Quadratic congruential: `x[n+1] = (a x[n]² + b x[n] + c) mod m`.
    Quadratic {
        /// Initial value
        seed: u64,
        /// Quadratic coefficient
        a: u64,
        /// Linear coefficient
        b: u64,
        /// Constant term
        c: u64,
        /// Modulus `m`
        modulus: u64,
        /// Divisor selection
        #[cfg_attr(feature = "serde", serde(default))]
        normalisation: QcgNormalisation,
    },
    /// Blum Blum Shub: `x[n+1] = x[n]² mod pq`.
    BlumBlumShub {
        /// Initial value, coprime to `pq`
        seed: u64,
        /// Prime congruent to 3 mod 4
        p: u64,
        /// Prime congruent to 3 mod 4, distinct from `p`
        q: u64,
    },
}

impl GeneratorParams {
    /// Algorithm these parameters belong to.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            GeneratorParams::MidSquare { .. } => Algorithm::MidSquare,
            GeneratorParams::MidProduct { .. } => Algorithm::MidProduct,
            GeneratorParams::ConstantMultiplier { .. } => Algorithm::ConstantMultiplier,
            GeneratorParams::Linear { .. } => Algorithm::Linear,
            GeneratorParams::Multiplicative { .. } => Algorithm::Multiplicative,
            GeneratorParams::Additive { .. } => Algorithm::Additive,
            GeneratorParams::Quadratic { .. } => Algorithm::Quadratic,
            GeneratorParams::BlumBlumShub { .. } => Algorithm::BlumBlumShub,
        }
    }
}
