//! Shared value types.
//!
//! - [`ValidationError`]: parameter validation failures
//! - [`BinEntry`]: one category of a chi-square computation

pub mod bin;
pub mod error;

pub use bin::BinEntry;
pub use error::ValidationError;
