//! Configuration errors.

use crate::verdict::Rule;
use thiserror::Error;

/// Raised when a validator cannot be built from the given thresholds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_length should be positive, got {0}")]
    MinLengthNotPositive(i64),
    #[error("{rule} threshold should be non-negative, got {value}")]
    NegativeThreshold { rule: Rule, value: i64 },
    /// Only reachable where `usize` is narrower than `i64` (32-bit targets).
    #[error("{rule} threshold {value} does not fit in usize")]
    OutOfRange { rule: Rule, value: i64 },
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
