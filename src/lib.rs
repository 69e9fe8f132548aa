//! Password validation library
//!
//! Checks a password against configured minimum thresholds (length,
//! uppercase, lowercase, digits, special characters) and reports the first
//! unmet rule.
//!
//! # Features
//!
//! - `async` (default): Enables delivering verdicts over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`PasswordValidator::from_env`]:
//!
//! - `PWD_MIN_LENGTH` (default: 1)
//! - `PWD_MIN_UPPERCASE`, `PWD_MIN_LOWERCASE`, `PWD_MIN_DIGITS`,
//!   `PWD_MIN_SPECIAL` (default: 0, meaning unconstrained)
//!
//! # Example
//!
//! ```rust
//! use pwd_validation::{PasswordValidator, Rule, ValidatorConfig, Verdict};
//!
//! let validator = PasswordValidator::new(ValidatorConfig {
//!     min_length: 8,
//!     min_uppercase: 1,
//!     min_digits: 1,
//!     ..Default::default()
//! })
//! .expect("thresholds are in bounds");
//!
//! assert_eq!(validator.classify("Tr0ub4dor"), Verdict::Valid);
//! assert_eq!(
//!     validator.classify("troubadour"),
//!     Verdict::Insufficient { rule: Rule::UpperCase, required: 1 }
//! );
//! ```

// Internal modules
mod config;
mod error;
mod sections;
mod validator;
mod verdict;

// Public API
pub use config::{
    ENV_MIN_DIGITS, ENV_MIN_LENGTH, ENV_MIN_LOWERCASE, ENV_MIN_SPECIAL, ENV_MIN_UPPERCASE,
    Thresholds, ValidatorConfig,
};
pub use error::ConfigError;
pub use sections::CharCounts;
pub use validator::PasswordValidator;
pub use verdict::{Rule, Verdict};

#[cfg(feature = "async")]
pub use validator::classify_tx;
