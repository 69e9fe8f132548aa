//! Validator configuration
//!
//! Raw thresholds are signed so that out-of-bound values coming from callers
//! or the environment can be rejected instead of clamped.

use crate::error::ConfigError;
use crate::verdict::Rule;

pub const ENV_MIN_LENGTH: &str = "PWD_MIN_LENGTH";
pub const ENV_MIN_UPPERCASE: &str = "PWD_MIN_UPPERCASE";
pub const ENV_MIN_LOWERCASE: &str = "PWD_MIN_LOWERCASE";
pub const ENV_MIN_DIGITS: &str = "PWD_MIN_DIGITS";
pub const ENV_MIN_SPECIAL: &str = "PWD_MIN_SPECIAL";

/// Unvalidated password thresholds.
///
/// Build one with struct-update syntax over the permissive default:
///
/// ```rust
/// use pwd_validation::ValidatorConfig;
///
/// let config = ValidatorConfig {
///     min_length: 8,
///     min_digits: 1,
///     ..Default::default()
/// };
/// assert_eq!(config.min_uppercase, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub min_length: i64,
    pub min_uppercase: i64,
    pub min_lowercase: i64,
    pub min_digits: i64,
    pub min_special: i64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            min_uppercase: 0,
            min_lowercase: 0,
            min_digits: 0,
            min_special: 0,
        }
    }
}

impl ValidatorConfig {
    /// Loads thresholds from `PWD_*` environment variables.
    ///
    /// Unset or blank variables keep their default value. Bounds are not
    /// checked here; that happens when the validator is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            min_length: read_env(ENV_MIN_LENGTH, defaults.min_length)?,
            min_uppercase: read_env(ENV_MIN_UPPERCASE, defaults.min_uppercase)?,
            min_lowercase: read_env(ENV_MIN_LOWERCASE, defaults.min_lowercase)?,
            min_digits: read_env(ENV_MIN_DIGITS, defaults.min_digits)?,
            min_special: read_env(ENV_MIN_SPECIAL, defaults.min_special)?,
        })
    }

    /// Checks every bound and converts to [`Thresholds`].
    pub fn validate(&self) -> Result<Thresholds, ConfigError> {
        if self.min_length < 1 {
            return Err(ConfigError::MinLengthNotPositive(self.min_length));
        }
        Ok(Thresholds {
            min_length: to_count(Rule::MinLength, self.min_length)?,
            min_uppercase: to_count(Rule::UpperCase, self.min_uppercase)?,
            min_lowercase: to_count(Rule::LowerCase, self.min_lowercase)?,
            min_digits: to_count(Rule::Digit, self.min_digits)?,
            min_special: to_count(Rule::Special, self.min_special)?,
        })
    }
}

fn read_env(var: &'static str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(default),
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(std::env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

fn to_count(rule: Rule, value: i64) -> Result<usize, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeThreshold { rule, value });
    }
    usize::try_from(value).map_err(|_| ConfigError::OutOfRange { rule, value })
}

/// Validated thresholds held by a [`PasswordValidator`](crate::PasswordValidator).
///
/// `min_length` is at least 1. A character-class threshold of 0 disables
/// that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    min_length: usize,
    min_uppercase: usize,
    min_lowercase: usize,
    min_digits: usize,
    min_special: usize,
}

impl Default for Thresholds {
    /// At least one character, no class constraints.
    fn default() -> Self {
        Self {
            min_length: 1,
            min_uppercase: 0,
            min_lowercase: 0,
            min_digits: 0,
            min_special: 0,
        }
    }
}

impl Thresholds {
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Threshold configured for `rule`.
    pub fn get(&self, rule: Rule) -> usize {
        match rule {
            Rule::MinLength => self.min_length,
            Rule::UpperCase => self.min_uppercase,
            Rule::LowerCase => self.min_lowercase,
            Rule::Digit => self.min_digits,
            Rule::Special => self.min_special,
        }
    }
}
