//! Password validator - runs the rule sections in order.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::config::{Thresholds, ValidatorConfig};
use crate::error::ConfigError;
use crate::sections::{CharCounts, character_class_section, length_section};
use crate::verdict::Verdict;

/// Classifies passwords against a fixed set of thresholds.
///
/// Immutable once built, so a single instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordValidator {
    thresholds: Thresholds,
}

impl PasswordValidator {
    /// Builds a validator, rejecting out-of-bound thresholds.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `min_length` is less than 1
    /// - any character-class threshold is negative
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        match config.validate() {
            Ok(thresholds) => Ok(Self { thresholds }),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password validator configuration rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Builds a validator from `PWD_*` environment variables.
    ///
    /// See [`ValidatorConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ValidatorConfig::from_env()?)
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classifies `text`, reporting the first unmet rule.
    ///
    /// Length is checked first; then uppercase, lowercase, digit and special
    /// counts, skipping rules whose threshold is 0.
    pub fn classify(&self, text: &str) -> Verdict {
        let len = text.chars().count();

        // Orchestrator: sections in order, first failure wins
        let verdict = length_section(len, self.thresholds.min_length())
            .or_else(|| character_class_section(&CharCounts::tally(text), &self.thresholds))
            .unwrap_or(Verdict::Valid);

        #[cfg(feature = "tracing")]
        {
            if let Verdict::Insufficient { rule, required } = verdict {
                tracing::debug!(%rule, required, "password rejected");
            }
        }

        verdict
    }

    /// Same as [`classify`](Self::classify) for a secret-wrapped password.
    pub fn classify_secret(&self, password: &SecretString) -> Verdict {
        self.classify(password.expose_secret())
    }
}

impl TryFrom<ValidatorConfig> for PasswordValidator {
    type Error = ConfigError;

    fn try_from(config: ValidatorConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

/// Async version that sends the verdict via channel.
///
/// A dropped receiver is not an error for the caller.
#[cfg(feature = "async")]
pub async fn classify_tx(
    validator: &PasswordValidator,
    password: &SecretString,
    tx: mpsc::Sender<Verdict>,
) {
    let verdict = validator.classify_secret(password);

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", _e);
    }
}
