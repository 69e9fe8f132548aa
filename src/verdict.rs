//! Classification outcome types.

use std::fmt;

/// A single password rule, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MinLength,
    UpperCase,
    LowerCase,
    Digit,
    Special,
}

impl Rule {
    /// Character-class rules in the order they are checked after the length rule.
    pub const CHARACTER_CLASSES: [Rule; 4] =
        [Rule::UpperCase, Rule::LowerCase, Rule::Digit, Rule::Special];

    /// Noun used in human-readable reasons, pluralized on `count`.
    fn noun(self, count: usize) -> &'static str {
        let plural = count != 1;
        match (self, plural) {
            (Rule::MinLength, false) => "character",
            (Rule::MinLength, true) => "characters",
            (Rule::UpperCase, false) => "uppercase letter",
            (Rule::UpperCase, true) => "uppercase letters",
            (Rule::LowerCase, false) => "lowercase letter",
            (Rule::LowerCase, true) => "lowercase letters",
            (Rule::Digit, false) => "digit",
            (Rule::Digit, true) => "digits",
            (Rule::Special, false) => "special character",
            (Rule::Special, true) => "special characters",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::MinLength => "min_length",
            Rule::UpperCase => "uppercase",
            Rule::LowerCase => "lowercase",
            Rule::Digit => "digit",
            Rule::Special => "special",
        };
        f.write_str(name)
    }
}

/// Outcome of classifying a password.
///
/// Only the first unmet rule is reported; `required` is the configured
/// threshold for that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Valid,
    Insufficient { rule: Rule, required: usize },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The rule that failed, if any.
    pub fn failed_rule(&self) -> Option<Rule> {
        match self {
            Verdict::Valid => None,
            Verdict::Insufficient { rule, .. } => Some(*rule),
        }
    }

    /// Human-readable reason for a failed verdict.
    ///
    /// # Returns
    /// - `Some(reason)` if a rule was not met
    /// - `None` if the password is valid
    pub fn reason(&self) -> Option<String> {
        match *self {
            Verdict::Valid => None,
            Verdict::Insufficient {
                rule: Rule::MinLength,
                required,
            } => Some(format!(
                "Password must be at least {} {}",
                required,
                Rule::MinLength.noun(required)
            )),
            Verdict::Insufficient { rule, required } => Some(format!(
                "Password must contain at least {} {}",
                required,
                rule.noun(required)
            )),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => f.write_str("valid"),
            Verdict::Insufficient { rule, required } => {
                write!(f, "insufficient {} (required {})", rule, required)
            }
        }
    }
}
