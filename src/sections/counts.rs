//! Single-pass character partition.

use crate::verdict::Rule;

/// Per-class character counts of a password.
///
/// Every character lands in exactly one bucket, checked in priority order:
/// uppercase, lowercase, ASCII digit, then special for anything else
/// (punctuation, symbols, whitespace, uncased letters, non-ASCII numerals). The four counts always sum to the
/// password length in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCounts {
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special: usize,
}

impl CharCounts {
    pub fn tally(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            if c.is_uppercase() {
                counts.uppercase += 1;
            } else if c.is_lowercase() {
                counts.lowercase += 1;
            } else if c.is_ascii_digit() {
                counts.digits += 1;
            } else {
                counts.special += 1;
            }
        }
        counts
    }

    /// Count for a character-class rule. `Rule::MinLength` yields the total.
    pub fn count(&self, rule: Rule) -> usize {
        match rule {
            Rule::MinLength => self.total(),
            Rule::UpperCase => self.uppercase,
            Rule::LowerCase => self.lowercase,
            Rule::Digit => self.digits,
            Rule::Special => self.special,
        }
    }

    pub fn total(&self) -> usize {
        self.uppercase + self.lowercase + self.digits + self.special
    }
}
