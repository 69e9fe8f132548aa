//! Length section - checks password minimum length.

use super::SectionResult;
use crate::verdict::{Rule, Verdict};

/// Checks if the password meets the minimum length.
///
/// `len` is the password length in characters.
pub fn length_section(len: usize, min_length: usize) -> SectionResult {
    if len < min_length {
        return Some(Verdict::Insufficient {
            rule: Rule::MinLength,
            required: min_length,
        });
    }
    None
}
