//! Character class section - checks uppercase, lowercase, digit and special counts.

use super::{CharCounts, SectionResult};
use crate::config::Thresholds;
use crate::verdict::{Rule, Verdict};

/// Checks the character-class thresholds in order: uppercase, lowercase,
/// digit, special. A threshold of 0 disables its rule.
///
/// # Returns
/// - `Some(verdict)` for the first class below its threshold
/// - `None` if every configured threshold is met
pub fn character_class_section(counts: &CharCounts, thresholds: &Thresholds) -> SectionResult {
    Rule::CHARACTER_CLASSES.into_iter().find_map(|rule| {
        let required = thresholds.get(rule);
        if required > 0 && counts.count(rule) < required {
            Some(Verdict::Insufficient { rule, required })
        } else {
            None
        }
    })
}
