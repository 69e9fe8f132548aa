//! Password rule sections
//!
//! Each section checks one concern and reports the first rule it finds unmet.

mod counts;
mod length;
mod variety;

pub use counts::CharCounts;
pub use length::length_section;
pub use variety::character_class_section;

/// Result type for section check functions.
/// - `Some(verdict)` - Section failed, `verdict` is `Verdict::Insufficient`
/// - `None` - Section passed
pub type SectionResult = Option<crate::Verdict>;
