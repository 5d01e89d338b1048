// File: src/core/scorer.rs
use crate::core::table::value_of;

/// Sums the linear value of every code point in `text`, left to right.
/// Combining marks and other unmapped code points add nothing.
/// O(n) in the number of code points.
pub fn score(text: &str) -> u64 {
    text.chars().map(|c| u64::from(value_of(c))).sum()
}
