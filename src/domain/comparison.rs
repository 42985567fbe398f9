//! Comparison result types consumed by presentation collaborators.

use serde::{Deserialize, Serialize};

/// One word of the comparison, with per-side membership flags.
///
/// A row only exists for a word that occurs on at least one side, so at
/// least one of the two flags is always true, and each word appears in at
/// most one row of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// The word, compared by exact string equality.
    pub word: String,
    /// The word occurs in the reference text.
    pub in_reference: bool,
    /// The word occurs in the candidate text.
    pub in_candidate: bool,
}

/// The full word-level comparison of two extracted texts.
///
/// Row order is a contract: all of the reference's unique words in
/// first-seen order, then candidate-only words in the candidate's
/// first-seen order. `total_distinct_words` always equals `rows.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// One row per distinct word across both texts, in contract order.
    pub rows: Vec<ComparisonRow>,
    /// Number of distinct words across both texts (= `rows.len()`).
    pub total_distinct_words: usize,
    /// Number of unique words in the reference text.
    pub reference_word_count: usize,
    /// Number of unique words in the candidate text.
    pub candidate_word_count: usize,
}

impl ComparisonResult {
    /// Number of words present on both sides (inclusion-exclusion identity).
    pub fn common_word_count(&self) -> usize {
        self.reference_word_count + self.candidate_word_count - self.total_distinct_words
    }
}
