//! Word-level comparison of two extracted texts.

use crate::domain::{ComparisonResult, ComparisonRow};
use crate::processors::tokenize::WordSet;

/// Compares two texts word by word.
///
/// Emits one row per unique word of the reference text, in first-seen
/// order, each flagged with its membership in the candidate text; then one
/// row per candidate-only word, in the candidate's first-seen order. That
/// ordering is a deliberate tie-break and part of the contract; results are
/// never sorted.
///
/// Empty inputs are valid and produce an empty result. This operation has
/// no failure modes.
pub fn compare_texts(reference: &str, candidate: &str) -> ComparisonResult {
    let reference_set = WordSet::from_text(reference);
    let candidate_set = WordSet::from_text(candidate);

    let mut rows = Vec::with_capacity(reference_set.len() + candidate_set.len());
    for word in reference_set.iter() {
        rows.push(ComparisonRow {
            word: word.to_string(),
            in_reference: true,
            in_candidate: candidate_set.contains(word),
        });
    }
    for word in candidate_set.iter().filter(|&w| !reference_set.contains(w)) {
        rows.push(ComparisonRow {
            word: word.to_string(),
            in_reference: false,
            in_candidate: true,
        });
    }

    let result = ComparisonResult {
        total_distinct_words: rows.len(),
        reference_word_count: reference_set.len(),
        candidate_word_count: candidate_set.len(),
        rows,
    };
    tracing::debug!(
        total = result.total_distinct_words,
        reference = result.reference_word_count,
        candidate = result.candidate_word_count,
        "compared texts"
    );
    result
}
