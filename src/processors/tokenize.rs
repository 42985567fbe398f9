//! Whitespace tokenization and deduplicated word sets.

use itertools::Itertools;
use std::collections::HashSet;

/// Splits text on runs of whitespace, discarding empty fragments.
///
/// Tokens are compared by exact string equality elsewhere; no case folding
/// or punctuation stripping happens here.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// The unique words of one text, in first-seen order.
///
/// Enumeration order is deterministic so comparison output is reproducible.
/// Borrows from the source text; word sets live only as long as one
/// comparison.
#[derive(Debug)]
pub struct WordSet<'a> {
    order: Vec<&'a str>,
    members: HashSet<&'a str>,
}

impl<'a> WordSet<'a> {
    /// Tokenizes the text and keeps the first occurrence of each word.
    pub fn from_text(text: &'a str) -> Self {
        let order: Vec<&str> = tokenize(text).unique().collect();
        let members = order.iter().copied().collect();
        Self { order, members }
    }

    /// Membership test by exact string equality.
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    /// Iterates words in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order.iter().copied()
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the source text had no words.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        let tokens: Vec<&str> = tokenize("  uno \t dos\n\ntres  ").collect();
        assert_eq!(tokens, vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn test_tokenize_never_yields_empty_tokens() {
        for text in ["", "   ", "\t\n", " a  b "] {
            assert!(tokenize(text).all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn test_token_count_matches_nonwhitespace_runs() {
        // Three maximal non-whitespace runs, regardless of separator width.
        assert_eq!(tokenize("a   b\t\tc").count(), 3);
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_word_set_preserves_first_seen_order() {
        let set = WordSet::from_text("b a b c a");
        let words: Vec<&str> = set.iter().collect();
        assert_eq!(words, vec!["b", "a", "c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_word_set_is_case_sensitive() {
        let set = WordSet::from_text("Hola hola");
        assert_eq!(set.len(), 2);
        assert!(set.contains("Hola"));
        assert!(set.contains("hola"));
        assert!(!set.contains("HOLA"));
    }

    #[test]
    fn test_empty_text_gives_empty_set() {
        let set = WordSet::from_text("   ");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
