//! Reference word set and dictionary-based plausibility scoring

use std::collections::HashSet;

/// A read-only set of lowercase reference words.
///
/// Membership is case-insensitive. Parsing an on-disk word list is the
/// caller's job; this type only consumes an iterator of words, folding each
/// to lowercase once at construction.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Creates an empty word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a word set from an iterator of words.
    ///
    /// Words are lowercased; empty entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Counts the tokens of `text` present in this set.
    ///
    /// The text is tokenized into maximal runs of alphanumeric characters;
    /// any run of other characters separates tokens. Each token is lowercased
    /// and counted once per occurrence — the score is a plain plausibility
    /// count with no weighting. Empty text or an empty set scores 0.
    pub fn count_valid_words(&self, text: &str) -> usize {
        if self.words.is_empty() {
            return 0;
        }

        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter(|token| self.words.contains(&token.to_lowercase()))
            .count()
    }
}
