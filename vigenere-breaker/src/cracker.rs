//! Key-length cracking and the full language-based break

use log::{debug, warn};

use crate::caesar::CaesarCracker;
use crate::dictionary::WordSet;
use crate::error::{BreakError, Result};
use crate::vigenere::VigenereCipher;

/// Largest key length the automatic break sweeps.
pub const MAX_KEY_LENGTH: usize = 100;

/// Outcome of an automatic break attempt.
///
/// "No key found" is a first-class variant rather than a nullable field, so a
/// missing key can never be confused with a found key of length 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakResult {
    /// A candidate decryption scored above zero.
    Broken {
        /// The recovered key, shifts in `[0, 25]`.
        key: Vec<i32>,
        /// Number of dictionary words found in the decryption.
        valid_word_count: usize,
        /// The decrypted text under the recovered key.
        decrypted_text: String,
    },
    /// No trial key length produced a decryption containing any dictionary
    /// word. Carries the untouched input so callers can fall back to
    /// displaying it.
    Unbroken {
        /// The original ciphertext, unchanged.
        original_text: String,
    },
}

impl BreakResult {
    /// Whether a key was recovered.
    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken { .. })
    }

    /// The recovered key, if any.
    pub fn best_key(&self) -> Option<&[i32]> {
        match self {
            Self::Broken { key, .. } => Some(key),
            Self::Unbroken { .. } => None,
        }
    }

    /// The recovered key's length, if any.
    pub fn best_key_length(&self) -> Option<usize> {
        self.best_key().map(<[i32]>::len)
    }

    /// Number of dictionary words in the winning decryption (0 when unbroken).
    pub fn valid_word_count(&self) -> usize {
        match self {
            Self::Broken {
                valid_word_count, ..
            } => *valid_word_count,
            Self::Unbroken { .. } => 0,
        }
    }

    /// The winning decryption, or the original text when unbroken.
    pub fn decrypted_text(&self) -> &str {
        match self {
            Self::Broken { decrypted_text, .. } => decrypted_text,
            Self::Unbroken { original_text } => original_text,
        }
    }
}

/// Breaks Vigenere-family ciphertext by frequency analysis and dictionary
/// scoring.
///
/// Holds the shift cracker's target letter and the key-length sweep bound.
/// Pure computation throughout: no I/O, no shared state, safe to call from
/// concurrent contexts as long as the inputs are not mutated.
#[derive(Debug, Clone, Copy)]
pub struct VigenereBreaker {
    cracker: CaesarCracker,
    max_key_length: usize,
}

impl VigenereBreaker {
    /// Creates a breaker targeting the given most-common plaintext letter,
    /// sweeping key lengths up to [`MAX_KEY_LENGTH`].
    pub fn new(most_common: char) -> Self {
        Self {
            cracker: CaesarCracker::new(most_common),
            max_key_length: MAX_KEY_LENGTH,
        }
    }

    /// Creates a breaker with a custom sweep bound.
    pub fn with_max_key_length(most_common: char, max_key_length: usize) -> Self {
        Self {
            cracker: CaesarCracker::new(most_common),
            max_key_length,
        }
    }

    /// Derives the most probable key of the given length.
    ///
    /// The ciphertext is partitioned into `key_length` interleaved
    /// subsequences by character position modulo `key_length`; the shift
    /// cracker runs independently on each and the resulting shifts form the
    /// key in subsequence order. A subsequence left empty because the key
    /// length exceeds the text length contributes shift 0.
    ///
    /// # Arguments
    ///
    /// * `encrypted` - The ciphertext to analyze.
    /// * `key_length` - The trial key length (must be positive).
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` if `key_length` is 0, `EmptyCiphertext` if
    /// `encrypted` is empty. Both are usage errors; no shift configuration
    /// can fail.
    pub fn try_key_length(&self, encrypted: &str, key_length: usize) -> Result<Vec<i32>> {
        if key_length == 0 {
            warn!("rejecting key length 0; key lengths must be positive");
            return Err(BreakError::InvalidKeyLength);
        }
        if encrypted.is_empty() {
            warn!("rejecting empty ciphertext");
            return Err(BreakError::EmptyCiphertext);
        }

        let mut key: Vec<i32> = Vec::with_capacity(key_length);
        for start in 0..key_length {
            let slice = slice_text(encrypted, start, key_length);
            if slice.is_empty() {
                warn!("slice {start} of key length {key_length} is empty; falling back to shift 0");
                key.push(0);
            } else {
                key.push(self.cracker.best_shift(&slice));
            }
        }
        Ok(key)
    }

    /// Sweeps every key length from 1 to the bound and keeps the candidate
    /// whose decryption contains the most dictionary words.
    ///
    /// Only a strictly greater score replaces the current best, so the
    /// shortest of equally scoring key lengths wins. The sweep always runs to
    /// completion over the whole bound; there is no early exit. If no
    /// candidate scores above zero the result is [`BreakResult::Unbroken`]
    /// carrying the input unchanged.
    pub fn break_for_language(&self, encrypted: &str, words: &WordSet) -> BreakResult {
        if encrypted.is_empty() {
            warn!("cannot break an empty message");
            return BreakResult::Unbroken {
                original_text: String::new(),
            };
        }

        let mut best: Option<(Vec<i32>, String)> = None;
        let mut best_count: usize = 0;

        for key_length in 1..=self.max_key_length {
            // Non-positive lengths and empty input are excluded above, so
            // key derivation cannot fail inside the sweep.
            let key = match self.try_key_length(encrypted, key_length) {
                Ok(key) => key,
                Err(_) => continue,
            };
            let decrypted = VigenereCipher::new(&key).decrypt(encrypted);
            let count = words.count_valid_words(&decrypted);
            debug!("key length {key_length}: {count} valid words");

            if count > best_count {
                best_count = count;
                best = Some((key, decrypted));
            }
        }

        match best {
            Some((key, decrypted_text)) => BreakResult::Broken {
                key,
                valid_word_count: best_count,
                decrypted_text,
            },
            None => BreakResult::Unbroken {
                original_text: encrypted.to_string(),
            },
        }
    }
}

impl Default for VigenereBreaker {
    /// An English breaker targeting `'e'` with the full sweep bound.
    fn default() -> Self {
        Self::new('e')
    }
}

/// Extracts the characters at positions `start`, `start + interval`,
/// `start + 2 * interval`, … of `message`.
///
/// Positions count every character, not just letters. `interval` must be
/// positive; both callers guarantee it.
fn slice_text(message: &str, start: usize, interval: usize) -> String {
    message.chars().skip(start).step_by(interval).collect()
}
