//! # Vigenere Breaker Library
//!
//! This library recovers the key and plaintext of text encrypted with a
//! polyalphabetic (Vigenere-family) substitution cipher of unknown key
//! length, using letter-frequency analysis combined with dictionary-based
//! plausibility scoring.
//!
//! ## How it works
//!
//! For every trial key length the ciphertext is split into interleaved
//! subsequences by character position; a frequency cracker infers the most
//! probable Caesar shift of each subsequence, the assembled key decrypts the
//! full text, and the decryption is scored by counting dictionary words. The
//! best-scoring candidate across all trial lengths wins.
//!
//! The cipher handled here differs from textbook Vigenere in one critical
//! way: the key index advances on **every** character — spaces, punctuation,
//! and newlines included — not only on letters.
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_breaker::{VigenereBreaker, VigenereCipher, WordSet};
//!
//! let plaintext = "Defend the east gate at seven. The enemy seeks the keep \
//!                  before the freeze sets in.";
//! let encrypted = VigenereCipher::new(&[3, 1, 4]).encrypt(plaintext);
//!
//! let words = WordSet::from_words([
//!     "defend", "the", "east", "gate", "at", "seven", "enemy", "seeks",
//!     "keep", "before", "freeze", "sets", "in",
//! ]);
//!
//! let result = VigenereBreaker::new('e').break_for_language(&encrypted, &words);
//! assert_eq!(result.best_key(), Some(&[3, 1, 4][..]));
//! assert_eq!(result.decrypted_text(), plaintext);
//! ```
//!
//! ## Features
//!
//! - Pure computation: no I/O, no global state, safe for concurrent callers
//! - Degenerate inputs resolve to documented fallbacks instead of panics
//! - "No key found" is a dedicated result variant, never a sentinel in
//!   disguise

// Public modules
pub mod caesar;
pub mod cracker;
pub mod dictionary;
pub mod error;
pub mod vigenere;

// Re-exports for easy access
pub use caesar::{CaesarCipher, CaesarCracker};
pub use cracker::{BreakResult, VigenereBreaker, MAX_KEY_LENGTH};
pub use dictionary::WordSet;
pub use error::{BreakError, Result};
pub use vigenere::VigenereCipher;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
