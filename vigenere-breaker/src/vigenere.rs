//! Polyalphabetic (Vigenere-family) cipher with raw positional keying

use log::warn;

use crate::caesar::CaesarCipher;

/// A Vigenere-family cipher over a repeating key of integer shifts.
///
/// The key index advances on every character of the input — spaces,
/// punctuation, and newlines included, not only letters. This raw positional
/// keying is what distinguishes the cipher from textbook Vigenere and every
/// consumer of this type depends on it.
///
/// Shifts outside `[0, 25]` are normalized at construction. The per-position
/// shift ciphers are precomputed once and reused for the whole transform.
#[derive(Debug, Clone)]
pub struct VigenereCipher {
    ciphers: Vec<CaesarCipher>,
}

impl VigenereCipher {
    /// Creates a cipher from a key slice, normalizing each shift mod 26.
    ///
    /// An empty key is accepted but makes every transform a no-op returning
    /// the input unchanged; construction logs a warning for that case.
    pub fn new(key: &[i32]) -> Self {
        if key.is_empty() {
            warn!("VigenereCipher created with an empty key; transforms will return input unchanged");
        }
        Self {
            ciphers: key.iter().map(|&shift| CaesarCipher::new(shift)).collect(),
        }
    }

    /// Returns the normalized key shifts.
    pub fn key(&self) -> Vec<i32> {
        self.ciphers.iter().map(|c| i32::from(c.shift())).collect()
    }

    /// Returns the key length (the cipher's period).
    pub fn key_length(&self) -> usize {
        self.ciphers.len()
    }

    /// Encrypts the input text.
    pub fn encrypt(&self, input: &str) -> String {
        self.transform(input, true)
    }

    /// Decrypts the input text.
    pub fn decrypt(&self, input: &str) -> String {
        self.transform(input, false)
    }

    fn transform(&self, input: &str, encrypt: bool) -> String {
        if self.ciphers.is_empty() {
            return input.to_string();
        }

        input
            .chars()
            .enumerate()
            .map(|(i, c)| {
                // Every character position selects a key shift, letter or not.
                let cipher = &self.ciphers[i % self.ciphers.len()];
                if encrypt {
                    cipher.encrypt_char(c)
                } else {
                    cipher.decrypt_char(c)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let cipher = VigenereCipher::new(&[3, 1, 4, 1, 5]);
        let input = "Attack at dawn!\nHold the east gate.";
        let encrypted = cipher.encrypt(input);
        assert_eq!(cipher.decrypt(&encrypted), input);
    }

    #[test]
    fn test_key_advances_on_every_character() {
        // The space consumes key position 0, so 'c' gets shift 2 and 'd'
        // wraps back to shift 1. Textbook Vigenere would produce "bd df".
        let cipher = VigenereCipher::new(&[1, 2]);
        assert_eq!(cipher.encrypt("ab cd"), "bd ee");
    }

    #[test]
    fn test_non_letters_unchanged() {
        let cipher = VigenereCipher::new(&[7, 19]);
        let input = "12:30 -- !?\n";
        assert_eq!(cipher.encrypt(input), input);
        assert_eq!(cipher.decrypt(input), input);
    }

    #[test]
    fn test_empty_key_is_noop() {
        let cipher = VigenereCipher::new(&[]);
        assert_eq!(cipher.key_length(), 0);
        assert_eq!(cipher.encrypt("attack at dawn"), "attack at dawn");
        assert_eq!(cipher.decrypt("attack at dawn"), "attack at dawn");
    }

    #[test]
    fn test_key_normalization() {
        let cipher = VigenereCipher::new(&[-1, 26, 29]);
        assert_eq!(cipher.key(), vec![25, 0, 3]);
    }

    #[test]
    fn test_single_entry_key_matches_caesar() {
        let caesar = CaesarCipher::new(9);
        let vigenere = VigenereCipher::new(&[9]);
        let input = "Meet me near the elm trees.";
        assert_eq!(vigenere.encrypt(input), caesar.encrypt(input));
    }

    #[test]
    fn test_case_preserved() {
        let cipher = VigenereCipher::new(&[13]);
        let encrypted = cipher.encrypt("AbCdEf");
        assert_eq!(encrypted, "NoPqRs");
    }
}
