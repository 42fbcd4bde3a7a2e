//! Word representation
//!
//! A Word stores a fixed-length word in two aligned forms: the original
//! letters (uppercase, accents kept) for display and the normalized letters
//! used for every comparison.

use super::normalize::normalize_letter;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// A validated word with original and normalized letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
    normalized: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("word contains invalid character {0:?}")]
    InvalidLetter(char),

    #[error("guess has {guess} letters but the secret word has {secret}")]
    LengthMismatch { guess: usize, secret: usize },
}

impl Word {
    /// Create a new Word of exactly `length` letters
    ///
    /// The text is composed (NFC) first so that a letter typed as base plus
    /// combining accent counts once.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The letter count is not exactly `length`
    /// - A character is not alphabetic, or does not map to a single letter
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    ///
    /// let word = Word::new("força", 5).unwrap();
    /// assert_eq!(word.text(), "FORÇA");
    /// assert_eq!(word.normalized_text(), "FORCA");
    ///
    /// assert!(Word::new("longo demais", 5).is_err());
    /// assert!(Word::new("s3nha", 5).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let composed: Vec<char> = text.nfc().collect();

        if composed.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                got: composed.len(),
            });
        }

        let mut letters = Vec::with_capacity(length);
        let mut normalized = Vec::with_capacity(length);

        for c in composed {
            if !c.is_alphabetic() {
                return Err(WordError::InvalidLetter(c));
            }
            let upper = single_uppercase(c).ok_or(WordError::InvalidLetter(c))?;
            let plain = normalize_letter(upper).ok_or(WordError::InvalidLetter(c))?;
            letters.push(upper);
            normalized.push(plain);
        }

        Ok(Self {
            text: letters.iter().collect(),
            letters,
            normalized,
        })
    }

    /// Get the original (uppercase, accented) form
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the original letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Get the normalized letters, aligned with `letters()`
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &[char] {
        &self.normalized
    }

    /// Get the normalized form as a string
    #[must_use]
    pub fn normalized_text(&self) -> String {
        self.normalized.iter().collect()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the word has no letters (only possible with `length == 0`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether two words are the same once normalized
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }

    /// Count of each normalized letter
    ///
    /// Used for evaluation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.normalized {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

/// Uppercase a letter, rejecting letters whose uppercase is several chars
fn single_uppercase(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("termo", 5).unwrap();
        assert_eq!(word.text(), "TERMO");
        assert_eq!(word.letters(), &['T', 'E', 'R', 'M', 'O']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_keeps_accents_in_original_form() {
        let word = Word::new("Ações", 5).unwrap();
        assert_eq!(word.text(), "AÇÕES");
        assert_eq!(word.normalized(), &['A', 'C', 'O', 'E', 'S']);
    }

    #[test]
    fn word_composes_decomposed_input() {
        // "pódio" typed with a combining acute accent
        let word = Word::new("po\u{0301}dio", 5).unwrap();
        assert_eq!(word.text(), "PÓDIO");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("demais", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                got: 6
            })
        );
        assert_eq!(
            Word::new("", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                got: 0
            })
        );
    }

    #[test]
    fn word_creation_other_lengths() {
        assert!(Word::new("casa", 4).is_ok());
        assert!(Word::new("casa", 5).is_err());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cas4s", 5), Err(WordError::InvalidLetter('4'))); // Number
        assert!(Word::new("cas s", 5).is_err()); // Space
        assert!(Word::new("casa!", 5).is_err()); // Punctuation
        assert!(Word::new("maßes", 5).is_err()); // Uppercases to two letters
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("sagaz", 5).unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'S'), Some(&1));
        assert_eq!(counts.get(&'A'), Some(&2));
        assert_eq!(counts.get(&'G'), Some(&1));
        assert_eq!(counts.get(&'Z'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_letter_counts_fold_accents() {
        let word = Word::new("maçãs", 5).unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'A'), Some(&2));
        assert_eq!(counts.get(&'C'), Some(&1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("lápis", 5).unwrap();
        assert_eq!(format!("{word}"), "LÁPIS");
    }

    #[test]
    fn word_matches_ignores_accents() {
        let accented = Word::new("ÍNDIO", 5).unwrap();
        let plain = Word::new("indio", 5).unwrap();
        let other = Word::new("termo", 5).unwrap();

        assert_ne!(accented, plain);
        assert!(accented.matches(&plain));
        assert!(!accented.matches(&other));
    }
}
