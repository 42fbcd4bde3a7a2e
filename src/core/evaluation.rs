//! Guess evaluation
//!
//! Scores a guess against the secret word with the standard two-pass rule:
//! exact matches are credited first, then the remaining letters are marked
//! present while unmatched occurrences are left in the secret.

use super::{LetterStatus, Word, WordError};
use std::fmt;

/// Feedback for one evaluated guess
///
/// All three sequences have one entry per letter of the guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    statuses: Vec<LetterStatus>,
    display: Vec<char>,
    keys: Vec<char>,
}

impl GuessResult {
    /// Evaluate `guess` against `secret`
    ///
    /// Letters are compared in normalized form. At correct positions the
    /// secret's original letter is used for display, so guessing `ACOES`
    /// against `AÇÕES` shows the accents.
    ///
    /// # Algorithm
    /// 1. Count each normalized letter of the secret
    /// 2. First pass: mark exact position matches and remove them from the pool
    /// 3. Second pass, in position order: mark present while the pool still
    ///    holds the letter, absent otherwise
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use termo::core::{GuessResult, LetterStatus, Word};
    ///
    /// let guess = Word::new("acoes", 5).unwrap();
    /// let secret = Word::new("ações", 5).unwrap();
    /// let result = GuessResult::evaluate(&guess, &secret).unwrap();
    ///
    /// assert!(result.is_win());
    /// assert_eq!(result.display_text(), "AÇÕES");
    /// ```
    pub fn evaluate(guess: &Word, secret: &Word) -> Result<Self, WordError> {
        if guess.len() != secret.len() {
            return Err(WordError::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        let guess_keys = guess.normalized();
        let secret_keys = secret.normalized();
        let mut available = secret.letter_counts();

        let mut statuses = vec![LetterStatus::Absent; guess.len()];
        let mut display = guess.letters().to_vec();

        // First pass: exact position matches
        for (i, (g, s)) in guess_keys.iter().zip(secret_keys).enumerate() {
            if g == s {
                statuses[i] = LetterStatus::Correct;
                display[i] = secret.letters()[i];

                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters from what is left in the pool
        for (status, letter) in statuses.iter_mut().zip(guess_keys) {
            if *status == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Ok(Self {
            statuses,
            display,
            keys: guess_keys.to_vec(),
        })
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.statuses
    }

    /// Per-position letters to render
    #[inline]
    #[must_use]
    pub fn display(&self) -> &[char] {
        &self.display
    }

    /// Display letters joined into a string
    #[must_use]
    pub fn display_text(&self) -> String {
        self.display.iter().collect()
    }

    /// Normalized letters paired with their status, in position order
    pub fn keyed_statuses(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.keys.iter().copied().zip(self.statuses.iter().copied())
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Whether the result holds no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    /// Convert to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_text(), self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    fn eval(guess: &str, secret: &str) -> GuessResult {
        let guess = Word::new(guess, 5).unwrap();
        let secret = Word::new(secret, 5).unwrap();
        GuessResult::evaluate(&guess, &secret).unwrap()
    }

    #[test]
    fn all_correct_is_win() {
        let result = eval("termo", "termo");
        assert_eq!(result.statuses(), &[Correct; 5]);
        assert!(result.is_win());
        assert_eq!(result.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn all_absent() {
        let result = eval("fluxo", "sagaz");
        assert_eq!(result.statuses(), &[Absent; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn anagram_with_repeated_letter() {
        // AZAGS vs SAGAZ: no position matches, every letter is still
        // available in the pool when it is reached (S:1 A:2 G:1 Z:1)
        let result = eval("azags", "sagaz");
        assert_eq!(result.statuses(), &[Present; 5]);
        assert_eq!(result.count(Present), 5);
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_duplicate() {
        // Guess has two O's, secret has one O at position 4.
        // The exact match must win even though the first O comes earlier.
        let result = eval("oculo", "termo");
        assert_eq!(result.statuses(), &[Absent, Absent, Absent, Absent, Correct]);
    }

    #[test]
    fn duplicate_guess_letter_credited_once() {
        // Secret has a single A, guess has three
        let result = eval("arara", "campo");
        assert_eq!(
            result.statuses(),
            &[Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn duplicates_split_between_correct_and_present() {
        // SALSA vs SAGAZ: S correct, A correct, L absent, S absent (only one S),
        // A present (secret's second A at position 3 is unmatched)
        let result = eval("salsa", "sagaz");
        assert_eq!(
            result.statuses(),
            &[Correct, Correct, Absent, Absent, Present]
        );
    }

    #[test]
    fn accents_ignored_for_scoring() {
        let result = eval("indio", "índio");
        assert!(result.is_win());
        // Secret's accented letter is shown at correct positions
        assert_eq!(result.display(), &['Í', 'N', 'D', 'I', 'O']);
    }

    #[test]
    fn cedilla_matches_plain_c() {
        let result = eval("forca", "força");
        assert!(result.is_win());
        assert_eq!(result.display_text(), "FORÇA");
    }

    #[test]
    fn non_correct_positions_keep_typed_letter() {
        // "AÇÕES" typed with accents against LAÇOS: only positions that
        // match exactly take the secret's letter
        let result = eval("ações", "laços");
        assert_eq!(result.statuses(), &[Present, Present, Present, Absent, Correct]);
        assert_eq!(result.display(), &['A', 'Ç', 'Õ', 'E', 'S']);
    }

    #[test]
    fn keyed_statuses_use_normalized_letters() {
        let result = eval("maçãs", "sagaz");
        let keys: Vec<char> = result.keyed_statuses().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!['M', 'A', 'C', 'A', 'S']);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let guess = Word::new("casa", 4).unwrap();
        let secret = Word::new("termo", 5).unwrap();
        assert_eq!(
            GuessResult::evaluate(&guess, &secret),
            Err(WordError::LengthMismatch {
                guess: 4,
                secret: 5
            })
        );
    }

    #[test]
    fn credited_letters_never_exceed_secret_count() {
        let secret = Word::new("sagaz", 5).unwrap();
        let counts = secret.letter_counts();

        for guess in ["aaaaa", "azags", "salsa", "gazes", "sagaz", "zzzzz", "asaaa"] {
            let guess = Word::new(guess, 5).unwrap();
            let result = GuessResult::evaluate(&guess, &secret).unwrap();
            assert_eq!(result.len(), 5);

            let mut credited: rustc_hash::FxHashMap<char, usize> = rustc_hash::FxHashMap::default();
            for (key, status) in result.keyed_statuses() {
                if status != Absent {
                    *credited.entry(key).or_insert(0) += 1;
                }
            }
            for (letter, n) in credited {
                assert!(
                    n <= counts.get(&letter).copied().unwrap_or(0),
                    "{letter} over-credited for {guess}"
                );
            }
        }
    }
}
