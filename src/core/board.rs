//! Keyboard letter status aggregation
//!
//! Keeps the best status seen for every normalized letter over a game.

use super::normalize::normalize_letter;
use super::{GuessResult, LetterStatus};
use rustc_hash::FxHashMap;

/// Best known status per normalized letter
///
/// Entries only ever move up in priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusBoard {
    statuses: FxHashMap<char, LetterStatus>,
}

impl LetterStatusBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one status for a letter
    ///
    /// The letter is normalized first, so `Ç` and `C` share an entry.
    /// Returns `true` if the recorded status changed.
    pub fn merge(&mut self, letter: char, status: LetterStatus) -> bool {
        let Some(key) = normalize_letter(letter) else {
            return false;
        };

        match self.statuses.get_mut(&key) {
            Some(current) if status.priority() > current.priority() => {
                *current = status;
                true
            }
            Some(_) => false,
            None => {
                self.statuses.insert(key, status);
                true
            }
        }
    }

    /// Merge every position of an evaluated guess
    pub fn record(&mut self, result: &GuessResult) {
        for (key, status) in result.keyed_statuses() {
            self.merge(key, status);
        }
    }

    /// Status for a letter (any form: `ç`, `Ç` and `C` look up the same key)
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        normalize_letter(letter).and_then(|key| self.statuses.get(&key).copied())
    }

    /// Iterate over (normalized letter, status) entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.statuses.iter().map(|(&k, &v)| (k, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
