//! Dictionary seam consumed by submissions

use crate::core::Word;

/// Decides whether a filled row is an acceptable guess
pub trait WordValidator {
    /// Whether `word` is a recognized entry
    fn is_valid(&self, word: &Word) -> bool;
}

/// Accepts every well-formed word (no dictionary available)
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyWord;

impl WordValidator for AnyWord {
    fn is_valid(&self, _word: &Word) -> bool {
        true
    }
}

impl<V: WordValidator + ?Sized> WordValidator for &V {
    fn is_valid(&self, word: &Word) -> bool {
        (**self).is_valid(word)
    }
}
