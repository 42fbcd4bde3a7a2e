//! Word source
//!
//! Provides the embedded corpus compiled into the binary and a loader for
//! custom word lists, both exposed through `WordList`.

mod embedded;
pub mod loader;

pub use embedded::{PALAVRAS, PALAVRAS_COUNT};
pub use loader::{CorpusError, WordList};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn palavras_count_matches_const() {
        assert_eq!(PALAVRAS.len(), PALAVRAS_COUNT);
    }

    #[test]
    fn palavras_are_valid_five_letter_words() {
        for &word in PALAVRAS {
            assert!(
                Word::new(word, 5).is_ok(),
                "Word '{word}' is not a valid 5-letter word"
            );
        }
    }

    #[test]
    fn palavras_are_uppercase() {
        for &word in PALAVRAS {
            assert_eq!(word, word.to_uppercase(), "Word '{word}' is not uppercase");
        }
    }

    #[test]
    fn palavras_contain_known_secrets() {
        for secret in ["SAGAZ", "IDEIA", "TERMO", "JOGAR", "PODER", "SONHO", "LEVAR", "FLUXO"] {
            assert!(PALAVRAS.contains(&secret), "missing {secret}");
        }
    }
}
