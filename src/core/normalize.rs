//! Canonical comparison form for words and letters
//!
//! Two letters are "the same" for scoring and keyboard purposes when their
//! normalized forms are equal: uppercase, combining diacritics removed and
//! Ç folded to C. `"ação"` and `"ACAO"` normalize to the same text.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, stripped after decomposition
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Fold letters that survive decomposition to their plain equivalent
#[inline]
const fn fold_special(c: char) -> char {
    match c {
        'Ç' => 'C',
        other => other,
    }
}

/// Normalize text to its canonical comparison form
///
/// Never fails: empty input produces an empty string.
///
/// # Examples
/// ```
/// use termo::core::normalize_word;
///
/// assert_eq!(normalize_word("ação"), "ACAO");
/// assert_eq!(normalize_word("Índio"), "INDIO");
/// assert_eq!(normalize_word(""), "");
/// ```
#[must_use]
pub fn normalize_word(text: &str) -> String {
    text.to_uppercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(fold_special)
        .collect()
}

/// Normalize a single letter
///
/// Returns `None` when the letter does not normalize to exactly one character
/// (e.g. `ß` uppercases to `SS`, a lone combining mark vanishes).
#[must_use]
pub fn normalize_letter(letter: char) -> Option<char> {
    let mut buf = [0u8; 4];
    let normalized = normalize_word(letter.encode_utf8(&mut buf));

    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_ascii() {
        assert_eq!(normalize_word("termo"), "TERMO");
        assert_eq!(normalize_word("TeRmO"), "TERMO");
    }

    #[test]
    fn cedilla_folds_to_plain_letter() {
        assert_eq!(normalize_word("ç"), "C");
        assert_eq!(normalize_word("Ç"), "C");
        assert_eq!(normalize_word("FORÇA"), "FORCA");
    }

    #[test]
    fn accented_vowels_lose_accents() {
        assert_eq!(normalize_word("á"), "A");
        assert_eq!(normalize_word("Ê"), "E");
        assert_eq!(normalize_word("õ"), "O");
        assert_eq!(normalize_word("ÚTEIS"), "UTEIS");
        assert_eq!(normalize_word("pódio"), "PODIO");
    }

    #[test]
    fn decomposed_input_matches_composed() {
        // "e" followed by a combining acute accent
        assert_eq!(normalize_word("e\u{0301}"), normalize_word("é"));
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        for word in ["SAGAZ", "ação", "Índio", "PÊSAME", "coração", "ÁGUIA", ""] {
            let once = normalize_word(word);
            assert_eq!(normalize_word(&once), once, "not idempotent for {word}");
        }
    }

    #[test]
    fn normalize_letter_single() {
        assert_eq!(normalize_letter('ç'), Some('C'));
        assert_eq!(normalize_letter('ã'), Some('A'));
        assert_eq!(normalize_letter('z'), Some('Z'));
    }

    #[test]
    fn normalize_letter_rejects_multi_char_results() {
        assert_eq!(normalize_letter('ß'), None);
        assert_eq!(normalize_letter('\u{0301}'), None);
    }
}
