//! One-shot scoring of a guess against a secret

use crate::core::{GuessResult, Word, WordError};

/// Score `guess` against `secret`, both of `length` letters
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid `length`-letter word.
///
/// # Examples
/// ```
/// use termo::commands::check_guess;
///
/// let result = check_guess("salsa", "sagaz", 5).unwrap();
/// assert_eq!(result.to_emoji(), "🟩🟩⬜⬜🟨");
/// ```
pub fn check_guess(guess: &str, secret: &str, length: usize) -> Result<GuessResult, WordError> {
    let guess = Word::new(guess, length)?;
    let secret = Word::new(secret, length)?;
    GuessResult::evaluate(&guess, &secret)
}
