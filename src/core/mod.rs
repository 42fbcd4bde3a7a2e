//! Core domain types
//!
//! Pure types with no I/O: word normalization, validated words, guess
//! evaluation and keyboard status aggregation.

mod board;
mod evaluation;
mod normalize;
mod status;
mod word;

pub use board::LetterStatusBoard;
pub use evaluation::GuessResult;
pub use normalize::{normalize_letter, normalize_word};
pub use status::LetterStatus;
pub use word::{Word, WordError};
