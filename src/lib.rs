//! Termo
//!
//! A terminal word-guessing game with accent-aware letter scoring. Guesses are
//! compared on normalized letters (`ç` = `C`, `á` = `A`), while the secret's
//! accents are shown back on correctly placed letters.
//!
//! # Quick Start
//!
//! ```rust
//! use termo::core::{GuessResult, LetterStatus, Word};
//!
//! let guess = Word::new("acoes", 5).unwrap();
//! let secret = Word::new("ações", 5).unwrap();
//!
//! let result = GuessResult::evaluate(&guess, &secret).unwrap();
//! assert!(result.is_win());
//! assert_eq!(result.display_text(), "AÇÕES");
//! assert_eq!(result.count(LetterStatus::Correct), 5);
//! ```

// Core domain types
pub mod core;

// Attempt state machine
pub mod game;

// Word lists
pub mod wordlists;

// Statistics and secret selection across games
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
