//! Terminal output formatting
//!
//! Colored rows, keyboard and summaries for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_guess, print_statistics};
