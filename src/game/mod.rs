//! Game state machine
//!
//! The `Game` owns all per-game state and is driven by `Command`s, so any
//! front end (TUI, line mode, tests) plays through the same transitions.

mod command;
mod config;
mod state;
mod validator;

pub use command::{Command, Outcome};
pub use config::{
    ConfigError, GameConfig, MAX_ROWS, MAX_ROWS_LIMIT, WORD_LENGTH, WORD_LENGTH_LIMIT,
};
pub use state::{Game, GameError, GameStatus};
pub use validator::{AnyWord, WordValidator};
