//! Play session
//!
//! Ties a word list, a random source and the current game together, and keeps
//! statistics across the games of one process. Front ends drive the session
//! instead of holding their own game state.

use crate::core::GuessResult;
use crate::game::{AnyWord, Command, Game, GameConfig, GameError, GameStatus, Outcome};
use crate::wordlists::WordList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::info;

/// Error type for session setup
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("word list has {list}-letter words but the board has {board} columns")]
    LengthMismatch { list: usize, board: usize },

    #[error("word list has no secret to offer")]
    NoWords,

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Results across the games of a session
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_rows: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_rows],
            ..Self::default()
        }
    }

    fn record_win(&mut self, attempts: usize) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(slot) = attempts
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won (0 when nothing was played)
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// The current game plus everything that outlives it
pub struct Session {
    words: WordList,
    game: Game,
    rng: StdRng,
    stats: Statistics,
    accept_any: bool,
}

impl Session {
    /// Start a session and its first game
    ///
    /// `seed` makes the sequence of secrets reproducible. With `accept_any`
    /// set, guesses are not checked against the word list.
    ///
    /// # Errors
    /// Returns `SessionError` if the word list does not match the board
    /// length or the configuration is unusable.
    pub fn new(
        words: WordList,
        config: GameConfig,
        seed: Option<u64>,
        accept_any: bool,
    ) -> Result<Self, SessionError> {
        if words.length() != config.word_length {
            return Err(SessionError::LengthMismatch {
                list: words.length(),
                board: config.word_length,
            });
        }

        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let secret = words
            .random_secret(&mut rng)
            .ok_or(SessionError::NoWords)?
            .clone();
        let game = Game::new(config, secret)?;

        Ok(Self {
            stats: Statistics::new(config.max_rows),
            words,
            game,
            rng,
            accept_any,
        })
    }

    /// Abandon the current game (if any) and start a new one
    ///
    /// # Errors
    /// Returns `SessionError::NoWords` if no secret can be drawn.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        let secret = self
            .words
            .random_secret(&mut self.rng)
            .ok_or(SessionError::NoWords)?
            .clone();
        self.game.reset(secret)?;
        info!(games_played = self.stats.games_played, "new game started");
        Ok(())
    }

    /// Feed one input command to the current game
    ///
    /// # Errors
    /// Returns the `GameError` of the rejected transition.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, GameError> {
        let outcome = if self.accept_any {
            self.game.apply(command, &AnyWord)?
        } else {
            self.game.apply(command, &self.words)?
        };

        if matches!(outcome, Outcome::Submitted(_)) {
            self.record_outcome();
        }
        Ok(outcome)
    }

    /// Submit the current row
    ///
    /// # Errors
    /// Returns the `GameError` of the rejected submission.
    pub fn submit(&mut self) -> Result<GuessResult, GameError> {
        let result = if self.accept_any {
            self.game.submit(&AnyWord)?
        } else {
            self.game.submit(&self.words)?
        };
        self.record_outcome();
        Ok(result)
    }

    /// Count the current game if the last submission finished it
    fn record_outcome(&mut self) {
        match self.game.status() {
            GameStatus::Won => self.stats.record_win(self.game.attempts_used()),
            GameStatus::Lost => self.stats.record_loss(),
            GameStatus::InProgress => {}
        }
    }

    /// Release the reveal guard of the last submission
    pub fn finish_reveal(&mut self) -> Option<usize> {
        self.game.finish_reveal()
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }
}
