//! Attempt state machine
//!
//! Owns the board of typed letters, the cursor, the evaluated rows and the
//! keyboard status aggregation for one game. All mutation goes through the
//! transition methods below (or `apply`, which dispatches a `Command`).

use super::command::{Command, Outcome};
use super::config::{ConfigError, GameConfig};
use super::validator::WordValidator;
use crate::core::{GuessResult, LetterStatusBoard, Word, WordError, normalize_letter};
use thiserror::Error;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Rejected transition; the game state is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error("the previous guess is still being revealed")]
    RevealPending,

    #[error("row has {filled} of {needed} letters")]
    IncompleteRow { filled: usize, needed: usize },

    #[error("{0} is not in the word list")]
    UnknownWord(String),

    #[error("{0:?} is not a letter")]
    InvalidLetter(char),

    #[error("row {row} is not the current row ({current})")]
    WrongRow { row: usize, current: usize },

    #[error("column {col} is outside a {length}-letter row")]
    ColumnOutOfRange { col: usize, length: usize },

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One game: secret word, typed rows, cursor and aggregated statuses
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    secret: Word,
    cells: Vec<Vec<Option<char>>>,
    results: Vec<GuessResult>,
    board: LetterStatusBoard,
    row: usize,
    col: usize,
    status: GameStatus,
    pending_reveal: Option<usize>,
}

impl Game {
    /// Start a game for `secret`
    ///
    /// # Errors
    /// Returns `GameError` if the configuration is unusable or the secret's
    /// length differs from `config.word_length`.
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    /// use termo::game::{AnyWord, Game, GameConfig, GameStatus};
    ///
    /// let secret = Word::new("termo", 5).unwrap();
    /// let mut game = Game::new(GameConfig::default(), secret).unwrap();
    ///
    /// for letter in "termo".chars() {
    ///     game.enter_letter(letter).unwrap();
    /// }
    /// let result = game.submit(&AnyWord).unwrap();
    ///
    /// assert!(result.is_win());
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn new(config: GameConfig, secret: Word) -> Result<Self, GameError> {
        config.validate()?;
        check_secret(&config, &secret)?;

        Ok(Self {
            cells: vec![vec![None; config.word_length]; config.max_rows],
            results: Vec::with_capacity(config.max_rows),
            board: LetterStatusBoard::new(),
            row: 0,
            col: 0,
            status: GameStatus::InProgress,
            pending_reveal: None,
            config,
            secret,
        })
    }

    /// Start over with a new secret, keeping the configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if the secret does not fit the board;
    /// the current game is kept in that case.
    pub fn reset(&mut self, secret: Word) -> Result<(), GameError> {
        *self = Self::new(self.config, secret)?;
        Ok(())
    }

    /// Dispatch an input command to its transition
    ///
    /// # Errors
    /// Returns the `GameError` of the underlying transition.
    pub fn apply<V: WordValidator + ?Sized>(
        &mut self,
        command: Command,
        validator: &V,
    ) -> Result<Outcome, GameError> {
        match command {
            Command::Letter(letter) => self.enter_letter(letter).map(|()| Outcome::Edited),
            Command::Delete => self.delete().map(|()| Outcome::Edited),
            Command::MoveLeft => self.move_left().map(|()| Outcome::Edited),
            Command::MoveRight => self.move_right().map(|()| Outcome::Edited),
            Command::Select { row, col } => self.select(row, col).map(|()| Outcome::Edited),
            Command::Submit => self.submit(validator).map(Outcome::Submitted),
        }
    }

    /// Type a letter at the cursor and advance (the cursor stays on the
    /// last column once it gets there)
    ///
    /// # Errors
    /// Returns `GameError::InvalidLetter` for anything that is not a single
    /// letter or that would merge with a neighbouring tile into one letter,
    /// or the common rejection errors.
    pub fn enter_letter(&mut self, letter: char) -> Result<(), GameError> {
        self.ensure_accepting()?;

        let upper = validate_letter(letter)?;
        if self.composes_with_neighbours(upper) {
            return Err(GameError::InvalidLetter(letter));
        }
        self.cells[self.row][self.col] = Some(upper);
        self.col = (self.col + 1).min(self.config.word_length - 1);
        Ok(())
    }

    /// Backspace
    ///
    /// Clears the cell under the cursor if it holds a letter. Otherwise moves
    /// one column left (if possible) and clears that cell.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` or `GameError::RevealPending`.
    pub fn delete(&mut self) -> Result<(), GameError> {
        self.ensure_accepting()?;

        let row = &mut self.cells[self.row];
        if row[self.col].is_some() {
            row[self.col] = None;
        } else if self.col > 0 {
            self.col -= 1;
            row[self.col] = None;
        }
        Ok(())
    }

    /// Move the cursor one column left, stopping at the first column
    ///
    /// # Errors
    /// Returns `GameError::GameOver` or `GameError::RevealPending`.
    pub fn move_left(&mut self) -> Result<(), GameError> {
        self.ensure_accepting()?;
        self.col = self.col.saturating_sub(1);
        Ok(())
    }

    /// Move the cursor one column right, stopping at the last column
    ///
    /// # Errors
    /// Returns `GameError::GameOver` or `GameError::RevealPending`.
    pub fn move_right(&mut self) -> Result<(), GameError> {
        self.ensure_accepting()?;
        self.col = (self.col + 1).min(self.config.word_length - 1);
        Ok(())
    }

    /// Put the cursor on a tile of the current row
    ///
    /// # Errors
    /// Returns `GameError::WrongRow` for any other row and
    /// `GameError::ColumnOutOfRange` for a column past the end.
    pub fn select(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        self.ensure_accepting()?;

        if row != self.row {
            return Err(GameError::WrongRow {
                row,
                current: self.row,
            });
        }
        if col >= self.config.word_length {
            return Err(GameError::ColumnOutOfRange {
                col,
                length: self.config.word_length,
            });
        }
        self.col = col;
        Ok(())
    }

    /// Submit the current row
    ///
    /// On success the result is merged into the keyboard board and the game
    /// moves to the next row, `Won` or `Lost` immediately. The submitted row
    /// then stays pending until `finish_reveal` is called, and every other
    /// transition is rejected meanwhile.
    ///
    /// # Errors
    /// - `GameError::IncompleteRow` if any cell of the row is empty
    /// - `GameError::UnknownWord` if `validator` rejects the word
    /// - `GameError::GameOver` / `GameError::RevealPending`
    pub fn submit<V: WordValidator + ?Sized>(
        &mut self,
        validator: &V,
    ) -> Result<GuessResult, GameError> {
        self.ensure_accepting()?;

        let needed = self.config.word_length;
        let filled = self.filled_in_row();
        if filled < needed {
            debug!(row = self.row, filled, needed, "rejected incomplete row");
            return Err(GameError::IncompleteRow { filled, needed });
        }

        let text: String = self.cells[self.row].iter().flatten().collect();
        let guess = Word::new(&text, needed)?;

        if !validator.is_valid(&guess) {
            debug!(row = self.row, word = %guess, "rejected unknown word");
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }

        let result = GuessResult::evaluate(&guess, &self.secret)?;
        debug!(row = self.row, guess = %guess, pattern = %result.to_emoji(), "guess accepted");

        self.board.record(&result);
        self.results.push(result.clone());
        self.pending_reveal = Some(self.row);

        if result.is_win() {
            self.status = GameStatus::Won;
            info!(attempts = self.results.len(), "game won");
        } else {
            self.row += 1;
            self.col = 0;
            if self.row >= self.config.max_rows {
                self.status = GameStatus::Lost;
                info!(secret = %self.secret, "game lost");
            }
        }

        Ok(result)
    }

    /// Release the reveal guard set by the last submission
    ///
    /// Returns the row that was pending, if any.
    pub fn finish_reveal(&mut self) -> Option<usize> {
        self.pending_reveal.take()
    }

    /// Whether `letter` at the cursor would compose with an adjacent cell
    fn composes_with_neighbours(&self, letter: char) -> bool {
        let row = &self.cells[self.row];
        let before = self.col.checked_sub(1).and_then(|c| row[c]);
        let after = row.get(self.col + 1).copied().flatten();

        before.is_some_and(|prev| composes(prev, letter))
            || after.is_some_and(|next| composes(letter, next))
    }

    fn ensure_accepting(&self) -> Result<(), GameError> {
        if self.pending_reveal.is_some() {
            return Err(GameError::RevealPending);
        }
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret word; presentation layers should only show it once the
    /// game is over
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Current row (equals `max_rows` once the game is lost)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Cursor column
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Letter typed at (row, col), if any
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Number of filled cells in the current row
    #[must_use]
    pub fn filled_in_row(&self) -> usize {
        self.cells
            .get(self.row)
            .map_or(0, |r| r.iter().filter(|c| c.is_some()).count())
    }

    /// Evaluated rows, in submission order
    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// Aggregated keyboard statuses
    #[must_use]
    pub const fn board(&self) -> &LetterStatusBoard {
        &self.board
    }

    /// Row whose result has not finished revealing
    #[must_use]
    pub const fn pending_reveal(&self) -> Option<usize> {
        self.pending_reveal
    }

    /// Number of submitted guesses
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.results.len()
    }
}

fn check_secret(config: &GameConfig, secret: &Word) -> Result<(), WordError> {
    if secret.len() == config.word_length {
        Ok(())
    } else {
        Err(WordError::InvalidLength {
            expected: config.word_length,
            got: secret.len(),
        })
    }
}

/// Uppercase a typed letter, rejecting anything that is not one letter
/// Whether two adjacent letters compose into fewer characters under NFC
fn composes(first: char, second: char) -> bool {
    [first, second].into_iter().nfc().count() != 2
}

fn validate_letter(letter: char) -> Result<char, GameError> {
    if !letter.is_alphabetic() || normalize_letter(letter).is_none() {
        return Err(GameError::InvalidLetter(letter));
    }
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Ok(u),
        _ => Err(GameError::InvalidLetter(letter)),
    }
}
