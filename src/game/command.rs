use crate::core::GuessResult;

/// Input command for the game state machine
///
/// Every input event (key press, tile click) maps to exactly one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Type a letter at the cursor
    Letter(char),
    /// Backspace
    Delete,
    /// Move the cursor one column left
    MoveLeft,
    /// Move the cursor one column right
    MoveRight,
    /// Select a tile by (row, column)
    Select { row: usize, col: usize },
    /// Submit the current row
    Submit,
}

/// Effect of an accepted command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The row or cursor changed
    Edited,
    /// The row was evaluated
    Submitted(GuessResult),
}

impl From<char> for Command {
    fn from(letter: char) -> Self {
        Self::Letter(letter)
    }
}
