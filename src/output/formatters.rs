//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus, LetterStatusBoard};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, with Ç at the end of the home row
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÇ", "ZXCVBNM"];

/// Color a single tile by its status
#[must_use]
pub fn colorize_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// Render an evaluated row as colored tiles
#[must_use]
pub fn format_row(result: &GuessResult) -> String {
    result
        .display()
        .iter()
        .zip(result.statuses())
        .map(|(&letter, &status)| colorize_tile(letter, Some(status)).to_string())
        .collect()
}

/// Render the keyboard, one line per row, colored from the board
#[must_use]
pub fn format_keyboard(board: &LetterStatusBoard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|key| colorize_tile(key, board.get(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)] // Clamped to [0, width]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * width as f64) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn result(guess: &str, secret: &str) -> GuessResult {
        GuessResult::evaluate(&Word::new(guess, 5).unwrap(), &Word::new(secret, 5).unwrap())
            .unwrap()
    }

    #[test]
    fn row_shows_display_letters() {
        colored::control::set_override(false);
        let row = format_row(&result("forca", "força"));
        assert_eq!(row, " F  O  R  Ç  A ");
    }

    #[test]
    fn keyboard_includes_cedilla() {
        colored::control::set_override(false);
        let lines = format_keyboard(&LetterStatusBoard::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains('Ç'));
        assert!(lines[2].starts_with("    "));
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 27);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
