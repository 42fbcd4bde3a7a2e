//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is a whole guess.

use crate::core::{GuessResult, WordError};
use crate::game::{Command, GameError};
use crate::output::{print_board, print_game_over, print_statistics};
use crate::session::Session;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use unicode_normalization::UnicodeNormalization;

/// Type `input` into the current row and submit it
///
/// The input is composed (NFC) so a letter typed as base plus combining
/// accent fills one tile. Whatever the row held before is cleared first, so
/// a rejected guess can simply be retyped. The reveal guard is released
/// right away since rows are printed in one go.
///
/// # Errors
///
/// Returns the `GameError` that rejected a letter or the submission.
pub fn submit_word(session: &mut Session, input: &str) -> Result<GuessResult, GameError> {
    let needed = session.game().config().word_length;
    let letters: Vec<char> = input.nfc().collect();
    if letters.len() > needed {
        return Err(WordError::InvalidLength {
            expected: needed,
            got: letters.len(),
        }
        .into());
    }

    clear_row(session)?;
    for letter in letters {
        session.apply(Command::Letter(letter))?;
    }

    let result = session.submit()?;
    session.finish_reveal();
    Ok(result)
}

fn clear_row(session: &mut Session) -> Result<(), GameError> {
    while session.game().filled_in_row() > 0 || session.game().col() > 0 {
        session.apply(Command::Delete)?;
    }
    Ok(())
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails or no new secret can be
/// drawn.
pub fn run_simple(session: &mut Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Termo - Simple Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = *session.game().config();
    println!(
        "Guess the {}-letter word in {} tries. Accents are optional.",
        config.word_length, config.max_rows
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        if session.game().is_over() {
            print_game_over(session.game());
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" | "sim" | "s" => {
                    session.new_game()?;
                    println!("\n🔄 New game started!\n");
                }
                _ => break,
            }
        }

        let prompt = format!(
            "Guess {}/{}",
            session.game().row() + 1,
            config.max_rows
        );
        let Some(input) = read_line(&prompt)? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.new_game()?;
                println!("\n🔄 New game started!\n");
            }
            _ => match submit_word(session, &input) {
                Ok(_) => print_board(session.game()),
                Err(e) => println!("{} {e}\n", "❌".red()),
            },
        }
    }

    print_statistics(session.stats());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

fn get_user_input(prompt: &str) -> Result<String> {
    Ok(read_line(prompt)?.unwrap_or_default())
}
