//! Display functions for game results

use super::formatters::{create_progress_bar, format_keyboard, format_row};
use crate::core::GuessResult;
use crate::game::{Game, GameStatus};
use crate::session::Statistics;
use colored::Colorize;

/// Print one evaluated guess with its emoji pattern
pub fn print_guess(turn: usize, result: &GuessResult) {
    println!(
        "  {} {}  {}",
        format!("{turn}.").bright_black(),
        format_row(result),
        result.to_emoji()
    );
}

/// Print every submitted row followed by the keyboard
pub fn print_board(game: &Game) {
    println!();
    for (i, result) in game.results().iter().enumerate() {
        print_guess(i + 1, result);
    }
    println!();
    for line in format_keyboard(game.board()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(game: &Game) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.status() {
        GameStatus::Won => {
            let attempts = game.attempts_used();
            println!(
                "{}",
                format!(
                    "  🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "  {} {}",
                "❌ Out of guesses! The word was".red().bold(),
                game.secret().text().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }

    if !game.results().is_empty() {
        println!();
        for result in game.results() {
            println!("  {}", result.to_emoji());
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if stats.games_won > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (i, &count) in stats.guess_distribution.iter().enumerate() {
            println!(
                "   {}: {} {count}",
                i + 1,
                create_progress_bar(count, most, 30).green()
            );
        }
    }
}
