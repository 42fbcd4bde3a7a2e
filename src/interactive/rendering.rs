//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and session statistics.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, LetterStatusBoard};
use crate::game::GameStatus;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Messages and stats
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 TERMO")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let rows = u16::try_from(app.session.game().config().max_rows).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(rows.saturating_add(2)), // Board
            Constraint::Length(5),                   // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

/// Tile colors for a status (`None` = not evaluated yet)
fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let config = game.config();
    let active = game.status() == GameStatus::InProgress && app.reveal.is_none();

    let lines: Vec<Line> = (0..config.max_rows)
        .map(|row| {
            let result = game.results().get(row);
            let revealed = app.revealed_in_row(row);

            let tiles: Vec<Span> = (0..config.word_length)
                .map(|col| {
                    let evaluated = result.filter(|_| col < revealed);
                    let letter = evaluated
                        .map(|r| r.display()[col])
                        .or_else(|| game.cell(row, col))
                        .unwrap_or('·');

                    let mut style = status_style(evaluated.map(|r| r.statuses()[col]));
                    if active && row == game.row() {
                        if app.is_flashing() {
                            style = style.fg(Color::Red).add_modifier(Modifier::BOLD);
                        } else if col == game.col() {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                    }
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();

            Line::from(tiles)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn keyboard_lines(board: &LetterStatusBoard) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys: Vec<Span> = row
                .chars()
                .map(|key| Span::styled(format!(" {key} "), status_style(board.get(key))))
                .collect();
            Line::from(keys)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(&app.visible_board()))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
            Constraint::Length(9), // Statistics
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let used = game.attempts_used();
    let max = game.config().max_rows;
    let percent = (used * 100 / max.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let lines: Vec<Line> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let width = count * 16 / most;
            Line::from(vec![
                Span::raw(format!("{} ", i + 1)),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let game = app.session.game();
    let mode_text = match game.status() {
        GameStatus::InProgress if app.reveal.is_some() => "Revealing...",
        GameStatus::InProgress => "Playing",
        GameStatus::Won => "Won",
        GameStatus::Lost => "Lost",
    };
    let mode = Paragraph::new(format!("Mode: {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    let stats_widget = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats_widget, chunks[1]);

    let streak_text = format!(
        "Streak: {} | Best: {}",
        stats.current_streak, stats.max_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if game.is_over() {
        "Esc: Quit | Ctrl-N: New Game"
    } else {
        "Esc: Quit | Enter: Submit | ←/→: Move | Ctrl-N: New"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, MAX_ROWS_LIMIT};
    use crate::session::Session;
    use crate::wordlists::WordList;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let list = WordList::from_text("termo", 5).unwrap();
        let session = Session::new(list, GameConfig::default(), Some(1), true).unwrap();
        App::new(session)
    }

    #[test]
    fn keyboard_uses_board_colors() {
        let mut board = LetterStatusBoard::new();
        board.merge('C', LetterStatus::Correct);

        let lines = keyboard_lines(&board);
        let cedilla = lines[1]
            .spans
            .iter()
            .find(|s| s.content.contains('Ç'))
            .unwrap();
        assert_eq!(cedilla.style.bg, Some(Color::Green));
    }

    #[test]
    fn draws_tallest_board() {
        let list = WordList::from_text("termo", 5).unwrap();
        let config = GameConfig::new(5, MAX_ROWS_LIMIT);
        let app = App::new(Session::new(list, config, Some(1), true).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
    }

    #[test]
    fn draws_without_panicking() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = app();

        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Board"));
        assert!(text.contains("Keyboard"));
    }
}
