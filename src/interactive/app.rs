//! TUI application state and logic

use crate::core::LetterStatusBoard;
use crate::game::{Command, GameError, GameStatus, Outcome};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Time between two revealed tiles of a submitted row
pub const TILE_REVEAL: Duration = Duration::from_millis(250);

/// How long a rejected row stays highlighted
pub const REJECT_FLASH: Duration = Duration::from_millis(600);

/// Event poll timeout; bounds animation latency
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub reveal: Option<Reveal>,
    pub rejected_at: Option<Instant>,
    pub should_quit: bool,
}

/// Progress of the tile-by-tile reveal of a submitted row
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    pub shown: usize,
    pub last_tick: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NewGame,
    Play(Command),
    Ignore,
}

/// Translate a key press into an action
///
/// `row` and `length` locate the current row so Home/End can jump to its
/// first and last tile.
#[must_use]
pub fn map_key(key: KeyEvent, row: usize, length: usize) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c' | 'C') if ctrl => Action::Quit,
        KeyCode::Char('n' | 'N') if ctrl => Action::NewGame,
        KeyCode::Char(_) if ctrl => Action::Ignore,
        KeyCode::Char(c) => Action::Play(Command::from(c)),
        KeyCode::Backspace | KeyCode::Delete => Action::Play(Command::Delete),
        KeyCode::Left => Action::Play(Command::MoveLeft),
        KeyCode::Right => Action::Play(Command::MoveRight),
        KeyCode::Home => Action::Play(Command::Select { row, col: 0 }),
        KeyCode::End => Action::Play(Command::Select {
            row,
            col: length.saturating_sub(1),
        }),
        KeyCode::Enter => Action::Play(Command::Submit),
        _ => Action::Ignore,
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let config = *session.game().config();
        Self {
            session,
            messages: vec![
                Message {
                    text: format!(
                        "Guess the {}-letter word in {} tries.",
                        config.word_length, config.max_rows
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Accents are filled in for you.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            reveal: None,
            rejected_at: None,
            should_quit: false,
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NewGame => self.new_game(),
            Action::Play(command) => self.play(command, now),
            Action::Ignore => {}
        }
    }

    fn play(&mut self, command: Command, now: Instant) {
        if self.reveal.is_some() {
            return;
        }

        match self.session.apply(command) {
            Ok(Outcome::Edited) => {}
            Ok(Outcome::Submitted(_)) => {
                if let Some(row) = self.session.game().pending_reveal() {
                    self.reveal = Some(Reveal {
                        row,
                        shown: 0,
                        last_tick: now,
                    });
                }
            }
            Err(GameError::RevealPending) => {}
            Err(GameError::GameOver) => {
                self.add_message("Game over. Press Ctrl-N for a new game.", MessageStyle::Info);
            }
            Err(e @ (GameError::IncompleteRow { .. } | GameError::UnknownWord(_))) => {
                self.rejected_at = Some(now);
                self.add_message(&capitalize(&e.to_string()), MessageStyle::Error);
            }
            Err(e) => self.add_message(&capitalize(&e.to_string()), MessageStyle::Error),
        }
    }

    /// Advance timed effects
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.rejected_at
            && now.duration_since(at) >= REJECT_FLASH
        {
            self.rejected_at = None;
        }

        let Some(mut reveal) = self.reveal else {
            return;
        };
        if now.duration_since(reveal.last_tick) < TILE_REVEAL {
            return;
        }

        reveal.shown += 1;
        reveal.last_tick = now;
        if reveal.shown < self.session.game().config().word_length {
            self.reveal = Some(reveal);
            return;
        }

        self.reveal = None;
        self.session.finish_reveal();
        self.announce_outcome();
    }

    fn announce_outcome(&mut self) {
        let game = self.session.game();
        match game.status() {
            GameStatus::Won => {
                let attempts = game.attempts_used();
                let celebration = match attempts {
                    1 => "🎯 First try! Extraordinary!",
                    2 => "🔥 Magnificent! Two guesses!",
                    3 => "✨ Splendid! Three guesses!",
                    4 => "👏 Great job! Four guesses!",
                    5 => "🎉 Nice work! Five guesses!",
                    _ => "😅 Phew! Got it!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Ctrl-N for a new game, Esc to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                let text = format!("The word was {}.", game.secret());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Ctrl-N for a new game, Esc to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {}
        }
    }

    pub fn new_game(&mut self) {
        self.reveal = None;
        self.rejected_at = None;
        self.messages.clear();
        match self.session.new_game() {
            Ok(()) => self.add_message("New game started!", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Tiles of `row` already revealed (all of them for settled rows)
    #[must_use]
    pub fn revealed_in_row(&self, row: usize) -> usize {
        match self.reveal {
            Some(reveal) if reveal.row == row => reveal.shown,
            _ => self.session.game().config().word_length,
        }
    }

    /// Keyboard statuses as the player has seen them so far
    ///
    /// While a row is being revealed its letters are left out.
    #[must_use]
    pub fn visible_board(&self) -> LetterStatusBoard {
        let results = self.session.game().results();
        let settled = if self.reveal.is_some() {
            results.len().saturating_sub(1)
        } else {
            results.len()
        };

        let mut board = LetterStatusBoard::new();
        for result in &results[..settled] {
            board.record(result);
        }
        board
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.rejected_at.is_some()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            let game = app.session.game();
            let action = map_key(key, game.row(), game.config().word_length);
            app.handle_action(action, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::WordList;

    fn app() -> App {
        let list = WordList::from_text("termo\nsagaz\nfluxo", 5).unwrap();
        let mut session = Session::new(list, GameConfig::default(), Some(9), false).unwrap();
        while session.game().secret().text() != "TERMO" {
            session.new_game().unwrap();
        }
        App::new(session)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for c in word.chars() {
            app.handle_action(Action::Play(Command::Letter(c)), now);
        }
        app.handle_action(Action::Play(Command::Submit), now);
    }

    fn finish(app: &mut App, start: Instant) -> Instant {
        let mut now = start;
        for _ in 0..5 {
            now += TILE_REVEAL;
            app.tick(now);
        }
        now
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), 0, 5),
            Action::Play(Command::Letter('a'))
        );
        assert_eq!(map_key(key(KeyCode::Backspace), 0, 5), Action::Play(Command::Delete));
        assert_eq!(map_key(key(KeyCode::Left), 0, 5), Action::Play(Command::MoveLeft));
        assert_eq!(map_key(key(KeyCode::Right), 0, 5), Action::Play(Command::MoveRight));
        assert_eq!(map_key(key(KeyCode::Enter), 0, 5), Action::Play(Command::Submit));
        assert_eq!(
            map_key(key(KeyCode::End), 2, 5),
            Action::Play(Command::Select { row: 2, col: 4 })
        );
        assert_eq!(map_key(key(KeyCode::Esc), 0, 5), Action::Quit);
        assert_eq!(map_key(key(KeyCode::F(1)), 0, 5), Action::Ignore);
    }

    #[test]
    fn control_keys() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl('c'), 0, 5), Action::Quit);
        assert_eq!(map_key(ctrl('n'), 0, 5), Action::NewGame);
        assert_eq!(map_key(ctrl('x'), 0, 5), Action::Ignore);
    }

    #[test]
    fn submission_reveals_tile_by_tile() {
        let mut app = app();
        let start = Instant::now();
        type_word(&mut app, "fluxo", start);

        assert_eq!(app.revealed_in_row(0), 0);
        assert!(app.visible_board().is_empty());

        app.tick(start + TILE_REVEAL);
        assert_eq!(app.revealed_in_row(0), 1);

        finish(&mut app, start + TILE_REVEAL);
        assert!(app.reveal.is_none());
        assert_eq!(app.revealed_in_row(0), 5);
        assert_eq!(app.session.game().pending_reveal(), None);
        assert!(!app.visible_board().is_empty());
    }

    #[test]
    fn input_ignored_during_reveal() {
        let mut app = app();
        let start = Instant::now();
        type_word(&mut app, "fluxo", start);

        app.handle_action(Action::Play(Command::Letter('t')), start);
        assert_eq!(app.session.game().cell(1, 0), None);

        let now = finish(&mut app, start);
        app.handle_action(Action::Play(Command::Letter('t')), now);
        assert_eq!(app.session.game().cell(1, 0), Some('T'));
    }

    #[test]
    fn rejected_row_flashes() {
        let mut app = app();
        let start = Instant::now();
        type_word(&mut app, "ter", start);

        assert!(app.is_flashing());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );

        app.tick(start + REJECT_FLASH);
        assert!(!app.is_flashing());
    }

    #[test]
    fn win_is_announced_after_reveal() {
        let mut app = app();
        let start = Instant::now();
        type_word(&mut app, "termo", start);

        assert_eq!(app.session.game().status(), GameStatus::Won);
        assert_ne!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Success)
        );

        finish(&mut app, start);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn new_game_clears_effects() {
        let mut app = app();
        let start = Instant::now();
        type_word(&mut app, "fluxo", start);

        app.handle_action(Action::NewGame, start);
        assert!(app.reveal.is_none());
        assert_eq!(app.session.game().row(), 0);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        app.handle_action(Action::Quit, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("row has 3 of 5 letters"), "Row has 3 of 5 letters");
        assert_eq!(capitalize(""), "");
    }
}
