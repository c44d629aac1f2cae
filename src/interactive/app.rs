//! TUI application state and logic

use super::rendering;
use crate::animation::{Clock, FRAME_MS, SystemClock};
use crate::game::{GameSession, Outcome, Statistics, SubmitResult};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::layout::{Position, Rect};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, C = SystemClock, R = StdRng> {
    pub session: GameSession<'a, C, R>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Area of the last drawn frame, used to hit-test mouse clicks
    pub viewport: Rect,
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

impl<'a, C: Clock, R: Rng> App<'a, C, R> {
    #[must_use]
    pub fn new(session: GameSession<'a, C, R>) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "Type a word and press Enter. Ctrl-R starts over.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            viewport: Rect::default(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter if self.session.shows_restart() => self.new_game(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.session.delete_letter();
            }
            KeyCode::Char(c) if !ctrl => {
                self.session.append_letter(c);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !self.session.shows_restart() {
            return;
        }

        let button = rendering::layout(self.viewport).button;
        if button.contains(Position::new(mouse.column, mouse.row)) {
            self.new_game();
        }
    }

    /// Advance animations and record a game that just finished
    pub fn on_tick(&mut self) {
        let Some(outcome) = self.session.tick() else {
            return;
        };

        let attempts = self.session.attempt();
        self.stats.record(outcome, attempts);

        match outcome {
            Outcome::Won => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                let text = format!("Out of guesses. The word was {}", self.session.target());
                self.add_message(&text, MessageStyle::Error);
            }
            Outcome::InProgress => {}
        }
    }

    fn submit(&mut self) {
        if self.session.submit_guess() == SubmitResult::InvalidWord {
            let text = format!("{} is not in the word list", self.session.input());
            self.add_message(&text, MessageStyle::Error);
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<C: Clock, R: Rng>(app: App<'_, C, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, C: Clock, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, C, R>,
) -> Result<()> {
    let tick_duration = Duration::from_millis(FRAME_MS);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        // Timers are advanced before drawing so the frame matches them
        app.on_tick();
        let frame = terminal.draw(|f| rendering::ui(f, &app))?;
        app.viewport = frame.area;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{ManualClock, REVEAL_DURATION_MS};
    use crate::core::Word;
    use crate::game::Phase;
    use crate::wordlists::WordBank;
    use rand::SeedableRng;

    fn bank() -> WordBank {
        WordBank::from_reader("word,occurrence\nspeed,1\ncrane,1\n".as_bytes(), 0.0).unwrap()
    }

    fn app<'a>(bank: &'a WordBank, clock: &ManualClock) -> App<'a, ManualClock> {
        let session = GameSession::with_target(
            bank,
            clock.clone(),
            StdRng::seed_from_u64(1),
            Word::new("speed").unwrap(),
        );
        let mut app = App::new(session);
        app.viewport = Rect::new(0, 0, 80, 40);
        app
    }

    fn press(app: &mut App<'_, ManualClock>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_and_submit(app: &mut App<'_, ManualClock>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn run_reveal(app: &mut App<'_, ManualClock>, clock: &ManualClock) {
        for _ in 0..5 {
            clock.advance(REVEAL_DURATION_MS);
            app.on_tick();
        }
    }

    #[test]
    fn keys_edit_the_guess() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut app = app(&bank, &clock);

        for c in ['c', 'r', 'x'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.input(), "CR");
    }

    #[test]
    fn invalid_word_adds_error_message() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut app = app(&bank, &clock);

        type_and_submit(&mut app, "zzzzz");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("ZZZZZ"));
        assert_eq!(app.session.attempt(), 0);
    }

    #[test]
    fn win_is_recorded_once() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut app = app(&bank, &clock);

        type_and_submit(&mut app, "speed");
        run_reveal(&mut app, &clock);
        app.on_tick();

        assert_eq!(app.session.phase(), Phase::Over);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn enter_restarts_when_over() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut app = app(&bank, &clock);

        type_and_submit(&mut app, "speed");
        run_reveal(&mut app, &clock);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.phase(), Phase::Accepting);
        assert_eq!(app.session.attempt(), 0);
    }

    #[test]
    fn ctrl_r_restarts_mid_reveal() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut app = app(&bank, &clock);

        type_and_submit(&mut app, "crane");
        assert_eq!(app.session.phase(), Phase::Revealing);

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.session.phase(), Phase::Accepting);
        assert_eq!(app.session.attempt(), 0);
        assert_eq!(app.session.input(), "");
    }

    #[test]
    fn clicking_play_again_restarts() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut app = app(&bank, &clock);

        type_and_submit(&mut app, "speed");
        run_reveal(&mut app, &clock);

        let button = rendering::layout(app.viewport).button;
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        app.handle_mouse(click(0, 0));
        assert_eq!(app.session.phase(), Phase::Over);

        app.handle_mouse(click(button.x + 1, button.y + 1));
        assert_eq!(app.session.phase(), Phase::Accepting);
    }

    #[test]
    fn escape_quits() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut app = app(&bank, &clock);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let bank = bank();
        let clock = ManualClock::new();
        let mut app = app(&bank, &clock);

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
