//! TUI application state and logic

use crate::engine::Engine;
use crate::game::{
    Clock, Event as GameEvent, GameError, GameState, Outcome, Phase, Session, StateStore,
    SystemClock, UsageError,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

/// Application state
pub struct App<'a, S: StateStore, R: Rng = ThreadRng> {
    pub session: Session<'a, S, R>,
    pub side: usize,
    pub duration: u32,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<'a, S: StateStore> App<'a, S> {
    /// Open today's game on the system clock
    ///
    /// # Errors
    ///
    /// Returns an error if no daily word can be chosen.
    pub fn new(engine: Engine<'a>, store: S) -> Result<Self, GameError> {
        Self::with_clock(engine, store, Box::new(SystemClock), rand::rng())
    }
}

impl<'a, S: StateStore, R: Rng> App<'a, S, R> {
    /// Open a game with an explicit clock and generator
    ///
    /// # Errors
    ///
    /// Returns an error if no daily word can be chosen.
    pub fn with_clock(
        engine: Engine<'a>,
        store: S,
        clock: Box<dyn Clock + 'a>,
        rng: R,
    ) -> Result<Self, GameError> {
        let mut session = Session::new(store);
        session.begin(engine, clock, rng)?;

        let mut app = Self {
            session,
            side: engine.config().grid_size.side(),
            duration: engine.config().game_duration_secs,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Chain words related to today's base word.",
            MessageStyle::Info,
        );
        app.add_message("Press Enter to start the clock.", MessageStyle::Info);
        Ok(app)
    }

    /// Current snapshot
    ///
    /// # Errors
    ///
    /// Returns an error once the session has been closed.
    pub fn state(&self) -> Result<&GameState, UsageError> {
        self.session.state()
    }

    /// Words still playable, for the hint panel
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.session
            .game()
            .map_or(0, |game| game.possible_associations().len())
    }

    fn phase(&self) -> Option<Phase> {
        self.state().ok().map(GameState::phase)
    }

    fn dispatch(&mut self, event: GameEvent) -> Outcome {
        match self.session.dispatch(event) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                Outcome::Ignored
            }
        }
    }

    /// One second of wall time
    pub fn tick(&mut self) {
        if self.dispatch(GameEvent::Tick) == Outcome::GameOver {
            self.announce_game_over();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('e') if ctrl => {
                if self.dispatch(GameEvent::EndGame) == Outcome::GameOver {
                    self.announce_game_over();
                }
            }
            KeyCode::Char('q') if self.phase() != Some(Phase::Playing) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if self.phase() == Some(Phase::GameOver) => self.reset(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Esc => {
                self.dispatch(GameEvent::ClearSelection);
            }
            KeyCode::Enter => self.enter(),
            KeyCode::Tab => self.hint(),
            _ => {}
        }
    }

    /// Select the first free cell holding `letter`
    pub fn type_letter(&mut self, letter: char) {
        if self.phase() != Some(Phase::Playing) {
            return;
        }
        let cell = self.state().ok().and_then(|state| state.free_cell(letter));
        match cell {
            Some(index) => {
                self.dispatch(GameEvent::SelectLetter(index));
            }
            None => self.add_message(
                &format!("No free '{}' in the grid", letter.to_ascii_uppercase()),
                MessageStyle::Error,
            ),
        }
    }

    /// Undo the most recent pick
    pub fn backspace(&mut self) {
        let last = self
            .state()
            .ok()
            .and_then(|state| state.selected_letters().last().copied());
        if let Some(index) = last {
            self.dispatch(GameEvent::DeselectLetter(index));
        }
    }

    /// Start the clock, or submit the selection while playing
    pub fn enter(&mut self) {
        match self.phase() {
            Some(Phase::NotStarted) => {
                self.dispatch(GameEvent::Start);
                self.add_message("Go! Type letters, Enter to submit.", MessageStyle::Info);
            }
            Some(Phase::Playing) => match self.dispatch(GameEvent::SubmitWord) {
                Outcome::Accepted { word, score } => self.add_message(
                    &format!("{} +{score}", word.to_uppercase()),
                    MessageStyle::Success,
                ),
                Outcome::Rejected(rejection) => {
                    self.add_message(&rejection.to_string(), MessageStyle::Error);
                }
                _ => {}
            },
            Some(Phase::GameOver) | None => {}
        }
    }

    pub fn reset(&mut self) {
        self.dispatch(GameEvent::Reset);
        self.messages.clear();
        self.add_message("New game ready. Press Enter to start.", MessageStyle::Info);
    }

    fn hint(&mut self) {
        let count = self.playable_count();
        self.add_message(
            &format!("{count} words still playable"),
            MessageStyle::Info,
        );
    }

    fn announce_game_over(&mut self) {
        let score = self.state().map_or(0, GameState::score);
        self.add_message(&format!("Time's up! Final score {score}"), MessageStyle::Success);
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StateStore, R: Rng>(app: App<'_, S, R>) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: StateStore, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S, R>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if last_tick.elapsed() >= TICK {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    app.session.end();
    Ok(())
}
