//! The game state machine
//!
//! `NotStarted -> Playing -> GameOver`, with `Reset` leading back to a fresh
//! `NotStarted`. All transitions go through [`Game::dispatch`], one at a time.

use super::clock::Clock;
use super::event::{Event, Outcome};
use super::state::{GameState, Phase};
use super::streak::next_streak;
use crate::core::{WordAssociation, WordNode};
use crate::engine::Engine;
use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::ThreadRng;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No base word has a bank rich enough to be a daily word")]
    NoDailyWord,
}

/// A running game session over a rules engine
pub struct Game<'a, R: Rng = ThreadRng> {
    engine: Engine<'a>,
    state: GameState,
    clock: Box<dyn Clock + 'a>,
    rng: R,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a brand new session on today's word
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoDailyWord` if no bank can supply a daily word.
    pub fn new(engine: Engine<'a>, clock: Box<dyn Clock + 'a>, rng: R) -> Result<Self, GameError> {
        Self::restore(engine, None, clock, rng)
    }

    /// Resume a saved session, or start fresh when it cannot be trusted
    ///
    /// A saved state is trusted only if it is from today, has the configured
    /// grid size and passes the structural checks. Otherwise a fresh state is
    /// built, carrying the streak forward from the saved one.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoDailyWord` if no bank can supply a daily word.
    pub fn restore(
        engine: Engine<'a>,
        saved: Option<GameState>,
        clock: Box<dyn Clock + 'a>,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let today = clock.today();
        let daily_word = engine.daily_word(today).ok_or(GameError::NoDailyWord)?;
        let cells = engine.config().grid_size.cells();

        let state = match saved {
            Some(saved) => match trusted(saved, today, cells, daily_word) {
                Ok(state) => {
                    debug!(base_word = %state.base_word, "resuming saved game");
                    state
                }
                Err((saved, reason)) => {
                    warn!(reason, "discarding saved game");
                    let streak =
                        next_streak(saved.last_played_date, today, saved.streak_count);
                    fresh_state(&engine, daily_word, today, streak, saved.last_played_date, &mut rng)
                }
            },
            None => fresh_state(&engine, daily_word, today, 0, None, &mut rng),
        };

        Ok(Self {
            engine,
            state,
            clock,
            rng,
        })
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine<'a> {
        &self.engine
    }

    /// Apply one event
    ///
    /// Disallowed or malformed events never fail: they are ignored, or, for a
    /// rejected submission, clear the selection.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        let outcome = match event {
            Event::Start => self.start(),
            Event::Tick => self.tick(),
            Event::EndGame => self.end_game(),
            Event::SelectLetter(index) => self.select_letter(index),
            Event::DeselectLetter(index) => self.deselect_letter(index),
            Event::ClearSelection => {
                self.state.clear_selection();
                Outcome::Updated
            }
            Event::SubmitWord => self.submit_word(),
            Event::Reset => self.reset(),
        };
        debug!(?event, ?outcome, "dispatched");
        outcome
    }

    fn start(&mut self) -> Outcome {
        if self.state.phase() != Phase::NotStarted {
            return Outcome::Ignored;
        }
        self.state.is_playing = true;
        self.state.timer = self.engine.config().game_duration_secs;
        self.state.last_played_date = Some(self.clock.today());
        Outcome::Updated
    }

    fn tick(&mut self) -> Outcome {
        if self.state.phase() != Phase::Playing {
            return Outcome::Ignored;
        }
        self.state.timer = self.state.timer.saturating_sub(1);
        if self.state.timer == 0 {
            return self.end_game();
        }
        Outcome::Updated
    }

    fn end_game(&mut self) -> Outcome {
        if self.state.phase() != Phase::Playing {
            return Outcome::Ignored;
        }
        self.state.is_playing = false;
        self.state.is_game_over = true;
        info!(
            score = self.state.score,
            chain = self.state.word_chain.len(),
            "game over"
        );
        Outcome::GameOver
    }

    fn select_letter(&mut self, index: usize) -> Outcome {
        if self.state.phase() != Phase::Playing
            || index >= self.state.letter_grid.len()
            || self.state.selected_letters.contains(&index)
        {
            return Outcome::Ignored;
        }
        self.state.selected_letters.push(index);
        self.state.refresh_selected_word();
        Outcome::Updated
    }

    fn deselect_letter(&mut self, index: usize) -> Outcome {
        if self.state.phase() != Phase::Playing
            || self.state.selected_letters.last() != Some(&index)
        {
            return Outcome::Ignored;
        }
        self.state.selected_letters.pop();
        self.state.refresh_selected_word();
        Outcome::Updated
    }

    fn submit_word(&mut self) -> Outcome {
        if self.state.phase() != Phase::Playing {
            return Outcome::Ignored;
        }

        let candidate = self.state.selected_word.clone();
        let verdict = self.engine.check_submission(
            &self.state.base_word,
            self.state.word_chain.iter().map(|node| node.word.as_str()),
            &candidate,
        );

        if let Err(rejection) = verdict {
            debug!(word = %candidate, %rejection, "submission rejected");
            self.state.clear_selection();
            return Outcome::Rejected(rejection);
        }

        let chain_len = self.state.word_chain.len();
        let word_score = self.engine.score(&candidate, chain_len);

        for node in &mut self.state.word_chain {
            node.is_active = false;
        }
        self.state
            .word_chain
            .push(WordNode::appended(chain_len, &candidate, word_score));
        self.state.current_word.clone_from(&candidate);

        let used = self.state.used_words();
        let grid = self.engine.generate_grid(
            &self.state.base_word,
            self.state.word_chain.len(),
            &used,
            &mut self.rng,
        );
        self.state.letter_grid = grid;

        self.state.score = self.state.score.saturating_add(word_score);
        self.state.clear_selection();

        info!(word = %candidate, score = word_score, total = self.state.score, "word accepted");
        Outcome::Accepted {
            word: candidate,
            score: word_score,
        }
    }

    fn reset(&mut self) -> Outcome {
        let today = self.clock.today();
        let base_word = self
            .engine
            .daily_word(today)
            .map_or_else(|| self.state.base_word.clone(), str::to_string);

        self.state = fresh_state(
            &self.engine,
            &base_word,
            today,
            self.state.streak_count,
            self.state.last_played_date,
            &mut self.rng,
        );
        info!(%base_word, "game reset");
        Outcome::Updated
    }

    /// Whether `word` could extend the chain, ignoring repeats
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        word.trim().chars().count() >= self.engine.config().min_word_length
            && self
                .engine
                .is_valid_thematic_word(&self.state.base_word, word)
    }

    /// Whether `word` is linked to the base word in the pairwise table
    #[must_use]
    pub fn is_associated_with_current_word(&self, word: &str) -> bool {
        word.trim().chars().count() >= self.engine.config().min_word_length
            && self.engine.is_associated(&self.state.base_word, word)
    }

    /// Points `word` would earn if submitted now
    #[must_use]
    pub fn word_score(&self, word: &str) -> u32 {
        self.engine.score(word, self.state.word_chain.len())
    }

    #[must_use]
    pub fn association_details(&self, first: &str, second: &str) -> Option<WordAssociation> {
        self.engine.association_details(first, second)
    }

    /// Words the grid is currently seeded from
    ///
    /// Tier-gated, so harder bank words that would still be accepted may be
    /// missing.
    #[must_use]
    pub fn possible_associations(&self) -> Vec<&'a str> {
        let used = self.state.used_words();
        self.engine
            .eligible_words(&self.state.base_word, self.state.word_chain.len(), &used)
            .into_iter()
            .map(|word| word.word())
            .collect()
    }
}

/// A not-yet-started state for `base_word` with a grid for chain length 1
fn fresh_state<R: Rng + ?Sized>(
    engine: &Engine<'_>,
    base_word: &str,
    today: NaiveDate,
    streak: u32,
    last_played: Option<NaiveDate>,
    rng: &mut R,
) -> GameState {
    let grid = engine.generate_grid(base_word, 1, &[base_word], rng);
    GameState::fresh(
        base_word,
        grid,
        today,
        engine.config().game_duration_secs,
        streak,
        last_played,
    )
}

/// Accept a saved state, or hand it back with the reason it was refused
fn trusted(
    mut saved: GameState,
    today: NaiveDate,
    cells: usize,
    daily_word: &str,
) -> Result<GameState, (GameState, &'static str)> {
    if saved.start_date != today {
        return Err((saved, "saved game is from another day"));
    }
    if saved.letter_grid.len() != cells {
        return Err((saved, "saved grid has the wrong size"));
    }

    if saved.base_word.is_empty() {
        saved.base_word = if saved.daily_word.is_empty() {
            daily_word.to_string()
        } else {
            saved.daily_word.clone()
        };
    }

    if saved.check_consistency().is_err() {
        return Err((saved, "saved game is inconsistent"));
    }

    saved.refresh_selected_word();
    Ok(saved)
}
