//! Session provider
//!
//! Owns at most one live [`Game`] and mirrors every state change into a
//! [`StateStore`]. Storage problems are logged and never surface to the
//! player.

use super::clock::Clock;
use super::event::{Event, Outcome};
use super::machine::{Game, GameError};
use super::persistence::StateStore;
use super::state::GameState;
use crate::engine::Engine;
use rand::Rng;
use rand::rngs::ThreadRng;
use thiserror::Error;
use tracing::{debug, warn};

/// Misuse of the session API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("No game session is active")]
    NoActiveSession,
}

pub struct Session<'a, S: StateStore, R: Rng = ThreadRng> {
    store: S,
    game: Option<Game<'a, R>>,
}

impl<'a, S: StateStore, R: Rng> Session<'a, S, R> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store, game: None }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// Open a game, resuming today's save when there is a usable one
    ///
    /// Replaces any game already open.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoDailyWord` if no bank can supply a daily word.
    pub fn begin(
        &mut self,
        engine: Engine<'a>,
        clock: Box<dyn Clock + 'a>,
        rng: R,
    ) -> Result<&mut Game<'a, R>, GameError> {
        let saved = match self.store.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "could not read saved game");
                None
            }
        };

        let game = Game::restore(engine, saved, clock, rng)?;
        self.persist(game.state());
        Ok(self.game.insert(game))
    }

    /// The live game
    ///
    /// # Errors
    ///
    /// Returns `UsageError::NoActiveSession` outside `begin`/`end`.
    pub fn game(&self) -> Result<&Game<'a, R>, UsageError> {
        self.game.as_ref().ok_or(UsageError::NoActiveSession)
    }

    /// Snapshot of the live game
    ///
    /// # Errors
    ///
    /// Returns `UsageError::NoActiveSession` outside `begin`/`end`.
    pub fn state(&self) -> Result<&GameState, UsageError> {
        self.game().map(Game::state)
    }

    /// Apply an event and save the result if anything changed
    ///
    /// # Errors
    ///
    /// Returns `UsageError::NoActiveSession` outside `begin`/`end`.
    pub fn dispatch(&mut self, event: Event) -> Result<Outcome, UsageError> {
        let game = self.game.as_mut().ok_or(UsageError::NoActiveSession)?;
        let outcome = game.dispatch(event);
        if outcome.changed_state() {
            let state = game.state().clone();
            self.persist(&state);
        }
        Ok(outcome)
    }

    /// Close the live game, returning its final state
    ///
    /// The save is kept so the same day's game can be resumed.
    pub fn end(&mut self) -> Option<GameState> {
        let game = self.game.take()?;
        let state = game.state().clone();
        self.persist(&state);
        debug!("session closed");
        Some(state)
    }

    /// Best-effort write
    fn persist(&self, state: &GameState) {
        if let Err(e) = self.store.save(state) {
            warn!(error = %e, "could not save game");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::loader::banks_from_slice;
    use crate::config::GameConfig;
    use crate::core::AssociationTable;
    use crate::game::clock::FixedClock;
    use crate::game::persistence::{MemoryStore, PersistError};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn clock() -> Box<dyn Clock> {
        Box::new(FixedClock(today()))
    }

    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn load(&self) -> Result<Option<GameState>, PersistError> {
            Err(std::io::Error::other("disk gone").into())
        }

        fn save(&self, _state: &GameState) -> Result<(), PersistError> {
            Err(std::io::Error::other("disk gone").into())
        }
    }

    #[test]
    fn queries_without_session_fail() {
        let mut session: Session<'_, MemoryStore, StdRng> = Session::new(MemoryStore::new());
        assert_eq!(session.state().err(), Some(UsageError::NoActiveSession));
        assert_eq!(
            session.dispatch(Event::Start),
            Err(UsageError::NoActiveSession)
        );
        assert!(session.end().is_none());
    }

    #[test]
    fn every_change_is_saved() {
        let banks = banks_from_slice(&[("water", "wet", "easy", "state")]);
        let associations = AssociationTable::new();
        let config = GameConfig {
            daily_min_bank_size: 1,
            ..GameConfig::default()
        };
        let engine = Engine::new(&banks, &associations, &config);

        let mut session = Session::new(MemoryStore::new());
        session.begin(engine, clock(), StdRng::seed_from_u64(1)).unwrap();
        assert!(session.store().raw().is_some());

        session.dispatch(Event::Start).unwrap();
        session.dispatch(Event::Tick).unwrap();
        let saved = session.store().load().unwrap().unwrap();
        assert!(saved.is_playing());
        assert_eq!(saved.timer(), 119);

        let closed = session.end().unwrap();
        assert_eq!(closed, saved);
        assert!(!session.is_active());
    }

    #[test]
    fn begin_resumes_same_day_save() {
        let banks = banks_from_slice(&[("water", "wet", "easy", "state")]);
        let associations = AssociationTable::new();
        let config = GameConfig {
            daily_min_bank_size: 1,
            ..GameConfig::default()
        };
        let engine = Engine::new(&banks, &associations, &config);

        let mut session = Session::new(MemoryStore::new());
        session.begin(engine, clock(), StdRng::seed_from_u64(1)).unwrap();
        session.dispatch(Event::Start).unwrap();
        session.dispatch(Event::Tick).unwrap();
        let before = session.end().unwrap();

        let resumed = session
            .begin(engine, clock(), StdRng::seed_from_u64(2))
            .unwrap();
        assert_eq!(resumed.state(), &before);
    }

    #[test]
    fn garbage_save_starts_fresh() {
        let banks = banks_from_slice(&[("water", "wet", "easy", "state")]);
        let associations = AssociationTable::new();
        let config = GameConfig {
            daily_min_bank_size: 1,
            ..GameConfig::default()
        };
        let engine = Engine::new(&banks, &associations, &config);

        let store = MemoryStore::new();
        store.set_raw("{\"isPlaying\": tru");
        let mut session = Session::new(store);
        let game = session
            .begin(engine, clock(), StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(game.state().base_word(), "water");
        assert_eq!(game.state().score(), 0);
    }

    #[test]
    fn storage_failures_do_not_interrupt_play() {
        let banks = banks_from_slice(&[("water", "wet", "easy", "state")]);
        let associations = AssociationTable::new();
        let config = GameConfig {
            daily_min_bank_size: 1,
            ..GameConfig::default()
        };
        let engine = Engine::new(&banks, &associations, &config);

        let mut session = Session::new(BrokenStore);
        session.begin(engine, clock(), StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(session.dispatch(Event::Start), Ok(Outcome::Updated));
        assert!(session.state().unwrap().is_playing());
    }
}
