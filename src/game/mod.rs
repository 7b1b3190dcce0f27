//! Game session
//!
//! The event-driven state machine, its persisted record and the session
//! provider that keeps the two in sync.

pub mod clock;
mod event;
mod machine;
pub mod persistence;
mod session;
mod state;
pub mod streak;

pub use clock::{Clock, FixedClock, SystemClock};
pub use event::{Event, Outcome};
pub use machine::{Game, GameError};
pub use persistence::{FileStore, MemoryStore, PersistError, StateStore};
pub use session::{Session, UsageError};
pub use state::{GameState, Phase};
