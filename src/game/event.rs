//! Player and timer events

use crate::engine::Rejection;

/// Input accepted by [`super::Game::dispatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Begin the countdown
    Start,
    /// One second elapsed
    Tick,
    /// Stop a running game early
    EndGame,
    /// Pick a grid cell by flat index
    SelectLetter(usize),
    /// Undo a pick; only the most recent one can be undone
    DeselectLetter(usize),
    ClearSelection,
    SubmitWord,
    /// Throw the session away and start over on today's word
    Reset,
}

/// What a dispatched event did
///
/// Purely informational: the state never records rejections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event was not applicable in the current state
    Ignored,
    Updated,
    Accepted { word: String, score: u32 },
    Rejected(Rejection),
    /// This event ended the game
    GameOver,
}

impl Outcome {
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
