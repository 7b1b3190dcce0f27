//! Core domain types for Chain Reaction
//!
//! Pure data types for thematic words, pairwise associations and chain nodes.
//! Nothing here knows about grids, timers or persistence.

mod association;
mod chain;
mod word;

pub use association::{AssociationTable, WordAssociation};
pub use chain::{Position, WordNode};
pub use word::{Difficulty, ThematicWord, WordError, normalize};
