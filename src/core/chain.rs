//! Word chain nodes
//!
//! Every accepted word becomes a `WordNode`. Only the most recently accepted
//! node is active.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Layout hint for a chain node, in percent of the board (0-100)
///
/// Derived from the node's index; presentation may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Centre of the board, where the base word sits
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    /// Position for a node appended to a chain of `chain_len` nodes
    ///
    /// Nodes are laid out on a circle around the centre whose radius grows
    /// slightly with the chain.
    #[must_use]
    pub fn for_chain_len(chain_len: usize) -> Self {
        let n = chain_len as f64;
        let angle_step = TAU / n.max(8.0);
        let angle = n * angle_step;
        let radius = 30.0 + n.min(10.0);

        Self {
            x: Self::CENTER.x + radius * angle.cos(),
            y: Self::CENTER.y + radius * angle.sin(),
        }
    }
}

/// One accepted word in the chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordNode {
    pub id: usize,
    pub word: String,
    pub position: Position,
    pub is_active: bool,
    pub score: u32,
}

impl WordNode {
    /// The seed node for a base word: id 0, centred, active, no score
    #[must_use]
    pub fn root(base_word: &str) -> Self {
        Self {
            id: 0,
            word: base_word.to_string(),
            position: Position::CENTER,
            is_active: true,
            score: 0,
        }
    }

    /// A freshly accepted node appended after `chain_len` existing nodes
    #[must_use]
    pub fn appended(chain_len: usize, word: &str, score: u32) -> Self {
        Self {
            id: chain_len,
            word: word.to_string(),
            position: Position::for_chain_len(chain_len),
            is_active: true,
            score,
        }
    }
}
