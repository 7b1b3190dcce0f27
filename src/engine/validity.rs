//! Word validity rules
//!
//! A submitted word extends the chain only if it is long enough, has not been
//! played yet, and belongs to the base word's thematic bank. Every word must
//! relate back to the base word, never just to the previous word.

use crate::bank::ThematicBanks;
use crate::core::AssociationTable;
use std::fmt;

/// Why a submission was turned away
///
/// The game state does not record rejections; this is feedback for the
/// presentation layer only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort { len: usize, min: usize },
    AlreadyUsed,
    NotThematic,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len, min } => {
                write!(f, "Words need at least {min} letters, got {len}")
            }
            Self::AlreadyUsed => write!(f, "Already in the chain"),
            Self::NotThematic => write!(f, "Not related to the theme"),
        }
    }
}

/// Whether `candidate` belongs to the base word's bank
///
/// An unknown base word or an empty bank rejects every candidate.
#[must_use]
pub fn is_valid_thematic_word(banks: &ThematicBanks, base_word: &str, candidate: &str) -> bool {
    !candidate.trim().is_empty() && banks.contains(base_word, candidate)
}

/// Legacy pairwise check, tolerant of unsymmetrized tables
#[must_use]
pub fn is_associated(table: &AssociationTable, base_word: &str, candidate: &str) -> bool {
    table.are_associated(base_word, candidate)
}

/// Run the chain-extension gate
///
/// Checks, in order: minimum length, no repeat of any chained word
/// (case-insensitive), thematic validity against the base word.
///
/// # Errors
///
/// Returns the first `Rejection` hit.
pub fn check_submission<'w>(
    banks: &ThematicBanks,
    min_len: usize,
    base_word: &str,
    chain_words: impl IntoIterator<Item = &'w str>,
    candidate: &str,
) -> Result<(), Rejection> {
    let candidate = candidate.trim();
    let len = candidate.chars().count();

    if len < min_len {
        return Err(Rejection::TooShort { len, min: min_len });
    }

    if chain_words
        .into_iter()
        .any(|word| word.eq_ignore_ascii_case(candidate))
    {
        return Err(Rejection::AlreadyUsed);
    }

    if !is_valid_thematic_word(banks, base_word, candidate) {
        return Err(Rejection::NotThematic);
    }

    Ok(())
}
