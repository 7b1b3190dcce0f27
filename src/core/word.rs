//! Thematic word representation
//!
//! A `ThematicWord` is one entry in a base word's bank, tagged with the
//! difficulty tier that gates when it becomes playable and a category used to
//! keep letter grids varied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty tier of a thematic word
///
/// Tiers unlock progressively as the chain grows; see
/// [`crate::config::TierConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers from easiest to hardest
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(WordError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Error type for invalid bank entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),
    #[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

/// A word belonging to a base word's thematic bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThematicWord {
    word: String,
    difficulty: Difficulty,
    category: String,
}

impl ThematicWord {
    /// Create a new thematic word
    ///
    /// The word is trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use chain_reaction::core::{Difficulty, ThematicWord};
    ///
    /// let word = ThematicWord::new("Rain", Difficulty::Easy, "weather").unwrap();
    /// assert_eq!(word.word(), "rain");
    ///
    /// assert!(ThematicWord::new("rain2", Difficulty::Easy, "weather").is_err());
    /// ```
    pub fn new(
        word: &str,
        difficulty: Difficulty,
        category: impl Into<String>,
    ) -> Result<Self, WordError> {
        let word = normalize(word);

        if word.is_empty() {
            return Err(WordError::Empty);
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(word));
        }

        Ok(Self {
            word,
            difficulty,
            category: category.into(),
        })
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Case-insensitive comparison against a raw candidate
    #[inline]
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.word.eq_ignore_ascii_case(candidate.trim())
    }
}

impl fmt::Display for ThematicWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Trim and lowercase a raw word
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thematic_word_normalized() {
        let word = ThematicWord::new("  OCEAN ", Difficulty::Easy, "bodies").unwrap();
        assert_eq!(word.word(), "ocean");
        assert_eq!(word.category(), "bodies");
        assert_eq!(word.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn thematic_word_rejects_empty() {
        assert_eq!(
            ThematicWord::new("   ", Difficulty::Easy, "x"),
            Err(WordError::Empty)
        );
    }

    #[test]
    fn thematic_word_rejects_non_letters() {
        assert!(ThematicWord::new("h2o", Difficulty::Hard, "chemistry").is_err());
        assert!(ThematicWord::new("ice cube", Difficulty::Easy, "state").is_err());
        assert!(ThematicWord::new("café", Difficulty::Easy, "place").is_err());
    }

    #[test]
    fn thematic_word_matches_case_insensitive() {
        let word = ThematicWord::new("wet", Difficulty::Easy, "state").unwrap();
        assert!(word.matches("WET"));
        assert!(word.matches("Wet"));
        assert!(!word.matches("wets"));
    }

    #[test]
    fn difficulty_parses() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!(matches!(
            "brutal".parse::<Difficulty>(),
            Err(WordError::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn difficulty_orders_easiest_first() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
