//! Game configuration
//!
//! Every tunable constant of the rules lives here. All fields have defaults, so
//! a TOML file only needs to name what it overrides:
//!
//! ```toml
//! grid_size = "five"
//! game_duration_secs = 90
//!
//! [scoring]
//! letter_weight = 12
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Side length of the letter grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSize {
    /// 5x5, 25 cells
    Five,
    /// 6x6, 36 cells
    #[default]
    Six,
}

impl GridSize {
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Six => 6,
        }
    }

    #[must_use]
    pub const fn cells(self) -> usize {
        self.side() * self.side()
    }

    /// Grid size from its side length
    #[must_use]
    pub const fn from_side(side: usize) -> Option<Self> {
        match side {
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            _ => None,
        }
    }
}

/// Score weights and bonus tiers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per character in the thematic formula
    pub letter_weight: u32,
    /// Points per character in the legacy association formula
    pub legacy_letter_weight: u32,
    /// `(min_chain_length, bonus)` pairs; the highest reached threshold's bonus applies
    pub chain_bonuses: Vec<(usize, u32)>,
    /// `(min_word_length, bonus)` pairs; every reached threshold adds its bonus
    pub length_bonuses: Vec<(usize, u32)>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            letter_weight: 10,
            legacy_letter_weight: 1,
            chain_bonuses: vec![(5, 5), (10, 10), (15, 15), (20, 20)],
            length_bonuses: vec![(6, 20), (8, 40)],
        }
    }
}

/// Chain lengths at which harder tiers unlock
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    pub medium_from: usize,
    pub hard_from: usize,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            medium_from: 3,
            hard_from: 6,
        }
    }
}

/// Letter-grid heuristics
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// How many thematic words to seed a grid from
    pub target_words: usize,
    /// Most copies of a single letter contributed by the frequency table
    pub max_duplicates: usize,
    /// Frequency is divided by this (rounding up) to get a letter's copies
    pub frequency_divisor: usize,
    /// Letters guaranteed to appear while space allows
    pub essential_letters: String,
    /// Slots kept free for high-frequency padding
    pub fill_reserve: usize,
    /// Padding cycled until the grid is full
    pub high_frequency_fill: String,
    /// Source of uniform draws when no thematic word is eligible
    pub fallback_letters: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            target_words: 20,
            max_duplicates: 4,
            frequency_divisor: 2,
            essential_letters: "aeiournstldgcmpbfhvwykjxqz".to_string(),
            fill_reserve: 4,
            high_frequency_fill: "eariotnslcudpmhgbfywkjxqz".to_string(),
            fallback_letters: "eariotnslcudpmhgbfywkvxzjq".to_string(),
        }
    }
}

/// Complete rule configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: GridSize,
    pub game_duration_secs: u32,
    pub min_word_length: usize,
    /// Smallest bank a base word needs to be picked as a daily word
    pub daily_min_bank_size: usize,
    pub scoring: ScoringConfig,
    pub tiers: TierConfig,
    pub grid: GridConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            game_duration_secs: 120,
            min_word_length: 3,
            daily_min_bank_size: 15,
            scoring: ScoringConfig::default(),
            tiers: TierConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load a configuration file, falling back to defaults for missing keys
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// describes inconsistent rules.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the rules are internally consistent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_duration_secs == 0 {
            return Err(ConfigError::Invalid(
                "game_duration_secs must be positive".into(),
            ));
        }
        if self.min_word_length == 0 {
            return Err(ConfigError::Invalid(
                "min_word_length must be positive".into(),
            ));
        }
        if self.tiers.medium_from > self.tiers.hard_from {
            return Err(ConfigError::Invalid(
                "tiers.medium_from must not exceed tiers.hard_from".into(),
            ));
        }
        if self.grid.frequency_divisor == 0 || self.grid.max_duplicates == 0 {
            return Err(ConfigError::Invalid(
                "grid.frequency_divisor and grid.max_duplicates must be positive".into(),
            ));
        }
        if self.grid.fill_reserve >= self.grid_size.cells() {
            return Err(ConfigError::Invalid(
                "grid.fill_reserve must be smaller than the grid".into(),
            ));
        }
        for (name, letters) in [
            ("grid.high_frequency_fill", &self.grid.high_frequency_fill),
            ("grid.fallback_letters", &self.grid.fallback_letters),
        ] {
            if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-empty run of lowercase letters"
                )));
            }
        }
        Ok(())
    }
}
