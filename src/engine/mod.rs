//! Rules engine
//!
//! Validity, scoring, grid generation and daily selection, bundled behind an
//! `Engine` that borrows the immutable data assets and the configuration.

pub mod daily;
pub mod grid;
pub mod scoring;
pub mod validity;

pub use validity::Rejection;

use crate::bank::ThematicBanks;
use crate::config::GameConfig;
use crate::core::{AssociationTable, ThematicWord, WordAssociation};
use chrono::NaiveDate;
use rand::Rng;

/// Main rules engine
///
/// Holds no mutable state; every query is a pure function of the borrowed
/// banks, association table and configuration (grid shuffling aside).
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    banks: &'a ThematicBanks,
    associations: &'a AssociationTable,
    config: &'a GameConfig,
}

impl<'a> Engine<'a> {
    /// Create a new engine over the given data
    ///
    /// # Parameters
    /// - `banks`: Thematic banks keyed by base word
    /// - `associations`: Symmetrized legacy association table
    /// - `config`: Rule configuration
    #[must_use]
    pub const fn new(
        banks: &'a ThematicBanks,
        associations: &'a AssociationTable,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            banks,
            associations,
            config,
        }
    }

    #[must_use]
    pub const fn banks(&self) -> &'a ThematicBanks {
        self.banks
    }

    #[must_use]
    pub const fn associations(&self) -> &'a AssociationTable {
        self.associations
    }

    #[must_use]
    pub const fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Whether `candidate` belongs to the base word's bank
    #[must_use]
    pub fn is_valid_thematic_word(&self, base_word: &str, candidate: &str) -> bool {
        validity::is_valid_thematic_word(self.banks, base_word, candidate)
    }

    /// Whether two words are linked in the legacy pairwise table
    #[must_use]
    pub fn is_associated(&self, base_word: &str, candidate: &str) -> bool {
        validity::is_associated(self.associations, base_word, candidate)
    }

    /// Pairwise edge details, in either direction
    #[must_use]
    pub fn association_details(&self, first: &str, second: &str) -> Option<WordAssociation> {
        self.associations.details(first, second)
    }

    /// Run the chain-extension gate against the words already chained
    ///
    /// # Errors
    ///
    /// Returns the first `Rejection` hit.
    pub fn check_submission<'w>(
        &self,
        base_word: &str,
        chain_words: impl IntoIterator<Item = &'w str>,
        candidate: &str,
    ) -> Result<(), Rejection> {
        validity::check_submission(
            self.banks,
            self.config.min_word_length,
            base_word,
            chain_words,
            candidate,
        )
    }

    /// Thematic score for `word` with `chain_len` nodes already chained
    #[must_use]
    pub fn score(&self, word: &str, chain_len: usize) -> u32 {
        scoring::score_word(
            &self.config.scoring,
            self.config.min_word_length,
            word,
            chain_len,
        )
    }

    /// Legacy association score between `from` and `word`
    #[must_use]
    pub fn association_score(&self, from: &str, word: &str, chain_len: usize) -> u32 {
        let details = self.association_details(from, word);
        scoring::association_score(
            &self.config.scoring,
            details.as_ref(),
            word.trim().chars().count(),
            chain_len,
        )
    }

    /// Words still playable for the base word at this chain length
    #[must_use]
    pub fn eligible_words(
        &self,
        base_word: &str,
        chain_len: usize,
        used: &[&str],
    ) -> Vec<&'a ThematicWord> {
        grid::eligible_words(self.banks, &self.config.tiers, base_word, chain_len, used)
    }

    /// Fresh shuffled letter grid
    pub fn generate_grid<R: Rng + ?Sized>(
        &self,
        base_word: &str,
        chain_len: usize,
        used: &[&str],
        rng: &mut R,
    ) -> Vec<char> {
        grid::generate(self.banks, self.config, base_word, chain_len, used, rng)
    }

    /// Base words rich enough to be a daily word
    #[must_use]
    pub fn daily_candidates(&self) -> Vec<&'a str> {
        self.banks.daily_candidates(self.config.daily_min_bank_size)
    }

    /// The base word for a calendar day
    ///
    /// Returns `None` when no bank is rich enough to be picked.
    #[must_use]
    pub fn daily_word(&self, date: NaiveDate) -> Option<&'a str> {
        daily::daily_word(&self.daily_candidates(), &daily::date_key(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::loader::{embedded_associations, embedded_banks};

    #[test]
    fn engine_delegates_to_rules() {
        let banks = embedded_banks();
        let associations = embedded_associations();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        assert!(engine.is_valid_thematic_word("water", "wet"));
        assert!(!engine.is_valid_thematic_word("water", "zzz"));
        assert!(engine.is_associated("water", "river"));
        assert_eq!(engine.score("wet", 1), 30);
        assert_eq!(engine.score("we", 1), 0);
        assert!(engine.check_submission("water", ["water"], "wet").is_ok());
    }

    #[test]
    fn daily_word_comes_from_rich_banks() {
        let banks = embedded_banks();
        let associations = embedded_associations();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let word = engine.daily_word(date).unwrap();
        assert!(banks.bank(word).len() >= config.daily_min_bank_size);
        assert_eq!(engine.daily_word(date), Some(word));
    }

    #[test]
    fn no_daily_word_without_rich_banks() {
        let banks = ThematicBanks::new();
        let associations = AssociationTable::new();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(engine.daily_word(date), None);
    }

    #[test]
    fn association_score_zero_when_unrelated() {
        let banks = embedded_banks();
        let associations = embedded_associations();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        assert_eq!(engine.association_score("water", "zzz", 1), 0);
        assert!(engine.association_score("water", "river", 1) > 0);
    }
}
