//! Thematic word banks
//!
//! Provides the curated banks compiled into the binary and a read-only store
//! keyed by lowercase base word.

mod embedded;
pub mod loader;

pub use embedded::{
    ASSOCIATION_ENTRIES, ASSOCIATION_ENTRIES_COUNT, THEMATIC_ENTRIES, THEMATIC_ENTRIES_COUNT,
};

use crate::core::ThematicWord;
use rustc_hash::FxHashMap;

/// Read-only store of thematic banks
///
/// Base words keep the order in which they were first loaded so that daily
/// selection indexes a stable list.
#[derive(Debug, Clone, Default)]
pub struct ThematicBanks {
    banks: FxHashMap<String, Vec<ThematicWord>>,
    order: Vec<String>,
}

impl ThematicBanks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word to a base word's bank
    ///
    /// Returns `false` (and leaves the bank unchanged) when the word is already
    /// present, compared case-insensitively.
    pub fn push(&mut self, base_word: &str, word: ThematicWord) -> bool {
        let base = base_word.trim().to_lowercase();
        if !self.banks.contains_key(&base) {
            self.order.push(base.clone());
        }

        let bank = self.banks.entry(base).or_default();
        if bank.iter().any(|existing| existing.matches(word.word())) {
            return false;
        }
        bank.push(word);
        true
    }

    /// The bank for a base word, empty when unknown
    ///
    /// # Examples
    /// ```
    /// use chain_reaction::bank::loader::embedded_banks;
    ///
    /// let banks = embedded_banks();
    /// assert!(banks.bank("water").iter().any(|w| w.word() == "wet"));
    /// assert!(banks.bank("nonexistent").is_empty());
    /// ```
    #[must_use]
    pub fn bank(&self, base_word: &str) -> &[ThematicWord] {
        self.banks
            .get(base_word.trim().to_lowercase().as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// Whether `candidate` is in the base word's bank (case-insensitive)
    #[must_use]
    pub fn contains(&self, base_word: &str, candidate: &str) -> bool {
        self.bank(base_word).iter().any(|w| w.matches(candidate))
    }

    /// Bank entry for `candidate` under a base word
    #[must_use]
    pub fn entry(&self, base_word: &str, candidate: &str) -> Option<&ThematicWord> {
        self.bank(base_word).iter().find(|w| w.matches(candidate))
    }

    /// All base words in load order
    pub fn base_words(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Base words whose bank holds at least `min_size` words, in load order
    #[must_use]
    pub fn daily_candidates(&self, min_size: usize) -> Vec<&str> {
        self.base_words()
            .filter(|base| {
                let size = self.bank(base).len();
                size > 0 && size >= min_size
            })
            .collect()
    }

    /// Number of base words
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn word(text: &str) -> ThematicWord {
        ThematicWord::new(text, Difficulty::Easy, "misc").unwrap()
    }

    #[test]
    fn push_rejects_case_insensitive_duplicates() {
        let mut banks = ThematicBanks::new();
        assert!(banks.push("water", word("rain")));
        assert!(!banks.push("WATER", word("RAIN")));
        assert_eq!(banks.bank("water").len(), 1);
    }

    #[test]
    fn lookup_normalizes_base_word() {
        let mut banks = ThematicBanks::new();
        banks.push("water", word("wet"));
        assert!(banks.contains("Water", "WET"));
        assert!(banks.contains(" water ", "wet"));
        assert!(!banks.contains("fire", "wet"));
    }

    #[test]
    fn base_words_keep_load_order() {
        let mut banks = ThematicBanks::new();
        banks.push("music", word("song"));
        banks.push("exam", word("test"));
        banks.push("music", word("sing"));

        let order: Vec<_> = banks.base_words().collect();
        assert_eq!(order, vec!["music", "exam"]);
        assert_eq!(banks.len(), 2);
    }

    #[test]
    fn daily_candidates_filter_small_banks() {
        let mut banks = ThematicBanks::new();
        banks.push("music", word("song"));
        banks.push("music", word("sing"));
        banks.push("exam", word("test"));

        assert_eq!(banks.daily_candidates(2), vec!["music"]);
        assert_eq!(banks.daily_candidates(0), vec!["music", "exam"]);
    }

    #[test]
    fn embedded_tables_complete() {
        assert_eq!(THEMATIC_ENTRIES.len(), THEMATIC_ENTRIES_COUNT);
        assert_eq!(ASSOCIATION_ENTRIES.len(), ASSOCIATION_ENTRIES_COUNT);

        let banks = loader::embedded_banks();
        let loaded: usize = banks.base_words().map(|base| banks.bank(base).len()).sum();
        assert_eq!(loaded, THEMATIC_ENTRIES_COUNT);
        assert!(banks.daily_candidates(15).len() >= 3);
    }

    #[test]
    fn entry_finds_bank_word() {
        let mut banks = ThematicBanks::new();
        banks.push("water", word("tide"));
        assert_eq!(banks.entry("water", "TIDE").map(ThematicWord::word), Some("tide"));
        assert!(banks.entry("water", "wave").is_none());
    }
}
