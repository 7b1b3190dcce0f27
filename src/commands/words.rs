//! Bank inspection command
//!
//! Lists a base word's bank grouped by tier and category, marking which tiers
//! are open at a given chain length.

use crate::core::Difficulty;
use crate::engine::Engine;
use crate::engine::grid::is_unlocked;

/// Words of one category within a tier
pub struct CategoryGroup {
    pub category: String,
    pub words: Vec<String>,
}

/// One difficulty tier of a bank
pub struct TierReport {
    pub difficulty: Difficulty,
    pub unlocked: bool,
    pub groups: Vec<CategoryGroup>,
}

impl TierReport {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(|g| g.words.len()).sum()
    }
}

/// Result of inspecting a bank
pub struct BankReport {
    pub base_word: String,
    pub chain_len: usize,
    pub tiers: Vec<TierReport>,
    /// Words playable right now, base word excluded
    pub playable: usize,
}

/// Inspect the bank of `base_word` as seen at `chain_len`
///
/// # Errors
///
/// Returns an error if the base word has no bank.
pub fn inspect_bank(
    engine: &Engine<'_>,
    base_word: &str,
    chain_len: usize,
) -> Result<BankReport, String> {
    let base = base_word.trim().to_lowercase();
    let bank = engine.banks().bank(&base);
    if bank.is_empty() {
        return Err(format!("No thematic bank for '{base}'"));
    }

    let tiers = Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let mut groups: Vec<CategoryGroup> = Vec::new();
            for word in bank.iter().filter(|w| w.difficulty() == difficulty) {
                match groups.iter_mut().find(|g| g.category == word.category()) {
                    Some(group) => group.words.push(word.word().to_string()),
                    None => groups.push(CategoryGroup {
                        category: word.category().to_string(),
                        words: vec![word.word().to_string()],
                    }),
                }
            }
            TierReport {
                difficulty,
                unlocked: is_unlocked(&engine.config().tiers, difficulty, chain_len),
                groups,
            }
        })
        .collect();

    let playable = engine.eligible_words(&base, chain_len, &[base.as_str()]).len();

    Ok(BankReport {
        base_word: base,
        chain_len,
        tiers,
        playable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::loader::banks_from_slice;
    use crate::config::GameConfig;
    use crate::core::AssociationTable;

    fn fixture() -> crate::bank::ThematicBanks {
        banks_from_slice(&[
            ("water", "wet", "easy", "state"),
            ("water", "rain", "easy", "weather"),
            ("water", "dry", "easy", "state"),
            ("water", "steam", "medium", "state"),
            ("water", "osmosis", "hard", "scientific"),
        ])
    }

    #[test]
    fn groups_by_tier_and_category() {
        let banks = fixture();
        let associations = AssociationTable::new();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        let report = inspect_bank(&engine, "Water", 1).unwrap();
        assert_eq!(report.base_word, "water");
        assert_eq!(report.tiers.len(), 3);

        let easy = &report.tiers[0];
        assert!(easy.unlocked);
        assert_eq!(easy.word_count(), 3);
        assert_eq!(easy.groups[0].category, "state");
        assert_eq!(easy.groups[0].words, vec!["wet", "dry"]);

        assert!(!report.tiers[1].unlocked);
        assert!(!report.tiers[2].unlocked);
        assert_eq!(report.playable, 3);
    }

    #[test]
    fn longer_chain_opens_tiers() {
        let banks = fixture();
        let associations = AssociationTable::new();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        let report = inspect_bank(&engine, "water", 6).unwrap();
        assert!(report.tiers.iter().all(|t| t.unlocked));
        assert_eq!(report.playable, 5);
    }

    #[test]
    fn unknown_base_word() {
        let banks = fixture();
        let associations = AssociationTable::new();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        assert!(inspect_bank(&engine, "fire", 1).is_err());
    }
}
