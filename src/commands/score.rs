//! Word scoring command
//!
//! Explains what a word would be worth against a base word.

use crate::core::{Difficulty, WordAssociation, normalize};
use crate::engine::Engine;

/// Result of scoring a word
pub struct ScoreReport {
    pub base_word: String,
    pub word: String,
    pub chain_len: usize,
    /// Tier and category when the word is in the base word's bank
    pub thematic: Option<(Difficulty, String)>,
    pub score: u32,
    pub association: Option<WordAssociation>,
    pub association_score: u32,
}

impl ScoreReport {
    #[must_use]
    pub const fn is_thematic(&self) -> bool {
        self.thematic.is_some()
    }
}

/// Score `word` against `base_word` with `chain_len` words already chained
///
/// # Errors
///
/// Returns an error if the word is empty or contains non-letters.
pub fn score_word(
    engine: &Engine<'_>,
    base_word: &str,
    word: &str,
    chain_len: usize,
) -> Result<ScoreReport, String> {
    let word = normalize(word);
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("Invalid word: '{word}'"));
    }
    let base = normalize(base_word);

    let thematic = engine
        .banks()
        .entry(&base, &word)
        .map(|entry| (entry.difficulty(), entry.category().to_string()));

    Ok(ScoreReport {
        score: engine.score(&word, chain_len),
        association: engine.association_details(&base, &word),
        association_score: engine.association_score(&base, &word, chain_len),
        base_word: base,
        word,
        chain_len,
        thematic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::loader::banks_from_slice;
    use crate::config::GameConfig;
    use crate::core::AssociationTable;

    #[test]
    fn thematic_word_report() {
        let banks = banks_from_slice(&[("water", "rain", "easy", "weather")]);
        let mut associations = AssociationTable::new();
        associations.insert("water", WordAssociation::new("rain", 0.2, 0.8));
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        let report = score_word(&engine, "water", " Rain ", 1).unwrap();
        assert_eq!(report.word, "rain");
        assert!(report.is_thematic());
        assert_eq!(report.thematic, Some((Difficulty::Easy, "weather".to_string())));
        assert_eq!(report.score, 40);
        assert!(report.association.is_some());
        assert!(report.association_score > 0);
    }

    #[test]
    fn unrelated_word_still_scores_by_length() {
        let banks = banks_from_slice(&[("water", "rain", "easy", "weather")]);
        let associations = AssociationTable::new();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        let report = score_word(&engine, "water", "zzz", 1).unwrap();
        assert!(!report.is_thematic());
        assert_eq!(report.score, 30);
        assert_eq!(report.association_score, 0);
    }

    #[test]
    fn rejects_non_letters() {
        let banks = banks_from_slice(&[("water", "rain", "easy", "weather")]);
        let associations = AssociationTable::new();
        let config = GameConfig::default();
        let engine = Engine::new(&banks, &associations, &config);

        assert!(score_word(&engine, "water", "r4in", 1).is_err());
        assert!(score_word(&engine, "water", "  ", 1).is_err());
    }
}
