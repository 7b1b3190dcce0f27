//! Word scoring
//!
//! Thematic formula:
//! `length × letter_weight + chain bonuses + long-word bonuses`
//!
//! Legacy association formula:
//! `length × legacy_weight + round(rarity × 5) + round(strength × 3) + chain bonuses`
//!
//! The chain bonus is the bonus of the highest threshold reached, so a chain
//! of 12 earns 10. Long-word bonuses add up: an 8-letter word earns both.

use crate::config::ScoringConfig;
use crate::core::WordAssociation;

/// Bonuses whose threshold `value` has reached
fn reached(tiers: &[(usize, u32)], value: usize) -> impl Iterator<Item = u32> + '_ {
    tiers
        .iter()
        .filter(move |&&(threshold, _)| value >= threshold)
        .map(|&(_, bonus)| bonus)
}

/// Sum of the bonuses whose threshold `value` has reached
fn tier_bonus(tiers: &[(usize, u32)], value: usize) -> u32 {
    reached(tiers, value).sum()
}

/// Bonus earned for the chain length at submission time
#[must_use]
pub fn chain_bonus(config: &ScoringConfig, chain_len: usize) -> u32 {
    reached(&config.chain_bonuses, chain_len).max().unwrap_or(0)
}

/// Bonus earned for an especially long word
#[must_use]
pub fn length_bonus(config: &ScoringConfig, word_len: usize) -> u32 {
    tier_bonus(&config.length_bonuses, word_len)
}

/// Thematic score for a word of `word_len` characters
///
/// `chain_len` is the chain length before the word is appended.
///
/// # Examples
/// ```
/// use chain_reaction::config::ScoringConfig;
/// use chain_reaction::engine::scoring::thematic_score;
///
/// let config = ScoringConfig::default();
/// assert_eq!(thematic_score(&config, 3, 1), 30);
/// assert_eq!(thematic_score(&config, 6, 5), 60 + 5 + 20);
/// ```
#[must_use]
pub fn thematic_score(config: &ScoringConfig, word_len: usize, chain_len: usize) -> u32 {
    let base = u32::try_from(word_len)
        .unwrap_or(u32::MAX)
        .saturating_mul(config.letter_weight);

    base.saturating_add(chain_bonus(config, chain_len))
        .saturating_add(length_bonus(config, word_len))
}

/// Score a raw word, returning 0 for empty or too-short input
#[must_use]
pub fn score_word(config: &ScoringConfig, min_len: usize, word: &str, chain_len: usize) -> u32 {
    let len = word.trim().chars().count();
    if len == 0 || len < min_len {
        return 0;
    }
    thematic_score(config, len, chain_len)
}

/// Legacy score modulated by association rarity and strength
///
/// Returns 0 when the words are not associated.
#[must_use]
pub fn association_score(
    config: &ScoringConfig,
    association: Option<&WordAssociation>,
    word_len: usize,
    chain_len: usize,
) -> u32 {
    let Some(association) = association else {
        return 0;
    };

    let base = u32::try_from(word_len)
        .unwrap_or(u32::MAX)
        .saturating_mul(config.legacy_letter_weight);
    let rarity = (association.rarity * 5.0).round() as u32;
    let strength = (association.strength * 3.0).round() as u32;

    base.saturating_add(rarity)
        .saturating_add(strength)
        .saturating_add(chain_bonus(config, chain_len))
}
