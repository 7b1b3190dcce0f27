//! Letter-grid generation
//!
//! A grid is seeded from a diverse sample of the thematic words the player can
//! still play, so a useful number of them are spellable, then topped up with
//! essential and high-frequency letters so the answers are not laid out as
//! obvious runs.
//!
//! # Algorithm
//! 1. Eligible words: the base word's bank, minus every word already chained,
//!    filtered by the tiers unlocked at the current chain length
//! 2. Round-robin across categories to pick up to `target_words` of them
//! 3. Add each letter `ceil(freq / divisor)` times, clamped to
//!    `1..=max_duplicates`, most frequent letters first
//! 4. Add missing essential letters while more than `fill_reserve` slots remain
//! 5. Pad with the high-frequency fill string to the exact grid size
//! 6. Shuffle
//!
//! Steps 1-5 are deterministic. With no eligible word at all, every cell is a
//! uniform draw from the fallback letters instead.

use crate::bank::ThematicBanks;
use crate::config::{GameConfig, GridConfig, TierConfig};
use crate::core::{Difficulty, ThematicWord};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::VecDeque;
use tracing::debug;

/// Used when a configured letter source is empty
const DEFAULT_LETTERS: &str = "eariotnslcudpmhgbfywkvxzjq";

/// Whether a tier is playable at the given chain length
///
/// Tiers never lock again once the chain has grown past their threshold.
#[must_use]
pub const fn is_unlocked(tiers: &TierConfig, difficulty: Difficulty, chain_len: usize) -> bool {
    match difficulty {
        Difficulty::Easy => true,
        Difficulty::Medium => chain_len >= tiers.medium_from,
        Difficulty::Hard => chain_len >= tiers.hard_from,
    }
}

/// Bank words still playable at this chain length, in bank order
#[must_use]
pub fn eligible_words<'b>(
    banks: &'b ThematicBanks,
    tiers: &TierConfig,
    base_word: &str,
    chain_len: usize,
    used: &[&str],
) -> Vec<&'b ThematicWord> {
    banks
        .bank(base_word)
        .iter()
        .filter(|word| is_unlocked(tiers, word.difficulty(), chain_len))
        .filter(|word| !used.iter().any(|u| word.matches(u)))
        .collect()
}

/// Pick up to `target` words, one per category per pass
///
/// Categories are visited in order of first appearance, and each category
/// yields its words in bank order.
#[must_use]
pub fn select_diverse<'b>(words: &[&'b ThematicWord], target: usize) -> Vec<&'b str> {
    let mut buckets: Vec<(&'b str, VecDeque<&'b ThematicWord>)> = Vec::new();
    for &word in words {
        match buckets
            .iter_mut()
            .find(|(category, _)| *category == word.category())
        {
            Some((_, bucket)) => bucket.push_back(word),
            None => buckets.push((word.category(), VecDeque::from([word]))),
        }
    }

    let limit = target.min(words.len());
    let mut selected = Vec::with_capacity(limit);

    while selected.len() < limit {
        for (_, bucket) in &mut buckets {
            if selected.len() >= limit {
                break;
            }
            if let Some(word) = bucket.pop_front() {
                selected.push(word.word());
            }
        }
    }

    selected
}

/// Deterministic letter multiset for the selected words, before shuffling
///
/// Always returns exactly `cells` letters.
#[must_use]
pub fn seed_letters(words: &[&str], grid: &GridConfig, cells: usize) -> Vec<char> {
    let capacity = cells.saturating_sub(grid.fill_reserve);

    // Frequency table, remembering first appearance for stable ties
    let mut order: Vec<char> = Vec::new();
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for word in words {
        for ch in word.chars().map(|c| c.to_ascii_lowercase()) {
            let count = counts.entry(ch).or_default();
            if *count == 0 {
                order.push(ch);
            }
            *count += 1;
        }
    }
    order.sort_by_key(|ch| Reverse(counts[ch]));

    let mut letters = Vec::with_capacity(cells);
    let divisor = grid.frequency_divisor.max(1);
    let max_copies = grid.max_duplicates.max(1);

    'frequency: for ch in order {
        let copies = counts[&ch].div_ceil(divisor).clamp(1, max_copies);
        for _ in 0..copies {
            if letters.len() >= capacity {
                break 'frequency;
            }
            letters.push(ch);
        }
    }

    for ch in grid.essential_letters.chars() {
        if letters.len() >= capacity {
            break;
        }
        if !letters.contains(&ch) {
            letters.push(ch);
        }
    }

    let fill = non_empty_or_default(&grid.high_frequency_fill);
    let missing = cells.saturating_sub(letters.len());
    letters.extend(fill.chars().cycle().take(missing));
    letters.truncate(cells);

    letters
}

/// Every cell drawn uniformly from the fallback letters
pub fn fallback_letters<R: Rng + ?Sized>(grid: &GridConfig, cells: usize, rng: &mut R) -> Vec<char> {
    let pool: Vec<char> = non_empty_or_default(&grid.fallback_letters).chars().collect();
    (0..cells)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}

/// Generate a shuffled grid for the current position in the game
///
/// `used` holds every word already in the chain, base word included.
pub fn generate<R: Rng + ?Sized>(
    banks: &ThematicBanks,
    config: &GameConfig,
    base_word: &str,
    chain_len: usize,
    used: &[&str],
    rng: &mut R,
) -> Vec<char> {
    let cells = config.grid_size.cells();
    let eligible = eligible_words(banks, &config.tiers, base_word, chain_len, used);

    if eligible.is_empty() {
        debug!(base_word, chain_len, "no eligible words, using fallback grid");
        return fallback_letters(&config.grid, cells, rng);
    }

    let selected = select_diverse(&eligible, config.grid.target_words);
    debug!(
        base_word,
        chain_len,
        eligible = eligible.len(),
        selected = selected.len(),
        "seeding letter grid"
    );

    let mut letters = seed_letters(&selected, &config.grid, cells);
    letters.shuffle(rng);
    letters
}

fn non_empty_or_default(letters: &str) -> &str {
    if letters.is_empty() {
        DEFAULT_LETTERS
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::loader::{banks_from_slice, embedded_banks};
    use crate::config::GridSize;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn banks() -> ThematicBanks {
        banks_from_slice(&[
            ("water", "wet", "easy", "state"),
            ("water", "rain", "easy", "weather"),
            ("water", "lake", "easy", "bodies"),
            ("water", "sea", "easy", "bodies"),
            ("water", "pond", "easy", "bodies"),
            ("water", "steam", "medium", "state"),
            ("water", "flood", "medium", "disaster"),
            ("water", "osmosis", "hard", "scientific"),
        ])
    }

    fn words(selected: &[&ThematicWord]) -> Vec<String> {
        selected.iter().map(|w| w.word().to_string()).collect()
    }

    #[test]
    fn tiers_unlock_with_chain_length() {
        let tiers = TierConfig::default();
        assert!(is_unlocked(&tiers, Difficulty::Easy, 1));
        assert!(!is_unlocked(&tiers, Difficulty::Medium, 2));
        assert!(is_unlocked(&tiers, Difficulty::Medium, 3));
        assert!(!is_unlocked(&tiers, Difficulty::Hard, 5));
        assert!(is_unlocked(&tiers, Difficulty::Hard, 6));
        assert!(is_unlocked(&tiers, Difficulty::Hard, 60));
    }

    #[test]
    fn eligible_words_follow_tiers() {
        let banks = banks();
        let tiers = TierConfig::default();

        let early = eligible_words(&banks, &tiers, "water", 1, &["water"]);
        assert_eq!(words(&early), vec!["wet", "rain", "lake", "sea", "pond"]);

        let middle = eligible_words(&banks, &tiers, "water", 3, &["water"]);
        assert!(words(&middle).contains(&"steam".to_string()));
        assert!(!words(&middle).contains(&"osmosis".to_string()));

        let late = eligible_words(&banks, &tiers, "water", 6, &["water"]);
        assert_eq!(late.len(), 8);
    }

    #[test]
    fn eligible_words_exclude_used_case_insensitive() {
        let banks = banks();
        let tiers = TierConfig::default();
        let eligible = eligible_words(&banks, &tiers, "water", 1, &["water", "WET", "Rain"]);
        assert_eq!(words(&eligible), vec!["lake", "sea", "pond"]);
    }

    #[test]
    fn eligible_words_unknown_base_is_empty() {
        let banks = banks();
        assert!(eligible_words(&banks, &TierConfig::default(), "fire", 10, &[]).is_empty());
    }

    #[test]
    fn select_diverse_cycles_categories() {
        let banks = banks();
        let tiers = TierConfig::default();
        let eligible = eligible_words(&banks, &tiers, "water", 1, &["water"]);

        // Categories in order: state, weather, bodies
        assert_eq!(select_diverse(&eligible, 3), vec!["wet", "rain", "lake"]);
        assert_eq!(
            select_diverse(&eligible, 10),
            vec!["wet", "rain", "lake", "sea", "pond"]
        );
        assert!(select_diverse(&eligible, 0).is_empty());
    }

    #[test]
    fn seed_letters_frequency_first() {
        let grid = GridConfig::default();
        let letters = seed_letters(&["sea", "see"], &grid, 25);

        // e appears 3 times -> 2 copies; s twice -> 1; a once -> 1
        let head: String = letters[..4].iter().collect();
        assert_eq!(head, "eesa");
        assert_eq!(letters.len(), 25);
    }

    #[test]
    fn seed_letters_caps_duplicates() {
        let grid = GridConfig::default();
        let letters = seed_letters(&["eeeeeeeeeeee"], &grid, 36);
        assert_eq!(letters.iter().take_while(|&&c| c == 'e').count(), 4);
    }

    #[test]
    fn seed_letters_layout() {
        let grid = GridConfig::default();
        let letters: String = seed_letters(&["wet", "rain"], &grid, 25).into_iter().collect();

        // Frequency letters, then essentials up to the reserve, then padding
        assert_eq!(&letters[..7], "wetrain");
        assert_eq!(&letters[7..21], "ousldgcmpbfhvy");
        assert_eq!(&letters[21..], "eari");
    }

    #[test]
    fn seed_letters_never_overflow() {
        let grid = GridConfig::default();
        let many = [
            "abcdefghijklm",
            "nopqrstuvwxyz",
            "abcdefghijklm",
            "nopqrstuvwxyz",
            "abcdefghijklm",
            "nopqrstuvwxyz",
        ];
        assert_eq!(seed_letters(&many, &grid, 36).len(), 36);
        assert_eq!(seed_letters(&many, &grid, 25).len(), 25);
    }

    #[test]
    fn seed_letters_survive_empty_fill() {
        let grid = GridConfig {
            high_frequency_fill: String::new(),
            essential_letters: String::new(),
            ..GridConfig::default()
        };
        assert_eq!(seed_letters(&["wet"], &grid, 36).len(), 36);
    }

    #[test]
    fn fallback_uses_only_fallback_letters() {
        let grid = GridConfig {
            fallback_letters: "xyz".to_string(),
            ..GridConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let letters = fallback_letters(&grid, 36, &mut rng);
        assert_eq!(letters.len(), 36);
        assert!(letters.iter().all(|c| "xyz".contains(*c)));
    }

    #[test]
    fn generate_falls_back_for_unknown_base() {
        let banks = banks();
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let grid = generate(&banks, &config, "fire", 1, &["fire"], &mut rng);
        assert_eq!(grid.len(), 36);
    }

    #[test]
    fn generate_is_a_shuffle_of_the_seed() {
        let banks = banks();
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = generate(&banks, &config, "water", 1, &["water"], &mut rng);

        let eligible = eligible_words(&banks, &config.tiers, "water", 1, &["water"]);
        let selected = select_diverse(&eligible, config.grid.target_words);
        let mut seed = seed_letters(&selected, &config.grid, 36);

        grid.sort_unstable();
        seed.sort_unstable();
        assert_eq!(grid, seed);
    }

    #[test]
    fn generate_respects_grid_size() {
        let banks = embedded_banks();
        let config = GameConfig {
            grid_size: GridSize::Five,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        for chain_len in 1..12 {
            let grid = generate(&banks, &config, "food", chain_len, &["food"], &mut rng);
            assert_eq!(grid.len(), 25);
        }
    }

    proptest! {
        #[test]
        fn grid_always_full(chain_len in 0usize..30, used_count in 0usize..60, seed in any::<u64>(), six in any::<bool>()) {
            let banks = embedded_banks();
            let config = GameConfig {
                grid_size: if six { GridSize::Six } else { GridSize::Five },
                ..GameConfig::default()
            };
            let used: Vec<&str> = banks.bank("water").iter().take(used_count).map(ThematicWord::word).collect();
            let mut rng = StdRng::seed_from_u64(seed);

            let grid = generate(&banks, &config, "water", chain_len, &used, &mut rng);
            prop_assert_eq!(grid.len(), config.grid_size.cells());
            prop_assert!(grid.iter().all(char::is_ascii_lowercase));
        }
    }
}
