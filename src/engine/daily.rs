//! Daily puzzle selection
//!
//! Everyone playing on the same calendar day gets the same base word: the date
//! string seeds a ChaCha generator that picks an index into the eligible base
//! words. No other entropy is involved.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Date format used for seeding and for persisted dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar key for a date, e.g. `2024-03-09`
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Deterministic generator for a date key
fn rng_for(key: &str) -> ChaCha8Rng {
    let mut seed = <ChaCha8Rng as SeedableRng>::Seed::default();
    for (slot, byte) in seed.iter_mut().zip(key.bytes()) {
        *slot = byte;
    }
    ChaCha8Rng::from_seed(seed)
}

/// Index of the daily word for `key` among `len` candidates
#[must_use]
pub fn daily_index(key: &str, len: usize) -> Option<usize> {
    (len > 0).then(|| rng_for(key).random_range(0..len))
}

/// The daily base word for `key`
///
/// # Examples
/// ```
/// use chain_reaction::engine::daily::daily_word;
///
/// let candidates = ["water", "exam", "music", "food"];
/// let today = daily_word(&candidates, "2024-03-09");
/// assert_eq!(today, daily_word(&candidates, "2024-03-09"));
/// assert!(today.is_some());
/// assert_eq!(daily_word(&[], "2024-03-09"), None);
/// ```
#[must_use]
pub fn daily_word<'b>(candidates: &[&'b str], key: &str) -> Option<&'b str> {
    daily_index(key, candidates.len()).map(|i| candidates[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CANDIDATES: [&str; 5] = ["water", "exam", "music", "food", "family"];

    #[test]
    fn date_key_is_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date_key(date), "2024-03-09");
    }

    #[test]
    fn empty_candidates_have_no_daily_word() {
        assert_eq!(daily_index("2024-03-09", 0), None);
    }

    #[test]
    fn single_candidate_always_chosen() {
        assert_eq!(daily_word(&["water"], "1999-12-31"), Some("water"));
    }

    #[test]
    fn dates_spread_over_candidates() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let picked: std::collections::HashSet<_> = start
            .iter_days()
            .take(60)
            .filter_map(|d| daily_word(&CANDIDATES, &date_key(d)))
            .collect();
        assert!(picked.len() > 1, "sixty days all picked the same word");
    }

    proptest! {
        #[test]
        fn same_day_same_word(year in 2000i32..2100, ordinal in 1u32..366) {
            let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
            let key = date_key(date);
            prop_assert_eq!(daily_word(&CANDIDATES, &key), daily_word(&CANDIDATES, &key.clone()));
            prop_assert!(daily_index(&key, CANDIDATES.len()).unwrap() < CANDIDATES.len());
        }
    }
}
