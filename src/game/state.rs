//! Game state record
//!
//! `GameState` is the full snapshot handed to presentation and persistence.
//! It is only mutated through [`super::Game::dispatch`]; outside the crate it
//! is read-only.

use crate::core::WordNode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle phase derived from the playing / game-over flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    GameOver,
}

/// Snapshot of one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) is_playing: bool,
    pub(crate) is_game_over: bool,
    pub(crate) score: u32,
    pub(crate) timer: u32,
    pub(crate) current_word: String,
    #[serde(default)]
    pub(crate) base_word: String,
    pub(crate) word_chain: Vec<WordNode>,
    pub(crate) letter_grid: Vec<char>,
    pub(crate) selected_letters: Vec<usize>,
    #[serde(default)]
    pub(crate) selected_word: String,
    pub(crate) streak_count: u32,
    pub(crate) start_date: NaiveDate,
    pub(crate) daily_word: String,
    pub(crate) last_played_date: Option<NaiveDate>,
}

impl GameState {
    /// A not-yet-started game seeded with the base word
    #[must_use]
    pub(crate) fn fresh(
        base_word: &str,
        letter_grid: Vec<char>,
        today: NaiveDate,
        duration_secs: u32,
        streak_count: u32,
        last_played_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            is_playing: false,
            is_game_over: false,
            score: 0,
            timer: duration_secs,
            current_word: base_word.to_string(),
            base_word: base_word.to_string(),
            word_chain: vec![WordNode::root(base_word)],
            letter_grid,
            selected_letters: Vec::new(),
            selected_word: String::new(),
            streak_count,
            start_date: today,
            daily_word: base_word.to_string(),
            last_played_date,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_game_over {
            Phase::GameOver
        } else if self.is_playing {
            Phase::Playing
        } else {
            Phase::NotStarted
        }
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Seconds remaining
    #[must_use]
    pub const fn timer(&self) -> u32 {
        self.timer
    }

    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    #[must_use]
    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    #[must_use]
    pub fn word_chain(&self) -> &[WordNode] {
        &self.word_chain
    }

    #[must_use]
    pub fn letter_grid(&self) -> &[char] {
        &self.letter_grid
    }

    #[must_use]
    pub fn selected_letters(&self) -> &[usize] {
        &self.selected_letters
    }

    /// Letters at the selected cells, in selection order
    #[must_use]
    pub fn selected_word(&self) -> &str {
        &self.selected_word
    }

    #[must_use]
    pub const fn streak_count(&self) -> u32 {
        self.streak_count
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn daily_word(&self) -> &str {
        &self.daily_word
    }

    #[must_use]
    pub const fn last_played_date(&self) -> Option<NaiveDate> {
        self.last_played_date
    }

    /// Every chained word, base word first
    #[must_use]
    pub fn used_words(&self) -> Vec<&str> {
        self.word_chain.iter().map(|node| node.word.as_str()).collect()
    }

    /// The active (most recent) node
    #[must_use]
    pub fn active_node(&self) -> Option<&WordNode> {
        self.word_chain.last().filter(|node| node.is_active)
    }

    /// First unselected cell holding `letter`
    #[must_use]
    pub fn free_cell(&self, letter: char) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        self.letter_grid
            .iter()
            .enumerate()
            .find(|&(i, &c)| c == letter && !self.selected_letters.contains(&i))
            .map(|(i, _)| i)
    }

    /// Unselected cells spelling `word`, first free match per letter
    ///
    /// Returns `None` if the grid cannot spell it.
    #[must_use]
    pub fn cells_for(&self, word: &str) -> Option<Vec<usize>> {
        let mut taken: Vec<usize> = Vec::with_capacity(word.len());
        for letter in word.trim().chars().map(|c| c.to_ascii_lowercase()) {
            let cell = self
                .letter_grid
                .iter()
                .enumerate()
                .find(|&(i, &c)| {
                    c == letter && !self.selected_letters.contains(&i) && !taken.contains(&i)
                })
                .map(|(i, _)| i)?;
            taken.push(cell);
        }
        Some(taken)
    }

    /// Re-derive `selected_word` from the selected cells
    pub(crate) fn refresh_selected_word(&mut self) {
        self.selected_word = self
            .selected_letters
            .iter()
            .filter_map(|&i| self.letter_grid.get(i))
            .map(char::to_ascii_lowercase)
            .collect();
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_letters.clear();
        self.selected_word.clear();
    }

    /// Check the structural invariants of a snapshot
    ///
    /// Returns a description of the first broken invariant.
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        let Some(last) = self.word_chain.last() else {
            return Err("word chain is empty".into());
        };

        let active = self.word_chain.iter().filter(|n| n.is_active).count();
        if active != 1 || !last.is_active {
            return Err(format!(
                "expected only the last node to be active, found {active} active"
            ));
        }

        if self.word_chain.iter().enumerate().any(|(i, n)| n.id != i) {
            return Err("chain ids are not sequential".into());
        }

        if self.word_chain[0].word != self.base_word {
            return Err("first chain node is not the base word".into());
        }

        if last.word != self.current_word {
            return Err("current word does not match the chain tip".into());
        }

        let mut seen = Vec::with_capacity(self.selected_letters.len());
        for &i in &self.selected_letters {
            if i >= self.letter_grid.len() || seen.contains(&i) {
                return Err(format!("invalid selected cell {i}"));
            }
            seen.push(i);
        }

        Ok(())
    }
}
