//! Pairwise word associations
//!
//! The legacy association model stores, per source word, a list of related
//! words with a rarity and a strength. The thematic bank model supersedes it for
//! validity; the table is still used for association details and the legacy
//! scoring formula.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Rarity added to a reverse edge created during symmetrization
const REVERSE_RARITY_STEP: f64 = 0.1;
/// Upper bound for a reverse edge's rarity
const REVERSE_RARITY_CAP: f64 = 0.9;
/// Strength removed from a reverse edge created during symmetrization
const REVERSE_STRENGTH_STEP: f64 = 0.1;
/// Lower bound for a reverse edge's strength
const REVERSE_STRENGTH_FLOOR: f64 = 0.3;

/// One directed edge in the association table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAssociation {
    pub word: String,
    /// 0-1, higher means rarer
    pub rarity: f64,
    /// 0-1, higher means a stronger association
    pub strength: f64,
}

impl WordAssociation {
    #[must_use]
    pub fn new(word: impl Into<String>, rarity: f64, strength: f64) -> Self {
        Self {
            word: word.into().to_lowercase(),
            rarity: rarity.clamp(0.0, 1.0),
            strength: strength.clamp(0.0, 1.0),
        }
    }

    /// The edge added in the opposite direction when only one side lists it
    fn reversed(&self, source: &str) -> Self {
        Self {
            word: source.to_string(),
            rarity: (self.rarity + REVERSE_RARITY_STEP).min(REVERSE_RARITY_CAP),
            strength: (self.strength - REVERSE_STRENGTH_STEP).max(REVERSE_STRENGTH_FLOOR),
        }
    }
}

/// Association lists keyed by lowercase source word
#[derive(Debug, Clone, Default)]
pub struct AssociationTable {
    edges: FxHashMap<String, Vec<WordAssociation>>,
}

impl AssociationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge `source -> association.word`
    ///
    /// Self-loops and repeated edges are ignored.
    pub fn insert(&mut self, source: &str, association: WordAssociation) {
        let source = source.trim().to_lowercase();
        if source == association.word {
            return;
        }

        let list = self.edges.entry(source).or_default();
        if !list.iter().any(|a| a.word == association.word) {
            list.push(association);
        }
    }

    /// Make every edge bidirectional
    ///
    /// Missing reverse edges get rarity +0.1 (capped at 0.9) and strength -0.1
    /// (floored at 0.3). Existing reverse edges are left untouched.
    #[must_use]
    pub fn into_symmetric(self) -> Self {
        let mut symmetric = self.clone();

        for (source, associations) in &self.edges {
            for association in associations {
                let reverse = symmetric.edges.entry(association.word.clone()).or_default();
                if !reverse.iter().any(|a| a.word == *source) {
                    reverse.push(association.reversed(source));
                }
            }
        }

        symmetric
    }

    /// Associations listed for `word` (empty if none)
    #[must_use]
    pub fn associations_of(&self, word: &str) -> &[WordAssociation] {
        self.edges
            .get(word.trim().to_lowercase().as_str())
            .map_or(&[], Vec::as_slice)
    }

    /// Edge details between two words, checking both directions
    ///
    /// A reverse hit is returned re-labelled with `second` so the caller always
    /// sees the word it asked about.
    #[must_use]
    pub fn details(&self, first: &str, second: &str) -> Option<WordAssociation> {
        let first = first.trim().to_lowercase();
        let second = second.trim().to_lowercase();

        if let Some(direct) = self
            .associations_of(&first)
            .iter()
            .find(|a| a.word == second)
        {
            return Some(direct.clone());
        }

        self.associations_of(&second)
            .iter()
            .find(|a| a.word == first)
            .map(|reverse| WordAssociation {
                word: second.clone(),
                rarity: reverse.rarity,
                strength: reverse.strength,
            })
    }

    /// Whether the two words are associated in either direction
    #[must_use]
    pub fn are_associated(&self, first: &str, second: &str) -> bool {
        self.details(first, second).is_some()
    }

    /// Number of source words with at least one edge
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether every edge has its reverse
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.edges.iter().all(|(source, associations)| {
            associations.iter().all(|a| {
                self.associations_of(&a.word)
                    .iter()
                    .any(|back| back.word == *source)
            })
        })
    }
}
