//! Word selection
//!
//! Embedded word categories with difficulty-aware random selection, plus the
//! sparse fun-fact table.

mod embedded;

use crate::core::Tier;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;

pub use embedded::{CATEGORIES, FACTS};

/// Errors from word selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBankError {
    /// No category with that name exists
    UnknownCategory(String),
    /// The category has no word meeting the tier's minimum length
    ///
    /// Recoverable: pick a different category or an easier tier.
    NoEligibleWord {
        category: String,
        min_word_len: usize,
    },
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory(name) => write!(f, "unknown category '{name}'"),
            Self::NoEligibleWord {
                category,
                min_word_len,
            } => write!(
                f,
                "category '{category}' has no word of at least {min_word_len} letters"
            ),
        }
    }
}

impl std::error::Error for WordBankError {}

/// Immutable category -> words mapping with fun-fact lookup
pub struct WordBank {
    categories: Vec<(&'static str, &'static [&'static str])>,
    facts: FxHashMap<&'static str, &'static str>,
}

impl WordBank {
    /// Build the bank from the embedded tables
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: CATEGORIES.to_vec(),
            facts: FACTS.iter().copied().collect(),
        }
    }

    /// Category display names, in menu order
    pub fn category_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|(name, _)| *name)
    }

    /// All words in a category
    ///
    /// # Errors
    /// [`WordBankError::UnknownCategory`] if no category matches `name`
    /// (case-insensitively).
    pub fn words_in(&self, name: &str) -> Result<&'static [&'static str], WordBankError> {
        self.categories
            .iter()
            .find(|(cat, _)| cat.eq_ignore_ascii_case(name))
            .map(|(_, words)| *words)
            .ok_or_else(|| WordBankError::UnknownCategory(name.to_string()))
    }

    /// How many words in a category satisfy a tier's minimum length
    ///
    /// # Errors
    /// [`WordBankError::UnknownCategory`] if the category does not exist.
    pub fn eligible_count(&self, name: &str, tier: &Tier) -> Result<usize, WordBankError> {
        let words = self.words_in(name)?;
        Ok(words
            .iter()
            .filter(|w| w.len() >= tier.min_word_len())
            .count())
    }

    /// Pick a random word from `category` that satisfies the tier minimum
    ///
    /// Selection is uniform over the eligible words, so a seeded rng makes it
    /// deterministic.
    ///
    /// # Errors
    /// - [`WordBankError::UnknownCategory`] if the category does not exist
    /// - [`WordBankError::NoEligibleWord`] if every word is too short for the
    ///   tier
    pub fn select_word<R: Rng>(
        &self,
        category: &str,
        tier: &Tier,
        rng: &mut R,
    ) -> Result<&'static str, WordBankError> {
        let words = self.words_in(category)?;
        let eligible: Vec<&'static str> = words
            .iter()
            .filter(|w| w.len() >= tier.min_word_len())
            .copied()
            .collect();

        eligible
            .choose(rng)
            .copied()
            .ok_or_else(|| WordBankError::NoEligibleWord {
                category: category.to_string(),
                min_word_len: tier.min_word_len(),
            })
    }

    /// Fun fact for a word, if the table has one
    #[must_use]
    pub fn fact_for(&self, word: &str) -> Option<&'static str> {
        self.facts.get(word).copied()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new()
    }
}
