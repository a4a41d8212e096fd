//! Difficulty tiers
//!
//! A tier bundles the maximum number of incorrect guesses, the minimum word
//! length, and the score multiplier for one difficulty level.

use std::fmt;

/// A named difficulty configuration
///
/// Tiers are fixed at compile time; see [`TIERS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    name: &'static str,
    max_incorrect: u8,
    min_word_len: usize,
    multiplier: u32,
}

/// The three built-in difficulty tiers
pub const TIERS: &[Tier] = &[
    Tier {
        name: "Easy",
        max_incorrect: 8,
        min_word_len: 5,
        multiplier: 1,
    },
    Tier {
        name: "Medium",
        max_incorrect: 6,
        min_word_len: 6,
        multiplier: 2,
    },
    Tier {
        name: "Hard",
        max_incorrect: 4,
        min_word_len: 7,
        multiplier: 3,
    },
];

impl Tier {
    /// Create a tier
    ///
    /// The built-in game only ever uses [`TIERS`]; this exists so callers (and
    /// tests) can define their own difficulty configurations.
    #[must_use]
    pub const fn new(
        name: &'static str,
        max_incorrect: u8,
        min_word_len: usize,
        multiplier: u32,
    ) -> Self {
        Self {
            name,
            max_incorrect,
            min_word_len,
            multiplier,
        }
    }

    /// Look up a tier by name, case-insensitively
    ///
    /// Returns `None` for names outside Easy/Medium/Hard.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Self> {
        TIERS.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The tier's display name
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Incorrect guesses allowed before the round is lost
    #[inline]
    #[must_use]
    pub const fn max_incorrect(&self) -> u8 {
        self.max_incorrect
    }

    /// Shortest word this tier will accept
    #[inline]
    #[must_use]
    pub const fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    /// Score multiplier applied to winning rounds
    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_names_unique() {
        for (i, a) in TIERS.iter().enumerate() {
            for b in &TIERS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn tier_fields_positive() {
        for tier in TIERS {
            assert!(tier.max_incorrect() > 0);
            assert!(tier.min_word_len() > 0);
            assert!(tier.multiplier() > 0);
        }
    }

    #[test]
    fn by_name_exact() {
        let tier = Tier::by_name("Medium").unwrap();
        assert_eq!(tier.name(), "Medium");
        assert_eq!(tier.max_incorrect(), 6);
        assert_eq!(tier.min_word_len(), 6);
        assert_eq!(tier.multiplier(), 2);
    }

    #[test]
    fn by_name_case_insensitive() {
        assert!(Tier::by_name("easy").is_some());
        assert!(Tier::by_name("HARD").is_some());
        assert!(Tier::by_name("mEdIuM").is_some());
    }

    #[test]
    fn by_name_unknown() {
        assert!(Tier::by_name("Nightmare").is_none());
        assert!(Tier::by_name("").is_none());
    }

    #[test]
    fn expected_builtin_values() {
        let easy = Tier::by_name("Easy").unwrap();
        assert_eq!(easy.max_incorrect(), 8);
        assert_eq!(easy.min_word_len(), 5);
        assert_eq!(easy.multiplier(), 1);

        let hard = Tier::by_name("Hard").unwrap();
        assert_eq!(hard.max_incorrect(), 4);
        assert_eq!(hard.min_word_len(), 7);
        assert_eq!(hard.multiplier(), 3);
    }

    #[test]
    fn tier_display() {
        let tier = Tier::by_name("Easy").unwrap();
        assert_eq!(format!("{tier}"), "Easy");
    }
}
