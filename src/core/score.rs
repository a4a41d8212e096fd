//! Round scoring
//!
//! Pure scoring function for winning rounds: word length sets the base, unused
//! incorrect guesses add a bonus, the tier multiplies, and hints subtract a
//! flat penalty.

use super::tier::Tier;

/// Points per letter of the target word
const POINTS_PER_LETTER: u32 = 10;
/// Bonus points per unused incorrect guess
const POINTS_PER_SPARE_GUESS: u32 = 5;
/// Penalty per hint taken
const HINT_PENALTY: u32 = 5;

/// Compute the score for a winning round
///
/// `incorrect` must be strictly below the tier's maximum; a round that reached
/// the maximum was lost and has no score.
///
/// ```
/// use gallows::core::{Tier, compute_score};
///
/// let easy = Tier::by_name("Easy").unwrap();
/// // 8 letters * 10 + 8 spare guesses * 5, no hints
/// assert_eq!(compute_score("elephant", 0, easy, 0), 120);
/// ```
///
/// # Panics
/// Debug builds assert `incorrect < tier.max_incorrect()`.
#[must_use]
pub fn compute_score(word: &str, incorrect: u8, tier: &Tier, hints_used: u8) -> u32 {
    debug_assert!(
        incorrect < tier.max_incorrect(),
        "score is only defined for winning rounds"
    );

    let base = word.len() as u32 * POINTS_PER_LETTER;
    let spare = u32::from(tier.max_incorrect().saturating_sub(incorrect));
    let bonus = spare * POINTS_PER_SPARE_GUESS;
    let raw = (base + bonus) * tier.multiplier();
    let penalty = u32::from(hints_used) * HINT_PENALTY;

    raw.saturating_sub(penalty)
}
