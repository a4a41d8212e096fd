//! Core game rules
//!
//! The round state machine, difficulty tiers, and the scoring function. Pure
//! logic: nothing in this module reads input, prints, or blocks.

mod round;
mod score;
mod tier;

pub use round::{BoardSnapshot, GuessOutcome, HINT_LIMIT, Hint, Round, RoundError, Status};
pub use score::compute_score;
pub use tier::{TIERS, Tier};
