//! ASCII gallows frames
//!
//! Seven stages from empty scaffold to complete figure. Tiers allow different
//! miss budgets (4/6/8), so the frame is chosen by the fraction of the budget
//! spent rather than the raw count; every tier walks the full sequence and
//! the last allowed miss always shows the complete figure.

const STAGES: &[&str] = &[
    r"
   +---+
   |   |
       |
       |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
       |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
   |   |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|   |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
  /    |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
  / \  |
       |
=========",
];

/// The gallows frame for `incorrect` misses out of `max` allowed
///
/// Clamps rather than panics if `incorrect` somehow exceeds `max`.
#[must_use]
pub fn frame(incorrect: u8, max: u8) -> &'static str {
    let max = max.max(1);
    let incorrect = incorrect.min(max);

    let last = STAGES.len() - 1;
    let stage = usize::from(incorrect) * last / usize::from(max);
    STAGES[stage]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_misses_shows_empty_scaffold() {
        assert!(!frame(0, 6).contains('O'));
    }

    #[test]
    fn last_miss_shows_complete_figure() {
        for max in [4, 6, 8] {
            let last = frame(max, max);
            assert!(last.contains('O'));
            assert!(last.contains('\\'));
            assert_eq!(last, *STAGES.last().unwrap());
        }
    }

    #[test]
    fn stages_monotone_for_every_tier_budget() {
        for max in [1, 4, 6, 8] {
            let mut prev = 0;
            for incorrect in 0..=max {
                let stage = STAGES
                    .iter()
                    .position(|s| *s == frame(incorrect, max))
                    .unwrap();
                assert!(stage >= prev, "art regressed at {incorrect}/{max}");
                prev = stage;
            }
        }
    }

    #[test]
    fn out_of_range_input_clamps() {
        assert_eq!(frame(10, 6), *STAGES.last().unwrap());
        assert_eq!(frame(0, 0), STAGES[0]);
    }

    #[test]
    fn six_miss_budget_maps_one_to_one() {
        for incorrect in 0..=6u8 {
            assert_eq!(frame(incorrect, 6), STAGES[usize::from(incorrect)]);
        }
    }
}
