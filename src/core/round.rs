//! The guess/hint state machine for a single round
//!
//! A [`Round`] owns all per-round state: the target word, the set of guessed
//! letters, the incorrect-guess counter, and the hint budget. It accepts
//! commands only while in progress and reports terminal outcomes through
//! [`Status`]. It performs no I/O; callers render from [`BoardSnapshot`]s.

use super::tier::Tier;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Hints allowed per round
pub const HINT_LIMIT: u8 = 2;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Accepting guesses and hints
    InProgress,
    /// Every distinct letter of the target has been guessed
    Won,
    /// The incorrect-guess budget is spent
    Lost,
    /// The player quit mid-round; no stats or score apply
    Abandoned,
}

impl Status {
    /// Whether the round has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Errors from round commands
///
/// All of these are recoverable: the round state is unchanged and the caller
/// should re-prompt the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// Guess was not an ASCII alphabetic character
    InvalidInput(char),
    /// Letter was guessed earlier this round
    DuplicateGuess(char),
    /// Both hints have been spent
    HintsExhausted,
    /// Command arrived after the round reached a terminal state
    RoundOver,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(c) => {
                write!(f, "'{c}' is not a letter; guess a single letter a-z")
            }
            Self::DuplicateGuess(c) => write!(f, "letter '{c}' was already guessed"),
            Self::HintsExhausted => write!(f, "no hints left this round"),
            Self::RoundOver => write!(f, "the round is already over"),
        }
    }
}

impl std::error::Error for RoundError {}

/// Result of a successful guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; round continues
    Correct,
    /// Letter is not in the word; round continues
    Incorrect,
    /// Guess completed the word
    Won,
    /// Guess spent the last allowed miss
    Lost,
}

/// Result of a successful hint request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// A letter of the target the player has not guessed yet
    ///
    /// Informational only: it is not added to the guessed set, the player
    /// still has to guess it.
    Letter(char),
    /// Every letter is already guessed, nothing to reveal; no hint consumed
    NothingToReveal,
}

/// Presentation snapshot emitted after every transition
///
/// Everything the rendering layer needs: the masked word, guess history, and
/// budget counters. Rendering itself (art, color) is not the round's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Target with unguessed letters replaced by `'_'`
    pub masked_word: String,
    /// Letters guessed so far, in guess order
    pub guessed: Vec<char>,
    /// Incorrect guesses made
    pub incorrect: u8,
    /// Incorrect guesses allowed
    pub max_incorrect: u8,
    /// Hints still available
    pub hints_left: u8,
    /// Tier name for display
    pub tier_name: &'static str,
    /// Category the word was drawn from
    pub category: String,
}

/// One round of hangman
#[derive(Debug)]
pub struct Round<'a> {
    word: String,
    tier: &'a Tier,
    category: String,
    guessed: FxHashSet<char>,
    guess_order: Vec<char>,
    hinted: FxHashSet<char>,
    incorrect: u8,
    hints_used: u8,
    started: Instant,
    status: Status,
}

impl<'a> Round<'a> {
    /// Start a round for `word` under `tier`
    ///
    /// The word is lowercased; callers obtain it from the word bank, which
    /// already enforces the tier's minimum length.
    #[must_use]
    pub fn new(word: &str, tier: &'a Tier, category: &str) -> Self {
        Self {
            word: word.to_lowercase(),
            tier,
            category: category.to_string(),
            guessed: FxHashSet::default(),
            guess_order: Vec::new(),
            hinted: FxHashSet::default(),
            incorrect: 0,
            hints_used: 0,
            started: Instant::now(),
            status: Status::InProgress,
        }
    }

    /// Guess a single letter
    ///
    /// On success the letter joins the guessed set, a miss bumps the incorrect
    /// counter, and the round may transition to `Won` or `Lost`.
    ///
    /// # Errors
    /// - [`RoundError::RoundOver`] if the round already ended
    /// - [`RoundError::InvalidInput`] if `c` is not ASCII alphabetic
    /// - [`RoundError::DuplicateGuess`] if `c` was guessed before (no change)
    pub fn guess(&mut self, c: char) -> Result<GuessOutcome, RoundError> {
        if self.status.is_over() {
            return Err(RoundError::RoundOver);
        }
        if !c.is_ascii_alphabetic() {
            return Err(RoundError::InvalidInput(c));
        }

        let c = c.to_ascii_lowercase();
        if self.guessed.contains(&c) {
            return Err(RoundError::DuplicateGuess(c));
        }

        self.guessed.insert(c);
        self.guess_order.push(c);

        let correct = self.word.contains(c);
        if !correct {
            self.incorrect += 1;
        }

        // Win check first: a word completed on the last miss still counts as
        // a loss only if it remains incomplete.
        if self.word_complete() {
            self.status = Status::Won;
            Ok(GuessOutcome::Won)
        } else if self.incorrect == self.tier.max_incorrect() {
            self.status = Status::Lost;
            Ok(GuessOutcome::Lost)
        } else if correct {
            Ok(GuessOutcome::Correct)
        } else {
            Ok(GuessOutcome::Incorrect)
        }
    }

    /// Reveal one unguessed letter of the target
    ///
    /// Costs one of the round's [`HINT_LIMIT`] hints. The revealed letter is
    /// chosen uniformly among letters neither guessed nor previously hinted,
    /// and is *not* added to the guessed set.
    ///
    /// # Errors
    /// - [`RoundError::RoundOver`] if the round already ended
    /// - [`RoundError::HintsExhausted`] if the hint budget is spent (no change)
    pub fn hint<R: Rng>(&mut self, rng: &mut R) -> Result<Hint, RoundError> {
        if self.status.is_over() {
            return Err(RoundError::RoundOver);
        }
        if self.hints_used >= HINT_LIMIT {
            return Err(RoundError::HintsExhausted);
        }

        let mut unrevealed: Vec<char> = self
            .word
            .chars()
            .filter(|c| !self.guessed.contains(c) && !self.hinted.contains(c))
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        unrevealed.sort_unstable();

        // Empty only if everything left to guess was already hinted; guessing
        // the last letter would have ended the round before this. Free no-op.
        let Some(&letter) = unrevealed.choose(rng) else {
            return Ok(Hint::NothingToReveal);
        };

        self.hinted.insert(letter);
        self.hints_used += 1;
        Ok(Hint::Letter(letter))
    }

    /// End the round without a win or loss
    ///
    /// Quitting is a valid terminal exit; the caller records no stats and
    /// computes no score. Abandoning an already-finished round is a no-op.
    pub fn abandon(&mut self) {
        if !self.status.is_over() {
            self.status = Status::Abandoned;
        }
    }

    fn word_complete(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The target word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Incorrect guesses made so far
    #[inline]
    #[must_use]
    pub const fn incorrect(&self) -> u8 {
        self.incorrect
    }

    /// Hints consumed so far
    #[inline]
    #[must_use]
    pub const fn hints_used(&self) -> u8 {
        self.hints_used
    }

    /// The tier this round is played under
    #[inline]
    #[must_use]
    pub const fn tier(&self) -> &'a Tier {
        self.tier
    }

    /// Wall-clock time since the round started
    ///
    /// Reported to the player on a win; never affects scoring.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Build the presentation snapshot for the current state
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let masked_word = self
            .word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect();

        BoardSnapshot {
            masked_word,
            guessed: self.guess_order.clone(),
            incorrect: self.incorrect,
            max_incorrect: self.tier.max_incorrect(),
            hints_left: HINT_LIMIT - self.hints_used,
            tier_name: self.tier.name(),
            category: self.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tier_max(max: u8) -> Tier {
        Tier::new("Test", max, 3, 1)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn wins_when_all_distinct_letters_guessed() {
        let tier = tier_max(6);
        let mut round = Round::new("cat", &tier, "animals");

        assert_eq!(round.guess('c'), Ok(GuessOutcome::Correct));
        assert_eq!(round.guess('a'), Ok(GuessOutcome::Correct));
        assert_eq!(round.guess('t'), Ok(GuessOutcome::Won));
        assert_eq!(round.status(), Status::Won);
        assert_eq!(round.incorrect(), 0);
    }

    #[test]
    fn repeated_letters_need_one_guess() {
        let tier = tier_max(6);
        let mut round = Round::new("egg", &tier, "food");

        assert_eq!(round.guess('e'), Ok(GuessOutcome::Correct));
        assert_eq!(round.guess('g'), Ok(GuessOutcome::Won));
    }

    #[test]
    fn loses_on_last_allowed_miss() {
        let tier = tier_max(1);
        let mut round = Round::new("dog", &tier, "animals");

        assert_eq!(round.guess('x'), Ok(GuessOutcome::Lost));
        assert_eq!(round.status(), Status::Lost);
        assert_eq!(round.incorrect(), 1);
    }

    #[test]
    fn miss_below_budget_keeps_playing() {
        let tier = tier_max(3);
        let mut round = Round::new("dog", &tier, "animals");

        assert_eq!(round.guess('x'), Ok(GuessOutcome::Incorrect));
        assert_eq!(round.guess('y'), Ok(GuessOutcome::Incorrect));
        assert_eq!(round.status(), Status::InProgress);
        assert_eq!(round.incorrect(), 2);
    }

    #[test]
    fn winning_guess_on_final_miss_budget() {
        // One miss left, but the guess completes the word: the win check runs
        // first, so this is a win.
        let tier = tier_max(2);
        let mut round = Round::new("cat", &tier, "animals");
        round.guess('x').unwrap();
        round.guess('c').unwrap();
        round.guess('a').unwrap();
        assert_eq!(round.guess('t'), Ok(GuessOutcome::Won));
    }

    #[test]
    fn duplicate_guess_changes_nothing() {
        let tier = tier_max(6);
        let mut round = Round::new("dog", &tier, "animals");

        round.guess('x').unwrap();
        let before = round.snapshot();

        assert_eq!(round.guess('x'), Err(RoundError::DuplicateGuess('x')));
        assert_eq!(round.snapshot(), before);
        assert_eq!(round.incorrect(), 1);
    }

    #[test]
    fn duplicate_detection_ignores_case() {
        let tier = tier_max(6);
        let mut round = Round::new("dog", &tier, "animals");

        round.guess('d').unwrap();
        assert_eq!(round.guess('D'), Err(RoundError::DuplicateGuess('d')));
    }

    #[test]
    fn non_alphabetic_guess_rejected() {
        let tier = tier_max(6);
        let mut round = Round::new("dog", &tier, "animals");

        assert_eq!(round.guess('3'), Err(RoundError::InvalidInput('3')));
        assert_eq!(round.guess('!'), Err(RoundError::InvalidInput('!')));
        assert_eq!(round.snapshot().guessed.len(), 0);
    }

    #[test]
    fn commands_rejected_after_terminal_state() {
        let tier = tier_max(1);
        let mut round = Round::new("dog", &tier, "animals");
        round.guess('x').unwrap();

        assert_eq!(round.guess('d'), Err(RoundError::RoundOver));
        assert_eq!(round.hint(&mut rng()), Err(RoundError::RoundOver));
    }

    #[test]
    fn hints_draw_from_unguessed_letters_without_repeats() {
        let tier = tier_max(6);
        let mut round = Round::new("fish", &tier, "animals");
        let mut rng = rng();

        let Hint::Letter(first) = round.hint(&mut rng).unwrap() else {
            panic!("expected a letter");
        };
        let Hint::Letter(second) = round.hint(&mut rng).unwrap() else {
            panic!("expected a letter");
        };

        assert!("fish".contains(first));
        assert!("fish".contains(second));
        assert_ne!(first, second);
        assert_eq!(round.hints_used(), 2);
    }

    #[test]
    fn third_hint_always_fails_without_mutation() {
        let tier = tier_max(6);
        let mut round = Round::new("fish", &tier, "animals");
        let mut rng = rng();

        round.hint(&mut rng).unwrap();
        round.hint(&mut rng).unwrap();
        assert_eq!(round.hints_used(), 2);

        assert_eq!(round.hint(&mut rng), Err(RoundError::HintsExhausted));
        assert_eq!(round.hint(&mut rng), Err(RoundError::HintsExhausted));
        assert_eq!(round.hints_used(), 2);
    }

    #[test]
    fn hint_does_not_reveal_guessed_letters() {
        let tier = tier_max(8);
        let mut round = Round::new("dog", &tier, "animals");
        let mut rng = rng();

        round.guess('d').unwrap();
        round.guess('o').unwrap();

        // Only 'g' is left to reveal.
        assert_eq!(round.hint(&mut rng), Ok(Hint::Letter('g')));

        // And once it has been hinted, there is nothing further to reveal;
        // the no-op branch does not consume the second hint.
        assert_eq!(round.hint(&mut rng), Ok(Hint::NothingToReveal));
        assert_eq!(round.hints_used(), 1);
    }

    #[test]
    fn hint_never_added_to_guessed_set() {
        let tier = tier_max(6);
        let mut round = Round::new("dog", &tier, "animals");
        let mut rng = rng();

        round.hint(&mut rng).unwrap();
        assert!(round.snapshot().guessed.is_empty());
        assert_eq!(round.snapshot().masked_word, "___");
    }

    #[test]
    fn abandon_is_terminal() {
        let tier = tier_max(6);
        let mut round = Round::new("dog", &tier, "animals");

        round.abandon();
        assert_eq!(round.status(), Status::Abandoned);
        assert_eq!(round.guess('d'), Err(RoundError::RoundOver));
    }

    #[test]
    fn abandon_does_not_overwrite_a_win() {
        let tier = tier_max(6);
        let mut round = Round::new("a", &tier, "animals");
        round.guess('a').unwrap();

        round.abandon();
        assert_eq!(round.status(), Status::Won);
    }

    #[test]
    fn snapshot_masks_unguessed_letters() {
        let tier = tier_max(6);
        let mut round = Round::new("giraffe", &tier, "animals");

        round.guess('g').unwrap();
        round.guess('f').unwrap();
        round.guess('x').unwrap();

        let snap = round.snapshot();
        assert_eq!(snap.masked_word, "g___ff_");
        assert_eq!(snap.guessed, vec!['g', 'f', 'x']);
        assert_eq!(snap.incorrect, 1);
        assert_eq!(snap.max_incorrect, 6);
        assert_eq!(snap.hints_left, HINT_LIMIT);
        assert_eq!(snap.category, "animals");
    }

    #[test]
    fn uppercase_word_normalized() {
        let tier = tier_max(6);
        let mut round = Round::new("DOG", &tier, "animals");
        assert_eq!(round.word(), "dog");
        assert_eq!(round.guess('d'), Ok(GuessOutcome::Correct));
    }
}
