//! Session orchestration
//!
//! Binds the word bank, round engine, scorer, and player stats together, and
//! defines the two collaborator seams: an [`InputSource`] that yields player
//! commands and a [`Presenter`] that receives board snapshots and notices.
//! The session itself performs no I/O.

use crate::core::{GuessOutcome, Hint, Round, RoundError, Status, Tier, compute_score};
use crate::stats::PlayerStats;
use crate::wordbank::{WordBank, WordBankError};
use rand::Rng;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// One validated player command
///
/// The input boundary guarantees the shape; the round engine still does the
/// semantic checks (alphabetic, not a duplicate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Guess a single letter
    Guess(char),
    /// Spend a hint
    Hint,
    /// Abandon the round
    Quit,
}

/// Source of player commands, one per turn
///
/// Implementations block on stdin in the binary and replay scripted queues in
/// tests and simulation. An I/O error at this boundary ends the round as if
/// the player had quit; it never crashes the process.
pub trait InputSource {
    /// Produce the next command
    ///
    /// # Errors
    /// Any I/O failure from the underlying input; the session maps it to
    /// [`Command::Quit`].
    fn next_command(&mut self) -> io::Result<Command>;
}

/// Per-turn feedback forwarded to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Guessed letter is in the word
    Correct(char),
    /// Guessed letter is not in the word
    Incorrect(char),
    /// Letter was guessed before; nothing changed
    Duplicate(char),
    /// Guess was not a letter; nothing changed
    NotALetter(char),
    /// A hint revealed this letter
    HintLetter(char),
    /// Nothing left to reveal; the hint was not consumed
    NothingToReveal,
    /// The hint budget is spent
    HintsExhausted,
}

/// Rendering seam
///
/// Receives a board snapshot after every transition plus per-event notices.
/// ASCII art and color are entirely the implementor's concern.
pub trait Presenter {
    /// Show the current board
    fn board(&mut self, snapshot: &crate::core::BoardSnapshot);
    /// Show one-off feedback for the last command
    fn notice(&mut self, notice: Notice);
}

/// How a round ended, as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Word completed; score already folded into the stats
    Won {
        word: String,
        score: u32,
        elapsed: Duration,
    },
    /// Guess budget spent; loss already folded into the stats
    Lost { word: String },
    /// Player quit (or input failed); stats untouched
    Abandoned,
}

/// A play session: one word bank, one stats record, one rng
pub struct Session<'a, R: Rng> {
    bank: &'a WordBank,
    stats: PlayerStats,
    rng: R,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Create a session over `bank` with fresh stats
    pub fn new(bank: &'a WordBank, rng: R) -> Self {
        Self {
            bank,
            stats: PlayerStats::new(),
            rng,
        }
    }

    /// Read-only view of the cumulative stats
    #[must_use]
    pub const fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// The word bank this session draws from
    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }

    /// Play one round to completion
    ///
    /// Selects a word, then feeds commands from `input` to the round engine
    /// until it reaches a terminal state, forwarding snapshots and notices to
    /// `presenter`. Wins and losses update the stats before returning;
    /// abandoned rounds do not.
    ///
    /// # Errors
    /// Word selection errors ([`WordBankError`]) abort the round before it
    /// starts; the caller can retry with another category or tier.
    pub fn play_round<I, P>(
        &mut self,
        category: &str,
        tier: &Tier,
        input: &mut I,
        presenter: &mut P,
    ) -> Result<RoundOutcome, WordBankError>
    where
        I: InputSource,
        P: Presenter,
    {
        let word = self.bank.select_word(category, tier, &mut self.rng)?;
        let mut round = Round::new(word, tier, category);

        while round.status() == Status::InProgress {
            presenter.board(&round.snapshot());

            // An interrupted or closed input stream is treated as quitting.
            let command = input.next_command().unwrap_or(Command::Quit);

            match command {
                Command::Guess(c) => match round.guess(c) {
                    Ok(GuessOutcome::Correct) => presenter.notice(Notice::Correct(c)),
                    Ok(GuessOutcome::Incorrect) => presenter.notice(Notice::Incorrect(c)),
                    Ok(GuessOutcome::Won | GuessOutcome::Lost) => {}
                    Err(RoundError::InvalidInput(c)) => presenter.notice(Notice::NotALetter(c)),
                    Err(RoundError::DuplicateGuess(c)) => presenter.notice(Notice::Duplicate(c)),
                    Err(RoundError::HintsExhausted | RoundError::RoundOver) => break,
                },
                Command::Hint => match round.hint(&mut self.rng) {
                    Ok(Hint::Letter(c)) => presenter.notice(Notice::HintLetter(c)),
                    Ok(Hint::NothingToReveal) => presenter.notice(Notice::NothingToReveal),
                    Err(RoundError::HintsExhausted) => presenter.notice(Notice::HintsExhausted),
                    Err(_) => break,
                },
                Command::Quit => round.abandon(),
            }
        }

        presenter.board(&round.snapshot());

        match round.status() {
            Status::Won => {
                let score =
                    compute_score(round.word(), round.incorrect(), tier, round.hints_used());
                self.stats.record_win(round.word(), score);
                Ok(RoundOutcome::Won {
                    word: round.word().to_string(),
                    score,
                    elapsed: round.elapsed(),
                })
            }
            Status::Lost => {
                self.stats.record_loss();
                Ok(RoundOutcome::Lost {
                    word: round.word().to_string(),
                })
            }
            Status::Abandoned | Status::InProgress => Ok(RoundOutcome::Abandoned),
        }
    }
}

/// Replays a fixed command queue; yields [`Command::Quit`] when drained
///
/// Used by tests and the self-play simulator.
pub struct ScriptedInput {
    queue: VecDeque<Command>,
}

impl ScriptedInput {
    /// Queue up `commands` in order
    #[must_use]
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> io::Result<Command> {
        Ok(self.queue.pop_front().unwrap_or(Command::Quit))
    }
}

/// Presenter that drops everything; for tests and simulation
#[derive(Default)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn board(&mut self, _snapshot: &crate::core::BoardSnapshot) {}
    fn notice(&mut self, _notice: Notice) {}
}
