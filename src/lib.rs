//! Gallows
//!
//! A terminal hangman game: category-based word selection with difficulty
//! tiers, a two-hint budget per round, score tracking, and win streaks.
//!
//! # Quick Start
//!
//! ```rust
//! use gallows::core::{Round, GuessOutcome, Tier};
//!
//! let tier = Tier::by_name("Easy").unwrap();
//! let mut round = Round::new("cat", tier, "Animals");
//!
//! round.guess('c').unwrap();
//! round.guess('a').unwrap();
//! assert_eq!(round.guess('t'), Ok(GuessOutcome::Won));
//! ```

// Core game rules
pub mod core;

// Word categories and fun facts
pub mod wordbank;

// Cumulative player statistics
pub mod stats;

// Session loop binding rules, words, stats, and the I/O seams
pub mod session;

// Command implementations
pub mod commands;

// Terminal rendering
pub mod output;
