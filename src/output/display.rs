//! Terminal rendering of boards, banners, and statistics

use super::gallows;
use crate::core::BoardSnapshot;
use crate::session::{Notice, Presenter, RoundOutcome};
use crate::stats::PlayerStats;
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io;

/// Presenter that draws the round on stdout
///
/// Clears the screen before each board so the gallows animates in place, the
/// way the classic terminal game plays.
#[derive(Default)]
pub struct TerminalPresenter {
    clear_screen: bool,
}

impl TerminalPresenter {
    /// Presenter that clears the screen between turns
    #[must_use]
    pub fn new() -> Self {
        Self { clear_screen: true }
    }

    /// Presenter that scrolls instead of clearing (useful for piped output)
    #[must_use]
    pub fn scrolling() -> Self {
        Self {
            clear_screen: false,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn board(&mut self, snapshot: &BoardSnapshot) {
        if self.clear_screen {
            // Best effort; a dumb terminal just scrolls.
            let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
        }

        println!(
            "{}",
            gallows::frame(snapshot.incorrect, snapshot.max_incorrect).red()
        );
        println!(
            "\nCategory: {}    Difficulty: {}",
            snapshot.category.cyan(),
            snapshot.tier_name.yellow()
        );

        let spaced: String = snapshot
            .masked_word
            .chars()
            .flat_map(|c| [c, ' '])
            .collect();
        println!("\nWord: {}", spaced.trim_end().bright_green().bold());

        if !snapshot.guessed.is_empty() {
            let guessed: Vec<String> = snapshot.guessed.iter().map(|c| c.to_string()).collect();
            println!("Guessed letters: {}", guessed.join(", ").red());
        }

        println!(
            "\n{}",
            format!(
                "Incorrect guesses remaining: {}",
                snapshot.max_incorrect - snapshot.incorrect
            )
            .yellow()
        );
        println!("Hints remaining: {}", snapshot.hints_left);
    }

    fn notice(&mut self, notice: Notice) {
        match notice {
            Notice::Correct(c) => {
                println!("{}", format!("Good guess! '{c}' is in the word.").green());
            }
            Notice::Incorrect(c) => {
                println!("{}", format!("Sorry, '{c}' is not in the word.").red());
            }
            Notice::Duplicate(c) => {
                println!(
                    "{}",
                    format!("You've already guessed '{c}'. Try another letter.").red()
                );
            }
            Notice::NotALetter(_) => {
                println!("Please enter a single alphabetical character.");
            }
            Notice::HintLetter(c) => {
                println!(
                    "{}",
                    format!("Hint: the word contains the letter '{c}'").yellow()
                );
            }
            Notice::NothingToReveal => println!("No more hints available!"),
            Notice::HintsExhausted => println!("You've used all your hints!"),
        }
    }
}

/// Print the end-of-round banner with the optional fun fact
pub fn print_outcome(outcome: &RoundOutcome, fact: Option<&str>) {
    match outcome {
        RoundOutcome::Won {
            word,
            score,
            elapsed,
        } => {
            println!("\n{}", "🎉 CONGRATULATIONS! 🎉".bright_green().bold());
            println!(
                "You guessed the word: {}",
                word.to_uppercase().bright_green()
            );
            println!("Time taken: {} seconds", elapsed.as_secs());
            println!("Score: {}", score.to_string().bright_yellow().bold());
        }
        RoundOutcome::Lost { word } => {
            println!("\n{}", "GAME OVER!".red().bold());
            println!("The word was: {}", word.to_uppercase().red());
        }
        RoundOutcome::Abandoned => {
            println!("\nRound abandoned.");
        }
    }

    if !matches!(outcome, RoundOutcome::Abandoned) {
        if let Some(fact) = fact {
            println!("\n{}", format!("Fun Fact: {fact}").cyan());
        }
    }
}

/// Print the cumulative statistics screen
pub fn print_stats(stats: &PlayerStats) {
    println!("\n{}", "=== Your Statistics ===".cyan().bold());
    println!("Games Played: {}", stats.games_played());
    println!("Games Won: {}", stats.games_won());
    if stats.games_played() > 0 {
        println!("Win Rate: {:.1}%", stats.win_rate());
    }
    println!("Total Score: {}", stats.total_score());
    println!("Current Streak: {}", stats.current_streak());
    println!("Best Streak: {}", stats.best_streak());

    let completed = stats.words_completed();
    if !completed.is_empty() {
        let recent: Vec<&str> = completed
            .iter()
            .rev()
            .take(5)
            .rev()
            .map(String::as_str)
            .collect();
        println!("Words Completed: {}", recent.join(", "));
    }
}

/// Print the how-to-play screen
pub fn print_instructions() {
    println!("\n{}", "=== HOW TO PLAY ===".bold());
    println!("1. Select a difficulty level (Easy, Medium, or Hard)");
    println!("2. Choose a word category");
    println!("3. Guess letters one at a time");
    println!("4. Use hints wisely (they cost points!)");
    println!("5. Complete the word before running out of guesses");
    println!("6. Build your streak and beat your high score!");
    println!("\nScoring:");
    println!("- Base points: 10 x word length");
    println!("- Bonus: 5 x remaining guesses");
    println!("- Difficulty multiplier: Easy (1x), Medium (2x), Hard (3x)");
    println!("- Hint penalty: -5 points per hint");
}
