//! Interactive play mode
//!
//! Main menu, category/difficulty selection, and the stdin-backed input
//! source feeding the session loop.

use crate::core::{TIERS, Tier};
use crate::output::{TerminalPresenter, print_instructions, print_outcome, print_stats};
use crate::session::{Command, InputSource, RoundOutcome, Session};
use crate::wordbank::WordBank;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};

/// Reads player commands from stdin
///
/// Handles the syntactic shape only ("hint"/"quit" keywords, otherwise one
/// character); the round engine rejects non-letters and duplicates.
struct StdinInput;

impl InputSource for StdinInput {
    fn next_command(&mut self) -> io::Result<Command> {
        loop {
            let line = read_line("\nGuess a letter (or 'hint'/'quit')")?;
            let token = line.to_lowercase();

            match token.as_str() {
                "hint" => return Ok(Command::Hint),
                "quit" | "exit" => return Ok(Command::Quit),
                _ => {
                    let mut chars = token.chars();
                    if let (Some(c), None) = (chars.next(), chars.next()) {
                        return Ok(Command::Guess(c));
                    }
                    println!("Please enter a single letter, 'hint', or 'quit'.");
                }
            }
        }
    }
}

/// Run the interactive game until the player leaves the main menu
///
/// A fixed `seed` makes word selection and hint draws reproducible.
///
/// # Errors
/// Returns an error only for stdin/stdout failures at the menu level; errors
/// mid-round are handled by the session and end the round gracefully.
pub fn run_play(seed: Option<u64>) -> io::Result<()> {
    let bank = WordBank::new();
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut session = Session::new(&bank, StdRng::seed_from_u64(seed));

    println!("{}", "🎮 WELCOME TO HANGMAN! 🎮".bold().bright_magenta());
    println!("{}", "A word-guessing game of categories, hints, and streaks.".cyan());

    loop {
        println!("\n{}", "=== MAIN MENU ===".yellow().bold());
        println!("1. Play Game");
        println!("2. View Statistics");
        println!("3. Instructions");
        println!("4. Quit");

        match read_line("\nEnter your choice (1-4)")?.as_str() {
            "1" => {
                if !play_one_round(&mut session)? {
                    break;
                }
            }
            "2" => {
                print_stats(session.stats());
                pause()?;
            }
            "3" => {
                print_instructions();
                pause()?;
            }
            "4" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }

    println!("\n{}", "Thanks for playing Hangman!".green());
    if session.stats().games_played() > 0 {
        println!("Final Score: {}", session.stats().total_score());
        println!("Best Streak: {}", session.stats().best_streak());
    }
    Ok(())
}

/// One round: pick difficulty and category, play, report
///
/// Returns `false` when the player quits mid-round, which exits to the shell
/// like the classic game rather than back to the menu.
fn play_one_round<R: Rng>(session: &mut Session<'_, R>) -> io::Result<bool> {
    println!("\n{}", "Select Difficulty:".yellow());
    let tier_lines: Vec<String> = TIERS
        .iter()
        .map(|t| format!("{} ({} guesses)", t.name(), t.max_incorrect()))
        .collect();
    let tier: &Tier = &TIERS[pick_option(&tier_lines)?];

    println!("\n{}", "Select Category:".yellow());
    let names: Vec<String> = session.bank().category_names().map(String::from).collect();
    let category = names[pick_option(&names)?].clone();

    let mut input = StdinInput;
    let mut presenter = TerminalPresenter::new();

    match session.play_round(&category, tier, &mut input, &mut presenter) {
        Ok(outcome) => {
            let fact = match &outcome {
                RoundOutcome::Won { word, .. } | RoundOutcome::Lost { word } => {
                    session.bank().fact_for(word)
                }
                RoundOutcome::Abandoned => None,
            };
            print_outcome(&outcome, fact);

            if outcome == RoundOutcome::Abandoned {
                return Ok(false);
            }
            pause()?;
        }
        Err(e) => {
            // No eligible word for this category/tier pair; let the player
            // pick differently.
            println!("{}", e.to_string().red());
            pause()?;
        }
    }
    Ok(true)
}

/// Print numbered options and read a valid 1-based choice
fn pick_option(options: &[String]) -> io::Result<usize> {
    for (i, option) in options.iter().enumerate() {
        println!("{}. {option}", i + 1);
    }

    loop {
        let line = read_line("Enter your choice")?;
        match line.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            Ok(_) => println!("Invalid choice. Please try again."),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        // Stdin closed; surface as an error so the caller can wind down.
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

fn pause() -> io::Result<()> {
    let _ = read_line("\nPress Enter to continue...");
    Ok(())
}
