//! Self-play simulation
//!
//! Plays many rounds with a scripted random guesser to exercise the full
//! round/score/stats pipeline and report aggregate numbers. Rounds run in
//! parallel with per-round seeds derived from the base seed, then fold into a
//! single stats record in round order so streaks stay meaningful.

use crate::core::Tier;
use crate::session::{Command, RoundOutcome, ScriptedInput, Session, SilentPresenter};
use crate::stats::PlayerStats;
use crate::wordbank::{WordBank, WordBankError};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Simulation parameters
pub struct SimulateConfig {
    /// Rounds to play
    pub rounds: usize,
    /// Fixed category, or `None` to draw one per round
    pub category: Option<String>,
    /// Base seed; per-round seeds derive from it
    pub seed: u64,
}

/// Aggregate numbers from a simulation run
pub struct SimulateResult {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_score: u64,
    pub average_score: f64,
    pub best_streak: u32,
    pub wins_by_category: HashMap<String, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Run `config.rounds` scripted rounds and aggregate the outcomes
///
/// The guesser plays the alphabet in a per-round random order, so every round
/// reaches a genuine win or loss; nothing is abandoned.
///
/// # Errors
/// [`WordBankError`] if the difficulty/category pair cannot produce words;
/// surfaced before any round runs.
pub fn run_simulation(
    bank: &WordBank,
    tier: &Tier,
    config: &SimulateConfig,
) -> Result<SimulateResult, WordBankError> {
    let categories: Vec<String> = match &config.category {
        Some(name) => {
            // Validate eligibility up front so a bad pair fails fast.
            bank.eligible_count(name, tier).and_then(|n| {
                if n == 0 {
                    Err(WordBankError::NoEligibleWord {
                        category: name.clone(),
                        min_word_len: tier.min_word_len(),
                    })
                } else {
                    Ok(vec![name.clone()])
                }
            })?
        }
        None => bank.category_names().map(String::from).collect(),
    };

    let pb = ProgressBar::new(config.rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<(String, RoundOutcome)> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));

            let category = categories
                .choose(&mut rng)
                .expect("at least one category")
                .clone();

            let mut letters: Vec<char> = ('a'..='z').collect();
            letters.shuffle(&mut rng);
            let mut input = ScriptedInput::new(letters.into_iter().map(Command::Guess));

            let mut session = Session::new(bank, rng);
            let outcome = session
                .play_round(&category, tier, &mut input, &mut SilentPresenter)
                .expect("category validated before simulation");

            pb.inc(1);
            (category, outcome)
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    // Sequential fold in round order; streaks depend on it.
    let mut stats = PlayerStats::new();
    let mut wins_by_category: HashMap<String, usize> = HashMap::new();

    for (category, outcome) in &outcomes {
        match outcome {
            RoundOutcome::Won { word, score, .. } => {
                stats.record_win(word, *score);
                *wins_by_category.entry(category.clone()).or_insert(0) += 1;
            }
            RoundOutcome::Lost { .. } => stats.record_loss(),
            RoundOutcome::Abandoned => unreachable!("scripted guesser never quits"),
        }
    }

    let wins = stats.games_won() as usize;
    Ok(SimulateResult {
        rounds: config.rounds,
        wins,
        losses: config.rounds - wins,
        total_score: stats.total_score(),
        average_score: if wins == 0 {
            0.0
        } else {
            stats.total_score() as f64 / wins as f64
        },
        best_streak: stats.best_streak(),
        wins_by_category,
        duration,
        rounds_per_second: config.rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Print the aggregate report
pub fn print_simulation_result(result: &SimulateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    let win_pct = if result.rounds == 0 {
        0.0
    } else {
        result.wins as f64 / result.rounds as f64 * 100.0
    };
    println!(
        "   Wins:             {} {}",
        result.wins,
        format!("({win_pct:.1}%)").green()
    );
    println!("   Losses:           {}", result.losses);
    println!("   Best streak:      {}", result.best_streak);

    println!("\n🏆 {}", "Scoring:".bright_cyan().bold());
    println!(
        "   Total score:      {}",
        result.total_score.to_string().bright_yellow().bold()
    );
    println!("   Average per win:  {:.1}", result.average_score);

    if !result.wins_by_category.is_empty() {
        println!("\n📈 {}", "Wins by category:".bright_cyan().bold());
        let mut rows: Vec<(&String, &usize)> = result.wins_by_category.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        let max = rows.iter().map(|&(_, &n)| n).max().unwrap_or(1).max(1);
        for (name, &count) in rows {
            let bar_len = count * 30 / max;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(30_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("   {name:<12} {bar} {count}");
        }
    }

    println!(
        "\n   Time taken:       {:.2}s ({:.0} rounds/s)",
        result.duration.as_secs_f64(),
        result.rounds_per_second
    );
}
