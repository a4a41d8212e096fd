//! Gallows - CLI
//!
//! Interactive hangman by default, plus self-play simulation and category
//! inspection subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gallows::{
    commands::{SimulateConfig, print_simulation_result, run_categories, run_play, run_simulation},
    core::Tier,
    wordbank::WordBank,
};
use rand::Rng;

#[derive(Parser)]
#[command(
    name = "gallows",
    about = "Terminal hangman with categories, difficulty tiers, and score tracking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for word selection and hint draws (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Self-play rounds with a scripted guesser; reports aggregate stats
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Restrict rounds to one category (default: random per round)
        #[arg(short, long)]
        category: Option<String>,

        /// Difficulty tier: Easy, Medium, or Hard
        #[arg(short, long, default_value = "Easy")]
        difficulty: String,
    },

    /// List categories and per-tier eligible word counts
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to interactive play when no subcommand is given.
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(cli.seed)?;
            Ok(())
        }
        Commands::Simulate {
            rounds,
            category,
            difficulty,
        } => run_simulate_command(rounds, category, &difficulty, cli.seed),
        Commands::Categories => {
            run_categories(&WordBank::new());
            Ok(())
        }
    }
}

fn run_simulate_command(
    rounds: usize,
    category: Option<String>,
    difficulty: &str,
    seed: Option<u64>,
) -> Result<()> {
    let tier = Tier::by_name(difficulty)
        .ok_or_else(|| anyhow::anyhow!("unknown difficulty '{difficulty}' (Easy/Medium/Hard)"))?;

    let bank = WordBank::new();
    let config = SimulateConfig {
        rounds,
        category,
        seed: seed.unwrap_or_else(|| rand::rng().random()),
    };

    println!(
        "Simulating {rounds} rounds at {} difficulty (seed {})...",
        tier.name(),
        config.seed
    );

    let result = run_simulation(&bank, tier, &config)?;
    print_simulation_result(&result);
    Ok(())
}
