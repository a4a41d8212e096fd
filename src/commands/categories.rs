//! Category listing
//!
//! Shows each category with its word count and how many words each difficulty
//! tier can actually draw from, flagging combinations that cannot start a
//! round.

use crate::core::TIERS;
use crate::wordbank::WordBank;
use colored::Colorize;

/// Print the category/tier eligibility table
pub fn run_categories(bank: &WordBank) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD CATEGORIES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print!("\n   {:<14} {:>6}", "Category", "Words");
    for tier in TIERS {
        print!(" {:>8}", tier.name());
    }
    println!();

    for name in bank.category_names() {
        let words = bank.words_in(name).expect("iterating known categories");
        print!("   {name:<14} {:>6}", words.len());

        for tier in TIERS {
            let eligible = bank
                .eligible_count(name, tier)
                .expect("iterating known categories");
            if eligible == 0 {
                print!(" {:>8}", "none".red());
            } else {
                print!(" {eligible:>8}");
            }
        }
        println!();
    }

    println!(
        "\n   Per-tier columns count words long enough for that difficulty."
    );
}
